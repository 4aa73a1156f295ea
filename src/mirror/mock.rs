//! Scripted probe for tests

use super::probe::{MirrorProbe, ProbeStatus};
use std::cell::RefCell;
use std::collections::HashMap;

/// Answers probes from a fixed table and records every URL it was asked about.
///
/// URLs missing from the table answer with `default_status` (200 unless changed).
pub struct MockProbe {
    statuses: HashMap<String, ProbeStatus>,
    default_status: ProbeStatus,
    calls: RefCell<Vec<String>>,
}

impl MockProbe {
    pub fn new() -> Self {
        Self {
            statuses: HashMap::new(),
            default_status: ProbeStatus::Http(200),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_status(mut self, url: &str, code: u16) -> Self {
        self.statuses
            .insert(url.to_string(), ProbeStatus::Http(code));
        self
    }

    pub fn with_failure(mut self, url: &str, reason: &str) -> Self {
        self.statuses
            .insert(url.to_string(), ProbeStatus::Failed(reason.to_string()));
        self
    }

    pub fn with_default(mut self, status: ProbeStatus) -> Self {
        self.default_status = status;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Default for MockProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl MirrorProbe for MockProbe {
    fn probe(&self, url: &str) -> ProbeStatus {
        self.calls.borrow_mut().push(url.to_string());
        self.statuses
            .get(url)
            .cloned()
            .unwrap_or_else(|| self.default_status.clone())
    }
}
