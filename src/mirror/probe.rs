//! Reachability probes for mirror URLs
//!
//! A probe issues one request and reports what happened. It never retries;
//! the compiler decides what an unsuccessful status means.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Outcome of a single reachability probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ProbeStatus {
    /// The server answered with this HTTP status code
    Http(u16),
    /// No HTTP status was obtained (connection refused, timeout, bad URL)
    Failed(String),
}

impl ProbeStatus {
    /// Only a plain 200 counts; redirects and other 2xx codes do not.
    pub fn is_reachable(&self) -> bool {
        matches!(self, ProbeStatus::Http(200))
    }
}

impl fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeStatus::Http(code) => write!(f, "HTTP {}", code),
            ProbeStatus::Failed(reason) => write!(f, "request failed ({})", reason),
        }
    }
}

pub trait MirrorProbe {
    fn probe(&self, url: &str) -> ProbeStatus;
}

/// Blocking HTTP GET probe; the response body is never read
pub struct HttpProbe {
    client: reqwest::blocking::Client,
}

impl HttpProbe {
    pub fn new(timeout: Duration) -> Result<Self> {
        // The mirror URL itself must answer 200; a redirect is reported as-is.
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client for mirror probes")?;

        Ok(Self { client })
    }
}

impl MirrorProbe for HttpProbe {
    fn probe(&self, url: &str) -> ProbeStatus {
        debug!(url, "Probing mirror");

        match self.client.get(url).send() {
            Ok(response) => ProbeStatus::Http(response.status().as_u16()),
            Err(e) if e.is_timeout() => ProbeStatus::Failed("timed out".to_string()),
            Err(e) => ProbeStatus::Failed(e.to_string()),
        }
    }
}
