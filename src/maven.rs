//! Command-line arguments for the Maven invocation that follows compilation

use crate::config::ShimConfig;
use std::path::Path;

/// Arguments pointing Maven at the project and, when one was written, at the
/// mirror settings document. Extra build options come last, in order.
pub fn maven_args(config: &ShimConfig, settings_path: Option<&Path>) -> Vec<String> {
    let mut args = Vec::new();

    if let Some(path) = settings_path {
        args.push("-s".to_string());
        args.push(path.display().to_string());
    }

    args.push("-f".to_string());
    args.push(config.pom_path().display().to_string());
    args.extend(config.build_options.iter().cloned());

    args
}
