use anyhow::Result;
use tracing::{debug, error, info};

use crate::cli::commands::{CompileArgs, ProbeArgs};
use crate::cli::output::{CompileReport, OutputFormatter, ProbeReport};
use crate::config::{ConfigError, ShimConfig};
use crate::maven::maven_args;
use crate::mirror::{HttpProbe, MirrorPolicy, MirrorPolicyCompiler, MirrorProbe};

/// Compiles the configured mirror spec, writes the settings document if any
/// mirror was accepted, and reports the resulting build arguments.
pub fn run_compile<P: MirrorProbe>(config: &ShimConfig, probe: P) -> Result<CompileReport> {
    let compiler = MirrorPolicyCompiler::new(probe);
    let compilation = compiler.compile(config.mirror_spec.as_deref(), config.allow_fallback)?;

    let (settings_path, mirrors) = match &compilation.policy {
        MirrorPolicy::Mirrors(document) => {
            document.write_to(&config.settings_path)?;
            (
                Some(config.settings_path.clone()),
                document.mirrors().to_vec(),
            )
        }
        MirrorPolicy::Default => {
            info!("No mirror settings written, using default repository resolution");
            (None, Vec::new())
        }
    };

    let maven_args = maven_args(config, settings_path.as_deref());

    Ok(CompileReport {
        settings_path,
        mirrors,
        dropped: compilation.dropped,
        maven_args,
    })
}

/// Environment config with command-line overrides applied.
///
/// `log_level` is the level selected by the global logging flags, if any.
pub fn load_config(args: &CompileArgs, log_level: Option<&str>) -> Result<ShimConfig, ConfigError> {
    let mut config = ShimConfig::from_env()?;

    if let Some(level) = log_level {
        config.log_level = level.to_lowercase();
    }

    if let Some(mirrors) = &args.mirrors {
        config.mirror_spec = Some(mirrors.clone());
    }
    if args.allow_fallback {
        config.allow_fallback = true;
    }
    if let Some(output) = &args.output {
        config.settings_path = output.clone();
    }
    if let Some(context) = &args.context {
        config.context_dir = context.clone();
    }
    if let Some(timeout) = args.timeout {
        config.probe_timeout_secs = timeout;
    }

    config.validate()?;
    Ok(config)
}

pub fn handle_compile(args: &CompileArgs, log_level: Option<&str>) -> i32 {
    let config = match load_config(args, log_level) {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            return 1;
        }
    };
    debug!(?config, "Loaded configuration");

    let probe = match HttpProbe::new(config.probe_timeout()) {
        Ok(probe) => probe,
        Err(e) => {
            error!("{:#}", e);
            return 1;
        }
    };

    let report = match run_compile(&config, probe) {
        Ok(report) => report,
        Err(e) => {
            error!("{:#}", e);
            return 1;
        }
    };

    match OutputFormatter::new(args.format.into()).format_compile(&report) {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(e) => {
            error!("Failed to format output: {:#}", e);
            1
        }
    }
}

pub fn handle_probe(args: &ProbeArgs) -> i32 {
    let timeout_secs = match args.timeout {
        Some(secs) => secs,
        None => match ShimConfig::from_env() {
            Ok(config) => config.probe_timeout_secs,
            Err(e) => {
                error!("Configuration error: {}", e);
                return 1;
            }
        },
    };

    let config = ShimConfig {
        probe_timeout_secs: timeout_secs,
        ..Default::default()
    };
    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return 1;
    }

    let probe = match HttpProbe::new(config.probe_timeout()) {
        Ok(probe) => probe,
        Err(e) => {
            error!("{:#}", e);
            return 1;
        }
    };

    let status = probe.probe(&args.url);
    let report = ProbeReport {
        url: args.url.clone(),
        reachable: status.is_reachable(),
        status,
    };

    match OutputFormatter::new(args.format.into()).format_probe(&report) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("Failed to format output: {:#}", e);
            return 1;
        }
    }

    if report.reachable {
        0
    } else {
        1
    }
}
