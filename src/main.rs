use mirrorshim::cli::commands::{CliArgs, Commands};
use mirrorshim::cli::handlers::{handle_compile, handle_probe};
use mirrorshim::util::{init_logging, parse_level, LoggingConfig};
use mirrorshim::VERSION;

use clap::Parser;
use std::env;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("mirrorshim v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Compile(compile_args) => {
            handle_compile(compile_args, flag_log_level(&args).as_deref())
        }
        Commands::Probe(probe_args) => handle_probe(probe_args),
    };

    std::process::exit(exit_code);
}

/// Log level chosen on the command line, overriding `MIRRORSHIM_LOG_LEVEL`
fn flag_log_level(args: &CliArgs) -> Option<String> {
    if let Some(level_str) = &args.log_level {
        Some(level_str.to_lowercase())
    } else if args.verbose {
        Some("debug".to_string())
    } else if args.quiet {
        Some("error".to_string())
    } else {
        None
    }
}

fn init_logging_from_args(args: &CliArgs) {
    let level = if let Some(level_str) = &args.log_level {
        parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        let level_str = env::var("MIRRORSHIM_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        parse_level(&level_str)
    };

    init_logging(LoggingConfig::from_env(level));
}
