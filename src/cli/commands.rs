use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Maven build shim that compiles a mirror spec into a settings document
#[derive(Parser, Debug)]
#[command(
    name = "mirrorshim",
    about = "Compile Maven mirror specifications into repository settings",
    version,
    long_about = "mirrorshim turns a `mirrorOf|url;mirrorOf|url` mirror specification into a \
                  Maven settings document, probing every mirror for reachability first. \
                  Values not given on the command line are read from MIRRORSHIM_* \
                  environment variables."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Compile a mirror spec into a settings document",
        long_about = "Parses the mirror spec, probes every mirror, and writes the settings \
                      document when at least one mirror is accepted.\n\n\
                      Examples:\n  \
                      mirrorshim compile --mirrors 'central|https://repo.example.com/maven2'\n  \
                      mirrorshim compile --allow-fallback --output ./settings.xml\n  \
                      MIRRORSHIM_MIRRORS='*|https://nexus/m2' mirrorshim compile --format json"
    )]
    Compile(CompileArgs),

    #[command(
        about = "Probe a single mirror URL",
        long_about = "Sends one reachability probe and reports the status. Exits with 0 only \
                      when the mirror answers HTTP 200.\n\n\
                      Examples:\n  \
                      mirrorshim probe https://repo.example.com/maven2"
    )]
    Probe(ProbeArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct CompileArgs {
    #[arg(
        short = 'm',
        long,
        value_name = "SPEC",
        help = "Mirror spec, e.g. 'central|https://a;jboss|https://b' (overrides MIRRORSHIM_MIRRORS)"
    )]
    pub mirrors: Option<String>,

    #[arg(long, help = "Drop unreachable mirrors instead of failing")]
    pub allow_fallback: bool,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Settings document path (overrides MIRRORSHIM_SETTINGS_PATH)"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short = 'C',
        long,
        value_name = "DIR",
        help = "Project directory (overrides MIRRORSHIM_CONTEXT_DIR)"
    )]
    pub context: Option<PathBuf>,

    #[arg(
        long,
        value_name = "SECONDS",
        help = "Probe timeout in seconds (overrides MIRRORSHIM_PROBE_TIMEOUT)"
    )]
    pub timeout: Option<u64>,

    #[arg(short = 'f', long, value_enum, default_value = "human", help = "Output format")]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct ProbeArgs {
    #[arg(value_name = "URL", help = "Mirror URL to probe")]
    pub url: String,

    #[arg(long, value_name = "SECONDS", help = "Probe timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(short = 'f', long, value_enum, default_value = "human", help = "Output format")]
    pub format: OutputFormatArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Human,
    Json,
}
