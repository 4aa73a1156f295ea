pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CliArgs, Commands, CompileArgs, OutputFormatArg, ProbeArgs};
pub use output::{CompileReport, OutputFormat, OutputFormatter, ProbeReport};
