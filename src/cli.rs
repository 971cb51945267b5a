//! Command-line interface definitions for the utilities binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use miette::{miette, Context, IntoDiagnostic, Result};
use tracing_subscriber::EnvFilter;



/// Command-line arguments.
#[derive(Parser)]
#[command(
    name = "text-summarizer-utils",
    author,
    about = "Configuration and filesystem helpers for the text summarization pipeline.",
    version
)]
pub struct CLIArgs {
    #[command(flatten)]
    pub logging: LoggingArgs,

    #[command(subcommand)]
    pub command: Command,
}


#[derive(Args)]
pub struct LoggingArgs {
    #[arg(
        long = "console-log-level",
        global = true,
        default_value = "info",
        help = "Console log filter, in `tracing_subscriber::EnvFilter` syntax."
    )]
    pub console_output_level_filter: String,

    #[arg(
        long = "log-file-directory",
        global = true,
        help = "If specified, logs are also written to text-summarizer-utils.log in this directory."
    )]
    pub log_file_output_directory: Option<PathBuf>,

    #[arg(
        long = "log-file-level",
        global = true,
        default_value = "debug",
        help = "Log file filter, in `tracing_subscriber::EnvFilter` syntax."
    )]
    pub log_file_output_level_filter: String,
}

impl LoggingArgs {
    pub fn console_output_level_filter(&self) -> Result<EnvFilter> {
        parse_level_filter(&self.console_output_level_filter, "--console-log-level")
    }

    pub fn log_file_output_level_filter(&self) -> Result<EnvFilter> {
        parse_level_filter(&self.log_file_output_level_filter, "--log-file-level")
    }
}


#[derive(Subcommand)]
pub enum Command {
    /// Load a YAML configuration file and print it (or a single value).
    ShowConfig {
        /// This is the path to the configuration file to use.
        /// If unspecified, this defaults to `./config/config.yaml`.
        #[arg(short = 'c', long = "configuration-file-path")]
        configuration_file_path: Option<PathBuf>,

        #[arg(
            short = 'k',
            long = "key",
            help = "Dotted path of a single value to print, e.g. data_ingestion.root_dir."
        )]
        key: Option<String>,
    },

    /// Create directories (and their missing parents).
    EnsureDirs {
        #[arg(short = 'q', long = "quiet", help = "Do not log each directory.")]
        quiet: bool,

        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Print the approximate size of a file in kilobytes.
    Size { path: PathBuf },

    /// Create the artifacts root and every stage's root_dir listed in the configuration.
    PrepareArtifacts {
        #[arg(short = 'c', long = "configuration-file-path")]
        configuration_file_path: Option<PathBuf>,
    },
}


fn parse_level_filter(value: &str, argument_name: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(value)
        .into_diagnostic()
        .wrap_err_with(|| miette!("Failed to parse {argument_name}: {value}"))
}
