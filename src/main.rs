use std::path::PathBuf;

use clap::Parser;
use miette::{miette, Context, IntoDiagnostic, Result};
use text_summarizer_utils::{
    configuration::utilities::get_default_configuration_file_path,
    ensure_directories,
    get_size,
    read_config,
    ArtifactsLayout,
};
use tracing::info;

use crate::{
    cli::{CLIArgs, Command},
    logging::initialize_tracing,
};

mod cli;
mod logging;


const LOG_FILE_NAME: &str = "text-summarizer-utils.log";


fn configuration_path_or_default(path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None => get_default_configuration_file_path()
            .wrap_err("Could not determine the default configuration file path."),
    }
}


fn show_config(configuration_file_path: Option<PathBuf>, key: Option<String>) -> Result<()> {
    let configuration_file_path = configuration_path_or_default(configuration_file_path)?;

    let configuration = read_config(&configuration_file_path).wrap_err_with(|| {
        miette!(
            "Failed to load configuration file: {}.",
            configuration_file_path.display()
        )
    })?;

    let rendered = match key.as_deref() {
        Some(key) => {
            let value = configuration
                .lookup(key)
                .ok_or_else(|| miette!("Configuration has no value at `{key}`."))?;
            serde_yaml::to_string(value)
        }
        None => serde_yaml::to_string(configuration.as_mapping()),
    }
    .into_diagnostic()
    .wrap_err("Failed to render configuration as YAML.")?;

    print!("{rendered}");
    Ok(())
}


fn prepare_artifacts(configuration_file_path: Option<PathBuf>) -> Result<()> {
    let configuration_file_path = configuration_path_or_default(configuration_file_path)?;

    let layout = ArtifactsLayout::load_from_path(&configuration_file_path)
        .wrap_err("Failed to load artifacts layout.")?;

    info!(
        "Preparing {} stage directories under {}.",
        layout.stage_directories.len(),
        layout.artifacts_root.display()
    );

    layout
        .ensure_all(true)
        .wrap_err("Failed to create artifact directories.")?;

    Ok(())
}


fn main() -> Result<()> {
    let cli_args = CLIArgs::parse();

    let logging_raii_guard = initialize_tracing(
        cli_args.logging.console_output_level_filter()?,
        cli_args.logging.log_file_output_level_filter()?,
        cli_args.logging.log_file_output_directory.as_deref(),
        LOG_FILE_NAME,
    )
    .wrap_err("Failed to initialize tracing.")?;

    match cli_args.command {
        Command::ShowConfig {
            configuration_file_path,
            key,
        } => show_config(configuration_file_path, key)?,
        Command::EnsureDirs { quiet, paths } => {
            ensure_directories(&paths, !quiet).wrap_err("Failed to create directories.")?
        }
        Command::Size { path } => {
            let size = get_size(&path).wrap_err_with(|| {
                miette!("Failed to determine size of {}.", path.display())
            })?;
            println!("{size}");
        }
        Command::PrepareArtifacts {
            configuration_file_path,
        } => prepare_artifacts(configuration_file_path)?,
    }


    drop(logging_raii_guard);
    Ok(())
}
