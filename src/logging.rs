use std::path::Path;

use miette::{Context, IntoDiagnostic, Result};
use text_summarizer_utils::ensure_directories;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
    Layer,
};


/// Initializes the global `tracing` subscriber.
///
/// Events always go to stderr, filtered by `console_output_level_filter`.
/// If `log_file_output_directory` is given, events are additionally written
/// (without ANSI colours) to `log_file_name` inside it, filtered by
/// `log_file_output_level_filter`.
///
/// The returned guard must be kept alive until the program exits,
/// otherwise buffered log lines may be lost.
pub fn initialize_tracing(
    console_output_level_filter: EnvFilter,
    log_file_output_level_filter: EnvFilter,
    log_file_output_directory: Option<&Path>,
    log_file_name: &str,
) -> Result<Option<WorkerGuard>> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(console_output_level_filter);

    let (file_layer, guard) = match log_file_output_directory {
        Some(directory) => {
            ensure_directories([directory], false)
                .wrap_err("Failed to create log file output directory.")?;

            let file_appender = tracing_appender::rolling::never(directory, log_file_name);
            let (non_blocking_appender, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking_appender)
                .with_filter(log_file_output_level_filter);

            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .into_diagnostic()
        .wrap_err("Failed to install tracing subscriber.")?;

    Ok(guard)
}
