use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_sdk::logs::SdkLoggerProvider;
use tracing_appender::{
    non_blocking,
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, Layer, filter::Directive, fmt, prelude::*};

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|val| val == "true" || val == "1")
        .unwrap_or(false)
}

fn off(target: &str) -> Option<Directive> {
    format!("{target}=off").parse().ok()
}

/// Installs the global subscriber: pretty console output filtered by `RUST_LOG`,
/// an optional daily JSON file (`ENABLE_FILE_LOG`) and the OpenTelemetry log bridge.
///
/// The returned guard flushes the file writer when dropped; keep it alive for the
/// lifetime of the process.
pub fn init_logger(sdk_logger_provider: &SdkLoggerProvider, component: &str) -> Option<WorkerGuard> {
    let is_dev = env_flag("DEV_MODE");
    let enable_file = env_flag("ENABLE_FILE_LOG");

    let default_console = if is_dev { "info" } else { "warn" };
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_console));

    let console_layer = fmt::layer()
        .pretty()
        .with_thread_names(true)
        .with_ansi(true)
        .with_filter(console_filter);

    let mut otel_filter = EnvFilter::new("info");
    for target in ["hyper", "opentelemetry", "tonic", "h2", "sqlx"] {
        if let Some(directive) = off(target) {
            otel_filter = otel_filter.add_directive(directive);
        }
    }

    let otel_layer = OpenTelemetryTracingBridge::new(sdk_logger_provider).with_filter(otel_filter);

    let (file_layer, guard) = if enable_file {
        let log_dir = if is_dev { "./logs" } else { "/var/log/app" };
        let file_appender =
            RollingFileAppender::new(Rotation::DAILY, log_dir, format!("storefront_{component}.log"));
        let (file_writer, guard) = non_blocking(file_appender);

        let layer = fmt::layer()
            .with_writer(file_writer)
            .with_ansi(false)
            .json()
            .with_filter(EnvFilter::new("info"));

        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .with(otel_layer)
        .init();

    guard
}
