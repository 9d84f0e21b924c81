//! Tracing with file-based OTLP export.
//!
//! The plugin runs inside Zellij's WASM sandbox where stderr is invisible and
//! no network collector exists, so spans are exported to a rotating JSON file
//! under the plugin's data directory instead:
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → OTLP JSON file
//! ```
//!
//! The trace level comes from `RUST_LOG` when set, otherwise from the
//! `trace_level` plugin configuration (default `"info"`). Initialization is
//! best-effort: if the data directory cannot be created, the plugin simply
//! runs without tracing.
//!
//! # Modules
//!
//! - [`export`]: The file-backed span exporter and tracer provider
//! - [`otlp`]: OTLP JSON serialization of finished spans
//! - [`rotate`]: Size-rotated trace file writer

mod export;
mod otlp;
mod rotate;

use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Trace file name inside the plugin data directory.
const TRACE_FILE: &str = "glyphgrid-otlp.json";

/// Initializes the tracing subscriber with file-based OTLP export.
///
/// Safe to call more than once; only the first successful call installs a
/// subscriber. Failures (unwritable data directory, subscriber already set)
/// are swallowed; observability never blocks the viewer.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        "glyphgrid",
    )]);

    let provider = export::tracer_provider(data_dir.join(TRACE_FILE), resource);
    let tracer = provider.tracer("glyphgrid");

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(OpenTelemetryLayer::new(tracer));

    let _ = subscriber.try_init();
}
