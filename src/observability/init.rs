//! Tracing initialization and subscriber setup.

use super::export::{create_tracer_provider, SCOPE_NAME};
use crate::infrastructure::paths::{get_data_dir, trace_file_path};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LEVEL: &str = "info";

/// Builds the span filter from the configured `trace_level`.
///
/// Accepts any `EnvFilter` directive (`debug`, `zwidgets=trace`, ...). Missing or
/// unparsable directives fall back to `info`.
///
/// ```
/// use tracing_subscriber::filter::LevelFilter;
/// use zwidgets::observability::level_filter;
/// use zwidgets::Config;
///
/// let config = Config { trace_level: Some("debug".into()), ..Config::default() };
/// assert_eq!(level_filter(&config).max_level_hint(), Some(LevelFilter::DEBUG));
/// assert_eq!(level_filter(&Config::default()).max_level_hint(), Some(LevelFilter::INFO));
/// ```
#[must_use]
pub fn level_filter(config: &Config) -> EnvFilter {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Installs the global subscriber exporting spans to the trace file.
///
/// Observability is optional: if the data directory cannot be created or a
/// subscriber is already installed, this returns without tracing.
pub fn init_tracing(config: &Config) {
    if std::fs::create_dir_all(get_data_dir()).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SCOPE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = create_tracer_provider(trace_file_path(), resource);
    let tracer = provider.tracer(SCOPE_NAME);

    let _ = tracing_subscriber::registry()
        .with(level_filter(config))
        .with(OpenTelemetryLayer::new(tracer))
        .try_init();
}
