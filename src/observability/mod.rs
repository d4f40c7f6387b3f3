//! OpenTelemetry tracing with file-based OTLP JSON export.
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → RotatingWriter
//! ```
//!
//! Traces land in `~/.local/share/zellij/zwidgets/zwidgets-otlp.json` (the
//! sandbox's `/host/.local/share/zellij/zwidgets/`), one OTLP document per line,
//! rotated at 10 MB with three backups.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup from the plugin configuration
//! - [`export`]: OTLP JSON span exporter and tracer provider
//! - [`file_writer`]: Size-rotated line writer

pub mod export;
pub mod file_writer;
mod init;

pub use init::{init_tracing, level_filter};
