//! File-based OpenTelemetry span export in OTLP JSON.
//!
//! [`FileSpanExporter`] serializes each exported batch as one OTLP JSON
//! document (`resourceSpans` → `scopeSpans` → `spans`) and appends it as a
//! single line to a [`RotatingWriter`].

use super::file_writer::RotatingWriter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, SpanKind, Status, TraceError};
use opentelemetry::{Array, KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use serde::Serialize;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Instrumentation scope name written into every document.
pub const SCOPE_NAME: &str = "zwidgets";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OtlpDocument {
    resource_spans: Vec<ResourceSpans>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResourceSpans {
    resource: OtlpResource,
    scope_spans: Vec<ScopeSpans>,
}

#[derive(Debug, Serialize)]
struct OtlpResource {
    attributes: Vec<OtlpKeyValue>,
}

#[derive(Debug, Serialize)]
struct ScopeSpans {
    scope: OtlpScope,
    spans: Vec<OtlpSpan>,
}

#[derive(Debug, Serialize)]
struct OtlpScope {
    name: &'static str,
    version: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OtlpSpan {
    trace_id: String,
    span_id: String,
    /// Empty for root spans.
    parent_span_id: String,
    name: String,
    kind: u8,
    start_time_unix_nano: String,
    end_time_unix_nano: String,
    attributes: Vec<OtlpKeyValue>,
    events: Vec<OtlpEvent>,
    links: Vec<OtlpLink>,
    status: OtlpStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OtlpEvent {
    time_unix_nano: String,
    name: String,
    attributes: Vec<OtlpKeyValue>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OtlpLink {
    trace_id: String,
    span_id: String,
    attributes: Vec<OtlpKeyValue>,
}

#[derive(Debug, Serialize)]
struct OtlpStatus {
    code: u8,
    message: String,
}

#[derive(Debug, Serialize)]
struct OtlpKeyValue {
    key: String,
    value: AnyValue,
}

/// OTLP `AnyValue`. 64-bit integers travel as strings.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
enum AnyValue {
    BoolValue(bool),
    IntValue(String),
    DoubleValue(f64),
    StringValue(String),
    ArrayValue { values: Vec<AnyValue> },
}

impl From<&Value> for AnyValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Bool(b) => Self::BoolValue(*b),
            Value::I64(i) => Self::IntValue(i.to_string()),
            Value::F64(f) => Self::DoubleValue(*f),
            Value::String(s) => Self::StringValue(s.to_string()),
            Value::Array(array) => Self::ArrayValue {
                values: array_values(array),
            },
        }
    }
}

fn array_values(array: &Array) -> Vec<AnyValue> {
    match array {
        Array::Bool(items) => items.iter().copied().map(AnyValue::BoolValue).collect(),
        Array::I64(items) => items.iter().map(|i| AnyValue::IntValue(i.to_string())).collect(),
        Array::F64(items) => items.iter().copied().map(AnyValue::DoubleValue).collect(),
        Array::String(items) => items.iter().map(|s| AnyValue::StringValue(s.to_string())).collect(),
    }
}

fn key_values<'a>(attributes: impl IntoIterator<Item = &'a KeyValue>) -> Vec<OtlpKeyValue> {
    attributes
        .into_iter()
        .map(|kv| OtlpKeyValue {
            key: kv.key.to_string(),
            value: AnyValue::from(&kv.value),
        })
        .collect()
}

/// Nanoseconds since the Unix epoch as a decimal string; zero before the epoch.
fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos())
        .to_string()
}

const fn kind_code(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn status(status: &Status) -> OtlpStatus {
    let (code, message) = match status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    };
    OtlpStatus { code, message }
}

impl From<&SpanData> for OtlpSpan {
    fn from(span: &SpanData) -> Self {
        let parent_span_id = if span.parent_span_id == SpanId::INVALID {
            String::new()
        } else {
            format!("{:016x}", span.parent_span_id)
        };

        Self {
            trace_id: format!("{:032x}", span.span_context.trace_id()),
            span_id: format!("{:016x}", span.span_context.span_id()),
            parent_span_id,
            name: span.name.to_string(),
            kind: kind_code(&span.span_kind),
            start_time_unix_nano: unix_nanos(span.start_time),
            end_time_unix_nano: unix_nanos(span.end_time),
            attributes: key_values(&span.attributes),
            events: span
                .events
                .iter()
                .map(|event| OtlpEvent {
                    time_unix_nano: unix_nanos(event.timestamp),
                    name: event.name.to_string(),
                    attributes: key_values(&event.attributes),
                })
                .collect(),
            links: span
                .links
                .iter()
                .map(|link| OtlpLink {
                    trace_id: format!("{:032x}", link.span_context.trace_id()),
                    span_id: format!("{:016x}", link.span_context.span_id()),
                    attributes: key_values(&link.attributes),
                })
                .collect(),
            status: status(&span.status),
        }
    }
}

fn document(resource: &Resource, batch: &[SpanData]) -> OtlpDocument {
    let attributes = resource
        .iter()
        .map(|(key, value)| OtlpKeyValue {
            key: key.to_string(),
            value: AnyValue::from(value),
        })
        .collect();

    OtlpDocument {
        resource_spans: vec![ResourceSpans {
            resource: OtlpResource { attributes },
            scope_spans: vec![ScopeSpans {
                scope: OtlpScope {
                    name: SCOPE_NAME,
                    version: env!("CARGO_PKG_VERSION"),
                },
                spans: batch.iter().map(OtlpSpan::from).collect(),
            }],
        }],
    }
}

/// Span exporter appending one OTLP JSON document per batch to a file.
#[derive(Debug)]
pub struct FileSpanExporter {
    writer: RotatingWriter,
    resource: Resource,
    is_shutdown: bool,
}

impl FileSpanExporter {
    #[must_use]
    pub fn new(writer: RotatingWriter, resource: Resource) -> Self {
        Self {
            writer,
            resource,
            is_shutdown: false,
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.is_shutdown {
            return Err(TraceError::from("exporter is shut down"));
        }
        let line = serde_json::to_string(&document(&self.resource, batch))
            .map_err(|e| TraceError::from(e.to_string()))?;
        self.writer
            .write_line(&line)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        Box::pin(std::future::ready(self.write_batch(&batch)))
    }

    fn shutdown(&mut self) {
        self.is_shutdown = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

/// Builds a tracer provider exporting every finished span to `file_path`.
///
/// Spans are exported synchronously as they end; the plugin runs on a single
/// thread without an async runtime for a batch processor.
#[must_use]
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter::new(RotatingWriter::new(file_path), resource.clone());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn integer_attributes_are_strings() {
        assert_eq!(AnyValue::from(&Value::I64(42)), AnyValue::IntValue("42".into()));
        let json = serde_json::to_string(&AnyValue::from(&Value::from(true))).unwrap();
        assert_eq!(json, r#"{"boolValue":true}"#);
    }

    #[test]
    fn arrays_keep_their_elements() {
        let value = Value::Array(Array::I64(vec![1, 2]));
        let json = serde_json::to_string(&AnyValue::from(&value)).unwrap();
        assert_eq!(json, r#"{"arrayValue":{"values":[{"intValue":"1"},{"intValue":"2"}]}}"#);
    }

    #[test]
    fn timestamps_before_epoch_clamp_to_zero() {
        assert_eq!(unix_nanos(UNIX_EPOCH + Duration::from_nanos(1500)), "1500");
        assert_eq!(unix_nanos(UNIX_EPOCH - Duration::from_secs(1)), "0");
    }

    #[test]
    fn empty_batch_document_carries_resource_and_scope() {
        let resource = Resource::new(vec![KeyValue::new("service.name", "zwidgets")]);
        let json = serde_json::to_value(document(&resource, &[])).unwrap();

        let resource_spans = &json["resourceSpans"][0];
        let has_service_name = resource_spans["resource"]["attributes"]
            .as_array()
            .unwrap()
            .iter()
            .any(|kv| kv["key"] == "service.name" && kv["value"]["stringValue"] == "zwidgets");
        assert!(has_service_name);
        assert_eq!(resource_spans["scopeSpans"][0]["scope"]["name"], SCOPE_NAME);
        assert!(resource_spans["scopeSpans"][0]["spans"].as_array().unwrap().is_empty());
    }

    #[test]
    fn shut_down_exporter_refuses_batches() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.json");
        let mut exporter = FileSpanExporter::new(RotatingWriter::new(path.clone()), Resource::empty());

        assert!(exporter.write_batch(&[]).is_ok());
        exporter.shutdown();
        assert!(exporter.write_batch(&[]).is_err());
        assert_eq!(std::fs::read_to_string(path).unwrap().lines().count(), 1);
    }
}
