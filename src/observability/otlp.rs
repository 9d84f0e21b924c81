//! OTLP JSON span serialization.
//!
//! Converts finished spans into OpenTelemetry Protocol JSON documents, one
//! complete `resourceSpans` batch per line, so the trace file can be fed to
//! standard OTLP tooling.

use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::Value as JsonValue;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Instrumentation scope name stamped on every batch.
const SCOPE_NAME: &str = "glyphgrid";

/// Formats a batch of spans as one OTLP JSON document.
pub fn format_batch(resource: &Resource, batch: &[SpanData]) -> JsonValue {
    let resource_attrs: Vec<JsonValue> = resource
        .iter()
        .map(|(key, value)| {
            serde_json::json!({
                "key": key.to_string(),
                "value": attribute_value(value),
            })
        })
        .collect();

    let spans: Vec<JsonValue> = batch.iter().map(span_json).collect();

    serde_json::json!({
        "resourceSpans": [{
            "resource": { "attributes": resource_attrs },
            "scopeSpans": [{
                "scope": { "name": SCOPE_NAME },
                "spans": spans,
            }]
        }]
    })
}

fn span_json(span: &SpanData) -> JsonValue {
    let (status_code, status_message) = status(&span.status);

    serde_json::json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": if span.parent_span_id == opentelemetry::trace::SpanId::INVALID {
            String::new()
        } else {
            format!("{:016x}", span.parent_span_id)
        },
        "name": span.name,
        "kind": kind(&span.span_kind),
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": attributes(&span.attributes),
        "events": events(span),
        "links": links(span),
        "status": {
            "code": status_code,
            "message": status_message,
        },
    })
}

/// Nanoseconds since the Unix epoch, as the decimal string OTLP requires.
fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_nanos()
        .to_string()
}

/// OTLP span kind code: internal 1, server 2, client 3, producer 4, consumer 5.
const fn kind(kind: &opentelemetry::trace::SpanKind) -> u8 {
    match kind {
        opentelemetry::trace::SpanKind::Internal => 1,
        opentelemetry::trace::SpanKind::Server => 2,
        opentelemetry::trace::SpanKind::Client => 3,
        opentelemetry::trace::SpanKind::Producer => 4,
        opentelemetry::trace::SpanKind::Consumer => 5,
    }
}

fn attributes(attributes: &[opentelemetry::KeyValue]) -> Vec<JsonValue> {
    attributes
        .iter()
        .map(|kv| {
            serde_json::json!({
                "key": kv.key.to_string(),
                "value": attribute_value(&kv.value),
            })
        })
        .collect()
}

/// Maps an attribute value onto its OTLP representation.
///
/// Integers become strings per the OTLP JSON encoding; arrays fall back to
/// their debug rendering rather than a typed list.
fn attribute_value(value: &opentelemetry::Value) -> JsonValue {
    use opentelemetry::Value;

    match value {
        Value::Bool(b) => serde_json::json!({ "boolValue": b }),
        Value::I64(i) => serde_json::json!({ "intValue": i.to_string() }),
        Value::F64(f) => serde_json::json!({ "doubleValue": f }),
        Value::String(s) => serde_json::json!({ "stringValue": s.to_string() }),
        Value::Array(_) => serde_json::json!({ "stringValue": format!("{value:?}") }),
    }
}

fn events(span: &SpanData) -> Vec<JsonValue> {
    span.events
        .iter()
        .map(|event| {
            serde_json::json!({
                "timeUnixNano": unix_nanos(event.timestamp),
                "name": event.name,
                "attributes": attributes(&event.attributes),
            })
        })
        .collect()
}

fn links(span: &SpanData) -> Vec<JsonValue> {
    span.links
        .iter()
        .map(|link| {
            serde_json::json!({
                "traceId": format!("{:032x}", link.span_context.trace_id()),
                "spanId": format!("{:016x}", link.span_context.span_id()),
                "attributes": attributes(&link.attributes),
            })
        })
        .collect()
}

/// OTLP status code and message: unset 0, ok 1, error 2.
fn status(status: &opentelemetry::trace::Status) -> (u8, String) {
    match status {
        opentelemetry::trace::Status::Unset => (0, String::new()),
        opentelemetry::trace::Status::Ok => (1, String::new()),
        opentelemetry::trace::Status::Error { description } => (2, description.to_string()),
    }
}
