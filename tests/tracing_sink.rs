//! `TracingSink` emits records as structured tracing events.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use auto_log::observability::sink::TARGET;
use auto_log::{AutoLog, Invocation, LoggingInterceptor, MethodSignature, MethodTable};
use serde_json::json;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

mod common;

use common::AppError;

#[derive(Debug, Clone)]
struct Captured {
    level: Level,
    target: String,
    fields: BTreeMap<String, String>,
}

#[derive(Clone, Default)]
struct CaptureLayer {
    events: Arc<Mutex<Vec<Captured>>>,
}

#[derive(Default)]
struct FieldVisitor {
    fields: BTreeMap<String, String>,
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields.insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.fields
            .insert(field.name().to_string(), format!("{:?}", value));
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.events.lock().unwrap().push(Captured {
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            fields: visitor.fields,
        });
    }
}

fn table() -> MethodTable<AppError> {
    MethodTable::new("Ledger")
        .method("post", &["u64"], Some(AutoLog::new().cost_time(false)), |args| {
            Ok(json!({"posted": args[0]}))
        })
        .method("void", &["u64"], Some(AutoLog::new().param(false)), |_| {
            Err(AppError::with_cause("void rejected", "entry locked"))
        })
}

fn capture<F: FnOnce()>(f: F) -> Vec<Captured> {
    let layer = CaptureLayer::default();
    let events = layer.events.clone();
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    let captured = events.lock().unwrap().clone();
    captured
        .into_iter()
        .filter(|e| e.target == TARGET)
        .collect()
}

#[test]
fn test_info_records_carry_fields() {
    let ledger = table();
    let events = capture(|| {
        LoggingInterceptor::new()
            .invoke(Invocation::new(
                MethodSignature::new("Ledger", "post", ["u64"]),
                &ledger,
                vec![json!(42)],
            ))
            .unwrap();
    });

    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.level == Level::INFO));

    assert_eq!(events[0].fields["message"], "Ledger::post(u64) param is [42]");
    assert_eq!(events[0].fields["method"], "Ledger::post(u64)");
    assert_eq!(events[0].fields["params"], "[42]");

    assert_eq!(events[1].fields["message"], "Ledger::post(u64) result is {posted=42}");
    assert_eq!(events[1].fields["result"], "{posted=42}");
}

#[test]
fn test_error_record_carries_cause_chain() {
    let ledger = table();
    let events = capture(|| {
        let err = LoggingInterceptor::new()
            .invoke(Invocation::new(
                MethodSignature::new("Ledger", "void", ["u64"]),
                &ledger,
                vec![json!(7)],
            ))
            .unwrap_err();
        assert_eq!(err.to_string(), "void rejected");
    });

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::ERROR);
    assert_eq!(events[0].fields["message"], "Ledger::void(u64) meet ex");
    assert_eq!(events[0].fields["error"], "void rejected");
    assert!(events[0].fields["causes"].contains("entry locked"));
}
