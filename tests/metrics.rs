//! Metrics recorded by the interceptor, captured through a local recorder.

use std::sync::Mutex;

use auto_log::{AutoLog, Invocation, LoggingInterceptor, MethodSignature, MethodTable};
use metrics::{Counter, Gauge, Histogram, Key, KeyName, Metadata, Recorder, SharedString, Unit};
use serde_json::json;

mod common;

use common::{AppError, RecordingSink};

/// Keeps the name and labels of every metric handle requested.
#[derive(Default)]
struct CapturingRecorder {
    registered: Mutex<Vec<(String, Vec<(String, String)>)>>,
}

impl CapturingRecorder {
    fn capture(&self, key: &Key) {
        let labels = key
            .labels()
            .map(|label| (label.key().to_string(), label.value().to_string()))
            .collect();
        self.registered
            .lock()
            .unwrap()
            .push((key.name().to_string(), labels));
    }

    fn named(&self, name: &str) -> Vec<Vec<(String, String)>> {
        self.registered
            .lock()
            .unwrap()
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, labels)| labels.clone())
            .collect()
    }

    fn is_empty(&self) -> bool {
        self.registered.lock().unwrap().is_empty()
    }
}

impl Recorder for CapturingRecorder {
    fn describe_counter(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
    fn describe_gauge(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
    fn describe_histogram(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

    fn register_counter(&self, key: &Key, _: &Metadata<'_>) -> Counter {
        self.capture(key);
        Counter::noop()
    }

    fn register_gauge(&self, key: &Key, _: &Metadata<'_>) -> Gauge {
        self.capture(key);
        Gauge::noop()
    }

    fn register_histogram(&self, key: &Key, _: &Metadata<'_>) -> Histogram {
        self.capture(key);
        Histogram::noop()
    }
}

fn labels(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn inventory(raised: AppError) -> MethodTable<AppError> {
    MethodTable::new("Inventory")
        .method("count", &[], Some(AutoLog::new()), |_| Ok(json!(12)))
        .method("restock", &["u32"], Some(AutoLog::new()), move |_| {
            Err(raised.clone())
        })
        .method("peek", &[], None, |_| Ok(json!(12)))
}

fn sig(name: &str, params: &[&str]) -> MethodSignature {
    MethodSignature::new("Inventory", name, params.iter().copied())
}

#[test]
fn test_observed_calls_record_outcome() {
    let recorder = CapturingRecorder::default();
    let interceptor = LoggingInterceptor::with_sink(RecordingSink::new());
    let table = inventory(AppError::runtime("warehouse closed"));

    metrics::with_local_recorder(&recorder, || {
        interceptor
            .invoke(Invocation::new(sig("count", &[]), &table, vec![]))
            .unwrap();
        interceptor
            .invoke(Invocation::new(sig("restock", &["u32"]), &table, vec![json!(5)]))
            .unwrap_err();
    });

    assert_eq!(
        recorder.named("auto_log_calls_total"),
        vec![
            labels(&[("method", "Inventory::count()"), ("outcome", "ok")]),
            labels(&[("method", "Inventory::restock(u32)"), ("outcome", "failed")]),
        ]
    );
    assert_eq!(
        recorder.named("auto_log_call_duration_seconds"),
        vec![
            labels(&[("method", "Inventory::count()")]),
            labels(&[("method", "Inventory::restock(u32)")]),
        ]
    );
}

#[test]
fn test_pass_through_records_nothing() {
    let recorder = CapturingRecorder::default();
    let interceptor = LoggingInterceptor::with_sink(RecordingSink::new());
    let table = inventory(AppError::runtime("unused"));

    let out = metrics::with_local_recorder(&recorder, || {
        interceptor
            .invoke(Invocation::new(sig("peek", &[]), &table, vec![]))
            .unwrap()
    });

    assert_eq!(out, json!(12));
    assert!(recorder.is_empty());
}
