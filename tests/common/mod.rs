//! Shared fixtures for integration tests.

use std::sync::{Arc, Mutex};

use auto_log::observability::sink::cause_chain;
use auto_log::{LogEvent, LogSink, ResolutionError};
use tracing::Level;

/// One captured record.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub level: Level,
    pub message: String,
    /// Failure message plus its causes, for ERROR records.
    pub error: Option<Vec<String>>,
}

/// Sink that keeps every record in memory.
#[derive(Default)]
pub struct RecordingSink {
    records: Mutex<Vec<Record>>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn records(&self) -> Vec<Record> {
        self.records.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records().into_iter().map(|r| r.message).collect()
    }

    pub fn count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn at(&self, level: Level) -> Vec<Record> {
        self.records()
            .into_iter()
            .filter(|r| r.level == level)
            .collect()
    }
}

impl LogSink for RecordingSink {
    fn emit(&self, event: &LogEvent<'_>) {
        let error = match event {
            LogEvent::Failure { error, .. } => {
                let mut chain = vec![error.to_string()];
                chain.extend(cause_chain(*error));
                Some(chain)
            }
            _ => None,
        };
        self.records.lock().unwrap().push(Record {
            level: event.level(),
            message: event.to_string(),
            error,
        });
    }
}

/// Sink that always panics.
#[allow(dead_code)]
pub struct PanickingSink;

impl LogSink for PanickingSink {
    fn emit(&self, _: &LogEvent<'_>) {
        panic!("log backend unavailable");
    }
}

/// Error raised by fixture methods.
#[allow(dead_code)]
#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    /// `token` lets tests check they got the very same error back.
    #[error("{message}")]
    Runtime {
        message: String,
        token: Arc<()>,
        #[source]
        cause: Option<Arc<IoCause>>,
    },

    #[error(transparent)]
    Missing(#[from] ResolutionError),
}

#[allow(dead_code)]
impl AppError {
    pub fn runtime(message: &str) -> Self {
        AppError::Runtime {
            message: message.to_string(),
            token: Arc::new(()),
            cause: None,
        }
    }

    pub fn with_cause(message: &str, cause: &str) -> Self {
        AppError::Runtime {
            message: message.to_string(),
            token: Arc::new(()),
            cause: Some(Arc::new(IoCause(cause.to_string()))),
        }
    }

    pub fn same_as(&self, other: &AppError) -> bool {
        match (self, other) {
            (AppError::Runtime { token: a, .. }, AppError::Runtime { token: b, .. }) => {
                Arc::ptr_eq(a, b)
            }
            _ => false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct IoCause(pub String);
