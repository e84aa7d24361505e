use std::fmt;

use quotes_core::Quote;
use serde::Deserialize;

/// Monotonic counter of sync cycles since engine start.
pub type SyncCycle = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SyncCompleted {
        cycle: SyncCycle,
        result: Result<Vec<Quote>, FetchError>,
    },
    PostCompleted {
        quote: Quote,
        result: Result<(), FetchError>,
    },
}

/// Record shape served by the demo endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteRecord {
    pub user_id: u64,
    pub title: String,
}

impl RemoteRecord {
    /// Category derives from the author id; blank titles yield nothing.
    pub fn into_quote(self) -> Option<Quote> {
        Quote::new(&self.title, &format!("Category{}", self.user_id)).ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    MalformedBody,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::MalformedBody => write!(f, "malformed body"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
