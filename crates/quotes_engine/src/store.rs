use quotes_core::{default_quotes, Filter, Quote};
use quotes_logging::{quotes_debug, quotes_warn};

use crate::storage::{KeyValueStore, StorageError};

pub const QUOTES_KEY: &str = "quotes";
pub const FILTER_KEY: &str = "selectedCategory";
pub const LAST_VIEWED_KEY: &str = "lastViewedQuote";

/// Durable side of the quote list and the selected filter.
///
/// Reads never fail: anything missing or unreadable falls back to defaults.
pub struct QuoteStore {
    backend: Box<dyn KeyValueStore>,
}

impl QuoteStore {
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Persisted quotes, or the built-in defaults when absent or corrupt.
    pub fn load_quotes(&self) -> Vec<Quote> {
        let Some(raw) = self.read(QUOTES_KEY) else {
            return default_quotes();
        };
        match serde_json::from_str::<Vec<Quote>>(&raw) {
            Ok(quotes) if quotes.iter().all(Quote::is_valid) => {
                quotes_debug!("Loaded {} persisted quotes", quotes.len());
                quotes
            }
            Ok(_) => {
                quotes_warn!("Persisted quotes contain blank fields; using defaults");
                default_quotes()
            }
            Err(err) => {
                quotes_warn!("Persisted quotes are unreadable ({}); using defaults", err);
                default_quotes()
            }
        }
    }

    /// Overwrites the persisted list.
    pub fn save_quotes(&mut self, quotes: &[Quote]) -> Result<(), StorageError> {
        let json = serde_json::to_string(quotes).unwrap_or_else(|_| "[]".to_string());
        self.backend.set(QUOTES_KEY, &json)
    }

    pub fn load_filter(&self) -> Filter {
        self.read(FILTER_KEY)
            .and_then(|raw| serde_json::from_str::<Filter>(&raw).ok())
            .unwrap_or_default()
    }

    pub fn save_filter(&mut self, filter: &Filter) -> Result<(), StorageError> {
        let json = serde_json::to_string(filter).unwrap_or_else(|_| "\"all\"".to_string());
        self.backend.set(FILTER_KEY, &json)
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.backend.get(key) {
            Ok(value) => value,
            Err(err) => {
                quotes_warn!("Treating `{}` as absent: {}", key, err);
                None
            }
        }
    }
}

/// Per-session memory of the last displayed quote.
pub struct SessionStore {
    backend: Box<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    pub fn last_viewed(&self) -> Option<Quote> {
        let raw = self.backend.get(LAST_VIEWED_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }

    pub fn remember(&mut self, quote: &Quote) -> Result<(), StorageError> {
        let json = serde_json::to_string(quote).unwrap_or_default();
        self.backend.set(LAST_VIEWED_KEY, &json)
    }

    /// Ends the session.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.backend.remove(LAST_VIEWED_KEY)
    }
}
