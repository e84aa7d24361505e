use std::path::Path;

use quotes_core::{Filter, Msg, Quote};
use quotes_engine::{
    ensure_dir, FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, PersistError, QuoteStore,
    SessionStore,
};
use quotes_logging::{quotes_error, quotes_info};

/// Durable quote/filter storage plus the per-run session store.
pub struct Persistence {
    store: QuoteStore,
    session: SessionStore,
}

impl Persistence {
    pub fn open(data_dir: &Path) -> Result<Self, PersistError> {
        ensure_dir(data_dir)?;
        quotes_info!("Persisting quotes under {:?}", data_dir);
        Ok(Self::with_backends(
            Box::new(FileKeyValueStore::new(data_dir)),
            Box::new(MemoryKeyValueStore::new()),
        ))
    }

    pub fn with_backends(
        durable: Box<dyn KeyValueStore>,
        session: Box<dyn KeyValueStore>,
    ) -> Self {
        Self {
            store: QuoteStore::new(durable),
            session: SessionStore::new(session),
        }
    }

    /// Start-up message seeding the core state.
    pub fn restore_msg(&self) -> Msg {
        Msg::Restore {
            quotes: self.store.load_quotes(),
            filter: self.store.load_filter(),
            last_viewed: self.session.last_viewed(),
        }
    }

    pub fn save_quotes(&mut self, quotes: &[Quote]) {
        if let Err(err) = self.store.save_quotes(quotes) {
            quotes_error!("Failed to persist {} quotes: {}", quotes.len(), err);
        }
    }

    pub fn save_filter(&mut self, filter: &Filter) {
        if let Err(err) = self.store.save_filter(filter) {
            quotes_error!("Failed to persist filter `{}`: {}", filter, err);
        }
    }

    pub fn remember_last_viewed(&mut self, quote: &Quote) {
        if let Err(err) = self.session.remember(quote) {
            quotes_error!("Failed to remember last viewed quote: {}", err);
        }
    }

    pub fn end_session(&mut self) {
        if let Err(err) = self.session.clear() {
            quotes_error!("Failed to clear session store: {}", err);
        }
    }
}
