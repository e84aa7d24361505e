use crate::{Filter, Quote};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Seed state from persisted storage at start-up.
    Restore {
        quotes: Vec<Quote>,
        filter: Filter,
        last_viewed: Option<Quote>,
    },
    /// User asked for a new quote; `roll` is a uniformly random number.
    ShowNewQuote { roll: u64 },
    /// User picked a category (or "all") in the selector.
    FilterSelected(Filter),
    /// User submitted the add-quote form.
    AddQuote { text: String, category: String },
    /// Contents of a file chosen for import.
    ImportText(String),
    /// The chosen import file could not be read.
    ImportUnreadable(String),
    /// User clicked Export.
    ExportRequested,
    /// User asked for an immediate sync cycle.
    SyncRequested,
    /// A sync cycle fetched the remote list.
    RemoteFetched(Vec<Quote>),
    /// A sync cycle failed before merging.
    SyncFailed { reason: String },
    /// Best-effort upload of a new quote failed.
    QuotePostFailed { reason: String },
    /// One notification time-unit elapsed.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
