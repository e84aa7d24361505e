use crate::{Filter, Quote};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Overwrite the persisted quote list.
    PersistQuotes(Vec<Quote>),
    PersistFilter(Filter),
    /// Session-scoped memory of the quote on display.
    RememberLastViewed(Quote),
    /// Answer with `Msg::ShowNewQuote` carrying a fresh roll.
    RefreshDisplay,
    PostQuote(Quote),
    ExportQuotes(Vec<Quote>),
    SyncNow,
    /// Inline, modal-style message for the user.
    Alert(String),
}
