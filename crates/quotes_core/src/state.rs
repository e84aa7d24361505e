use crate::filter::{categories, filtered, pick_random};
use crate::view_model::{AppViewModel, NotificationView};
use crate::{merge, Display, Filter, MergeOutcome, Quote, ValidationError};

/// Ticks a notification stays visible.
pub const NOTIFICATION_TICKS: u32 = 5;

pub const SYNC_UPDATED_MESSAGE: &str =
    "Data updated from server. Conflicts resolved by overwriting local data.";
pub const SYNC_FAILED_MESSAGE: &str = "Error syncing data with server.";
pub const POST_FAILED_MESSAGE: &str = "Could not send the new quote to the server.";
pub const IMPORT_OK_MESSAGE: &str = "Quotes imported successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Notification {
    kind: NotificationKind,
    message: String,
    remaining_ticks: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    quotes: Vec<Quote>,
    filter: Filter,
    display: Display,
    last_viewed: Option<Quote>,
    notification: Option<Notification>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            display: self.display.clone(),
            filter: self.filter.clone(),
            categories: categories(&self.quotes),
            quote_count: self.quotes.len(),
            last_viewed: self.last_viewed.clone(),
            notification: self.notification.as_ref().map(|n| NotificationView {
                kind: n.kind,
                message: n.message.clone(),
            }),
            dirty: self.dirty,
        }
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Returns and clears the dirty flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn restore(&mut self, quotes: Vec<Quote>, filter: Filter, last: Option<Quote>) {
        self.quotes = quotes;
        self.filter = filter;
        self.last_viewed = last;
        self.display = Display::Blank;
        self.mark_dirty();
    }

    pub(crate) fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.mark_dirty();
    }

    /// Picks a quote under the active filter and returns it when one exists.
    pub(crate) fn show_random(&mut self, roll: u64) -> Option<Quote> {
        let candidates = filtered(&self.quotes, &self.filter);
        self.display = pick_random(&candidates, roll);
        self.mark_dirty();
        match &self.display {
            Display::Quote(quote) => {
                self.last_viewed = Some(quote.clone());
                Some(quote.clone())
            }
            Display::Empty | Display::Blank => None,
        }
    }

    pub(crate) fn add_quote(
        &mut self,
        text: &str,
        category: &str,
    ) -> Result<Quote, ValidationError> {
        let quote = Quote::new(text, category)?;
        self.quotes.push(quote.clone());
        self.mark_dirty();
        Ok(quote)
    }

    /// Appends every quote as-is; duplicates are kept.
    pub(crate) fn import_many(&mut self, quotes: Vec<Quote>) {
        self.quotes.extend(quotes);
        self.mark_dirty();
    }

    pub(crate) fn merge_remote(&mut self, remote: &[Quote]) -> MergeOutcome {
        let outcome = merge(&mut self.quotes, remote);
        if outcome.changed() {
            self.mark_dirty();
        }
        outcome
    }

    pub(crate) fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.notification = Some(Notification {
            kind,
            message: message.into(),
            remaining_ticks: NOTIFICATION_TICKS,
        });
        self.mark_dirty();
    }

    /// Counts down the visible notification, dismissing it when it expires.
    pub(crate) fn tick(&mut self) {
        let Some(notification) = self.notification.as_mut() else {
            return;
        };
        notification.remaining_ticks = notification.remaining_ticks.saturating_sub(1);
        if notification.remaining_ticks == 0 {
            self.notification = None;
            self.mark_dirty();
        }
    }
}
