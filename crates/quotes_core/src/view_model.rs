use crate::{Display, Filter, NotificationKind, Quote};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub display: Display,
    pub filter: Filter,
    pub categories: Vec<String>,
    pub quote_count: usize,
    pub last_viewed: Option<Quote>,
    pub notification: Option<NotificationView>,
    pub dirty: bool,
}
