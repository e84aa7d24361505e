//! Quote manager core: pure state machine, merge policy and view-model helpers.
mod effect;
mod exchange;
mod filter;
mod merge;
mod msg;
mod quote;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use exchange::{export_json, parse_import, ImportError};
pub use filter::{categories, filtered, pick_random, Display, Filter, ALL_CATEGORIES};
pub use merge::{merge, MergeOutcome};
pub use msg::Msg;
pub use quote::{default_quotes, Quote, QuoteKey, ValidationError};
pub use state::{
    AppState, NotificationKind, IMPORT_OK_MESSAGE, NOTIFICATION_TICKS, POST_FAILED_MESSAGE,
    SYNC_FAILED_MESSAGE, SYNC_UPDATED_MESSAGE,
};
pub use update::update;
pub use view_model::{AppViewModel, NotificationView};
