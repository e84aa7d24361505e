use crate::state::{
    IMPORT_OK_MESSAGE, POST_FAILED_MESSAGE, SYNC_FAILED_MESSAGE, SYNC_UPDATED_MESSAGE,
};
use crate::{parse_import, AppState, Effect, Msg, NotificationKind};

/// Pure update function: applies a message to state and returns any effects.
///
/// Every message that changes the quote list returns `Effect::PersistQuotes`
/// with the full list, so running the effects keeps storage in step.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Restore {
            quotes,
            filter,
            last_viewed,
        } => {
            state.restore(quotes, filter, last_viewed);
            vec![Effect::RefreshDisplay]
        }
        Msg::ShowNewQuote { roll } => match state.show_random(roll) {
            Some(quote) => vec![Effect::RememberLastViewed(quote)],
            None => Vec::new(),
        },
        Msg::FilterSelected(filter) => {
            state.set_filter(filter.clone());
            vec![Effect::PersistFilter(filter), Effect::RefreshDisplay]
        }
        Msg::AddQuote { text, category } => match state.add_quote(&text, &category) {
            Ok(quote) => vec![
                Effect::PersistQuotes(state.quotes().to_vec()),
                Effect::RefreshDisplay,
                Effect::PostQuote(quote),
            ],
            Err(err) => vec![Effect::Alert(err.to_string())],
        },
        Msg::ImportText(raw) => match parse_import(&raw) {
            Ok(quotes) => {
                state.import_many(quotes);
                vec![
                    Effect::PersistQuotes(state.quotes().to_vec()),
                    Effect::RefreshDisplay,
                    Effect::Alert(IMPORT_OK_MESSAGE.to_string()),
                ]
            }
            Err(err) => vec![Effect::Alert(err.to_string())],
        },
        Msg::ImportUnreadable(reason) => {
            vec![Effect::Alert(format!("Error reading file: {reason}"))]
        }
        Msg::ExportRequested => vec![Effect::ExportQuotes(state.quotes().to_vec())],
        Msg::SyncRequested => vec![Effect::SyncNow],
        Msg::RemoteFetched(remote) => {
            if state.merge_remote(&remote).changed() {
                state.notify(NotificationKind::Info, SYNC_UPDATED_MESSAGE);
                vec![
                    Effect::PersistQuotes(state.quotes().to_vec()),
                    Effect::RefreshDisplay,
                ]
            } else {
                Vec::new()
            }
        }
        Msg::SyncFailed { .. } => {
            state.notify(NotificationKind::Error, SYNC_FAILED_MESSAGE);
            Vec::new()
        }
        Msg::QuotePostFailed { .. } => {
            state.notify(NotificationKind::Error, POST_FAILED_MESSAGE);
            Vec::new()
        }
        Msg::Tick => {
            state.tick();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
