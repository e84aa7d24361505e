use std::path::PathBuf;

use quotes_core::{Effect, Msg};
use quotes_engine::{export_quotes, EngineEvent, EngineHandle};
use quotes_logging::{quotes_debug, quotes_info, quotes_warn};

use super::persistence::Persistence;

/// What running a batch of effects produced for the UI loop.
#[derive(Debug, Default)]
pub struct EffectOutput {
    /// Messages to feed back into `update`, in order.
    pub follow_ups: Vec<Msg>,
    /// Inline alerts to show the user.
    pub alerts: Vec<String>,
}

pub struct EffectRunner {
    persistence: Persistence,
    engine: Option<EngineHandle>,
    export_dir: PathBuf,
}

impl EffectRunner {
    pub fn new(
        persistence: Persistence,
        engine: Option<EngineHandle>,
        export_dir: PathBuf,
    ) -> Self {
        Self {
            persistence,
            engine,
            export_dir,
        }
    }

    pub fn restore_msg(&self) -> Msg {
        self.persistence.restore_msg()
    }

    pub fn set_export_dir(&mut self, dir: PathBuf) {
        self.export_dir = dir;
    }

    pub fn run(&mut self, effects: Vec<Effect>) -> EffectOutput {
        let mut output = EffectOutput::default();
        for effect in effects {
            match effect {
                Effect::PersistQuotes(quotes) => {
                    quotes_debug!("PersistQuotes count={}", quotes.len());
                    self.persistence.save_quotes(&quotes);
                }
                Effect::PersistFilter(filter) => {
                    quotes_debug!("PersistFilter filter={}", filter);
                    self.persistence.save_filter(&filter);
                }
                Effect::RememberLastViewed(quote) => {
                    self.persistence.remember_last_viewed(&quote);
                }
                Effect::RefreshDisplay => {
                    output.follow_ups.push(Msg::ShowNewQuote {
                        roll: rand::random(),
                    });
                }
                Effect::PostQuote(quote) => match &self.engine {
                    Some(engine) => engine.post_quote(quote),
                    None => quotes_debug!("Offline; not posting quote"),
                },
                Effect::ExportQuotes(quotes) => {
                    match export_quotes(&self.export_dir, &quotes) {
                        Ok(path) => {
                            quotes_info!("Exported {} quotes to {:?}", quotes.len(), path);
                            output.alerts.push(format!(
                                "Exported {} quotes to {}",
                                quotes.len(),
                                path.display()
                            ));
                        }
                        Err(err) => {
                            quotes_warn!("Export to {:?} failed: {}", self.export_dir, err);
                            output.alerts.push(format!("Export failed: {err}"));
                        }
                    }
                }
                Effect::SyncNow => match &self.engine {
                    Some(engine) => engine.sync_now(),
                    None => output
                        .alerts
                        .push("Sync is unavailable in offline mode.".to_string()),
                },
                Effect::Alert(message) => output.alerts.push(message),
            }
        }
        output
    }

    /// Drains finished engine work as core messages.
    pub fn poll_engine(&self) -> Vec<Msg> {
        let Some(engine) = &self.engine else {
            return Vec::new();
        };
        let mut inbox = Vec::new();
        while let Some(event) = engine.try_recv() {
            inbox.push(map_event(event));
        }
        inbox
    }

    pub fn shutdown(&mut self) {
        if let Some(mut engine) = self.engine.take() {
            engine.shutdown();
        }
        self.persistence.end_session();
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SyncCompleted { result, .. } => match result {
            Ok(quotes) => Msg::RemoteFetched(quotes),
            Err(err) => Msg::SyncFailed {
                reason: err.to_string(),
            },
        },
        EngineEvent::PostCompleted { quote, result } => match result {
            Ok(()) => {
                quotes_debug!("Server acknowledged quote {:?}", quote.text);
                Msg::NoOp
            }
            Err(err) => Msg::QuotePostFailed {
                reason: err.to_string(),
            },
        },
    }
}
