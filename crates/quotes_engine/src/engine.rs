use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use quotes_core::Quote;
use quotes_logging::{quotes_debug, quotes_info, quotes_warn};
use thiserror::Error;
use tokio::sync::mpsc as async_mpsc;
use tokio_util::sync::CancellationToken;

use crate::fetch::{FetchSettings, ReqwestRemote, RemoteSource};
use crate::schedule::PeriodicTask;
use crate::EngineEvent;

/// Default period between automatic sync cycles.
pub const DEFAULT_SYNC_PERIOD: Duration = Duration::from_secs(20);

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub fetch: FetchSettings,
    /// `None` disables automatic syncing; manual cycles still work.
    pub sync_period: Option<Duration>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fetch: FetchSettings::default(),
            sync_period: Some(DEFAULT_SYNC_PERIOD),
        }
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start engine: {0}")]
    Start(#[from] io::Error),
}

enum EngineCommand {
    SyncNow,
    PostQuote(Quote),
}

/// Runs remote work on a background tokio runtime.
///
/// Results come back as `EngineEvent`s polled from the UI thread, so every
/// merge still happens on that single thread.
pub struct EngineHandle {
    cmd_tx: async_mpsc::UnboundedSender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
    cancel: CancellationToken,
    worker: Option<thread::JoinHandle<()>>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let remote = Arc::new(ReqwestRemote::new(config.fetch));
        Self::with_remote(remote, config.sync_period)
    }

    pub fn with_remote(
        remote: Arc<dyn RemoteSource>,
        sync_period: Option<Duration>,
    ) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("quotes-engine-rt")
            .enable_all()
            .build()?;
        let (cmd_tx, mut cmd_rx) = async_mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel();
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let cycles = Arc::new(AtomicU64::new(0));

        let worker = thread::Builder::new()
            .name("quotes-engine".to_string())
            .spawn(move || {
                let schedule = sync_period.map(|period| {
                    quotes_info!("Periodic sync every {:?}", period);
                    let remote = remote.clone();
                    let event_tx = event_tx.clone();
                    let cycles = cycles.clone();
                    PeriodicTask::spawn(runtime.handle(), period, move || {
                        run_sync(remote.clone(), cycles.clone(), event_tx.clone())
                    })
                });

                runtime.block_on(async {
                    loop {
                        tokio::select! {
                            _ = token.cancelled() => break,
                            command = cmd_rx.recv() => {
                                let Some(command) = command else { break };
                                let remote = remote.clone();
                                let event_tx = event_tx.clone();
                                match command {
                                    EngineCommand::SyncNow => {
                                        tokio::spawn(run_sync(remote, cycles.clone(), event_tx));
                                    }
                                    EngineCommand::PostQuote(quote) => {
                                        tokio::spawn(run_post(remote, quote, event_tx));
                                    }
                                }
                            }
                        }
                    }
                });

                drop(schedule);
                runtime.shutdown_timeout(Duration::from_secs(1));
                quotes_debug!("Engine worker stopped");
            })?;

        Ok(Self {
            cmd_tx,
            event_rx,
            cancel,
            worker: Some(worker),
        })
    }

    /// Starts an extra sync cycle outside the schedule.
    pub fn sync_now(&self) {
        let _ = self.cmd_tx.send(EngineCommand::SyncNow);
    }

    pub fn post_quote(&self, quote: Quote) {
        let _ = self.cmd_tx.send(EngineCommand::PostQuote(quote));
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    /// Cancels the schedule and in-flight work, then joins the worker.
    pub fn shutdown(&mut self) {
        self.cancel.cancel();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                quotes_warn!("Engine worker panicked during shutdown");
            }
        }
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

async fn run_sync(
    remote: Arc<dyn RemoteSource>,
    cycles: Arc<AtomicU64>,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let cycle = cycles.fetch_add(1, Ordering::Relaxed) + 1;
    quotes_debug!("Sync cycle {} started", cycle);
    let result = remote.fetch_quotes().await;
    match &result {
        Ok(quotes) => quotes_info!("Sync cycle {} fetched {} quotes", cycle, quotes.len()),
        Err(err) => quotes_warn!("Sync cycle {} failed: {}", cycle, err),
    }
    let _ = event_tx.send(EngineEvent::SyncCompleted { cycle, result });
}

async fn run_post(
    remote: Arc<dyn RemoteSource>,
    quote: Quote,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let result = remote.post_quote(&quote).await;
    if let Err(err) = &result {
        quotes_warn!("Posting quote failed: {}", err);
    }
    let _ = event_tx.send(EngineEvent::PostCompleted { quote, result });
}
