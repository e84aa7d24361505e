use std::sync::{Arc, Mutex};
use std::time::Duration;

use quotes_core::Quote;
use quotes_engine::{EngineEvent, EngineHandle, FailureKind, FetchError, RemoteSource};

const WAIT: Duration = Duration::from_secs(5);

struct FakeRemote {
    quotes: Vec<Quote>,
    fail_with: Option<FailureKind>,
    posted: Mutex<Vec<Quote>>,
}

impl FakeRemote {
    fn serving(quotes: Vec<Quote>) -> Arc<Self> {
        Arc::new(Self {
            quotes,
            fail_with: None,
            posted: Mutex::new(Vec::new()),
        })
    }

    fn failing(kind: FailureKind) -> Arc<Self> {
        Arc::new(Self {
            quotes: Vec::new(),
            fail_with: Some(kind),
            posted: Mutex::new(Vec::new()),
        })
    }

    fn error(&self) -> Option<FetchError> {
        self.fail_with.clone().map(|kind| FetchError {
            kind,
            message: "fake failure".to_string(),
        })
    }
}

#[async_trait::async_trait]
impl RemoteSource for FakeRemote {
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, FetchError> {
        match self.error() {
            Some(err) => Err(err),
            None => Ok(self.quotes.clone()),
        }
    }

    async fn post_quote(&self, quote: &Quote) -> Result<(), FetchError> {
        if let Some(err) = self.error() {
            return Err(err);
        }
        self.posted.lock().unwrap().push(quote.clone());
        Ok(())
    }
}

fn remote_quotes() -> Vec<Quote> {
    vec![Quote::new("Carpe diem", "Category1").unwrap()]
}

#[test]
fn first_sync_runs_at_startup() {
    let remote = FakeRemote::serving(remote_quotes());
    let engine = EngineHandle::with_remote(remote, Some(Duration::from_secs(60))).unwrap();

    let event = engine.recv_timeout(WAIT).expect("startup sync");
    assert_eq!(
        event,
        EngineEvent::SyncCompleted {
            cycle: 1,
            result: Ok(remote_quotes()),
        }
    );
}

#[test]
fn manual_sync_works_without_schedule() {
    let remote = FakeRemote::serving(remote_quotes());
    let engine = EngineHandle::with_remote(remote, None).unwrap();

    assert!(engine.recv_timeout(Duration::from_millis(100)).is_none());
    engine.sync_now();
    match engine.recv_timeout(WAIT) {
        Some(EngineEvent::SyncCompleted { result, .. }) => {
            assert_eq!(result, Ok(remote_quotes()))
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn fetch_failure_is_reported_as_event() {
    let remote = FakeRemote::failing(FailureKind::HttpStatus(500));
    let engine = EngineHandle::with_remote(remote, None).unwrap();

    engine.sync_now();
    match engine.recv_timeout(WAIT) {
        Some(EngineEvent::SyncCompleted { result: Err(err), .. }) => {
            assert_eq!(err.kind, FailureKind::HttpStatus(500));
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn post_reaches_remote() {
    let remote = FakeRemote::serving(Vec::new());
    let engine = EngineHandle::with_remote(remote.clone(), None).unwrap();
    let quote = Quote::new("Stay hungry", "Motivation").unwrap();

    engine.post_quote(quote.clone());
    assert_eq!(
        engine.recv_timeout(WAIT),
        Some(EngineEvent::PostCompleted {
            quote: quote.clone(),
            result: Ok(()),
        })
    );
    assert_eq!(*remote.posted.lock().unwrap(), vec![quote]);
}

#[test]
fn shutdown_stops_scheduled_cycles() {
    let remote = FakeRemote::serving(remote_quotes());
    let mut engine = EngineHandle::with_remote(remote, Some(Duration::from_millis(20))).unwrap();

    assert!(engine.recv_timeout(WAIT).is_some());
    assert!(engine.recv_timeout(WAIT).is_some());
    engine.shutdown();

    while engine.try_recv().is_some() {}
    assert!(engine.recv_timeout(Duration::from_millis(100)).is_none());
    engine.sync_now();
    assert!(engine.recv_timeout(Duration::from_millis(100)).is_none());
}
