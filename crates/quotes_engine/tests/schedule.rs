use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use quotes_engine::PeriodicTask;
use tokio::runtime::Handle;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn runs_immediately_then_repeats_until_shutdown() {
    let runs = Arc::new(AtomicUsize::new(0));
    let counter = runs.clone();
    let task = PeriodicTask::spawn(&Handle::current(), Duration::from_millis(20), move || {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    });

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(runs.load(Ordering::SeqCst) >= 1, "first run is immediate");

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(runs.load(Ordering::SeqCst) >= 3);

    task.shutdown().await;
    let after = runs.load(Ordering::SeqCst);
    tokio::time::sleep(Duration::from_millis(80)).await;
    assert_eq!(runs.load(Ordering::SeqCst), after);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn slow_runs_never_overlap() {
    let active = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));
    let (active_job, peak_job) = (active.clone(), peak.clone());
    let task = PeriodicTask::spawn(&Handle::current(), Duration::from_millis(5), move || {
        let active = active_job.clone();
        let peak = peak_job.clone();
        async move {
            let now = active.fetch_add(1, Ordering::SeqCst) + 1;
            peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(25)).await;
            active.fetch_sub(1, Ordering::SeqCst);
        }
    });

    tokio::time::sleep(Duration::from_millis(120)).await;
    task.shutdown().await;
    assert_eq!(peak.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn dropping_cancels() {
    let runs = Arc::new(AtomicUsize::new(0));
    let counter = runs.clone();
    let task = PeriodicTask::spawn(&Handle::current(), Duration::from_millis(10), move || {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    });
    assert!(!task.is_cancelled());
    task.cancel();
    assert!(task.is_cancelled());
    drop(task);

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(runs.load(Ordering::SeqCst) <= 1);
}
