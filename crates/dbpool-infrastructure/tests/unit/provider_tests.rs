//! Pooled provider shutdown tests

use crate::test_utils::StubSource;
use dbpool_domain::error::{Error, Result};
use dbpool_domain::ports::{ConnectionProvider, ConnectionSource};
use dbpool_domain::value_objects::{ConnectionSettings, PoolMode};
use dbpool_infrastructure::provider::PooledProvider;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

fn stub_pair() -> (Arc<StubSource>, Arc<StubSource>) {
    (
        StubSource::named("svc.readonly"),
        StubSource::named("svc.readwrite"),
    )
}

#[test]
fn test_new_provider_is_live() {
    let (ro, rw) = stub_pair();
    let provider = PooledProvider::new(Arc::clone(&ro), Arc::clone(&rw));

    assert!(!provider.is_shut_down());
    assert_eq!(provider.source(PoolMode::ReadOnly).name(), "svc.readonly");
    assert_eq!(provider.source(PoolMode::ReadWrite).name(), "svc.readwrite");
    assert_eq!(ro.close_calls(), 0);
}

#[test]
fn test_sources_listed_readonly_first() {
    let (ro, rw) = stub_pair();
    let provider = PooledProvider::new(ro, rw);

    let modes: Vec<PoolMode> = provider.sources().iter().map(|(mode, _)| *mode).collect();
    assert_eq!(modes, PoolMode::ALL);
}

#[test]
fn test_shutdown_closes_both_sources() {
    let (ro, rw) = stub_pair();
    let provider = PooledProvider::new(Arc::clone(&ro), Arc::clone(&rw));

    provider.shutdown().expect("shutdown failed");

    assert!(provider.is_shut_down());
    assert_eq!(ro.close_calls(), 1);
    assert_eq!(rw.close_calls(), 1);
}

#[test]
fn test_repeated_shutdown_closes_once() {
    let (ro, rw) = stub_pair();
    let provider = PooledProvider::new(Arc::clone(&ro), Arc::clone(&rw));

    provider.shutdown().expect("first shutdown failed");
    provider.shutdown().expect("second shutdown should be a no-op");
    provider.shutdown().expect("third shutdown should be a no-op");

    assert_eq!(ro.close_calls(), 1);
    assert_eq!(rw.close_calls(), 1);
}

#[test]
fn test_concurrent_shutdown_closes_once() {
    const THREADS: usize = 8;

    let (ro, rw) = stub_pair();
    let provider = Arc::new(PooledProvider::new(Arc::clone(&ro), Arc::clone(&rw)));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let provider = Arc::clone(&provider);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                provider.shutdown()
            })
        })
        .collect();

    for handle in handles {
        handle
            .join()
            .expect("thread panicked")
            .expect("shutdown failed");
    }

    assert!(provider.is_shut_down());
    assert_eq!(ro.close_calls(), 1);
    assert_eq!(rw.close_calls(), 1);
}

#[test]
fn test_drop_shuts_down_live_provider() {
    let (ro, rw) = stub_pair();
    drop(PooledProvider::new(Arc::clone(&ro), Arc::clone(&rw)));

    assert_eq!(ro.close_calls(), 1);
    assert_eq!(rw.close_calls(), 1);
}

#[test]
fn test_drop_after_shutdown_does_not_close_again() {
    let (ro, rw) = stub_pair();
    let provider = PooledProvider::new(Arc::clone(&ro), Arc::clone(&rw));
    provider.shutdown().expect("shutdown failed");
    drop(provider);

    assert_eq!(ro.close_calls(), 1);
    assert_eq!(rw.close_calls(), 1);
}

/// Source whose close always fails, counting attempts
struct FailingSource {
    settings: ConnectionSettings,
    attempts: AtomicUsize,
}

impl ConnectionSource for FailingSource {
    fn name(&self) -> &str {
        "svc.failing"
    }

    fn settings(&self) -> &ConnectionSettings {
        &self.settings
    }

    fn close(&self) -> Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(Error::database("close failed"))
    }

    fn is_closed(&self) -> bool {
        false
    }
}

#[test]
fn test_close_failure_still_closes_other_source() {
    let failing = Arc::new(FailingSource {
        settings: ConnectionSettings::new("h", 5432, "d", "u", "p"),
        attempts: AtomicUsize::new(0),
    });
    let rw = StubSource::named("svc.readwrite");
    let readwrite: Arc<dyn ConnectionSource> = rw.clone();
    let provider = PooledProvider::new(
        Arc::clone(&failing) as Arc<dyn ConnectionSource>,
        readwrite,
    );

    let err = provider.shutdown().unwrap_err();
    assert!(matches!(err, Error::Database { .. }));
    assert_eq!(rw.close_calls(), 1);

    // The failure is reported once; later calls stay no-ops
    assert!(provider.shutdown().is_ok());
    drop(provider);
    assert_eq!(failing.attempts.load(Ordering::SeqCst), 1);
}
