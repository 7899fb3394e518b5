//! Integration tests for the tracing bridge.
#![cfg(feature = "tracing")]

use logging::{LogConfig, RecordLayer, Severity, init, policy};
use tracing::Level;
use serial_test::serial;
use tracing_subscriber::layer::SubscriberExt;

#[test]
#[serial]
fn events_pass_through_the_layer() {
    init(LogConfig::default().with_max_verbosity(Some(1)));
    let enabled = |level: Level| policy().is_enabled(RecordLayer::severity_for(&level));
    assert!(enabled(Level::INFO));
    assert!(enabled(Level::DEBUG));
    assert!(enabled(Level::ERROR));
    assert!(!enabled(Level::TRACE));

    let subscriber = tracing_subscriber::registry().with(RecordLayer::new());

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!(job = 7, "layer accepts info");
        tracing::debug!("layer accepts verbose 1");
        tracing::trace!("dropped: verbosity capped at 1");
        tracing::error!(reason = "disk full", "layer accepts errors");
    });

    init(LogConfig::default());
    assert!(enabled(Level::TRACE));
}

#[test]
fn tracing_levels_never_reach_fatal() {
    for level in [
        Level::TRACE,
        Level::DEBUG,
        Level::INFO,
        Level::WARN,
        Level::ERROR,
    ] {
        assert!(RecordLayer::severity_for(&level) < Severity::Fatal);
    }
}
