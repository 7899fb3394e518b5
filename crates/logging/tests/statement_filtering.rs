//! Integration tests for statement-level filtering.
//!
//! A suppressed statement must not open a record or evaluate any of its
//! format arguments. These tests count argument evaluations through a
//! side-effecting helper while adjusting the process-wide thresholds, so
//! they run serially.

use std::cell::Cell;

use logging::{
    LogConfig, Severity, dlog, dvlog, init, log, log_if, log_is_on, plog, plog_if, policy, vlog,
    vlog_if, vlog_is_on, vplog,
};
use serial_test::serial;

thread_local! {
    static EVALUATIONS: Cell<u32> = const { Cell::new(0) };
}

fn counted(value: &str) -> &str {
    EVALUATIONS.with(|count| count.set(count.get() + 1));
    value
}

fn evaluations() -> u32 {
    EVALUATIONS.with(Cell::get)
}

fn reset(config: LogConfig) {
    init(config);
    EVALUATIONS.with(|count| count.set(0));
}

#[test]
#[serial]
fn suppressed_severity_skips_arguments() {
    reset(LogConfig::default().with_min_severity(Severity::Error));

    log!(Info, "{}", counted("info"));
    log!(Warning, "{}", counted("warning"));
    assert_eq!(evaluations(), 0);

    log!(Error, "{}", counted("error"));
    assert_eq!(evaluations(), 1);

    init(LogConfig::default());
}

#[test]
#[serial]
fn false_condition_skips_arguments() {
    reset(LogConfig::default());

    log_if!(Warning, 1 + 1 == 3, "{}", counted("never"));
    assert_eq!(evaluations(), 0);

    log_if!(Warning, 1 + 1 == 2, "{}", counted("always"));
    assert_eq!(evaluations(), 1);
}

#[test]
#[serial]
fn condition_is_not_evaluated_when_severity_is_off() {
    reset(LogConfig::default().with_min_severity(Severity::ErrorReport));

    let probed = Cell::new(false);
    log_if!(Error, { probed.set(true); true }, "unreachable");
    assert!(!probed.get());

    init(LogConfig::default());
}

#[test]
#[serial]
fn verbosity_cap_limits_vlog() {
    reset(LogConfig::default().with_max_verbosity(Some(1)));

    vlog!(1, "{}", counted("v1"));
    vlog!(2, "{}", counted("v2"));
    vlog!(5, "{}", counted("v5"));
    assert_eq!(evaluations(), 1);

    vlog_if!(1, false, "{}", counted("v1 skipped"));
    assert_eq!(evaluations(), 1);

    init(LogConfig::default());
}

#[test]
#[serial]
fn verbose_records_ignore_the_minimum_severity() {
    reset(
        LogConfig::default()
            .with_min_severity(Severity::Error)
            .with_max_verbosity(Some(3)),
    );

    vlog!(3, "{}", counted("v3"));
    assert_eq!(evaluations(), 1);
    assert!(vlog_is_on!(3));
    assert!(!vlog_is_on!(4));

    init(LogConfig::default());
}

#[test]
#[serial]
fn errno_variants_follow_the_same_gate() {
    reset(
        LogConfig::default()
            .with_min_severity(Severity::Error)
            .with_max_verbosity(Some(0)),
    );

    plog!(Warning, "{}", counted("plog warning"));
    plog_if!(Error, false, "{}", counted("plog_if false"));
    vplog!(1, "{}", counted("vplog"));
    assert_eq!(evaluations(), 0);

    plog!(Error, "{}", counted("plog error"));
    assert_eq!(evaluations(), 1);

    init(LogConfig::default());
}

#[test]
#[serial]
fn debug_only_statements_follow_build_mode() {
    reset(LogConfig::default());

    dlog!(Info, "{}", counted("dlog"));
    dvlog!(1, "{}", counted("dvlog"));

    let expected = if cfg!(debug_assertions) { 2 } else { 0 };
    assert_eq!(evaluations(), expected);
}

#[test]
#[serial]
fn log_is_on_reflects_live_policy() {
    reset(LogConfig::default());
    assert!(log_is_on!(Info));

    policy().set_min_severity(Severity::Warning);
    assert!(!log_is_on!(Info));
    assert!(log_is_on!(Warning));
    assert!(log_is_on!(Fatal));

    init(LogConfig::default());
}

#[test]
#[serial]
fn fatal_is_enabled_under_any_threshold() {
    reset(LogConfig::default().with_min_severity(Severity::from_level(i32::MAX)));
    assert!(policy().is_enabled(Severity::Fatal));
    assert!(!policy().is_enabled(Severity::ErrorReport));
    init(LogConfig::default());
}
