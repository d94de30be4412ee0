//! Unit tests for perf module.

use timegrid::perf::{
    HANDLER_BUDGET_MS, OperationStats, ScopedTimer, handler_stats, is_profiling_enabled, record_handler,
    reset_handler_stats, set_profiling_enabled,
};

#[test]
fn test_scoped_timer_records_when_enabled() {
    set_profiling_enabled(true);
    reset_handler_stats();

    {
        // High threshold, no warning expected
        let _timer = ScopedTimer::new("perf_test_scope", 1000.0);
    }

    let stats = handler_stats("perf_test_scope").expect("sample recorded");
    assert_eq!(stats.count(), 1);
    assert!(stats.max() >= 0.0);
    assert!(is_profiling_enabled());
}

#[test]
fn test_reset_drops_samples() {
    record_handler("perf_test_reset", 2.0);
    assert!(handler_stats("perf_test_reset").is_some());

    reset_handler_stats();

    assert!(handler_stats("perf_test_reset").is_none());
}

#[test]
fn test_recorded_samples_aggregate() {
    reset_handler_stats();
    for ms in [1.0, 2.0, 3.0, 10.0] {
        record_handler("perf_test_aggregate", ms);
    }

    let stats = handler_stats("perf_test_aggregate").unwrap();
    assert_eq!(stats.count(), 4);
    assert_eq!(stats.max(), 10.0);
    assert!((stats.average() - 4.0).abs() < 1e-9);
}

#[test]
fn test_empty_stats() {
    let stats = OperationStats::default();

    assert_eq!(stats.count(), 0);
    assert_eq!(stats.average(), 0.0);
    assert_eq!(stats.p95(), 0.0);
}

#[test]
fn test_profiling_timer_uses_handler_budget() {
    let timer = ScopedTimer::for_profiling("perf_test_budget");

    assert!(timer.elapsed_ms() < HANDLER_BUDGET_MS * 1000.0);
}
