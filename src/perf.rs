//! Performance instrumentation for the input handlers.
//!
//! Pointer-move handlers run for every frame of a gesture, so their cost
//! matters. This module provides:
//!
//! - **Scoped timers**: RAII timing that warns when a handler is slow
//! - **Handler statistics**: per-handler samples (avg, p95, max) collected
//!   on the current thread while profiling is enabled
//! - **Conditional compilation**: `profile_scope!` is zero-cost unless the
//!   `profiling` feature is on
//!
//! ```ignore
//! fn handle_pointer(...) {
//!     profile_scope!("handle_pointer");
//!     // ... dispatch ...
//! }
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

// ============================================================================
// Constants
// ============================================================================

/// Budget for one input handler (a quarter of a 60 FPS frame)
pub const HANDLER_BUDGET_MS: f64 = 4.0;

/// Number of samples to keep per handler
const STATS_SAMPLE_COUNT: usize = 100;

/// Global flag to enable/disable statistics collection at runtime
static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

thread_local! {
    static HANDLER_STATS: RefCell<HashMap<&'static str, OperationStats>> = RefCell::new(HashMap::new());
}

// ============================================================================
// Profiling Macros (zero-cost when disabled)
// ============================================================================

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

// ============================================================================
// Runtime Profiling Control
// ============================================================================

/// Enable or disable statistics collection at runtime.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

#[inline]
pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

// ============================================================================
// Handler Statistics
// ============================================================================

/// Timing samples for one handler.
#[derive(Debug, Clone)]
pub struct OperationStats {
    samples: VecDeque<f64>,
    count: u64,
    max_ms: f64,
    sum_ms: f64,
}

impl Default for OperationStats {
    fn default() -> Self {
        Self {
            samples: VecDeque::with_capacity(STATS_SAMPLE_COUNT),
            count: 0,
            max_ms: 0.0,
            sum_ms: 0.0,
        }
    }
}

impl OperationStats {
    /// Record a new timing sample.
    pub fn record(&mut self, ms: f64) {
        if self.samples.len() >= STATS_SAMPLE_COUNT {
            if let Some(old) = self.samples.pop_front() {
                self.sum_ms -= old;
            }
        }
        self.samples.push_back(ms);
        self.sum_ms += ms;
        self.count += 1;
        self.max_ms = self.max_ms.max(ms);
    }

    /// Total invocations, including samples that aged out
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn max(&self) -> f64 {
        self.max_ms
    }

    /// Average over the retained samples
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.sum_ms / self.samples.len() as f64
        }
    }

    /// 95th percentile over the retained samples
    pub fn p95(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let mut sorted: Vec<f64> = self.samples.iter().copied().collect();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let idx = ((sorted.len() as f64) * 0.95).floor() as usize;
        sorted[idx.min(sorted.len() - 1)]
    }
}

/// Record a sample for `name` on the current thread
pub fn record_handler(name: &'static str, elapsed_ms: f64) {
    HANDLER_STATS.with(|stats| stats.borrow_mut().entry(name).or_default().record(elapsed_ms));
}

/// Snapshot of the statistics for one handler on the current thread
pub fn handler_stats(name: &str) -> Option<OperationStats> {
    HANDLER_STATS.with(|stats| stats.borrow().get(name).cloned())
}

/// Drop all statistics collected on the current thread
pub fn reset_handler_stats() {
    HANDLER_STATS.with(|stats| stats.borrow_mut().clear());
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// A scoped timer that records and checks its duration on drop.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    /// Create a new scoped timer with a warning threshold.
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer with the handler budget as threshold.
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, HANDLER_BUDGET_MS)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();

        if is_profiling_enabled() {
            record_handler(self.name, elapsed_ms);
            #[cfg(feature = "profiling")]
            trace!("[PERF] {}: {:.3}ms", self.name, elapsed_ms);
        }

        if elapsed_ms > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow input handler"
            );
        }
    }
}
