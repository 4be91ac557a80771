//! Wall-clock time budget for a render.

use std::time::{Duration, Instant};

use tracing::warn;

use crate::error::{RenderError, RenderResult};

/// Maximum wall time a render may take before it is aborted.
pub const TIME_BUDGET: Duration = Duration::from_millis(5000);

/// Measures elapsed wall time against a fixed budget.
///
/// The watchdog is polled, not preemptive: the renderer calls [`check`](Self::check)
/// after every note, so a single very long note can overshoot the budget by
/// the time it takes to synthesize it.
#[derive(Debug, Clone, Copy)]
pub struct Watchdog {
    started: Instant,
    budget: Duration,
}

impl Watchdog {
    /// Starts a watchdog with the standard [`TIME_BUDGET`].
    pub fn start() -> Self {
        Self::with_budget(TIME_BUDGET)
    }

    pub(crate) fn with_budget(budget: Duration) -> Self {
        Self {
            started: Instant::now(),
            budget,
        }
    }

    /// Wall time since the watchdog started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// The configured budget.
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Fails with [`RenderError::TimeBudgetExceeded`] once the budget is used up.
    pub fn check(&self) -> RenderResult<()> {
        let elapsed = self.elapsed();
        if elapsed >= self.budget {
            warn!(?elapsed, budget = ?self.budget, "render exceeded its time budget");
            return Err(RenderError::TimeBudgetExceeded {
                elapsed,
                budget: self.budget,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_watchdog_passes() {
        let watchdog = Watchdog::start();
        assert!(watchdog.check().is_ok());
        assert_eq!(watchdog.budget(), Duration::from_secs(5));
    }

    #[test]
    fn test_zero_budget_trips_immediately() {
        let watchdog = Watchdog::with_budget(Duration::ZERO);
        let err = watchdog.check().unwrap_err();
        assert!(err.is_timeout());
    }

    #[test]
    fn test_trips_after_budget_elapses() {
        let watchdog = Watchdog::with_budget(Duration::from_millis(20));
        assert!(watchdog.check().is_ok());
        std::thread::sleep(Duration::from_millis(30));
        match watchdog.check() {
            Err(RenderError::TimeBudgetExceeded { elapsed, budget }) => {
                assert!(elapsed >= budget);
                assert_eq!(budget, Duration::from_millis(20));
            }
            other => panic!("expected timeout, got {:?}", other),
        }
    }
}
