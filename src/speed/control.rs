//! Live run speed setting shared between a control surface and a step loop.

use std::time::Duration;
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;
use super::table::{
    check_index, speed_label, SPEED_INDEX_INIT, SPEED_INDEX_MAX, SPEED_TABLE, UNLIMITED_SPEED,
};

/// Errors from the run speed control.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeedError {
    #[error("run speed index {index} out of range (0-{max})")]
    IndexOutOfRange { index: usize, max: usize },
}

/// Current run speed selection.
///
/// One thread sets the index, any number of threads read the rate. The
/// index is a single atomic, so readers always see a table rate.
#[derive(Debug)]
pub struct RunSpeed {
    index: AtomicUsize,
}

impl RunSpeed {
    /// Create a control at the initial (unlimited) position.
    pub fn new() -> Self {
        Self {
            index: AtomicUsize::new(SPEED_INDEX_INIT),
        }
    }

    /// Current index.
    pub fn index(&self) -> usize {
        self.index.load(Ordering::SeqCst)
    }

    /// Move to `index`. Out of range indices are rejected and leave the
    /// current setting in place.
    pub fn set_index(&self, index: usize) -> Result<(), SpeedError> {
        let index = check_index(index).map_err(|e| {
            tracing::warn!(index, "rejected run speed index");
            e
        })?;
        let old = self.index.swap(index, Ordering::SeqCst);
        if old != index {
            tracing::debug!(old, new = index, rate = SPEED_TABLE[index], "run speed changed");
        }
        Ok(())
    }

    /// Current rate in instructions per second, or [`UNLIMITED_SPEED`].
    pub fn run_speed(&self) -> f64 {
        SPEED_TABLE[self.index()]
    }

    /// Whether the step loop should run without throttling.
    pub fn is_unlimited(&self) -> bool {
        self.run_speed() == UNLIMITED_SPEED
    }

    /// Pause between steps at the current rate, `None` when unlimited.
    pub fn step_delay(&self) -> Option<Duration> {
        let rate = self.run_speed();
        if rate == UNLIMITED_SPEED {
            None
        } else {
            Some(Duration::from_secs_f64(1.0 / rate))
        }
    }

    /// Label for the current position.
    pub fn label(&self) -> String {
        // The stored index is always valid.
        speed_label(self.index()).unwrap_or_default()
    }

    /// Move one position up, saturating at the maximum. Returns the new index.
    pub fn faster(&self) -> usize {
        let next = (self.index() + 1).min(SPEED_INDEX_MAX);
        let _ = self.set_index(next);
        next
    }

    /// Move one position down, saturating at zero. Returns the new index.
    pub fn slower(&self) -> usize {
        let next = self.index().saturating_sub(1);
        let _ = self.set_index(next);
        next
    }
}

impl Default for RunSpeed {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_starts_unlimited() {
        let speed = RunSpeed::new();
        assert_eq!(speed.index(), 40);
        assert_eq!(speed.run_speed(), UNLIMITED_SPEED);
        assert!(speed.is_unlimited());
        assert_eq!(speed.step_delay(), None);
    }

    #[test]
    fn test_set_index() {
        let speed = RunSpeed::new();
        speed.set_index(0).unwrap();
        assert_eq!(speed.run_speed(), 0.05);
        let delay = speed.step_delay().unwrap();
        assert!((delay.as_secs_f64() - 20.0).abs() < 1e-6);
        speed.set_index(15).unwrap();
        assert_eq!(speed.run_speed(), 10.0);
        assert_eq!(speed.label(), "Run speed 10 inst/sec");
    }

    #[test]
    fn test_rejects_out_of_range() {
        let speed = RunSpeed::new();
        speed.set_index(3).unwrap();
        let err = speed.set_index(41).unwrap_err();
        assert_eq!(err, SpeedError::IndexOutOfRange { index: 41, max: 40 });
        assert_eq!(speed.index(), 3);
    }

    #[test]
    fn test_faster_slower_saturate() {
        let speed = RunSpeed::new();
        assert_eq!(speed.faster(), 40);
        speed.set_index(0).unwrap();
        assert_eq!(speed.slower(), 0);
        assert_eq!(speed.faster(), 1);
    }

    #[test]
    fn test_concurrent_reads_see_table_values() {
        let speed = Arc::new(RunSpeed::new());

        let writer = {
            let speed = Arc::clone(&speed);
            thread::spawn(move || {
                for round in 0..2_000 {
                    speed.set_index(round % (SPEED_INDEX_MAX + 1)).unwrap();
                }
            })
        };

        let reader = {
            let speed = Arc::clone(&speed);
            thread::spawn(move || {
                for _ in 0..10_000 {
                    let rate = speed.run_speed();
                    assert!(SPEED_TABLE.contains(&rate), "torn rate {}", rate);
                }
            })
        };

        writer.join().unwrap();
        reader.join().unwrap();
    }
}
