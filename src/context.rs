//! Per-run simulator context.
//!
//! Owns the run speed control for one simulator run. The control is built
//! on first access; until then `run_speed_exists` stays false, which is how
//! headless or batch tooling tells that no rate control is active.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use crate::speed::RunSpeed;

/// Context passed to the pieces of a simulator run that need pacing.
#[derive(Debug, Default)]
pub struct SimContext {
    run_speed: OnceLock<RunSpeed>,
    run_speed_exists: AtomicBool,
}

impl SimContext {
    /// Create a context with no run speed control yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The run speed control, created on first call.
    pub fn run_speed(&self) -> &RunSpeed {
        self.run_speed.get_or_init(|| {
            self.run_speed_exists.store(true, Ordering::SeqCst);
            tracing::debug!("run speed control created");
            RunSpeed::new()
        })
    }

    /// Whether [`SimContext::run_speed`] has been called on this context.
    pub fn run_speed_exists(&self) -> bool {
        self.run_speed_exists.load(Ordering::SeqCst)
    }

    /// Current rate if a control exists, without creating one.
    pub fn current_speed(&self) -> Option<f64> {
        self.run_speed.get().map(RunSpeed::run_speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speed::UNLIMITED_SPEED;

    #[test]
    fn test_lazy_creation_sets_flag() {
        let ctx = SimContext::new();
        assert!(!ctx.run_speed_exists());
        assert_eq!(ctx.current_speed(), None);

        assert_eq!(ctx.run_speed().run_speed(), UNLIMITED_SPEED);
        assert!(ctx.run_speed_exists());
        assert_eq!(ctx.current_speed(), Some(UNLIMITED_SPEED));
    }

    #[test]
    fn test_same_control_each_call() {
        let ctx = SimContext::new();
        ctx.run_speed().set_index(7).unwrap();
        assert_eq!(ctx.run_speed().index(), 7);
    }

    #[test]
    fn test_contexts_are_independent() {
        let a = SimContext::new();
        let b = SimContext::new();
        a.run_speed().set_index(0).unwrap();
        assert!(!b.run_speed_exists());
        assert_eq!(b.run_speed().index(), 40);
    }
}
