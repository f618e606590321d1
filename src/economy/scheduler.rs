//! Passive production on a fixed interval.
//!
//! The scheduler owns at most one timer. Time is pushed in from outside via
//! [`ProductionScheduler::advance`], so the browser frame loop and tests drive
//! it the same way and no wall clock is read here.

use crate::console;

use super::config::GeneratorTable;
use super::state::EconomyState;

/// A running timer: milliseconds accumulated since its last fire.
#[derive(Clone, Copy, Debug, Default)]
struct Timer {
    elapsed_ms: u64,
}

#[derive(Clone, Debug)]
pub struct ProductionScheduler {
    interval_ms: u64,
    generators: GeneratorTable,
    timer: Option<Timer>,
}

impl ProductionScheduler {
    pub fn new(interval_ms: u64, generators: GeneratorTable) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            generators,
            timer: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Arm the timer, replacing any running one. The first fire happens one
    /// full interval from now.
    pub fn start(&mut self) {
        if self.timer.replace(Timer::default()).is_some() {
            console::log("production timer restarted");
        } else {
            console::log(&format!(
                "production timer started ({} ms interval)",
                self.interval_ms
            ));
        }
    }

    /// Start only if not already running; an existing timer keeps its phase.
    pub fn ensure_running(&mut self) {
        if !self.is_running() {
            self.start();
        }
    }

    pub fn stop(&mut self) {
        if self.timer.take().is_some() {
            console::log("production timer stopped");
        }
    }

    /// Let `elapsed_ms` pass and return how many fires fell due.
    pub fn advance(&mut self, elapsed_ms: u64) -> u32 {
        let Some(timer) = self.timer.as_mut() else {
            return 0;
        };
        let total = timer.elapsed_ms.saturating_add(elapsed_ms);
        let fires = total / self.interval_ms;
        timer.elapsed_ms = total % self.interval_ms;
        u32::try_from(fires).unwrap_or(u32::MAX)
    }

    /// Currency one fire produces for the given holdings.
    pub fn production_per_tick(&self, state: &EconomyState) -> u64 {
        state
            .owned_generators()
            .map(|(kind, owned)| owned.saturating_mul(self.generators.spec(kind).rate))
            .fold(0u64, u64::saturating_add)
    }

    /// Credit one tick of production and return the amount.
    pub fn fire(&self, state: &mut EconomyState) -> u64 {
        let amount = self.production_per_tick(state);
        state.credit(amount);
        amount
    }
}
