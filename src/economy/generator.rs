//! Buying passive generators.
//!
//! Each kind keeps a single counter; a tick yields `owned * rate`. The price
//! of the next unit is `floor(base_cost * growth^owned)`.

use super::config::GeneratorTable;
use super::error::InsufficientFunds;
use super::scheduler::ProductionScheduler;
use super::state::{EconomyState, GeneratorKind};

/// Result of a successful purchase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Purchase {
    pub kind: GeneratorKind,
    pub paid: u64,
    pub owned: u64,
    pub next_cost: u64,
}

#[derive(Clone, Copy, Debug)]
pub struct GeneratorController {
    growth: f64,
    generators: GeneratorTable,
}

impl GeneratorController {
    pub fn new(growth: f64, generators: GeneratorTable) -> Self {
        Self { growth, generators }
    }

    pub fn generators(&self) -> &GeneratorTable {
        &self.generators
    }

    /// Price of the next unit when `owned` units are already held.
    pub fn next_cost(&self, kind: GeneratorKind, owned: u64) -> u64 {
        let base = self.generators.spec(kind).base_cost;
        let exp = i32::try_from(owned).unwrap_or(i32::MAX);
        (base as f64 * self.growth.powi(exp)).floor() as u64
    }

    /// Price of the next unit for the current holdings.
    pub fn cost_for(&self, state: &EconomyState, kind: GeneratorKind) -> u64 {
        self.next_cost(kind, state.owned(kind))
    }

    /// Buy one unit of `kind` and make sure production is running.
    pub fn buy(
        &self,
        state: &mut EconomyState,
        kind: GeneratorKind,
        scheduler: &mut ProductionScheduler,
    ) -> Result<Purchase, InsufficientFunds> {
        let cost = self.cost_for(state, kind);
        if !state.debit(cost) {
            return Err(InsufficientFunds {
                cost,
                balance: state.balance(),
            });
        }

        let base_cost = self.generators.spec(kind).base_cost;
        let holding = state.holding_mut(kind, base_cost);
        holding.owned = holding.owned.saturating_add(1);
        let owned = holding.owned;
        holding.current_cost = self.next_cost(kind, owned);
        let next_cost = holding.current_cost;

        scheduler.ensure_running();

        Ok(Purchase {
            kind,
            paid: cost,
            owned,
            next_cost,
        })
    }

    /// Boolean form of [`buy`](Self::buy): false means nothing changed.
    pub fn try_buy(
        &self,
        state: &mut EconomyState,
        kind: GeneratorKind,
        scheduler: &mut ProductionScheduler,
    ) -> bool {
        self.buy(state, kind, scheduler).is_ok()
    }
}
