//! Click-power upgrades.

use super::error::InsufficientFunds;
use super::state::EconomyState;

/// Multiply a cost by a growth factor and round down.
///
/// Saturates at `u64::MAX` instead of overflowing, and never returns less
/// than `cost` for factors >= 1.0.
pub fn grow(cost: u64, growth: f64) -> u64 {
    let grown = (cost as f64 * growth).floor() as u64;
    grown.max(cost)
}

/// Result of a successful upgrade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpgradeReceipt {
    pub paid: u64,
    pub level: u64,
    pub click_yield: u64,
    pub next_cost: u64,
}

#[derive(Clone, Copy, Debug)]
pub struct UpgradeController {
    growth: f64,
}

impl UpgradeController {
    pub fn new(growth: f64) -> Self {
        Self { growth }
    }

    /// Spend `next_upgrade_cost` to raise click yield.
    ///
    /// The n-th upgrade adds n to the yield (+1, +2, +3, ...), and the next
    /// upgrade costs `floor(cost * growth)`.
    pub fn upgrade(&self, state: &mut EconomyState) -> Result<UpgradeReceipt, InsufficientFunds> {
        let cost = state.next_upgrade_cost();
        if !state.debit(cost) {
            return Err(InsufficientFunds {
                cost,
                balance: state.balance(),
            });
        }
        state.apply_upgrade(grow(cost, self.growth));
        Ok(UpgradeReceipt {
            paid: cost,
            level: state.upgrade_count(),
            click_yield: state.click_yield(),
            next_cost: state.next_upgrade_cost(),
        })
    }

    /// Boolean form of [`upgrade`](Self::upgrade): false means nothing changed.
    pub fn try_upgrade(&self, state: &mut EconomyState) -> bool {
        self.upgrade(state).is_ok()
    }
}
