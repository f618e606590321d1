//! Economy state: balance, click power, upgrade progress and owned generators.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Kinds of passive generators. The set is closed and known at compile time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorKind {
    Farm,
    Factory,
}

impl GeneratorKind {
    /// All generator kinds in display order.
    pub fn all() -> &'static [GeneratorKind] {
        &[GeneratorKind::Farm, GeneratorKind::Factory]
    }

    pub fn name(&self) -> &'static str {
        match self {
            GeneratorKind::Farm => "Farm",
            GeneratorKind::Factory => "Factory",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            GeneratorKind::Farm => "Farms",
            GeneratorKind::Factory => "Factories",
        }
    }

    /// Keyboard shortcut for buying one unit.
    pub fn key(&self) -> char {
        match self {
            GeneratorKind::Farm => '1',
            GeneratorKind::Factory => '2',
        }
    }

    pub fn from_key(key: char) -> Option<GeneratorKind> {
        GeneratorKind::all().iter().copied().find(|k| k.key() == key)
    }
}

/// How many units of one generator kind are owned, and what the next costs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorHolding {
    pub owned: u64,
    /// Price of the next unit. Kept in sync with `owned` by the generator controller.
    pub current_cost: u64,
}

impl GeneratorHolding {
    pub fn new(base_cost: u64) -> Self {
        Self {
            owned: 0,
            current_cost: base_cost,
        }
    }
}

/// The player's whole economy.
///
/// `balance` only moves through [`credit`](Self::credit) and
/// [`debit`](Self::debit), so it always equals everything earned minus
/// everything spent and can never go negative.
#[derive(Clone, Debug)]
pub struct EconomyState {
    balance: u64,
    click_yield: u64,
    upgrade_count: u64,
    next_upgrade_cost: u64,
    generators: BTreeMap<GeneratorKind, GeneratorHolding>,
}

impl EconomyState {
    pub fn new(initial_upgrade_cost: u64) -> Self {
        Self {
            balance: 0,
            click_yield: 1,
            upgrade_count: 0,
            next_upgrade_cost: initial_upgrade_cost,
            generators: BTreeMap::new(),
        }
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn click_yield(&self) -> u64 {
        self.click_yield
    }

    pub fn upgrade_count(&self) -> u64 {
        self.upgrade_count
    }

    pub fn next_upgrade_cost(&self) -> u64 {
        self.next_upgrade_cost
    }

    /// Add currency. Saturates at `u64::MAX`.
    pub fn credit(&mut self, amount: u64) {
        self.balance = self.balance.saturating_add(amount);
    }

    /// Remove currency if there is enough of it. Returns false and leaves the
    /// balance untouched otherwise.
    pub fn debit(&mut self, amount: u64) -> bool {
        match self.balance.checked_sub(amount) {
            Some(rest) => {
                self.balance = rest;
                true
            }
            None => false,
        }
    }

    /// Holding for `kind`, or `None` if it was never referenced.
    pub fn holding(&self, kind: GeneratorKind) -> Option<&GeneratorHolding> {
        self.generators.get(&kind)
    }

    /// Holding for `kind`, created with zero units on first reference.
    pub fn holding_mut(&mut self, kind: GeneratorKind, base_cost: u64) -> &mut GeneratorHolding {
        self.generators
            .entry(kind)
            .or_insert_with(|| GeneratorHolding::new(base_cost))
    }

    pub fn owned(&self, kind: GeneratorKind) -> u64 {
        self.holding(kind).map_or(0, |h| h.owned)
    }

    /// Owned kinds with at least one unit, in kind order.
    pub fn owned_generators(&self) -> impl Iterator<Item = (GeneratorKind, u64)> + '_ {
        self.generators
            .iter()
            .filter(|(_, h)| h.owned > 0)
            .map(|(k, h)| (*k, h.owned))
    }

    pub(super) fn apply_upgrade(&mut self, next_cost: u64) {
        self.upgrade_count = self.upgrade_count.saturating_add(1);
        self.click_yield = self.click_yield.saturating_add(self.upgrade_count);
        self.next_upgrade_cost = next_cost;
    }
}
