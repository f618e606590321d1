//! The game as seen by a presentation layer.
//!
//! [`ClickerGame`] owns the economy and its controllers. Every operation,
//! whether it changed anything or not, ends with exactly one call to the
//! [`Presenter`] with a fresh [`Snapshot`]. Each production tick notifies once.

use serde::Serialize;

use crate::console;

use super::config::Config;
use super::generator::GeneratorController;
use super::scheduler::ProductionScheduler;
use super::state::{EconomyState, GeneratorKind};
use super::upgrade::UpgradeController;

/// Receives a snapshot after every state change.
pub trait Presenter {
    fn present(&mut self, snapshot: &Snapshot);
}

impl<F: FnMut(&Snapshot)> Presenter for F {
    fn present(&mut self, snapshot: &Snapshot) {
        self(snapshot)
    }
}

/// Per-kind view of a generator for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GeneratorView {
    pub kind: GeneratorKind,
    pub owned: u64,
    pub next_cost: u64,
    pub rate: u64,
    pub affordable: bool,
}

/// Read-only view of the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub balance: u64,
    pub click_yield: u64,
    pub upgrade_count: u64,
    pub next_upgrade_cost: u64,
    pub can_upgrade: bool,
    /// One entry per kind, in [`GeneratorKind::all`] order.
    pub generators: Vec<GeneratorView>,
    pub production_per_tick: u64,
    pub production_running: bool,
}

impl Snapshot {
    pub fn generator(&self, kind: GeneratorKind) -> Option<&GeneratorView> {
        self.generators.iter().find(|g| g.kind == kind)
    }

    pub fn owned(&self, kind: GeneratorKind) -> u64 {
        self.generator(kind).map_or(0, |g| g.owned)
    }
}

/// Outcome of a user action, for message logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Clicked { earned: u64 },
    Upgraded { level: u64, click_yield: u64 },
    Bought { kind: GeneratorKind, owned: u64 },
    TooExpensive { cost: u64 },
}

pub struct ClickerGame<P: Presenter> {
    state: EconomyState,
    upgrades: UpgradeController,
    generators: GeneratorController,
    scheduler: ProductionScheduler,
    presenter: P,
}

impl<P: Presenter> ClickerGame<P> {
    pub fn new(config: &Config, presenter: P) -> Self {
        console::log(&format!(
            "new game: {}",
            serde_json::to_string(config).unwrap_or_default()
        ));
        Self {
            state: EconomyState::new(config.initial_upgrade_cost),
            upgrades: UpgradeController::new(config.upgrade_growth),
            generators: GeneratorController::new(config.generator_growth, config.generators),
            scheduler: ProductionScheduler::new(config.tick_interval_ms, config.generators),
            presenter,
        }
    }

    pub fn state(&self) -> &EconomyState {
        &self.state
    }

    /// Credit one click's worth of currency.
    pub fn click(&mut self) -> Outcome {
        let earned = self.state.click_yield();
        self.state.credit(earned);
        self.notify();
        Outcome::Clicked { earned }
    }

    /// Spend currency on a click upgrade. False if it was too expensive.
    pub fn upgrade(&mut self) -> bool {
        matches!(self.upgrade_outcome(), Outcome::Upgraded { .. })
    }

    pub fn upgrade_outcome(&mut self) -> Outcome {
        let outcome = match self.upgrades.upgrade(&mut self.state) {
            Ok(r) => {
                console::log(&format!(
                    "upgrade {} bought for {} (yield {}, next {})",
                    r.level, r.paid, r.click_yield, r.next_cost
                ));
                Outcome::Upgraded {
                    level: r.level,
                    click_yield: r.click_yield,
                }
            }
            Err(e) => Outcome::TooExpensive { cost: e.cost },
        };
        self.notify();
        outcome
    }

    /// Buy one generator of `kind`. False if it was too expensive.
    pub fn buy_generator(&mut self, kind: GeneratorKind) -> bool {
        matches!(self.buy_outcome(kind), Outcome::Bought { .. })
    }

    pub fn buy_outcome(&mut self, kind: GeneratorKind) -> Outcome {
        let outcome = match self
            .generators
            .buy(&mut self.state, kind, &mut self.scheduler)
        {
            Ok(p) => {
                console::log(&format!(
                    "{} bought for {} (owned {}, next {})",
                    p.kind.name(),
                    p.paid,
                    p.owned,
                    p.next_cost
                ));
                Outcome::Bought {
                    kind: p.kind,
                    owned: p.owned,
                }
            }
            Err(e) => Outcome::TooExpensive { cost: e.cost },
        };
        self.notify();
        outcome
    }

    /// Let time pass. Each production tick that falls due credits the
    /// holdings' output and notifies once. Returns the total credited.
    pub fn advance(&mut self, elapsed_ms: u64) -> u64 {
        let fires = self.scheduler.advance(elapsed_ms);
        let mut total = 0u64;
        for _ in 0..fires {
            total = total.saturating_add(self.scheduler.fire(&mut self.state));
            self.notify();
        }
        total
    }

    /// Arm the production timer (replacing any running one).
    pub fn start_production(&mut self) {
        self.scheduler.start();
    }

    pub fn stop_production(&mut self) {
        self.scheduler.stop();
    }

    pub fn snapshot(&self) -> Snapshot {
        let balance = self.state.balance();
        let generators = GeneratorKind::all()
            .iter()
            .map(|&kind| {
                let next_cost = self
                    .state
                    .holding(kind)
                    .map_or_else(|| self.generators.cost_for(&self.state, kind), |h| h.current_cost);
                GeneratorView {
                    kind,
                    owned: self.state.owned(kind),
                    next_cost,
                    rate: self.generators.generators().spec(kind).rate,
                    affordable: balance >= next_cost,
                }
            })
            .collect();

        Snapshot {
            balance,
            click_yield: self.state.click_yield(),
            upgrade_count: self.state.upgrade_count(),
            next_upgrade_cost: self.state.next_upgrade_cost(),
            can_upgrade: balance >= self.state.next_upgrade_cost(),
            generators,
            production_per_tick: self.scheduler.production_per_tick(&self.state),
            production_running: self.scheduler.is_running(),
        }
    }

    fn notify(&mut self) {
        let snapshot = self.snapshot();
        self.presenter.present(&snapshot);
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Clone, Debug)]
    enum Op {
        Click,
        Upgrade,
        Buy(GeneratorKind),
        Advance(u64),
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => Just(Op::Click),
            1 => Just(Op::Upgrade),
            1 => Just(Op::Buy(GeneratorKind::Farm)),
            1 => Just(Op::Buy(GeneratorKind::Factory)),
            1 => (0u64..3_000).prop_map(Op::Advance),
        ]
    }

    proptest! {
        #[test]
        fn prop_balance_is_earned_minus_spent(ops in prop::collection::vec(arb_op(), 0..300)) {
            let mut g = ClickerGame::new(&Config::default(), |_: &Snapshot| {});
            let mut earned = 0u64;
            let mut spent = 0u64;
            for op in ops {
                let before = g.snapshot();
                match op {
                    Op::Click => {
                        earned += before.click_yield;
                        g.click();
                    }
                    Op::Upgrade => {
                        if g.upgrade() {
                            spent += before.next_upgrade_cost;
                        }
                    }
                    Op::Buy(kind) => {
                        if g.buy_generator(kind) {
                            spent += before.generator(kind).unwrap().next_cost;
                        }
                    }
                    Op::Advance(ms) => {
                        earned += g.advance(ms);
                    }
                }
                prop_assert_eq!(g.state().balance(), earned - spent);
            }
        }

        #[test]
        fn prop_upgrade_fails_iff_balance_below_cost(clicks in 0u32..40) {
            let mut g = ClickerGame::new(&Config::default(), |_: &Snapshot| {});
            for _ in 0..clicks {
                g.click();
            }
            let before = g.snapshot();
            let ok = g.upgrade();
            prop_assert_eq!(ok, before.balance >= before.next_upgrade_cost);
            if ok {
                prop_assert_eq!(g.state().balance(), before.balance - before.next_upgrade_cost);
            } else {
                prop_assert_eq!(g.state().balance(), before.balance);
            }
        }

        #[test]
        fn prop_costs_and_yield_never_decrease(ops in prop::collection::vec(arb_op(), 0..200)) {
            let mut g = ClickerGame::new(&Config::default(), |_: &Snapshot| {});
            let mut prev = g.snapshot();
            for op in ops {
                match op {
                    Op::Click => { g.click(); }
                    Op::Upgrade => { g.upgrade(); }
                    Op::Buy(kind) => { g.buy_generator(kind); }
                    Op::Advance(ms) => { g.advance(ms); }
                }
                let now = g.snapshot();
                prop_assert!(now.click_yield >= prev.click_yield);
                prop_assert!(now.next_upgrade_cost >= prev.next_upgrade_cost);
                for (a, b) in prev.generators.iter().zip(now.generators.iter()) {
                    prop_assert!(b.next_cost >= a.next_cost);
                    prop_assert!(b.owned >= a.owned);
                }
                prev = now;
            }
        }

        #[test]
        fn prop_generator_cost_matches_closed_form(n in 0u64..40) {
            let ctl = GeneratorController::new(1.5, Config::default().generators);
            let expected = (50f64 * 1.5f64.powi(n as i32)).floor() as u64;
            prop_assert_eq!(ctl.next_cost(GeneratorKind::Farm, n), expected);
        }
    }
}
