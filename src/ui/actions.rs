//! Action ids for click targets.

use crate::economy::GeneratorKind;

pub const MAKE_MONEY: u16 = 0;
pub const UPGRADE: u16 = 1;

/// Generator purchases: base + index in `GeneratorKind::all()`.
pub const BUY_GENERATOR_BASE: u16 = 100;

pub fn buy_generator(kind: GeneratorKind) -> u16 {
    let idx = GeneratorKind::all()
        .iter()
        .position(|k| *k == kind)
        .unwrap_or(0);
    BUY_GENERATOR_BASE + idx as u16
}

pub fn generator_for(action_id: u16) -> Option<GeneratorKind> {
    let idx = action_id.checked_sub(BUY_GENERATOR_BASE)?;
    GeneratorKind::all().get(idx as usize).copied()
}
