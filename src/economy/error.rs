//! Error types for the economy core.

use thiserror::Error;

/// A purchase was attempted with less balance than its price.
///
/// This is the only failure the game models. Callers that do not care about
/// the amounts use the boolean `try_*` wrappers instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("insufficient funds: costs {cost}, balance is {balance}")]
pub struct InsufficientFunds {
    pub cost: u64,
    pub balance: u64,
}

/// Rejected configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("`{field}` must be greater than zero")]
    NotPositive { field: &'static str },

    #[error("`{field}` must be a finite number >= 1.0, got {value}")]
    GrowthTooSmall { field: &'static str, value: f64 },
}
