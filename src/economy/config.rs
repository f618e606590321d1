//! Tunable economy constants.
//!
//! Every key is optional in the JSON form; missing keys keep their defaults.
//!
//! ```json
//! { "initial_upgrade_cost": 10, "generators": { "factory": { "base_cost": 120, "rate": 12 } } }
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::state::GeneratorKind;

/// Price and output of one generator kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSpec {
    pub base_cost: u64,
    /// Currency produced per unit per production tick.
    pub rate: u64,
}

/// Specs for every generator kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorTable {
    pub farm: GeneratorSpec,
    pub factory: GeneratorSpec,
}

impl Default for GeneratorTable {
    fn default() -> Self {
        Self {
            farm: GeneratorSpec {
                base_cost: 50,
                rate: 1,
            },
            factory: GeneratorSpec {
                base_cost: 100,
                rate: 10,
            },
        }
    }
}

impl GeneratorTable {
    pub fn spec(&self, kind: GeneratorKind) -> GeneratorSpec {
        match kind {
            GeneratorKind::Farm => self.farm,
            GeneratorKind::Factory => self.factory,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub initial_upgrade_cost: u64,
    pub upgrade_growth: f64,
    pub generator_growth: f64,
    pub generators: GeneratorTable,
    pub tick_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_upgrade_cost: 10,
            upgrade_growth: 1.5,
            generator_growth: 1.5,
            generators: GeneratorTable::default(),
            tick_interval_ms: 1000,
        }
    }
}

impl Config {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("initial_upgrade_cost", self.initial_upgrade_cost)?;
        positive("tick_interval_ms", self.tick_interval_ms)?;
        growth("upgrade_growth", self.upgrade_growth)?;
        growth("generator_growth", self.generator_growth)?;
        positive("generators.farm.base_cost", self.generators.farm.base_cost)?;
        positive("generators.farm.rate", self.generators.farm.rate)?;
        positive("generators.factory.base_cost", self.generators.factory.base_cost)?;
        positive("generators.factory.rate", self.generators.factory.rate)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: u64) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::NotPositive { field });
    }
    Ok(())
}

// Costs must never shrink, so growth below 1.0 (or NaN) is rejected.
fn growth(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 1.0 {
        return Err(ConfigError::GrowthTooSmall { field, value });
    }
    Ok(())
}
