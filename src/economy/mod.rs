//! Economy core: currency, click upgrades, generators and passive production.
//!
//! Nothing in here knows about the terminal or the DOM. The presentation layer
//! drives a [`ClickerGame`] and receives [`Snapshot`]s through a [`Presenter`].

pub mod config;
pub mod error;
pub mod facade;
pub mod generator;
pub mod scheduler;
pub mod state;
pub mod upgrade;

pub use config::Config;
pub use facade::{ClickerGame, Outcome, Snapshot};
pub use state::GeneratorKind;
