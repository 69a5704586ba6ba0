//! Debt payoff and emergency fund planning.
//!
//! The engines in [`payoff`] and [`projection`] are pure functions over decimal money.
//! [`import`] and [`config`] handle everything that touches the filesystem.

pub mod config;
pub mod format;
pub mod import;
pub mod models;
pub mod payoff;
pub mod planner;
pub mod projection;

pub use config::Config;
