//! Simulated Annealing engine.
//!
//! Single-solution trajectory search: starting from a caller-supplied
//! board, repeatedly propose a random single-position neighbor and accept
//! or reject it under a descending temperature.
//!
//! # Key Types
//!
//! - [`SaConfig`]: temperature schedule, acceptance rule, budgets
//! - [`SaRunner`]: executes the annealing loop
//! - [`SaResult`]: best candidate found plus run statistics
//!
//! The engine keeps running until the temperature bottoms out; it does not
//! stop on finding a solution unless [`SaConfig::target`] is set, so
//! callers should re-check the returned conflict count.
//!
//! # References
//!
//! Kirkpatrick et al. (1983), Cerny (1985)

mod config;
mod runner;

pub use config::{Acceptance, CoolingSchedule, SaConfig};
pub use runner::{SaResult, SaRunner};
