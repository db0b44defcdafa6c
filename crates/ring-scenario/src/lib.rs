//! `ring-scenario`: end-to-end ring-road scenario generation.
//!
//! # Pipeline
//!
//! ```text
//! ScenarioConfig ──plan()──▶ ScenarioPlan ──NetworkCompiler──▶ NetworkArtifact
//!                              │
//!                              └──DocumentWriter──▶ topology, routes, fleet, run config
//! ```
//!
//! [`plan`] is pure: it validates the whole config and synthesizes topology,
//! routes, vehicle types and the placed fleet.  Only then does
//! [`ScenarioBuilder::build`] call the external compiler and writer, so a
//! configuration error never leaves partial output behind.
//!
//! # Crate layout
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`config`]  | `ScenarioConfig`, `InitialSection` (JSON)          |
//! | [`plan`]    | `plan`, `ScenarioPlan`                             |
//! | [`builder`] | `ScenarioBuilder`, `Scenario`                      |
//! | [`error`]   | `ScenarioError`, `ScenarioResult<T>`               |

pub mod builder;
pub mod config;
pub mod error;
pub mod plan;

#[cfg(test)]
mod tests;

pub use builder::{Scenario, ScenarioBuilder};
pub use config::{InitialSection, ScenarioConfig};
pub use error::{ScenarioError, ScenarioResult};
pub use plan::{ScenarioPlan, plan};
