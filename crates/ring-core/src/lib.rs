//! `ring-core`: foundational types for ring-road scenario synthesis.
//!
//! This crate is a dependency of every other `ring-*` crate.  It has no
//! `ring-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`ids`]         | `NodeId`, `EdgeId`, `EdgeTypeId`, `RouteId`, `VehicleTypeId`, `VehicleId` |
//! | [`geo`]         | `Point`, decimal rounding                                   |
//! | [`cardinal`]    | `Cardinal`, the four ring positions and their angles      |
//! | [`rng`]         | `ScenarioRng` (seedable, injectable)                       |
//! | [`time`]        | `TimeWindow`, `Interval`                                   |
//! | [`error`]       | `RingError`, `RingResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cardinal;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cardinal::Cardinal;
pub use error::{RingError, RingResult};
pub use geo::Point;
pub use ids::{EdgeId, EdgeTypeId, NodeId, RouteId, VehicleId, VehicleTypeId};
pub use rng::ScenarioRng;
pub use time::{Interval, TimeWindow};
