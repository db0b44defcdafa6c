//! `ring-fleet`: vehicle types and initial fleet placement.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`vtype`]    | `VehicleTypeSpec`, `VehicleType`, `CarFollowModel`, `resolve` |
//! | [`placer`]   | `FleetPlacer`, `InitialConfig`, `Placement`, `VehicleInstance` |
//! | [`spacing`]  | `uniform`, evenly spaced placements around the ring          |
//! | [`error`]    | `FleetError`, `FleetResult<T>`                                |
//!
//! Vehicle ordering is always explicit: types are expanded in the order the
//! caller lists them, and the only reordering is an optional shuffle drawn
//! from a caller-supplied [`ring_core::ScenarioRng`].

pub mod error;
pub mod placer;
pub mod spacing;
pub mod vtype;


pub use error::{FleetError, FleetResult};
pub use placer::{FleetPlacer, InitialConfig, Placement, VEHICLE_COLOR, VehicleInstance, counts_of};
pub use vtype::{CarFollowModel, IDM_DEFAULTS, VehicleType, VehicleTypeSpec, resolve, resolve_all};
