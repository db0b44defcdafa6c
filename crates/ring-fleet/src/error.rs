use thiserror::Error;

use ring_core::{RouteId, VehicleTypeId};

/// Fleet configuration errors.  All of them are fatal: no partial fleet is
/// ever returned.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FleetError {
    #[error("{what} length {got} does not match vehicle count {expected}")]
    CountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("vehicle type {0} declared more than once")]
    DuplicateType(VehicleTypeId),

    #[error("vehicle type {0} is not declared")]
    UnknownType(VehicleTypeId),

    #[error("route {0} is not in the route catalog")]
    UnknownRoute(RouteId),

    #[error("lane {lane} out of range: the ring has {lanes} lane(s)")]
    LaneOutOfRange { lane: u32, lanes: u32 },
}

pub type FleetResult<T> = Result<T, FleetError>;
