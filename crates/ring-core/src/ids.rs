//! Strongly typed string identifiers.
//!
//! Every name that crosses a component boundary (node, edge, route, vehicle
//! type, vehicle) is wrapped in its own type so an `EdgeId` can never be
//! passed where a `RouteId` is expected.  The inner string is what ends up in
//! the emitted documents, so `Display` prints it verbatim.

use std::fmt;

/// Generate a typed ID wrapper around a `String`.
macro_rules! named_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(String);

        impl $name {
            pub fn new(name: impl Into<String>) -> Self {
                $name(name.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                $name(s.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                $name(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

named_id! {
    /// Name of a network node (`"bottom"`, `"right"`, ...).
    pub struct NodeId;
}

named_id! {
    /// Name of a directed network edge.
    pub struct EdgeId;
}

named_id! {
    /// Name of an edge type (lane count + speed limit bundle).
    pub struct EdgeTypeId;
}

named_id! {
    /// Name of a route (`"routetop"`, ...).
    pub struct RouteId;
}

named_id! {
    /// Name of a vehicle type (`"human"`, `"rl"`, ...).
    pub struct VehicleTypeId;
}

named_id! {
    /// Name of one vehicle instance, `"<type>_<index>"`.
    pub struct VehicleId;
}

impl VehicleId {
    /// The `index`-th vehicle of type `vtype`.
    pub fn nth(vtype: &VehicleTypeId, index: usize) -> Self {
        VehicleId(format!("{vtype}_{index}"))
    }
}
