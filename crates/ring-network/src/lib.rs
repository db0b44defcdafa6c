//! `ring-network`: ring-road geometry, topology, and routes.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`ring`]      | `RingParams`, `RingGeometry`: nodes and quarter-arc shapes   |
//! | [`topology`]  | `Topology`, `Node`, `Edge`, `EdgeType`, `network_name`        |
//! | [`routes`]    | `RouteCatalog`, `Route`, `Rerouter`                           |
//! | [`compiler`]  | `NetworkCompiler` trait, `NetworkArtifact`                    |
//! | [`error`]     | `NetworkError`, `NetworkResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `RingParams`.           |

pub mod compiler;
pub mod error;
pub mod ring;
pub mod routes;
pub mod topology;


pub use compiler::{NetworkArtifact, NetworkCompiler};
pub use error::{NetworkError, NetworkResult};
pub use ring::{RingGeometry, RingParams};
pub use routes::{Rerouter, Route, RouteCatalog};
pub use topology::{Edge, EdgeType, Node, Topology, network_name};
