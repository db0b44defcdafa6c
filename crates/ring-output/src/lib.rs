//! `ring-output`: persistence and external-tool backends for ring scenarios.
//!
//! Two document backends implement [`DocumentWriter`]:
//!
//! | Backend      | Files created (for scenario `name`)                               |
//! |--------------|-------------------------------------------------------------------|
//! | [`XmlWriter`] | `name.nod.xml`, `.edg.xml`, `.typ.xml`, `.add.xml`, `.rou.xml`, `.sumo.cfg`, `.gui.cfg` |
//! | [`CsvWriter`] | `name_nodes.csv`, `_edges.csv`, `_routes.csv`, `_rerouters.csv`, `_vtypes.csv`, `_vehicles.csv`, `_run.csv` |
//!
//! [`NetconvertCompiler`] implements `ring_network::NetworkCompiler` by
//! writing the topology documents plus a `.netccfg` and running the
//! `netconvert` binary.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ring_output::{DocumentWriter, XmlWriter};
//!
//! let mut writer = XmlWriter::new(Path::new("./cfg"))?;
//! writer.write_routes(&catalog, "loop-230m1l")?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod netconvert;
pub mod writer;
pub mod xml;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use netconvert::NetconvertCompiler;
pub use writer::{DocKind, DocumentWriter, RunConfig};
pub use xml::XmlWriter;
