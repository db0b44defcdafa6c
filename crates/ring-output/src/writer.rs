//! The `DocumentWriter` trait implemented by all backend writers, and the
//! file-naming convention shared by them.

use std::path::PathBuf;

use ring_core::TimeWindow;
use ring_fleet::{VehicleInstance, VehicleType};
use ring_network::{RouteCatalog, Topology};

use crate::OutputResult;

// ── File naming ───────────────────────────────────────────────────────────────

/// Every document a scenario produces, keyed by its file suffix.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DocKind {
    Nodes,
    Edges,
    Types,
    NetConfig,
    Net,
    Additional,
    Routes,
    RunConfig,
    Gui,
}

impl DocKind {
    pub fn suffix(self) -> &'static str {
        match self {
            DocKind::Nodes      => ".nod.xml",
            DocKind::Edges      => ".edg.xml",
            DocKind::Types      => ".typ.xml",
            DocKind::NetConfig  => ".netccfg",
            DocKind::Net        => ".net.xml",
            DocKind::Additional => ".add.xml",
            DocKind::Routes     => ".rou.xml",
            DocKind::RunConfig  => ".sumo.cfg",
            DocKind::Gui        => ".gui.cfg",
        }
    }

    /// `name` + suffix, e.g. `loop-230m1l.rou.xml`.
    pub fn file_name(self, name: &str) -> String {
        format!("{name}{}", self.suffix())
    }
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Simulator run configuration: which files to load and the time window.
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    pub net_file:        String,
    pub route_file:      String,
    pub additional_file: String,
    pub gui_file:        String,
    pub window:          TimeWindow,
}

impl RunConfig {
    /// Run configuration for scenario `name` whose compiled network is
    /// `net_file`.
    pub fn for_scenario(name: &str, net_file: &str, window: TimeWindow) -> Self {
        Self {
            net_file:        net_file.to_owned(),
            route_file:      DocKind::Routes.file_name(name),
            additional_file: DocKind::Additional.file_name(name),
            gui_file:        DocKind::Gui.file_name(name),
            window,
        }
    }
}

// ── DocumentWriter ────────────────────────────────────────────────────────────

/// Trait implemented by the XML and CSV writers.
///
/// Each call persists one record set under the target `name`.  Errors are
/// fatal to scenario generation; callers do not retry.
pub trait DocumentWriter {
    /// Nodes, edges and the shared edge type.
    fn write_topology(&mut self, topology: &Topology, name: &str) -> OutputResult<()>;

    /// Routes and rerouters.
    fn write_routes(&mut self, catalog: &RouteCatalog, name: &str) -> OutputResult<()>;

    /// Vehicle types followed by vehicle instances.
    fn write_fleet(
        &mut self,
        types: &[VehicleType],
        vehicles: &[VehicleInstance],
        name: &str,
    ) -> OutputResult<()>;

    fn write_run_config(&mut self, run: &RunConfig, name: &str) -> OutputResult<()>;

    /// Paths written so far, in write order.
    fn written(&self) -> &[PathBuf];

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
