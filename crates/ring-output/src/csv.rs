//! CSV output backend.
//!
//! Writes one table per record set, for inspection and plotting outside
//! the simulator:
//! - `<name>_nodes.csv`, `<name>_edges.csv`
//! - `<name>_routes.csv`, `<name>_rerouters.csv`
//! - `<name>_vtypes.csv`, `<name>_vehicles.csv`
//! - `<name>_run.csv`

use std::path::{Path, PathBuf};

use ::csv::Writer;
use log::debug;

use ring_fleet::{IDM_DEFAULTS, VehicleInstance, VehicleType};
use ring_network::{RouteCatalog, Topology};

use crate::OutputResult;
use crate::writer::{DocumentWriter, RunConfig};

/// Writes scenario records as CSV tables into one directory.
pub struct CsvWriter {
    dir:     PathBuf,
    written: Vec<PathBuf>,
}

impl CsvWriter {
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self { dir: dir.to_path_buf(), written: Vec::new() })
    }

    /// Open `<name>_<table>.csv` and write its header row.
    fn table(&mut self, name: &str, table: &str, header: &[&str]) -> OutputResult<Writer<std::fs::File>> {
        let path = self.dir.join(format!("{name}_{table}.csv"));
        let mut w = Writer::from_path(&path)?;
        w.write_record(header)?;
        debug!("writing {}", path.display());
        self.written.push(path);
        Ok(w)
    }
}

impl DocumentWriter for CsvWriter {
    fn write_topology(&mut self, topology: &Topology, name: &str) -> OutputResult<()> {
        let mut nodes = self.table(name, "nodes", &["id", "x", "y"])?;
        for n in &topology.nodes {
            nodes.write_record(&[n.id.to_string(), n.pos.x.to_string(), n.pos.y.to_string()])?;
        }
        nodes.flush()?;

        let mut edges = self.table(
            name,
            "edges",
            &["id", "from", "to", "type", "lanes", "speed", "length", "shape_points"],
        )?;
        for e in &topology.edges {
            edges.write_record(&[
                e.id.to_string(),
                e.from.to_string(),
                e.to.to_string(),
                e.edge_type.to_string(),
                topology.edge_type.lanes.to_string(),
                topology.edge_type.speed.to_string(),
                e.length.to_string(),
                e.shape.len().to_string(),
            ])?;
        }
        edges.flush()?;
        Ok(())
    }

    fn write_routes(&mut self, catalog: &RouteCatalog, name: &str) -> OutputResult<()> {
        let mut routes = self.table(name, "routes", &["id", "edges"])?;
        for r in catalog.routes() {
            let edges = r.edges.iter().map(|e| e.as_str()).collect::<Vec<_>>().join(" ");
            routes.write_record([r.id.as_str(), edges.as_str()])?;
        }
        routes.flush()?;

        let mut rerouters = self.table(name, "rerouters", &["id", "edge", "route", "begin", "end"])?;
        for r in catalog.rerouters() {
            rerouters.write_record(&[
                r.id.clone(),
                r.trigger_edge.to_string(),
                r.target_route.to_string(),
                r.interval.begin.to_string(),
                r.interval.end.to_string(),
            ])?;
        }
        rerouters.flush()?;
        Ok(())
    }

    fn write_fleet(
        &mut self,
        types: &[VehicleType],
        vehicles: &[VehicleInstance],
        name: &str,
    ) -> OutputResult<()> {
        let mut header = vec!["id", "model", "min_gap", "depart_speed"];
        header.extend(IDM_DEFAULTS.iter().map(|&(n, _)| n));
        let mut vtypes = self.table(name, "vtypes", &header)?;
        for t in types {
            let mut row = vec![
                t.id.to_string(),
                t.model.to_string(),
                t.min_gap.to_string(),
                t.depart_speed.to_string(),
            ];
            // Empty cells for models without coefficients.
            row.extend(
                IDM_DEFAULTS
                    .iter()
                    .map(|&(n, _)| t.coefficient(n).map(|v| v.to_string()).unwrap_or_default()),
            );
            vtypes.write_record(&row)?;
        }
        vtypes.flush()?;

        let mut fleet = self.table(
            name,
            "vehicles",
            &["id", "type", "route", "depart", "depart_speed", "depart_pos", "depart_lane"],
        )?;
        for v in vehicles {
            fleet.write_record(&[
                v.id.to_string(),
                v.vtype.to_string(),
                v.route.to_string(),
                v.depart_time.to_string(),
                v.depart_speed.to_string(),
                v.depart_pos.to_string(),
                v.depart_lane.to_string(),
            ])?;
        }
        fleet.flush()?;
        Ok(())
    }

    fn write_run_config(&mut self, run: &RunConfig, name: &str) -> OutputResult<()> {
        let mut w = self.table(name, "run", &["key", "value"])?;
        w.write_record(["net_file", run.net_file.as_str()])?;
        w.write_record(["route_file", run.route_file.as_str()])?;
        w.write_record(["additional_file", run.additional_file.as_str()])?;
        w.write_record(["gui_file", run.gui_file.as_str()])?;
        w.write_record(["begin", run.window.begin.to_string().as_str()])?;
        if let Some(end) = run.window.end {
            w.write_record(["end", end.to_string().as_str()])?;
        }
        w.flush()?;
        Ok(())
    }

    fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn finish(&mut self) -> OutputResult<()> {
        // Tables are flushed as they are completed.
        Ok(())
    }
}
