//! XML output backend.
//!
//! Each `write_*` function renders one simulator input document to any
//! `Write` sink and hands the sink back.  [`XmlWriter`] drives them against
//! files in an output directory, named per [`DocKind`].
//!
//! Numbers are written with Rust's shortest round-trip formatting (`57.5`,
//! `30`, `10000000`); edge shapes use fixed two-decimal coordinates.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use ring_fleet::{VehicleInstance, VehicleType};
use ring_network::{RouteCatalog, Topology};

use crate::writer::{DocKind, DocumentWriter, RunConfig};
use crate::{OutputError, OutputResult};

const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
const XSD_BASE: &str = "http://sumo.dlr.de/xsd/";

/// GUI colour scheme written to the view-settings document.
pub const GUI_SCHEME: &str = "real world";

// ── Event-level helper ────────────────────────────────────────────────────────

struct Doc<W: Write> {
    w: Writer<W>,
}

impl<W: Write> Doc<W> {
    fn new(out: W) -> OutputResult<Self> {
        let mut doc = Self { w: Writer::new_with_indent(out, b' ', 4) };
        doc.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        Ok(doc)
    }

    /// New document whose root element references `schema` under the
    /// simulator's XSD base URL.
    fn with_schema(out: W, root: &str, schema: &str) -> OutputResult<Self> {
        let mut doc = Self::new(out)?;
        let location = format!("{XSD_BASE}{schema}");
        doc.start(root, &[("xmlns:xsi", XSI_NS), ("xsi:noNamespaceSchemaLocation", &location)])?;
        Ok(doc)
    }

    fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> OutputResult<()> {
        self.event(Event::Start(element(name, attrs)))
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> OutputResult<()> {
        self.event(Event::Empty(element(name, attrs)))
    }

    fn end(&mut self, name: &str) -> OutputResult<()> {
        self.event(Event::End(BytesEnd::new(name)))
    }

    /// `<name value="..."/>`, the option form used in configuration files.
    fn option(&mut self, name: &str, value: &str) -> OutputResult<()> {
        self.empty(name, &[("value", value)])
    }

    fn event(&mut self, e: Event<'_>) -> OutputResult<()> {
        self.w.write_event(e).map_err(OutputError::xml)
    }

    fn into_inner(self) -> W {
        self.w.into_inner()
    }
}

fn element<'a>(name: &'a str, attrs: &[(&str, &str)]) -> BytesStart<'a> {
    let mut el = BytesStart::new(name);
    for &(k, v) in attrs {
        el.push_attribute((k, v));
    }
    el
}

fn num(v: f64) -> String {
    format!("{v}")
}

// ── Network documents ─────────────────────────────────────────────────────────

pub fn write_nodes<W: Write>(out: W, topology: &Topology) -> OutputResult<W> {
    let mut doc = Doc::with_schema(out, "nodes", "nodes_file.xsd")?;
    for node in &topology.nodes {
        let (x, y) = (num(node.pos.x), num(node.pos.y));
        doc.empty("node", &[("id", node.id.as_str()), ("x", &x), ("y", &y)])?;
    }
    doc.end("nodes")?;
    Ok(doc.into_inner())
}

pub fn write_edges<W: Write>(out: W, topology: &Topology) -> OutputResult<W> {
    let mut doc = Doc::with_schema(out, "edges", "edges_file.xsd")?;
    for edge in &topology.edges {
        let shape = edge.shape.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");
        let length = num(edge.length);
        doc.empty(
            "edge",
            &[
                ("id", edge.id.as_str()),
                ("from", edge.from.as_str()),
                ("to", edge.to.as_str()),
                ("type", edge.edge_type.as_str()),
                ("shape", &shape),
                ("length", &length),
            ],
        )?;
    }
    doc.end("edges")?;
    Ok(doc.into_inner())
}

pub fn write_types<W: Write>(out: W, topology: &Topology) -> OutputResult<W> {
    let mut doc = Doc::with_schema(out, "types", "types_file.xsd")?;
    let t = &topology.edge_type;
    let (lanes, speed) = (t.lanes.to_string(), num(t.speed));
    doc.empty("type", &[("id", t.id.as_str()), ("numLanes", &lanes), ("speed", &speed)])?;
    doc.end("types")?;
    Ok(doc.into_inner())
}

/// Network compiler configuration for scenario `name`: input files, output
/// file, and processing options (no internal links, no turnarounds).
pub fn write_net_config<W: Write>(out: W, name: &str) -> OutputResult<W> {
    let mut doc = Doc::with_schema(out, "configuration", "netconvertConfiguration.xsd")?;
    doc.start("input", &[])?;
    doc.option("node-files", &DocKind::Nodes.file_name(name))?;
    doc.option("edge-files", &DocKind::Edges.file_name(name))?;
    doc.option("type-files", &DocKind::Types.file_name(name))?;
    doc.end("input")?;
    doc.start("output", &[])?;
    doc.option("output-file", &DocKind::Net.file_name(name))?;
    doc.end("output")?;
    doc.start("processing", &[])?;
    doc.option("no-internal-links", "true")?;
    doc.option("no-turnarounds", "true")?;
    doc.end("processing")?;
    doc.end("configuration")?;
    Ok(doc.into_inner())
}

// ── Scenario documents ────────────────────────────────────────────────────────

/// Routes followed by rerouters.
pub fn write_additional<W: Write>(out: W, catalog: &RouteCatalog) -> OutputResult<W> {
    let mut doc = Doc::with_schema(out, "additional", "additional_file.xsd")?;
    for route in catalog.routes() {
        let edges = route.edges.iter().map(|e| e.as_str()).collect::<Vec<_>>().join(" ");
        doc.empty("route", &[("id", route.id.as_str()), ("edges", &edges)])?;
    }
    for r in catalog.rerouters() {
        doc.start("rerouter", &[("id", &r.id), ("edges", r.trigger_edge.as_str())])?;
        let (begin, end) = (num(r.interval.begin), num(r.interval.end));
        doc.start("interval", &[("begin", &begin), ("end", &end)])?;
        doc.empty("routeProbReroute", &[("id", r.target_route.as_str())])?;
        doc.end("interval")?;
        doc.end("rerouter")?;
    }
    doc.end("additional")?;
    Ok(doc.into_inner())
}

/// Vehicle types followed by vehicles.
pub fn write_fleet<W: Write>(
    out: W,
    types: &[VehicleType],
    vehicles: &[VehicleInstance],
) -> OutputResult<W> {
    let mut doc = Doc::with_schema(out, "routes", "routes_file.xsd")?;

    for t in types {
        let min_gap = num(t.min_gap);
        let coefficients: Vec<(&str, String)> =
            t.idm_coefficients().map(|(name, v)| (name, num(v))).collect();

        let mut attrs: Vec<(&str, &str)> = vec![("id", t.id.as_str())];
        if let Some(model) = t.model.simulator_name() {
            attrs.push(("carFollowModel", model));
        }
        attrs.push(("minGap", &min_gap));
        attrs.extend(coefficients.iter().map(|(name, v)| (*name, v.as_str())));
        doc.empty("vType", &attrs)?;
    }

    for v in vehicles {
        let depart = num(v.depart_time);
        let speed = num(v.depart_speed);
        let pos = num(v.depart_pos);
        let lane = v.depart_lane.to_string();
        doc.empty(
            "vehicle",
            &[
                ("type", v.vtype.as_str()),
                ("route", v.route.as_str()),
                ("depart", &depart),
                ("id", v.id.as_str()),
                ("color", v.color),
                ("departSpeed", &speed),
                ("departPos", &pos),
                ("departLane", &lane),
            ],
        )?;
    }

    doc.end("routes")?;
    Ok(doc.into_inner())
}

/// Simulator configuration.  `time/end` is only written for bounded runs.
pub fn write_run_config<W: Write>(out: W, run: &RunConfig) -> OutputResult<W> {
    let mut doc = Doc::with_schema(out, "configuration", "sumoConfiguration.xsd")?;
    doc.start("input", &[])?;
    doc.option("net-file", &run.net_file)?;
    doc.option("route-files", &run.route_file)?;
    doc.option("additional-files", &run.additional_file)?;
    doc.option("gui-settings-file", &run.gui_file)?;
    doc.end("input")?;
    doc.start("time", &[])?;
    doc.option("begin", &num(run.window.begin))?;
    if let Some(end) = run.window.end {
        doc.option("end", &num(end))?;
    }
    doc.end("time")?;
    doc.end("configuration")?;
    Ok(doc.into_inner())
}

pub fn write_gui<W: Write>(out: W) -> OutputResult<W> {
    let mut doc = Doc::new(out)?;
    doc.start("viewsettings", &[])?;
    doc.empty("scheme", &[("name", GUI_SCHEME)])?;
    doc.end("viewsettings")?;
    Ok(doc.into_inner())
}

// ── XmlWriter ─────────────────────────────────────────────────────────────────

/// Writes scenario documents as XML files into one directory.
pub struct XmlWriter {
    dir:     PathBuf,
    written: Vec<PathBuf>,
}

impl XmlWriter {
    /// Create `dir` if needed.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self { dir: dir.to_path_buf(), written: Vec::new() })
    }

    /// Write the network compiler configuration for `name`.
    pub fn write_net_config(&mut self, name: &str) -> OutputResult<PathBuf> {
        self.emit(DocKind::NetConfig, name, |f| write_net_config(f, name))
    }

    fn emit(
        &mut self,
        kind: DocKind,
        name: &str,
        render: impl FnOnce(BufWriter<File>) -> OutputResult<BufWriter<File>>,
    ) -> OutputResult<PathBuf> {
        let path = self.dir.join(kind.file_name(name));
        let file = BufWriter::new(File::create(&path)?);
        render(file)?.flush()?;
        debug!("wrote {}", path.display());
        self.written.push(path.clone());
        Ok(path)
    }
}

impl DocumentWriter for XmlWriter {
    fn write_topology(&mut self, topology: &Topology, name: &str) -> OutputResult<()> {
        self.emit(DocKind::Nodes, name, |f| write_nodes(f, topology))?;
        self.emit(DocKind::Edges, name, |f| write_edges(f, topology))?;
        self.emit(DocKind::Types, name, |f| write_types(f, topology))?;
        Ok(())
    }

    fn write_routes(&mut self, catalog: &RouteCatalog, name: &str) -> OutputResult<()> {
        self.emit(DocKind::Additional, name, |f| write_additional(f, catalog))?;
        Ok(())
    }

    fn write_fleet(
        &mut self,
        types: &[VehicleType],
        vehicles: &[VehicleInstance],
        name: &str,
    ) -> OutputResult<()> {
        self.emit(DocKind::Routes, name, |f| write_fleet(f, types, vehicles))?;
        Ok(())
    }

    fn write_run_config(&mut self, run: &RunConfig, name: &str) -> OutputResult<()> {
        self.emit(DocKind::Gui, name, write_gui)?;
        self.emit(DocKind::RunConfig, name, |f| write_run_config(f, run))?;
        Ok(())
    }

    fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn finish(&mut self) -> OutputResult<()> {
        // Every document is flushed and closed as soon as it is written.
        Ok(())
    }
}
