//! Tests for ring-output.

#[cfg(test)]
mod helpers {
    use ring_core::{Cardinal, ScenarioRng};
    use ring_fleet::{
        CarFollowModel, FleetPlacer, InitialConfig, Placement, VehicleInstance, VehicleType,
        VehicleTypeSpec, counts_of, resolve_all,
    };
    use ring_network::{RingParams, RouteCatalog, Topology};

    pub struct Records {
        pub topology: Topology,
        pub catalog:  RouteCatalog,
        pub types:    Vec<VehicleType>,
        pub vehicles: Vec<VehicleInstance>,
    }

    /// 230 m ring, `human` ×2 (IDM, accel 2) + `rl` ×1.
    pub fn records() -> Records {
        let topology = Topology::ring(&RingParams {
            length: 230.0,
            lanes: 1,
            speed_limit: 30.0,
            resolution: 5,
        })
        .unwrap();
        let catalog = RouteCatalog::for_ring(&topology);
        let specs = vec![
            VehicleTypeSpec::new("human", 2, CarFollowModel::Idm).with_param("accel", 2.0),
            VehicleTypeSpec::new("rl", 1, CarFollowModel::Default).with_depart_speed(3.5),
        ];
        let types = resolve_all(&specs).unwrap();
        let initial = InitialConfig {
            shuffle: false,
            positions: vec![
                Placement::on_edge(Cardinal::Bottom, 0.0),
                Placement::on_edge(Cardinal::Bottom, 20.0),
                Placement::on_edge(Cardinal::Top, 12.5),
            ],
            lanes: vec![0, 0, 0],
        };
        let vehicles = FleetPlacer::new(&catalog, &types)
            .place(&counts_of(&specs), &initial, &mut ScenarioRng::new(0))
            .unwrap();
        Records { topology, catalog, types, vehicles }
    }

    pub fn render<F>(f: F) -> String
    where
        F: FnOnce(Vec<u8>) -> crate::OutputResult<Vec<u8>>,
    {
        String::from_utf8(f(Vec::new()).unwrap()).unwrap()
    }
}

// ── XML documents ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod xml_docs {
    use ring_core::TimeWindow;

    use super::helpers::{records, render};
    use crate::RunConfig;
    use crate::xml;

    #[test]
    fn nodes_document() {
        let r = records();
        let s = render(|out| xml::write_nodes(out, &r.topology));
        assert!(s.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(s.contains("xsi:noNamespaceSchemaLocation=\"http://sumo.dlr.de/xsd/nodes_file.xsd\""));
        assert!(s.contains(r#"<node id="bottom" x="0" y="-73.21"/>"#), "{s}");
        assert!(s.contains(r#"<node id="right" x="73.21" y="0"/>"#));
        assert!(s.trim_end().ends_with("</nodes>"));
    }

    #[test]
    fn edges_document() {
        let r = records();
        let s = render(|out| xml::write_edges(out, &r.topology));
        assert_eq!(s.matches("<edge ").count(), 4);
        assert!(s.contains(r#"id="bottom" from="bottom" to="right" type="edgeType""#), "{s}");
        assert!(s.contains(r#"length="57.5""#));
        // Resolution 5: five space-separated points, first and last at the nodes.
        assert!(s.contains(r#"shape="0.00,-73.21 "#));
        let shape = s.split("shape=\"").nth(1).unwrap().split('"').next().unwrap();
        assert_eq!(shape.split(' ').count(), 5);
        assert!(shape.ends_with("73.21,0.00"));
    }

    #[test]
    fn types_and_net_config() {
        let r = records();
        let s = render(|out| xml::write_types(out, &r.topology));
        assert!(s.contains(r#"<type id="edgeType" numLanes="1" speed="30"/>"#), "{s}");

        let s = render(|out| xml::write_net_config(out, "loop-230m1l"));
        assert!(s.contains(r#"<node-files value="loop-230m1l.nod.xml"/>"#));
        assert!(s.contains(r#"<edge-files value="loop-230m1l.edg.xml"/>"#));
        assert!(s.contains(r#"<type-files value="loop-230m1l.typ.xml"/>"#));
        assert!(s.contains(r#"<output-file value="loop-230m1l.net.xml"/>"#));
        assert!(s.contains(r#"<no-internal-links value="true"/>"#));
        assert!(s.contains(r#"<no-turnarounds value="true"/>"#));
    }

    #[test]
    fn additional_document() {
        let r = records();
        let s = render(|out| xml::write_additional(out, &r.catalog));
        assert!(s.contains(r#"<route id="routetop" edges="top left bottom right"/>"#), "{s}");
        assert_eq!(s.matches("<route ").count(), 4);
        assert!(s.contains(r#"<rerouter id="rerouterTop" edges="top">"#));
        assert!(s.contains(r#"<interval begin="0" end="10000000">"#));
        assert!(s.contains(r#"<routeProbReroute id="routebottom"/>"#));
    }

    #[test]
    fn fleet_document() {
        let r = records();
        let s = render(|out| xml::write_fleet(out, &r.types, &r.vehicles));
        assert!(
            s.contains(r#"<vType id="human" carFollowModel="IDM" minGap="0" accel="2" decel="1.5" delta="4" tau="1"/>"#),
            "{s}"
        );
        assert!(s.contains(r#"<vType id="rl" minGap="0"/>"#));
        assert!(s.contains(
            r#"<vehicle type="rl" route="routetop" depart="0" id="rl_0" color="1,0.0,0.0" departSpeed="3.5" departPos="12.5" departLane="0"/>"#
        ));
        // Types precede vehicles.
        assert!(s.rfind("<vType").unwrap() < s.find("<vehicle").unwrap());
    }

    #[test]
    fn run_config_end_only_when_bounded() {
        let unbounded = RunConfig::for_scenario("loop", "loop.net.xml", TimeWindow { begin: 0.0, end: None });
        let s = render(|out| xml::write_run_config(out, &unbounded));
        assert!(s.contains(r#"<net-file value="loop.net.xml"/>"#));
        assert!(s.contains(r#"<route-files value="loop.rou.xml"/>"#));
        assert!(s.contains(r#"<additional-files value="loop.add.xml"/>"#));
        assert!(s.contains(r#"<gui-settings-file value="loop.gui.cfg"/>"#));
        assert!(s.contains(r#"<begin value="0"/>"#));
        assert!(!s.contains("<end "));

        let bounded = RunConfig { window: TimeWindow { begin: 10.0, end: Some(3600.0) }, ..unbounded };
        let s = render(|out| xml::write_run_config(out, &bounded));
        assert!(s.contains(r#"<begin value="10"/>"#));
        assert!(s.contains(r#"<end value="3600"/>"#));
    }

    #[test]
    fn gui_document() {
        let s = render(xml::write_gui);
        assert!(s.contains(r#"<scheme name="real world"/>"#));
    }
}

// ── Writers ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod writers {
    use ring_core::TimeWindow;
    use tempfile::TempDir;

    use super::helpers::records;
    use crate::{CsvWriter, DocumentWriter, RunConfig, XmlWriter};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn write_all(w: &mut dyn DocumentWriter) {
        let r = records();
        let run = RunConfig::for_scenario("loop", "loop.net.xml", TimeWindow { begin: 0.0, end: None });
        w.write_topology(&r.topology, "loop").unwrap();
        w.write_routes(&r.catalog, "loop").unwrap();
        w.write_fleet(&r.types, &r.vehicles, "loop").unwrap();
        w.write_run_config(&run, "loop").unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn xml_files_created() {
        let dir = tmp();
        let mut w = XmlWriter::new(dir.path()).unwrap();
        write_all(&mut w);
        for f in [
            "loop.nod.xml",
            "loop.edg.xml",
            "loop.typ.xml",
            "loop.add.xml",
            "loop.rou.xml",
            "loop.gui.cfg",
            "loop.sumo.cfg",
        ] {
            assert!(dir.path().join(f).exists(), "{f} missing");
        }
        assert_eq!(w.written().len(), 7);
    }

    #[test]
    fn xml_writer_creates_directory() {
        let dir = tmp();
        let nested = dir.path().join("a").join("b");
        let mut w = XmlWriter::new(&nested).unwrap();
        let path = w.write_net_config("loop").unwrap();
        assert_eq!(path, nested.join("loop.netccfg"));
        assert!(path.exists());
    }

    #[test]
    fn csv_tables() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        write_all(&mut w);
        assert_eq!(w.written().len(), 7);

        let mut rdr = csv::Reader::from_path(dir.path().join("loop_vehicles.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["id", "type", "route", "depart", "depart_speed", "depart_pos", "depart_lane"]
        );
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "human_0");
        assert_eq!(&rows[2][0], "rl_0");
        assert_eq!(&rows[2][2], "routetop");
        assert_eq!(&rows[2][5], "12.5");

        let mut rdr = csv::Reader::from_path(dir.path().join("loop_vtypes.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][4], "2"); // human accel
        assert_eq!(&rows[1][4], ""); // rl: default model, no coefficients

        let mut rdr = csv::Reader::from_path(dir.path().join("loop_run.csv")).unwrap();
        let keys: Vec<_> = rdr.records().map(|r| r.unwrap()[0].to_owned()).collect();
        assert!(!keys.iter().any(|k| k == "end"));
    }
}

// ── netconvert backend ────────────────────────────────────────────────────────

#[cfg(test)]
mod netconvert {
    use ring_network::{NetworkCompiler, NetworkError};
    use tempfile::TempDir;

    use super::helpers::records;
    use crate::NetconvertCompiler;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn inputs_written() {
        let net = tmp();
        let out = tmp();
        let c = NetconvertCompiler::new(net.path(), out.path());
        let cfg = c.write_inputs(&records().topology, "loop-230m1l").unwrap();
        assert_eq!(cfg, net.path().join("loop-230m1l.netccfg"));
        for f in ["loop-230m1l.nod.xml", "loop-230m1l.edg.xml", "loop-230m1l.typ.xml"] {
            assert!(net.path().join(f).exists(), "{f} missing");
        }
    }

    #[test]
    fn missing_binary_is_io_error() {
        let net = tmp();
        let out = tmp();
        let mut c = NetconvertCompiler::new(net.path(), out.path()).binary("/nonexistent/netconvert-xyz");
        assert!(matches!(c.compile(&records().topology, "loop"), Err(NetworkError::Io(_))));
    }

    #[cfg(unix)]
    #[test]
    fn failing_tool_surfaces_compile_error() {
        let net = tmp();
        let out = tmp();
        let mut c = NetconvertCompiler::new(net.path(), out.path()).binary("false");
        match c.compile(&records().topology, "loop") {
            Err(NetworkError::Compile { tool, .. }) => assert_eq!(tool, "false"),
            other => panic!("expected compile error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn successful_tool_returns_artifact() {
        let net = tmp();
        let out = tmp();
        let mut c = NetconvertCompiler::new(net.path(), out.path()).binary("true");
        let artifact = c.compile(&records().topology, "loop").unwrap();
        assert_eq!(artifact.file_name, "loop.net.xml");
        assert_eq!(artifact.path, out.path().join("loop.net.xml"));
    }
}
