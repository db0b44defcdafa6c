//! Tests for ring-scenario.

#[cfg(test)]
mod helpers {
    use std::cell::RefCell;
    use std::path::PathBuf;
    use std::rc::Rc;

    use ring_core::Cardinal;
    use ring_fleet::{CarFollowModel, VehicleTypeSpec};
    use ring_network::{NetworkArtifact, NetworkCompiler, NetworkError, NetworkResult, RingParams, Topology};

    use crate::{InitialSection, ScenarioConfig};

    /// Records every compile request; optionally fails like a crashed tool.
    #[derive(Clone, Default)]
    pub struct FakeCompiler {
        pub calls: Rc<RefCell<Vec<String>>>,
        pub fail:  bool,
    }

    impl NetworkCompiler for FakeCompiler {
        fn compile(&mut self, topology: &Topology, output_name: &str) -> NetworkResult<NetworkArtifact> {
            assert_eq!(topology.edges.len(), 4);
            self.calls.borrow_mut().push(output_name.to_owned());
            if self.fail {
                return Err(NetworkError::Compile {
                    tool:    "netconvert".into(),
                    status:  "exit status: 1".into(),
                    message: "Error: no nodes loaded.".into(),
                });
            }
            let file_name = format!("{output_name}.net.xml");
            Ok(NetworkArtifact { path: PathBuf::from("/nets").join(&file_name), file_name })
        }
    }

    /// 230 m single-lane ring, `human` ×10 (IDM) + `rl` ×1, evenly spaced.
    pub fn config() -> ScenarioConfig {
        ScenarioConfig {
            name:          "loop".into(),
            net:           RingParams { length: 230.0, lanes: 1, speed_limit: 30.0, resolution: 40 },
            start_time:    Some(0.0),
            end_time:      None,
            seed:          42,
            vehicle_types: vec![
                VehicleTypeSpec::new("human", 10, CarFollowModel::Idm),
                VehicleTypeSpec::new("rl", 1, CarFollowModel::Default),
            ],
            initial:       InitialSection { shuffle: false, uniform: true, ..Default::default() },
        }
    }

    /// Two vehicles at explicit positions.
    pub fn explicit(positions: Vec<(Cardinal, f64)>, lanes: Vec<u32>) -> ScenarioConfig {
        ScenarioConfig {
            vehicle_types: vec![VehicleTypeSpec::new("human", 2, CarFollowModel::Idm)],
            initial: InitialSection { shuffle: false, uniform: false, positions, lanes },
            ..config()
        }
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use ring_core::Cardinal;
    use ring_fleet::CarFollowModel;

    use super::helpers::config;
    use crate::{ScenarioConfig, ScenarioError};

    const JSON: &str = r#"{
        "net": { "length": 230, "lanes": 2, "speed_limit": 30, "resolution": 40 },
        "start_time": 0,
        "end_time": 3600,
        "vehicle_types": [
            { "id": "human", "count": 1, "model": "sumoIDM", "params": { "accel": 1.2 } },
            { "id": "rl", "count": 1, "depart_speed": 2.0 }
        ],
        "initial": { "shuffle": true, "positions": [["top", 12.5], ["bottom", 0]], "lanes": [1, 0] }
    }"#;

    #[test]
    fn parses_json() {
        let cfg = ScenarioConfig::from_reader(JSON.as_bytes()).unwrap();
        assert_eq!(cfg.name, "loop");
        assert_eq!(cfg.net.lanes, 2);
        assert_eq!(cfg.seed, 0);
        assert_eq!(cfg.end_time, Some(3600.0));
        assert_eq!(cfg.vehicle_types[0].model, CarFollowModel::Idm);
        assert_eq!(cfg.vehicle_types[1].model, CarFollowModel::Default);
        assert_eq!(cfg.vehicle_types[1].depart_speed, 2.0);
        assert_eq!(cfg.initial.positions, vec![(Cardinal::Top, 12.5), (Cardinal::Bottom, 0.0)]);
        assert!(cfg.initial.shuffle);
        assert!(!cfg.initial.uniform);
        cfg.validate().unwrap();
    }

    #[test]
    fn missing_shuffle_is_json_error() {
        let bad = JSON.replace(r#""shuffle": true, "#, "");
        let err = ScenarioConfig::from_reader(bad.as_bytes()).unwrap_err();
        assert!(matches!(err, ScenarioError::Json(_)));
        assert!(err.is_configuration());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ScenarioConfig::from_path("/nonexistent/scenario.json".as_ref()).unwrap_err();
        assert!(matches!(err, ScenarioError::Io(_)));
    }

    #[test]
    fn from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.json");
        std::fs::write(&path, JSON).unwrap();
        assert_eq!(ScenarioConfig::from_path(&path).unwrap().total_vehicles(), 2);
    }

    #[test]
    fn missing_start_time_rejected() {
        let cfg = ScenarioConfig { start_time: None, ..config() };
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, ScenarioError::Config(_)));
        assert!(err.to_string().contains("start_time"), "{err}");
    }

    #[test]
    fn end_before_start_rejected() {
        let cfg = ScenarioConfig { start_time: Some(100.0), end_time: Some(50.0), ..config() };
        assert!(cfg.validate().unwrap_err().is_configuration());
    }

    #[test]
    fn uniform_excludes_explicit_positions() {
        let mut cfg = config();
        cfg.initial.positions = vec![(Cardinal::Bottom, 0.0)];
        assert!(matches!(cfg.validate(), Err(ScenarioError::Config(_))));
    }

    #[test]
    fn invalid_net_rejected() {
        let mut cfg = config();
        cfg.net.resolution = 1;
        assert!(matches!(cfg.validate(), Err(ScenarioError::Config(_))));
    }
}

// ── Plan ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod plan {
    use ring_core::{Cardinal, ScenarioRng};
    use ring_fleet::FleetError;

    use super::helpers::{config, explicit};
    use crate::{ScenarioError, plan};

    #[test]
    fn reference_ring() {
        let p = plan(&config(), &mut ScenarioRng::new(0)).unwrap();
        assert_eq!(p.name, "loop-230m1l");
        assert!((p.topology.radius - 73.21).abs() < 0.01);
        assert_eq!(p.topology.edge(Cardinal::Bottom).shape.len(), 40);
        assert_eq!(p.catalog.routes().len(), 4);
        assert_eq!(p.vehicle_types.len(), 2);
        assert_eq!(p.vehicles.len(), 11);
        assert_eq!(p.vehicles[0].id.as_str(), "human_0");
        assert_eq!(p.vehicles[10].id.as_str(), "rl_0");
        assert!(p.vehicles.iter().all(|v| v.depart_lane == 0 && v.depart_time == 0.0));
        assert!(p.vehicles.iter().all(|v| p.catalog.contains(&v.route)));
    }

    #[test]
    fn explicit_positions_used_verbatim() {
        let cfg = explicit(vec![(Cardinal::Top, 12.5), (Cardinal::Left, 3.0)], vec![0, 0]);
        let p = plan(&cfg, &mut ScenarioRng::new(0)).unwrap();
        assert_eq!(p.vehicles[0].route.as_str(), "routetop");
        assert_eq!(p.vehicles[0].depart_pos, 12.5);
        assert_eq!(p.vehicles[1].route.as_str(), "routeleft");
    }

    #[test]
    fn position_count_mismatch() {
        let cfg = explicit(vec![(Cardinal::Top, 12.5)], vec![0, 0]);
        let err = plan(&cfg, &mut ScenarioRng::new(0)).unwrap_err();
        assert!(matches!(
            err,
            ScenarioError::Fleet(FleetError::CountMismatch { expected: 2, got: 1, what: "positions" })
        ));
        assert!(err.is_configuration());
    }

    #[test]
    fn lane_beyond_ring_rejected() {
        let cfg = explicit(vec![(Cardinal::Top, 0.0), (Cardinal::Top, 10.0)], vec![0, 1]);
        assert!(matches!(
            plan(&cfg, &mut ScenarioRng::new(0)),
            Err(ScenarioError::Fleet(FleetError::LaneOutOfRange { lane: 1, lanes: 1 }))
        ));
    }

    #[test]
    fn shuffle_is_seeded() {
        let mut cfg = config();
        cfg.initial.shuffle = true;
        let ids = |seed| {
            plan(&cfg, &mut ScenarioRng::new(seed))
                .unwrap()
                .vehicles
                .into_iter()
                .map(|v| v.id)
                .collect::<Vec<_>>()
        };
        assert_eq!(ids(7), ids(7));
        let mut sorted = ids(7);
        sorted.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        let mut unshuffled = plan(&config(), &mut ScenarioRng::new(7))
            .unwrap()
            .vehicles
            .into_iter()
            .map(|v| v.id)
            .collect::<Vec<_>>();
        unshuffled.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        assert_eq!(sorted, unshuffled);
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use ring_network::NetworkError;
    use ring_output::{CsvWriter, XmlWriter};

    use super::helpers::{FakeCompiler, config};
    use crate::{ScenarioBuilder, ScenarioConfig, ScenarioError};

    #[test]
    fn end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let compiler = FakeCompiler::default();
        let calls = compiler.calls.clone();

        let scenario = ScenarioBuilder::new(config(), compiler, XmlWriter::new(dir.path()).unwrap())
            .build()
            .unwrap();

        assert_eq!(*calls.borrow(), ["loop-230m1l"]);
        assert_eq!(scenario.network.file_name, "loop-230m1l.net.xml");
        assert_eq!(scenario.run.net_file, "loop-230m1l.net.xml");
        assert_eq!(scenario.vehicles.len(), 11);
        assert_eq!(scenario.files.len(), 7);
        for f in [
            "loop-230m1l.nod.xml",
            "loop-230m1l.edg.xml",
            "loop-230m1l.typ.xml",
            "loop-230m1l.add.xml",
            "loop-230m1l.rou.xml",
            "loop-230m1l.gui.cfg",
            "loop-230m1l.sumo.cfg",
        ] {
            assert!(dir.path().join(f).exists(), "{f} missing");
        }

        let rou = std::fs::read_to_string(dir.path().join("loop-230m1l.rou.xml")).unwrap();
        assert_eq!(rou.matches("<vehicle ").count(), 11);
        let cfg = std::fs::read_to_string(dir.path().join("loop-230m1l.sumo.cfg")).unwrap();
        assert!(cfg.contains(r#"<net-file value="loop-230m1l.net.xml"/>"#));
        assert!(!cfg.contains("<end "));
    }

    #[test]
    fn csv_pipeline_writes_every_table() {
        let dir = tempfile::tempdir().unwrap();
        let scenario = ScenarioBuilder::new(config(), FakeCompiler::default(), CsvWriter::new(dir.path()).unwrap())
            .build()
            .unwrap();

        assert_eq!(scenario.files.len(), 7);
        for table in ["nodes", "edges", "routes", "rerouters", "vtypes", "vehicles", "run"] {
            let path = dir.path().join(format!("loop-230m1l_{table}.csv"));
            assert!(path.exists(), "{table} table missing");
        }
        let nodes = std::fs::read_to_string(dir.path().join("loop-230m1l_nodes.csv")).unwrap();
        assert_eq!(nodes.lines().count(), 5);
        assert!(nodes.contains("bottom,0,-73.21"), "{nodes}");
    }

    #[test]
    fn config_error_skips_external_calls() {
        let dir = tempfile::tempdir().unwrap();
        let compiler = FakeCompiler::default();
        let calls = compiler.calls.clone();
        let cfg = ScenarioConfig { start_time: None, ..config() };

        let err = ScenarioBuilder::new(cfg, compiler, XmlWriter::new(dir.path()).unwrap())
            .build()
            .unwrap_err();

        assert!(err.is_configuration());
        assert!(calls.borrow().is_empty());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn compiler_failure_passes_through() {
        let dir = tempfile::tempdir().unwrap();
        let compiler = FakeCompiler { fail: true, ..Default::default() };

        let err = ScenarioBuilder::new(config(), compiler, XmlWriter::new(dir.path()).unwrap())
            .build()
            .unwrap_err();

        assert!(err.is_external());
        match &err {
            ScenarioError::Network(NetworkError::Compile { message, .. }) => {
                assert_eq!(message, "Error: no nodes loaded.")
            }
            other => panic!("expected compile error, got {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "network compiler netconvert failed (exit status: 1): Error: no nodes loaded."
        );
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn bounded_run_writes_end() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = ScenarioConfig { end_time: Some(3600.0), ..config() };
        let scenario = ScenarioBuilder::new(cfg, FakeCompiler::default(), XmlWriter::new(dir.path()).unwrap())
            .build()
            .unwrap();
        assert_eq!(scenario.window.end, Some(3600.0));
        let cfg = std::fs::read_to_string(dir.path().join("loop-230m1l.sumo.cfg")).unwrap();
        assert!(cfg.contains(r#"<end value="3600"/>"#));
    }
}
