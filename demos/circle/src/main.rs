//! circle: generate a single-loop ring-road scenario.
//!
//! ```text
//! circle [CONFIG.json] [--out DIR] [--csv] [--dry-run]
//! ```
//!
//! Without a config file the classic 230 m ring with 10 IDM drivers and one
//! controlled vehicle is generated.  The network is compiled with
//! `netconvert`, which must be on `PATH` unless `--dry-run` is given.
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use log::info;

use ring_core::ScenarioRng;
use ring_fleet::{CarFollowModel, VehicleTypeSpec};
use ring_network::RingParams;
use ring_output::{CsvWriter, NetconvertCompiler, XmlWriter};
use ring_scenario::{InitialSection, ScenarioBuilder, ScenarioConfig, ScenarioPlan, plan};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_OUT: &str = "output/circle";
const SEED:        u64  = 42;

// ── Command line ──────────────────────────────────────────────────────────────

struct Args {
    config:  Option<PathBuf>,
    out:     PathBuf,
    csv:     bool,
    dry_run: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args { config: None, out: PathBuf::from(DEFAULT_OUT), csv: false, dry_run: false };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--out" => args.out = it.next().context("--out needs a directory")?.into(),
            "--csv" => args.csv = true,
            "--dry-run" => args.dry_run = true,
            flag if flag.starts_with("--") => bail!("unknown flag {flag}"),
            path if args.config.is_none() => args.config = Some(path.into()),
            extra => bail!("unexpected argument {extra}"),
        }
    }
    Ok(args)
}

/// 230 m single-lane ring, 10 IDM drivers + 1 controlled vehicle, evenly
/// spaced.
fn default_config() -> ScenarioConfig {
    ScenarioConfig {
        name:          "loop".into(),
        net:           RingParams { length: 230.0, lanes: 1, speed_limit: 30.0, resolution: 40 },
        start_time:    Some(0.0),
        end_time:      None,
        seed:          SEED,
        vehicle_types: vec![
            VehicleTypeSpec::new("human", 10, CarFollowModel::Idm),
            VehicleTypeSpec::new("rl", 1, CarFollowModel::Default),
        ],
        initial:       InitialSection { shuffle: false, uniform: true, ..Default::default() },
    }
}

// ── Summary ───────────────────────────────────────────────────────────────────

fn print_plan(plan: &ScenarioPlan) {
    println!("Scenario {}", plan.name);
    println!(
        "  ring   : radius {:.2} m, {} edges of {:.2} m",
        plan.topology.radius,
        plan.topology.edges.len(),
        plan.topology.edges[0].length
    );
    println!("  routes : {}", plan.catalog.routes().len());
    println!();
    println!("{:<12} {:<12} {:>10} {:>6}", "Vehicle", "Route", "Pos (m)", "Lane");
    println!("{}", "-".repeat(43));
    for v in &plan.vehicles {
        println!("{:<12} {:<12} {:>10.2} {:>6}", v.id, v.route, v.depart_pos, v.depart_lane);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => ScenarioConfig::from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => default_config(),
    };
    info!("config: {}", serde_json::to_string(&config)?);

    if args.dry_run {
        let plan = plan(&config, &mut ScenarioRng::new(config.seed))?;
        print_plan(&plan);
        return Ok(());
    }

    let compiler = NetconvertCompiler::new(&args.out.join("net"), &args.out);
    let scenario = if args.csv {
        ScenarioBuilder::new(config, compiler, CsvWriter::new(&args.out)?).build()?
    } else {
        ScenarioBuilder::new(config, compiler, XmlWriter::new(&args.out)?).build()?
    };

    println!("Scenario {} generated", scenario.name);
    println!("  network  : {}", scenario.network.path.display());
    println!("  vehicles : {}", scenario.vehicles.len());
    for f in &scenario.files {
        println!("  wrote    : {}", f.display());
    }

    Ok(())
}
