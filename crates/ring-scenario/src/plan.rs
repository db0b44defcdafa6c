//! Pure scenario synthesis.
//!
//! Everything here is deterministic given the config and RNG, and touches
//! neither the filesystem nor external tools.

use log::{debug, info};

use ring_core::{ScenarioRng, TimeWindow};
use ring_fleet::{FleetPlacer, VehicleInstance, VehicleType, counts_of, resolve_all};
use ring_network::{RouteCatalog, Topology, network_name};

use crate::{ScenarioConfig, ScenarioResult};

/// All synthesized records of one scenario, before anything is written.
#[derive(Clone, Debug)]
pub struct ScenarioPlan {
    /// Network name, e.g. `loop-230m1l`; prefix of every output file.
    pub name:          String,
    pub window:        TimeWindow,
    pub topology:      Topology,
    pub catalog:       RouteCatalog,
    pub vehicle_types: Vec<VehicleType>,
    pub vehicles:      Vec<VehicleInstance>,
}

/// Validate `config` and synthesize the scenario.
///
/// Fails with a configuration error on any invalid input; on success every
/// vehicle references a known type and route and a valid lane.
pub fn plan(config: &ScenarioConfig, rng: &mut ScenarioRng) -> ScenarioResult<ScenarioPlan> {
    config.validate()?;
    let window = config.time_window()?;

    let topology = Topology::ring(&config.net)?;
    let catalog = RouteCatalog::for_ring(&topology);
    let vehicle_types = resolve_all(&config.vehicle_types)?;

    let initial = config.initial_config(&topology);
    let vehicles = FleetPlacer::new(&catalog, &vehicle_types)
        .lane_count(config.net.lanes)
        .place(&counts_of(&config.vehicle_types), &initial, rng)?;

    let name = network_name(&config.name, config.net.length, config.net.lanes);
    debug!(
        "{name}: radius {:.2} m, {} routes, {} vehicle types",
        topology.radius,
        catalog.routes().len(),
        vehicle_types.len()
    );
    info!("planned scenario {name} with {} vehicles", vehicles.len());

    Ok(ScenarioPlan { name, window, topology, catalog, vehicle_types, vehicles })
}
