//! Fluent builder that runs the full generation pipeline.

use std::path::PathBuf;

use log::info;

use ring_core::{ScenarioRng, TimeWindow};
use ring_fleet::{VehicleInstance, VehicleType};
use ring_network::{NetworkArtifact, NetworkCompiler, RouteCatalog, Topology};
use ring_output::{DocumentWriter, RunConfig};

use crate::{ScenarioConfig, ScenarioResult, plan};

/// A generated scenario: the synthesized records plus what was produced on
/// disk.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub name:          String,
    pub window:        TimeWindow,
    pub topology:      Topology,
    pub catalog:       RouteCatalog,
    pub vehicle_types: Vec<VehicleType>,
    pub vehicles:      Vec<VehicleInstance>,
    pub network:       NetworkArtifact,
    pub run:           RunConfig,
    /// Documents written by the writer, in write order.
    pub files:         Vec<PathBuf>,
}

/// Fluent builder for a [`Scenario`].
///
/// # Required inputs
///
/// - [`ScenarioConfig`]
/// - `C: NetworkCompiler`, turns the topology into a simulator network
/// - `W: DocumentWriter`, persists topology, routes, fleet and run configuration
///
/// # Optional inputs
///
/// | Method       | Default                              |
/// |--------------|--------------------------------------|
/// | `.rng(r)`    | `ScenarioRng::new(config.seed)`      |
///
/// # Example
///
/// ```rust,ignore
/// let scenario = ScenarioBuilder::new(config, NetconvertCompiler::new(&dir, &dir), XmlWriter::new(&dir)?)
///     .build()?;
/// println!("{} vehicles on {}", scenario.vehicles.len(), scenario.network.file_name);
/// ```
pub struct ScenarioBuilder<C: NetworkCompiler, W: DocumentWriter> {
    config:   ScenarioConfig,
    compiler: C,
    writer:   W,
    rng:      Option<ScenarioRng>,
}

impl<C: NetworkCompiler, W: DocumentWriter> ScenarioBuilder<C, W> {
    pub fn new(config: ScenarioConfig, compiler: C, writer: W) -> Self {
        Self { config, compiler, writer, rng: None }
    }

    /// Use this RNG for the placement shuffle instead of one seeded from
    /// `config.seed`.
    pub fn rng(mut self, rng: ScenarioRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Synthesize the scenario, compile the network and write all run
    /// documents.
    ///
    /// The compiler and writer are only invoked once the whole config has
    /// been validated.  Their errors are returned unchanged.
    pub fn build(self) -> ScenarioResult<Scenario> {
        let Self { config, mut compiler, mut writer, rng } = self;
        let mut rng = rng.unwrap_or_else(|| ScenarioRng::new(config.seed));

        let plan = plan(&config, &mut rng)?;
        let name = plan.name.as_str();

        let network = compiler.compile(&plan.topology, name)?;
        info!("network compiled to {}", network.path.display());

        let run = RunConfig::for_scenario(name, &network.file_name, plan.window);
        writer.write_topology(&plan.topology, name)?;
        writer.write_routes(&plan.catalog, name)?;
        writer.write_fleet(&plan.vehicle_types, &plan.vehicles, name)?;
        writer.write_run_config(&run, name)?;
        writer.finish()?;
        let files = writer.written().to_vec();
        info!("wrote {} scenario documents for {name}", files.len());

        Ok(Scenario {
            name: plan.name,
            window: plan.window,
            topology: plan.topology,
            catalog: plan.catalog,
            vehicle_types: plan.vehicle_types,
            vehicles: plan.vehicles,
            network,
            run,
            files,
        })
    }
}
