//! JSON scenario configuration.
//!
//! ```json
//! {
//!   "name": "loop",
//!   "net": { "length": 230, "lanes": 1, "speed_limit": 30, "resolution": 40 },
//!   "start_time": 0,
//!   "end_time": 3600,
//!   "seed": 7,
//!   "vehicle_types": [
//!     { "id": "human", "count": 21, "model": "IDM", "params": { "accel": 1.2 } },
//!     { "id": "rl", "count": 1 }
//!   ],
//!   "initial": { "shuffle": true, "uniform": true }
//! }
//! ```
//!
//! `initial` either sets `uniform` (evenly spaced around the ring) or lists
//! one `[edge, offset]` pair in `positions` and one entry in `lanes` per
//! vehicle.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use ring_core::{Cardinal, TimeWindow};
use ring_fleet::{InitialConfig, Placement, VehicleTypeSpec, spacing};
use ring_network::{RingParams, Topology};

use crate::{ScenarioError, ScenarioResult};

fn default_name() -> String {
    "loop".into()
}

/// Initial fleet placement section.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InitialSection {
    pub shuffle: bool,

    /// Space vehicles evenly instead of using `positions` / `lanes`.
    #[serde(default)]
    pub uniform: bool,

    #[serde(default)]
    pub positions: Vec<(Cardinal, f64)>,

    #[serde(default)]
    pub lanes: Vec<u32>,
}

/// Everything needed to generate one ring-road scenario.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Base of the network name, e.g. `loop` → `loop-230m1l`.
    #[serde(default = "default_name")]
    pub name: String,

    pub net: RingParams,

    /// Simulation start time.  Required; kept optional here so a missing
    /// value surfaces as a configuration error rather than a parse error.
    #[serde(default)]
    pub start_time: Option<f64>,

    #[serde(default)]
    pub end_time: Option<f64>,

    /// Seed for the placement shuffle.
    #[serde(default)]
    pub seed: u64,

    pub vehicle_types: Vec<VehicleTypeSpec>,

    pub initial: InitialSection,
}

impl ScenarioConfig {
    pub fn from_path(path: &Path) -> ScenarioResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> ScenarioResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Run window from `start_time` / `end_time`.
    pub fn time_window(&self) -> ScenarioResult<TimeWindow> {
        Ok(TimeWindow::from_config(self.start_time, self.end_time)?)
    }

    pub fn total_vehicles(&self) -> usize {
        self.vehicle_types.iter().map(|t| t.count).sum()
    }

    /// Checks that need nothing but the config itself.
    pub fn validate(&self) -> ScenarioResult<()> {
        if self.name.is_empty() {
            return Err(ScenarioError::config("name must not be empty"));
        }
        self.net.validate()?;
        self.time_window()?;
        if self.initial.uniform && (!self.initial.positions.is_empty() || !self.initial.lanes.is_empty()) {
            return Err(ScenarioError::config(
                "initial: `uniform` cannot be combined with explicit positions or lanes",
            ));
        }
        Ok(())
    }

    /// Placement input for the fleet placer, spacing vehicles over
    /// `topology` when `uniform` is set.
    pub fn initial_config(&self, topology: &Topology) -> InitialConfig {
        let (positions, lanes) = if self.initial.uniform {
            spacing::uniform(topology, self.total_vehicles())
        } else {
            let positions = self
                .initial
                .positions
                .iter()
                .map(|&(edge, pos)| Placement::on_edge(edge, pos))
                .collect();
            (positions, self.initial.lanes.clone())
        };
        InitialConfig { shuffle: self.initial.shuffle, positions, lanes }
    }
}
