//! Vehicle-type declarations and car-following parameter resolution.
//!
//! # Defaults
//!
//! IDM types get any missing coefficient from Treiber's reference values:
//!
//! | Coefficient | Default | Meaning                         |
//! |-------------|---------|---------------------------------|
//! | `accel`     | 1.0     | maximum acceleration, m/s²      |
//! | `decel`     | 1.5     | comfortable deceleration, m/s²  |
//! | `delta`     | 4.0     | acceleration exponent           |
//! | `tau`       | 1.0     | desired time headway, s         |
//!
//! Types using any other model carry no coefficients; the simulator applies
//! its own built-in default model.  Every resolved type has `min_gap = 0`.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};

use ring_core::VehicleTypeId;

use crate::{FleetError, FleetResult};

/// Treiber IDM defaults, in emission order.
pub const IDM_DEFAULTS: [(&str, f64); 4] = [("accel", 1.0), ("decel", 1.5), ("delta", 4.0), ("tau", 1.0)];

/// Minimum gap emitted for every vehicle type, metres.
pub const MIN_GAP: f64 = 0.0;

// ── CarFollowModel ────────────────────────────────────────────────────────────

/// Car-following model selector.
///
/// Parsed from the model name in scenario config: `"IDM"` and the legacy
/// `"sumoIDM"` select [`CarFollowModel::Idm`]; anything else is
/// [`CarFollowModel::Default`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CarFollowModel {
    #[default]
    Default,
    Idm,
}

impl CarFollowModel {
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "IDM" | "sumoIDM" => CarFollowModel::Idm,
            _ => CarFollowModel::Default,
        }
    }

    /// Name emitted as the `carFollowModel` attribute, if any.
    pub fn simulator_name(self) -> Option<&'static str> {
        match self {
            CarFollowModel::Idm => Some("IDM"),
            CarFollowModel::Default => None,
        }
    }
}

impl From<String> for CarFollowModel {
    fn from(s: String) -> Self {
        CarFollowModel::from_name(&s)
    }
}

impl From<CarFollowModel> for String {
    fn from(m: CarFollowModel) -> String {
        m.to_string()
    }
}

impl fmt::Display for CarFollowModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.simulator_name().unwrap_or("default"))
    }
}

// ── VehicleTypeSpec ───────────────────────────────────────────────────────────

/// A vehicle type as declared by the caller, before defaulting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleTypeSpec {
    pub id: VehicleTypeId,
    /// Number of vehicles of this type to place.
    pub count: usize,
    #[serde(default)]
    pub model: CarFollowModel,
    /// Named car-following coefficients.  Absent IDM entries are defaulted.
    #[serde(default)]
    pub params: BTreeMap<String, f64>,
    /// Initial speed of every vehicle of this type, m/s.
    #[serde(default)]
    pub depart_speed: f64,
}

impl VehicleTypeSpec {
    pub fn new(id: impl Into<VehicleTypeId>, count: usize, model: CarFollowModel) -> Self {
        Self {
            id: id.into(),
            count,
            model,
            params: BTreeMap::new(),
            depart_speed: 0.0,
        }
    }

    pub fn with_param(mut self, name: &str, value: f64) -> Self {
        self.params.insert(name.to_owned(), value);
        self
    }

    pub fn with_depart_speed(mut self, speed: f64) -> Self {
        self.depart_speed = speed;
        self
    }
}

// ── VehicleType ───────────────────────────────────────────────────────────────

/// A fully resolved vehicle type, ready to emit.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleType {
    pub id: VehicleTypeId,
    pub model: CarFollowModel,
    pub min_gap: f64,
    /// Resolved coefficients; empty for [`CarFollowModel::Default`].
    pub coefficients: BTreeMap<String, f64>,
    pub depart_speed: f64,
}

impl VehicleType {
    pub fn coefficient(&self, name: &str) -> Option<f64> {
        self.coefficients.get(name).copied()
    }

    /// Coefficients in the fixed `accel, decel, delta, tau` order.
    pub fn idm_coefficients(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        IDM_DEFAULTS
            .iter()
            .filter_map(|&(name, _)| self.coefficient(name).map(|v| (name, v)))
    }

    /// Turn a resolved type back into a declaration with `count` vehicles.
    pub fn to_spec(&self, count: usize) -> VehicleTypeSpec {
        VehicleTypeSpec {
            id:           self.id.clone(),
            count,
            model:        self.model,
            params:       self.coefficients.clone(),
            depart_speed: self.depart_speed,
        }
    }
}

// ── Resolution ────────────────────────────────────────────────────────────────

/// Resolve one declaration.  Explicit coefficients are never changed.
pub fn resolve(spec: &VehicleTypeSpec) -> VehicleType {
    let coefficients = match spec.model {
        CarFollowModel::Idm => {
            for name in spec.params.keys() {
                if !IDM_DEFAULTS.iter().any(|&(n, _)| n == name) {
                    warn!("vehicle type {}: ignoring unknown IDM coefficient {name:?}", spec.id);
                }
            }
            IDM_DEFAULTS
                .iter()
                .map(|&(name, default)| {
                    let value = spec.params.get(name).copied().unwrap_or(default);
                    (name.to_owned(), value)
                })
                .collect()
        }
        CarFollowModel::Default => {
            if !spec.params.is_empty() {
                warn!(
                    "vehicle type {} uses the default model; {} coefficient(s) ignored",
                    spec.id,
                    spec.params.len()
                );
            }
            BTreeMap::new()
        }
    };

    VehicleType {
        id: spec.id.clone(),
        model: spec.model,
        min_gap: MIN_GAP,
        coefficients,
        depart_speed: spec.depart_speed,
    }
}

/// Resolve every declaration, keeping the caller's order.
///
/// Fails if two declarations share an id.
pub fn resolve_all(specs: &[VehicleTypeSpec]) -> FleetResult<Vec<VehicleType>> {
    let mut seen = HashSet::with_capacity(specs.len());
    for spec in specs {
        if !seen.insert(&spec.id) {
            return Err(FleetError::DuplicateType(spec.id.clone()));
        }
    }
    Ok(specs.iter().map(resolve).collect())
}
