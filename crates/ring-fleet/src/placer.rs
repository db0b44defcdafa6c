//! Fleet expansion and placement.
//!
//! # Algorithm
//!
//! 1. Each declared type, in the caller's order, expands to ids
//!    `"<type>_0" .. "<type>_<count-1>"`.
//! 2. If `shuffle` is set the whole list is permuted with the injected RNG.
//! 3. Vehicle `i` of the (possibly shuffled) list departs at time 0 on
//!    `positions[i]` and `lanes[i]`, at its type's depart speed.
//!
//! `positions` and `lanes` must both have exactly one entry per vehicle.

use std::collections::{HashMap, HashSet};

use log::{debug, warn};

use ring_core::{Cardinal, RouteId, ScenarioRng, VehicleId, VehicleTypeId};
use ring_network::RouteCatalog;

use crate::{FleetError, FleetResult, VehicleType};

/// Colour attribute emitted for every vehicle.
pub const VEHICLE_COLOR: &str = "1,0.0,0.0";

// ── Inputs ────────────────────────────────────────────────────────────────────

/// Initial route and offset for one vehicle.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    pub route: RouteId,
    /// Depart position along the route's first edge, metres.
    pub pos: f64,
}

impl Placement {
    pub fn new(route: RouteId, pos: f64) -> Self {
        Self { route, pos }
    }

    /// Depart `pos` metres into the edge leaving `c`, on the route that
    /// starts there.
    pub fn on_edge(c: Cardinal, pos: f64) -> Self {
        Self { route: RouteCatalog::route_id(c), pos }
    }
}

/// Caller-supplied placement data for the whole fleet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InitialConfig {
    pub shuffle: bool,
    pub positions: Vec<Placement>,
    pub lanes: Vec<u32>,
}

// ── Output ────────────────────────────────────────────────────────────────────

/// One vehicle as handed to the simulator.  Never mutated after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleInstance {
    pub vtype:        VehicleTypeId,
    pub id:           VehicleId,
    pub route:        RouteId,
    pub depart_time:  f64,
    pub depart_speed: f64,
    pub depart_pos:   f64,
    pub depart_lane:  u32,
    pub color:        &'static str,
}

// ── FleetPlacer ───────────────────────────────────────────────────────────────

/// Expands per-type counts into placed [`VehicleInstance`]s.
///
/// # Example
///
/// ```rust,ignore
/// let placer = FleetPlacer::new(&catalog, &types).lane_count(1);
/// let fleet = placer.place(&counts, &initial, &mut ScenarioRng::new(0))?;
/// ```
pub struct FleetPlacer<'a> {
    catalog: &'a RouteCatalog,
    types:   HashMap<&'a VehicleTypeId, &'a VehicleType>,
    lanes:   Option<u32>,
}

impl<'a> FleetPlacer<'a> {
    pub fn new(catalog: &'a RouteCatalog, types: &'a [VehicleType]) -> Self {
        Self {
            catalog,
            types: types.iter().map(|t| (&t.id, t)).collect(),
            lanes: None,
        }
    }

    /// Reject lane indices `>= lanes`.  Without this, lanes are taken
    /// verbatim.
    pub fn lane_count(mut self, lanes: u32) -> Self {
        self.lanes = Some(lanes);
        self
    }

    /// Step 1: `(type, id)` pairs in declaration order.
    ///
    /// A type listed twice in `counts` is rejected, so ids are unique.
    pub fn vehicle_ids(
        &self,
        counts: &[(VehicleTypeId, usize)],
    ) -> FleetResult<Vec<(VehicleTypeId, VehicleId)>> {
        let total = counts.iter().map(|(_, n)| n).sum();
        let mut ids = Vec::with_capacity(total);
        let mut seen = HashSet::with_capacity(counts.len());
        for (vtype, count) in counts {
            if !self.types.contains_key(vtype) {
                return Err(FleetError::UnknownType(vtype.clone()));
            }
            if !seen.insert(vtype) {
                return Err(FleetError::DuplicateType(vtype.clone()));
            }
            if *count == 0 {
                warn!("vehicle type {vtype} requested with count 0");
            }
            ids.extend((0..*count).map(|i| (vtype.clone(), VehicleId::nth(vtype, i))));
        }
        Ok(ids)
    }

    /// Expand, optionally shuffle, and place the fleet.
    ///
    /// All inputs are validated before any vehicle is built.
    pub fn place(
        &self,
        counts: &[(VehicleTypeId, usize)],
        initial: &InitialConfig,
        rng: &mut ScenarioRng,
    ) -> FleetResult<Vec<VehicleInstance>> {
        let mut ids = self.vehicle_ids(counts)?;
        self.validate(ids.len(), initial)?;

        if initial.shuffle {
            rng.shuffle(&mut ids);
        }

        let fleet: Vec<VehicleInstance> = ids
            .into_iter()
            .zip(initial.positions.iter().zip(&initial.lanes))
            .map(|((vtype, id), (placement, &lane))| VehicleInstance {
                depart_speed: self.types[&vtype].depart_speed,
                vtype,
                id,
                route:        placement.route.clone(),
                depart_time:  0.0,
                depart_pos:   placement.pos,
                depart_lane:  lane,
                color:        VEHICLE_COLOR,
            })
            .collect();

        debug!("placed {} vehicles (shuffle = {})", fleet.len(), initial.shuffle);
        Ok(fleet)
    }

    fn validate(&self, total: usize, initial: &InitialConfig) -> FleetResult<()> {
        if initial.positions.len() != total {
            return Err(FleetError::CountMismatch {
                expected: total,
                got:      initial.positions.len(),
                what:     "positions",
            });
        }
        if initial.lanes.len() != total {
            return Err(FleetError::CountMismatch {
                expected: total,
                got:      initial.lanes.len(),
                what:     "lanes",
            });
        }
        if let Some(p) = initial.positions.iter().find(|p| !self.catalog.contains(&p.route)) {
            return Err(FleetError::UnknownRoute(p.route.clone()));
        }
        if let Some(lanes) = self.lanes {
            if let Some(&lane) = initial.lanes.iter().find(|&&l| l >= lanes) {
                return Err(FleetError::LaneOutOfRange { lane, lanes });
            }
        }
        Ok(())
    }
}

/// `(id, count)` pairs from type declarations, in declaration order.
pub fn counts_of(specs: &[crate::VehicleTypeSpec]) -> Vec<(VehicleTypeId, usize)> {
    specs.iter().map(|s| (s.id.clone(), s.count)).collect()
}
