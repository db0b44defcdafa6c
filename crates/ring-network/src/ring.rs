//! Ring geometry: cardinal nodes and quarter-arc polylines.
//!
//! # Radius convention
//!
//! The radius is `length / π`, while each edge is declared `length / 4`
//! long.  These disagree if `length` is read as the circumference (which
//! would give `length / 2π`).  Both are kept as-is.  The simulator uses the
//! declared edge length, not the shape, for vehicle positions.

use ring_core::geo::COORD_DECIMALS;
use ring_core::{Cardinal, Point, RingError};

use crate::NetworkResult;

// ── RingParams ────────────────────────────────────────────────────────────────

/// Network parameters of a ring scenario.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingParams {
    /// Total loop length in metres.
    pub length: f64,
    /// Lanes on every edge.
    pub lanes: u32,
    /// Speed limit on every edge, m/s.
    pub speed_limit: f64,
    /// Points per quarter-arc, both endpoints included.
    pub resolution: usize,
}

impl RingParams {
    /// Reject parameters that cannot describe a ring.
    pub fn validate(&self) -> Result<(), RingError> {
        if !(self.length.is_finite() && self.length > 0.0) {
            return Err(RingError::invalid("length", format!("must be > 0, got {}", self.length)));
        }
        if self.lanes < 1 {
            return Err(RingError::invalid("lanes", "must be >= 1, got 0"));
        }
        if !(self.speed_limit.is_finite() && self.speed_limit > 0.0) {
            return Err(RingError::invalid(
                "speed_limit",
                format!("must be > 0, got {}", self.speed_limit),
            ));
        }
        if self.resolution < 2 {
            return Err(RingError::invalid(
                "resolution",
                format!("must be >= 2, got {}", self.resolution),
            ));
        }
        Ok(())
    }
}

// ── RingGeometry ──────────────────────────────────────────────────────────────

/// Node coordinates and arc shapes of a ring, indexed by [`Cardinal::index`].
#[derive(Clone, Debug)]
pub struct RingGeometry {
    pub radius: f64,
    /// Declared length of every edge (`length / 4`).
    pub edge_length: f64,
    pub nodes: [Point; 4],
    pub arcs: [Vec<Point>; 4],
}

impl RingGeometry {
    /// Compute the geometry of a ring of total `length` with `resolution`
    /// points per quarter-arc.
    pub fn build(length: f64, resolution: usize) -> NetworkResult<Self> {
        if !(length.is_finite() && length > 0.0) {
            return Err(RingError::invalid("length", format!("must be > 0, got {length}")).into());
        }
        if resolution < 2 {
            return Err(RingError::invalid("resolution", format!("must be >= 2, got {resolution}")).into());
        }

        let radius = length / std::f64::consts::PI;
        let nodes = Cardinal::ALL.map(|c| Point::on_circle(radius, c.angle()).rounded(COORD_DECIMALS));
        let arcs = Cardinal::ALL.map(|c| {
            let (start, end) = c.arc();
            linspace(start, end, resolution)
                .map(|t| Point::on_circle(radius, t).rounded(COORD_DECIMALS))
                .collect::<Vec<_>>()
        });

        Ok(Self { radius, edge_length: length / 4.0, nodes, arcs })
    }

    #[inline]
    pub fn node(&self, c: Cardinal) -> Point {
        self.nodes[c.index()]
    }

    /// Shape of the edge leaving `c`.
    #[inline]
    pub fn arc(&self, c: Cardinal) -> &[Point] {
        &self.arcs[c.index()]
    }
}

/// `n` evenly spaced values from `start` to `end`, both included.
///
/// The last value is exactly `end` so adjacent arcs meet without drift.
pub fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 { (end - start) / (n - 1) as f64 } else { 0.0 };
    (0..n).map(move |i| if i + 1 == n && n > 1 { end } else { start + step * i as f64 })
}
