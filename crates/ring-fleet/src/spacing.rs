//! Evenly spaced initial placements.
//!
//! Vehicles are dealt round-robin across lanes; within each lane they are
//! spread at equal arc distance starting at the beginning of the `bottom`
//! edge.  An absolute arc position is converted to the edge it falls on and
//! the offset into that edge.

use ring_core::Cardinal;
use ring_network::Topology;

use crate::Placement;

/// Placements and lanes for `count` vehicles spread evenly over `topology`.
///
/// Returns two vectors of length `count`, suitable for
/// [`InitialConfig`](crate::InitialConfig).
pub fn uniform(topology: &Topology, count: usize) -> (Vec<Placement>, Vec<u32>) {
    if count == 0 {
        return (Vec::new(), Vec::new());
    }

    let lanes = topology.edge_type.lanes.max(1) as usize;
    let per_lane = count.div_ceil(lanes);
    let step = topology.total_length() / per_lane as f64;

    (0..count)
        .map(|i| {
            let lane = i % lanes;
            let slot = i / lanes;
            (locate(topology, slot as f64 * step), lane as u32)
        })
        .unzip()
}

/// Placement at absolute arc distance `s` from the start of `bottom`.
fn locate(topology: &Topology, s: f64) -> Placement {
    let mut remaining = s;
    for c in Cardinal::ALL {
        let len = topology.edge(c).length;
        if remaining < len {
            return Placement::on_edge(c, remaining);
        }
        remaining -= len;
    }
    // Only reachable through rounding at the very end of the loop.
    let last = Cardinal::Left;
    Placement::on_edge(last, topology.edge(last).length)
}
