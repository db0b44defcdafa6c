//! Closed-loop network description handed to the network compiler.
//!
//! A [`Topology`] always holds exactly four nodes and four edges forming the
//! directed cycle `bottom → right → top → left → bottom`, plus one shared
//! [`EdgeType`].  Nodes and edges are stored in [`Cardinal::ALL`] order, so
//! `edges[c.index()]` is the edge leaving `c`.

use log::debug;

use ring_core::{Cardinal, EdgeId, EdgeTypeId, NodeId, Point};

use crate::{NetworkResult, RingGeometry, RingParams};

/// Id of the single edge type shared by all ring edges.
pub const EDGE_TYPE_ID: &str = "edgeType";

// ── Records ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub pos: Point,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    pub id: EdgeId,
    pub from: NodeId,
    pub to: NodeId,
    /// Polyline from `from` to `to`, both endpoints included.
    pub shape: Vec<Point>,
    /// Declared length in metres.
    pub length: f64,
    pub edge_type: EdgeTypeId,
}

/// Lane count and speed limit shared by edges that reference it.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeType {
    pub id: EdgeTypeId,
    pub lanes: u32,
    /// m/s
    pub speed: f64,
}

// ── Topology ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Topology {
    pub radius: f64,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub edge_type: EdgeType,
}

impl Topology {
    /// Build the ring topology for `params`.
    ///
    /// Fails with a configuration error if the parameters are out of range.
    pub fn ring(params: &RingParams) -> NetworkResult<Self> {
        params.validate()?;
        let geometry = RingGeometry::build(params.length, params.resolution)?;
        let edge_type = EdgeType {
            id:    EdgeTypeId::new(EDGE_TYPE_ID),
            lanes: params.lanes,
            speed: params.speed_limit,
        };
        Ok(Self::from_geometry(&geometry, edge_type))
    }

    /// Assemble nodes and edges from precomputed geometry.
    pub fn from_geometry(geometry: &RingGeometry, edge_type: EdgeType) -> Self {
        let nodes = Cardinal::ALL
            .iter()
            .map(|&c| Node { id: NodeId::new(c.name()), pos: geometry.node(c) })
            .collect();

        let edges = Cardinal::ALL
            .iter()
            .map(|&c| Edge {
                id:        EdgeId::new(c.name()),
                from:      NodeId::new(c.name()),
                to:        NodeId::new(c.next().name()),
                shape:     geometry.arc(c).to_vec(),
                length:    geometry.edge_length,
                edge_type: edge_type.id.clone(),
            })
            .collect();

        debug!(
            "ring topology: radius {:.2} m, edge length {} m, {} shape points per edge",
            geometry.radius,
            geometry.edge_length,
            geometry.arc(Cardinal::Bottom).len()
        );

        Self { radius: geometry.radius, nodes, edges, edge_type }
    }

    #[inline]
    pub fn node(&self, c: Cardinal) -> &Node {
        &self.nodes[c.index()]
    }

    /// The edge leaving `c`.
    #[inline]
    pub fn edge(&self, c: Cardinal) -> &Edge {
        &self.edges[c.index()]
    }

    pub fn edge_by_id(&self, id: &EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|e| &e.id == id)
    }

    /// Sum of declared edge lengths.
    pub fn total_length(&self) -> f64 {
        self.edges.iter().map(|e| e.length).sum()
    }

    /// `true` if each edge ends where the next begins, both by node id and by
    /// shape (within `tolerance` metres), and the last edge returns to the
    /// first.
    pub fn is_closed_loop(&self, tolerance: f64) -> bool {
        let n = self.edges.len();
        if n == 0 {
            return false;
        }
        (0..n).all(|i| {
            let cur = &self.edges[i];
            let next = &self.edges[(i + 1) % n];
            let joined = match (cur.shape.last(), next.shape.first()) {
                (Some(&a), Some(&b)) => a.approx_eq(b, tolerance),
                _ => false,
            };
            cur.to == next.from && joined
        })
    }
}

/// Artifact base name for a ring network, e.g. `"loop-230m1l"`.
///
/// Length is truncated to whole metres.
pub fn network_name(base: &str, length: f64, lanes: u32) -> String {
    format!("{base}-{}m{lanes}l", length.trunc() as i64)
}
