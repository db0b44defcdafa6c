//! Cyclic routes and opposite-side rerouters.
//!
//! There is one route per starting edge, each visiting all four edges once
//! in cycle order.  Every edge carries a rerouter that sends vehicles onto
//! the route starting at the diametrically opposite edge:
//!
//! | Trigger edge | Target route   |
//! |--------------|----------------|
//! | `bottom`     | `routetop`     |
//! | `right`      | `routeleft`    |
//! | `top`        | `routebottom`  |
//! | `left`       | `routeright`   |
//!
//! A vehicle therefore never reaches the end of its route: it keeps
//! circulating until the run ends.

use ring_core::{Cardinal, EdgeId, Interval, RouteId};

use crate::Topology;

#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub id: RouteId,
    pub edges: Vec<EdgeId>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rerouter {
    pub id: String,
    pub trigger_edge: EdgeId,
    pub target_route: RouteId,
    pub interval: Interval,
}

/// The four ring routes plus their rerouters, both in [`Cardinal::ALL`]
/// order.
#[derive(Clone, Debug)]
pub struct RouteCatalog {
    routes: Vec<Route>,
    rerouters: Vec<Rerouter>,
}

impl RouteCatalog {
    /// Route id for the route starting on the edge leaving `c`.
    pub fn route_id(c: Cardinal) -> RouteId {
        RouteId::new(format!("route{}", c.name()))
    }

    /// Derive the catalog from a ring topology's edge ids.
    pub fn for_ring(topology: &Topology) -> Self {
        let routes = Cardinal::ALL
            .iter()
            .map(|&start| Route {
                id:    Self::route_id(start),
                edges: start.cycle_from().iter().map(|&c| topology.edge(c).id.clone()).collect(),
            })
            .collect();

        let rerouters = Cardinal::ALL
            .iter()
            .map(|&c| Rerouter {
                id:           format!("rerouter{}", c.title()),
                trigger_edge: topology.edge(c).id.clone(),
                target_route: Self::route_id(c.opposite()),
                interval:     Interval::whole_run(),
            })
            .collect();

        Self { routes, rerouters }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn rerouters(&self) -> &[Rerouter] {
        &self.rerouters
    }

    pub fn route(&self, id: &RouteId) -> Option<&Route> {
        self.routes.iter().find(|r| &r.id == id)
    }

    /// The route starting on the edge leaving `c`.
    #[inline]
    pub fn route_from(&self, c: Cardinal) -> &Route {
        &self.routes[c.index()]
    }

    pub fn contains(&self, id: &RouteId) -> bool {
        self.route(id).is_some()
    }

    /// The route a vehicle on `id` is switched to when it enters `id`'s
    /// first edge.
    pub fn opposite(&self, id: &RouteId) -> Option<&RouteId> {
        let first = self.route(id)?.edges.first()?;
        self.rerouters
            .iter()
            .find(|r| &r.trigger_edge == first)
            .map(|r| &r.target_route)
    }
}
