//! Route registry.
//!
//! Routes are only ever built by extending their current tail, so a route
//! name always refers to one continuous chain.

use crate::error::ConnectError;
use crate::models::Route;
use crate::waypoints::WaypointRegistry;
use std::collections::BTreeMap;

/// Named routes, keyed and ordered by name.
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
    routes: BTreeMap<String, Route>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect `from` to `to` in `route_name`.
    ///
    /// A new route is seeded with `from`. An existing route accepts the
    /// connection only when `from` is its last waypoint. On success both
    /// waypoints record membership of the route.
    pub fn connect(
        &mut self,
        waypoints: &mut WaypointRegistry,
        from: &str,
        to: &str,
        route_name: &str,
    ) -> Result<(), ConnectError> {
        for name in [from, to] {
            if !waypoints.contains(name) {
                return Err(ConnectError::UnknownWaypoint {
                    name: name.to_string(),
                });
            }
        }

        match self.routes.get_mut(route_name) {
            Some(route) => {
                if !route.extend_from(from, to) {
                    let last = route.last().unwrap_or_default().to_string();
                    tracing::warn!(
                        route = route_name,
                        from,
                        to,
                        last = %last,
                        "attempt to connect out of sequence"
                    );
                    return Err(ConnectError::OutOfSequence {
                        from: from.to_string(),
                        to: to.to_string(),
                        route: route_name.to_string(),
                        last,
                    });
                }
            }
            None => {
                let route = Route::from_segment(route_name, from, to);
                self.routes.insert(route_name.to_string(), route);
                tracing::debug!(route = route_name, from, "route created");
            }
        }

        waypoints.join_route(from, route_name);
        waypoints.join_route(to, route_name);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Route> {
        self.routes.get(name)
    }

    /// Names in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.values()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MapBounds, Waypoint};

    fn waypoints(names: &[&str]) -> WaypointRegistry {
        let mut registry = WaypointRegistry::new();
        for (i, name) in names.iter().enumerate() {
            registry.add(
                Waypoint::new(*name, i as i32 + 1, 1, 0, '*'),
                MapBounds::new(10, 10),
            );
        }
        registry
    }

    #[test]
    fn chained_connects_build_route() {
        let mut points = waypoints(&["A", "B", "C"]);
        let mut routes = RouteRegistry::new();

        assert!(routes.connect(&mut points, "A", "B", "R").is_ok());
        assert!(routes.connect(&mut points, "B", "C", "R").is_ok());
        assert_eq!(routes.get("R").unwrap().points(), ["A", "B", "C"]);
    }

    #[test]
    fn skipping_the_tail_is_rejected_without_mutation() {
        let mut points = waypoints(&["A", "B", "C"]);
        let mut routes = RouteRegistry::new();
        routes.connect(&mut points, "A", "B", "R").unwrap();
        routes.connect(&mut points, "B", "C", "R").unwrap();

        let err = routes.connect(&mut points, "A", "C", "R").unwrap_err();
        assert_eq!(
            err,
            ConnectError::OutOfSequence {
                from: "A".into(),
                to: "C".into(),
                route: "R".into(),
                last: "C".into(),
            }
        );
        assert_eq!(routes.get("R").unwrap().points(), ["A", "B", "C"]);
    }

    #[test]
    fn unknown_waypoint_creates_nothing() {
        let mut points = waypoints(&["A"]);
        let mut routes = RouteRegistry::new();

        let err = routes.connect(&mut points, "A", "Nowhere", "R").unwrap_err();
        assert_eq!(
            err,
            ConnectError::UnknownWaypoint {
                name: "Nowhere".into()
            }
        );
        assert!(routes.get("R").is_none());
        assert!(points.get("A").unwrap().routes.is_empty());
    }

    #[test]
    fn membership_recorded_on_both_ends() {
        let mut points = waypoints(&["A", "B", "C"]);
        let mut routes = RouteRegistry::new();
        routes.connect(&mut points, "A", "B", "R1").unwrap();
        routes.connect(&mut points, "B", "C", "R2").unwrap();

        let b = points.get("B").unwrap();
        assert_eq!(b.routes.iter().collect::<Vec<_>>(), ["R1", "R2"]);
        assert_eq!(points.get("C").unwrap().routes.len(), 1);
    }

    #[test]
    fn out_of_sequence_does_not_record_membership() {
        let mut points = waypoints(&["A", "B", "C", "D"]);
        let mut routes = RouteRegistry::new();
        routes.connect(&mut points, "A", "B", "R").unwrap();

        assert!(routes.connect(&mut points, "C", "D", "R").is_err());
        assert!(points.get("C").unwrap().routes.is_empty());
        assert!(points.get("D").unwrap().routes.is_empty());
    }

    #[test]
    fn first_connect_holds_exactly_both_ends() {
        let mut points = waypoints(&["A", "B"]);
        let mut routes = RouteRegistry::new();
        routes.connect(&mut points, "B", "B", "Spin").unwrap();
        routes.connect(&mut points, "A", "B", "Line").unwrap();

        assert_eq!(routes.get("Spin").unwrap().points(), ["B", "B"]);
        assert_eq!(routes.get("Line").unwrap().points(), ["A", "B"]);
        assert_eq!(routes.get("Line").unwrap().last(), Some("B"));
    }

    #[test]
    fn routes_may_revisit_waypoints() {
        let mut points = waypoints(&["A", "B"]);
        let mut routes = RouteRegistry::new();
        routes.connect(&mut points, "A", "B", "Loop").unwrap();
        routes.connect(&mut points, "B", "A", "Loop").unwrap();
        routes.connect(&mut points, "A", "A", "Loop").unwrap();

        assert_eq!(routes.get("Loop").unwrap().points(), ["A", "B", "A", "A"]);
    }
}
