//! The terrain map aggregate: bounds plus the two registries.

use crate::error::{ConnectError, QueryError};
use crate::models::{MapBounds, Route, Waypoint};
use crate::routes::RouteRegistry;
use crate::terrain::{self, GreatestRise};
use crate::waypoints::WaypointRegistry;

/// One terrain map. Every operation goes through this context.
#[derive(Debug, Clone, Default)]
pub struct TerrainMap {
    bounds: MapBounds,
    waypoints: WaypointRegistry,
    routes: RouteRegistry,
}

impl TerrainMap {
    /// Create an empty map with 0x0 bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty map with the given bounds.
    pub fn with_bounds(width: i32, height: i32) -> Self {
        let mut map = Self::new();
        map.set_bounds(width, height);
        map
    }

    /// Set the grid size. Waypoints already added are not re-validated.
    pub fn set_bounds(&mut self, width: i32, height: i32) {
        self.bounds = MapBounds::new(width, height);
    }

    pub fn bounds(&self) -> MapBounds {
        self.bounds
    }

    /// Add a waypoint. Duplicate names and positions outside the bounds are
    /// ignored; the return value tells whether the waypoint was inserted.
    pub fn add_waypoint(
        &mut self,
        name: impl Into<String>,
        x: i32,
        y: i32,
        elevation: i32,
        marker: char,
    ) -> bool {
        self.waypoints
            .add(Waypoint::new(name, x, y, elevation, marker), self.bounds)
    }

    /// Make `to` follow `from` in `route_name`, creating the route if needed.
    pub fn connect(&mut self, from: &str, to: &str, route_name: &str) -> Result<(), ConnectError> {
        self.routes
            .connect(&mut self.waypoints, from, to, route_name)
    }

    pub fn waypoint(&self, name: &str) -> Option<&Waypoint> {
        self.waypoints.get(name)
    }

    pub fn route(&self, name: &str) -> Option<&Route> {
        self.routes.get(name)
    }

    pub fn waypoints(&self) -> &WaypointRegistry {
        &self.waypoints
    }

    pub fn routes(&self) -> &RouteRegistry {
        &self.routes
    }

    /// Waypoint names in alphabetical order.
    pub fn waypoint_names(&self) -> Vec<&str> {
        self.waypoints.names().collect()
    }

    /// Route names in alphabetical order.
    pub fn route_names(&self) -> Vec<&str> {
        self.routes.names().collect()
    }

    pub fn route_length(&self, name: &str) -> Result<f64, QueryError> {
        terrain::route_length(&self.waypoints, &self.routes, name)
    }

    pub fn greatest_rise(&self, point_name: &str) -> Result<GreatestRise, QueryError> {
        terrain::greatest_rise(&self.waypoints, &self.routes, point_name)
    }
}
