//! Waypoint registry.

use crate::models::{MapBounds, Waypoint};
use std::collections::BTreeMap;

/// Named waypoints, keyed and ordered by name.
#[derive(Debug, Clone, Default)]
pub struct WaypointRegistry {
    waypoints: BTreeMap<String, Waypoint>,
}

impl WaypointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a waypoint if its name is free and its position is inside
    /// `bounds`. Returns whether it was inserted; a rejection is not an error.
    pub fn add(&mut self, waypoint: Waypoint, bounds: MapBounds) -> bool {
        if !bounds.contains(waypoint.x, waypoint.y) {
            tracing::debug!(
                name = %waypoint.name,
                x = waypoint.x,
                y = waypoint.y,
                "waypoint outside map bounds, ignored"
            );
            return false;
        }
        if self.waypoints.contains_key(&waypoint.name) {
            tracing::debug!(name = %waypoint.name, "duplicate waypoint name, ignored");
            return false;
        }
        self.waypoints.insert(waypoint.name.clone(), waypoint);
        true
    }

    pub fn get(&self, name: &str) -> Option<&Waypoint> {
        self.waypoints.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.waypoints.contains_key(name)
    }

    /// Record that `name` belongs to `route`. No-op for unknown names.
    pub(crate) fn join_route(&mut self, name: &str, route: &str) {
        if let Some(waypoint) = self.waypoints.get_mut(name) {
            waypoint.routes.insert(route.to_string());
        }
    }

    /// Names in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.waypoints.keys().map(String::as_str)
    }

    /// Waypoints in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Waypoint> {
        self.waypoints.values()
    }

    /// First waypoint, in name order, occupying the cell.
    pub fn at(&self, x: i32, y: i32) -> Option<&Waypoint> {
        self.waypoints.values().find(|w| w.x == x && w.y == y)
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
}
