//! JSON map definitions.
//!
//! A definition is replayed through the same `add_waypoint` and `connect`
//! calls an interactive caller would make, so every rule of the map applies.

use crate::error::{ConnectError, LoadError};
use crate::map::TerrainMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serialized form of a terrain map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapDefinition {
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub waypoints: Vec<WaypointDefinition>,
    #[serde(default)]
    pub routes: Vec<RouteDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaypointDefinition {
    pub name: String,
    pub x: i32,
    pub y: i32,
    #[serde(default, alias = "height")]
    pub elevation: i32,
    pub marker: String,
}

/// A route listed as its full visiting order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDefinition {
    pub name: String,
    pub waypoints: Vec<String>,
}

/// What happened while replaying a definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub waypoints_added: usize,
    /// Duplicates and out-of-bounds waypoints
    pub waypoints_skipped: usize,
    pub connections_made: usize,
    pub rejected_connections: Vec<ConnectError>,
}

impl MapDefinition {
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }

    /// Build a fresh map from this definition.
    pub fn build(&self) -> Result<(TerrainMap, LoadReport), LoadError> {
        let mut map = TerrainMap::new();
        let report = self.apply(&mut map)?;
        Ok((map, report))
    }

    /// Set the bounds of `map` and replay waypoints then routes into it.
    ///
    /// Markers are validated up front; an invalid one leaves `map` untouched.
    pub fn apply(&self, map: &mut TerrainMap) -> Result<LoadReport, LoadError> {
        let markers = self
            .waypoints
            .iter()
            .map(single_char_marker)
            .collect::<Result<Vec<_>, _>>()?;

        map.set_bounds(self.width, self.height);
        let mut report = LoadReport::default();

        for (def, marker) in self.waypoints.iter().zip(markers) {
            if map.add_waypoint(def.name.clone(), def.x, def.y, def.elevation, marker) {
                report.waypoints_added += 1;
            } else {
                report.waypoints_skipped += 1;
            }
        }

        for route in &self.routes {
            if route.waypoints.len() < 2 {
                tracing::debug!(route = %route.name, "route lists fewer than two waypoints, skipped");
                continue;
            }
            for pair in route.waypoints.windows(2) {
                match map.connect(&pair[0], &pair[1], &route.name) {
                    Ok(()) => report.connections_made += 1,
                    Err(err) => report.rejected_connections.push(err),
                }
            }
        }

        tracing::info!(
            waypoints = report.waypoints_added,
            skipped = report.waypoints_skipped,
            connections = report.connections_made,
            rejected = report.rejected_connections.len(),
            "map definition loaded"
        );
        Ok(report)
    }
}

/// Read and build a map from a JSON file.
pub fn load_map(path: impl AsRef<Path>) -> Result<(TerrainMap, LoadReport), LoadError> {
    MapDefinition::from_path(path)?.build()
}

fn single_char_marker(def: &WaypointDefinition) -> Result<char, LoadError> {
    let mut chars = def.marker.chars();
    match (chars.next(), chars.next()) {
        (Some(marker), None) => Ok(marker),
        _ => Err(LoadError::InvalidMarker {
            name: def.name.clone(),
            marker: def.marker.clone(),
        }),
    }
}
