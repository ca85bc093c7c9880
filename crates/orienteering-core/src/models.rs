//! Core data models for the terrain map.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Grid bounds. Valid cells are `1..=width` by `1..=height`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapBounds {
    pub width: i32,
    pub height: i32,
}

impl MapBounds {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Whether `(x, y)` lies on the grid (1-indexed, inclusive).
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (1..=self.width).contains(&x) && (1..=self.height).contains(&y)
    }
}

/// A named, positioned, elevated location on the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Waypoint {
    pub name: String,
    pub x: i32,
    pub y: i32,
    /// Elevation in meters, any sign
    pub elevation: i32,
    /// Character drawn on the grid
    pub marker: char,
    /// Routes this waypoint has been connected into (reverse index)
    #[serde(default)]
    pub routes: BTreeSet<String>,
}

impl Waypoint {
    /// Create a waypoint that belongs to no route yet.
    pub fn new(name: impl Into<String>, x: i32, y: i32, elevation: i32, marker: char) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            elevation,
            marker,
            routes: BTreeSet::new(),
        }
    }

    /// Planar distance to another waypoint. Elevation is ignored.
    pub fn planar_distance(&self, other: &Waypoint) -> f64 {
        let dx = f64::from(other.x - self.x);
        let dy = f64::from(other.y - self.y);
        dx.hypot(dy)
    }
}

/// A named, append-only chain of waypoint names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub name: String,
    points: Vec<String>,
}

impl Route {
    /// A new route seeded with `from` and extended to `to`.
    pub fn from_segment(
        name: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            points: vec![from.into(), to.into()],
        }
    }

    /// Waypoint names in visiting order.
    pub fn points(&self) -> &[String] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Current tail of the chain.
    pub fn last(&self) -> Option<&str> {
        self.points.last().map(String::as_str)
    }

    /// Append `to` if `from` is the current tail. Returns false and leaves
    /// the route untouched otherwise.
    pub(crate) fn extend_from(&mut self, from: &str, to: &str) -> bool {
        if self.last() != Some(from) {
            return false;
        }
        self.points.push(to.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_one_indexed_and_inclusive() {
        let bounds = MapBounds::new(4, 3);
        assert!(bounds.contains(1, 1));
        assert!(bounds.contains(4, 3));
        assert!(!bounds.contains(0, 1));
        assert!(!bounds.contains(5, 3));
        assert!(!bounds.contains(2, 4));
        assert!(!MapBounds::default().contains(1, 1));
    }

    #[test]
    fn planar_distance_ignores_elevation() {
        let a = Waypoint::new("A", 1, 1, 0, 'a');
        let b = Waypoint::new("B", 4, 5, 900, 'b');
        assert!((a.planar_distance(&b) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn route_extends_only_from_tail() {
        let mut route = Route::from_segment("R", "A", "B");
        assert_eq!(route.points(), ["A", "B"]);
        assert!(!route.extend_from("A", "C"));
        assert!(route.extend_from("B", "A"));
        assert_eq!(route.points(), ["A", "B", "A"]);
        assert_eq!(route.last(), Some("A"));
    }
}
