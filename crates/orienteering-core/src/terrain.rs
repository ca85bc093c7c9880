//! Terrain queries over the waypoint and route registries.
//!
//! All functions here are read-only and hold no state of their own.

use crate::error::QueryError;
use crate::models::{Route, Waypoint};
use crate::routes::RouteRegistry;
use crate::waypoints::WaypointRegistry;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Result of a greatest-rise query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum GreatestRise {
    /// Largest climb in meters and every route that reaches it
    Rise { meters: i64, routes: BTreeSet<String> },
    /// No route climbs above the starting elevation
    NoRise,
}

/// Waypoints of a route in visiting order.
pub fn route_points<'a>(
    waypoints: &'a WaypointRegistry,
    route: &'a Route,
) -> impl Iterator<Item = &'a Waypoint> + 'a {
    route.points().iter().filter_map(|name| waypoints.get(name))
}

/// Planar length of a route, rounded to one decimal place.
pub fn route_length(
    waypoints: &WaypointRegistry,
    routes: &RouteRegistry,
    name: &str,
) -> Result<f64, QueryError> {
    let route = routes
        .get(name)
        .ok_or_else(|| QueryError::RouteNotFound(name.to_string()))?;

    if route.len() < 2 {
        return Err(QueryError::InsufficientLength {
            route: name.to_string(),
            points: route.len(),
        });
    }

    let points: Vec<&Waypoint> = route_points(waypoints, route).collect();
    let total: f64 = points
        .windows(2)
        .map(|pair| pair[0].planar_distance(pair[1]))
        .sum();

    Ok((total * 10.0).round() / 10.0)
}

/// Steepest monotonic climb reachable from `point_name` along any route
/// passing through it.
///
/// Each route is walked forward from the first occurrence of the point.
/// The walk continues while the rise relative to the point does not
/// decrease and stops at the first drop. Routes whose walk reaches the
/// overall maximum are all reported.
pub fn greatest_rise(
    waypoints: &WaypointRegistry,
    routes: &RouteRegistry,
    point_name: &str,
) -> Result<GreatestRise, QueryError> {
    let start = waypoints
        .get(point_name)
        .ok_or_else(|| QueryError::WaypointNotFound(point_name.to_string()))?;

    let mut max_rise = 0i64;
    let mut rising = BTreeSet::new();

    for route_name in &start.routes {
        let Some(route) = routes.get(route_name) else {
            continue;
        };
        let rise = monotonic_rise(waypoints, route, start);
        match rise.cmp(&max_rise) {
            Ordering::Greater => {
                max_rise = rise;
                rising.clear();
                rising.insert(route_name.clone());
            }
            Ordering::Equal => {
                rising.insert(route_name.clone());
            }
            Ordering::Less => {}
        }
    }

    tracing::trace!(point = point_name, max_rise, routes = rising.len(), "greatest rise");

    if max_rise > 0 {
        Ok(GreatestRise::Rise {
            meters: max_rise,
            routes: rising,
        })
    } else {
        Ok(GreatestRise::NoRise)
    }
}

/// Highest rise reached by walking `route` from the first occurrence of
/// `start` until the elevation drops.
fn monotonic_rise(waypoints: &WaypointRegistry, route: &Route, start: &Waypoint) -> i64 {
    let base = i64::from(start.elevation);
    let mut accepted = 0i64;

    let after_start = route
        .points()
        .iter()
        .skip_while(|name| name.as_str() != start.name);

    for name in after_start {
        let Some(point) = waypoints.get(name) else {
            break;
        };
        let rise = i64::from(point.elevation) - base;
        if rise < accepted {
            break;
        }
        accepted = rise;
    }

    accepted
}
