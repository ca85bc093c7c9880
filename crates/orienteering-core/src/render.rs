//! Text rendering of maps, listings and query results.
//!
//! Every function returns the full text, one line per `\n`, so callers
//! decide where it goes.

use crate::error::QueryError;
use crate::map::TerrainMap;
use crate::models::Route;
use crate::terrain::GreatestRise;
use std::fmt::Write;

const EMPTY_CELL: char = '.';

/// Draw the grid with each waypoint's marker at its cell. Axes are
/// 1-indexed, columns along the top and rows down the left side.
pub fn render_grid(map: &TerrainMap) -> String {
    let bounds = map.bounds();
    let mut out = String::from(" ");
    for x in 1..=bounds.width {
        let _ = write!(out, "{x:>3}");
    }
    out.push('\n');

    for y in 1..=bounds.height {
        let _ = write!(out, "{y:>2}");
        for x in 1..=bounds.width {
            let cell = map
                .waypoints()
                .at(x, y)
                .map(|w| w.marker)
                .unwrap_or(EMPTY_CELL);
            let _ = write!(out, "{cell:>3}");
        }
        out.push('\n');
    }
    out
}

/// Alphabetical waypoint listing with markers.
pub fn render_points(map: &TerrainMap) -> String {
    let mut out = String::from("Points:\n");
    for waypoint in map.waypoints().iter() {
        let _ = writeln!(out, " - {} : {}", waypoint.name, waypoint.marker);
    }
    out
}

/// Alphabetical route listing.
pub fn render_routes(map: &TerrainMap) -> String {
    let mut out = String::from("Routes:\n");
    for name in map.route_names() {
        let _ = writeln!(out, " - {name}");
    }
    out
}

/// A route as an arrow-joined chain, one waypoint per line.
pub fn render_route(route: &Route) -> String {
    let mut out = String::new();
    let Some((first, rest)) = route.points().split_first() else {
        return out;
    };
    let _ = writeln!(out, "{first}");
    let width = first.len();
    for name in rest {
        let _ = writeln!(out, "{:>width$}{name}", " -> ");
    }
    out
}

/// Format a length with two significant digits, switching to exponent
/// notation outside `1e-4..1e2` the way `%.2g` does.
pub fn format_length(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }

    let scientific = format!("{value:.1e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .map(|(m, e)| (m.to_string(), e.parse::<i32>().unwrap_or(0)))
        .unwrap_or_else(|| (scientific.clone(), 0));

    if (-4..2).contains(&exponent) {
        let decimals = (1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(&mantissa), exponent.abs())
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

pub fn render_length(route: &str, length: f64) -> String {
    format!("Route {route} length was {}\n", format_length(length))
}

pub fn render_rise(point: &str, rise: &GreatestRise) -> String {
    match rise {
        GreatestRise::Rise { meters, routes } => {
            let mut out =
                format!("Greatest rise after point {point}, {meters} meters, is on route(s):\n");
            for route in routes {
                let _ = writeln!(out, " - {route}");
            }
            out
        }
        GreatestRise::NoRise => format!("No route rises after point {point}\n"),
    }
}

pub fn render_query_error(err: &QueryError) -> String {
    match err {
        QueryError::RouteNotFound(name) => format!("Error: Route named {name} can't be found\n"),
        QueryError::WaypointNotFound(name) => {
            format!("Error: Point named {name} can't be found\n")
        }
        QueryError::InsufficientLength { route, .. } => {
            format!("Route {route} must have at least two points to calculate length.\n")
        }
    }
}
