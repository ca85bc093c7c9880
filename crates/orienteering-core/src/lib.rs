pub mod error;
pub mod loader;
pub mod map;
pub mod models;
pub mod render;
pub mod routes;
pub mod shared;
pub mod terrain;
pub mod waypoints;

pub use error::{ConnectError, LoadError, QueryError};
pub use loader::{load_map, LoadReport, MapDefinition, RouteDefinition, WaypointDefinition};
pub use map::TerrainMap;
pub use models::{MapBounds, Route, Waypoint};
pub use routes::RouteRegistry;
pub use shared::SharedTerrainMap;
pub use terrain::{greatest_rise, route_length, route_points, GreatestRise};
pub use waypoints::WaypointRegistry;
