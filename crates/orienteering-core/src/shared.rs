//! Thread-safe handle around a terrain map.
//!
//! Queries take a read guard and may run concurrently. `add_waypoint` and
//! `connect` take the write guard.

use crate::map::TerrainMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Cloneable shared map. Clones refer to the same map.
#[derive(Debug, Clone, Default)]
pub struct SharedTerrainMap {
    inner: Arc<RwLock<TerrainMap>>,
}

impl SharedTerrainMap {
    pub fn new(map: TerrainMap) -> Self {
        Self {
            inner: Arc::new(RwLock::new(map)),
        }
    }

    /// Read access. A poisoned lock is recovered since every mutation
    /// completes before any panic could unwind through it.
    pub fn read(&self) -> RwLockReadGuard<'_, TerrainMap> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, TerrainMap> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl From<TerrainMap> for SharedTerrainMap {
    fn from(map: TerrainMap) -> Self {
        Self::new(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::GreatestRise;
    use std::thread;

    #[test]
    fn concurrent_readers_see_same_results() {
        let mut map = TerrainMap::with_bounds(5, 5);
        map.add_waypoint("A", 1, 1, 0, 'a');
        map.add_waypoint("B", 2, 1, 4, 'b');
        map.connect("A", "B", "R").unwrap();
        let shared = SharedTerrainMap::from(map);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    let map = shared.read();
                    (map.route_length("R"), map.greatest_rise("A"))
                })
            })
            .collect();

        for handle in handles {
            let (length, rise) = handle.join().unwrap();
            assert_eq!(length, Ok(1.0));
            assert!(matches!(rise, Ok(GreatestRise::Rise { meters: 4, .. })));
        }
    }

    #[test]
    fn writes_are_visible_through_clones() {
        let shared = SharedTerrainMap::new(TerrainMap::with_bounds(3, 3));
        let other = shared.clone();

        assert!(shared.write().add_waypoint("P", 2, 2, 1, 'p'));
        assert!(other.read().waypoint("P").is_some());
    }
}
