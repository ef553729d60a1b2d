//! City set storage.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// City identifier as supplied by the loader.
pub type CityId = u32;

/// An ordered sequence of city ids covering every city exactly once,
/// interpreted as a cycle (the last city connects back to the first).
pub type Tour = Vec<CityId>;

/// A 2D coordinate. Immutable once loaded.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A validated Euclidean TSP instance.
///
/// Cities are stored in ascending id order. That order is the deterministic
/// iteration order used for construction tie-breaks and for indexing the
/// start-city draw, so identical inputs always produce identical tours.
///
/// # Examples
///
/// ```
/// use u_tsp::instance::TspInstance;
///
/// let instance = TspInstance::new([(1, (0.0, 0.0)), (2, (3.0, 4.0))]).unwrap();
/// assert_eq!(instance.len(), 2);
/// assert_eq!(instance.distance(1, 2), 5);
/// ```
#[derive(Debug, Clone)]
pub struct TspInstance {
    ids: Vec<CityId>,
    coords: Vec<Point>,
    index: HashMap<CityId, usize>,
}

impl TspInstance {
    /// Builds an instance from an id → coordinate mapping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the mapping is empty (no meaningful
    /// tour exists) or contains a duplicate id.
    pub fn new(cities: impl IntoIterator<Item = (CityId, (f64, f64))>) -> Result<Self> {
        let mut pairs: Vec<(CityId, Point)> = cities
            .into_iter()
            .map(|(id, (x, y))| (id, Point { x, y }))
            .collect();

        if pairs.is_empty() {
            return Err(Error::invalid_input("city set is empty"));
        }

        pairs.sort_by_key(|&(id, _)| id);
        for window in pairs.windows(2) {
            if window[0].0 == window[1].0 {
                return Err(Error::invalid_input(format!(
                    "duplicate city id {}",
                    window[0].0
                )));
            }
        }

        let ids: Vec<CityId> = pairs.iter().map(|&(id, _)| id).collect();
        let coords: Vec<Point> = pairs.iter().map(|&(_, p)| p).collect();
        let index = ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();

        Ok(Self { ids, coords, index })
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// City ids in ascending order.
    pub fn ids(&self) -> &[CityId] {
        &self.ids
    }

    /// Position of a city in the ascending-id order.
    pub(crate) fn position(&self, id: CityId) -> usize {
        self.index[&id]
    }

    /// Coordinate of a city.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not part of the instance. Tours handled by this
    /// crate are always permutations of the instance's id set, so a miss is
    /// a caller bug, not a runtime condition.
    pub fn coord(&self, id: CityId) -> Point {
        self.coords[self.index[&id]]
    }
}
