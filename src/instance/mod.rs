//! Problem instance: the city set and the rounded Euclidean distance model.
//!
//! A [`TspInstance`] is a finalized, validated mapping from city identifier
//! to 2D coordinate. Parsing problem files and extracting coordinates is the
//! caller's job; the instance only checks that the mapping is non-empty and
//! free of duplicate ids.

mod distance;
mod types;

pub use types::{CityId, Point, Tour, TspInstance};
