//! Place name to coordinate resolution.
//!
//! Trend lookups by place name need a latitude/longitude pair to feed the
//! closest-location endpoint. The resolver is a trait so a geocoding service
//! can be plugged in; the built-in implementation answers from a fixed table
//! of well-known places.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::{Error, Result};

/// Resolves a place name to `(latitude, longitude)`.
#[async_trait]
pub trait LocationResolver: Send + Sync {
    async fn resolve(&self, place: &str) -> Result<(f64, f64)>;
}

/// Built-in coordinates for commonly requested places.
const PLACES: &[(&str, f64, f64)] = &[
    ("amsterdam", 52.3676, 4.9041),
    ("berlin", 52.5200, 13.4050),
    ("budapest", 47.4979, 19.0402),
    ("london", 51.5074, -0.1278),
    ("new york", 40.7128, -74.0060),
    ("paris", 48.8566, 2.3522),
    ("san francisco", 37.7749, -122.4194),
    ("stockholm", 59.3293, 18.0686),
    ("sydney", -33.8688, 151.2093),
    ("tokyo", 35.6762, 139.6503),
];

/// Resolver backed by a fixed in-memory table.
pub struct FixedLocationResolver {
    places: HashMap<String, (f64, f64)>,
}

impl FixedLocationResolver {
    pub fn new() -> Self {
        let places = PLACES
            .iter()
            .map(|(name, lat, long)| (name.to_string(), (*lat, *long)))
            .collect();
        Self { places }
    }

    /// Add or replace a place in the table.
    pub fn with_place(mut self, name: &str, lat: f64, long: f64) -> Self {
        self.places.insert(name.trim().to_lowercase(), (lat, long));
        self
    }
}

impl Default for FixedLocationResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LocationResolver for FixedLocationResolver {
    async fn resolve(&self, place: &str) -> Result<(f64, f64)> {
        let key = place.trim().to_lowercase();
        self.places
            .get(&key)
            .copied()
            .ok_or_else(|| Error::Location(format!("Unknown place: '{}'", place)))
    }
}
