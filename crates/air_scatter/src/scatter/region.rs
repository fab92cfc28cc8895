//! Region configuration for sensor placement.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geo::{GeoPoint, Viewport};

/// A named geographic cluster to populate with sensors.
///
/// Static configuration, never mutated by generation. Sampling is uniform
/// within `center ± spread` on each axis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Region {
    /// Identifying key, used as the sensor id prefix.
    pub key: String,
    /// Center of the cluster.
    pub center: GeoPoint,
    /// Half-extent of the latitude band in degrees.
    pub spread_lat: f64,
    /// Half-extent of the longitude band in degrees.
    pub spread_lng: f64,
    /// Target sensor count for this region.
    pub count: usize,
}

impl Region {
    /// Create a new region from a center and per-axis spreads.
    pub fn new(
        key: impl Into<String>,
        lat: f64,
        lng: f64,
        spread_lat: f64,
        spread_lng: f64,
        count: usize,
    ) -> Self {
        Self {
            key: key.into(),
            center: GeoPoint::new(lat, lng),
            spread_lat,
            spread_lng,
            count,
        }
    }

    /// Create a region covering the given bounding viewport.
    pub fn from_bounds(key: impl Into<String>, bounds: Viewport, count: usize) -> Self {
        let center = bounds.center();
        Self {
            key: key.into(),
            center,
            spread_lat: bounds.lat_span() * 0.5,
            spread_lng: bounds.lng_span() * 0.5,
            count,
        }
    }

    /// The sampling bounds for this region.
    pub fn bounds(&self) -> Viewport {
        Viewport::new(
            self.center.lat - self.spread_lat,
            self.center.lat + self.spread_lat,
            self.center.lng - self.spread_lng,
            self.center.lng + self.spread_lng,
        )
    }

    /// Validates the region, returning an error if unusable for sampling.
    pub fn validate(&self) -> Result<()> {
        if self.key.is_empty() {
            return Err(Error::InvalidConfig("region key must not be empty".into()));
        }
        if !self.center.is_valid() {
            return Err(Error::InvalidConfig(format!(
                "region '{}' center out of range",
                self.key
            )));
        }
        if !(self.spread_lat > 0.0 && self.spread_lng > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "region '{}' spreads must be > 0",
                self.key
            )));
        }

        Ok(())
    }
}
