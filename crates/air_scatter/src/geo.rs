//! Geographic primitives: points and rectangular viewports.
//!
//! A [`Viewport`] is a lat/lng bounding rectangle used both as a sampling
//! domain for scattering and as the visible region for projection. It knows
//! how to zoom onto a focus target, fit itself around a sensor set, and
//! filter marker positions that fall off-screen.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sensor::SensorRecord;

/// Padding applied around a fitted sensor set, as a fraction of the span.
pub const FIT_PADDING_FRACTION: f64 = 0.45;
/// Minimum span in degrees for fitted and focused viewports.
pub const MIN_SPAN_DEG: f64 = 4.0;
/// Tolerance outside the [0, 100] normalized range before a marker is dropped.
pub const MARKER_TOLERANCE_PCT: f64 = 2.0;
/// Default fraction of the base span used when focusing on a target.
pub const DEFAULT_FOCUS_FRACTION: f64 = 0.2;

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPoint {
    /// Latitude in `[-90, 90]`.
    pub lat: f64,
    /// Longitude in `[-180, 180]`.
    pub lng: f64,
}

impl GeoPoint {
    /// Create a new point.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True if both components are finite and within geographic range.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// A rectangular geographic bounding region.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Viewport {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Viewport {
    /// The whole world.
    pub const WORLD: Viewport = Viewport {
        min_lat: -90.0,
        max_lat: 90.0,
        min_lng: -180.0,
        max_lng: 180.0,
    };

    /// Create a new viewport from explicit bounds.
    pub fn new(min_lat: f64, max_lat: f64, min_lng: f64, max_lng: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        }
    }

    /// Latitude span in degrees.
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Longitude span in degrees.
    pub fn lng_span(&self) -> f64 {
        self.max_lng - self.min_lng
    }

    /// Center of the viewport.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.min_lat + self.max_lat) * 0.5,
            (self.min_lng + self.max_lng) * 0.5,
        )
    }

    /// True if the point lies within the viewport bounds.
    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.lat)
            && (self.min_lng..=self.max_lng).contains(&point.lng)
    }

    /// Validates the viewport, returning an error if degenerate or inverted.
    pub fn validate(&self) -> Result<()> {
        if !(self.min_lat.is_finite()
            && self.max_lat.is_finite()
            && self.min_lng.is_finite()
            && self.max_lng.is_finite())
        {
            return Err(Error::InvalidConfig("viewport bounds must be finite".into()));
        }
        if self.lat_span() <= 0.0 || self.lng_span() <= 0.0 {
            return Err(Error::InvalidConfig(
                "viewport spans must be > 0 on both axes".into(),
            ));
        }

        Ok(())
    }

    /// Compute a zoomed sub-viewport centered on `target`.
    ///
    /// The result spans `fraction` of this viewport on each axis (floored at
    /// [`MIN_SPAN_DEG`], capped at the base span) and is shifted so it never
    /// exceeds the base bounds.
    pub fn focus_on(&self, target: GeoPoint, fraction: f64) -> Viewport {
        let fraction = fraction.clamp(0.0, 1.0);
        let lat_span = (self.lat_span() * fraction)
            .max(MIN_SPAN_DEG)
            .min(self.lat_span());
        let lng_span = (self.lng_span() * fraction)
            .max(MIN_SPAN_DEG)
            .min(self.lng_span());

        let mut min_lat = target.lat - lat_span * 0.5;
        let mut min_lng = target.lng - lng_span * 0.5;

        // Shift instead of shrinking when the focus window leaves the base.
        min_lat = min_lat.clamp(self.min_lat, self.max_lat - lat_span);
        min_lng = min_lng.clamp(self.min_lng, self.max_lng - lng_span);

        Viewport::new(min_lat, min_lat + lat_span, min_lng, min_lng + lng_span)
    }

    /// Compute a viewport enclosing all `points` with proportional padding.
    ///
    /// Each axis is padded by [`FIT_PADDING_FRACTION`] of its span and floored
    /// at [`MIN_SPAN_DEG`] so a single point never yields a zero-span
    /// viewport. An empty input returns [`Viewport::WORLD`].
    pub fn fit_points<I>(points: I) -> Viewport
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        let mut min_lat = f64::INFINITY;
        let mut max_lat = f64::NEG_INFINITY;
        let mut min_lng = f64::INFINITY;
        let mut max_lng = f64::NEG_INFINITY;
        let mut any = false;

        for p in points {
            if !p.is_valid() {
                continue;
            }
            any = true;
            min_lat = min_lat.min(p.lat);
            max_lat = max_lat.max(p.lat);
            min_lng = min_lng.min(p.lng);
            max_lng = max_lng.max(p.lng);
        }

        if !any {
            return Viewport::WORLD;
        }

        let lat_pad = ((max_lat - min_lat) * FIT_PADDING_FRACTION).max(MIN_SPAN_DEG * 0.5);
        let lng_pad = ((max_lng - min_lng) * FIT_PADDING_FRACTION).max(MIN_SPAN_DEG * 0.5);

        Viewport::new(
            (min_lat - lat_pad).max(-90.0),
            (max_lat + lat_pad).min(90.0),
            (min_lng - lng_pad).max(-180.0),
            (max_lng + lng_pad).min(180.0),
        )
    }

    /// Fit a viewport around a sensor set. See [`Viewport::fit_points`].
    pub fn fit_records(records: &[SensorRecord]) -> Viewport {
        Viewport::fit_points(records.iter().map(|r| GeoPoint::new(r.lat, r.lng)))
    }

    /// Map a geographic position to percent coordinates within the viewport.
    ///
    /// `x` grows eastward, `y` grows southward, both in `[0, 100]` for points
    /// inside the viewport. Positions more than [`MARKER_TOLERANCE_PCT`]
    /// outside that range on either axis are off-screen and return `None`;
    /// callers exclude them from the rendered marker set rather than clip.
    pub fn normalized_position(&self, lat: f64, lng: f64) -> Option<(f64, f64)> {
        let lat_span = self.lat_span();
        let lng_span = self.lng_span();
        if lat_span <= 0.0 || lng_span <= 0.0 {
            return None;
        }

        let x = (lng - self.min_lng) / lng_span * 100.0;
        let y = (self.max_lat - lat) / lat_span * 100.0;

        let lo = -MARKER_TOLERANCE_PCT;
        let hi = 100.0 + MARKER_TOLERANCE_PCT;
        if !(lo..=hi).contains(&x) || !(lo..=hi).contains(&y) {
            return None;
        }

        Some((x, y))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::WORLD
    }
}
