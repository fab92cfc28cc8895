//! Screen-space projection of sensors and boundary outlines.
//!
//! Modules:
//! - equirect: linear equirectangular mapping, no fitting required
//! - natural_earth: Natural Earth projection fit to a pixel extent
//! - path: renderable path data built from boundary geometry
use glam::DVec2;
use mint::Vector2;

pub mod equirect;
pub mod natural_earth;
pub mod path;

pub use equirect::EquirectangularProjection;
pub use natural_earth::NaturalEarthProjection;
pub use path::{feature_path, project_rings, ring_path};

use crate::sensor::{AirQuality, SensorRecord};

/// Trait for map projections.
///
/// Positions are `[lng, lat]` in degrees, GeoJSON axis order. `None` means
/// the point has no valid image under the projection; callers skip those
/// points rather than treat them as errors.
pub trait Projection {
    fn project(&self, lng_lat: Vector2<f64>) -> Option<Vector2<f64>>;
}

/// A projected sensor: screen position plus rendering-relevant fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    /// Pixel position.
    pub position: DVec2,
    /// Status band carried through for styling.
    pub status: AirQuality,
    /// Rendering weight carried through from the record.
    pub intensity: f64,
}

/// Project a sensor set, excluding records without a valid image.
pub fn project_records(
    records: &[SensorRecord],
    projection: &dyn Projection,
) -> Vec<ProjectedPoint> {
    records
        .iter()
        .filter_map(|record| {
            let projected = projection.project(Vector2 {
                x: record.lng,
                y: record.lat,
            })?;
            Some(ProjectedPoint {
                position: DVec2::from(projected),
                status: record.status,
                intensity: record.intensity,
            })
        })
        .collect()
}
