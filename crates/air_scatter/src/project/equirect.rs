//! Linear equirectangular projection.
use mint::Vector2;

use crate::project::Projection;

/// Equirectangular mapping of the whole world onto a pixel rectangle.
///
/// `x = (lng + 180) / 360 * width`, `y = (90 - lat) / 180 * height`.
/// Deterministic and O(1) per point; the only unprojectable inputs are
/// non-finite coordinates.
#[derive(Debug, Clone, Copy)]
pub struct EquirectangularProjection {
    /// Target width in pixels.
    pub width: f64,
    /// Target height in pixels.
    pub height: f64,
}

impl EquirectangularProjection {
    /// Create a projection for the given pixel extent.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Projection for EquirectangularProjection {
    fn project(&self, lng_lat: Vector2<f64>) -> Option<Vector2<f64>> {
        let lng = lng_lat.x;
        let lat = lng_lat.y;
        if !lng.is_finite() || !lat.is_finite() {
            return None;
        }

        Some(Vector2 {
            x: (lng + 180.0) / 360.0 * self.width,
            y: (90.0 - lat) / 180.0 * self.height,
        })
    }
}
