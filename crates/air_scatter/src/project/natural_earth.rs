//! Natural Earth projection fit to a pixel extent.
use glam::DVec2;
use mint::Vector2;

use crate::error::{Error, Result};
use crate::geo::Viewport;
use crate::project::Projection;

/// Samples taken along each viewport edge when fitting the bounding
/// transform.
const FIT_EDGE_STEPS: usize = 64;

/// Natural Earth pseudocylindrical projection.
///
/// The raw polynomial projection is fit to a target pixel extent by sampling
/// the geographic viewport boundary, then scaling and translating so the
/// projected region fills the extent without overflowing either axis.
/// Points outside the geographic domain (or non-finite) project to `None`.
#[derive(Debug, Clone, Copy)]
pub struct NaturalEarthProjection {
    scale: f64,
    translate: DVec2,
}

impl NaturalEarthProjection {
    /// Fit the projection to a pixel extent over the whole world.
    pub fn fit_world(extent: (f64, f64)) -> Result<Self> {
        Self::fit_extent(extent, &Viewport::WORLD)
    }

    /// Fit the projection to a pixel extent over a geographic viewport.
    pub fn fit_extent(extent: (f64, f64), viewport: &Viewport) -> Result<Self> {
        let (width, height) = extent;
        if !(width > 0.0 && height > 0.0) {
            return Err(Error::InvalidConfig(
                "projection extent must be > 0 in both components".into(),
            ));
        }
        viewport.validate()?;

        let (min, max) = raw_bounds(viewport);
        let span = max - min;
        let scale = (width / span.x).min(height / span.y);
        let raw_center = (min + max) * 0.5;
        let translate = DVec2::new(
            width * 0.5 - raw_center.x * scale,
            height * 0.5 + raw_center.y * scale,
        );

        Ok(Self { scale, translate })
    }

    /// Natural Earth polynomial in radians.
    fn raw(lambda: f64, phi: f64) -> DVec2 {
        let phi2 = phi * phi;
        let phi4 = phi2 * phi2;
        DVec2::new(
            lambda
                * (0.8707 - 0.131_979 * phi2
                    + phi4 * (-0.013_791 + phi4 * (0.003_971 * phi2 - 0.001_529 * phi4))),
            phi * (1.007_226
                + phi2 * (0.015_085 + phi4 * (-0.044_475 + 0.028_874 * phi2 - 0.005_916 * phi4))),
        )
    }
}

impl Projection for NaturalEarthProjection {
    fn project(&self, lng_lat: Vector2<f64>) -> Option<Vector2<f64>> {
        let lng = lng_lat.x;
        let lat = lng_lat.y;
        if !lng.is_finite() || !lat.is_finite() {
            return None;
        }
        if !(-180.0..=180.0).contains(&lng) || !(-90.0..=90.0).contains(&lat) {
            return None;
        }

        let raw = Self::raw(lng.to_radians(), lat.to_radians());
        Some(Vector2 {
            x: self.translate.x + raw.x * self.scale,
            // Screen y grows downward.
            y: self.translate.y - raw.y * self.scale,
        })
    }
}

/// Bounds of the raw projection over the viewport boundary.
///
/// For a fixed latitude the raw x is monotonic in longitude and the raw y
/// depends on latitude alone, so sampling the four edges is enough to bound
/// the projected region.
fn raw_bounds(viewport: &Viewport) -> (DVec2, DVec2) {
    let mut min = DVec2::splat(f64::INFINITY);
    let mut max = DVec2::splat(f64::NEG_INFINITY);
    let mut include = |lng: f64, lat: f64| {
        let p = NaturalEarthProjection::raw(lng.to_radians(), lat.to_radians());
        min = min.min(p);
        max = max.max(p);
    };

    for i in 0..=FIT_EDGE_STEPS {
        let t = i as f64 / FIT_EDGE_STEPS as f64;
        let lat = viewport.min_lat + t * viewport.lat_span();
        let lng = viewport.min_lng + t * viewport.lng_span();
        include(viewport.min_lng, lat);
        include(viewport.max_lng, lat);
        include(lng, viewport.min_lat);
        include(lng, viewport.max_lat);
    }

    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn project(p: &NaturalEarthProjection, lng: f64, lat: f64) -> (f64, f64) {
        let v = p.project(Vector2 { x: lng, y: lat }).expect("projectable");
        (v.x, v.y)
    }

    #[test]
    fn world_fit_keeps_every_point_inside_the_extent() {
        let p = NaturalEarthProjection::fit_world((800.0, 600.0)).expect("fit");
        for lat in (-90..=90).step_by(15) {
            for lng in (-180..=180).step_by(30) {
                let (x, y) = project(&p, f64::from(lng), f64::from(lat));
                assert!((-EPS..=800.0 + EPS).contains(&x), "x {x} out of extent");
                assert!((-EPS..=600.0 + EPS).contains(&y), "y {y} out of extent");
            }
        }
    }

    #[test]
    fn world_fit_centers_the_origin() {
        let p = NaturalEarthProjection::fit_world((1000.0, 500.0)).expect("fit");
        let (x, y) = project(&p, 0.0, 0.0);
        assert!((x - 500.0).abs() < EPS);
        assert!((y - 250.0).abs() < EPS);
    }

    #[test]
    fn equator_spans_the_full_width_for_a_tall_extent() {
        let p = NaturalEarthProjection::fit_world((100.0, 100.0)).expect("fit");
        let (x_west, _) = project(&p, -180.0, 0.0);
        let (x_east, _) = project(&p, 180.0, 0.0);
        assert!(x_west < 1.0);
        assert!(x_east > 99.0);
    }

    #[test]
    fn x_grows_east_and_y_grows_south() {
        let p = NaturalEarthProjection::fit_world((800.0, 400.0)).expect("fit");
        let (x0, y0) = project(&p, 0.0, 0.0);
        let (x1, _) = project(&p, 20.0, 0.0);
        let (_, y2) = project(&p, 0.0, 45.0);
        assert!(x1 > x0);
        assert!(y2 < y0);
    }

    #[test]
    fn out_of_domain_points_are_unprojectable() {
        let p = NaturalEarthProjection::fit_world((800.0, 400.0)).expect("fit");
        assert!(p.project(Vector2 { x: 181.0, y: 0.0 }).is_none());
        assert!(p.project(Vector2 { x: 0.0, y: 95.0 }).is_none());
        assert!(p.project(Vector2 { x: f64::NAN, y: 0.0 }).is_none());
    }

    #[test]
    fn regional_fit_maps_viewport_points_into_extent() {
        let viewport = Viewport::new(35.0, 70.0, -10.0, 40.0);
        let p = NaturalEarthProjection::fit_extent((640.0, 480.0), &viewport).expect("fit");
        for lat in [35.0, 50.0, 70.0] {
            for lng in [-10.0, 15.0, 40.0] {
                let (x, y) = project(&p, lng, lat);
                assert!((-EPS..=640.0 + EPS).contains(&x));
                assert!((-EPS..=480.0 + EPS).contains(&y));
            }
        }
    }

    #[test]
    fn degenerate_extent_is_rejected() {
        assert!(NaturalEarthProjection::fit_world((0.0, 100.0)).is_err());
        assert!(NaturalEarthProjection::fit_world((100.0, -1.0)).is_err());
    }
}
