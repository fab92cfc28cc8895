//! Renderable path data built from boundary geometry.
//!
//! Paths use SVG path syntax (`M x,y L x,y … Z`). Unprojectable points are
//! skipped; rings left with too few points, and features left with no rings,
//! yield `None` and are skipped by callers rather than treated as errors.
use glam::DVec2;
use mint::Vector2;

use crate::land::{Geometry, Position};
use crate::project::Projection;

/// Project a ring, dropping unprojectable points.
pub fn project_ring(ring: &[Position], projection: &dyn Projection) -> Vec<DVec2> {
    ring.iter()
        .filter_map(|&[lng, lat]| projection.project(Vector2 { x: lng, y: lat }))
        .map(DVec2::from)
        .collect()
}

/// Project every ring of a geometry to point lists, for non-SVG renderers.
///
/// Iteration strategy per variant: points yield one single-point ring each,
/// a line string yields one open ring, polygons yield their rings in order,
/// multi-polygons concatenate member polygons. Rings that lose every point
/// to projection are dropped.
pub fn project_rings(geometry: &Geometry, projection: &dyn Projection) -> Vec<Vec<DVec2>> {
    let rings: Vec<Vec<DVec2>> = match geometry {
        Geometry::Point(p) => vec![project_ring(std::slice::from_ref(p), projection)],
        Geometry::MultiPoint(ps) => ps
            .iter()
            .map(|p| project_ring(std::slice::from_ref(p), projection))
            .collect(),
        Geometry::LineString(ps) => vec![project_ring(ps, projection)],
        Geometry::Polygon(rings) => rings.iter().map(|r| project_ring(r, projection)).collect(),
        Geometry::MultiPolygon(polygons) => polygons
            .iter()
            .flat_map(|rings| rings.iter())
            .map(|r| project_ring(r, projection))
            .collect(),
    };

    rings.into_iter().filter(|r| !r.is_empty()).collect()
}

/// Build a closed SVG subpath for one ring.
///
/// Returns `None` when fewer than three points survive projection.
pub fn ring_path(ring: &[Position], projection: &dyn Projection) -> Option<String> {
    let points = project_ring(ring, projection);
    if points.len() < 3 {
        return None;
    }
    Some(subpath(&points, true))
}

/// Build SVG path data for a boundary feature.
///
/// Polygons and multi-polygons produce one closed subpath per ring; line
/// strings produce one open subpath. Point variants have no outline, and a
/// feature whose rings all fail to project yields `None`.
pub fn feature_path(geometry: &Geometry, projection: &dyn Projection) -> Option<String> {
    match geometry {
        Geometry::Point(_) | Geometry::MultiPoint(_) => None,
        Geometry::LineString(ps) => {
            let points = project_ring(ps, projection);
            (points.len() >= 2).then(|| subpath(&points, false))
        }
        Geometry::Polygon(rings) => rings_path(rings.iter(), projection),
        Geometry::MultiPolygon(polygons) => {
            rings_path(polygons.iter().flat_map(|rings| rings.iter()), projection)
        }
    }
}

fn rings_path<'a, I>(rings: I, projection: &dyn Projection) -> Option<String>
where
    I: Iterator<Item = &'a Vec<Position>>,
{
    let parts: Vec<String> = rings
        .filter_map(|ring| ring_path(ring, projection))
        .collect();
    if parts.is_empty() {
        return None;
    }
    Some(parts.join(""))
}

fn subpath(points: &[DVec2], close: bool) -> String {
    let mut out = String::with_capacity(points.len() * 14 + 1);
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        out.push(cmd);
        out.push_str(&format!("{:.2},{:.2}", p.x, p.y));
    }
    if close {
        out.push('Z');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::EquirectangularProjection;

    fn unit_projection() -> EquirectangularProjection {
        EquirectangularProjection::new(360.0, 180.0)
    }

    fn square() -> Vec<Position> {
        vec![[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]
    }

    #[test]
    fn ring_path_is_closed_svg_data() {
        let path = ring_path(&square(), &unit_projection()).expect("ring projects");
        assert_eq!(
            path,
            "M180.00,90.00L190.00,90.00L190.00,80.00L180.00,80.00Z"
        );
    }

    #[test]
    fn short_rings_yield_no_path() {
        let ring: Vec<Position> = vec![[0.0, 0.0], [1.0, 1.0]];
        assert!(ring_path(&ring, &unit_projection()).is_none());
    }

    #[test]
    fn unprojectable_points_are_skipped() {
        let mut ring = square();
        ring.push([f64::NAN, 0.0]);
        let points = project_ring(&ring, &unit_projection());
        assert_eq!(points.len(), 4);
    }

    #[test]
    fn feature_path_joins_polygon_rings() {
        let geometry = Geometry::Polygon(vec![square(), square()]);
        let path = feature_path(&geometry, &unit_projection()).expect("polygon projects");
        assert_eq!(path.matches('M').count(), 2);
        assert_eq!(path.matches('Z').count(), 2);
    }

    #[test]
    fn line_string_path_is_open() {
        let geometry = Geometry::LineString(vec![[0.0, 0.0], [10.0, 10.0]]);
        let path = feature_path(&geometry, &unit_projection()).expect("line projects");
        assert!(path.starts_with('M'));
        assert!(!path.ends_with('Z'));
    }

    #[test]
    fn point_features_have_no_outline() {
        assert!(feature_path(&Geometry::Point([0.0, 0.0]), &unit_projection()).is_none());
    }

    #[test]
    fn feature_with_nothing_projectable_is_skipped() {
        let geometry = Geometry::Polygon(vec![vec![[f64::NAN, 0.0], [f64::NAN, 1.0]]]);
        assert!(feature_path(&geometry, &unit_projection()).is_none());
    }

    #[test]
    fn project_rings_drops_empty_rings() {
        let geometry = Geometry::MultiPolygon(vec![
            vec![square()],
            vec![vec![[f64::NAN, f64::NAN]]],
        ]);
        let rings = project_rings(&geometry, &unit_projection());
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].len(), 4);
    }
}
