//! Land-membership testing against polygon boundary data.
//!
//! Boundary datasets are modeled as an explicit tagged union over geometry
//! variants with a defined iteration strategy each, instead of walking
//! arbitrarily nested coordinate arrays. Only [`Geometry::Polygon`] and
//! [`Geometry::MultiPolygon`] have area; the other variants can appear in a
//! dataset but never contain a point.
//!
//! [`LandIndex::contains`] runs a per-feature bounding-box pre-check before
//! the exact even-odd ray cast, since exact containment is the expensive
//! path.
#[cfg(feature = "geojson")]
mod geojson;

use tracing::warn;

/// A `[lng, lat]` coordinate pair, GeoJSON axis order.
pub type Position = [f64; 2];

/// Boundary geometry variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Position),
    MultiPoint(Vec<Position>),
    LineString(Vec<Position>),
    /// Ring list: first ring is the exterior, any further rings are holes.
    Polygon(Vec<Vec<Position>>),
    MultiPolygon(Vec<Vec<Vec<Position>>>),
}

impl Geometry {
    /// Visit every coordinate pair in the geometry.
    pub fn for_each_position<F: FnMut(Position)>(&self, mut f: F) {
        match self {
            Geometry::Point(p) => f(*p),
            Geometry::MultiPoint(ps) | Geometry::LineString(ps) => {
                ps.iter().copied().for_each(&mut f);
            }
            Geometry::Polygon(rings) => {
                rings.iter().flatten().copied().for_each(&mut f);
            }
            Geometry::MultiPolygon(polygons) => {
                polygons
                    .iter()
                    .flat_map(|rings| rings.iter())
                    .flatten()
                    .copied()
                    .for_each(&mut f);
            }
        }
    }

    /// True if the point lies inside the geometry's area.
    ///
    /// Even-odd rule across all rings, so holes exclude naturally. Variants
    /// without area and rings with fewer than three vertices contribute
    /// nothing.
    pub fn contains(&self, lng: f64, lat: f64) -> bool {
        match self {
            Geometry::Point(_) | Geometry::MultiPoint(_) | Geometry::LineString(_) => false,
            Geometry::Polygon(rings) => rings_contain(rings, lng, lat),
            Geometry::MultiPolygon(polygons) => polygons
                .iter()
                .any(|rings| rings_contain(rings, lng, lat)),
        }
    }
}

fn rings_contain(rings: &[Vec<Position>], lng: f64, lat: f64) -> bool {
    let mut inside = false;
    for ring in rings {
        toggle_ring_crossings(ring, lng, lat, &mut inside);
    }
    inside
}

/// Even-odd ray cast against a single ring, toggling `inside` per crossing.
fn toggle_ring_crossings(ring: &[Position], lng: f64, lat: f64, inside: &mut bool) {
    let n = ring.len();
    if n < 3 {
        return;
    }
    let mut j = n - 1;
    for i in 0..n {
        let [xi, yi] = ring[i];
        let [xj, yj] = ring[j];
        if (yi > lat) != (yj > lat) && lng < (xj - xi) * (lat - yi) / (yj - yi) + xi {
            *inside = !*inside;
        }
        j = i;
    }
}

/// Axis-aligned bounding box over `[lng, lat]` positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lng: f64,
    pub min_lat: f64,
    pub max_lng: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    fn empty() -> Self {
        Self {
            min_lng: f64::INFINITY,
            min_lat: f64::INFINITY,
            max_lng: f64::NEG_INFINITY,
            max_lat: f64::NEG_INFINITY,
        }
    }

    fn include(&mut self, p: Position) {
        self.min_lng = self.min_lng.min(p[0]);
        self.min_lat = self.min_lat.min(p[1]);
        self.max_lng = self.max_lng.max(p[0]);
        self.max_lat = self.max_lat.max(p[1]);
    }

    /// True if the point lies within the box. An empty box contains nothing.
    pub fn contains(&self, lng: f64, lat: f64) -> bool {
        lng >= self.min_lng && lng <= self.max_lng && lat >= self.min_lat && lat <= self.max_lat
    }
}

/// A boundary feature: geometry plus its precomputed bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    geometry: Geometry,
    bbox: BoundingBox,
}

impl Feature {
    /// Wrap a geometry, computing its bounding box once.
    pub fn new(geometry: Geometry) -> Self {
        let mut bbox = BoundingBox::empty();
        geometry.for_each_position(|p| bbox.include(p));
        Self { geometry, bbox }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }
}

/// Immutable membership index over a set of boundary features.
#[derive(Debug, Clone, Default)]
pub struct LandIndex {
    features: Vec<Feature>,
}

impl LandIndex {
    /// Build an index from prepared features.
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    /// Build an index straight from geometries.
    pub fn from_geometries<I>(geometries: I) -> Self
    where
        I: IntoIterator<Item = Geometry>,
    {
        Self {
            features: geometries.into_iter().map(Feature::new).collect(),
        }
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// True if `(lng, lat)` falls within any land feature.
    ///
    /// Features whose bounding box excludes the point are skipped without the
    /// exact containment test.
    pub fn contains(&self, lng: f64, lat: f64) -> bool {
        if !lng.is_finite() || !lat.is_finite() {
            warn!(lng, lat, "non-finite coordinate in land test");
            return false;
        }
        self.features
            .iter()
            .filter(|feature| feature.bbox.contains(lng, lat))
            .any(|feature| feature.geometry.contains(lng, lat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(min: f64, max: f64) -> Vec<Position> {
        vec![[min, min], [max, min], [max, max], [min, max], [min, min]]
    }

    #[test]
    fn polygon_contains_interior_point() {
        let index = LandIndex::from_geometries([Geometry::Polygon(vec![square(0.0, 10.0)])]);
        assert!(index.contains(5.0, 5.0));
        assert!(!index.contains(15.0, 5.0));
        assert!(!index.contains(5.0, -1.0));
    }

    #[test]
    fn hole_excludes_point() {
        let geometry = Geometry::Polygon(vec![square(0.0, 10.0), square(4.0, 6.0)]);
        let index = LandIndex::from_geometries([geometry]);
        assert!(index.contains(2.0, 2.0));
        assert!(!index.contains(5.0, 5.0));
    }

    #[test]
    fn multi_polygon_checks_each_member() {
        let geometry = Geometry::MultiPolygon(vec![
            vec![square(0.0, 2.0)],
            vec![square(20.0, 22.0)],
        ]);
        let index = LandIndex::from_geometries([geometry]);
        assert!(index.contains(1.0, 1.0));
        assert!(index.contains(21.0, 21.0));
        assert!(!index.contains(10.0, 10.0));
    }

    #[test]
    fn non_area_variants_contain_nothing() {
        let index = LandIndex::from_geometries([
            Geometry::Point([1.0, 1.0]),
            Geometry::MultiPoint(vec![[2.0, 2.0]]),
            Geometry::LineString(vec![[0.0, 0.0], [5.0, 5.0]]),
        ]);
        assert!(!index.contains(1.0, 1.0));
        assert!(!index.contains(2.0, 2.0));
    }

    #[test]
    fn malformed_rings_are_tolerated() {
        let geometry = Geometry::Polygon(vec![vec![], vec![[0.0, 0.0], [1.0, 1.0]]]);
        let index = LandIndex::from_geometries([geometry]);
        assert!(!index.contains(0.5, 0.5));
    }

    #[test]
    fn bbox_pre_check_matches_exact_test() {
        let feature = Feature::new(Geometry::Polygon(vec![square(-10.0, 10.0)]));
        let bbox = feature.bbox();
        assert_eq!(bbox.min_lng, -10.0);
        assert_eq!(bbox.max_lat, 10.0);
        // Every point accepted by the exact test is inside the bbox.
        assert!(bbox.contains(0.0, 0.0));
        assert!(!bbox.contains(11.0, 0.0));
    }

    #[test]
    fn empty_index_contains_nothing() {
        let index = LandIndex::default();
        assert!(index.is_empty());
        assert!(!index.contains(0.0, 0.0));
    }

    #[test]
    fn non_finite_coordinates_are_rejected() {
        let index = LandIndex::from_geometries([Geometry::Polygon(vec![square(0.0, 10.0)])]);
        assert!(!index.contains(f64::NAN, 5.0));
        assert!(!index.contains(5.0, f64::INFINITY));
    }
}
