//! Conversions from GeoJSON boundary data, behind the `geojson` feature.
use tracing::warn;

use crate::error::{Error, Result};
use crate::land::{Geometry, LandIndex, Position};

fn position(coords: &[f64]) -> Option<Position> {
    match coords {
        [lng, lat, ..] => Some([*lng, *lat]),
        _ => None,
    }
}

fn positions(coords: &[Vec<f64>]) -> Vec<Position> {
    coords.iter().filter_map(|c| position(c)).collect()
}

fn rings(coords: &[Vec<Vec<f64>>]) -> Vec<Vec<Position>> {
    coords.iter().map(|ring| positions(ring)).collect()
}

impl TryFrom<&geojson::Value> for Geometry {
    type Error = Error;

    fn try_from(value: &geojson::Value) -> Result<Self> {
        match value {
            geojson::Value::Point(c) => position(c)
                .map(Geometry::Point)
                .ok_or_else(|| Error::InvalidGeometry("point with fewer than 2 coordinates".into())),
            geojson::Value::MultiPoint(c) => Ok(Geometry::MultiPoint(positions(c))),
            geojson::Value::LineString(c) => Ok(Geometry::LineString(positions(c))),
            geojson::Value::Polygon(c) => Ok(Geometry::Polygon(rings(c))),
            geojson::Value::MultiPolygon(c) => {
                Ok(Geometry::MultiPolygon(c.iter().map(|p| rings(p)).collect()))
            }
            other => Err(Error::InvalidGeometry(format!(
                "unsupported geometry type: {}",
                other.type_name()
            ))),
        }
    }
}

impl TryFrom<&geojson::Geometry> for Geometry {
    type Error = Error;

    fn try_from(geometry: &geojson::Geometry) -> Result<Self> {
        Geometry::try_from(&geometry.value)
    }
}

impl LandIndex {
    /// Build a [`LandIndex`] from a GeoJSON feature collection.
    ///
    /// Features without geometry or with unsupported geometry types are
    /// skipped with a warning, never an error.
    pub fn from_geojson(collection: &geojson::FeatureCollection) -> LandIndex {
        let geometries = collection.features.iter().filter_map(|feature| {
            let geometry = match feature.geometry.as_ref() {
                Some(g) => g,
                None => {
                    warn!("skipping GeoJSON feature without geometry");
                    return None;
                }
            };
            match Geometry::try_from(geometry) {
                Ok(g) => Some(g),
                Err(e) => {
                    warn!("skipping GeoJSON feature: {e}");
                    None
                }
            }
        });
        LandIndex::from_geometries(geometries)
    }
}
