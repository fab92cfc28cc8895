//! Sensor records and air-quality classification.
use chrono::{DateTime, Utc};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Air-quality status band.
///
/// Bands are derived from pm2.5: at generation time the band is rolled first
/// and pm2.5 is drawn from the matching range; on live ticks the band is
/// recomputed from the updated pm2.5 via [`AirQuality::from_pm25`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AirQuality {
    Good,
    Moderate,
    Poor,
}

impl AirQuality {
    /// Highest pm2.5 still classified as good.
    pub const GOOD_MAX_PM25: i32 = 15;
    /// Highest pm2.5 still classified as moderate.
    pub const MODERATE_MAX_PM25: i32 = 30;

    /// Classify a pm2.5 value into its status band.
    pub fn from_pm25(pm25: i32) -> Self {
        if pm25 <= Self::GOOD_MAX_PM25 {
            AirQuality::Good
        } else if pm25 <= Self::MODERATE_MAX_PM25 {
            AirQuality::Moderate
        } else {
            AirQuality::Poor
        }
    }

    /// Lowercase label, stable across releases.
    pub fn as_str(&self) -> &'static str {
        match self {
            AirQuality::Good => "good",
            AirQuality::Moderate => "moderate",
            AirQuality::Poor => "poor",
        }
    }
}

/// A synthetic sensor reading.
///
/// Records are immutable once generated; live simulation replaces whole
/// records via explicit construction rather than mutating them in place.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorRecord {
    /// Unique within a generation run: `"{region_key}-{sequence}"`, 1-based.
    pub id: String,
    /// Key of the region this sensor was placed for.
    pub region: String,
    /// Latitude in `[-90, 90]`.
    pub lat: f64,
    /// Longitude in `[-180, 180]`.
    pub lng: f64,
    /// Status band, always consistent with `pm25`.
    pub status: AirQuality,
    /// pm2.5 concentration in µg/m³.
    pub pm25: i32,
    /// Temperature in °C.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: i32,
    /// Instant the reading was produced.
    pub timestamp: DateTime<Utc>,
    /// Rendering-only weight in `[0, 1]`.
    pub intensity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_thresholds() {
        assert_eq!(AirQuality::from_pm25(0), AirQuality::Good);
        assert_eq!(AirQuality::from_pm25(15), AirQuality::Good);
        assert_eq!(AirQuality::from_pm25(16), AirQuality::Moderate);
        assert_eq!(AirQuality::from_pm25(30), AirQuality::Moderate);
        assert_eq!(AirQuality::from_pm25(31), AirQuality::Poor);
        assert_eq!(AirQuality::from_pm25(95), AirQuality::Poor);
    }

    #[test]
    fn labels_are_lowercase() {
        assert_eq!(AirQuality::Good.as_str(), "good");
        assert_eq!(AirQuality::Moderate.as_str(), "moderate");
        assert_eq!(AirQuality::Poor.as_str(), "poor");
    }
}
