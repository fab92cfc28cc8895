//! Seeded, land-constrained sensor generation.
//!
//! Generation is a pure function of regions, seed, and boundary data: the
//! same inputs always produce the same records in the same order. Placement
//! sampling, the quality roll, and the dependent metric draws consume the
//! same PRNG stream in a fixed order, which is what the reproducibility
//! contract rests on.
use chrono::{DateTime, Utc};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::geo::Viewport;
use crate::land::LandIndex;
use crate::rng::Lcg32;
use crate::scatter::region::Region;
use crate::scatter::FALLBACK_REGION_KEY;
use crate::sensor::{AirQuality, SensorRecord};

/// Tuning constants for generation.
///
/// The band bounds and attempt multipliers are presentation tuning values
/// carried as configuration; they are not derived from any air-quality
/// standard.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GenerateConfig {
    /// Quality rolls below this are good.
    pub quality_roll_good: f64,
    /// Quality rolls below this (and not good) are moderate; the rest are poor.
    pub quality_roll_moderate: f64,
    /// Inclusive pm2.5 range for good sensors.
    pub pm25_good: (i32, i32),
    /// Inclusive pm2.5 range for moderate sensors.
    pub pm25_moderate: (i32, i32),
    /// Inclusive pm2.5 range for poor sensors.
    pub pm25_poor: (i32, i32),
    /// Temperature draw range in °C.
    pub temperature_range: (f64, f64),
    /// Inclusive humidity draw range in percent.
    pub humidity_range: (i32, i32),
    /// Per-region attempt cap is `count * region_attempt_multiplier`.
    pub region_attempt_multiplier: usize,
    /// Fallback attempt cap is `shortfall * fallback_attempt_multiplier`.
    pub fallback_attempt_multiplier: usize,
    /// Unconstrained fallback box covering inhabitable latitudes.
    pub fallback_bounds: Viewport,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            quality_roll_good: 0.63,
            quality_roll_moderate: 0.88,
            pm25_good: (8, 15),
            pm25_moderate: (18, 28),
            pm25_poor: (32, 48),
            temperature_range: (-5.0, 35.0),
            humidity_range: (25, 85),
            region_attempt_multiplier: 900,
            fallback_attempt_multiplier: 9000,
            fallback_bounds: Viewport::new(-55.0, 70.0, -180.0, 180.0),
        }
    }
}

impl GenerateConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the quality roll thresholds.
    pub fn with_quality_rolls(mut self, good: f64, moderate: f64) -> Self {
        self.quality_roll_good = good;
        self.quality_roll_moderate = moderate;
        self
    }

    /// Sets the pm2.5 band for a status.
    pub fn with_pm25_band(mut self, status: AirQuality, lo: i32, hi: i32) -> Self {
        match status {
            AirQuality::Good => self.pm25_good = (lo, hi),
            AirQuality::Moderate => self.pm25_moderate = (lo, hi),
            AirQuality::Poor => self.pm25_poor = (lo, hi),
        }
        self
    }

    /// Sets the fallback bounding box.
    pub fn with_fallback_bounds(mut self, bounds: Viewport) -> Self {
        self.fallback_bounds = bounds;
        self
    }

    /// Sets the attempt cap multipliers.
    pub fn with_attempt_multipliers(mut self, region: usize, fallback: usize) -> Self {
        self.region_attempt_multiplier = region;
        self.fallback_attempt_multiplier = fallback;
        self
    }

    /// The inclusive pm2.5 range for a status band.
    pub fn pm25_band(&self, status: AirQuality) -> (i32, i32) {
        match status {
            AirQuality::Good => self.pm25_good,
            AirQuality::Moderate => self.pm25_moderate,
            AirQuality::Poor => self.pm25_poor,
        }
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !(0.0 < self.quality_roll_good
            && self.quality_roll_good < self.quality_roll_moderate
            && self.quality_roll_moderate <= 1.0)
        {
            return Err(Error::InvalidConfig(
                "quality roll thresholds must satisfy 0 < good < moderate <= 1".into(),
            ));
        }
        for (lo, hi) in [self.pm25_good, self.pm25_moderate, self.pm25_poor] {
            if lo > hi || lo < 0 {
                return Err(Error::InvalidConfig(
                    "pm2.5 bands must be non-negative and ordered".into(),
                ));
            }
        }
        if self.temperature_range.0 >= self.temperature_range.1 {
            return Err(Error::InvalidConfig(
                "temperature range must be ordered".into(),
            ));
        }
        if self.humidity_range.0 > self.humidity_range.1 {
            return Err(Error::InvalidConfig("humidity range must be ordered".into()));
        }
        if self.region_attempt_multiplier == 0 || self.fallback_attempt_multiplier == 0 {
            return Err(Error::InvalidConfig(
                "attempt multipliers must be > 0".into(),
            ));
        }
        self.fallback_bounds.validate()?;

        Ok(())
    }

    fn quality_for_roll(&self, roll: f64) -> AirQuality {
        if roll < self.quality_roll_good {
            AirQuality::Good
        } else if roll < self.quality_roll_moderate {
            AirQuality::Moderate
        } else {
            AirQuality::Poor
        }
    }
}

/// Result of a generation run.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct GenerateResult {
    /// Generated records, region order preserved.
    pub records: Vec<SensorRecord>,
    /// Total sensor count the regions asked for.
    pub requested: usize,
    /// How many records came from the fallback box.
    pub fallback_filled: usize,
}

impl GenerateResult {
    /// Creates a new empty [`GenerateResult`].
    pub fn new() -> Self {
        Self::default()
    }

    /// True when fewer sensors were produced than requested.
    pub fn is_degraded(&self) -> bool {
        self.records.len() < self.requested
    }
}

/// Reusable generator wrapping a validated configuration.
pub struct Scatterer {
    /// Generation configuration applied to this scatterer.
    pub config: GenerateConfig,
}

impl Scatterer {
    pub fn try_new(config: GenerateConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Runs generation over the given regions.
    pub fn generate(
        &self,
        regions: &[Region],
        seed: u32,
        land: Option<&LandIndex>,
    ) -> GenerateResult {
        generate_with_config(regions, seed, land, &self.config)
    }
}

/// Generate a deterministic sensor set with the default configuration.
pub fn generate(regions: &[Region], seed: u32, land: Option<&LandIndex>) -> GenerateResult {
    generate_with_config(regions, seed, land, &GenerateConfig::default())
}

/// Generate a deterministic sensor set.
///
/// Per region, placement points are rejection-sampled against the land index
/// (when supplied) under a bounded attempt budget; exhaustion leaves the
/// region under-populated. Any overall shortfall is then filled from the
/// unconstrained fallback box under the [`FALLBACK_REGION_KEY`] region key.
/// Generation degrades silently to fewer sensors, it never fails.
pub fn generate_with_config(
    regions: &[Region],
    seed: u32,
    land: Option<&LandIndex>,
    config: &GenerateConfig,
) -> GenerateResult {
    let requested: usize = regions.iter().map(|r| r.count).sum();
    info!(
        regions = regions.len(),
        requested,
        seed,
        constrained = land.is_some(),
        "generating sensor set"
    );

    let mut rng = Lcg32::new(seed);
    let now = Utc::now();
    let mut records: Vec<SensorRecord> = Vec::with_capacity(requested);

    for region in regions {
        let bounds = region.bounds();
        let max_attempts = region.count.saturating_mul(config.region_attempt_multiplier);
        let mut attempts = 0usize;
        let mut placed = 0usize;

        while placed < region.count && attempts < max_attempts {
            attempts += 1;
            let lat = bounds.min_lat + rng.next_f64() * bounds.lat_span();
            let lng = bounds.min_lng + rng.next_f64() * bounds.lng_span();

            if let Some(index) = land {
                if !index.contains(lng, lat) {
                    continue;
                }
            }

            placed += 1;
            records.push(make_record(config, &region.key, placed, lat, lng, &mut rng, now));
        }

        if placed < region.count {
            warn!(
                region = %region.key,
                placed,
                count = region.count,
                attempts,
                "region under-populated after attempt budget"
            );
        }
    }

    // Shortfall from exhausted regions is filled from the fallback box,
    // exempt from the land constraint.
    let shortfall = requested - records.len();
    let mut fallback_filled = 0usize;
    if shortfall > 0 {
        let bounds = config.fallback_bounds;
        let max_attempts = shortfall.saturating_mul(config.fallback_attempt_multiplier);
        let mut attempts = 0usize;

        while fallback_filled < shortfall && attempts < max_attempts {
            attempts += 1;
            let lat = (bounds.min_lat + rng.next_f64() * bounds.lat_span()).clamp(-85.0, 85.0);
            let lng = (bounds.min_lng + rng.next_f64() * bounds.lng_span()).clamp(-180.0, 180.0);

            fallback_filled += 1;
            records.push(make_record(
                config,
                FALLBACK_REGION_KEY,
                fallback_filled,
                lat,
                lng,
                &mut rng,
                now,
            ));
        }

        warn!(shortfall, fallback_filled, "filled shortfall from fallback box");
    }

    if records.len() < requested {
        warn!(
            produced = records.len(),
            requested, "generation degraded to fewer sensors than requested"
        );
    }

    GenerateResult {
        records,
        requested,
        fallback_filled,
    }
}

/// Build one record, consuming the metric draws in their fixed order.
fn make_record(
    config: &GenerateConfig,
    key: &str,
    sequence: usize,
    lat: f64,
    lng: f64,
    rng: &mut Lcg32,
    timestamp: DateTime<Utc>,
) -> SensorRecord {
    let roll = rng.next_f64();
    let status = config.quality_for_roll(roll);
    let (lo, hi) = config.pm25_band(status);
    let pm25 = lo + (rng.next_f64() * f64::from(hi - lo + 1)) as i32;

    let (t_lo, t_hi) = config.temperature_range;
    let temperature = ((t_lo + rng.next_f64() * (t_hi - t_lo)) * 10.0).round() / 10.0;

    let (h_lo, h_hi) = config.humidity_range;
    let humidity = h_lo + (rng.next_f64() * f64::from(h_hi - h_lo + 1)) as i32;

    let intensity = 0.5 + rng.next_f64() * 0.5;

    SensorRecord {
        id: format!("{key}-{sequence}"),
        region: key.to_owned(),
        lat,
        lng,
        status,
        pm25,
        temperature,
        humidity,
        timestamp,
        intensity,
    }
}
