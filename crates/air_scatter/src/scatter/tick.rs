//! Live-tick evolution of an existing sensor set.
//!
//! Ticking is for visual effect only and is deliberately not seeded; an
//! external timer owns the cadence and simply calls [`tick`] (or [`evolve`])
//! with the previous set. Each metric moves by a small bounded delta and is
//! clamped, so iterating any number of times never leaves the documented
//! bounds.
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::scatter::rand01;
use crate::sensor::{AirQuality, SensorRecord};

/// Step sizes and clamp bounds for live ticking.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TickConfig {
    /// Maximum pm2.5 move per tick, in µg/m³.
    pub pm25_step: f64,
    /// Maximum temperature move per tick, in °C.
    pub temperature_step: f64,
    /// Maximum humidity move per tick, in percentage points.
    pub humidity_step: f64,
    /// Inclusive pm2.5 clamp bounds.
    pub pm25_bounds: (i32, i32),
    /// Inclusive temperature clamp bounds in °C.
    pub temperature_bounds: (f64, f64),
    /// Inclusive humidity clamp bounds in percent.
    pub humidity_bounds: (i32, i32),
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            pm25_step: 3.0,
            temperature_step: 0.5,
            humidity_step: 2.5,
            pm25_bounds: (5, 95),
            temperature_bounds: (-15.0, 45.0),
            humidity_bounds: (5, 95),
        }
    }
}

impl TickConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-tick step sizes.
    pub fn with_steps(mut self, pm25: f64, temperature: f64, humidity: f64) -> Self {
        self.pm25_step = pm25;
        self.temperature_step = temperature;
        self.humidity_step = humidity;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.pm25_step < 0.0 || self.temperature_step < 0.0 || self.humidity_step < 0.0 {
            return Err(Error::InvalidConfig("tick steps must be >= 0".into()));
        }
        if self.pm25_bounds.0 > self.pm25_bounds.1
            || self.temperature_bounds.0 > self.temperature_bounds.1
            || self.humidity_bounds.0 > self.humidity_bounds.1
        {
            return Err(Error::InvalidConfig("tick clamp bounds must be ordered".into()));
        }

        Ok(())
    }
}

/// Evolve a sensor set one step with the default configuration.
pub fn tick(records: &[SensorRecord], rng: &mut dyn RngCore) -> Vec<SensorRecord> {
    tick_with_config(records, &TickConfig::default(), rng)
}

/// Evolve a sensor set one step.
///
/// Every record's pm2.5, temperature, and humidity move by a bounded uniform
/// delta and clamp to the configured bounds; the status band is recomputed
/// from the updated pm2.5 and the timestamp refreshed. All other fields are
/// copied through unchanged via explicit record construction.
pub fn tick_with_config(
    records: &[SensorRecord],
    config: &TickConfig,
    rng: &mut dyn RngCore,
) -> Vec<SensorRecord> {
    let now = Utc::now();
    records
        .iter()
        .map(|record| {
            let pm25_delta = (signed_unit(rng) * config.pm25_step).round() as i32;
            let pm25 = (record.pm25 + pm25_delta).clamp(config.pm25_bounds.0, config.pm25_bounds.1);

            let temperature_delta = signed_unit(rng) * config.temperature_step;
            let temperature = ((record.temperature + temperature_delta) * 10.0).round() / 10.0;
            let temperature =
                temperature.clamp(config.temperature_bounds.0, config.temperature_bounds.1);

            let humidity_delta = (signed_unit(rng) * config.humidity_step).round() as i32;
            let humidity = (record.humidity + humidity_delta)
                .clamp(config.humidity_bounds.0, config.humidity_bounds.1);

            SensorRecord {
                status: AirQuality::from_pm25(pm25),
                pm25,
                temperature,
                humidity,
                timestamp: now,
                ..record.clone()
            }
        })
        .collect()
}

/// Evolve a sensor set one step using OS-seeded randomness.
pub fn evolve(records: &[SensorRecord]) -> Vec<SensorRecord> {
    let mut rng = StdRng::from_os_rng();
    tick(records, &mut rng)
}

/// Uniform draw in [-1, 1).
#[inline]
fn signed_unit(rng: &mut dyn RngCore) -> f64 {
    rand01(rng) * 2.0 - 1.0
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn record() -> SensorRecord {
        SensorRecord {
            id: "region-1".into(),
            region: "region".into(),
            lat: 52.0,
            lng: 13.0,
            status: AirQuality::Good,
            pm25: 12,
            temperature: 20.0,
            humidity: 40,
            timestamp: Utc::now(),
            intensity: 0.8,
        }
    }

    #[test]
    fn iterated_ticks_never_leave_clamp_bounds() {
        let config = TickConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        let mut records = vec![record()];

        for _ in 0..1000 {
            records = tick(&records, &mut rng);
            let r = &records[0];
            assert!((config.pm25_bounds.0..=config.pm25_bounds.1).contains(&r.pm25));
            assert!(
                r.temperature >= config.temperature_bounds.0
                    && r.temperature <= config.temperature_bounds.1
            );
            assert!((config.humidity_bounds.0..=config.humidity_bounds.1).contains(&r.humidity));
        }
    }

    #[test]
    fn status_tracks_updated_pm25() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut records = vec![SensorRecord {
            pm25: 16,
            status: AirQuality::Moderate,
            ..record()
        }];
        for _ in 0..200 {
            records = tick(&records, &mut rng);
            assert_eq!(records[0].status, AirQuality::from_pm25(records[0].pm25));
        }
    }

    #[test]
    fn deltas_are_bounded_per_tick() {
        let config = TickConfig::default();
        let mut rng = StdRng::seed_from_u64(21);
        let before = record();
        for _ in 0..100 {
            let after = &tick(&[before.clone()], &mut rng)[0];
            assert!((after.pm25 - before.pm25).abs() as f64 <= config.pm25_step);
            assert!((after.temperature - before.temperature).abs() <= config.temperature_step + 0.05);
            assert!((after.humidity - before.humidity).abs() as f64 <= config.humidity_step.ceil());
        }
    }

    #[test]
    fn identity_fields_are_copied_through() {
        let mut rng = StdRng::seed_from_u64(2);
        let before = record();
        let after = &tick(&[before.clone()], &mut rng)[0];
        assert_eq!(after.id, before.id);
        assert_eq!(after.region, before.region);
        assert_eq!(after.lat, before.lat);
        assert_eq!(after.lng, before.lng);
        assert_eq!(after.intensity, before.intensity);
        assert!(after.timestamp >= before.timestamp);
    }

    #[test]
    fn evolve_preserves_length() {
        let records = vec![record(), record(), record()];
        assert_eq!(evolve(&records).len(), 3);
    }

    #[test]
    fn validate_rejects_negative_steps_and_inverted_bounds() {
        let config = TickConfig::default().with_steps(-1.0, 0.5, 2.5);
        assert!(config.validate().is_err());

        let mut config = TickConfig::default();
        config.pm25_bounds = (95, 5);
        assert!(config.validate().is_err());

        assert!(TickConfig::default().validate().is_ok());
    }
}
