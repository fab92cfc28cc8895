use std::thread;
use std::time::Duration;

use air_scatter::prelude::*;
use air_scatter_examples::{demo_land, demo_regions, init_tracing};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::info;

const TICKS: usize = 5;

/// The external-timer collaborator: generate once, then replace the record
/// set on a jittered interval, the way a live dashboard would.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let result = generate(&demo_regions(), 7, Some(&demo_land()));
    let mut records = result.records;
    info!(count = records.len(), "initial sensor set");

    let mut timer_rng = StdRng::from_os_rng();
    for round in 1..=TICKS {
        let wait = jittered_interval(&mut timer_rng);
        thread::sleep(wait);

        records = evolve(&records);
        log_summary(round, &records);
    }

    Ok(())
}

/// 5 to 10 seconds, uniformly jittered.
fn jittered_interval(rng: &mut StdRng) -> Duration {
    let unit = f64::from(rng.next_u32()) / (f64::from(u32::MAX) + 1.0);
    Duration::from_millis(5_000 + (unit * 5_000.0) as u64)
}

fn log_summary(round: usize, records: &[SensorRecord]) {
    let mut good = 0usize;
    let mut moderate = 0usize;
    let mut poor = 0usize;
    let mut pm25_sum = 0i64;
    for record in records {
        match record.status {
            AirQuality::Good => good += 1,
            AirQuality::Moderate => moderate += 1,
            AirQuality::Poor => poor += 1,
        }
        pm25_sum += i64::from(record.pm25);
    }
    let avg_pm25 = pm25_sum as f64 / records.len().max(1) as f64;
    info!(round, good, moderate, poor, avg_pm25, "tick");
}
