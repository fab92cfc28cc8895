//! Scattering pipeline: seeded generation of sensor sets and live ticking.
//!
//! [`generate`](crate::scatter::generator::generate) produces a deterministic
//! sensor set from regions, a seed, and optional land boundaries;
//! [`tick`](crate::scatter::tick::tick) evolves an existing set for live
//! views. Generation is reproducible, ticking deliberately is not.
use rand::RngCore;

pub mod generator;
pub mod region;
pub mod tick;

pub use generator::{generate, generate_with_config, GenerateConfig, GenerateResult, Scatterer};
pub use region::Region;
pub use tick::{evolve, tick, tick_with_config, TickConfig};

/// Region key assigned to sensors placed from the fallback bounding box.
pub const FALLBACK_REGION_KEY: &str = "global";

/// Generate a random float in the range [0, 1).
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f64 {
    f64::from(rng.next_u32()) / (f64::from(u32::MAX) + 1.0)
}
