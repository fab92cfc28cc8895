#![forbid(unsafe_code)]
//! air_scatter: deterministic land-constrained scattering of synthetic
//! air-quality sensors, with live ticking and map projection.
//!
//! Modules:
//! - rng: seeded LCG behind reproducible generation
//! - scatter: regions, seeded generation, live ticking
//! - land: polygon boundary data and point-on-land testing
//! - geo: geographic points and viewports (focus, fit, marker filtering)
//! - project: equirectangular and Natural Earth projection, path building
//!
//! Generation is a pure function of its inputs; the owning layer calls it
//! once at startup and re-ticks on its own timer. Nothing here spawns
//! threads, keeps global state, or performs IO.
pub mod error;
pub mod geo;
pub mod land;
pub mod project;
pub mod rng;
pub mod scatter;
pub mod sensor;

/// Convenient re-exports for common types. Import with `use air_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geo::{GeoPoint, Viewport};
    pub use crate::land::{BoundingBox, Feature, Geometry, LandIndex, Position};
    pub use crate::project::{
        feature_path, project_records, project_rings, ring_path, EquirectangularProjection,
        NaturalEarthProjection, ProjectedPoint, Projection,
    };
    pub use crate::rng::Lcg32;
    pub use crate::scatter::{
        evolve, generate, generate_with_config, tick, tick_with_config, GenerateConfig,
        GenerateResult, Region, Scatterer, TickConfig, FALLBACK_REGION_KEY,
    };
    pub use crate::sensor::{AirQuality, SensorRecord};
}
