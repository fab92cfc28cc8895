#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{demo_land, demo_regions, render_map_to_png, RenderConfig};

/// Install a fmt subscriber honoring `RUST_LOG`, defaulting to info.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
