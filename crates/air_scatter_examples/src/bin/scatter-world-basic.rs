use air_scatter::prelude::*;
use air_scatter_examples::{demo_land, demo_regions, init_tracing, render_map_to_png, RenderConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let regions = demo_regions();
    let land = demo_land();

    // Same seed, same picture, every run.
    let result = generate(&regions, 20_260_226, Some(&land));
    info!(
        produced = result.records.len(),
        requested = result.requested,
        fallback = result.fallback_filled,
        "generated sensor set"
    );

    let config = RenderConfig::default();
    let (width, height) = config.size;
    let projection =
        NaturalEarthProjection::fit_world((f64::from(width), f64::from(height)))?;

    let points = project_records(&result.records, &projection);
    let out = "scatter-world-basic.png";
    render_map_to_png(&points, &land, &projection, &config, out)?;
    info!(markers = points.len(), out, "rendered map");

    Ok(())
}
