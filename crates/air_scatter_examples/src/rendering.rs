//! Shared demo data and a small PNG renderer for the example binaries.
use air_scatter::land::{Geometry, LandIndex, Position};
use air_scatter::project::{project_rings, ProjectedPoint, Projection};
use air_scatter::scatter::Region;
use air_scatter::sensor::AirQuality;
use glam::DVec2;
use image::{Rgb, RgbImage};

/// Rendering options for [`render_map_to_png`].
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output size in pixels (width, height).
    pub size: (u32, u32),
    /// Background color.
    pub background: [u8; 3],
    /// Land outline color.
    pub outline: [u8; 3],
    /// Marker radius in pixels.
    pub marker_radius: i32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            size: (1000, 600),
            background: [18, 22, 28],
            outline: [70, 80, 92],
            marker_radius: 3,
        }
    }
}

fn status_color(status: AirQuality) -> [u8; 3] {
    match status {
        AirQuality::Good => [88, 200, 120],
        AirQuality::Moderate => [235, 185, 80],
        AirQuality::Poor => [225, 90, 85],
    }
}

/// Render projected sensors and land outlines to a PNG file.
pub fn render_map_to_png(
    points: &[ProjectedPoint],
    land: &LandIndex,
    projection: &dyn Projection,
    config: &RenderConfig,
    path: &str,
) -> anyhow::Result<()> {
    let (width, height) = config.size;
    let mut img = RgbImage::from_pixel(width, height, Rgb(config.background));

    for feature in land.features() {
        for ring in project_rings(feature.geometry(), projection) {
            draw_ring(&mut img, &ring, config.outline);
        }
    }

    for point in points {
        let color = status_color(point.status);
        draw_disc(&mut img, point.position, config.marker_radius, color);
    }

    img.save(path)?;
    Ok(())
}

fn draw_ring(img: &mut RgbImage, ring: &[DVec2], color: [u8; 3]) {
    if ring.len() < 2 {
        return;
    }
    for window in ring.windows(2) {
        draw_segment(img, window[0], window[1], color);
    }
    if ring.len() > 2 {
        draw_segment(img, ring[ring.len() - 1], ring[0], color);
    }
}

fn draw_segment(img: &mut RgbImage, a: DVec2, b: DVec2, color: [u8; 3]) {
    let steps = (b - a).length().ceil().max(1.0) as usize;
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let p = a.lerp(b, t);
        put_pixel_checked(img, p.x.round() as i64, p.y.round() as i64, color);
    }
}

fn draw_disc(img: &mut RgbImage, center: DVec2, radius: i32, color: [u8; 3]) {
    let cx = center.x.round() as i64;
    let cy = center.y.round() as i64;
    let r = i64::from(radius);
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                put_pixel_checked(img, cx + dx, cy + dy, color);
            }
        }
    }
}

fn put_pixel_checked(img: &mut RgbImage, x: i64, y: i64, color: [u8; 3]) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, Rgb(color));
    }
}

/// Regions roughly matching populated areas, for demo purposes.
pub fn demo_regions() -> Vec<Region> {
    vec![
        Region::new("europe", 50.0, 15.0, 10.0, 20.0, 60),
        Region::new("north-america", 40.0, -95.0, 12.0, 25.0, 50),
        Region::new("east-asia", 32.0, 110.0, 12.0, 18.0, 70),
        Region::new("south-america", -15.0, -58.0, 12.0, 12.0, 30),
    ]
}

fn box_polygon(min_lng: f64, min_lat: f64, max_lng: f64, max_lat: f64) -> Geometry {
    let ring: Vec<Position> = vec![
        [min_lng, min_lat],
        [max_lng, min_lat],
        [max_lng, max_lat],
        [min_lng, max_lat],
        [min_lng, min_lat],
    ];
    Geometry::Polygon(vec![ring])
}

/// A coarse block-continent land set, good enough for demo scattering.
pub fn demo_land() -> LandIndex {
    LandIndex::from_geometries([
        // Americas
        box_polygon(-125.0, 25.0, -70.0, 55.0),
        box_polygon(-80.0, -35.0, -40.0, 5.0),
        // Europe and northern Africa
        box_polygon(-10.0, 36.0, 40.0, 60.0),
        box_polygon(-10.0, 5.0, 40.0, 32.0),
        // Asia and Oceania
        box_polygon(60.0, 10.0, 135.0, 55.0),
        box_polygon(113.0, -38.0, 153.0, -12.0),
    ])
}
