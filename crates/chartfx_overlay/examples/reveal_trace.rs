//! Draws an area and a line overlay into a recording host and prints the
//! recorded layer calls.
//!
//! Run with `RUST_LOG=debug` to see the descriptors being issued.

use chartfx_animation::{MonotonicClock, RevealSpec};
use chartfx_core::{Color, PathStyle, Point, Rect};
use chartfx_overlay::{AreaOverlay, LineOverlay, OverlayConfig, RecordingHost};
use chartfx_paint::SmoothGenerator;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => OverlayConfig::from_toml_str(&std::fs::read_to_string(path)?)?,
        None => OverlayConfig::default(),
    };

    let clock = MonotonicClock::new();
    let mut host = RecordingHost::new(Rect::new(0.0, 0.0, 320.0, 200.0));
    let points = [
        Point::new(0.0, 180.0),
        Point::new(80.0, 60.0),
        Point::new(160.0, 120.0),
        Point::new(240.0, 20.0),
        Point::new(320.0, 90.0),
    ];

    let mut area_points = points.to_vec();
    area_points.push(Point::new(320.0, 200.0));
    area_points.push(Point::new(0.0, 200.0));

    AreaOverlay::new(config.clone())?.show(
        &mut host,
        &area_points,
        Color::from_rgb8(52, 211, 149).with_alpha(0.4),
        &RevealSpec::wipe(1.0, 0.0),
        &clock,
    )?;

    LineOverlay::new(config)?.show_points(
        &mut host,
        &points,
        &SmoothGenerator::default(),
        &PathStyle::line(Color::WHITE, 3.0),
        &RevealSpec::stroke(1.5, 0.25),
        &clock,
    )?;

    for (i, layer) in host.sublayers().iter().enumerate() {
        println!("sublayer {i}:");
        for command in layer.commands() {
            println!("  {command:?}");
        }
        if let Some(mask) = layer.mask() {
            println!("  mask:");
            for command in mask.commands() {
                println!("    {command:?}");
            }
        }
    }
    if let Some(mask) = host.mask() {
        println!("view mask:");
        for command in mask.commands() {
            println!("  {command:?}");
        }
    }

    Ok(())
}
