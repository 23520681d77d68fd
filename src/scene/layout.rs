//! Random wall layout with a hotspot exclusion zone.

use crate::config::LumenfieldWorldDesc;
use crate::error::{LumenfieldError, Result};
use crate::math::Vec2;
use crate::scene::segment::Segment;
use rand::Rng;

/// Parametric sample count for the exclusion test; t = i / SAMPLES for
/// i in 0..=SAMPLES, i.e. 101 points including both endpoints.
const HOTSPOT_SAMPLES: u32 = 100;

/// Generates the wall set for a world.
///
/// Random walls are rejection-sampled until they clear the hotspot circle,
/// then the four viewport boundary walls are appended unconditionally. Wall
/// order is load-bearing: nearest-hit ties keep the earlier wall, so the
/// boundaries always come last.
///
/// # Errors
///
/// Returns a `Layout` error when a wall exhausts `layout_max_attempts`
/// draws, which happens when the hotspot covers most of the viewport.
pub fn generate_layout(
    desc: &LumenfieldWorldDesc,
    rng: &mut impl Rng,
) -> Result<Vec<Segment>> {
    let center = desc.hotspot_center();
    let mut walls = Vec::with_capacity(desc.wall_count + 4);

    for index in 0..desc.wall_count {
        let wall = sample_wall(desc, center, rng).ok_or_else(|| {
            LumenfieldError::Layout(format!(
                "layout unsatisfiable: wall {} still crossed the hotspot after {} draws",
                index, desc.layout_max_attempts
            ))
        })?;
        walls.push(wall);
    }

    // The viewport edges are always walls, outset by one unit so rays
    // terminate just off-canvas.
    let w = desc.viewport_width;
    let h = desc.viewport_height;
    walls.push(Segment::from_coords(-1.0, -1.0, w, -1.0));
    walls.push(Segment::from_coords(w, -1.0, w, h));
    walls.push(Segment::from_coords(w, h, -1.0, h));
    walls.push(Segment::from_coords(-1.0, h, -1.0, -1.0));

    log::debug!(
        "layout generated: {} random walls + 4 boundaries",
        desc.wall_count
    );
    Ok(walls)
}

fn sample_wall(
    desc: &LumenfieldWorldDesc,
    center: Vec2,
    rng: &mut impl Rng,
) -> Option<Segment> {
    for attempt in 0..desc.layout_max_attempts {
        let a = Vec2::new(
            rng.gen_range(0.0..desc.viewport_width),
            rng.gen_range(0.0..desc.viewport_height),
        );
        let b = Vec2::new(
            rng.gen_range(0.0..desc.viewport_width),
            rng.gen_range(0.0..desc.viewport_height),
        );
        if !line_enters_hotspot(a, b, center, desc.hotspot_radius) {
            if attempt > 0 {
                log::debug!("wall accepted after {} rejected draws", attempt);
            }
            return Some(Segment::new(a, b));
        }
    }
    None
}

/// Coarse test for a segment entering the hotspot circle.
///
/// True when both endpoints are inside, or when any of the 101 points
/// sampled along the segment is. This sampled approximation is kept on
/// purpose over an exact segment/circle intersection: it decides which walls
/// may sit near the rim, and tightening it would change the generated
/// layouts.
pub fn line_enters_hotspot(a: Vec2, b: Vec2, center: Vec2, radius: f32) -> bool {
    if a.distance(center) < radius && b.distance(center) < radius {
        return true;
    }
    for i in 0..=HOTSPOT_SAMPLES {
        let t = i as f32 / HOTSPOT_SAMPLES as f32;
        if a.lerp(b, t).distance(center) < radius {
            return true;
        }
    }
    false
}
