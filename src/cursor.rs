//! Star-shaped cursor polygon.

use crate::math::Vec2;
use std::f32::consts::{PI, TAU};

/// Vertices of the closed star polygon drawn at the pointer.
///
/// Produces `2 * points` vertices alternating between the outer and inner
/// radius, starting straight up (angle -pi/2) on the outer radius with inner
/// vertices at half-step offsets. The cursor is recomputed every frame and
/// drawn regardless of hotspot state; it replaces the system cursor.
pub fn star_vertices(center: Vec2, outer_radius: f32, inner_radius: f32, points: u32) -> Vec<Vec2> {
    let step = TAU / points as f32;
    let half_step = step / 2.0;
    let mut vertices = Vec::with_capacity(points as usize * 2);
    for i in 0..points {
        let angle = -PI / 2.0 + i as f32 * step;
        vertices.push(center + Vec2::from_angle(angle) * outer_radius);
        vertices.push(center + Vec2::from_angle(angle + half_step) * inner_radius);
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_point_star_has_ten_vertices() {
        let vertices = star_vertices(Vec2::ZERO, 15.0, 10.0, 5);
        assert_eq!(vertices.len(), 10);
    }

    #[test]
    fn first_vertex_points_straight_up_at_outer_radius() {
        let center = Vec2::new(50.0, 50.0);
        let vertices = star_vertices(center, 15.0, 10.0, 5);
        assert!((vertices[0] - Vec2::new(50.0, 35.0)).length() < 1e-3);
    }

    #[test]
    fn vertices_alternate_radii() {
        let center = Vec2::new(10.0, 10.0);
        let vertices = star_vertices(center, 15.0, 10.0, 6);
        for (i, vertex) in vertices.iter().enumerate() {
            let expected = if i % 2 == 0 { 15.0 } else { 10.0 };
            assert!((vertex.distance(center) - expected).abs() < 1e-3);
        }
    }
}
