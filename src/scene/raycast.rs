//! Ray fan and ray/segment intersection.
//!
//! Intersection uses the standard two-line parametric form with exact
//! comparisons and no numeric tolerance. Near-parallel or near-endpoint
//! geometry may flicker between hit and miss from frame to frame; that is
//! the intended behavior of this renderer, not something to smooth over.

use crate::math::{Vec2, dir_from_degrees};
use crate::scene::segment::Segment;

/// Result of a nearest-hit query for one ray.
///
/// Transient: recomputed every frame, never stored across frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Intersection point on the wall
    pub point: Vec2,
    /// Euclidean distance from the emitter position to `point`
    pub distance: f32,
}

/// A half-line direction in the emitter's fan.
///
/// Rays do not own an origin; the emitter's current position is passed to
/// every cast so the whole fan follows the pointer without rebuilding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    dir: Vec2,
}

impl Ray {
    /// Builds a ray from an angle in degrees, counterclockwise from +X.
    pub fn from_degrees(angle_deg: f32) -> Self {
        Self {
            dir: dir_from_degrees(angle_deg),
        }
    }

    pub fn dir(&self) -> Vec2 {
        self.dir
    }
}

/// Intersects a ray with a wall segment.
///
/// Returns the intersection point when the segment parameter `t` is strictly
/// inside `(0, 1)` and the ray parameter `u` is strictly positive; segment
/// endpoints, the ray origin itself, and everything behind the origin all
/// miss. A zero denominator (parallel or collinear lines) is a miss, not an
/// error.
pub fn cast(origin: Vec2, dir: Vec2, wall: &Segment) -> Option<Vec2> {
    let (x1, y1) = (wall.a.x, wall.a.y);
    let (x2, y2) = (wall.b.x, wall.b.y);
    let (x3, y3) = (origin.x, origin.y);
    let (x4, y4) = (origin.x + dir.x, origin.y + dir.y);

    let den = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if den == 0.0 {
        return None;
    }

    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / den;
    let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / den;
    if t > 0.0 && t < 1.0 && u > 0.0 {
        Some(Vec2::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1)))
    } else {
        None
    }
}

/// The moving point source owning the full fan of rays.
#[derive(Debug, Clone)]
pub struct Emitter {
    pos: Vec2,
    rays: Vec<Ray>,
}

impl Emitter {
    /// Builds the fan at angles `0, step, 2*step, ... < 360` degrees.
    ///
    /// The fan is fixed for the emitter's lifetime; only the position moves.
    pub fn new(pos: Vec2, ray_step_deg: f32) -> Self {
        let mut rays = Vec::new();
        let mut angle = 0.0f32;
        while angle < 360.0 {
            rays.push(Ray::from_degrees(angle));
            angle += ray_step_deg;
        }
        Self { pos, rays }
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn ray_count(&self) -> usize {
        self.rays.len()
    }

    /// Repositions the emitter, typically to the pointer location.
    pub fn update(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    /// Casts every ray against every wall and keeps the nearest hit per ray.
    ///
    /// Distance ties keep the earlier wall in iteration order, so results are
    /// deterministic for a given wall list. Rays that hit nothing contribute
    /// no entry.
    pub fn look(&self, walls: &[Segment]) -> Vec<RayHit> {
        let mut hits = Vec::with_capacity(self.rays.len());
        for ray in &self.rays {
            let mut closest: Option<RayHit> = None;
            for wall in walls {
                if let Some(point) = cast(self.pos, ray.dir, wall) {
                    let distance = self.pos.distance(point);
                    let nearer = match &closest {
                        Some(hit) => distance < hit.distance,
                        None => true,
                    };
                    if nearer {
                        closest = Some(RayHit { point, distance });
                    }
                }
            }
            if let Some(hit) = closest {
                hits.push(hit);
            }
        }
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_wall_straight_ahead() {
        let wall = Segment::from_coords(0.0, 0.0, 10.0, 0.0);
        let point = cast(Vec2::new(5.0, -5.0), Vec2::new(0.0, 1.0), &wall)
            .expect("ray pointing at the wall must hit");
        assert!((point - Vec2::new(5.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn misses_wall_behind_origin() {
        let wall = Segment::from_coords(0.0, 0.0, 10.0, 0.0);
        assert_eq!(cast(Vec2::new(5.0, 5.0), Vec2::new(0.0, 1.0), &wall), None);
    }

    #[test]
    fn parallel_ray_never_hits() {
        let wall = Segment::from_coords(0.0, 0.0, 10.0, 0.0);
        // Ray running along y = 5, parallel to the wall: den == 0.
        assert_eq!(cast(Vec2::new(0.0, 5.0), Vec2::new(1.0, 0.0), &wall), None);
        // Collinear with the wall itself is also a miss.
        assert_eq!(cast(Vec2::new(-5.0, 0.0), Vec2::new(1.0, 0.0), &wall), None);
    }

    #[test]
    fn segment_endpoints_are_excluded() {
        let wall = Segment::from_coords(0.0, 0.0, 10.0, 0.0);
        // Aimed exactly at endpoint a: t == 0, outside the open range.
        assert_eq!(cast(Vec2::new(0.0, -5.0), Vec2::new(0.0, 1.0), &wall), None);
        assert_eq!(cast(Vec2::new(10.0, -5.0), Vec2::new(0.0, 1.0), &wall), None);
    }

    #[test]
    fn fan_count_follows_step() {
        assert_eq!(Emitter::new(Vec2::ZERO, 1.0).ray_count(), 360);
        assert_eq!(Emitter::new(Vec2::ZERO, 90.0).ray_count(), 4);
        assert_eq!(Emitter::new(Vec2::ZERO, 360.0).ray_count(), 1);
    }

    #[test]
    fn look_selects_nearest_wall() {
        let walls = [
            Segment::from_coords(7.0, -1.0, 7.0, 1.0),
            Segment::from_coords(3.0, -1.0, 3.0, 1.0),
        ];
        let emitter = Emitter::new(Vec2::ZERO, 90.0);
        let hits = emitter.look(&walls);
        // Only the 0-degree ray crosses the walls; it must stop at x = 3
        // even though the x = 7 wall comes first in the list.
        assert_eq!(hits.len(), 1);
        assert!((hits[0].distance - 3.0).abs() < 1e-6);
        assert!((hits[0].point - Vec2::new(3.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn look_is_empty_without_walls() {
        let emitter = Emitter::new(Vec2::new(5.0, 5.0), 45.0);
        assert!(emitter.look(&[]).is_empty());
    }

    #[test]
    fn update_moves_the_whole_fan() {
        let wall = Segment::from_coords(10.0, -1.0, 10.0, 1.0);
        let mut emitter = Emitter::new(Vec2::ZERO, 90.0);
        emitter.update(Vec2::new(8.0, 0.0));
        let hits = emitter.look(&[wall]);
        assert_eq!(hits.len(), 1);
        assert!((hits[0].distance - 2.0).abs() < 1e-6);
    }
}
