//! Configuration for a Lumenfield world

use crate::error::{LumenfieldError, Result};
use crate::math::Vec2;

/// Configuration descriptor for a Lumenfield world.
///
/// Every visual tunable of the core lives here; nothing is hardcoded in the
/// frame path. The defaults reproduce the reference composition: four random
/// walls, a one-degree ray fan, and a 200-unit hotspot.
#[derive(Debug, Clone)]
pub struct LumenfieldWorldDesc {
    /// Logical viewport width in canvas units
    pub viewport_width: f32,
    /// Logical viewport height in canvas units
    pub viewport_height: f32,
    /// Number of random wall segments generated at setup (the four viewport
    /// boundary walls are always appended on top of these)
    pub wall_count: usize,
    /// Angular increment of the ray fan in degrees. The emitter carries one
    /// ray per step in `[0, 360)`, so a step of 1.0 yields 360 rays.
    pub ray_step_deg: f32,
    /// Radius of the central hover/exclusion circle
    pub hotspot_radius: f32,
    /// Crossfade progress added per hovered frame
    pub transition_speed: f64,
    /// Fraction of the remaining distance the opacity moves per frame
    pub opacity_easing: f64,
    /// Opacity easing target while the pointer is inside the hotspot
    pub hover_opacity: f64,
    /// Opacity easing target while the pointer is outside the hotspot
    pub idle_opacity: f64,
    /// Carousel rotation accumulated per hovered frame, in degrees
    pub rotation_step_deg: f64,
    /// Outer radius of the star cursor
    pub star_outer_radius: f32,
    /// Inner radius of the star cursor
    pub star_inner_radius: f32,
    /// Number of points on the star cursor
    pub star_points: u32,
    /// Number of carousel images the asset catalog must provide
    pub image_count: usize,
    /// Rejection-sampling cap per wall before layout generation gives up
    pub layout_max_attempts: usize,
}

impl Default for LumenfieldWorldDesc {
    fn default() -> Self {
        Self {
            viewport_width: 1280.0,
            viewport_height: 720.0,
            wall_count: 4,
            ray_step_deg: 1.0,
            hotspot_radius: 200.0,
            transition_speed: 0.01,
            opacity_easing: 0.1,
            hover_opacity: 1.0,
            idle_opacity: 0.2,
            rotation_step_deg: 0.5,
            star_outer_radius: 15.0,
            star_inner_radius: 10.0,
            star_points: 5,
            image_count: 7,
            layout_max_attempts: 1000,
        }
    }
}

impl LumenfieldWorldDesc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    pub fn wall_count(mut self, count: usize) -> Self {
        self.wall_count = count;
        self
    }

    pub fn ray_step_deg(mut self, step: f32) -> Self {
        self.ray_step_deg = step;
        self
    }

    pub fn hotspot_radius(mut self, radius: f32) -> Self {
        self.hotspot_radius = radius;
        self
    }

    pub fn transition_speed(mut self, speed: f64) -> Self {
        self.transition_speed = speed;
        self
    }

    pub fn opacity_easing(mut self, easing: f64) -> Self {
        self.opacity_easing = easing;
        self
    }

    pub fn rotation_step_deg(mut self, step: f64) -> Self {
        self.rotation_step_deg = step;
        self
    }

    pub fn star(mut self, outer_radius: f32, inner_radius: f32, points: u32) -> Self {
        self.star_outer_radius = outer_radius;
        self.star_inner_radius = inner_radius;
        self.star_points = points;
        self
    }

    pub fn image_count(mut self, count: usize) -> Self {
        self.image_count = count;
        self
    }

    pub fn layout_max_attempts(mut self, attempts: usize) -> Self {
        self.layout_max_attempts = attempts;
        self
    }

    /// Center of the hotspot circle, fixed at the middle of the viewport.
    pub fn hotspot_center(&self) -> Vec2 {
        Vec2::new(self.viewport_width / 2.0, self.viewport_height / 2.0)
    }

    /// Checks every tunable and reports the first offending field.
    ///
    /// Out-of-range values are rejected, never clamped; clamping would
    /// silently change the visual density the caller asked for.
    pub fn validate(&self) -> Result<()> {
        if self.viewport_width <= 0.0 || self.viewport_height <= 0.0 {
            return Err(LumenfieldError::Configuration(format!(
                "viewport must be positive, got {}x{}",
                self.viewport_width, self.viewport_height
            )));
        }
        if self.ray_step_deg <= 0.0 || self.ray_step_deg > 360.0 {
            return Err(LumenfieldError::Configuration(format!(
                "ray_step_deg must be in (0, 360], got {}",
                self.ray_step_deg
            )));
        }
        if self.hotspot_radius <= 0.0 {
            return Err(LumenfieldError::Configuration(format!(
                "hotspot_radius must be positive, got {}",
                self.hotspot_radius
            )));
        }
        if self.transition_speed < 0.0 {
            return Err(LumenfieldError::Configuration(format!(
                "transition_speed must not be negative, got {}",
                self.transition_speed
            )));
        }
        if self.opacity_easing <= 0.0 || self.opacity_easing > 1.0 {
            return Err(LumenfieldError::Configuration(format!(
                "opacity_easing must be in (0, 1], got {}",
                self.opacity_easing
            )));
        }
        if self.star_points == 0 {
            return Err(LumenfieldError::Configuration(
                "star_points must be at least 1".into(),
            ));
        }
        if self.star_inner_radius <= 0.0 || self.star_outer_radius <= 0.0 {
            return Err(LumenfieldError::Configuration(format!(
                "star radii must be positive, got outer {} inner {}",
                self.star_outer_radius, self.star_inner_radius
            )));
        }
        if self.star_inner_radius >= self.star_outer_radius {
            return Err(LumenfieldError::Configuration(format!(
                "star_inner_radius {} must be smaller than star_outer_radius {}",
                self.star_inner_radius, self.star_outer_radius
            )));
        }
        if self.image_count == 0 {
            return Err(LumenfieldError::Configuration(
                "image_count must be at least 1".into(),
            ));
        }
        if self.layout_max_attempts == 0 {
            return Err(LumenfieldError::Configuration(
                "layout_max_attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_desc_is_valid() {
        assert!(LumenfieldWorldDesc::default().validate().is_ok());
    }

    #[test]
    fn builder_setters_compose() {
        let desc = LumenfieldWorldDesc::new()
            .viewport(800.0, 600.0)
            .wall_count(6)
            .ray_step_deg(2.0)
            .image_count(3);
        assert_eq!(desc.viewport_width, 800.0);
        assert_eq!(desc.wall_count, 6);
        assert_eq!(desc.ray_step_deg, 2.0);
        assert_eq!(desc.image_count, 3);
        assert_eq!(desc.hotspot_center(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn rejects_non_positive_ray_step() {
        let desc = LumenfieldWorldDesc::new().ray_step_deg(0.0);
        assert!(matches!(
            desc.validate(),
            Err(crate::error::LumenfieldError::Configuration(_))
        ));
        let desc = LumenfieldWorldDesc::new().ray_step_deg(-1.0);
        assert!(desc.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_hotspot_radius() {
        let desc = LumenfieldWorldDesc::new().hotspot_radius(0.0);
        assert!(desc.validate().is_err());
    }

    #[test]
    fn rejects_zero_image_count() {
        let desc = LumenfieldWorldDesc::new().image_count(0);
        assert!(desc.validate().is_err());
    }

    #[test]
    fn rejects_degenerate_star() {
        assert!(LumenfieldWorldDesc::new().star(15.0, 10.0, 0).validate().is_err());
        assert!(LumenfieldWorldDesc::new().star(10.0, 15.0, 5).validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_easing() {
        let desc = LumenfieldWorldDesc {
            opacity_easing: 0.0,
            ..Default::default()
        };
        assert!(desc.validate().is_err());
        let desc = LumenfieldWorldDesc {
            opacity_easing: 1.5,
            ..Default::default()
        };
        assert!(desc.validate().is_err());
    }
}
