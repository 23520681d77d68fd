//! Host-facing command types.
//!
//! The core never touches a canvas or an audio device. Each frame it returns
//! an ordered list of [`RenderCommand`]s for the host renderer, and pushes at
//! most one [`AudioCommand`] onto the world's audio channel for the host
//! transport.

use crate::math::Vec2;

/// One draw instruction, to be executed by the host in list order.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Rotating crossfade of the current and next carousel image, centered on
    /// the hotspot. `width`/`height` are the draw dimensions (half the native
    /// size of the current image); alphas are in `[0, 255]`.
    ImageComposite {
        center: Vec2,
        rotation: f32,
        current_image: usize,
        next_image: usize,
        alpha_current: f32,
        alpha_next: f32,
        width: f32,
        height: f32,
    },
    /// A wall segment, drawn only while the hotspot is hovered.
    Wall { a: Vec2, b: Vec2 },
    /// A ray from the emitter to its nearest wall hit.
    RayLine { from: Vec2, to: Vec2 },
    /// The emitter position marker.
    EmitterDot { pos: Vec2 },
    /// The closed star polygon replacing the system cursor.
    StarCursor { vertices: Vec<Vec2> },
}

impl RenderCommand {
    /// True for commands that only appear while the hotspot is hovered.
    pub fn is_scene_command(&self) -> bool {
        matches!(
            self,
            Self::Wall { .. } | Self::RayLine { .. } | Self::EmitterDot { .. }
        )
    }
}

/// Audio transport intent. The world emits at most one per frame, and never
/// a redundant start or stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCommand {
    /// Begin looped playback of the background track
    StartLoop,
    /// Halt playback
    StopLoop,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_commands_are_flagged() {
        assert!(RenderCommand::Wall {
            a: Vec2::ZERO,
            b: Vec2::ONE
        }
        .is_scene_command());
        assert!(RenderCommand::EmitterDot { pos: Vec2::ZERO }.is_scene_command());
        assert!(!RenderCommand::StarCursor { vertices: vec![] }.is_scene_command());
    }
}
