//! Hotspot state machine: pointer proximity drives opacity, rotation, the
//! image crossfade, and the audio transport intent.

use crate::commands::AudioCommand;
use crate::config::LumenfieldWorldDesc;
use crate::events::LumenfieldEvent;
use crate::math;

/// Hover phase, derived each frame from pointer distance to the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotspotPhase {
    Hovered,
    Idle,
}

/// Animation scalars that persist across frames.
///
/// Scalars are `f64` so the per-frame accumulation (easing, crossfade
/// progress, rotation) stays well-behaved over long sessions.
#[derive(Debug, Clone)]
pub struct HotspotState {
    opacity: f64,
    rotation: f64,
    transition_progress: f64,
    current_image: usize,
    next_image: usize,
    music_playing: bool,
    phase: HotspotPhase,
}

impl HotspotState {
    /// Initial state: the carousel rests at image 0 with image 1 queued,
    /// opacity 0.6, no rotation, music stopped.
    pub fn new(image_count: usize) -> Self {
        Self {
            opacity: 0.6,
            rotation: 0.0,
            transition_progress: 0.0,
            current_image: 0,
            next_image: 1 % image_count,
            music_playing: false,
            phase: HotspotPhase::Idle,
        }
    }

    /// Advances one frame.
    ///
    /// Returns the audio intent for this tick, if any; phase edges and
    /// carousel advances are pushed onto `events`. At most one command per
    /// tick, and never a redundant start or stop.
    pub fn tick(
        &mut self,
        hovered: bool,
        desc: &LumenfieldWorldDesc,
        events: &mut Vec<LumenfieldEvent>,
    ) -> Option<AudioCommand> {
        let phase = if hovered {
            HotspotPhase::Hovered
        } else {
            HotspotPhase::Idle
        };
        if phase != self.phase {
            self.phase = phase;
            events.push(match phase {
                HotspotPhase::Hovered => LumenfieldEvent::HotspotEntered,
                HotspotPhase::Idle => LumenfieldEvent::HotspotExited,
            });
        }
        match phase {
            HotspotPhase::Hovered => self.tick_hovered(desc, events),
            HotspotPhase::Idle => self.tick_idle(desc, events),
        }
    }

    fn tick_hovered(
        &mut self,
        desc: &LumenfieldWorldDesc,
        events: &mut Vec<LumenfieldEvent>,
    ) -> Option<AudioCommand> {
        self.opacity = math::lerp(self.opacity, desc.hover_opacity, desc.opacity_easing);
        self.rotation += desc.rotation_step_deg.to_radians();

        self.transition_progress += desc.transition_speed;
        if self.transition_progress >= 1.0 {
            let from = self.current_image;
            self.current_image = self.next_image;
            self.next_image = (self.next_image + 1) % desc.image_count;
            self.transition_progress = 0.0;
            events.push(LumenfieldEvent::ImageAdvanced {
                from,
                to: self.current_image,
            });
        }

        if !self.music_playing {
            self.music_playing = true;
            events.push(LumenfieldEvent::MusicStarted);
            return Some(AudioCommand::StartLoop);
        }
        None
    }

    fn tick_idle(
        &mut self,
        desc: &LumenfieldWorldDesc,
        events: &mut Vec<LumenfieldEvent>,
    ) -> Option<AudioCommand> {
        self.opacity = math::lerp(self.opacity, desc.idle_opacity, desc.opacity_easing);
        // The crossfade freezes at zero but the displayed image and the
        // accumulated rotation are kept.
        self.transition_progress = 0.0;

        if self.music_playing {
            self.music_playing = false;
            events.push(LumenfieldEvent::MusicStopped);
            return Some(AudioCommand::StopLoop);
        }
        None
    }

    /// Alpha pair for the image composite, in `[0, 255]`: the current image
    /// fades out as the next fades in, both scaled by the eased opacity.
    pub fn composite_alphas(&self) -> (f32, f32) {
        let alpha_current = 255.0 * (1.0 - self.transition_progress) * self.opacity;
        let alpha_next = 255.0 * self.transition_progress * self.opacity;
        (alpha_current as f32, alpha_next as f32)
    }

    pub fn phase(&self) -> HotspotPhase {
        self.phase
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn transition_progress(&self) -> f64 {
        self.transition_progress
    }

    pub fn current_image(&self) -> usize {
        self.current_image
    }

    pub fn next_image(&self) -> usize {
        self.next_image
    }

    pub fn is_music_playing(&self) -> bool {
        self.music_playing
    }
}
