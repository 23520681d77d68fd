//! World API for Lumenfield.

use crate::assets::AssetCatalog;
use crate::commands::{AudioCommand, RenderCommand};
use crate::config::LumenfieldWorldDesc;
use crate::cursor;
use crate::error::{LumenfieldError, Result};
use crate::events::LumenfieldEvent;
use crate::hotspot::HotspotState;
use crate::math::Vec2;
use crate::scene::{Emitter, Segment, generate_layout};
use crossbeam_channel::{Receiver, Sender, unbounded};
use rand::Rng;

/// Main world object holding all per-instance state.
///
/// `LumenfieldWorld` is the single mutable state of the core: walls, the
/// emitter, and the hotspot scalars, threaded explicitly through setup and
/// the per-frame tick. There are no globals, so independent worlds can run
/// side by side and tests stay deterministic.
///
/// # Architecture
///
/// - **Host**: owns the window, decoded assets, and the audio transport;
///   calls [`frame`](Self::frame) once per rendered frame with the pointer.
/// - **Core**: returns an ordered list of draw commands and sends audio
///   intents over a command channel the host drains.
pub struct LumenfieldWorld {
    desc: LumenfieldWorldDesc,
    catalog: AssetCatalog,
    walls: Vec<Segment>,
    emitter: Emitter,
    hotspot: HotspotState,
    events: Vec<LumenfieldEvent>,
    audio_sender: Sender<AudioCommand>,
    audio_receiver: Receiver<AudioCommand>,
}

impl LumenfieldWorld {
    /// Builds a world with a thread-local RNG for the wall layout.
    pub fn new(desc: LumenfieldWorldDesc, catalog: AssetCatalog) -> Result<Self> {
        Self::with_rng(desc, catalog, &mut rand::thread_rng())
    }

    /// Builds a world with a caller-supplied RNG, so layouts are
    /// reproducible under a seeded generator.
    ///
    /// # Errors
    ///
    /// Fails on an invalid configuration, a catalog whose image count does
    /// not match `image_count`, or an unsatisfiable wall layout.
    pub fn with_rng(
        desc: LumenfieldWorldDesc,
        catalog: AssetCatalog,
        rng: &mut impl Rng,
    ) -> Result<Self> {
        desc.validate()?;
        if catalog.image_count() != desc.image_count {
            return Err(LumenfieldError::Asset(format!(
                "catalog holds {} images but the world is configured for {}",
                catalog.image_count(),
                desc.image_count
            )));
        }

        let walls = generate_layout(&desc, rng)?;
        let emitter = Emitter::new(desc.hotspot_center(), desc.ray_step_deg);
        let hotspot = HotspotState::new(desc.image_count);
        let (audio_sender, audio_receiver) = unbounded();

        log::info!(
            "world ready: {} walls, {} rays, {} images",
            walls.len(),
            emitter.ray_count(),
            desc.image_count
        );

        Ok(Self {
            desc,
            catalog,
            walls,
            emitter,
            hotspot,
            events: Vec::new(),
            audio_sender,
            audio_receiver,
        })
    }

    /// Runs one frame tick for the given pointer position.
    ///
    /// Advances the hotspot state machine, repositions the emitter and
    /// recomputes every ray intersection while hovered, and returns the draw
    /// list: the image composite first, scene geometry (walls, rays, emitter
    /// dot) only while hovered, and the star cursor last. Audio intent, if
    /// any, goes out on the channel behind [`audio_receiver`](Self::audio_receiver).
    pub fn frame(&mut self, pointer: Vec2) -> Vec<RenderCommand> {
        let center = self.desc.hotspot_center();
        let hovered = pointer.distance(center) < self.desc.hotspot_radius;

        if let Some(command) = self.hotspot.tick(hovered, &self.desc, &mut self.events) {
            if self.audio_sender.send(command).is_err() {
                log::warn!("audio command dropped: channel disconnected");
            }
        }

        let mut commands = Vec::new();
        commands.push(self.image_composite(center));

        if hovered {
            for wall in &self.walls {
                commands.push(RenderCommand::Wall {
                    a: wall.a,
                    b: wall.b,
                });
            }
            self.emitter.update(pointer);
            for hit in self.emitter.look(&self.walls) {
                commands.push(RenderCommand::RayLine {
                    from: self.emitter.pos(),
                    to: hit.point,
                });
            }
            commands.push(RenderCommand::EmitterDot {
                pos: self.emitter.pos(),
            });
        }

        commands.push(RenderCommand::StarCursor {
            vertices: cursor::star_vertices(
                pointer,
                self.desc.star_outer_radius,
                self.desc.star_inner_radius,
                self.desc.star_points,
            ),
        });
        commands
    }

    fn image_composite(&self, center: Vec2) -> RenderCommand {
        let current = self.hotspot.current_image();
        let next = self.hotspot.next_image();
        let (alpha_current, alpha_next) = self.hotspot.composite_alphas();
        // Both layers share the current image's half-size footprint.
        let info = &self.catalog.images()[current];
        RenderCommand::ImageComposite {
            center,
            rotation: self.hotspot.rotation() as f32,
            current_image: current,
            next_image: next,
            alpha_current,
            alpha_next,
            width: info.width / 2.0,
            height: info.height / 2.0,
        }
    }

    /// Receiver for the host's audio transport; at most one command arrives
    /// per frame.
    pub fn audio_receiver(&self) -> &Receiver<AudioCommand> {
        &self.audio_receiver
    }

    /// Drains notifications accumulated since the last poll.
    pub fn poll_events(&mut self) -> Vec<LumenfieldEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn walls(&self) -> &[Segment] {
        &self.walls
    }

    pub fn emitter(&self) -> &Emitter {
        &self.emitter
    }

    pub fn hotspot(&self) -> &HotspotState {
        &self.hotspot
    }

    pub fn desc(&self) -> &LumenfieldWorldDesc {
        &self.desc
    }
}
