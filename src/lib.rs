//! Lumenfield: an interactive 2D ray-casting visibility core.
//!
//! A point emitter follows the pointer and casts a fan of rays that
//! terminate on the nearest wall segment, over a rotating, cross-fading
//! image carousel gated by pointer proximity to a central hotspot. The crate
//! is headless: it owns the geometry, the layout, and the hotspot state
//! machine, and hands the host an ordered list of draw commands plus audio
//! transport intents each frame.

pub mod assets;
pub mod commands;
pub mod config;
pub mod cursor;
pub mod error;
pub mod events;
pub mod hotspot;
pub mod math;
pub mod scene;
pub mod world;

pub use assets::{AssetCatalog, AudioTrackInfo, ImageInfo};
pub use commands::{AudioCommand, RenderCommand};
pub use config::LumenfieldWorldDesc;
pub use error::LumenfieldError;
pub use events::LumenfieldEvent;
pub use hotspot::{HotspotPhase, HotspotState};
pub use scene::{Emitter, Ray, RayHit, Segment};
pub use world::LumenfieldWorld;
