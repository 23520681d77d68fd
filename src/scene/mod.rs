//! Scene geometry: wall segments, layout generation, and ray casting.
//!
//! The scene is a flat list of [`Segment`]s built once at setup by
//! [`generate_layout`] and queried every hovered frame by the
//! [`Emitter`]'s ray fan. There is no acceleration structure; the full
//! rays-by-walls pass is cheap at the wall counts this crate targets.

pub mod layout;
pub mod raycast;
pub mod segment;

pub use layout::{generate_layout, line_enters_hotspot};
pub use raycast::{Emitter, Ray, RayHit, cast};
pub use segment::Segment;
