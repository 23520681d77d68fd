//! Descriptors for host-loaded assets.
//!
//! Decoding images and audio is the host's job; the core only needs to know
//! what was loaded. Carousel indices are assumed dense, so setup fails on an
//! incomplete set instead of running with holes.

use crate::error::{LumenfieldError, Result};
use std::time::Duration;

/// Native dimensions of one carousel image.
///
/// The composite command draws images at half these dimensions, so the core
/// has to carry them even though pixel data stays on the host side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageInfo {
    pub width: f32,
    pub height: f32,
}

impl ImageInfo {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Descriptor of the loopable background track.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AudioTrackInfo {
    /// Track length, if the host transport reports one
    pub duration: Option<Duration>,
}

/// Everything the host loaded before the first frame.
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    images: Vec<ImageInfo>,
    audio: AudioTrackInfo,
}

impl AssetCatalog {
    /// Builds a catalog from the host's load results.
    ///
    /// # Errors
    ///
    /// Returns an `Asset` error when the image list is empty; the carousel
    /// cannot run without at least one image.
    pub fn new(images: Vec<ImageInfo>, audio: AudioTrackInfo) -> Result<Self> {
        if images.is_empty() {
            return Err(LumenfieldError::Asset(
                "asset catalog holds no images".into(),
            ));
        }
        Ok(Self { images, audio })
    }

    pub fn images(&self) -> &[ImageInfo] {
        &self.images
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn audio(&self) -> &AudioTrackInfo {
        &self.audio
    }
}
