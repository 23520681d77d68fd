//! Event types for Lumenfield

/// Notification emitted by the world during a frame tick.
///
/// Events are queued inside the world and drained with
/// [`crate::world::LumenfieldWorld::poll_events`]; they carry no rendering
/// obligation and exist so the host can observe state transitions (logging,
/// UI badges) without re-deriving them from commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LumenfieldEvent {
    HotspotEntered,
    HotspotExited,
    ImageAdvanced { from: usize, to: usize },
    MusicStarted,
    MusicStopped,
}

impl LumenfieldEvent {
    pub fn is_music_event(&self) -> bool {
        matches!(self, Self::MusicStarted | Self::MusicStopped)
    }

    pub fn is_hotspot_event(&self) -> bool {
        matches!(self, Self::HotspotEntered | Self::HotspotExited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_events() {
        assert!(LumenfieldEvent::MusicStarted.is_music_event());
        assert!(LumenfieldEvent::HotspotExited.is_hotspot_event());
        let advanced = LumenfieldEvent::ImageAdvanced { from: 0, to: 1 };
        assert!(!advanced.is_music_event());
        assert!(!advanced.is_hotspot_event());
    }
}
