//! Playback driving system
//!
//! Feeds wall-clock time into the playback state machine:
//! - Delta time calculation
//! - Capping the delta after pauses or window focus loss
//! - Reporting dimension changes so the frame can be rebuilt

use std::time::Instant;

use hypercycle_core::Playback;

/// Result of a playback update
pub struct PlaybackResult {
    /// Whether the frame needs to be rebuilt and re-uploaded
    pub dimension_changed: bool,
}

/// Drives the playback state machine from wall-clock time
pub struct PlaybackSystem {
    last_frame: Instant,
}

impl PlaybackSystem {
    /// Create a new playback system
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
        }
    }

    /// Run one update
    ///
    /// The delta is capped so a long stall (window dragged, laptop
    /// resumed) advances at most a handful of dimensions instead of
    /// spinning through the whole cycle repeatedly.
    pub fn update(&mut self, playback: &mut Playback) -> PlaybackResult {
        let now = Instant::now();
        let raw_dt = (now - self.last_frame).as_secs_f32();
        let dt = raw_dt.min(0.25);
        self.last_frame = now;

        PlaybackResult {
            dimension_changed: playback.tick(dt),
        }
    }
}

impl Default for PlaybackSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_reports_change() {
        let mut system = PlaybackSystem::new();
        let mut playback = Playback::new(0.05);
        std::thread::sleep(std::time::Duration::from_millis(80));
        let result = system.update(&mut playback);
        assert!(result.dimension_changed);
    }

    #[test]
    fn test_paused_never_changes() {
        let mut system = PlaybackSystem::new();
        let mut playback = Playback::new(0.05).paused();
        std::thread::sleep(std::time::Duration::from_millis(80));
        let result = system.update(&mut playback);
        assert!(!result.dimension_changed);
    }

    #[test]
    fn test_default_construction() {
        let system = PlaybackSystem::default();
        assert!(system.last_frame.elapsed().as_millis() < 100);
    }
}
