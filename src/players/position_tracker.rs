use log::{debug, info};

use crate::data::{PlayerSource, SongIdentity};

/// Position chosen for one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionReading {
    pub position: u32,
    /// True only for a probe value reported on the poll right after the probe
    pub accurate: bool,
}

/// Process-lifetime playback position state.
///
/// The dump position is stale by construction. A synchronous probe can offer a
/// fresher value, which is reported as accurate on exactly one poll and then
/// kept as the last known accurate position for as long as the same song is
/// loaded.
///
/// There is no internal lock: the owner must serialize polls, applying at
/// most one `observe` per poll.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackPositionState {
    cached_position: Option<u32>,
    last_known_accurate_position: Option<u32>,
    last_song: Option<SongIdentity>,
}

impl PlaybackPositionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a probe result to be reported on the next poll.
    pub fn offer_probe_result(&mut self, position: u32) {
        debug!("Probe offered position {}", position);
        self.cached_position = Some(position);
    }

    /// Drop a pending probe result without reporting it
    pub fn discard_pending(&mut self) {
        if self.cached_position.take().is_some() {
            debug!("Discarded pending probe position");
        }
    }

    /// Whether a probe result is waiting for the next poll
    pub fn has_pending(&self) -> bool {
        self.cached_position.is_some()
    }

    pub fn last_known_accurate_position(&self) -> Option<u32> {
        self.last_known_accurate_position
    }

    pub fn last_song(&self) -> Option<&SongIdentity> {
        self.last_song.as_ref()
    }

    /// Apply one poll's transition and choose the position to report.
    ///
    /// `dump_position` is the provisional value read from the dump; it is
    /// only reported when nothing better is known for the current song.
    pub fn observe(
        &mut self,
        song: &SongIdentity,
        dump_position: Option<u32>,
        source: PlayerSource,
    ) -> PositionReading {
        if self.last_song.as_ref() != Some(song) {
            info!("Song changed to {}", song);
            self.cached_position = None;
            self.last_known_accurate_position = None;
            self.last_song = Some(song.clone());
        }

        // The probe only queries the library player
        if source == PlayerSource::StreamingRadio {
            self.discard_pending();
        }

        if let Some(position) = self.cached_position.take() {
            self.last_known_accurate_position = Some(position);
            return PositionReading { position, accurate: true };
        }

        if let Some(position) = self.last_known_accurate_position {
            return PositionReading { position, accurate: false };
        }

        PositionReading {
            position: dump_position.unwrap_or(0),
            accurate: false,
        }
    }
}
