use std::io;
use std::sync::{Mutex, MutexGuard};
use log::{debug, info, warn};
use thiserror::Error;

use crate::constants::TEST_POSITION_MARKER;
use crate::data::{EncodedSummary, Summary, VersionError, VersionTag};
use crate::helpers::status_parser::FormatError;
use crate::helpers::status_reader::StatusSource;
use crate::helpers::url_encoding::encode_value;
use crate::players::{PlaybackPositionState, PositionProbe};
use crate::summary::assembler::assemble;
use crate::summary::poll::poll;

/// Errors that prevent a summary from being produced
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("{0}")]
    Format(#[from] FormatError),

    #[error("{0}")]
    Version(#[from] VersionError),

    #[error("Status read error: {0}")]
    Read(#[from] io::Error),
}

impl SummaryError {
    /// HTTP status reported to clients for this error
    pub fn status_code(&self) -> u16 {
        match self {
            SummaryError::Format(_) => 503,
            SummaryError::Version(_) => 400,
            SummaryError::Read(_) => 503,
        }
    }
}

/// Serialized owner of the playback position state.
///
/// Every poll (read, optional probe, parse, tracker transition) runs under
/// one lock, so the state sees exactly one mutation per poll even when the
/// HTTP layer serves requests in parallel. The test fixture has its own
/// state so that fixture polls never disturb the live song.
pub struct SummaryService {
    source: Box<dyn StatusSource>,
    test_source: Option<Box<dyn StatusSource>>,
    probe: Box<dyn PositionProbe>,
    state: Mutex<PlaybackPositionState>,
    test_state: Mutex<PlaybackPositionState>,
}

impl SummaryService {
    pub fn new(source: Box<dyn StatusSource>, probe: Box<dyn PositionProbe>) -> Self {
        Self {
            source,
            test_source: None,
            probe,
            state: Mutex::new(PlaybackPositionState::new()),
            test_state: Mutex::new(PlaybackPositionState::new()),
        }
    }

    /// Add the fixture source served by the test route
    pub fn with_test_source(mut self, test_source: Box<dyn StatusSource>) -> Self {
        self.test_source = Some(test_source);
        self
    }

    /// Produce the encoded summary for a client request.
    ///
    /// The version is validated before anything is read.
    pub fn summary(
        &self,
        requested_version: Option<&str>,
        want_accurate: bool,
    ) -> Result<EncodedSummary, SummaryError> {
        let version = VersionTag::from_request(requested_version)?;
        let summary = self.poll_source(self.source.as_ref(), &self.state, version, want_accurate)?;
        Ok(assemble(&summary))
    }

    /// Like `summary`, but against the test fixture and with a fixed position
    pub fn test_summary(
        &self,
        requested_version: Option<&str>,
        want_accurate: bool,
    ) -> Result<EncodedSummary, SummaryError> {
        let version = VersionTag::from_request(requested_version)?;
        let source = self.test_source.as_deref().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "no test status source configured")
        })?;

        let summary = self.poll_source(source, &self.test_state, version, want_accurate)?;
        let mut encoded = assemble(&summary);
        encoded.replace("Position", encode_value(TEST_POSITION_MARKER));
        Ok(encoded)
    }

    /// Prime the position state once at startup.
    ///
    /// Accuracy is requested only if the player is currently playing.
    /// Failures are logged and otherwise ignored.
    pub fn warm_up(&self) {
        let accurate = self.probe.is_playing();
        match self.summary(None, accurate) {
            Ok(encoded) => match serde_json::to_string(&encoded) {
                Ok(json) => debug!("Initial summary: {}", json),
                Err(e) => warn!("Cannot serialize initial summary: {}", e),
            },
            Err(e) => warn!("Initial summary failed: {}", e),
        }
    }

    /// Snapshot of the live position state, for diagnostics
    pub fn position_state(&self) -> PlaybackPositionState {
        lock_state(&self.state).clone()
    }

    fn poll_source(
        &self,
        source: &dyn StatusSource,
        state: &Mutex<PlaybackPositionState>,
        version: VersionTag,
        want_accurate: bool,
    ) -> Result<Summary, SummaryError> {
        let mut state = lock_state(state);

        let text = source.read_status().map_err(|e| {
            warn!("Cannot read status from {}: {}", source.describe(), e);
            e
        })?;

        if want_accurate {
            self.request_accurate_position(&mut state);
        }

        let summary = poll(&mut state, &text, version).map_err(|e| {
            warn!("{} ({})", e, source.describe());
            e
        })?;
        Ok(summary)
    }

    fn request_accurate_position(&self, state: &mut PlaybackPositionState) {
        if state.has_pending() {
            return;
        }
        if !self.probe.is_running() {
            info!("Player not running, no accurate position from {}", self.probe.probe_name());
            return;
        }
        match self.probe.current_position() {
            Some(position) => state.offer_probe_result(position),
            None => debug!("Probe {} returned no position", self.probe.probe_name()),
        }
    }
}

fn lock_state(state: &Mutex<PlaybackPositionState>) -> MutexGuard<'_, PlaybackPositionState> {
    // The state is plain data; a panic elsewhere cannot leave it half-written
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
