// Common helpers for integration tests

#![allow(dead_code)]

use musicsummary::helpers::StatusSource;
use musicsummary::players::PositionProbe;
use std::io;
use std::sync::{Arc, Mutex};

/// Status source whose text can be swapped between polls
#[derive(Clone, Default)]
pub struct ScriptedSource {
    text: Arc<Mutex<String>>,
}

impl ScriptedSource {
    pub fn new(text: &str) -> Self {
        Self {
            text: Arc::new(Mutex::new(text.to_string())),
        }
    }

    pub fn set(&self, text: &str) {
        *self.text.lock().unwrap() = text.to_string();
    }
}

impl StatusSource for ScriptedSource {
    fn read_status(&self) -> io::Result<String> {
        Ok(self.text.lock().unwrap().clone())
    }

    fn describe(&self) -> String {
        "scripted".to_string()
    }
}

/// Probe whose answers are set by the test
#[derive(Clone, Default)]
pub struct ScriptedProbe {
    running: Arc<Mutex<bool>>,
    position: Arc<Mutex<Option<u32>>>,
    calls: Arc<Mutex<u32>>,
}

impl ScriptedProbe {
    pub fn running_at(position: u32) -> Self {
        let probe = Self::default();
        probe.set(true, Some(position));
        probe
    }

    pub fn set(&self, running: bool, position: Option<u32>) {
        *self.running.lock().unwrap() = running;
        *self.position.lock().unwrap() = position;
    }

    pub fn calls(&self) -> u32 {
        *self.calls.lock().unwrap()
    }
}

impl PositionProbe for ScriptedProbe {
    fn is_running(&self) -> bool {
        *self.running.lock().unwrap()
    }

    fn is_playing(&self) -> bool {
        self.is_running()
    }

    fn current_position(&self) -> Option<u32> {
        *self.calls.lock().unwrap() += 1;
        *self.position.lock().unwrap()
    }

    fn probe_name(&self) -> String {
        "scripted".to_string()
    }
}

/// Build a status dump for a loaded track
pub fn dump(title_with_year: &str, artist: &str, position_length: &str, lyrics: &str) -> String {
    format!(
        "[Playing]\n{}\n{}\nParis\n{} Paris    6%     ★★½\nrated\nart/cover.jpg\n{}\n{}\n",
        title_with_year, artist, artist, position_length, lyrics
    )
}

/// Dump written while nothing is loaded
pub const NOTHING_PLAYING: &str = "[Stopped]\n\n(null)\n\n\nnoRating\n\n0/0\n";
