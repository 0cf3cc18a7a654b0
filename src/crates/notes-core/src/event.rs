use serde::Serialize;
use std::fmt;

use crate::duration::DurationSymbol;
use crate::pitch::Pitch;

/// A completed note, created when a release closes an open note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NoteEvent {
    #[serde(flatten)]
    pub pitch: Pitch,
    pub duration: DurationSymbol,
    /// Unquantized length, kept for structured output
    #[serde(rename = "ticks")]
    pub duration_ticks: u64,
}

impl fmt::Display for NoteEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pitch, self.duration)
    }
}
