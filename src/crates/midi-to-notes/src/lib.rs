//! MIDI to note text converter library
//!
//! Reads a Standard MIDI File with midly, adapts each track into
//! [`notes_core::TrackMessage`] values and writes one
//! `<pitch> <octave> <duration>` line per completed note.

pub mod midi;
pub mod output;

#[cfg(test)]
mod test_util;

pub use midi::{MidiData, TrackData};
pub use output::{OutputFormat, OutputFormatter};
