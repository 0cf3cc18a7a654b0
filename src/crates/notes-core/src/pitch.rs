use serde::Serialize;
use std::fmt;

/// Chromatic letter names, starting at C
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// A MIDI note number split into letter name and octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pitch {
    #[serde(rename = "pitch")]
    pub name: &'static str,
    pub octave: i32,
}

/// Resolve a MIDI note number to its pitch (e.g. 60 -> C 4, 69 -> A 4).
///
/// Octaves follow the convention where middle C (60) is octave 4, so the
/// lowest notes land in octave -1.
pub fn resolve(note_num: u8) -> Pitch {
    let name = NOTE_NAMES[(note_num % 12) as usize];
    let octave = (note_num / 12) as i32 - 1;

    Pitch { name, octave }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.octave)
    }
}
