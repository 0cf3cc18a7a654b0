/// What a track message does, as far as note reconstruction cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    NoteOn { note: u8, velocity: u8 },
    NoteOff { note: u8, velocity: u8 },
    /// Meta events, controllers, sysex and everything else. These still
    /// advance time through their delta.
    Other,
}

/// One event of a track, with its delta time in ticks since the previous
/// event of the same track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackMessage {
    pub delta_ticks: u32,
    pub kind: MessageKind,
}

impl TrackMessage {
    pub fn note_on(delta_ticks: u32, note: u8, velocity: u8) -> Self {
        Self {
            delta_ticks,
            kind: MessageKind::NoteOn { note, velocity },
        }
    }

    pub fn note_off(delta_ticks: u32, note: u8) -> Self {
        Self {
            delta_ticks,
            kind: MessageKind::NoteOff { note, velocity: 0 },
        }
    }

    pub fn other(delta_ticks: u32) -> Self {
        Self {
            delta_ticks,
            kind: MessageKind::Other,
        }
    }

    /// The note this message starts, if any. A NoteOn with velocity 0 does
    /// not start a note.
    pub fn note_started(&self) -> Option<u8> {
        match self.kind {
            MessageKind::NoteOn { note, velocity } if velocity > 0 => Some(note),
            _ => None,
        }
    }

    /// The note this message releases: any NoteOff, or a NoteOn with
    /// velocity 0 (running status note-off).
    pub fn note_released(&self) -> Option<u8> {
        match self.kind {
            MessageKind::NoteOff { note, .. } => Some(note),
            MessageKind::NoteOn { note, velocity: 0 } => Some(note),
            _ => None,
        }
    }
}
