//! Helpers for building Standard MIDI Files in tests

use midly::num::{u15, u28, u4, u7};
use midly::{Format, Header, MetaMessage, MidiMessage, Smf, Timing, TrackEvent, TrackEventKind};

fn midi(delta: u32, channel: u8, message: MidiMessage) -> TrackEvent<'static> {
    TrackEvent {
        delta: u28::new(delta),
        kind: TrackEventKind::Midi {
            channel: u4::new(channel),
            message,
        },
    }
}

pub fn note_on(delta: u32, key: u8, vel: u8) -> TrackEvent<'static> {
    note_on_channel(delta, 0, key, vel)
}

pub fn note_on_channel(delta: u32, channel: u8, key: u8, vel: u8) -> TrackEvent<'static> {
    midi(
        delta,
        channel,
        MidiMessage::NoteOn {
            key: u7::new(key),
            vel: u7::new(vel),
        },
    )
}

/// NoteOn with velocity 0
pub fn running_off(delta: u32, key: u8) -> TrackEvent<'static> {
    note_on(delta, key, 0)
}

pub fn note_off(delta: u32, key: u8) -> TrackEvent<'static> {
    note_off_channel(delta, 0, key)
}

pub fn note_off_channel(delta: u32, channel: u8, key: u8) -> TrackEvent<'static> {
    midi(
        delta,
        channel,
        MidiMessage::NoteOff {
            key: u7::new(key),
            vel: u7::new(64),
        },
    )
}

pub fn controller(delta: u32, channel: u8) -> TrackEvent<'static> {
    midi(
        delta,
        channel,
        MidiMessage::Controller {
            controller: u7::new(7),
            value: u7::new(100),
        },
    )
}

/// Serialize tracks into an SMF byte stream, closing each with EndOfTrack
pub fn build_smf(ticks_per_beat: u16, tracks: Vec<Vec<TrackEvent<'static>>>) -> Vec<u8> {
    let format = if tracks.len() > 1 {
        Format::Parallel
    } else {
        Format::SingleTrack
    };
    let header = Header::new(format, Timing::Metrical(u15::new(ticks_per_beat)));

    let mut smf = Smf::new(header);
    for mut track in tracks {
        track.push(TrackEvent {
            delta: u28::new(0),
            kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
        });
        smf.tracks.push(track);
    }

    let mut bytes = Vec::new();
    smf.write_std(&mut bytes).unwrap();
    bytes
}
