use std::num::NonZeroU32;

use crate::error::{CoreError, Result};

/// The file-wide tick resolution. Never zero, so tick spans can always be
/// turned into beats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TicksPerBeat(NonZeroU32);

impl TicksPerBeat {
    pub fn new(ticks: u32) -> Result<Self> {
        NonZeroU32::new(ticks)
            .map(TicksPerBeat)
            .ok_or(CoreError::ZeroTicksPerBeat)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Convert a tick span into beats
    pub fn to_beats(self, ticks: u64) -> f64 {
        ticks as f64 / self.get() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero() {
        assert_eq!(TicksPerBeat::new(0), Err(CoreError::ZeroTicksPerBeat));
    }

    #[test]
    fn test_to_beats() {
        let tpb = TicksPerBeat::new(480).unwrap();
        assert_eq!(tpb.get(), 480);
        assert_eq!(tpb.to_beats(480), 1.0);
        assert_eq!(tpb.to_beats(240), 0.5);
        assert_eq!(tpb.to_beats(1920), 4.0);
        assert_eq!(tpb.to_beats(0), 0.0);
    }
}
