use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Named note lengths, from whole note down to sixty-fourth note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum DurationSymbol {
    #[serde(rename = "w")]
    Whole,
    #[serde(rename = "h")]
    Half,
    #[serde(rename = "q")]
    Quarter,
    #[serde(rename = "e")]
    Eighth,
    #[serde(rename = "s")]
    Sixteenth,
    #[serde(rename = "t")]
    ThirtySecond,
    #[serde(rename = "sf")]
    SixtyFourth,
}

/// Beat values and their symbols. The order here is the lookup order used
/// by [`quantize`], so an input exactly between two entries picks the
/// earlier (longer) one.
pub const DURATION_TABLE: [(f64, DurationSymbol); 7] = [
    (4.0, DurationSymbol::Whole),
    (2.0, DurationSymbol::Half),
    (1.0, DurationSymbol::Quarter),
    (0.5, DurationSymbol::Eighth),
    (0.25, DurationSymbol::Sixteenth),
    (0.125, DurationSymbol::ThirtySecond),
    (0.0625, DurationSymbol::SixtyFourth),
];

impl DurationSymbol {
    pub const ALL: [DurationSymbol; 7] = [
        DurationSymbol::Whole,
        DurationSymbol::Half,
        DurationSymbol::Quarter,
        DurationSymbol::Eighth,
        DurationSymbol::Sixteenth,
        DurationSymbol::ThirtySecond,
        DurationSymbol::SixtyFourth,
    ];

    /// Text code written to the output ("w", "h", ..., "sf")
    pub fn symbol(self) -> &'static str {
        match self {
            DurationSymbol::Whole => "w",
            DurationSymbol::Half => "h",
            DurationSymbol::Quarter => "q",
            DurationSymbol::Eighth => "e",
            DurationSymbol::Sixteenth => "s",
            DurationSymbol::ThirtySecond => "t",
            DurationSymbol::SixtyFourth => "sf",
        }
    }

    /// Length in beats (quarter note = 1.0)
    pub fn beats(self) -> f64 {
        match self {
            DurationSymbol::Whole => 4.0,
            DurationSymbol::Half => 2.0,
            DurationSymbol::Quarter => 1.0,
            DurationSymbol::Eighth => 0.5,
            DurationSymbol::Sixteenth => 0.25,
            DurationSymbol::ThirtySecond => 0.125,
            DurationSymbol::SixtyFourth => 0.0625,
        }
    }
}

/// Snap a length in beats to the nearest named duration.
///
/// There is no clamping: anything longer than a whole note becomes `w`,
/// anything shorter than a sixty-fourth becomes `sf`, and zero-length
/// notes are accepted too.
pub fn quantize(beats: f64) -> DurationSymbol {
    let (first_value, first_symbol) = DURATION_TABLE[0];
    let mut best = first_symbol;
    let mut best_distance = (first_value - beats).abs();

    for &(value, symbol) in &DURATION_TABLE[1..] {
        let distance = (value - beats).abs();
        // Strict comparison keeps the earlier entry on ties
        if distance < best_distance {
            best = symbol;
            best_distance = distance;
        }
    }

    best
}

impl fmt::Display for DurationSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for DurationSymbol {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DurationSymbol::ALL
            .into_iter()
            .find(|d| d.symbol() == s)
            .ok_or_else(|| CoreError::UnknownDurationSymbol(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_exact_values() {
        for (beats, symbol) in DURATION_TABLE {
            assert_eq!(quantize(beats), symbol);
            assert_eq!(symbol.beats(), beats);
        }
    }

    #[test]
    fn test_nearest() {
        assert_eq!(quantize(0.9), DurationSymbol::Quarter);
        assert_eq!(quantize(1.4), DurationSymbol::Quarter);
        assert_eq!(quantize(1.6), DurationSymbol::Half);
        assert_eq!(quantize(0.3), DurationSymbol::Sixteenth);
    }

    #[test]
    fn test_ties_pick_longer() {
        assert_eq!(quantize(3.0), DurationSymbol::Whole);
        assert_eq!(quantize(1.5), DurationSymbol::Half);
        assert_eq!(quantize(0.75), DurationSymbol::Quarter);
        assert_eq!(quantize(0.375), DurationSymbol::Eighth);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(quantize(20.0), DurationSymbol::Whole);
        assert_eq!(quantize(0.001), DurationSymbol::SixtyFourth);
        assert_eq!(quantize(0.0), DurationSymbol::SixtyFourth);
    }

    #[test]
    fn test_symbol_round_trip() {
        assert_eq!("sf".parse::<DurationSymbol>(), Ok(DurationSymbol::SixtyFourth));
        assert_eq!("q".parse::<DurationSymbol>(), Ok(DurationSymbol::Quarter));
        assert_eq!(
            "x".parse::<DurationSymbol>(),
            Err(CoreError::UnknownDurationSymbol("x".to_string()))
        );
    }

    proptest! {
        #[test]
        fn quantize_stays_in_table(beats in 0.0f64..64.0) {
            let symbol = quantize(beats);
            prop_assert!(DurationSymbol::ALL.contains(&symbol));
        }

        #[test]
        fn shorter_input_never_gives_longer_symbol(a in 0.0f64..8.0, b in 0.0f64..8.0) {
            let (long, short) = if a >= b { (a, b) } else { (b, a) };
            // Ord on the enum runs from Whole (smallest) to SixtyFourth
            prop_assert!(quantize(short) >= quantize(long));
        }
    }
}
