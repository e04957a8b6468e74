//! # Chords
//!
//! A chord is a root plus an ordered list of semitone offsets stacked on top of it.
//! Four seventh-chord qualities have names; any other interval list is still a valid
//! chord but is named by its bare root.
//!
//! | Quality          | Intervals    | Suffix   | Example    |
//! |------------------|--------------|----------|------------|
//! | Major 7th        | 4, 7, 11     | `maj7`   | `Cmaj7`    |
//! | Minor 7th        | 3, 7, 10     | `min7`   | `Dmin7`    |
//! | Dominant 7th     | 4, 7, 10     | `7`      | `G7`       |
//! | Half-diminished  | 3, 6, 10     | `min7b5` | `Bmin7b5`  |

use crate::error::ScaleMateError;
use crate::note::{PitchClass, SEMITONES};
use std::fmt;
use std::str::FromStr;

/// Named chord qualities, in lookup order
const CHORD_QUALITIES: [(&str, &[u32]); 4] = [
    ("maj7", &[4, 7, 11]),
    ("min7", &[3, 7, 10]),
    ("7", &[4, 7, 10]),
    ("min7b5", &[3, 6, 10]),
];

/// Suffixes tried when parsing, longest first so `7` never shadows `maj7`
const PARSE_SUFFIXES: [&str; 4] = ["min7b5", "maj7", "min7", "7"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    root: PitchClass,
    intervals: Vec<u32>,
    notes: Vec<PitchClass>,
}

impl Chord {
    /// Build a chord from a root and intervals above it.
    ///
    /// Intervals must be strictly increasing and inside the octave (1..=11).
    pub fn from_intervals(root: PitchClass, intervals: &[u32]) -> Result<Self, ScaleMateError> {
        let in_range = intervals.iter().all(|i| (1..SEMITONES).contains(i));
        let increasing = intervals.windows(2).all(|w| w[0] < w[1]);
        if !in_range || !increasing {
            return Err(ScaleMateError::InvalidChordIntervals {
                intervals: intervals.to_vec(),
            });
        }

        let notes = std::iter::once(root)
            .chain(intervals.iter().map(|i| root.add(*i)))
            .collect();

        Ok(Self {
            root,
            intervals: intervals.to_vec(),
            notes,
        })
    }

    /// Parse a chord name such as `Amin7`, `F#maj7`, `G7` or `Bmin7b5`
    pub fn parse(text: &str) -> Result<Self, ScaleMateError> {
        let unknown = || ScaleMateError::UnknownChord {
            name: text.to_string(),
        };

        let (root, suffix) = PARSE_SUFFIXES
            .iter()
            .find_map(|suffix| text.strip_suffix(suffix).map(|root| (root, *suffix)))
            .ok_or_else(unknown)?;
        let root = PitchClass::parse(root).map_err(|_| unknown())?;
        let intervals = CHORD_QUALITIES
            .iter()
            .find(|(name, _)| *name == suffix)
            .map(|(_, intervals)| *intervals)
            .ok_or_else(unknown)?;

        Self::from_intervals(root, intervals)
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    pub fn intervals(&self) -> &[u32] {
        &self.intervals
    }

    /// Root followed by each interval applied to it
    pub fn notes(&self) -> &[PitchClass] {
        &self.notes
    }

    pub fn contains(&self, note: PitchClass) -> bool {
        self.notes.contains(&note)
    }

    /// Suffix of the first quality whose intervals match exactly, or `""`
    pub fn suffix(&self) -> &'static str {
        CHORD_QUALITIES
            .iter()
            .find(|(_, intervals)| *intervals == self.intervals.as_slice())
            .map(|(suffix, _)| *suffix)
            .unwrap_or("")
    }

    /// Root spelling plus quality suffix, e.g. `Bmin7b5`
    pub fn name(&self) -> String {
        format!("{}{}", self.root, self.suffix())
    }
}

impl FromStr for Chord {
    type Err = ScaleMateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.suffix())
    }
}
