//! # Pitch Classes
//!
//! The 12 equal-tempered pitch classes, spelled with sharps only and ordered from A:
//!
//! ```text
//! index:  0  1   2  3  4   5  6   7  8  9   10 11
//! note:   A  A#  B  C  C#  D  D#  E  F  F#  G  G#
//! ```
//!
//! Transposition is modular: adding 12 semitones (or any multiple) returns the same
//! pitch class. There are no flats and no enharmonic spellings; `"Db"` is rejected,
//! `"C#"` is the only way to name that pitch class.

use crate::error::ScaleMateError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Number of pitch classes in the octave
pub const SEMITONES: u32 = 12;

/// One of the 12 equal-tempered pitch classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PitchClass {
    A = 0,
    ASharp,
    B,
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
}

impl PitchClass {
    /// All pitch classes in canonical order
    pub const ALL: [PitchClass; 12] = [
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
    ];

    /// Canonical spellings, indexed like [`PitchClass::ALL`]
    const NAMES: [&'static str; 12] = [
        "A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#",
    ];

    /// Parse a canonical note spelling (exact, case-sensitive)
    pub fn parse(name: &str) -> Result<Self, ScaleMateError> {
        Self::NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| Self::ALL[i])
            .ok_or_else(|| ScaleMateError::UnknownNote {
                name: name.to_string(),
            })
    }

    /// Position in canonical order (A = 0 .. G# = 11)
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Pitch class for an index, wrapping modulo 12
    pub fn from_index(index: u32) -> Self {
        Self::ALL[(index % SEMITONES) as usize]
    }

    /// Transpose up by `semitones`, wrapping around the octave.
    ///
    /// ```
    /// use scalemate::PitchClass;
    ///
    /// assert_eq!(PitchClass::E.add(5), PitchClass::A);
    /// assert_eq!(PitchClass::A.add(13), PitchClass::ASharp);
    /// ```
    pub fn add(self, semitones: u32) -> Self {
        Self::from_index(self.index() + semitones % SEMITONES)
    }

    /// Upward distance to `other` in semitones (0..=11)
    pub fn semitones_to(self, other: PitchClass) -> u32 {
        (other.index() + SEMITONES - self.index()) % SEMITONES
    }

    pub fn as_str(self) -> &'static str {
        Self::NAMES[self as usize]
    }
}

impl FromStr for PitchClass {
    type Err = ScaleMateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PitchClass {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
