//! # Error Types
//!
//! This module defines all error types for scalemate.
//!
//! Every error carries the offending input (note spelling, string number, file path)
//! so the caller can report it without extra bookkeeping.
//!
//! ## Error Types
//! - `UnknownNote` - Text is not one of the 12 canonical note spellings
//! - `UnsupportedScaleType` - Scale label is not `minor`, `harmonic minor` or `major`
//! - `UnknownChord` - Chord name has no known suffix or an invalid root
//! - `InvalidString` - String number outside the fretboard
//! - `TooManyFrets` / `CanvasTooLarge` - Requested diagram is too big to draw
//! - `ChordDerivation` - A scale degree could not be harmonized with stacked thirds
//! - `FontUnavailable` / `InvalidFont` - Rendering could not load its font
//!
//! ## Usage
//! ```rust
//! use scalemate::{new_scale, ScaleMateError};
//!
//! match new_scale("Db", "major") {
//!     Ok(scale) => println!("{}", scale.name()),
//!     Err(ScaleMateError::UnknownNote { name }) => eprintln!("no such note: {}", name),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaleMateError {
    /// Note spelling is not one of `A A# B C C# D D# E F F# G G#`.
    ///
    /// # Example
    /// ```
    /// # use scalemate::ScaleMateError;
    /// let err = ScaleMateError::UnknownNote { name: "Db".to_string() };
    /// assert_eq!(err.to_string(), "Note does not exist: Db");
    /// ```
    #[error("Note does not exist: {name}")]
    UnknownNote { name: String },

    #[error("Scale type {label} is not supported")]
    UnsupportedScaleType { label: String },

    /// Scale specification must be `<root> <type>`, e.g. `C# harmonic minor`.
    #[error("Invalid scale specification: {0}")]
    InvalidScaleSpec(String),

    #[error("Unknown chord: {name}")]
    UnknownChord { name: String },

    /// Chord intervals must be strictly increasing and within one octave (1..=11).
    #[error("Invalid chord intervals: {intervals:?}")]
    InvalidChordIntervals { intervals: Vec<u32> },

    /// A tuning needs at least one string.
    #[error("Tuning must contain at least one note")]
    EmptyTuning,

    /// String number outside `[1, strings]`.
    ///
    /// # Example
    /// ```
    /// # use scalemate::ScaleMateError;
    /// let err = ScaleMateError::InvalidString { string: 7, strings: 6 };
    /// assert_eq!(err.to_string(), "String 7 is invalid (fretboard has 6 strings)");
    /// ```
    #[error("String {string} is invalid (fretboard has {strings} strings)")]
    InvalidString { string: u32, strings: u32 },

    #[error("{frets} frets requested, at most {max} are supported")]
    TooManyFrets { frets: u32, max: u32 },

    /// Diagram dimensions exceed the largest canvas the renderer allocates.
    #[error("Diagram of {width}x{height} pixels is too large")]
    CanvasTooLarge { width: u64, height: u64 },

    /// Harmonizing a scale degree could not find an in-scale third.
    ///
    /// Never raised for the built-in scale types; seeing it means the scale
    /// tables are broken.
    #[error("Cannot derive chord on degree {degree} of {scale}")]
    ChordDerivation { scale: String, degree: usize },

    #[error("No usable font found (searched: {searched:?})")]
    FontUnavailable { searched: Vec<PathBuf> },

    #[error("Invalid font file {path:?}")]
    InvalidFont { path: PathBuf },

    #[error("Image encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ScaleMateError {
    /// Whether the error was caused by bad user input rather than the environment.
    ///
    /// The HTTP layer answers these with `400 Bad Request`, everything else with
    /// `500 Internal Server Error`.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ScaleMateError::UnknownNote { .. }
                | ScaleMateError::UnsupportedScaleType { .. }
                | ScaleMateError::InvalidScaleSpec(_)
                | ScaleMateError::UnknownChord { .. }
                | ScaleMateError::InvalidChordIntervals { .. }
                | ScaleMateError::EmptyTuning
                | ScaleMateError::InvalidString { .. }
                | ScaleMateError::TooManyFrets { .. }
                | ScaleMateError::CanvasTooLarge { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_classification() {
        assert!(ScaleMateError::UnknownNote { name: "H".to_string() }.is_client_error());
        assert!(ScaleMateError::EmptyTuning.is_client_error());
        assert!(ScaleMateError::TooManyFrets { frets: 100, max: 36 }.is_client_error());
        assert!(!ScaleMateError::FontUnavailable { searched: vec![] }.is_client_error());
        assert!(!ScaleMateError::ChordDerivation {
            scale: "C major".to_string(),
            degree: 1
        }
        .is_client_error());
    }
}
