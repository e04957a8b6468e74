//! # Public API
//!
//! Entry points for the command line and HTTP layers. Each function takes the raw
//! text a user typed and returns a typed value or a [`ScaleMateError`].
//!
//! ## Functions
//!
//! - [`parse_note()`] - `"C#"` to a [`PitchClass`]
//! - [`new_scale()`] - root and scale type labels to a [`Scale`]
//! - [`parse_scale_spec()`] - `"A harmonic minor"` to a [`Scale`]
//! - [`parse_chord()`] - `"Bmin7b5"` to a [`Chord`]
//! - [`new_fretboard()`] - tuning text and fret count to a [`Fretboard`]
//! - [`new_renderer()`] - fretboard and layout options to a [`Renderer`]
//! - [`summarize()`] - scale name, notes and diatonic chords for response payloads
//!
//! ## Typical Usage
//!
//! ```rust,no_run
//! use scalemate::{new_fretboard, new_renderer, new_scale, parse_chord};
//! use scalemate::{FretboardOptions, RenderOptions};
//!
//! let mut fretboard = new_fretboard(FretboardOptions {
//!     tuning: Some("E A D G B E".to_string()),
//!     frets: Some(12),
//! })?;
//! fretboard.highlight_scale(new_scale("A", "minor")?);
//! fretboard.highlight_chord(parse_chord("Amin7")?);
//!
//! let png = new_renderer(&fretboard, RenderOptions::default()).render_png()?;
//! # Ok::<(), scalemate::ScaleMateError>(())
//! ```

use crate::{
    Chord, Fretboard, FretboardOptions, PitchClass, RenderOptions, Renderer, Scale, ScaleMateError,
    ScaleType,
};
use serde::Serialize;

pub fn parse_note(text: &str) -> Result<PitchClass, ScaleMateError> {
    PitchClass::parse(text)
}

/// Build a scale from a root spelling and a type label.
///
/// The type label must be exactly `minor`, `harmonic minor` or `major`.
///
/// # Example
/// ```rust
/// use scalemate::new_scale;
///
/// let scale = new_scale("A", "harmonic minor")?;
/// assert_eq!(scale.name(), "A harmonic minor");
/// # Ok::<(), scalemate::ScaleMateError>(())
/// ```
pub fn new_scale(root: &str, scale_type: &str) -> Result<Scale, ScaleMateError> {
    let root = PitchClass::parse(root)?;
    let scale_type: ScaleType = scale_type.parse()?;
    Ok(Scale::new(root, scale_type))
}

/// Build a scale from `"<root> <type>"`, splitting at the first space.
///
/// # Example
/// ```rust
/// use scalemate::parse_scale_spec;
///
/// let scale = parse_scale_spec("C# harmonic minor")?;
/// assert_eq!(scale.notes()[6].to_string(), "C");
/// # Ok::<(), scalemate::ScaleMateError>(())
/// ```
pub fn parse_scale_spec(spec: &str) -> Result<Scale, ScaleMateError> {
    let (root, scale_type) = spec
        .trim()
        .split_once(' ')
        .ok_or_else(|| ScaleMateError::InvalidScaleSpec(spec.to_string()))?;
    new_scale(root, scale_type)
}

pub fn parse_chord(text: &str) -> Result<Chord, ScaleMateError> {
    Chord::parse(text)
}

pub fn new_fretboard(options: FretboardOptions) -> Result<Fretboard, ScaleMateError> {
    Fretboard::new(options)
}

pub fn new_renderer(fretboard: &Fretboard, options: RenderOptions) -> Renderer<'_> {
    Renderer::new(fretboard, options)
}

/// Scale metadata for inclusion in a response payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleSummary {
    pub name: String,
    pub notes: Vec<PitchClass>,
    /// Diatonic seventh chords, one per degree
    pub chords: Vec<String>,
}

pub fn summarize(scale: &Scale) -> Result<ScaleSummary, ScaleMateError> {
    Ok(ScaleSummary {
        name: scale.name(),
        notes: scale.notes().to_vec(),
        chords: scale.degree_chords()?.iter().map(Chord::name).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_scale_errors() {
        assert!(matches!(
            new_scale("M", "minor"),
            Err(ScaleMateError::UnknownNote { .. })
        ));
        assert!(matches!(
            new_scale("A", "Foo"),
            Err(ScaleMateError::UnsupportedScaleType { .. })
        ));
    }

    #[test]
    fn test_parse_scale_spec() {
        assert_eq!(parse_scale_spec("A minor").unwrap().name(), "A minor");
        assert_eq!(
            parse_scale_spec("G# harmonic minor").unwrap().name(),
            "G# harmonic minor"
        );
        assert!(matches!(
            parse_scale_spec("Aminor"),
            Err(ScaleMateError::InvalidScaleSpec(_))
        ));
        assert!(matches!(
            parse_scale_spec("A dorian"),
            Err(ScaleMateError::UnsupportedScaleType { .. })
        ));
    }

    #[test]
    fn test_summarize() {
        let summary = summarize(&new_scale("C", "major").unwrap()).unwrap();
        assert_eq!(summary.name, "C major");
        assert_eq!(summary.notes.len(), 7);
        assert_eq!(
            summary.chords,
            ["Cmaj7", "Dmin7", "Emin7", "Fmaj7", "G7", "Amin7", "Bmin7b5"]
        );
    }

    #[test]
    fn test_summary_json() {
        let summary = summarize(&new_scale("A", "minor").unwrap()).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["name"], "A minor");
        assert_eq!(json["notes"][6], "G");
        assert_eq!(json["chords"][1], "Bmin7b5");
    }
}
