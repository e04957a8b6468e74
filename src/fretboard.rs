//! # Fretboard
//!
//! Maps string/fret coordinates to pitch classes and classifies every position
//! against the highlighted scale and chord.
//!
//! ## String Numbering
//! Tunings are written low to high (`E A D G B E`), but strings are numbered the
//! way guitarists count them: string 1 is the highest-pitched string, which is the
//! last note of the tuning.
//!
//! ```text
//! tuning:  E  A  D  G  B  E
//! string:  6  5  4  3  2  1
//! ```
//!
//! ## Highlight Precedence
//! A position can match several highlights at once. Rendering uses the first
//! match of: scale root > chord member > scale member > none.

use crate::chord::Chord;
use crate::error::ScaleMateError;
use crate::note::PitchClass;
use crate::scale::Scale;
use log::debug;
use std::fmt;

/// Standard six-string guitar tuning
pub const STANDARD_TUNING: &str = "E A D G B E";

/// Fret count used when none is given
pub const DEFAULT_FRETS: u32 = 22;

/// Largest fret count [`Fretboard::new`] accepts
pub const MAX_FRETS: u32 = 36;

/// Open-string notes, ordered low to high as written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tuning {
    notes: Vec<PitchClass>,
}

impl Tuning {
    /// Parse a tuning such as `"E A D G B E"`, `"EADGBE"` or `"DADF#AD"`.
    ///
    /// Whitespace-separated text is split into tokens; text without whitespace is
    /// read one note at a time, each note being a letter with an optional `#`.
    pub fn parse(text: &str) -> Result<Self, ScaleMateError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ScaleMateError::EmptyTuning);
        }

        let notes = if text.contains(char::is_whitespace) {
            text.split_whitespace()
                .map(PitchClass::parse)
                .collect::<Result<Vec<_>, _>>()?
        } else {
            split_concatenated(text)
                .into_iter()
                .map(PitchClass::parse)
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(Self { notes })
    }

    pub fn standard() -> Self {
        Self {
            notes: vec![
                PitchClass::E,
                PitchClass::A,
                PitchClass::D,
                PitchClass::G,
                PitchClass::B,
                PitchClass::E,
            ],
        }
    }

    /// Open-string notes, low to high
    pub fn notes(&self) -> &[PitchClass] {
        &self.notes
    }

    pub fn strings(&self) -> u32 {
        self.notes.len() as u32
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Tuning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, note) in self.notes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", note)?;
        }
        Ok(())
    }
}

/// Split `"DADF#AD"` into `["D", "A", "D", "F#", "A", "D"]`
fn split_concatenated(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    for (i, c) in text.char_indices().skip(1) {
        if c != '#' {
            tokens.push(&text[start..i]);
            start = i;
        }
    }
    tokens.push(&text[start..]);
    tokens
}

/// Options for [`Fretboard::new`]; unset fields fall back to defaults
#[derive(Debug, Clone, Default)]
pub struct FretboardOptions {
    /// Tuning text, standard tuning if `None`
    pub tuning: Option<String>,
    /// Number of frets, [`DEFAULT_FRETS`] if `None` or zero, at most [`MAX_FRETS`]
    pub frets: Option<u32>,
}

/// How a position should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Root,
    ChordMember,
    ScaleMember,
    None,
}

/// Result of a fretboard position query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fret {
    pub number: u32,
    pub note: PitchClass,
    pub in_scale: bool,
    pub in_chord: bool,
    pub is_scale_root: bool,
}

impl Fret {
    pub fn highlight(&self) -> Highlight {
        if self.is_scale_root {
            Highlight::Root
        } else if self.in_chord {
            Highlight::ChordMember
        } else if self.in_scale {
            Highlight::ScaleMember
        } else {
            Highlight::None
        }
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlight() != Highlight::None
    }
}

#[derive(Debug, Clone)]
pub struct Fretboard {
    tuning: Tuning,
    frets: u32,
    scale: Option<Scale>,
    chord: Option<Chord>,
    /// Open-string notes indexed by string number - 1 (highest string first)
    open_strings: Vec<PitchClass>,
}

impl Fretboard {
    pub fn new(options: FretboardOptions) -> Result<Self, ScaleMateError> {
        let tuning = match options.tuning.as_deref() {
            Some(text) => Tuning::parse(text)?,
            None => Tuning::standard(),
        };
        let frets = match options.frets {
            Some(frets) if frets > 0 => frets,
            _ => DEFAULT_FRETS,
        };
        if frets > MAX_FRETS {
            return Err(ScaleMateError::TooManyFrets {
                frets,
                max: MAX_FRETS,
            });
        }
        debug!("fretboard: tuning {}, {} frets", tuning, frets);
        Ok(Self::with_tuning(tuning, frets))
    }

    pub fn with_tuning(tuning: Tuning, frets: u32) -> Self {
        let open_strings = tuning.notes().iter().rev().copied().collect();
        Self {
            tuning,
            frets,
            scale: None,
            chord: None,
            open_strings,
        }
    }

    pub fn highlight_scale(&mut self, scale: Scale) {
        self.scale = Some(scale);
    }

    pub fn highlight_chord(&mut self, chord: Chord) {
        self.chord = Some(chord);
    }

    pub fn clear_highlights(&mut self) {
        self.scale = None;
        self.chord = None;
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn strings(&self) -> u32 {
        self.tuning.strings()
    }

    pub fn frets(&self) -> u32 {
        self.frets
    }

    pub fn scale(&self) -> Option<&Scale> {
        self.scale.as_ref()
    }

    pub fn chord(&self) -> Option<&Chord> {
        self.chord.as_ref()
    }

    /// Open-string note of a string (1 = highest)
    pub fn open_note(&self, string: u32) -> Result<PitchClass, ScaleMateError> {
        self.open_strings
            .get((string as usize).wrapping_sub(1))
            .copied()
            .ok_or(ScaleMateError::InvalidString {
                string,
                strings: self.strings(),
            })
    }

    /// Note and highlight state at a position.
    ///
    /// The fret number is not checked against the fret count.
    pub fn fret(&self, string: u32, fret: u32) -> Result<Fret, ScaleMateError> {
        let note = self.open_note(string)?.add(fret);
        Ok(Fret {
            number: fret,
            note,
            in_scale: self.scale.as_ref().is_some_and(|s| s.contains(note)),
            in_chord: self.chord.as_ref().is_some_and(|c| c.contains(note)),
            is_scale_root: self.scale.as_ref().is_some_and(|s| s.root() == note),
        })
    }

    /// Diagram title: the highlighted scale's name, or a fixed label
    pub fn title(&self) -> String {
        match &self.scale {
            Some(scale) => scale.name(),
            None => "Empty fretboard".to_string(),
        }
    }
}

impl fmt::Display for Fretboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title())
    }
}
