//! # Scales
//!
//! Seven-note scales built from a root and one of three interval patterns:
//!
//! | Type             | Intervals above root  | A-rooted example    |
//! |------------------|-----------------------|---------------------|
//! | `minor`          | 2 3 5 7 8 10          | A B C D E F G       |
//! | `major`          | 2 4 5 7 9 11          | A B C# D E F# G#    |
//! | `harmonic minor` | 2 3 5 7 8 11          | A B C D E F G#      |
//!
//! ## Diatonic Harmonization
//! [`Scale::degree_chords()`] stacks three thirds on every scale degree using only
//! scale notes, which gives the familiar seventh chords:
//!
//! ```rust
//! use scalemate::{PitchClass, Scale, ScaleType};
//!
//! let scale = Scale::new(PitchClass::C, ScaleType::Major);
//! let names: Vec<String> = scale.degree_chords()?.iter().map(|c| c.name()).collect();
//! assert_eq!(names, ["Cmaj7", "Dmin7", "Emin7", "Fmaj7", "G7", "Amin7", "Bmin7b5"]);
//! # Ok::<(), scalemate::ScaleMateError>(())
//! ```

use crate::chord::Chord;
use crate::error::ScaleMateError;
use crate::note::PitchClass;
use std::fmt;
use std::str::FromStr;

const MAJOR_THIRD: u32 = 4;
const MINOR_THIRD: u32 = 3;

/// Supported scale types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaleType {
    Minor,
    HarmonicMinor,
    Major,
}

impl ScaleType {
    pub const ALL: [ScaleType; 3] = [ScaleType::Minor, ScaleType::HarmonicMinor, ScaleType::Major];

    /// Semitone offsets of degrees 2..=7 above the root
    pub fn intervals(self) -> &'static [u32; 6] {
        match self {
            ScaleType::Minor => &[2, 3, 5, 7, 8, 10],
            ScaleType::HarmonicMinor => &[2, 3, 5, 7, 8, 11],
            ScaleType::Major => &[2, 4, 5, 7, 9, 11],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScaleType::Minor => "minor",
            ScaleType::HarmonicMinor => "harmonic minor",
            ScaleType::Major => "major",
        }
    }
}

impl FromStr for ScaleType {
    type Err = ScaleMateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| ScaleMateError::UnsupportedScaleType {
                label: s.to_string(),
            })
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale {
    root: PitchClass,
    scale_type: ScaleType,
    notes: [PitchClass; 7],
}

impl Scale {
    pub fn new(root: PitchClass, scale_type: ScaleType) -> Self {
        let mut notes = [root; 7];
        for (note, interval) in notes[1..].iter_mut().zip(scale_type.intervals()) {
            *note = root.add(*interval);
        }
        Self {
            root,
            scale_type,
            notes,
        }
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    pub fn scale_type(&self) -> ScaleType {
        self.scale_type
    }

    /// Scale notes ordered by degree, starting at the root
    pub fn notes(&self) -> &[PitchClass; 7] {
        &self.notes
    }

    pub fn contains(&self, note: PitchClass) -> bool {
        self.notes.contains(&note)
    }

    /// 1-based scale degree of `note`, if it belongs to the scale
    pub fn degree_of(&self, note: PitchClass) -> Option<usize> {
        self.notes.iter().position(|n| *n == note).map(|i| i + 1)
    }

    /// Note `steps` degrees above the 0-based degree `index`, wrapping at the octave
    fn note_above(&self, index: usize, steps: usize) -> PitchClass {
        self.notes[(index + steps) % self.notes.len()]
    }

    /// One seventh chord per scale degree, built from scale notes only.
    ///
    /// Each chord tone is the scale note two degrees above the previous one. The
    /// third between them is tried as a major third first, then as a minor third;
    /// a degree where neither fits fails with [`ScaleMateError::ChordDerivation`].
    pub fn degree_chords(&self) -> Result<Vec<Chord>, ScaleMateError> {
        (0..self.notes.len())
            .map(|degree| self.chord_on_degree(degree))
            .collect()
    }

    fn chord_on_degree(&self, degree: usize) -> Result<Chord, ScaleMateError> {
        let root = self.notes[degree];
        let mut current = root;
        let mut offset = 0;
        let mut intervals = Vec::with_capacity(3);

        for step in 1..=3 {
            let target = self.note_above(degree, 2 * step);
            let third = [MAJOR_THIRD, MINOR_THIRD]
                .into_iter()
                .find(|third| current.add(*third) == target)
                .ok_or_else(|| ScaleMateError::ChordDerivation {
                    scale: self.name(),
                    degree: degree + 1,
                })?;
            offset += third;
            current = target;
            intervals.push(offset);
        }

        Chord::from_intervals(root, &intervals)
    }

    /// Human readable name, e.g. `A harmonic minor`
    pub fn name(&self) -> String {
        format!("{} {}", self.root, self.scale_type)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root, self.scale_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn spelled(scale: &Scale) -> Vec<String> {
        scale.notes().iter().map(|n| n.to_string()).collect()
    }

    fn chord_names(scale: &Scale) -> Vec<String> {
        scale
            .degree_chords()
            .unwrap()
            .iter()
            .map(|c| c.name())
            .collect()
    }

    #[test]
    fn test_natural_minor_scale() {
        let scale = Scale::new(PitchClass::A, ScaleType::Minor);
        assert_eq!(spelled(&scale), ["A", "B", "C", "D", "E", "F", "G"]);
    }

    #[test]
    fn test_major_scale() {
        let scale = Scale::new(PitchClass::C, ScaleType::Major);
        assert_eq!(spelled(&scale), ["C", "D", "E", "F", "G", "A", "B"]);
    }

    #[test]
    fn test_harmonic_minor_scale() {
        let scale = Scale::new(PitchClass::A, ScaleType::HarmonicMinor);
        assert_eq!(spelled(&scale), ["A", "B", "C", "D", "E", "F", "G#"]);
    }

    #[test]
    fn test_every_scale_has_seven_unique_notes() {
        for root in PitchClass::ALL {
            for scale_type in ScaleType::ALL {
                let scale = Scale::new(root, scale_type);
                assert_eq!(scale.notes()[0], root);

                let mut unique = scale.notes().to_vec();
                unique.sort();
                unique.dedup();
                assert_eq!(unique.len(), 7, "{}", scale);

                let members = PitchClass::ALL.iter().filter(|n| scale.contains(**n)).count();
                assert_eq!(members, 7, "{}", scale);
            }
        }
    }

    #[test]
    fn test_contains() {
        let scale = Scale::new(PitchClass::A, ScaleType::Minor);
        assert!(scale.contains(PitchClass::C));
        assert!(!scale.contains(PitchClass::CSharp));
    }

    #[test]
    fn test_degree_of() {
        let scale = Scale::new(PitchClass::C, ScaleType::Major);
        assert_eq!(scale.degree_of(PitchClass::C), Some(1));
        assert_eq!(scale.degree_of(PitchClass::G), Some(5));
        assert_eq!(scale.degree_of(PitchClass::B), Some(7));
        assert_eq!(scale.degree_of(PitchClass::FSharp), None);
    }

    #[test]
    fn test_scale_type_labels() {
        assert_eq!("minor".parse::<ScaleType>().unwrap(), ScaleType::Minor);
        assert_eq!("harmonic minor".parse::<ScaleType>().unwrap(), ScaleType::HarmonicMinor);
        assert_eq!("major".parse::<ScaleType>().unwrap(), ScaleType::Major);

        for label in ["Major", "Foo", "natural minor", "harmonic  minor", ""] {
            assert!(matches!(
                label.parse::<ScaleType>(),
                Err(ScaleMateError::UnsupportedScaleType { .. })
            ));
        }
    }

    #[test]
    fn test_name() {
        assert_eq!(Scale::new(PitchClass::A, ScaleType::Minor).name(), "A minor");
        assert_eq!(
            Scale::new(PitchClass::CSharp, ScaleType::HarmonicMinor).name(),
            "C# harmonic minor"
        );
    }

    #[test]
    fn test_major_scale_chords() {
        let scale = Scale::new(PitchClass::C, ScaleType::Major);
        assert_eq!(
            chord_names(&scale),
            ["Cmaj7", "Dmin7", "Emin7", "Fmaj7", "G7", "Amin7", "Bmin7b5"]
        );
    }

    #[test]
    fn test_minor_scale_chords() {
        let scale = Scale::new(PitchClass::A, ScaleType::Minor);
        assert_eq!(
            chord_names(&scale),
            ["Amin7", "Bmin7b5", "Cmaj7", "Dmin7", "Emin7", "Fmaj7", "G7"]
        );
    }

    #[test]
    fn test_harmonic_minor_chords() {
        // Minor-major 7th, augmented major 7th and diminished 7th have no name
        let scale = Scale::new(PitchClass::A, ScaleType::HarmonicMinor);
        assert_eq!(
            chord_names(&scale),
            ["A", "Bmin7b5", "C", "Dmin7", "E7", "Fmaj7", "G#"]
        );

        let chords = scale.degree_chords().unwrap();
        assert_eq!(chords[2].intervals(), &[4, 8, 11]);
        assert_eq!(chords[6].intervals(), &[3, 6, 9]);
    }

    #[test]
    fn test_degree_chords_use_scale_notes_only() {
        for root in PitchClass::ALL {
            for scale_type in ScaleType::ALL {
                let scale = Scale::new(root, scale_type);
                let chords = scale.degree_chords().unwrap();
                assert_eq!(chords.len(), 7);
                for (degree, chord) in chords.iter().enumerate() {
                    assert_eq!(chord.root(), scale.notes()[degree]);
                    assert_eq!(chord.notes().len(), 4);
                    assert!(chord.notes().iter().all(|n| scale.contains(*n)));
                }
            }
        }
    }
}
