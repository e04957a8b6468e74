//! # scalemate
//!
//! Scales, chords and tunings mapped onto a fretboard and drawn as PNG diagrams.
//!
//! ## Modules
//! - `note` - the 12 pitch classes and transposition
//! - `scale` - minor, harmonic minor and major scales, diatonic seventh chords
//! - `chord` - seventh chords, naming and parsing
//! - `fretboard` - tunings, fret positions and highlight classification
//! - `render` - diagram layout, rasterization and PNG encoding
//! - `api` - text-in entry points for the CLI and HTTP layers
//! - `config` - YAML configuration
//! - `web` - the `GET /scale` endpoint

pub mod api;
pub mod chord;
pub mod config;
pub mod error;
pub mod fretboard;
pub mod note;
pub mod render;
pub mod scale;
pub mod web;

pub use api::*;
pub use chord::Chord;
pub use config::Config;
pub use error::*;
pub use fretboard::{
    Fret, Fretboard, FretboardOptions, Highlight, Tuning, DEFAULT_FRETS, MAX_FRETS, STANDARD_TUNING,
};
pub use note::PitchClass;
pub use render::{DiagramLayout, DrawCommand, Palette, RenderOptions, Renderer};
pub use scale::{Scale, ScaleType};
