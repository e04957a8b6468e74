//! # Configuration
//!
//! Optional YAML file holding defaults for the command line and the render layout.
//! Every key may be omitted; keys are kebab-case.
//!
//! ```yaml
//! scale: E minor
//! chord: Emin7
//! tuning: D A D G B E
//! frets: 15
//! render:
//!   margin-x: 40
//!   draw-title: true
//!   font-path: /usr/share/fonts/truetype/dejavu/DejaVuSans.ttf
//!   palette:
//!     root: [173, 216, 230, 255]
//! ```

use crate::error::ScaleMateError;
use crate::fretboard::STANDARD_TUNING;
use crate::render::RenderOptions;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Scale to highlight, `"<root> <type>"`
    pub scale: String,
    pub chord: Option<String>,
    pub tuning: String,
    pub frets: u32,
    pub render: RenderOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scale: "A minor".to_string(),
            chord: None,
            tuning: STANDARD_TUNING.to_string(),
            frets: 12,
            render: RenderOptions::default(),
        }
    }
}

impl Config {
    pub fn from_yaml(content: &str) -> Result<Self, ScaleMateError> {
        serde_yaml::from_str(content).map_err(|e| ScaleMateError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, ScaleMateError> {
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| ScaleMateError::Config(format!("{}: {}", path.display(), e)))
    }
}
