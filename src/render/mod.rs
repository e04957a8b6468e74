//! # Rendering
//!
//! Turns a [`Fretboard`] into a PNG diagram.
//!
//! ## Pipeline
//! 1. [`DiagramLayout`] computes the canvas size and a display list of
//!    [`DrawCommand`]s (background, title, neck, labels, note markers)
//! 2. [`raster::rasterize`] draws the display list with `imageproc` and an
//!    `ab_glyph` font
//! 3. [`encode_png`] encodes the pixels
//!
//! Steps 1 and 2 are deterministic: the same fretboard, options and font always give
//! the same pixels.
//!
//! ## Example
//! ```rust,no_run
//! use scalemate::{Fretboard, FretboardOptions, RenderOptions, Renderer};
//!
//! let fretboard = Fretboard::new(FretboardOptions::default())?;
//! let png = Renderer::new(&fretboard, RenderOptions::default()).render_png()?;
//! std::fs::write("scale.png", png)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod layout;
pub mod raster;

pub use layout::{
    Anchor, DiagramLayout, DrawCommand, HEADSTOCK_ALLOWANCE, MARKER_RADIUS, MAX_CANVAS_SIDE,
};

use crate::error::ScaleMateError;
use crate::fretboard::Fretboard;
use ab_glyph::{Font, FontVec};
use image::{ImageFormat, RgbaImage};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// RGBA color
pub type Color = [u8; 4];

/// Fonts tried, in order, when no font path is configured
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Colors by role
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Palette {
    pub background: Color,
    /// Strings, frets and headstock outline
    pub grid: Color,
    /// Title, fret numbers and tuning labels
    pub text: Color,
    /// Marker for the scale's root note
    pub root: Color,
    /// Marker for notes of the highlighted chord
    pub chord: Color,
    /// Marker for the remaining scale notes
    pub scale: Color,
    /// Note names inside markers
    pub marker_text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [255, 255, 255, 255],
            grid: [0, 0, 0, 255],
            text: [0, 0, 0, 255],
            root: [173, 216, 230, 255],
            chord: [255, 140, 0, 255],
            scale: [0, 0, 0, 255],
            marker_text: [255, 255, 255, 255],
        }
    }
}

/// Layout configuration; the canvas size is derived from it and never set directly
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RenderOptions {
    pub margin_x: f32,
    pub margin_y: f32,
    pub string_spacing: f32,
    pub fret_spacing: f32,
    pub draw_title: bool,
    /// TrueType/OpenType font; the system fonts are searched when unset
    pub font_path: Option<PathBuf>,
    pub palette: Palette,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            margin_x: 40.0,
            margin_y: 50.0,
            string_spacing: 30.0,
            fret_spacing: 60.0,
            draw_title: true,
            font_path: None,
            palette: Palette::default(),
        }
    }
}

/// Load the font at `path`, or the first system font found
pub fn load_font(path: Option<&Path>) -> Result<FontVec, ScaleMateError> {
    let candidates: Vec<PathBuf> = match path {
        Some(path) => vec![path.to_path_buf()],
        None => SYSTEM_FONTS.iter().map(PathBuf::from).collect(),
    };

    let Some(path) = candidates.iter().find(|p| p.is_file()).cloned() else {
        return Err(ScaleMateError::FontUnavailable {
            searched: candidates,
        });
    };

    debug!("loading font {}", path.display());
    let bytes = fs::read(&path)?;
    FontVec::try_from_vec(bytes).map_err(|_| ScaleMateError::InvalidFont { path })
}

/// Encode an image as PNG
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ScaleMateError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Renders one fretboard snapshot
pub struct Renderer<'a> {
    fretboard: &'a Fretboard,
    options: RenderOptions,
}

impl<'a> Renderer<'a> {
    pub fn new(fretboard: &'a Fretboard, options: RenderOptions) -> Self {
        Self { fretboard, options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn layout(&self) -> DiagramLayout<'_> {
        DiagramLayout::new(self.fretboard, &self.options)
    }

    /// Load the configured font and draw the diagram
    pub fn render(&self) -> Result<RgbaImage, ScaleMateError> {
        let font = load_font(self.options.font_path.as_deref())?;
        self.render_with_font(&font)
    }

    /// Draw the diagram with an already loaded font
    pub fn render_with_font<F: Font>(&self, font: &F) -> Result<RgbaImage, ScaleMateError> {
        let layout = self.layout();
        let (width, height) = layout.canvas_size()?;
        let commands = layout.commands()?;
        Ok(raster::rasterize(&commands, width, height, font))
    }

    /// Draw the diagram and encode it as PNG
    pub fn render_png(&self) -> Result<Vec<u8>, ScaleMateError> {
        encode_png(&self.render()?)
    }
}
