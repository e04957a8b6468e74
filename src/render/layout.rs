//! Diagram geometry and the display list.
//!
//! The neck is drawn "as seen by the player in a mirror": fret 1 sits next to the
//! nut on the right, higher frets extend to the left, and the headstock with the
//! tuning labels closes the diagram on the right.
//!
//! ```text
//!  margin_x                                   nut   headstock
//!     |                                        |  /-----\
//!     +------+------+------+-- ... --+------+--+ |  E   |   string 1
//!     +------+------+------+-- ... --+------+--+ |  B   |   string 2
//!     ...
//!    12     11     10      9    ...  1      0
//! ```

use super::{Color, RenderOptions};
use crate::error::ScaleMateError;
use crate::fretboard::{Fretboard, Highlight};
use log::debug;

/// Horizontal room reserved for the headstock and tuning labels
pub const HEADSTOCK_ALLOWANCE: f32 = 40.0;

pub const MARKER_RADIUS: f32 = 10.0;

/// Largest canvas width or height, in pixels
pub const MAX_CANVAS_SIDE: u32 = 16_384;

const TITLE_SIZE: f32 = 20.0;
const TUNING_SIZE: f32 = 14.0;
const MARKER_TEXT_SIZE: f32 = 12.0;
const FRET_NUMBER_SIZE: f32 = 11.0;
/// Distance from the lowest string to the fret numbers
const FRET_NUMBER_GAP: f32 = 18.0;

/// Horizontal reference point of a text command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Position is the left edge, vertically centered
    Left,
    /// Position is the center of the text
    Center,
}

/// One drawing operation, in canvas pixels
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill {
        color: Color,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        color: Color,
    },
    Circle {
        center: (f32, f32),
        radius: f32,
        color: Color,
    },
    Text {
        text: String,
        position: (f32, f32),
        size: f32,
        anchor: Anchor,
        color: Color,
    },
}

/// Geometry of one render of a fretboard
pub struct DiagramLayout<'a> {
    fretboard: &'a Fretboard,
    options: &'a RenderOptions,
}

impl<'a> DiagramLayout<'a> {
    pub fn new(fretboard: &'a Fretboard, options: &'a RenderOptions) -> Self {
        Self { fretboard, options }
    }

    pub fn width(&self) -> u64 {
        let neck = f64::from(self.fretboard.frets()) * f64::from(self.options.fret_spacing);
        let margins = 2.0 * f64::from(self.options.margin_x);
        (margins + neck + f64::from(HEADSTOCK_ALLOWANCE)).ceil() as u64
    }

    pub fn height(&self) -> u64 {
        let neck = f64::from(self.fretboard.strings()) * f64::from(self.options.string_spacing);
        (2.0 * f64::from(self.options.margin_y) + neck).ceil() as u64
    }

    /// Canvas dimensions, or an error when either side exceeds [`MAX_CANVAS_SIDE`]
    pub fn canvas_size(&self) -> Result<(u32, u32), ScaleMateError> {
        let (width, height) = (self.width(), self.height());
        match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) if w <= MAX_CANVAS_SIDE && h <= MAX_CANVAS_SIDE => Ok((w, h)),
            _ => Err(ScaleMateError::CanvasTooLarge { width, height }),
        }
    }

    /// Vertical position of a string (1 = top)
    pub fn string_y(&self, string: u32) -> f32 {
        self.options.margin_y + string as f32 * self.options.string_spacing
    }

    /// Horizontal position of fret boundary `k`, counted from the left edge of the neck
    pub fn boundary_x(&self, k: u32) -> f32 {
        self.options.margin_x + k as f32 * self.options.fret_spacing
    }

    pub fn nut_x(&self) -> f32 {
        self.boundary_x(self.fretboard.frets())
    }

    /// Center of the marker for a fretted note (fret >= 1)
    pub fn marker_center(&self, string: u32, fret: u32) -> (f32, f32) {
        let frets = self.fretboard.frets() as f32;
        let x = self.options.margin_x + (frets - fret as f32 + 0.5) * self.options.fret_spacing;
        (x, self.string_y(string))
    }

    /// Full display list, in drawing order
    pub fn commands(&self) -> Result<Vec<DrawCommand>, ScaleMateError> {
        let (width, height) = self.canvas_size()?;
        let palette = &self.options.palette;
        let mut commands = vec![DrawCommand::Fill {
            color: palette.background,
        }];

        if self.options.draw_title {
            commands.push(DrawCommand::Text {
                text: self.fretboard.title(),
                position: (self.options.margin_x, 0.75 * self.options.margin_y),
                size: TITLE_SIZE,
                anchor: Anchor::Left,
                color: palette.text,
            });
        }

        self.push_neck(&mut commands);
        self.push_fret_numbers(&mut commands);
        self.push_tuning(&mut commands)?;
        let markers = self.push_markers(&mut commands)?;

        debug!(
            "layout {}x{}: {} commands, {} markers",
            width,
            height,
            commands.len(),
            markers
        );
        Ok(commands)
    }

    fn push_neck(&self, commands: &mut Vec<DrawCommand>) {
        let color = self.options.palette.grid;
        let left = self.boundary_x(0);
        let nut = self.nut_x();
        let top = self.string_y(1);
        let bottom = self.string_y(self.fretboard.strings());

        for string in 1..=self.fretboard.strings() {
            let y = self.string_y(string);
            commands.push(DrawCommand::Line {
                from: (left, y),
                to: (nut, y),
                color,
            });
        }

        for k in 0..=self.fretboard.frets() {
            let x = self.boundary_x(k);
            commands.push(DrawCommand::Line {
                from: (x, top),
                to: (x, bottom),
                color,
            });
        }

        // Headstock widens away from the nut
        let spacing = self.options.string_spacing;
        let end = nut + HEADSTOCK_ALLOWANCE;
        let outline = [
            ((nut, top - 0.25 * spacing), (end, top - 0.5 * spacing)),
            ((end, top - 0.5 * spacing), (end, bottom + 0.5 * spacing)),
            ((end, bottom + 0.5 * spacing), (nut, bottom + 0.25 * spacing)),
        ];
        for (from, to) in outline {
            commands.push(DrawCommand::Line { from, to, color });
        }
    }

    fn push_fret_numbers(&self, commands: &mut Vec<DrawCommand>) {
        let frets = self.fretboard.frets();
        let y = self.string_y(self.fretboard.strings()) + FRET_NUMBER_GAP;
        for k in 0..=frets {
            commands.push(DrawCommand::Text {
                text: (frets - k).to_string(),
                position: (self.boundary_x(k), y),
                size: FRET_NUMBER_SIZE,
                anchor: Anchor::Center,
                color: self.options.palette.text,
            });
        }
    }

    fn push_tuning(&self, commands: &mut Vec<DrawCommand>) -> Result<(), ScaleMateError> {
        let x = self.nut_x() + 0.5 * HEADSTOCK_ALLOWANCE;
        for string in 1..=self.fretboard.strings() {
            commands.push(DrawCommand::Text {
                text: self.fretboard.open_note(string)?.to_string(),
                position: (x, self.string_y(string)),
                size: TUNING_SIZE,
                anchor: Anchor::Center,
                color: self.options.palette.text,
            });
        }
        Ok(())
    }

    /// Markers for every highlighted fretted position; returns how many were drawn
    fn push_markers(&self, commands: &mut Vec<DrawCommand>) -> Result<usize, ScaleMateError> {
        let palette = &self.options.palette;
        let mut markers = 0;

        for string in 1..=self.fretboard.strings() {
            for number in (1..=self.fretboard.frets()).rev() {
                let fret = self.fretboard.fret(string, number)?;
                let color = match fret.highlight() {
                    Highlight::Root => palette.root,
                    Highlight::ChordMember => palette.chord,
                    Highlight::ScaleMember => palette.scale,
                    Highlight::None => continue,
                };

                let center = self.marker_center(string, number);
                commands.push(DrawCommand::Circle {
                    center,
                    radius: MARKER_RADIUS,
                    color,
                });
                commands.push(DrawCommand::Text {
                    text: fret.note.to_string(),
                    position: center,
                    size: MARKER_TEXT_SIZE,
                    anchor: Anchor::Center,
                    color: palette.marker_text,
                });
                markers += 1;
            }
        }

        Ok(markers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::Chord;
    use crate::fretboard::{FretboardOptions, Tuning};
    use crate::note::PitchClass;
    use crate::scale::{Scale, ScaleType};
    use pretty_assertions::assert_eq;

    fn fretboard(frets: u32) -> Fretboard {
        Fretboard::new(FretboardOptions {
            tuning: None,
            frets: Some(frets),
        })
        .unwrap()
    }

    fn circles(commands: &[DrawCommand]) -> Vec<((f32, f32), Color)> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle { center, color, .. } => Some((*center, *color)),
                _ => None,
            })
            .collect()
    }

    fn texts(commands: &[DrawCommand]) -> Vec<&str> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_canvas_size() {
        let options = RenderOptions::default();
        let fb = fretboard(12);
        let layout = DiagramLayout::new(&fb, &options);

        // 2 * 40 + 12 * 60 + 40
        assert_eq!(layout.width(), 840);
        // 2 * 50 + 6 * 30
        assert_eq!(layout.height(), 280);
    }

    #[test]
    fn test_canvas_size_follows_options() {
        let options = RenderOptions {
            margin_x: 0.0,
            margin_y: 40.0,
            ..RenderOptions::default()
        };
        let fb = Fretboard::new(FretboardOptions {
            tuning: Some("E A D G".to_string()),
            frets: Some(5),
        })
        .unwrap();
        let layout = DiagramLayout::new(&fb, &options);

        assert_eq!(layout.width(), 340);
        assert_eq!(layout.height(), 200);
    }

    #[test]
    fn test_oversized_canvas_is_rejected() {
        let options = RenderOptions::default();
        let fb = Fretboard::with_tuning(Tuning::standard(), 80_000_000);
        let layout = DiagramLayout::new(&fb, &options);

        assert_eq!(layout.width(), 4_800_000_120);
        assert!(matches!(
            layout.canvas_size(),
            Err(ScaleMateError::CanvasTooLarge {
                width: 4_800_000_120,
                height: 280
            })
        ));
        assert!(matches!(
            layout.commands(),
            Err(ScaleMateError::CanvasTooLarge { .. })
        ));

        let options = RenderOptions {
            fret_spacing: 2000.0,
            ..RenderOptions::default()
        };
        let fb = fretboard(12);
        assert!(DiagramLayout::new(&fb, &options).canvas_size().is_err());
    }

    #[test]
    fn test_title_position() {
        let options = RenderOptions::default();
        let fb = fretboard(12);
        let commands = DiagramLayout::new(&fb, &options).commands().unwrap();

        let title = commands.iter().find_map(|c| match c {
            DrawCommand::Text { text, position, .. } if text == "Empty fretboard" => Some(*position),
            _ => None,
        });
        assert_eq!(title, Some((40.0, 37.5)));
    }

    #[test]
    fn test_marker_geometry() {
        let options = RenderOptions::default();
        let fb = fretboard(12);
        let layout = DiagramLayout::new(&fb, &options);

        assert_eq!(layout.string_y(1), 80.0);
        assert_eq!(layout.string_y(6), 230.0);
        assert_eq!(layout.nut_x(), 760.0);
        // first fret sits just left of the nut, the last one next to the left margin
        assert_eq!(layout.marker_center(1, 1), (730.0, 80.0));
        assert_eq!(layout.marker_center(6, 12), (70.0, 230.0));
    }

    #[test]
    fn test_empty_fretboard_draws_no_markers() {
        let options = RenderOptions::default();
        let fb = fretboard(12);
        let commands = DiagramLayout::new(&fb, &options).commands().unwrap();

        assert!(circles(&commands).is_empty());
        assert_eq!(commands[0], DrawCommand::Fill { color: options.palette.background });
        assert_eq!(texts(&commands)[0], "Empty fretboard");
    }

    #[test]
    fn test_grid_lines() {
        let options = RenderOptions::default();
        let fb = fretboard(12);
        let commands = DiagramLayout::new(&fb, &options).commands().unwrap();
        let lines = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count();

        // 6 strings + 13 fret boundaries + 3 headstock edges
        assert_eq!(lines, 22);
    }

    #[test]
    fn test_labels() {
        let options = RenderOptions {
            draw_title: false,
            ..RenderOptions::default()
        };
        let fb = fretboard(3);
        let commands = DiagramLayout::new(&fb, &options).commands().unwrap();

        assert_eq!(
            texts(&commands),
            ["3", "2", "1", "0", "E", "B", "G", "D", "A", "E"]
        );
    }

    #[test]
    fn test_markers_follow_highlights() {
        let options = RenderOptions::default();
        let mut fb = fretboard(12);
        fb.highlight_scale(Scale::new(PitchClass::A, ScaleType::Minor));
        let commands = DiagramLayout::new(&fb, &options).commands().unwrap();
        let markers = circles(&commands);

        // 7 of 12 pitch classes on each of 6 strings over one octave of frets
        assert_eq!(markers.len(), 42);

        let layout = DiagramLayout::new(&fb, &options);
        assert!(markers.contains(&(layout.marker_center(6, 5), options.palette.root)));
        assert!(markers.contains(&(layout.marker_center(6, 1), options.palette.scale)));
        assert!(!markers.iter().any(|(c, _)| *c == layout.marker_center(6, 2)));
    }

    #[test]
    fn test_marker_colors_by_precedence() {
        let options = RenderOptions::default();
        let mut fb = fretboard(12);
        fb.highlight_scale(Scale::new(PitchClass::A, ScaleType::Minor));
        fb.highlight_chord(Chord::parse("Cmaj7").unwrap());
        let layout = DiagramLayout::new(&fb, &options);
        let markers = circles(&layout.commands().unwrap());
        let palette = &options.palette;

        // low E string: A root, C chord tone, F scale tone
        assert!(markers.contains(&(layout.marker_center(6, 5), palette.root)));
        assert!(markers.contains(&(layout.marker_center(6, 8), palette.chord)));
        assert!(markers.contains(&(layout.marker_center(6, 1), palette.scale)));
        assert!(markers.contains(&(layout.marker_center(6, 12), palette.chord)));
    }

    #[test]
    fn test_markers_are_drawn_high_fret_first() {
        let options = RenderOptions::default();
        let mut fb = fretboard(12);
        fb.highlight_chord(Chord::parse("G7").unwrap());
        let layout = DiagramLayout::new(&fb, &options);
        let markers = circles(&layout.commands().unwrap());

        let first_string: Vec<f32> = markers
            .iter()
            .filter(|((_, y), _)| *y == layout.string_y(1))
            .map(|((x, _), _)| *x)
            .collect();
        assert!(first_string.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_layout_is_deterministic() {
        let options = RenderOptions::default();
        let mut fb = fretboard(22);
        fb.highlight_scale(Scale::new(PitchClass::FSharp, ScaleType::HarmonicMinor));
        fb.highlight_chord(Chord::parse("C#7").unwrap());

        let first = DiagramLayout::new(&fb, &options).commands().unwrap();
        let second = DiagramLayout::new(&fb, &options).commands().unwrap();
        assert_eq!(first, second);
    }
}
