//! Stroke descriptors for relationship edges.
//!
//! An [`EdgeStyle`] is everything the rendering surface needs to draw one
//! relationship line: its color, its width and whether it is dashed. It
//! serializes with the camelCase keys the graph surface expects:
//!
//! | Rust field     | JSON key      | Example        |
//! |----------------|---------------|----------------|
//! | `stroke_color` | `strokeColor` | `"#555555"`    |
//! | `stroke_width` | `strokeWidth` | `2.0`          |
//! | `dashed`       | `dashed`      | `false`        |

use serde::Serialize;

use crate::color::Color;

/// Visual style of a relationship edge.
///
/// # Examples
///
/// ```
/// use kinship_core::{color::Color, stroke::EdgeStyle};
///
/// let spouse = EdgeStyle::solid(Color::new("#e11d48").unwrap(), 3.0);
/// assert!(!spouse.dashed());
///
/// let ex_spouse = EdgeStyle::dashed_line(Color::new("#e11d48").unwrap(), 2.0);
/// assert!(ex_spouse.dashed());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
    stroke_color: Color,
    stroke_width: f32,
    dashed: bool,
}

impl EdgeStyle {
    /// Creates a continuous line.
    pub fn solid(stroke_color: Color, stroke_width: f32) -> Self {
        Self {
            stroke_color,
            stroke_width,
            dashed: false,
        }
    }

    /// Creates a dashed line.
    pub fn dashed_line(stroke_color: Color, stroke_width: f32) -> Self {
        Self {
            stroke_color,
            stroke_width,
            dashed: true,
        }
    }

    /// Returns the stroke color.
    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    /// Returns the stroke width in layout units.
    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Returns `true` for dashed lines.
    pub fn dashed(&self) -> bool {
        self.dashed
    }
}
