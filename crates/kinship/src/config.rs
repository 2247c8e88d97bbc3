//! Configuration types for family-tree layout.
//!
//! All types implement [`serde::Deserialize`] so front ends can load them from
//! any serde format; the CLI reads TOML.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Row and column spacing of the generation grid.
//! - [`StyleConfig`] - Edge colors per relationship category.
//!
//! # Example
//!
//! ```
//! # use kinship::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().horizontal_spacing(), 250.0);
//! assert_eq!(config.layout().vertical_spacing(), 200.0);
//! assert!(config.style().parent_color().is_ok());
//! ```

use serde::Deserialize;

use kinship_core::color::Color;

/// Default distance between neighbours of one generation row.
pub const DEFAULT_HORIZONTAL_SPACING: f32 = 250.0;

/// Default distance between two generation rows.
pub const DEFAULT_VERTICAL_SPACING: f32 = 200.0;

const DEFAULT_PARENT_COLOR: &str = "#555555";
const DEFAULT_SPOUSE_COLOR: &str = "#e11d48";
const DEFAULT_SIBLING_COLOR: &str = "#2563eb";

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Spacing of the generation grid, in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LayoutConfig {
    /// Distance between neighbours of one generation row.
    #[serde(default = "default_horizontal_spacing")]
    horizontal_spacing: f32,

    /// Distance between two generation rows.
    #[serde(default = "default_vertical_spacing")]
    vertical_spacing: f32,
}

fn default_horizontal_spacing() -> f32 {
    DEFAULT_HORIZONTAL_SPACING
}

fn default_vertical_spacing() -> f32 {
    DEFAULT_VERTICAL_SPACING
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            horizontal_spacing: DEFAULT_HORIZONTAL_SPACING,
            vertical_spacing: DEFAULT_VERTICAL_SPACING,
        }
    }
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`] with the given spacings.
    pub fn new(horizontal_spacing: f32, vertical_spacing: f32) -> Self {
        Self {
            horizontal_spacing,
            vertical_spacing,
        }
    }

    /// Returns the distance between neighbours of one generation row.
    pub fn horizontal_spacing(&self) -> f32 {
        self.horizontal_spacing
    }

    /// Returns the distance between two generation rows.
    pub fn vertical_spacing(&self) -> f32 {
        self.vertical_spacing
    }
}

/// Edge colors per relationship category.
///
/// Fields hold CSS color strings; unset fields fall back to the built-in
/// palette.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    parent_color: Option<String>,

    #[serde(default)]
    spouse_color: Option<String>,

    #[serde(default)]
    sibling_color: Option<String>,
}

impl StyleConfig {
    /// Creates a style configuration overriding the given colors.
    pub fn new(
        parent_color: Option<String>,
        spouse_color: Option<String>,
        sibling_color: Option<String>,
    ) -> Self {
        Self {
            parent_color,
            spouse_color,
            sibling_color,
        }
    }

    /// Returns the color of parent/child edges.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn parent_color(&self) -> Result<Color, String> {
        resolve_color("parent_color", self.parent_color.as_deref(), DEFAULT_PARENT_COLOR)
    }

    /// Returns the color of spouse and partner edges.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn spouse_color(&self) -> Result<Color, String> {
        resolve_color("spouse_color", self.spouse_color.as_deref(), DEFAULT_SPOUSE_COLOR)
    }

    /// Returns the color of sibling edges.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn sibling_color(&self) -> Result<Color, String> {
        resolve_color(
            "sibling_color",
            self.sibling_color.as_deref(),
            DEFAULT_SIBLING_COLOR,
        )
    }
}

fn resolve_color(field: &str, configured: Option<&str>, default: &str) -> Result<Color, String> {
    Color::new(configured.unwrap_or(default))
        .map_err(|err| format!("Invalid {field} in config: {err}"))
}
