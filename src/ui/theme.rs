//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the search screen,
//! supporting the built-in theme and custom themes loaded from TOML files.
//! It provides utilities for converting hex colors to ANSI escape sequences.
//!
//! The built-in `sky` theme carries the palette of the original screen
//! design: a sky-blue band for the title and suggestion rows, lighter blue
//! type chips, and red error text, with neutral slate tones for body text so
//! it stays readable on dark terminals.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#0f172a"
//! header_bg = "#e0f2fe"
//! text_normal = "#e2e8f0"
//! text_dim = "#94a3b8"
//! border = "#cbd5e1"
//! search_bar_border = "#cbd5e1"
//! suggestion_fg = "#0c4a6e"
//! suggestion_bg = "#e0f2fe"
//! type_fg = "#0c4a6e"
//! type_bg = "#bae6fd"
//! subtitle_fg = "#7dd3fc"
//! error_fg = "#ef4444"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
///
/// Contains theme metadata and color definitions. Can be loaded from the
/// built-in theme or a custom TOML file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are specified as hex strings (e.g. `"#e0f2fe"`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Title bar text color.
    pub header_fg: String,
    /// Optional title bar background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (hints, the loading line, sprite URL).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,
    /// Search box border color.
    pub search_bar_border: String,

    /// Suggestion row foreground color.
    pub suggestion_fg: String,
    /// Suggestion row background color.
    pub suggestion_bg: String,

    /// Type chip foreground color.
    pub type_fg: String,
    /// Type chip background color.
    pub type_bg: String,

    /// Section subtitle color ("Types", "Stats").
    pub subtitle_fg: String,

    /// Error message color.
    pub error_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Currently the only built-in is `sky`.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "sky" => include_str!("../../themes/sky.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read (file not found, permission denied, etc.)
    /// - The TOML content cannot be parsed (invalid syntax, missing fields)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents =
            fs::read_to_string(path).map_err(|e| format!("Failed to read theme file: {e}"))?;

        toml::from_str(&contents).map_err(|e| format!("Failed to parse theme TOML: {e}"))
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Strips the `#` prefix if present, validates length, and parses hex
    /// digits. Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence.
    ///
    /// Clears all styling (colors, bold, dim, etc.).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the built-in `sky` theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("sky").expect("Built-in sky theme should always parse")
    }
}
