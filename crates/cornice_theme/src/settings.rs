//! Decoration settings
//!
//! The host's settings provider loads this wholesale and hands it to the
//! decoration on every `reconfigured` event; the core treats it as an
//! immutable value object.

use serde::{Deserialize, Serialize};

/// Caption placement policy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TitleAlignment {
    Left,
    Right,
    Center,
    /// Centered over the full title-bar width, falling back to the nearer
    /// edge when the caption would collide with a button group
    #[default]
    CenterFullWidth,
}

/// Border thickness ladder
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BorderSize {
    None,
    NoSides,
    Tiny,
    #[default]
    Normal,
    Large,
    VeryLarge,
    Huge,
    VeryHuge,
    Oversized,
}

/// Drop shadow parameters; equal values mean a shared shadow tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowSettings {
    /// Tile radius in device pixels
    pub size: u32,
    /// Peak alpha, 0-255
    pub strength: u8,
    /// Opaque RGB shadow color
    pub color: [u8; 3],
}

impl Default for ShadowSettings {
    fn default() -> Self {
        Self {
            size: 64,
            strength: 90,
            color: [0, 0, 0],
        }
    }
}

/// The full per-paint configuration value
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecorationSettings {
    pub animations_enabled: bool,
    pub animations_duration_ms: u32,
    pub outline_close_button: bool,
    /// Gap between buttons inside a group, device pixels
    pub button_spacing: u32,
    /// Horizontal padding between a button group and the window edge
    pub button_h_padding: u32,
    /// Added to the host's grid unit to get the button height
    pub button_size: i32,
    pub title_alignment: TitleAlignment,
    pub draw_background_gradient: bool,
    pub draw_titlebar_separator: bool,
    pub border_size: BorderSize,
    pub shadow: ShadowSettings,
}

impl Default for DecorationSettings {
    fn default() -> Self {
        Self {
            animations_enabled: true,
            animations_duration_ms: 250,
            outline_close_button: false,
            button_spacing: 4,
            button_h_padding: 5,
            button_size: 4,
            title_alignment: TitleAlignment::default(),
            draw_background_gradient: true,
            draw_titlebar_separator: true,
            border_size: BorderSize::default(),
            shadow: ShadowSettings::default(),
        }
    }
}

impl DecorationSettings {
    /// Parse from the settings provider's TOML document
    pub fn from_toml_str(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_animate() {
        let s = DecorationSettings::default();
        assert!(s.animations_enabled);
        assert_eq!(s.animations_duration_ms, 250);
        assert_eq!(s.border_size, BorderSize::Normal);
    }

    #[test]
    fn parses_partial_toml_with_defaults() {
        let s = DecorationSettings::from_toml_str(
            r#"
            animations_enabled = false
            title_alignment = "center"
            border_size = "no-sides"

            [shadow]
            size = 32
            "#,
        )
        .unwrap();

        assert!(!s.animations_enabled);
        assert_eq!(s.title_alignment, TitleAlignment::Center);
        assert_eq!(s.border_size, BorderSize::NoSides);
        assert_eq!(s.shadow.size, 32);
        // untouched fields keep defaults
        assert_eq!(s.shadow.strength, 90);
        assert_eq!(s.button_h_padding, 5);
    }

    #[test]
    fn rejects_unknown_alignment() {
        assert!(DecorationSettings::from_toml_str(r#"title_alignment = "top""#).is_err());
    }
}
