//! Companion terminal-profile colors
//!
//! Terminal windows can have their title bar tinted with the terminal
//! emulator's own color scheme, read from its `.colorscheme` file
//! (INI-style `Color=r,g,b` entries). Malformed or missing input is not
//! an error at the decoration level: the caller keeps no profile and the
//! standard palette applies.

use cornice_paint::Color;
use thiserror::Error;

/// Caption fragment identifying windows the profile applies to
const DEFAULT_MARKER: &str = " — Konsole";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TerminalProfileError {
    #[error("color scheme has no [{0}] group")]
    MissingGroup(&'static str),
    #[error("group [{0}] has no Color entry")]
    MissingColor(&'static str),
    #[error("malformed color triple: {0:?}")]
    MalformedColor(String),
    #[error("malformed opacity: {0:?}")]
    MalformedOpacity(String),
}

/// Parsed terminal color-scheme override
#[derive(Clone, Debug, PartialEq)]
pub struct TerminalProfile {
    /// Terminal background, used as the title-bar color (carries the
    /// profile's opacity)
    pub titlebar: Color,
    /// Terminal foreground, used as the caption text color
    pub text: Color,
    marker: String,
}

impl TerminalProfile {
    /// Parse a color-scheme document.
    ///
    /// Requires `[Background]` and `[Foreground]` groups with `Color=r,g,b`
    /// entries; `[General] Opacity=` is optional and defaults to opaque.
    pub fn parse(input: &str) -> Result<Self, TerminalProfileError> {
        let background = read_color(input, "Background")?;
        let foreground = read_color(input, "Foreground")?;
        let opacity = read_opacity(input)?;

        Ok(Self {
            titlebar: background.with_alpha(opacity),
            text: foreground,
            marker: DEFAULT_MARKER.to_owned(),
        })
    }

    /// Override the caption marker (for terminals other than the default)
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Whether this profile should tint the window with `caption`.
    ///
    /// Matches the terminal's caption shape: the app marker plus the
    /// `path:` prompt separator.
    pub fn applies_to(&self, caption: &str) -> bool {
        caption.contains(&self.marker) && caption.contains(':')
    }
}

fn group_entry<'a>(input: &'a str, group: &str, key: &str) -> Option<&'a str> {
    let mut in_group = false;
    for line in input.lines() {
        let line = line.trim();
        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            in_group = name == group;
        } else if in_group {
            if let Some((k, v)) = line.split_once('=') {
                if k.trim() == key {
                    return Some(v.trim());
                }
            }
        }
    }
    None
}

fn read_color(input: &str, group: &'static str) -> Result<Color, TerminalProfileError> {
    if !input.contains(&format!("[{group}]")) {
        return Err(TerminalProfileError::MissingGroup(group));
    }
    let entry =
        group_entry(input, group, "Color").ok_or(TerminalProfileError::MissingColor(group))?;

    let parts: Vec<_> = entry.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(TerminalProfileError::MalformedColor(entry.to_owned()));
    }
    let mut rgb = [0u8; 3];
    for (slot, part) in rgb.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|_| TerminalProfileError::MalformedColor(entry.to_owned()))?;
    }
    Ok(Color::from_rgb8(rgb[0], rgb[1], rgb[2]))
}

fn read_opacity(input: &str) -> Result<f32, TerminalProfileError> {
    match group_entry(input, "General", "Opacity") {
        None => Ok(1.0),
        Some(raw) => raw
            .parse::<f32>()
            .map(|o| o.clamp(0.0, 1.0))
            .map_err(|_| TerminalProfileError::MalformedOpacity(raw.to_owned())),
    }
}
