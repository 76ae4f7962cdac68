/// System light/dark appearance detection.
use std::fmt;

use crate::color::HexColor;

/// Light or dark interface style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    /// Queries the OS for the current appearance.
    ///
    /// Unspecified modes and detection failures fall back to `Light`.
    pub fn current() -> Self {
        match dark_light::detect() {
            Ok(mode) => Self::from(mode),
            Err(e) => {
                tracing::debug!("System appearance detection failed: {e}");
                Self::Light
            }
        }
    }

    /// Appearance a background of this color belongs to: dark below half
    /// luminance, light otherwise.
    pub fn for_background(color: HexColor) -> Self {
        if color.luminance() < 0.5 {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl From<dark_light::Mode> for Appearance {
    fn from(mode: dark_light::Mode) -> Self {
        match mode {
            dark_light::Mode::Dark => Self::Dark,
            dark_light::Mode::Light | dark_light::Mode::Unspecified => Self::Light,
        }
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "Light"),
            Self::Dark => write!(f, "Dark"),
        }
    }
}
