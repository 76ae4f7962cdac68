/// Values that follow the system light/dark appearance.
use std::fmt;

use wrapkit_config::{Appearance, HexColor};

type AppearanceProvider = Box<dyn Fn() -> Appearance + Send + Sync>;

/// A pair of values, one per appearance, resolved on every read.
pub struct DynamicColor<C = HexColor> {
    light: C,
    dark: C,
    provider: AppearanceProvider,
}

impl<C: fmt::Debug> fmt::Debug for DynamicColor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicColor")
            .field("light", &self.light)
            .field("dark", &self.dark)
            .finish_non_exhaustive()
    }
}

impl<C> DynamicColor<C> {
    /// Follows the detected system appearance.
    pub fn new(light: C, dark: C) -> Self {
        Self::with_provider(light, dark, Appearance::current)
    }

    pub fn with_provider(
        light: C,
        dark: C,
        provider: impl Fn() -> Appearance + Send + Sync + 'static,
    ) -> Self {
        Self {
            light,
            dark,
            provider: Box::new(provider),
        }
    }

    /// Returns the value for the current appearance.
    pub fn value(&self) -> &C {
        self.value_for((self.provider)())
    }

    pub fn value_for(&self, appearance: Appearance) -> &C {
        match appearance {
            Appearance::Light => &self.light,
            Appearance::Dark => &self.dark,
        }
    }

    pub fn light(&self) -> &C {
        &self.light
    }

    pub fn dark(&self) -> &C {
        &self.dark
    }
}
