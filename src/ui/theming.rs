// SPDX-License-Identifier: MPL-2.0
//! Appearance selection: light, dark, or follow the operating system.

use dark_light;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::System => "System",
        }
    }

    /// Resolves this mode to an Iced theme, consulting the OS for `System`.
    #[must_use]
    pub fn resolve(&self) -> iced::Theme {
        match self {
            ThemeMode::Light => iced::Theme::Light,
            ThemeMode::Dark => iced::Theme::Dark,
            ThemeMode::System => {
                if let Ok(dark_light::Mode::Light) = dark_light::detect() {
                    iced::Theme::Light
                } else {
                    // Dark on detection failure as well
                    iced::Theme::Dark
                }
            }
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_default_is_system() {
        assert_eq!(ThemeMode::default(), ThemeMode::System);
    }

    #[test]
    fn explicit_modes_resolve_without_consulting_the_system() {
        assert_eq!(ThemeMode::Light.resolve(), iced::Theme::Light);
        assert_eq!(ThemeMode::Dark.resolve(), iced::Theme::Dark);
    }

    #[test]
    fn labels_round_trip_through_display() {
        for mode in ThemeMode::ALL {
            assert_eq!(mode.to_string(), mode.label());
        }
    }
}
