#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Display theme. `System` follows the OS `prefers-color-scheme`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    /// Parse a persisted value; unknown strings fall back to `System`.
    #[must_use]
    pub fn from_str_or_default(value: &str) -> Theme {
        match value {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            _ => Theme::System,
        }
    }
}

/// UI language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Vi,
}

impl Language {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Vi => "vi",
        }
    }

    #[must_use]
    pub fn from_str_or_default(value: &str) -> Language {
        match value {
            "vi" => Language::Vi,
            _ => Language::En,
        }
    }
}

/// Persisted UI preferences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub lang: Language,
}

impl UiState {
    /// Cycle light -> dark -> system -> light.
    pub fn cycle_theme(&mut self) {
        self.theme = match self.theme {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
            Theme::System => Theme::Light,
        };
    }

    pub fn toggle_lang(&mut self) {
        self.lang = match self.lang {
            Language::En => Language::Vi,
            Language::Vi => Language::En,
        };
    }
}
