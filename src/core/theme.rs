use std::fmt;

pub const THEME_STORAGE_KEY: &str = "tw-theme";
pub const DEFAULT_THEME: &str = "w1.css";

pub const LIGHT_THEME: &str = "w2.css";
pub const DARK_THEME: &str = "w3.css";

pub const HERO_BACKGROUNDS: [&str; 6] = [
    "",
    "hero-bg-art",
    "hero-bg-photo",
    "hero-bg-cafe",
    "hero-bg-craft",
    "hero-bg-salon",
];

/// Stylesheet file name selecting one of the site designs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeId(String);

impl ThemeId {
    /// Accepts a bare `*.css` file name. Paths, schemes and query strings are
    /// rejected so a stored value can only pick a sibling stylesheet.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        let stem = value.strip_suffix(".css")?;
        let valid = !stem.is_empty()
            && stem
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        valid.then(|| Self(value.to_string()))
    }

    /// Theme from a stored value, falling back to [`DEFAULT_THEME`].
    pub fn from_stored(stored: Option<&str>) -> Self {
        stored
            .and_then(Self::parse)
            .unwrap_or_else(|| Self(DEFAULT_THEME.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The light/dark partner of the w2/w3 pair.
    pub fn counterpart(&self) -> Option<Self> {
        match self.as_str() {
            LIGHT_THEME => Some(Self(DARK_THEME.to_string())),
            DARK_THEME => Some(Self(LIGHT_THEME.to_string())),
            _ => None,
        }
    }

    pub fn controls(&self) -> ThemeControls {
        let light = self.as_str() == LIGHT_THEME;
        let dark = self.as_str() == DARK_THEME;
        ThemeControls {
            light_controls: light,
            dark_controls: dark,
            mobile_background_toggle: light,
            mobile_mode_toggle: light || dark,
        }
    }
}

impl Default for ThemeId {
    fn default() -> Self {
        Self(DEFAULT_THEME.to_string())
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Light/dark buttons. The header and hero buttons jump to a fixed design;
/// the mobile toggle flips between the pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeButton {
    Dark,
    Light,
    Toggle,
}

impl ModeButton {
    pub fn target(self, current: &ThemeId) -> Option<ThemeId> {
        match self {
            Self::Dark => Some(ThemeId(DARK_THEME.to_string())),
            Self::Light => Some(ThemeId(LIGHT_THEME.to_string())),
            Self::Toggle => current.counterpart(),
        }
    }
}

/// Which theme-specific header and mobile controls are visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeControls {
    pub light_controls: bool,
    pub dark_controls: bool,
    pub mobile_background_toggle: bool,
    pub mobile_mode_toggle: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeroBackground {
    index: usize,
}

impl HeroBackground {
    pub fn class(&self) -> &'static str {
        HERO_BACKGROUNDS[self.index]
    }

    /// Advance to the next background and return its class (empty for the
    /// plain hero).
    pub fn cycle(&mut self) -> &'static str {
        self.index = (self.index + 1) % HERO_BACKGROUNDS.len();
        self.class()
    }

    pub fn all_classes() -> impl Iterator<Item = &'static str> {
        HERO_BACKGROUNDS.iter().copied().filter(|c| !c.is_empty())
    }
}
