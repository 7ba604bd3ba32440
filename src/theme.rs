//! Theme registry for the to-do view.

use std::fmt;
use std::str::FromStr;

use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// Named item colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeRecord {
    pub item_color: Color32,
    pub item_bg_color: Color32,
    /// Not consulted by the deleted-item style, which always paints red.
    pub item_deleted_color: Color32,
}

pub static DEFAULT_THEME: ThemeRecord = ThemeRecord {
    item_color: Color32::from_rgb(0x14, 0x14, 0x14),
    item_bg_color: Color32::from_rgb(0xff, 0xff, 0xff),
    item_deleted_color: Color32::from_rgb(0xff, 0x00, 0x00),
};

pub static DARK_THEME: ThemeRecord = ThemeRecord {
    item_color: Color32::from_rgb(0xff, 0xff, 0xff),
    item_bg_color: Color32::from_rgb(0x14, 0x14, 0x14),
    item_deleted_color: Color32::from_rgb(0xff, 0x00, 0x00),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    Default,
    Dark,
}

impl ThemeName {
    pub const ALL: [ThemeName; 2] = [ThemeName::Default, ThemeName::Dark];

    pub fn record(self) -> &'static ThemeRecord {
        match self {
            ThemeName::Default => &DEFAULT_THEME,
            ThemeName::Dark => &DARK_THEME,
        }
    }

    /// The other theme. Applying it twice gives back `self`.
    pub fn toggled(self) -> ThemeName {
        match self {
            ThemeName::Dark => ThemeName::Default,
            ThemeName::Default => ThemeName::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Default => "default",
            ThemeName::Dark => "dark",
        }
    }
}

impl Default for ThemeName {
    fn default() -> Self {
        initial_theme()
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(ThemeName::Default),
            "dark" => Ok(ThemeName::Dark),
            _ => Err(ThemeError::UnknownTheme(s.to_string())),
        }
    }
}

/// Looks a theme up by name, failing on anything but `default` or `dark`.
pub fn lookup(name: &str) -> Result<&'static ThemeRecord, ThemeError> {
    name.parse::<ThemeName>().map(ThemeName::record)
}

pub fn initial_theme() -> ThemeName {
    ThemeName::Dark
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::parse_hex;

    #[test]
    fn test_records_match_declared_hex_values() {
        assert_eq!(Some(DEFAULT_THEME.item_color), parse_hex("#141414"));
        assert_eq!(Some(DEFAULT_THEME.item_bg_color), parse_hex("#fff"));
        assert_eq!(Some(DARK_THEME.item_color), parse_hex("#fff"));
        assert_eq!(Some(DARK_THEME.item_bg_color), parse_hex("#141414"));
        for name in ThemeName::ALL {
            assert_eq!(Some(name.record().item_deleted_color), parse_hex("#ff0000"));
        }
    }

    #[test]
    fn test_every_record_is_fully_opaque() {
        for name in ThemeName::ALL {
            let record = name.record();
            for color in [record.item_color, record.item_bg_color, record.item_deleted_color] {
                assert!(color.is_opaque(), "{name}: {color:?} should be opaque");
            }
        }
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(lookup("dark"), Ok(&DARK_THEME));
        assert_eq!(lookup("  Default "), Ok(&DEFAULT_THEME));
        assert_eq!(
            lookup("solarized"),
            Err(ThemeError::UnknownTheme("solarized".to_string()))
        );
    }

    #[test]
    fn test_name_round_trips_through_str() {
        for name in ThemeName::ALL {
            assert_eq!(name.as_str().parse::<ThemeName>(), Ok(name));
        }
    }

    #[test]
    fn test_toggle_is_an_involution() {
        for name in ThemeName::ALL {
            assert_ne!(name.toggled(), name);
            assert_eq!(name.toggled().toggled(), name);
        }
    }

    #[test]
    fn test_initial_theme_is_dark() {
        assert_eq!(initial_theme(), ThemeName::Dark);
        assert_eq!(ThemeName::default(), ThemeName::Dark);
    }
}
