//! Display settings persisted as typed preferences.
//!
//! # Responsibility
//! - Load and save theme, font, view-mode, delete-confirmation and default
//!   sort preferences through the key-value backend.
//! - Keep the persisted encodings (table names, keys, label strings) exactly
//!   as earlier releases wrote them.
//!
//! # Invariants
//! - Loading never fails hard on a missing or unrecognized stored value;
//!   each field falls back to its default.
//! - The `sort_by` value is kept as the raw stored label so an unrecognized
//!   label still reaches the query layer's identity-sort fallback instead of
//!   being rewritten on load.

use crate::prefs::{PrefStore, PrefsResult};
use crate::query::sort::SortOrder;

/// Preference table holding the theme choice.
pub const THEME_TABLE: &str = "theme_prefs";
/// Preference table holding the remaining display settings.
pub const SETTINGS_TABLE: &str = "settings_prefs";

const APP_THEME_KEY: &str = "app_theme";
const FONT_SIZE_KEY: &str = "font_size";
const FONT_STYLE_KEY: &str = "font_style";
const VIEW_MODE_KEY: &str = "view_mode";
const CONFIRM_DELETE_KEY: &str = "confirm_delete";
const SORT_BY_KEY: &str = "sort_by";

/// Color theme choice. Palettes themselves live with the UI; the core only
/// persists the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Serenity,
    MidnightFocus,
    Sandstone,
    MinimalBlackWhite,
    Cotton,
}

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::Serenity,
        Theme::MidnightFocus,
        Theme::Sandstone,
        Theme::MinimalBlackWhite,
        Theme::Cotton,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Serenity => "Serenity",
            Self::MidnightFocus => "Midnight Focus",
            Self::Sandstone => "Sandstone",
            Self::MinimalBlackWhite => "Minimal Black & White",
            Self::Cotton => "Cotton",
        }
    }

    pub fn from_label(label: &str) -> Option<Theme> {
        Self::ALL.into_iter().find(|theme| theme.label() == label)
    }
}

/// Font size step, rendered by the UI at the returned scale-independent size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSize {
    ExtraSmall,
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl FontSize {
    pub const ALL: [FontSize; 5] = [
        FontSize::ExtraSmall,
        FontSize::Small,
        FontSize::Medium,
        FontSize::Large,
        FontSize::ExtraLarge,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::ExtraSmall => "Extra Small",
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::ExtraLarge => "Extra Large",
        }
    }

    pub fn from_label(label: &str) -> Option<FontSize> {
        Self::ALL.into_iter().find(|size| size.label() == label)
    }

    /// Scale-independent pixel size used by the note cards.
    pub fn to_sp(self) -> f32 {
        match self {
            Self::ExtraSmall => 12.0,
            Self::Small => 14.0,
            Self::Medium => 16.0,
            Self::Large => 18.0,
            Self::ExtraLarge => 22.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStyle {
    #[default]
    SansSerif,
    Serif,
    Monospace,
    Cursive,
}

impl FontStyle {
    pub const ALL: [FontStyle; 4] = [
        FontStyle::SansSerif,
        FontStyle::Serif,
        FontStyle::Monospace,
        FontStyle::Cursive,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::SansSerif => "Sans-serif",
            Self::Serif => "Serif",
            Self::Monospace => "Monospace",
            Self::Cursive => "Cursive",
        }
    }

    pub fn from_label(label: &str) -> Option<FontStyle> {
        Self::ALL.into_iter().find(|style| style.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Grid => "Grid",
            Self::List => "List",
        }
    }

    pub fn from_label(label: &str) -> Option<ViewMode> {
        match label {
            "Grid" => Some(Self::Grid),
            "List" => Some(Self::List),
            _ => None,
        }
    }
}

/// Aggregated display settings, passed into consuming layers as a plain
/// value rather than read from ambient state.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySettings {
    pub theme: Theme,
    pub font_size: FontSize,
    pub font_style: FontStyle,
    pub view_mode: ViewMode,
    pub confirm_delete: bool,
    /// Raw stored sort label; see module invariants.
    pub sort_by: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            font_size: FontSize::default(),
            font_style: FontStyle::default(),
            view_mode: ViewMode::default(),
            confirm_delete: true,
            sort_by: SortOrder::default().label().to_string(),
        }
    }
}

impl DisplaySettings {
    /// Reads all settings, substituting defaults for anything missing or
    /// unrecognized.
    pub fn load(prefs: &impl PrefStore) -> PrefsResult<Self> {
        let defaults = Self::default();

        let theme = prefs
            .get_string(THEME_TABLE, APP_THEME_KEY)?
            .and_then(|label| Theme::from_label(&label))
            .unwrap_or(defaults.theme);
        let font_size = prefs
            .get_string(SETTINGS_TABLE, FONT_SIZE_KEY)?
            .and_then(|label| FontSize::from_label(&label))
            .unwrap_or(defaults.font_size);
        let font_style = prefs
            .get_string(SETTINGS_TABLE, FONT_STYLE_KEY)?
            .and_then(|label| FontStyle::from_label(&label))
            .unwrap_or(defaults.font_style);
        let view_mode = prefs
            .get_string(SETTINGS_TABLE, VIEW_MODE_KEY)?
            .and_then(|label| ViewMode::from_label(&label))
            .unwrap_or(defaults.view_mode);
        let confirm_delete = prefs
            .get_bool(SETTINGS_TABLE, CONFIRM_DELETE_KEY)?
            .unwrap_or(defaults.confirm_delete);
        let sort_by = prefs
            .get_string(SETTINGS_TABLE, SORT_BY_KEY)?
            .unwrap_or(defaults.sort_by);

        Ok(Self {
            theme,
            font_size,
            font_style,
            view_mode,
            confirm_delete,
            sort_by,
        })
    }

    /// Writes every field back under its legacy table, key and label.
    pub fn save(&self, prefs: &mut impl PrefStore) -> PrefsResult<()> {
        prefs.put_string(THEME_TABLE, APP_THEME_KEY, self.theme.label())?;
        prefs.put_string(SETTINGS_TABLE, FONT_SIZE_KEY, self.font_size.label())?;
        prefs.put_string(SETTINGS_TABLE, FONT_STYLE_KEY, self.font_style.label())?;
        prefs.put_string(SETTINGS_TABLE, VIEW_MODE_KEY, self.view_mode.label())?;
        prefs.put_bool(SETTINGS_TABLE, CONFIRM_DELETE_KEY, self.confirm_delete)?;
        prefs.put_string(SETTINGS_TABLE, SORT_BY_KEY, &self.sort_by)?;
        Ok(())
    }

    /// Resolved default sort order; `None` when the stored label is
    /// unrecognized, which callers treat as the identity transform.
    pub fn sort_order(&self) -> Option<SortOrder> {
        SortOrder::from_label(&self.sort_by)
    }
}
