use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    Background,
    NavBackground,
    Surface,
    Border,

    TextPrimary,
    TextSecondary,
    TextMuted,
    Heading,

    // Navigation
    NavActive,
    NavInactive,

    // Technology tags
    ChipBackground,
    ChipText,

    LinkText,

    // Buttons
    ButtonPrimaryFill,
    ButtonPrimaryText,
    ButtonOutline,
    ButtonSubtleFill,
    ButtonSubtleText,

    // Form fields
    InputBackground,
    InputText,
}

/// Light or dark page theme. The page opens in light mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}
