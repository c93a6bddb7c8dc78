use serde::{Deserialize, Serialize};

/// Icons referenced by the page. Artwork is up to the renderer; the
/// glyph fallbacks below are what text-only renderers draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    Github,
    Linkedin,
    X,
    FileDown,
    ExternalLink,
    Menu,
    Sun,
    Moon,
    Mail,
    Phone,
    Award,
    Calendar,
    ChevronDown,
    ChevronUp,
    Close,
}

impl Icon {
    /// A single-glyph stand-in for the icon.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Github => "\u{1F419}",
            Self::Linkedin => "in",
            Self::X => "\u{1D54F}",
            Self::FileDown => "\u{2B07}",
            Self::ExternalLink => "\u{2197}",
            Self::Menu => "\u{2630}",
            Self::Sun => "\u{2600}",
            Self::Moon => "\u{263E}",
            Self::Mail => "\u{2709}",
            Self::Phone => "\u{260E}",
            Self::Award => "\u{1F3C5}",
            Self::Calendar => "\u{1F4C5}",
            Self::ChevronDown => "\u{2304}",
            Self::ChevronUp => "\u{2303}",
            Self::Close => "\u{2715}",
        }
    }

    /// Accessible name for icon-only links and buttons.
    pub fn name(self) -> &'static str {
        match self {
            Self::Github => "GitHub",
            Self::Linkedin => "LinkedIn",
            Self::X => "X",
            Self::FileDown => "Download",
            Self::ExternalLink => "External link",
            Self::Menu => "Menu",
            Self::Sun => "Light mode",
            Self::Moon => "Dark mode",
            Self::Mail => "E-mail",
            Self::Phone => "Phone",
            Self::Award => "Certificate",
            Self::Calendar => "Date",
            Self::ChevronDown => "Expand",
            Self::ChevronUp => "Collapse",
            Self::Close => "Close",
        }
    }
}
