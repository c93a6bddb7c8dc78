use serde::{Deserialize, Serialize};

use crate::icon::Icon;
use crate::section::SectionId;
use crate::theme::ThemeToken;

/// A single, stateless page instruction.
///
/// The core emits a `Vec<PageCommand>` for each section. Renderers consume
/// this list sequentially; containers are expressed as `Begin*`/`End*`
/// pairs and always nest properly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PageCommand {
    /// Start of a page section. Renderers measure the section between this
    /// command and the matching `EndSection` for the active-section tracker.
    BeginSection { section: SectionId, title: String },
    EndSection,

    /// A raised, rounded panel.
    BeginCard { fill: ThemeToken },
    EndCard,

    /// Lay children out in `columns` equal columns when there is room.
    BeginGrid { columns: u8 },
    EndGrid,

    /// Lay children out horizontally.
    BeginRow { align: RowAlign },
    EndRow,

    /// Clip children to a fixed-height scrollable viewport.
    BeginScroll { height: f64 },
    EndScroll,

    Heading {
        text: String,
        level: HeadingLevel,
        color: ThemeToken,
    },

    Text {
        text: String,
        size: TextSize,
        color: ThemeToken,
    },

    /// A bulleted list entry.
    Bullet { text: String },

    /// A small rounded tag (e.g. a technology name).
    Chip { text: String },

    Link {
        label: String,
        href: String,
        icon: Option<Icon>,
        target: LinkTarget,
    },

    /// A pressable button. Renderers report presses back as the carried
    /// `action`.
    Button {
        label: Option<String>,
        icon: Option<Icon>,
        style: ButtonStyle,
        action: Action,
    },

    /// A navigation entry; `active` entries are emphasised. Entries listed
    /// in the collapsible mobile menu have `in_menu` set and close it when
    /// pressed.
    NavItem {
        section: SectionId,
        active: bool,
        in_menu: bool,
    },

    /// An image with a fixed aspect ratio (height / width), optionally
    /// capped in width.
    Image {
        src: String,
        alt: String,
        aspect_ratio: f64,
        max_width: Option<f64>,
    },

    /// An editable form field showing `value`.
    Input {
        field: ContactField,
        placeholder: String,
        value: String,
        multiline: bool,
    },

    /// A thin horizontal rule.
    Separator,
}

impl PageCommand {
    /// +1 for a container start, -1 for a container end, 0 otherwise.
    pub fn depth_delta(&self) -> i32 {
        match self {
            Self::BeginSection { .. }
            | Self::BeginCard { .. }
            | Self::BeginGrid { .. }
            | Self::BeginRow { .. }
            | Self::BeginScroll { .. } => 1,
            Self::EndSection
            | Self::EndCard
            | Self::EndGrid
            | Self::EndRow
            | Self::EndScroll => -1,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// The owner's name in the navigation header.
    Display,
    /// A section title.
    Section,
    /// A card or dialog title.
    Card,
    /// A sub-heading inside a card.
    Minor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextSize {
    Lead,
    Body,
    Small,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowAlign {
    Start,
    SpaceBetween,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonStyle {
    /// Filled, high contrast.
    Primary,
    /// Bordered, transparent fill.
    Outline,
    /// Low-contrast fill.
    Subtle,
    /// No fill until hovered.
    Ghost,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkTarget {
    SameTab,
    NewTab,
    /// Download the target, saving it under `file_name`.
    Download { file_name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// What a button does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    ToggleDarkMode,
    ToggleMenu,
    ToggleCertifications,
    OpenProject(usize),
    CloseProject,
    SubmitContact,
    /// Smooth-scroll to a section.
    Navigate(SectionId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_deltas_balance() {
        let cmds = [
            PageCommand::BeginSection {
                section: SectionId::About,
                title: "About Me".into(),
            },
            PageCommand::BeginCard {
                fill: ThemeToken::Surface,
            },
            PageCommand::Separator,
            PageCommand::EndCard,
            PageCommand::EndSection,
        ];
        let depths: Vec<i32> = cmds
            .iter()
            .scan(0, |depth, c| {
                *depth += c.depth_delta();
                Some(*depth)
            })
            .collect();
        assert_eq!(depths, vec![1, 2, 2, 1, 0]);
    }

    #[test]
    fn action_serializes_with_payload() {
        let json = serde_json::to_string(&Action::Navigate(SectionId::Blog)).unwrap_or_default();
        assert_eq!(json, r#"{"Navigate":"blog"}"#);
    }
}
