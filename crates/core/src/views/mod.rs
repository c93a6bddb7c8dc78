//! Section view transforms: content + page state → `PageCommand[]`.

pub mod about;
pub mod blog;
pub mod certifications;
pub mod contact;
pub mod dialog;
pub mod navigation;
pub mod projects;
pub mod skills;

use folio_protocol::{
    HeadingLevel, Icon, LinkTarget, PageCommand, RowAlign, SectionId, TextSize, ThemeToken,
};

use crate::content::Portfolio;
use crate::state::PageState;

/// Heading shown at the top of a section.
pub fn section_title(section: SectionId) -> &'static str {
    match section {
        SectionId::About => "About Me",
        other => other.label(),
    }
}

/// Render one section.
pub fn render_section(
    section: SectionId,
    portfolio: &Portfolio,
    state: &PageState,
) -> Vec<PageCommand> {
    match section {
        SectionId::About => about::render_about(portfolio),
        SectionId::Skills => skills::render_skills(portfolio),
        SectionId::Projects => projects::render_projects(portfolio),
        SectionId::Blog => blog::render_blog(portfolio),
        SectionId::Certifications => {
            certifications::render_certifications(portfolio, state.show_all_certifications)
        }
        SectionId::Contact => contact::render_contact(portfolio, &state.contact),
    }
}

/// Render every section in page order.
pub fn render_page(portfolio: &Portfolio, state: &PageState) -> Vec<PageCommand> {
    SectionId::ALL
        .into_iter()
        .flat_map(|section| render_section(section, portfolio, state))
        .collect()
}

// ── Command builders shared by the section views ───────────────────────────

fn begin_section(section: SectionId) -> Vec<PageCommand> {
    vec![
        PageCommand::BeginSection {
            section,
            title: section_title(section).to_owned(),
        },
        heading(section_title(section), HeadingLevel::Section),
    ]
}

fn heading(text: &str, level: HeadingLevel) -> PageCommand {
    PageCommand::Heading {
        text: text.to_owned(),
        level,
        color: ThemeToken::Heading,
    }
}

fn text(text: &str, size: TextSize, color: ThemeToken) -> PageCommand {
    PageCommand::Text {
        text: text.to_owned(),
        size,
        color,
    }
}

fn link(label: &str, href: &str, icon: Option<Icon>, target: LinkTarget) -> PageCommand {
    PageCommand::Link {
        label: label.to_owned(),
        href: href.to_owned(),
        icon,
        target,
    }
}

fn begin_row(align: RowAlign) -> PageCommand {
    PageCommand::BeginRow { align }
}

fn card() -> PageCommand {
    PageCommand::BeginCard {
        fill: ThemeToken::Surface,
    }
}

#[cfg(test)]
pub(crate) mod test_util {
    use folio_protocol::PageCommand;

    /// Every `Begin*` is closed, and never closed early.
    pub fn assert_balanced(cmds: &[PageCommand]) {
        let mut depth = 0;
        for cmd in cmds {
            depth += cmd.depth_delta();
            assert!(depth >= 0, "container closed before it was opened");
        }
        assert_eq!(depth, 0, "unclosed container");
    }

    pub fn texts(cmds: &[PageCommand]) -> Vec<&str> {
        cmds.iter()
            .filter_map(|c| match c {
                PageCommand::Heading { text, .. } | PageCommand::Text { text, .. } => {
                    Some(text.as_str())
                }
                _ => None,
            })
            .collect()
    }

    pub fn links(cmds: &[PageCommand]) -> Vec<(&str, &str)> {
        cmds.iter()
            .filter_map(|c| match c {
                PageCommand::Link { label, href, .. } => Some((label.as_str(), href.as_str())),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::test_util::assert_balanced;
    use super::*;

    #[test]
    fn page_contains_each_section_once_in_order() {
        let cmds = render_page(&Portfolio::builtin(), &PageState::new());
        assert_balanced(&cmds);
        let order: Vec<SectionId> = cmds
            .iter()
            .filter_map(|c| match c {
                PageCommand::BeginSection { section, .. } => Some(*section),
                _ => None,
            })
            .collect();
        assert_eq!(order, SectionId::ALL.to_vec());
    }

    #[test]
    fn about_section_is_titled_about_me() {
        assert_eq!(section_title(SectionId::About), "About Me");
        assert_eq!(section_title(SectionId::Certifications), "Certifications");
    }
}
