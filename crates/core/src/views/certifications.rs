use folio_protocol::{
    Action, ButtonStyle, HeadingLevel, Icon, LinkTarget, PageCommand, RowAlign, SectionId,
    TextSize, ThemeToken,
};

use super::{begin_row, begin_section, card, heading, link, text};
use crate::content::{Certification, Portfolio, certification_viewport_height};

const LOGO_SIZE: f64 = 48.0;

/// Certification list inside a fixed-height viewport, with a disclosure
/// button that switches between the first few entries and all of them.
pub fn render_certifications(portfolio: &Portfolio, show_all: bool) -> Vec<PageCommand> {
    let visible = portfolio.visible_certifications(show_all);

    let mut commands = begin_section(SectionId::Certifications);
    commands.push(card());
    commands.push(PageCommand::BeginScroll {
        height: certification_viewport_height(show_all),
    });
    for (i, cert) in visible.iter().enumerate() {
        push_entry(&mut commands, cert);
        if i + 1 != visible.len() {
            commands.push(PageCommand::Separator);
        }
    }
    commands.push(PageCommand::EndScroll);

    let (label, icon) = if show_all {
        ("Show Less", Icon::ChevronUp)
    } else {
        ("Show All Certifications", Icon::ChevronDown)
    };
    commands.push(PageCommand::Button {
        label: Some(label.into()),
        icon: Some(icon),
        style: ButtonStyle::Outline,
        action: Action::ToggleCertifications,
    });
    commands.push(PageCommand::EndCard);
    commands.push(PageCommand::EndSection);
    commands
}

fn push_entry(commands: &mut Vec<PageCommand>, cert: &Certification) {
    commands.push(begin_row(RowAlign::Start));
    commands.push(PageCommand::Image {
        src: cert.logo.clone(),
        alt: format!("{} logo", cert.issuer.trim()),
        aspect_ratio: 1.0,
        max_width: Some(LOGO_SIZE),
    });
    commands.push(heading(&cert.name, HeadingLevel::Minor));
    commands.push(PageCommand::EndRow);

    commands.push(begin_row(RowAlign::SpaceBetween));
    commands.push(text(cert.issuer.trim(), TextSize::Small, ThemeToken::TextSecondary));
    commands.push(text(&cert.date, TextSize::Small, ThemeToken::TextMuted));
    commands.push(PageCommand::EndRow);

    commands.push(link(
        "View Certificate",
        &cert.link,
        Some(Icon::Award),
        LinkTarget::NewTab,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_util::{assert_balanced, links};

    fn certificate_names(cmds: &[PageCommand]) -> Vec<&str> {
        cmds.iter()
            .filter_map(|c| match c {
                PageCommand::Heading {
                    text,
                    level: HeadingLevel::Minor,
                    ..
                } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn collapsed_shows_five_in_short_viewport() {
        let p = Portfolio::builtin();
        let cmds = render_certifications(&p, false);
        assert_balanced(&cmds);
        assert_eq!(certificate_names(&cmds).len(), 5);
        assert!(cmds.contains(&PageCommand::BeginScroll { height: 400.0 }));
        let separators = cmds
            .iter()
            .filter(|c| matches!(c, PageCommand::Separator))
            .count();
        assert_eq!(separators, 4);
    }

    #[test]
    fn expanded_shows_all_in_tall_viewport() {
        let p = Portfolio::builtin();
        let cmds = render_certifications(&p, true);
        assert_eq!(certificate_names(&cmds).len(), 7);
        assert!(cmds.contains(&PageCommand::BeginScroll { height: 600.0 }));
        assert_eq!(links(&cmds).len(), 7);
    }

    #[test]
    fn toggle_label_follows_state() {
        let p = Portfolio::builtin();
        let label = |show_all| {
            render_certifications(&p, show_all)
                .into_iter()
                .find_map(|c| match c {
                    PageCommand::Button { label, .. } => label,
                    _ => None,
                })
        };
        assert_eq!(label(false).as_deref(), Some("Show All Certifications"));
        assert_eq!(label(true).as_deref(), Some("Show Less"));
    }

    #[test]
    fn issuer_whitespace_is_trimmed_in_alt_text() {
        let mut p = Portfolio::builtin();
        p.certifications[0].issuer = "Cisco Networking Academy ".into();
        let cmds = render_certifications(&p, false);
        assert!(cmds.iter().any(|c| matches!(
            c,
            PageCommand::Image { alt, .. } if alt == "Cisco Networking Academy logo"
        )));
    }
}
