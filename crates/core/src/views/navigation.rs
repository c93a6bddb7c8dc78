use folio_protocol::{
    Action, ButtonStyle, HeadingLevel, Icon, LinkTarget, PageCommand, RowAlign, SectionId,
    TextSize, ThemeMode, ThemeToken,
};

use super::{begin_row, heading, link, text};
use crate::content::{Portfolio, SocialKind};
use crate::state::PageState;

fn social_icon(kind: SocialKind) -> Icon {
    match kind {
        SocialKind::Github => Icon::Github,
        SocialKind::Linkedin => Icon::Linkedin,
        SocialKind::X => Icon::X,
    }
}

/// Icon-only button that flips the theme. Shows the sun while dark.
pub fn theme_toggle(theme: ThemeMode) -> PageCommand {
    PageCommand::Button {
        label: None,
        icon: Some(if theme.is_dark() { Icon::Sun } else { Icon::Moon }),
        style: ButtonStyle::Ghost,
        action: Action::ToggleDarkMode,
    }
}

fn nav_items(state: &PageState, in_menu: bool) -> impl Iterator<Item = PageCommand> + '_ {
    SectionId::ALL.into_iter().map(move |section| PageCommand::NavItem {
        section,
        active: state.active_section() == section,
        in_menu,
    })
}

/// Fixed sidebar for wide layouts: name, title, section links, socials.
pub fn render_sidebar(portfolio: &Portfolio, state: &PageState) -> Vec<PageCommand> {
    let mut commands = vec![
        heading(&portfolio.profile.name, HeadingLevel::Display),
        text(&portfolio.profile.title, TextSize::Lead, ThemeToken::TextSecondary),
    ];
    commands.extend(nav_items(state, false));

    commands.push(begin_row(RowAlign::Start));
    commands.extend(
        portfolio
            .socials
            .iter()
            .map(|s| link("", &s.href, Some(social_icon(s.kind)), LinkTarget::NewTab)),
    );
    commands.push(PageCommand::EndRow);
    commands
}

/// Top bar for narrow layouts, with the collapsible section menu.
pub fn render_top_bar(portfolio: &Portfolio, state: &PageState) -> Vec<PageCommand> {
    let mut commands = vec![
        begin_row(RowAlign::SpaceBetween),
        heading(&portfolio.profile.name, HeadingLevel::Display),
        begin_row(RowAlign::End),
        theme_toggle(state.theme),
        PageCommand::Button {
            label: None,
            icon: Some(Icon::Menu),
            style: ButtonStyle::Ghost,
            action: Action::ToggleMenu,
        },
        PageCommand::EndRow,
        PageCommand::EndRow,
        text(&portfolio.profile.title, TextSize::Body, ThemeToken::TextSecondary),
    ];
    if state.menu_open {
        commands.extend(nav_items(state, true));
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{PageEvent, reduce};
    use crate::views::test_util::assert_balanced;

    fn active_items(cmds: &[PageCommand]) -> Vec<SectionId> {
        cmds.iter()
            .filter_map(|c| match c {
                PageCommand::NavItem {
                    section,
                    active: true,
                    ..
                } => Some(*section),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn sidebar_highlights_exactly_the_active_section() {
        let cmds = render_sidebar(&Portfolio::builtin(), &PageState::new());
        assert_balanced(&cmds);
        assert_eq!(active_items(&cmds), vec![SectionId::About]);
        let items = cmds
            .iter()
            .filter(|c| matches!(c, PageCommand::NavItem { in_menu: false, .. }))
            .count();
        assert_eq!(items, SectionId::COUNT);
    }

    #[test]
    fn top_bar_lists_sections_only_when_menu_open() {
        let p = Portfolio::builtin();
        let closed = render_top_bar(&p, &PageState::new());
        assert_balanced(&closed);
        assert!(!closed.iter().any(|c| matches!(c, PageCommand::NavItem { .. })));

        let open = reduce(&PageState::new(), PageEvent::ToggleMenu);
        let cmds = render_top_bar(&p, &open);
        let items = cmds
            .iter()
            .filter(|c| matches!(c, PageCommand::NavItem { in_menu: true, .. }))
            .count();
        assert_eq!(items, SectionId::COUNT);
    }

    #[test]
    fn theme_toggle_shows_opposite_icon() {
        assert!(matches!(
            theme_toggle(ThemeMode::Light),
            PageCommand::Button { icon: Some(Icon::Moon), .. }
        ));
        assert!(matches!(
            theme_toggle(ThemeMode::Dark),
            PageCommand::Button { icon: Some(Icon::Sun), .. }
        ));
    }
}
