use folio_protocol::{
    Action, ButtonStyle, HeadingLevel, Icon, LinkTarget, PageCommand, RowAlign, TextSize,
    ThemeToken,
};

use super::projects::preview_image;
use super::{begin_row, heading, link, text};
use crate::content::Portfolio;
use crate::state::PageState;

/// Detail dialog for the selected project; empty when nothing is selected
/// or the selection does not name a project.
pub fn render_project_dialog(portfolio: &Portfolio, state: &PageState) -> Vec<PageCommand> {
    let Some(project) = state.selected_project.and_then(|i| portfolio.project(i)) else {
        return Vec::new();
    };

    let mut commands = vec![
        heading(&project.title, HeadingLevel::Card),
        preview_image(project),
        text(
            project
                .long_description
                .as_deref()
                .unwrap_or(project.description.as_str()),
            TextSize::Body,
            ThemeToken::TextPrimary,
        ),
    ];
    for (title, body) in [
        ("Challenges", &project.challenges),
        ("Learnings", &project.learnings),
    ] {
        if let Some(body) = body {
            commands.push(heading(title, HeadingLevel::Minor));
            commands.push(text(body, TextSize::Body, ThemeToken::TextPrimary));
        }
    }

    commands.push(begin_row(RowAlign::Start));
    commands.push(link("View Code", &project.github, Some(Icon::Github), LinkTarget::NewTab));
    commands.push(link(
        "Live Demo",
        &project.live,
        Some(Icon::ExternalLink),
        LinkTarget::NewTab,
    ));
    commands.push(PageCommand::EndRow);
    commands.push(PageCommand::Button {
        label: Some("Close".into()),
        icon: Some(Icon::Close),
        style: ButtonStyle::Ghost,
        action: Action::CloseProject,
    });
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{PageEvent, reduce};
    use crate::views::test_util::{assert_balanced, texts};

    #[test]
    fn nothing_selected_renders_nothing() {
        assert!(render_project_dialog(&Portfolio::builtin(), &PageState::new()).is_empty());
    }

    #[test]
    fn out_of_range_selection_renders_nothing() {
        let state = reduce(&PageState::new(), PageEvent::OpenProject(99));
        assert!(render_project_dialog(&Portfolio::builtin(), &state).is_empty());
    }

    #[test]
    fn falls_back_to_short_description() {
        let p = Portfolio::builtin();
        let state = reduce(&PageState::new(), PageEvent::OpenProject(0));
        let cmds = render_project_dialog(&p, &state);
        assert_balanced(&cmds);
        let t = texts(&cmds);
        assert!(t.contains(&p.projects[0].description.as_str()));
        assert!(!t.contains(&"Challenges"));
    }

    #[test]
    fn shows_details_when_present() {
        let mut p = Portfolio::builtin();
        p.projects[1].long_description = Some("Long".into());
        p.projects[1].challenges = Some("Class imbalance".into());
        p.projects[1].learnings = Some("Feature scaling".into());
        let state = reduce(&PageState::new(), PageEvent::OpenProject(1));
        let t = texts(&render_project_dialog(&p, &state)).join("|");
        assert!(t.contains("Long|Challenges|Class imbalance|Learnings|Feature scaling"));
    }
}
