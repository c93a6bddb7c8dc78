use folio_protocol::{
    Action, ButtonStyle, HeadingLevel, Icon, LinkTarget, PageCommand, RowAlign, SectionId,
    TextSize, ThemeToken,
};

use super::{begin_row, begin_section, card, heading, link, text};
use crate::content::{Portfolio, Project};

/// 16:9 preview images.
pub const PREVIEW_ASPECT: f64 = 9.0 / 16.0;

/// Project cards and a link to the full archive.
pub fn render_projects(portfolio: &Portfolio) -> Vec<PageCommand> {
    let mut commands = begin_section(SectionId::Projects);
    commands.push(PageCommand::BeginGrid { columns: 2 });
    for (index, project) in portfolio.projects.iter().enumerate() {
        push_project_card(&mut commands, index, project);
    }
    commands.push(PageCommand::EndGrid);

    commands.push(begin_row(RowAlign::End));
    commands.push(link(
        "View Full Project Archive →",
        &portfolio.projects_archive,
        None,
        LinkTarget::SameTab,
    ));
    commands.push(PageCommand::EndRow);
    commands.push(PageCommand::EndSection);
    commands
}

pub(crate) fn preview_image(project: &Project) -> PageCommand {
    PageCommand::Image {
        src: project.image.clone(),
        alt: format!("{} preview", project.title),
        aspect_ratio: PREVIEW_ASPECT,
        max_width: None,
    }
}

fn push_project_card(commands: &mut Vec<PageCommand>, index: usize, project: &Project) {
    commands.push(card());
    commands.push(preview_image(project));
    commands.push(heading(&project.title, HeadingLevel::Card));
    commands.push(text(&project.description, TextSize::Body, ThemeToken::TextPrimary));

    commands.push(begin_row(RowAlign::Start));
    commands.extend(project.technologies.iter().map(|tech| PageCommand::Chip {
        text: tech.clone(),
    }));
    commands.push(PageCommand::EndRow);

    commands.push(begin_row(RowAlign::Start));
    commands.push(link("Code", &project.github, Some(Icon::Github), LinkTarget::NewTab));
    commands.push(link(
        "Live Demo",
        &project.live,
        Some(Icon::ExternalLink),
        LinkTarget::NewTab,
    ));
    commands.push(link("Read More Detail →", &project.link, None, LinkTarget::NewTab));
    commands.push(PageCommand::Button {
        label: Some("Details".into()),
        icon: None,
        style: ButtonStyle::Ghost,
        action: Action::OpenProject(index),
    });
    commands.push(PageCommand::EndRow);
    commands.push(PageCommand::EndCard);
}
