use folio_protocol::{HeadingLevel, PageCommand, SectionId};

use super::{begin_section, card, heading};
use crate::content::Portfolio;

/// One card per skill category, two columns on wide layouts.
pub fn render_skills(portfolio: &Portfolio) -> Vec<PageCommand> {
    let mut commands = begin_section(SectionId::Skills);
    commands.push(PageCommand::BeginGrid { columns: 2 });
    for group in &portfolio.skills {
        commands.push(card());
        commands.push(heading(&group.category, HeadingLevel::Card));
        commands.extend(group.skills.iter().map(|skill| PageCommand::Bullet {
            text: skill.clone(),
        }));
        commands.push(PageCommand::EndCard);
    }
    commands.push(PageCommand::EndGrid);
    commands.push(PageCommand::EndSection);
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_util::assert_balanced;

    #[test]
    fn one_card_per_category_with_all_skills() {
        let p = Portfolio::builtin();
        let cmds = render_skills(&p);
        assert_balanced(&cmds);
        let cards = cmds
            .iter()
            .filter(|c| matches!(c, PageCommand::BeginCard { .. }))
            .count();
        assert_eq!(cards, p.skills.len());
        let bullets = cmds
            .iter()
            .filter(|c| matches!(c, PageCommand::Bullet { .. }))
            .count();
        let expected: usize = p.skills.iter().map(|g| g.skills.len()).sum();
        assert_eq!(bullets, expected);
    }
}
