use folio_protocol::{HeadingLevel, LinkTarget, PageCommand, RowAlign, SectionId, TextSize, ThemeToken};

use super::{begin_row, begin_section, card, heading, link, text};
use crate::content::Portfolio;

/// Blog excerpts, newest first as listed in the content.
pub fn render_blog(portfolio: &Portfolio) -> Vec<PageCommand> {
    let mut commands = begin_section(SectionId::Blog);
    for post in &portfolio.posts {
        commands.push(card());
        commands.push(heading(&post.title, HeadingLevel::Card));
        commands.push(text(&post.excerpt, TextSize::Body, ThemeToken::TextPrimary));
        commands.push(begin_row(RowAlign::SpaceBetween));
        commands.push(text(&post.date, TextSize::Small, ThemeToken::TextMuted));
        commands.push(link("Read More →", &post.link, None, LinkTarget::SameTab));
        commands.push(PageCommand::EndRow);
        commands.push(PageCommand::EndCard);
    }

    commands.push(begin_row(RowAlign::End));
    commands.push(link(
        "View All Blog Posts →",
        &portfolio.blog_index,
        None,
        LinkTarget::SameTab,
    ));
    commands.push(PageCommand::EndRow);
    commands.push(PageCommand::EndSection);
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_util::{assert_balanced, links, texts};

    #[test]
    fn lists_posts_with_dates() {
        let cmds = render_blog(&Portfolio::builtin());
        assert_balanced(&cmds);
        let t = texts(&cmds);
        assert!(t.contains(&"Getting Started with Version Control"));
        assert!(t.contains(&"2023-05-15"));
        let read_more = links(&cmds)
            .into_iter()
            .filter(|(l, _)| *l == "Read More →")
            .count();
        assert_eq!(read_more, 3);
    }

    #[test]
    fn empty_blog_still_links_to_index() {
        let mut p = Portfolio::builtin();
        p.posts.clear();
        let cmds = render_blog(&p);
        assert_eq!(links(&cmds), vec![("View All Blog Posts →", "/blog")]);
    }
}
