use folio_protocol::{Icon, LinkTarget, PageCommand, RowAlign, SectionId, TextSize, ThemeToken};

use super::{begin_row, begin_section, link, text};
use crate::content::{Portfolio, SocialKind};

/// Bio, résumé download, and profile links.
pub fn render_about(portfolio: &Portfolio) -> Vec<PageCommand> {
    let profile = &portfolio.profile;
    let mut commands = begin_section(SectionId::About);
    commands.push(text(&profile.bio, TextSize::Lead, ThemeToken::TextPrimary));

    commands.push(begin_row(RowAlign::Start));
    commands.push(link(
        "Download Résumé",
        &profile.resume_path,
        Some(Icon::FileDown),
        LinkTarget::Download {
            file_name: profile.resume_file_name.clone(),
        },
    ));
    for (kind, label, icon) in [
        (SocialKind::Github, "GitHub", Icon::Github),
        (SocialKind::Linkedin, "LinkedIn", Icon::Linkedin),
    ] {
        if let Some(social) = portfolio.social(kind) {
            commands.push(link(label, &social.href, Some(icon), LinkTarget::NewTab));
        }
    }
    commands.push(PageCommand::EndRow);

    commands.push(PageCommand::EndSection);
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_util::{assert_balanced, links};

    #[test]
    fn offers_resume_download_and_profiles() {
        let cmds = render_about(&Portfolio::builtin());
        assert_balanced(&cmds);
        let labels: Vec<&str> = links(&cmds).into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["Download Résumé", "GitHub", "LinkedIn"]);
        assert!(cmds.iter().any(|c| matches!(
            c,
            PageCommand::Link { target: LinkTarget::Download { file_name }, .. }
                if file_name == "resume_SoubhagyaranjanDas.pdf"
        )));
    }

    #[test]
    fn missing_social_is_skipped() {
        let mut p = Portfolio::builtin();
        p.socials.retain(|s| s.kind != SocialKind::Linkedin);
        let rendered = render_about(&p);
        let labels: Vec<&str> = links(&rendered).into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["Download Résumé", "GitHub"]);
    }
}
