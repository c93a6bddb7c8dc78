use folio_protocol::{
    Action, ButtonStyle, ContactField, Icon, LinkTarget, PageCommand, RowAlign, SectionId,
    TextSize, ThemeToken,
};

use super::{begin_row, begin_section, link, text};
use crate::content::Portfolio;
use crate::state::ContactForm;

/// Contact details and the message form.
pub fn render_contact(portfolio: &Portfolio, form: &ContactForm) -> Vec<PageCommand> {
    let details = &portfolio.contact;
    let mut commands = begin_section(SectionId::Contact);
    commands.push(text(&details.blurb, TextSize::Lead, ThemeToken::TextPrimary));

    commands.push(begin_row(RowAlign::Start));
    commands.push(link(
        &details.email,
        &format!("mailto:{}", details.email),
        Some(Icon::Mail),
        LinkTarget::SameTab,
    ));
    commands.push(link(
        &details.phone_display,
        &format!("tel:{}", details.phone),
        Some(Icon::Phone),
        LinkTarget::SameTab,
    ));
    commands.push(PageCommand::EndRow);

    for (field, placeholder, multiline) in [
        (ContactField::Name, "Your Name", false),
        (ContactField::Email, "Your Email", false),
        (ContactField::Message, "Your Message", true),
    ] {
        commands.push(PageCommand::Input {
            field,
            placeholder: placeholder.into(),
            value: form.field(field).to_owned(),
            multiline,
        });
    }
    commands.push(PageCommand::Button {
        label: Some("Send Message".into()),
        icon: None,
        style: ButtonStyle::Primary,
        action: Action::SubmitContact,
    });
    commands.push(PageCommand::EndSection);
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_util::{assert_balanced, links};

    #[test]
    fn links_mail_and_phone() {
        let cmds = render_contact(&Portfolio::builtin(), &ContactForm::default());
        assert_balanced(&cmds);
        assert_eq!(
            links(&cmds),
            vec![
                (
                    "soubhagyaranjandas2000@gmail.com",
                    "mailto:soubhagyaranjandas2000@gmail.com"
                ),
                ("+91 8328862668", "tel:+918328862668"),
            ]
        );
    }

    #[test]
    fn inputs_reflect_draft() {
        let form = ContactForm {
            name: "Ada".into(),
            email: String::new(),
            message: "Hello".into(),
        };
        let cmds = render_contact(&Portfolio::builtin(), &form);
        let values: Vec<(ContactField, &str, bool)> = cmds
            .iter()
            .filter_map(|c| match c {
                PageCommand::Input {
                    field,
                    value,
                    multiline,
                    ..
                } => Some((*field, value.as_str(), *multiline)),
                _ => None,
            })
            .collect();
        assert_eq!(
            values,
            vec![
                (ContactField::Name, "Ada", false),
                (ContactField::Email, "", false),
                (ContactField::Message, "Hello", true),
            ]
        );
    }
}
