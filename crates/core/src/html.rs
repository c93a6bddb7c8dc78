//! HTML renderer: converts `PageCommand` lists into a standalone HTML page.

use folio_protocol::{
    Action, ButtonStyle, ContactField, HeadingLevel, Icon, LinkTarget, PageCommand, RowAlign,
    TextSize, ThemeMode, ThemeToken,
};

use crate::content::Portfolio;
use crate::state::PageState;
use crate::views;

/// Render the whole page (sidebar + sections) for static hosting.
pub fn export_page(portfolio: &Portfolio, theme: ThemeMode) -> String {
    let state = PageState {
        theme,
        ..PageState::new()
    };
    let nav = views::navigation::render_sidebar(portfolio, &state);
    let main = views::render_page(portfolio, &state);
    let title = format!("{} | {}", portfolio.profile.name, portfolio.profile.title);
    render_html(&nav, &main, theme, &title)
}

/// Render navigation and main commands as an HTML document string.
pub fn render_html(
    nav: &[PageCommand],
    main: &[PageCommand],
    mode: ThemeMode,
    title: &str,
) -> String {
    let dark = mode.is_dark();
    let mut html = String::with_capacity((nav.len() + main.len()) * 120 + 2048);
    html.push_str(&format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\
         <title>{}</title><style>{}</style></head><body>",
        escape_xml(title),
        stylesheet(dark),
    ));
    html.push_str("<nav>");
    push_commands(&mut html, nav);
    html.push_str("</nav><main>");
    push_commands(&mut html, main);
    html.push_str("</main></body></html>");
    html
}

fn push_commands(html: &mut String, commands: &[PageCommand]) {
    for cmd in commands {
        match cmd {
            PageCommand::BeginSection { section, .. } => {
                html.push_str(&format!(r#"<section id="{}">"#, section.anchor()));
            }
            PageCommand::EndSection => html.push_str("</section>"),
            PageCommand::BeginCard { fill } => {
                html.push_str(&format!(
                    r#"<div class="card" style="background:var(--{})">"#,
                    var_name(*fill),
                ));
            }
            PageCommand::BeginGrid { columns } => {
                html.push_str(&format!(r#"<div class="grid" style="--columns:{columns}">"#));
            }
            PageCommand::BeginRow { align } => {
                let class = match align {
                    RowAlign::Start => "row",
                    RowAlign::SpaceBetween => "row between",
                    RowAlign::End => "row end",
                };
                html.push_str(&format!(r#"<div class="{class}">"#));
            }
            PageCommand::BeginScroll { height } => {
                html.push_str(&format!(r#"<div class="scroll" style="height:{height}px">"#));
            }
            PageCommand::EndCard
            | PageCommand::EndGrid
            | PageCommand::EndRow
            | PageCommand::EndScroll => html.push_str("</div>"),
            PageCommand::Heading { text, level, color } => {
                let tag = match level {
                    HeadingLevel::Display => "h1",
                    HeadingLevel::Section => "h2",
                    HeadingLevel::Card => "h3",
                    HeadingLevel::Minor => "h4",
                };
                html.push_str(&format!(
                    r#"<{tag} style="color:var(--{})">{}</{tag}>"#,
                    var_name(*color),
                    escape_xml(text),
                ));
            }
            PageCommand::Text { text, size, color } => {
                let class = match size {
                    TextSize::Lead => "lead",
                    TextSize::Body => "body",
                    TextSize::Small => "small",
                };
                html.push_str(&format!(
                    r#"<p class="{class}" style="color:var(--{})">{}</p>"#,
                    var_name(*color),
                    escape_xml(text),
                ));
            }
            PageCommand::Bullet { text } => {
                html.push_str(&format!(r#"<p class="bullet">{}</p>"#, escape_xml(text)));
            }
            PageCommand::Chip { text } => {
                html.push_str(&format!(r#"<span class="chip">{}</span>"#, escape_xml(text)));
            }
            PageCommand::Link {
                label,
                href,
                icon,
                target,
            } => {
                let extra = match target {
                    LinkTarget::SameTab => String::new(),
                    LinkTarget::NewTab => r#" target="_blank" rel="noopener noreferrer""#.into(),
                    LinkTarget::Download { file_name } => {
                        format!(r#" download="{}""#, escape_xml(file_name))
                    }
                };
                let aria = match (label.is_empty(), icon) {
                    (true, Some(icon)) => format!(r#" aria-label="{}""#, icon.name()),
                    _ => String::new(),
                };
                let glyph = icon.map(|i| format!("{} ", i.glyph())).unwrap_or_default();
                html.push_str(&format!(
                    r#"<a href="{}"{extra}{aria}>{glyph}{}</a>"#,
                    escape_xml(href),
                    escape_xml(label),
                ));
            }
            PageCommand::Button {
                label,
                icon,
                style,
                action,
            } => {
                let class = match style {
                    ButtonStyle::Primary => "button primary",
                    ButtonStyle::Outline => "button outline",
                    ButtonStyle::Subtle => "button subtle",
                    ButtonStyle::Ghost => "button ghost",
                };
                let glyph = icon.map(Icon::glyph).unwrap_or_default();
                let label = label.as_deref().unwrap_or_default();
                // Only navigation works without a script.
                if let Action::Navigate(section) = action {
                    html.push_str(&format!(
                        r##"<a class="{class}" href="#{}">{glyph} {}</a>"##,
                        section.anchor(),
                        escape_xml(label),
                    ));
                } else {
                    html.push_str(&format!(
                        r#"<button type="button" class="{class}">{glyph} {}</button>"#,
                        escape_xml(label),
                    ));
                }
            }
            PageCommand::NavItem {
                section, active, ..
            } => {
                let class = if *active { "nav-item active" } else { "nav-item" };
                html.push_str(&format!(
                    r##"<a class="{class}" href="#{}">{}</a>"##,
                    section.anchor(),
                    section.label(),
                ));
            }
            PageCommand::Image {
                src,
                alt,
                aspect_ratio,
                max_width,
            } => {
                let max_width = max_width
                    .map(|w| format!("max-width:{w}px;"))
                    .unwrap_or_default();
                html.push_str(&format!(
                    r#"<img src="{}" alt="{}" style="{max_width}aspect-ratio:{}">"#,
                    escape_xml(src),
                    escape_xml(alt),
                    1.0 / aspect_ratio,
                ));
            }
            PageCommand::Input {
                field,
                placeholder,
                value,
                multiline,
            } => {
                let name = match field {
                    ContactField::Name => "name",
                    ContactField::Email => "email",
                    ContactField::Message => "message",
                };
                if *multiline {
                    html.push_str(&format!(
                        r#"<textarea name="{name}" placeholder="{}">{}</textarea>"#,
                        escape_xml(placeholder),
                        escape_xml(value),
                    ));
                } else {
                    html.push_str(&format!(
                        r#"<input name="{name}" placeholder="{}" value="{}">"#,
                        escape_xml(placeholder),
                        escape_xml(value),
                    ));
                }
            }
            PageCommand::Separator => html.push_str("<hr>"),
        }
    }
}

fn var_name(token: ThemeToken) -> &'static str {
    match token {
        ThemeToken::Background => "background",
        ThemeToken::NavBackground => "nav-background",
        ThemeToken::Surface => "surface",
        ThemeToken::Border => "border",
        ThemeToken::TextPrimary => "text",
        ThemeToken::TextSecondary => "text-secondary",
        ThemeToken::TextMuted => "text-muted",
        ThemeToken::Heading => "heading",
        ThemeToken::NavActive => "nav-active",
        ThemeToken::NavInactive => "nav-inactive",
        ThemeToken::ChipBackground => "chip",
        ThemeToken::ChipText => "chip-text",
        ThemeToken::LinkText => "link",
        ThemeToken::ButtonPrimaryFill => "button",
        ThemeToken::ButtonPrimaryText => "button-text",
        ThemeToken::ButtonOutline => "button-outline",
        ThemeToken::ButtonSubtleFill => "button-subtle",
        ThemeToken::ButtonSubtleText => "button-subtle-text",
        ThemeToken::InputBackground => "input",
        ThemeToken::InputText => "input-text",
    }
}

const TOKENS: [ThemeToken; 20] = [
    ThemeToken::Background,
    ThemeToken::NavBackground,
    ThemeToken::Surface,
    ThemeToken::Border,
    ThemeToken::TextPrimary,
    ThemeToken::TextSecondary,
    ThemeToken::TextMuted,
    ThemeToken::Heading,
    ThemeToken::NavActive,
    ThemeToken::NavInactive,
    ThemeToken::ChipBackground,
    ThemeToken::ChipText,
    ThemeToken::LinkText,
    ThemeToken::ButtonPrimaryFill,
    ThemeToken::ButtonPrimaryText,
    ThemeToken::ButtonOutline,
    ThemeToken::ButtonSubtleFill,
    ThemeToken::ButtonSubtleText,
    ThemeToken::InputBackground,
    ThemeToken::InputText,
];

fn stylesheet(dark: bool) -> String {
    let mut css = String::from(":root{");
    for token in TOKENS {
        css.push_str(&format!("--{}:{};", var_name(token), resolve_color(token, dark)));
    }
    css.push_str(
        "}\
         body{margin:0;font-family:Inter,system-ui,sans-serif;background:var(--background);color:var(--text)}\
         nav{padding:2rem;background:var(--nav-background)}\
         @media(min-width:768px){nav{position:fixed;top:0;left:0;width:16rem;height:100vh;box-sizing:border-box;overflow-y:auto}main{margin-left:16rem}}\
         main{padding:2rem}section{margin-bottom:4rem}\
         h1,h2,h3,h4{font-family:Caveat,cursive}h2{font-size:2.25rem}\
         .card{padding:1.5rem;border-radius:.5rem;box-shadow:0 10px 15px -3px rgba(0,0,0,.1);margin-bottom:1.5rem}\
         .grid{display:grid;gap:2rem}@media(min-width:768px){.grid{grid-template-columns:repeat(var(--columns),minmax(0,1fr))}}\
         .row{display:flex;flex-wrap:wrap;gap:1rem;align-items:center}.row.between{justify-content:space-between}.row.end{justify-content:flex-end}\
         .scroll{overflow-y:auto;padding-right:1rem}\
         .lead{font-size:1.125rem}.small{font-size:.875rem}\
         .chip{font-size:.75rem;padding:.25rem .5rem;border-radius:9999px;background:var(--chip);color:var(--chip-text)}\
         a{color:var(--link)}.nav-item{display:block;font-family:Caveat,cursive;font-size:1.125rem;color:var(--nav-inactive);text-decoration:none;margin:1rem 0}\
         .nav-item.active{font-size:1.25rem;font-weight:700;color:var(--nav-active)}\
         .button{display:inline-block;padding:.5rem 1rem;border-radius:.375rem;border:1px solid transparent;text-decoration:none}\
         .button.primary{background:var(--button);color:var(--button-text)}\
         .button.outline{border-color:var(--button-outline);background:transparent;color:var(--text)}\
         .button.subtle{background:var(--button-subtle);color:var(--button-subtle-text)}\
         .button.ghost{background:transparent;color:var(--text)}\
         input,textarea{display:block;width:100%;box-sizing:border-box;margin-bottom:1rem;padding:.5rem;border:1px solid var(--border);border-radius:.375rem;background:var(--input);color:var(--input-text)}\
         img{width:100%;border-radius:.5rem;background:var(--chip)}hr{border:0;border-top:1px solid var(--border)}",
    );
    css
}

fn resolve_color(token: ThemeToken, dark: bool) -> &'static str {
    // Tailwind gray scale
    if dark {
        match token {
            ThemeToken::Background => "#111827",
            ThemeToken::NavBackground | ThemeToken::Surface => "#1f2937",
            ThemeToken::Border => "#374151",
            ThemeToken::TextPrimary => "#f3f4f6",
            ThemeToken::TextSecondary => "#d1d5db",
            ThemeToken::TextMuted => "#9ca3af",
            ThemeToken::Heading | ThemeToken::NavActive | ThemeToken::LinkText => "#ffffff",
            ThemeToken::NavInactive => "#f3f4f6",
            ThemeToken::ChipBackground => "#374151",
            ThemeToken::ChipText => "#ffffff",
            ThemeToken::ButtonPrimaryFill => "#ffffff",
            ThemeToken::ButtonPrimaryText => "#111827",
            ThemeToken::ButtonOutline => "#ffffff",
            ThemeToken::ButtonSubtleFill => "#374151",
            ThemeToken::ButtonSubtleText => "#d1d5db",
            ThemeToken::InputBackground => "#374151",
            ThemeToken::InputText => "#ffffff",
        }
    } else {
        match token {
            ThemeToken::Background => "#f9fafb",
            ThemeToken::NavBackground | ThemeToken::Surface => "#ffffff",
            ThemeToken::Border => "#e5e7eb",
            ThemeToken::TextPrimary => "#111827",
            ThemeToken::TextSecondary => "#4b5563",
            ThemeToken::TextMuted => "#4b5563",
            ThemeToken::Heading | ThemeToken::NavActive | ThemeToken::LinkText => "#000000",
            ThemeToken::NavInactive => "#111827",
            ThemeToken::ChipBackground => "#e5e7eb",
            ThemeToken::ChipText => "#000000",
            ThemeToken::ButtonPrimaryFill => "#111827",
            ThemeToken::ButtonPrimaryText => "#ffffff",
            ThemeToken::ButtonOutline => "#111827",
            ThemeToken::ButtonSubtleFill => "#f3f4f6",
            ThemeToken::ButtonSubtleText => "#374151",
            ThemeToken::InputBackground => "#ffffff",
            ThemeToken::InputText => "#111827",
        }
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_protocol::SectionId;

    #[test]
    fn export_contains_every_section_anchor() {
        let html = export_page(&Portfolio::builtin(), ThemeMode::Light);
        assert!(html.starts_with("<!DOCTYPE html>"));
        for section in SectionId::ALL {
            assert!(html.contains(&format!(r#"<section id="{}">"#, section.anchor())));
            assert!(html.contains(&format!(r##"href="#{}""##, section.anchor())));
        }
        assert!(html.contains(r##"class="nav-item active" href="#about""##));
    }

    #[test]
    fn escapes_text() {
        let cmds = [PageCommand::Bullet {
            text: "Git & <Github>".into(),
        }];
        let html = render_html(&[], &cmds, ThemeMode::Light, "t");
        assert!(html.contains("Git &amp; &lt;Github&gt;"));
    }

    #[test]
    fn dark_mode_switches_palette() {
        let light = export_page(&Portfolio::builtin(), ThemeMode::Light);
        let dark = export_page(&Portfolio::builtin(), ThemeMode::Dark);
        assert!(light.contains("--background:#f9fafb"));
        assert!(dark.contains("--background:#111827"));
    }

    #[test]
    fn download_link_carries_file_name() {
        let html = export_page(&Portfolio::builtin(), ThemeMode::Light);
        assert!(html.contains(r#"download="resume_SoubhagyaranjanDas.pdf""#));
    }

    #[test]
    fn icon_only_links_get_accessible_names() {
        let html = export_page(&Portfolio::builtin(), ThemeMode::Light);
        assert!(html.contains(r#"aria-label="GitHub""#));
    }

    #[test]
    fn containers_nest_in_order() {
        let cmds = [
            PageCommand::BeginGrid { columns: 2 },
            PageCommand::BeginCard {
                fill: ThemeToken::Surface,
            },
            PageCommand::Chip { text: "Rust".into() },
            PageCommand::EndCard,
            PageCommand::EndGrid,
        ];
        let html = render_html(&[], &cmds, ThemeMode::Light, "t");
        assert!(html.contains(&format!(
            r#"<div class="grid" style="--columns:2"><div class="card" style="background:var(--{})"><span class="chip">Rust</span></div></div>"#,
            var_name(ThemeToken::Surface),
        )));
    }
}
