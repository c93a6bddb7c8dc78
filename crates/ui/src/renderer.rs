use egui::{
    Align, Align2, Color32, CornerRadius, FontId, Frame, Layout, Margin, RichText, Sense, Stroke,
};
use folio_core::PageEvent;
use folio_protocol::{
    ButtonStyle, HeadingLevel, Icon, LinkTarget, PageCommand, RowAlign, SectionId, SectionLayout,
    SectionLayouts, TextSize, ThemeMode, ThemeToken,
};

use crate::theme;

/// Grids collapse to a single column below this width.
const GRID_BREAKPOINT: f32 = 768.0;
/// Vertical padding above and below every section.
const SECTION_PADDING: f32 = 80.0;

/// Result of rendering a command list.
#[derive(Debug, Default)]
pub struct RenderResult {
    /// Presses and edits, in the order they happened this frame.
    pub events: Vec<PageEvent>,
    /// Extents of every section drawn, relative to `origin_y`.
    pub layouts: SectionLayouts,
}

/// Render a list of `PageCommand` into an egui `Ui`.
///
/// `origin_y` is the screen position of the scroll content's top edge;
/// section layouts are reported relative to it. When `pending_scroll` names
/// a section that gets drawn, the enclosing scroll area is asked to bring it
/// to the top and a `ScrollSettled` event is emitted.
pub fn render_commands(
    ui: &mut egui::Ui,
    commands: &[PageCommand],
    mode: ThemeMode,
    origin_y: f32,
    pending_scroll: Option<SectionId>,
) -> RenderResult {
    let mut renderer = Renderer {
        mode,
        origin_y,
        pending_scroll,
        cell_width: None,
        scroll_areas: 0,
        result: RenderResult::default(),
    };
    renderer.render_slice(ui, commands);
    renderer.result
}

struct Renderer {
    mode: ThemeMode,
    origin_y: f32,
    pending_scroll: Option<SectionId>,
    /// Width handed to each card while inside a grid.
    cell_width: Option<f32>,
    scroll_areas: usize,
    result: RenderResult,
}

impl Renderer {
    fn color(&self, token: ThemeToken) -> Color32 {
        theme::resolve(token, self.mode)
    }

    fn render_slice(&mut self, ui: &mut egui::Ui, mut cmds: &[PageCommand]) {
        while let Some((cmd, rest)) = cmds.split_first() {
            if cmd.depth_delta() > 0 {
                let (children, after) = split_container(rest);
                self.container(ui, cmd, children);
                cmds = after;
            } else {
                self.leaf(ui, cmd);
                cmds = rest;
            }
        }
    }

    fn container(&mut self, ui: &mut egui::Ui, cmd: &PageCommand, children: &[PageCommand]) {
        match cmd {
            PageCommand::BeginSection { section, .. } => self.section(ui, *section, children),
            PageCommand::BeginCard { fill } => self.card(ui, *fill, children),
            PageCommand::BeginGrid { columns } => self.grid(ui, *columns, children),
            PageCommand::BeginRow { align } => self.row(ui, *align, children),
            PageCommand::BeginScroll { height } => {
                self.scroll_areas += 1;
                egui::ScrollArea::vertical()
                    .id_salt(("folio_scroll", self.scroll_areas))
                    .max_height(*height as f32)
                    .auto_shrink([false, true])
                    .show(ui, |ui| self.render_slice(ui, children));
            }
            _ => self.render_slice(ui, children),
        }
    }

    fn section(&mut self, ui: &mut egui::Ui, section: SectionId, children: &[PageCommand]) {
        let rect = ui
            .vertical(|ui| {
                ui.add_space(SECTION_PADDING);
                self.render_slice(ui, children);
                ui.add_space(SECTION_PADDING);
            })
            .response
            .rect;

        self.result.layouts.set(
            section,
            SectionLayout::new(
                f64::from(rect.top() - self.origin_y),
                f64::from(rect.height()),
            ),
        );

        if self.pending_scroll == Some(section) {
            ui.scroll_to_rect(rect, Some(Align::TOP));
            self.pending_scroll = None;
            self.result.events.push(PageEvent::ScrollSettled);
        }
    }

    fn card(&mut self, ui: &mut egui::Ui, fill: ThemeToken, children: &[PageCommand]) {
        let frame = Frame::new()
            .fill(self.color(fill))
            .stroke(Stroke::new(1.0, self.color(ThemeToken::Border)))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(Margin::same(20));

        // Cards nested in a card do not inherit the grid cell width.
        match self.cell_width.take() {
            Some(width) => {
                ui.allocate_ui_with_layout(
                    egui::vec2(width, 0.0),
                    Layout::top_down(Align::LEFT),
                    |ui| {
                        ui.set_width(width);
                        frame.show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            self.render_slice(ui, children);
                        });
                    },
                );
                self.cell_width = Some(width);
            }
            None => {
                frame.show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    self.render_slice(ui, children);
                });
            }
        }
    }

    fn grid(&mut self, ui: &mut egui::Ui, columns: u8, children: &[PageCommand]) {
        let available = ui.available_width();
        let columns = if available < GRID_BREAKPOINT {
            1.0
        } else {
            f32::from(columns.max(1))
        };
        let spacing = ui.spacing().item_spacing.x;
        let width = ((available - spacing * (columns - 1.0)) / columns).floor();

        let outer = self.cell_width.replace(width);
        ui.with_layout(
            Layout::left_to_right(Align::TOP).with_main_wrap(true),
            |ui| self.render_slice(ui, children),
        );
        self.cell_width = outer;
    }

    fn row(&mut self, ui: &mut egui::Ui, align: RowAlign, children: &[PageCommand]) {
        let parts = items(children);
        match align {
            RowAlign::Start => {
                ui.horizontal_wrapped(|ui| {
                    for part in &parts {
                        self.render_slice(ui, part);
                    }
                });
            }
            RowAlign::End => {
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    for part in parts.iter().rev() {
                        self.render_slice(ui, part);
                    }
                });
            }
            RowAlign::SpaceBetween => {
                ui.horizontal(|ui| {
                    let Some((first, rest)) = parts.split_first() else {
                        return;
                    };
                    self.render_slice(ui, first);
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        for part in rest.iter().rev() {
                            self.render_slice(ui, part);
                        }
                    });
                });
            }
        }
    }

    fn leaf(&mut self, ui: &mut egui::Ui, cmd: &PageCommand) {
        match cmd {
            PageCommand::Heading { text, level, color } => {
                let size = match level {
                    HeadingLevel::Display => theme::FONT_DISPLAY,
                    HeadingLevel::Section => theme::FONT_SECTION,
                    HeadingLevel::Card => theme::FONT_CARD,
                    HeadingLevel::Minor => theme::FONT_MINOR,
                };
                ui.label(RichText::new(text).size(size).strong().color(self.color(*color)));
                if *level == HeadingLevel::Section {
                    ui.add_space(24.0);
                }
            }
            PageCommand::Text { text, size, color } => {
                let size = match size {
                    TextSize::Lead => theme::FONT_LEAD,
                    TextSize::Body => theme::FONT_BODY,
                    TextSize::Small => theme::FONT_SMALL,
                };
                ui.label(RichText::new(text).size(size).color(self.color(*color)));
            }
            PageCommand::Bullet { text } => {
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new("•").color(self.color(ThemeToken::TextMuted)));
                    ui.label(RichText::new(text).color(self.color(ThemeToken::TextSecondary)));
                });
            }
            PageCommand::Chip { text } => {
                Frame::new()
                    .fill(self.color(ThemeToken::ChipBackground))
                    .corner_radius(CornerRadius::same(12))
                    .inner_margin(Margin::symmetric(10, 3))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(text)
                                .size(theme::FONT_TINY)
                                .color(self.color(ThemeToken::ChipText)),
                        );
                    });
            }
            PageCommand::Link {
                label,
                href,
                icon,
                target,
            } => self.link(ui, label, href, *icon, target),
            PageCommand::Button {
                label,
                icon,
                style,
                action,
            } => {
                let response = self.button(ui, label.as_deref(), *icon, *style);
                if response.clicked() {
                    self.result.events.push(PageEvent::from(*action));
                }
            }
            PageCommand::NavItem {
                section,
                active,
                in_menu,
            } => {
                let text = if *active {
                    RichText::new(section.label())
                        .size(theme::FONT_NAV_ACTIVE)
                        .strong()
                        .color(self.color(ThemeToken::NavActive))
                } else {
                    RichText::new(section.label())
                        .size(theme::FONT_NAV)
                        .color(self.color(ThemeToken::NavInactive))
                };
                if ui.add(egui::Button::new(text).frame(false)).clicked() {
                    self.result.events.push(PageEvent::Navigate {
                        section: *section,
                        from_menu: *in_menu,
                    });
                }
            }
            PageCommand::Image {
                src,
                alt,
                aspect_ratio,
                max_width,
            } => self.image_placeholder(ui, src, alt, *aspect_ratio, *max_width),
            PageCommand::Input {
                field,
                placeholder,
                value,
                multiline,
            } => {
                let mut value = value.clone();
                let edit = if *multiline {
                    egui::TextEdit::multiline(&mut value).desired_rows(5)
                } else {
                    egui::TextEdit::singleline(&mut value)
                };
                let response = ui.add(
                    edit.hint_text(placeholder.as_str())
                        .text_color(self.color(ThemeToken::InputText))
                        .desired_width(f32::INFINITY),
                );
                if response.changed() {
                    self.result.events.push(PageEvent::ContactEdited {
                        field: *field,
                        value,
                    });
                }
            }
            PageCommand::Separator => {
                ui.separator();
            }
            // Container ends are consumed by `split_container`.
            _ => {}
        }
    }

    fn link(
        &self,
        ui: &mut egui::Ui,
        label: &str,
        href: &str,
        icon: Option<Icon>,
        target: &LinkTarget,
    ) {
        let text = RichText::new(icon_caption(label, icon)).color(self.color(ThemeToken::LinkText));
        let new_tab = !matches!(target, LinkTarget::SameTab);
        let mut response =
            ui.add(egui::Hyperlink::from_label_and_url(text, href).open_in_new_tab(new_tab));
        if label.is_empty() {
            if let Some(icon) = icon {
                response = response.on_hover_text(icon.name());
            }
        }
        if let LinkTarget::Download { file_name } = target {
            response.on_hover_text(format!("Download {file_name}"));
        }
    }

    fn button(
        &self,
        ui: &mut egui::Ui,
        label: Option<&str>,
        icon: Option<Icon>,
        style: ButtonStyle,
    ) -> egui::Response {
        let caption = icon_caption(label.unwrap_or(""), icon);
        let text = |token| RichText::new(caption.as_str()).color(self.color(token));
        let button = match style {
            ButtonStyle::Primary => egui::Button::new(text(ThemeToken::ButtonPrimaryText))
                .fill(self.color(ThemeToken::ButtonPrimaryFill)),
            ButtonStyle::Outline => egui::Button::new(text(ThemeToken::ButtonOutline))
                .fill(Color32::TRANSPARENT)
                .stroke(Stroke::new(1.0, self.color(ThemeToken::ButtonOutline))),
            ButtonStyle::Subtle => egui::Button::new(text(ThemeToken::ButtonSubtleText))
                .fill(self.color(ThemeToken::ButtonSubtleFill)),
            ButtonStyle::Ghost => egui::Button::new(text(ThemeToken::TextPrimary)).frame(false),
        };
        let response = ui.add(button);
        match (label, icon) {
            (None, Some(icon)) => response.on_hover_text(icon.name()),
            _ => response,
        }
    }

    /// Images are drawn as labelled boxes of the right proportions.
    fn image_placeholder(
        &self,
        ui: &mut egui::Ui,
        src: &str,
        alt: &str,
        aspect_ratio: f64,
        max_width: Option<f64>,
    ) {
        let available = ui.available_width();
        let width = max_width.map_or(available, |w| (w as f32).min(available));
        let size = egui::vec2(width, width * aspect_ratio as f32);
        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());

        let painter = ui.painter();
        painter.rect_filled(
            rect,
            CornerRadius::same(6),
            self.color(ThemeToken::ChipBackground),
        );
        if rect.width() >= 96.0 {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                alt,
                FontId::proportional(theme::FONT_SMALL),
                self.color(ThemeToken::TextMuted),
            );
        }
        response.on_hover_text(format!("{alt} ({src})"));
    }
}

/// Icon glyph, label, or both separated by a space.
fn icon_caption(label: &str, icon: Option<Icon>) -> String {
    match icon {
        Some(icon) if label.is_empty() => icon.glyph().to_owned(),
        Some(icon) => format!("{} {label}", icon.glyph()),
        None => label.to_owned(),
    }
}

/// Split `cmds`, which start right after a `Begin*`, into the container's
/// children and whatever follows its matching `End*`.
fn split_container(cmds: &[PageCommand]) -> (&[PageCommand], &[PageCommand]) {
    let mut depth = 1;
    for (i, cmd) in cmds.iter().enumerate() {
        depth += cmd.depth_delta();
        if depth == 0 {
            return (&cmds[..i], &cmds[i + 1..]);
        }
    }
    (cmds, &[])
}

/// Top-level items of a child list: single commands or whole containers.
fn items(mut cmds: &[PageCommand]) -> Vec<&[PageCommand]> {
    let mut out = Vec::new();
    while let Some((first, rest)) = cmds.split_first() {
        let len = if first.depth_delta() > 0 {
            let (_, after) = split_container(rest);
            cmds.len() - after.len()
        } else {
            1
        };
        let (item, remaining) = cmds.split_at(len);
        out.push(item);
        cmds = remaining;
    }
    out
}
