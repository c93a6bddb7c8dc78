use std::io::{Stdout, stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use folio_core::views::{self, navigation};
use folio_core::{PageEvent, PageState, Portfolio, ScrollGate, apply};
use folio_protocol::{
    ButtonStyle, HeadingLevel, Icon, PageCommand, SectionId, SectionLayout, SectionLayouts,
    ThemeMode, ThemeToken, Viewport,
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Width of the navigation column, including its border.
const NAV_WIDTH: u16 = 28;
/// Lines moved per mouse wheel notch.
const WHEEL_STEP: usize = 3;

const fn rgb(v: u32) -> Color {
    Color::Rgb((v >> 16) as u8, (v >> 8) as u8, v as u8)
}

fn theme_to_color(token: ThemeToken, mode: ThemeMode) -> Color {
    // Tailwind gray scale
    match (mode, token) {
        (ThemeMode::Dark, ThemeToken::Background) => rgb(0x111827),
        (ThemeMode::Dark, ThemeToken::NavBackground | ThemeToken::Surface) => rgb(0x1f2937),
        (ThemeMode::Dark, ThemeToken::Border | ThemeToken::ChipBackground) => rgb(0x374151),
        (ThemeMode::Dark, ThemeToken::ButtonSubtleFill | ThemeToken::InputBackground) => {
            rgb(0x374151)
        }
        (ThemeMode::Dark, ThemeToken::TextPrimary | ThemeToken::NavInactive) => rgb(0xf3f4f6),
        (ThemeMode::Dark, ThemeToken::TextSecondary | ThemeToken::ButtonSubtleText) => {
            rgb(0xd1d5db)
        }
        (ThemeMode::Dark, ThemeToken::TextMuted) => rgb(0x9ca3af),
        (ThemeMode::Dark, ThemeToken::ButtonPrimaryText) => rgb(0x111827),
        (ThemeMode::Dark, _) => rgb(0xffffff),

        (ThemeMode::Light, ThemeToken::Background) => rgb(0xf9fafb),
        (ThemeMode::Light, ThemeToken::NavBackground | ThemeToken::Surface) => rgb(0xffffff),
        (ThemeMode::Light, ThemeToken::InputBackground | ThemeToken::ButtonPrimaryText) => {
            rgb(0xffffff)
        }
        (ThemeMode::Light, ThemeToken::Border | ThemeToken::ChipBackground) => rgb(0xe5e7eb),
        (ThemeMode::Light, ThemeToken::ButtonSubtleFill) => rgb(0xf3f4f6),
        (ThemeMode::Light, ThemeToken::TextSecondary | ThemeToken::TextMuted) => rgb(0x4b5563),
        (ThemeMode::Light, ThemeToken::ButtonSubtleText) => rgb(0x374151),
        (
            ThemeMode::Light,
            ThemeToken::Heading
            | ThemeToken::NavActive
            | ThemeToken::LinkText
            | ThemeToken::ChipText,
        ) => rgb(0x000000),
        (ThemeMode::Light, _) => rgb(0x111827),
    }
}

/// The page flattened into terminal lines. One line is one unit of the
/// tracker's coordinate system.
pub struct PageLines {
    pub lines: Vec<Line<'static>>,
    pub layouts: SectionLayouts,
}

/// Lay out `commands` into lines at most `width` columns wide.
pub fn layout_page(commands: &[PageCommand], width: usize, mode: ThemeMode) -> PageLines {
    let mut builder = LineBuilder {
        width: width.max(8),
        mode,
        indent: 0,
        lines: Vec::new(),
        row: Vec::new(),
        row_depth: 0,
        section_start: None,
        layouts: SectionLayouts::new(),
    };
    for cmd in commands {
        builder.command(cmd);
    }
    builder.flush_row();
    PageLines {
        lines: builder.lines,
        layouts: builder.layouts,
    }
}

struct LineBuilder {
    width: usize,
    mode: ThemeMode,
    indent: usize,
    lines: Vec<Line<'static>>,
    /// Spans collected for the row being built; nested rows share it.
    row: Vec<Span<'static>>,
    row_depth: usize,
    section_start: Option<(SectionId, usize)>,
    layouts: SectionLayouts,
}

impl LineBuilder {
    fn style(&self, token: ThemeToken) -> Style {
        Style::default().fg(theme_to_color(token, self.mode))
    }

    fn available(&self) -> usize {
        self.width.saturating_sub(self.indent).max(1)
    }

    fn push_line(&mut self, spans: Vec<Span<'static>>) {
        let mut line = vec![Span::raw(" ".repeat(self.indent))];
        line.extend(spans);
        self.lines.push(Line::from(line));
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn rule(&mut self) {
        let rule = Span::styled("─".repeat(self.available()), self.style(ThemeToken::Border));
        self.push_line(vec![rule]);
    }

    fn flush_row(&mut self) {
        if !self.row.is_empty() {
            let spans = std::mem::take(&mut self.row);
            self.push_line(spans);
        }
    }

    fn command(&mut self, cmd: &PageCommand) {
        match cmd {
            PageCommand::BeginSection { section, .. } => {
                self.section_start = Some((*section, self.lines.len()));
            }
            PageCommand::EndSection => {
                self.blank();
                self.blank();
                if let Some((section, start)) = self.section_start.take() {
                    let height = self.lines.len() - start;
                    self.layouts
                        .set(section, SectionLayout::new(start as f64, height as f64));
                }
            }
            PageCommand::BeginCard { .. } => {
                self.rule();
                self.indent += 2;
            }
            PageCommand::EndCard => {
                self.indent = self.indent.saturating_sub(2);
                self.rule();
                self.blank();
            }
            PageCommand::BeginRow { .. } => self.row_depth += 1,
            PageCommand::EndRow => {
                self.row_depth = self.row_depth.saturating_sub(1);
                if self.row_depth == 0 {
                    self.flush_row();
                }
            }
            // Grids stack their cards and scroll panes show every entry.
            PageCommand::BeginGrid { .. }
            | PageCommand::EndGrid
            | PageCommand::BeginScroll { .. }
            | PageCommand::EndScroll => {}
            leaf if self.row_depth > 0 => {
                if let Some(span) = self.inline(leaf) {
                    if !self.row.is_empty() {
                        self.row.push(Span::raw("  "));
                    }
                    self.row.push(span);
                }
            }
            leaf => self.block(leaf),
        }
    }

    /// A leaf laid out on lines of its own.
    fn block(&mut self, cmd: &PageCommand) {
        match cmd {
            PageCommand::Heading { text, level, color } => {
                let mut style = self.style(*color).add_modifier(Modifier::BOLD);
                let text = match level {
                    HeadingLevel::Section => {
                        style = style.add_modifier(Modifier::UNDERLINED);
                        text.to_uppercase()
                    }
                    _ => text.clone(),
                };
                for chunk in wrap(&text, self.available()) {
                    self.push_line(vec![Span::styled(chunk, style)]);
                }
                if *level == HeadingLevel::Section {
                    self.blank();
                }
            }
            PageCommand::Text { text, color, .. } => {
                let style = self.style(*color);
                for chunk in wrap(text, self.available()) {
                    self.push_line(vec![Span::styled(chunk, style)]);
                }
            }
            PageCommand::Bullet { text } => {
                let style = self.style(ThemeToken::TextSecondary);
                let chunks = wrap(text, self.available().saturating_sub(2));
                for (i, chunk) in chunks.into_iter().enumerate() {
                    let marker = if i == 0 { "• " } else { "  " };
                    self.push_line(vec![
                        Span::styled(marker, self.style(ThemeToken::TextMuted)),
                        Span::styled(chunk, style),
                    ]);
                }
            }
            PageCommand::Separator => self.rule(),
            PageCommand::NavItem { section, active, .. } => {
                let line = if *active {
                    vec![Span::styled(
                        format!("▸ {}", section.label()),
                        self.style(ThemeToken::NavActive)
                            .add_modifier(Modifier::BOLD),
                    )]
                } else {
                    vec![Span::styled(
                        format!("  {}", section.label()),
                        self.style(ThemeToken::NavInactive),
                    )]
                };
                self.push_line(line);
            }
            other => {
                if let Some(span) = self.inline(other) {
                    self.push_line(vec![span]);
                }
            }
        }
    }

    /// A leaf as a single span, for use inside rows.
    fn inline(&self, cmd: &PageCommand) -> Option<Span<'static>> {
        let span = match cmd {
            PageCommand::Heading { text, color, .. } => {
                Span::styled(text.clone(), self.style(*color).add_modifier(Modifier::BOLD))
            }
            PageCommand::Text { text, color, .. } => Span::styled(text.clone(), self.style(*color)),
            PageCommand::Bullet { text } => Span::styled(
                format!("• {text}"),
                self.style(ThemeToken::TextSecondary),
            ),
            PageCommand::Chip { text } => Span::styled(
                format!(" {text} "),
                self.style(ThemeToken::ChipText)
                    .bg(theme_to_color(ThemeToken::ChipBackground, self.mode)),
            ),
            PageCommand::Link { label, icon, .. } => Span::styled(
                icon_caption(label, *icon),
                self.style(ThemeToken::LinkText)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            PageCommand::Button {
                label, icon, style, ..
            } => {
                let caption = icon_caption(label.as_deref().unwrap_or(""), *icon);
                let token = match style {
                    ButtonStyle::Primary => ThemeToken::ButtonPrimaryFill,
                    ButtonStyle::Outline => ThemeToken::ButtonOutline,
                    ButtonStyle::Subtle => ThemeToken::ButtonSubtleText,
                    ButtonStyle::Ghost => ThemeToken::TextPrimary,
                };
                Span::styled(format!("[ {caption} ]"), self.style(token))
            }
            PageCommand::NavItem { section, .. } => {
                Span::styled(section.label(), self.style(ThemeToken::NavInactive))
            }
            PageCommand::Image { alt, .. } => {
                Span::styled(format!("▧ {alt}"), self.style(ThemeToken::TextMuted))
            }
            PageCommand::Input {
                placeholder, value, ..
            } => {
                let shown = if value.is_empty() {
                    placeholder.clone()
                } else {
                    value.replace('\n', " ⏎ ")
                };
                Span::styled(
                    format!("▏{shown}"),
                    self.style(ThemeToken::InputText)
                        .bg(theme_to_color(ThemeToken::InputBackground, self.mode)),
                )
            }
            _ => return None,
        };
        Some(span)
    }
}

fn icon_caption(label: &str, icon: Option<Icon>) -> String {
    match icon {
        Some(icon) if label.is_empty() => icon.glyph().to_owned(),
        Some(icon) => format!("{} {label}", icon.glyph()),
        None => label.to_owned(),
    }
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let len = current.chars().count();
        if len > 0 && len + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Show the page full-screen until the user quits.
pub fn render_tui(portfolio: &Portfolio, page: &mut PageState) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    apply(page, PageEvent::Mounted);
    let result = event_loop(&mut terminal, portfolio, page);
    apply(page, PageEvent::Unmounted);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// One laid-out frame of the page.
struct Screen {
    content: PageLines,
    nav: PageLines,
    nav_width: u16,
    page_height: usize,
    max_scroll: usize,
}

/// Scroll position of the terminal page and what the tracker last saw of it.
#[derive(Default)]
struct Viewer {
    scroll: usize,
    gate: ScrollGate,
}

impl Viewer {
    /// Lay out the page for a `width` x `height` terminal, settle any pending
    /// navigation and report scroll movement to the tracker.
    fn prepare(
        &mut self,
        portfolio: &Portfolio,
        page: &mut PageState,
        width: u16,
        height: u16,
    ) -> Screen {
        let nav_width = NAV_WIDTH.min(width / 3);
        let content_width = usize::from(width.saturating_sub(nav_width + 2));
        let page_height = usize::from(height.saturating_sub(1));

        let content = layout_page(
            &views::render_page(portfolio, page),
            content_width,
            page.theme,
        );
        let max_scroll = content.lines.len().saturating_sub(page_height);

        if let Some(section) = page.pending_scroll {
            if let Some(layout) = content.layouts.get(section) {
                self.scroll = layout.top as usize;
            }
            apply(page, PageEvent::ScrollSettled);
        }
        self.scroll = self.scroll.min(max_scroll);

        let viewport = Viewport::new(self.scroll as f64, page_height as f64);
        if let Some(event) = self.gate.observe(viewport, content.layouts) {
            apply(page, event);
        }

        let nav = layout_page(
            &navigation::render_sidebar(portfolio, page),
            usize::from(nav_width.saturating_sub(2)),
            page.theme,
        );

        Screen {
            content,
            nav,
            nav_width,
            page_height,
            max_scroll,
        }
    }
}

fn event_loop(terminal: &mut Term, portfolio: &Portfolio, page: &mut PageState) -> Result<()> {
    let mut viewer = Viewer::default();

    loop {
        let size = terminal.size()?;
        let Screen {
            content,
            nav,
            nav_width,
            page_height,
            max_scroll,
        } = viewer.prepare(portfolio, page, size.width, size.height);
        let scroll = viewer.scroll;
        let mode = page.theme;

        terminal.draw(|frame| {
            let area = frame.area();
            let background = Style::default().bg(theme_to_color(ThemeToken::Background, mode));

            let nav_area = Rect::new(0, 0, nav_width, area.height.saturating_sub(1));
            let nav_block = Block::default()
                .borders(Borders::RIGHT)
                .border_style(Style::default().fg(theme_to_color(ThemeToken::Border, mode)))
                .style(Style::default().bg(theme_to_color(ThemeToken::NavBackground, mode)));
            frame.render_widget(
                Paragraph::new(nav.lines.clone()).block(nav_block),
                nav_area,
            );

            let content_area = Rect::new(
                nav_width + 1,
                0,
                area.width.saturating_sub(nav_width + 1),
                area.height.saturating_sub(1),
            );
            let visible: Vec<Line<'static>> = content
                .lines
                .iter()
                .skip(scroll)
                .take(page_height)
                .cloned()
                .collect();
            frame.render_widget(Paragraph::new(visible).style(background), content_area);

            let status_area = Rect::new(0, area.height.saturating_sub(1), area.width, 1);
            let status = Block::default()
                .title(format!(
                    " {} | ↑↓ scroll | 1-6 jump | t theme | c certifications | q quit ",
                    page_label(page)
                ))
                .style(
                    Style::default()
                        .fg(theme_to_color(ThemeToken::ButtonPrimaryText, mode))
                        .bg(theme_to_color(ThemeToken::ButtonPrimaryFill, mode)),
                );
            frame.render_widget(status, status_area);
        })?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => viewer.scroll += 1,
                KeyCode::Up | KeyCode::Char('k') => viewer.scroll = scroll.saturating_sub(1),
                KeyCode::PageDown | KeyCode::Char(' ') => viewer.scroll += page_height,
                KeyCode::PageUp => viewer.scroll = scroll.saturating_sub(page_height),
                KeyCode::Home => viewer.scroll = 0,
                KeyCode::End => viewer.scroll = max_scroll,
                KeyCode::Char('t') => apply(page, PageEvent::ToggleDarkMode),
                KeyCode::Char('c') => apply(page, PageEvent::ToggleCertifications),
                KeyCode::Char(c) => {
                    if let Some(section) = section_for_key(c) {
                        apply(
                            page,
                            PageEvent::Navigate {
                                section,
                                from_menu: false,
                            },
                        );
                    }
                }
                _ => {}
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => viewer.scroll += WHEEL_STEP,
                MouseEventKind::ScrollUp => viewer.scroll = scroll.saturating_sub(WHEEL_STEP),
                _ => {}
            },
            _ => {}
        }
    }
}

fn page_label(page: &PageState) -> String {
    let theme = if page.theme.is_dark() { "dark" } else { "light" };
    format!("{} · {theme}", page.active_section().label())
}

/// `1`..`6` jump to the sections in page order.
fn section_for_key(c: char) -> Option<SectionId> {
    let digit = c.to_digit(10)?;
    let index = usize::try_from(digit).ok()?.checked_sub(1)?;
    SectionId::ALL.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("the quick brown fox jumps over the lazy dog", 10);
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
        assert_eq!(lines.join(" "), "the quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn wrap_keeps_empty_text_as_one_line() {
        assert_eq!(wrap("", 10), vec![String::new()]);
    }

    #[test]
    fn digit_keys_map_to_sections() {
        assert_eq!(section_for_key('1'), Some(SectionId::About));
        assert_eq!(section_for_key('6'), Some(SectionId::Contact));
        assert_eq!(section_for_key('0'), None);
        assert_eq!(section_for_key('7'), None);
        assert_eq!(section_for_key('x'), None);
    }

    #[test]
    fn sections_tile_the_page() {
        let page = PageState::new();
        let out = layout_page(
            &views::render_page(&Portfolio::builtin(), &page),
            80,
            ThemeMode::Light,
        );
        let measured: Vec<(SectionId, SectionLayout)> = out.layouts.iter().collect();
        assert_eq!(measured.len(), SectionId::COUNT);
        assert_eq!(measured[0].1.top, 0.0);
        for pair in measured.windows(2) {
            assert_eq!(pair[1].1.top, pair[0].1.bottom());
        }
        let Some(last) = measured.last() else {
            panic!("no sections measured");
        };
        assert_eq!(last.1.bottom(), out.lines.len() as f64);
    }

    #[test]
    fn rows_become_single_lines() {
        let cmds = [
            PageCommand::BeginRow {
                align: folio_protocol::RowAlign::Start,
            },
            PageCommand::Chip { text: "Rust".into() },
            PageCommand::Chip { text: "egui".into() },
            PageCommand::EndRow,
        ];
        let out = layout_page(&cmds, 40, ThemeMode::Dark);
        assert_eq!(out.lines.len(), 1);
        assert_eq!(line_text(&out.lines[0]), " Rust    egui ");
    }

    #[test]
    fn sidebar_marks_the_active_section() {
        let page = PageState::new();
        let out = layout_page(
            &navigation::render_sidebar(&Portfolio::builtin(), &page),
            26,
            ThemeMode::Light,
        );
        let texts: Vec<String> = out.lines.iter().map(line_text).collect();
        assert!(texts.iter().any(|t| t == "▸ About"));
        assert!(texts.iter().any(|t| t == "  Skills"));
    }

    #[test]
    fn tracker_follows_terminal_scroll() {
        let portfolio = Portfolio::builtin();
        let mut page = PageState::new();
        apply(&mut page, PageEvent::Mounted);
        let out = layout_page(&views::render_page(&portfolio, &page), 80, ThemeMode::Light);
        let Some(blog) = out.layouts.get(SectionId::Blog) else {
            panic!("blog not measured");
        };
        apply(
            &mut page,
            PageEvent::Scrolled {
                viewport: Viewport::new(blog.top, 24.0),
                layouts: out.layouts,
            },
        );
        assert_eq!(page.active_section(), SectionId::Blog);
    }

    #[test]
    fn first_frame_keeps_about_active() {
        let portfolio = Portfolio::builtin();
        for (width, height) in [(80, 24), (120, 40)] {
            let mut page = PageState::new();
            apply(&mut page, PageEvent::Mounted);
            let mut viewer = Viewer::default();
            viewer.prepare(&portfolio, &mut page, width, height);
            viewer.prepare(&portfolio, &mut page, width, height);
            assert_eq!(page.active_section(), SectionId::About, "{width}x{height}");
        }
    }

    #[test]
    fn scrolling_after_launch_moves_the_tracker() {
        let portfolio = Portfolio::builtin();
        let mut page = PageState::new();
        apply(&mut page, PageEvent::Mounted);
        let mut viewer = Viewer::default();
        let screen = viewer.prepare(&portfolio, &mut page, 120, 40);
        let Some(blog) = screen.content.layouts.get(SectionId::Blog) else {
            panic!("blog not measured");
        };

        viewer.scroll = blog.top as usize;
        viewer.prepare(&portfolio, &mut page, 120, 40);
        let viewport = Viewport::new(viewer.scroll as f64, screen.page_height as f64);
        let Some(expected) = folio_core::resolve_active(viewport, &screen.content.layouts) else {
            panic!("no section under the scrolled viewport");
        };
        assert_ne!(expected, SectionId::About);
        assert_eq!(page.active_section(), expected);
    }

    #[test]
    fn digit_jump_scrolls_to_the_section() {
        let portfolio = Portfolio::builtin();
        let mut page = PageState::new();
        apply(&mut page, PageEvent::Mounted);
        let mut viewer = Viewer::default();
        viewer.prepare(&portfolio, &mut page, 120, 40);

        apply(
            &mut page,
            PageEvent::Navigate {
                section: SectionId::Experience,
                from_menu: false,
            },
        );
        let screen = viewer.prepare(&portfolio, &mut page, 120, 40);
        assert_eq!(page.pending_scroll, None);
        let Some(experience) = screen.content.layouts.get(SectionId::Experience) else {
            panic!("experience not measured");
        };
        assert_eq!(viewer.scroll, (experience.top as usize).min(screen.max_scroll));
    }
}
