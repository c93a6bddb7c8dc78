use eframe::egui;
use folio_core::views::{self, dialog, navigation};
use folio_core::{PageEvent, PageState, Portfolio, ScrollGate, apply};
use folio_protocol::{ThemeMode, ThemeToken, Viewport};

use crate::renderer;
use crate::theme;

/// Windows at least this wide get the fixed sidebar.
const SIDEBAR_BREAKPOINT: f32 = 768.0;
const SIDEBAR_WIDTH: f32 = 256.0;
/// Readable column width for the scrolling page.
const CONTENT_MAX_WIDTH: f32 = 896.0;
const CONTENT_MIN_MARGIN: f32 = 16.0;
const DIALOG_WIDTH: f32 = 640.0;

/// Main application state.
pub struct PortfolioApp {
    portfolio: Portfolio,
    page: PageState,
    /// Reports the page viewport to the tracker once it actually moves.
    scroll_gate: ScrollGate,
    /// Theme the egui visuals were last built for.
    visuals_for: Option<ThemeMode>,
}

impl PortfolioApp {
    pub fn new(cc: &eframe::CreationContext<'_>, portfolio: Portfolio) -> Self {
        Self::with_context(&cc.egui_ctx, portfolio)
    }

    fn with_context(ctx: &egui::Context, portfolio: Portfolio) -> Self {
        theme::apply_page_typography(ctx);

        let mut page = PageState::new();
        apply(&mut page, PageEvent::Mounted);
        log::info!(
            "portfolio for {} mounted ({} projects, {} certifications)",
            portfolio.profile.name,
            portfolio.projects.len(),
            portfolio.certifications.len()
        );

        Self {
            portfolio,
            page,
            scroll_gate: ScrollGate::new(),
            visuals_for: None,
        }
    }

    fn dispatch(&mut self, events: Vec<PageEvent>) {
        for event in events {
            log::debug!("page event: {event:?}");
            apply(&mut self.page, event);
        }
    }

    fn sync_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_for != Some(self.page.theme) {
            ctx.set_visuals(theme::page_visuals(self.page.theme));
            self.visuals_for = Some(self.page.theme);
        }
    }

    /// Sidebar plus a floating theme toggle.
    fn wide_navigation(&self, ctx: &egui::Context) -> Vec<PageEvent> {
        let mode = self.page.theme;
        let sidebar = egui::SidePanel::left("folio_sidebar")
            .exact_width(SIDEBAR_WIDTH)
            .resizable(false)
            .frame(
                egui::Frame::new()
                    .fill(theme::resolve(ThemeToken::NavBackground, mode))
                    .inner_margin(egui::Margin::same(32)),
            )
            .show(ctx, |ui| {
                let commands = navigation::render_sidebar(&self.portfolio, &self.page);
                renderer::render_commands(ui, &commands, mode, 0.0, None)
            });

        let toggle = egui::Area::new(egui::Id::new("folio_theme_toggle"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
            .show(ctx, |ui| {
                let commands = [navigation::theme_toggle(mode)];
                renderer::render_commands(ui, &commands, mode, 0.0, None)
            });

        let mut events = sidebar.inner.events;
        events.extend(toggle.inner.events);
        events
    }

    /// Top bar with the collapsible section menu.
    fn narrow_navigation(&self, ctx: &egui::Context) -> Vec<PageEvent> {
        let mode = self.page.theme;
        egui::TopBottomPanel::top("folio_top_bar")
            .frame(
                egui::Frame::new()
                    .fill(theme::resolve(ThemeToken::NavBackground, mode))
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                let commands = navigation::render_top_bar(&self.portfolio, &self.page);
                renderer::render_commands(ui, &commands, mode, 0.0, None)
            })
            .inner
            .events
    }

    fn project_dialog(&self, ctx: &egui::Context) -> Vec<PageEvent> {
        let commands = dialog::render_project_dialog(&self.portfolio, &self.page);
        if commands.is_empty() {
            return Vec::new();
        }

        let mode = self.page.theme;
        let max_height = ctx.available_rect().height() * 0.8;
        let modal = egui::Modal::new(egui::Id::new("folio_project_dialog")).show(ctx, |ui| {
            ui.set_max_width(DIALOG_WIDTH);
            egui::ScrollArea::vertical()
                .id_salt("folio_dialog_scroll")
                .max_height(max_height)
                .show(ui, |ui| renderer::render_commands(ui, &commands, mode, 0.0, None))
                .inner
        });

        let close_requested = modal.should_close();
        let mut events = modal.inner.events;
        if close_requested {
            events.push(PageEvent::CloseProject);
        }
        events
    }

    /// Draw one frame and apply whatever it produced.
    fn show(&mut self, ctx: &egui::Context) {
        self.sync_visuals(ctx);
        let mode = self.page.theme;

        let mut events = if ctx.available_rect().width() >= SIDEBAR_BREAKPOINT {
            self.wide_navigation(ctx)
        } else {
            self.narrow_navigation(ctx)
        };

        // Scrolling page
        let page = egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::resolve(ThemeToken::Background, mode)))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("folio_page")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let origin = ui.min_rect().top();
                        let width = (ui.available_width() - 2.0 * CONTENT_MIN_MARGIN)
                            .min(CONTENT_MAX_WIDTH)
                            .max(0.0);
                        let margin = (ui.available_width() - width) / 2.0;
                        let commands = views::render_page(&self.portfolio, &self.page);
                        ui.horizontal(|ui| {
                            ui.add_space(margin);
                            ui.vertical(|ui| {
                                ui.set_width(width);
                                renderer::render_commands(
                                    ui,
                                    &commands,
                                    mode,
                                    origin,
                                    self.page.pending_scroll,
                                )
                            })
                            .inner
                        })
                        .inner
                    })
            })
            .inner;

        let viewport = Viewport::new(
            f64::from(page.state.offset.y),
            f64::from(page.inner_rect.height()),
        );
        events.extend(page.inner.events);
        events.extend(self.scroll_gate.observe(viewport, page.inner.layouts));

        events.extend(self.project_dialog(ctx));

        if !events.is_empty() {
            self.dispatch(events);
            ctx.request_repaint();
        }
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        apply(&mut self.page, PageEvent::Unmounted);
        log::info!("portfolio unmounted");
    }
}
