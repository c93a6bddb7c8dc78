//! DOM bridge: the host page reports scroll positions and measured section
//! boxes, and gets back the active section and rendered command lists.

use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use folio_core::views::{self, dialog, navigation};
use folio_core::{ContentError, PageEvent, PageState, Portfolio, apply};
use folio_protocol::{Action, ContactField, SectionId, SectionLayout, SectionLayouts, Viewport};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, thiserror::Error)]
enum BridgeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error("unknown section: {0}")]
    UnknownSection(String),
    #[error("unknown contact field: {0}")]
    UnknownField(String),
}

/// One entry of the `layouts_json` array passed to [`on_scroll`].
#[derive(Debug, Deserialize)]
struct MeasuredSection {
    section: SectionId,
    top: f64,
    height: f64,
}

/// The one page a wasm instance hosts.
struct Page {
    portfolio: Portfolio,
    state: PageState,
}

static PAGE: LazyLock<Mutex<Page>> = LazyLock::new(|| Mutex::new(Page::new()));

fn page() -> MutexGuard<'static, Page> {
    PAGE.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Page {
    fn new() -> Self {
        Self {
            portfolio: Portfolio::builtin(),
            state: PageState::new(),
        }
    }

    /// Returns the new active anchor when it changed.
    fn on_scroll(
        &mut self,
        scroll_y: f64,
        viewport_height: f64,
        layouts_json: &str,
    ) -> Result<Option<String>, BridgeError> {
        let measured: Vec<MeasuredSection> = serde_json::from_str(layouts_json)?;
        let layouts = measured
            .into_iter()
            .fold(SectionLayouts::new(), |layouts, m| {
                layouts.with(m.section, SectionLayout::new(m.top, m.height))
            });

        let before = self.state.active_section();
        apply(
            &mut self.state,
            PageEvent::Scrolled {
                viewport: Viewport::new(scroll_y, viewport_height),
                layouts,
            },
        );
        let after = self.state.active_section();
        Ok((before != after).then(|| after.anchor().to_owned()))
    }

    fn dispatch_action(&mut self, action_json: &str) -> Result<(), BridgeError> {
        let action: Action = serde_json::from_str(action_json)?;
        log::debug!("action from host: {action:?}");
        apply(&mut self.state, PageEvent::from(action));
        Ok(())
    }

    fn navigate(&mut self, anchor: &str, from_menu: bool) -> Result<(), BridgeError> {
        let section = parse_section(anchor)?;
        apply(&mut self.state, PageEvent::Navigate { section, from_menu });
        Ok(())
    }

    fn edit_contact(&mut self, field: &str, value: String) -> Result<(), BridgeError> {
        let field: ContactField = serde_json::from_value(serde_json::Value::from(field))
            .map_err(|_| BridgeError::UnknownField(field.to_owned()))?;
        apply(&mut self.state, PageEvent::ContactEdited { field, value });
        Ok(())
    }

    fn render_section(&self, anchor: &str) -> Result<String, BridgeError> {
        let section = parse_section(anchor)?;
        let commands = views::render_section(section, &self.portfolio, &self.state);
        Ok(serde_json::to_string(&commands)?)
    }

    fn render_navigation(&self, wide: bool) -> Result<String, BridgeError> {
        let commands = if wide {
            let mut commands = navigation::render_sidebar(&self.portfolio, &self.state);
            commands.push(navigation::theme_toggle(self.state.theme));
            commands
        } else {
            navigation::render_top_bar(&self.portfolio, &self.state)
        };
        Ok(serde_json::to_string(&commands)?)
    }

    fn load_content(&mut self, content_json: &str) -> Result<(), BridgeError> {
        self.portfolio = folio_core::load_portfolio(content_json.as_bytes())?;
        // A selection may not survive the new project list.
        if self
            .state
            .selected_project
            .is_some_and(|i| self.portfolio.project(i).is_none())
        {
            apply(&mut self.state, PageEvent::CloseProject);
        }
        log::info!(
            "loaded portfolio content for {}",
            self.portfolio.profile.name
        );
        Ok(())
    }
}

fn parse_section(anchor: &str) -> Result<SectionId, BridgeError> {
    let anchor = anchor.trim_start_matches('#');
    SectionId::parse(anchor).ok_or_else(|| BridgeError::UnknownSection(anchor.to_owned()))
}

/// Start tracking scroll. Call once the page's sections are in the DOM.
#[wasm_bindgen]
pub fn mount() {
    apply(&mut page().state, PageEvent::Mounted);
}

/// Stop tracking scroll; later `on_scroll` calls change nothing.
#[wasm_bindgen]
pub fn unmount() {
    apply(&mut page().state, PageEvent::Unmounted);
}

/// Report a scroll. `layouts_json` is `[{"section","top","height"}]`
/// measured for this notification; sections that are not mounted are left
/// out. Returns the new active section's anchor if it changed.
#[wasm_bindgen]
pub fn on_scroll(
    scroll_y: f64,
    viewport_height: f64,
    layouts_json: &str,
) -> Result<Option<String>, JsError> {
    Ok(page().on_scroll(scroll_y, viewport_height, layouts_json)?)
}

/// Anchor of the section currently highlighted in navigation.
#[wasm_bindgen]
pub fn active_section() -> String {
    page().state.active_section().anchor().to_owned()
}

/// Apply a button action, e.g. `"ToggleDarkMode"` or `{"OpenProject":1}`.
#[wasm_bindgen]
pub fn dispatch_action(action_json: &str) -> Result<(), JsError> {
    Ok(page().dispatch_action(action_json)?)
}

/// A navigation entry was pressed. The host scrolls to the section and then
/// calls [`scroll_settled`].
#[wasm_bindgen]
pub fn navigate(anchor: &str, from_menu: bool) -> Result<(), JsError> {
    Ok(page().navigate(anchor, from_menu)?)
}

/// Section the host should scroll to, if any.
#[wasm_bindgen]
pub fn pending_scroll() -> Option<String> {
    page().state.pending_scroll.map(|s| s.anchor().to_owned())
}

#[wasm_bindgen]
pub fn scroll_settled() {
    apply(&mut page().state, PageEvent::ScrollSettled);
}

/// Update a contact form field (`name`, `email`, or `message`).
#[wasm_bindgen]
pub fn edit_contact(field: &str, value: String) -> Result<(), JsError> {
    Ok(page().edit_contact(field, value)?)
}

/// Render one section (by anchor) as a JSON command list.
#[wasm_bindgen]
pub fn render_section(anchor: &str) -> Result<String, JsError> {
    Ok(page().render_section(anchor)?)
}

/// Render every section in page order as a JSON command list.
#[wasm_bindgen]
pub fn render_page() -> Result<String, JsError> {
    let page = page();
    let commands = views::render_page(&page.portfolio, &page.state);
    Ok(serde_json::to_string(&commands)?)
}

/// Sidebar (`wide`) or top bar navigation as a JSON command list.
#[wasm_bindgen]
pub fn render_navigation(wide: bool) -> Result<String, JsError> {
    Ok(page().render_navigation(wide)?)
}

/// The open project's dialog; an empty list when none is open.
#[wasm_bindgen]
pub fn render_project_dialog() -> Result<String, JsError> {
    let page = page();
    let commands = dialog::render_project_dialog(&page.portfolio, &page.state);
    Ok(serde_json::to_string(&commands)?)
}

/// Full page state as JSON.
#[wasm_bindgen]
pub fn page_state() -> Result<String, JsError> {
    Ok(serde_json::to_string(&page().state)?)
}

/// Replace the portfolio content with a JSON document.
#[wasm_bindgen]
pub fn load_content(content_json: &str) -> Result<(), JsError> {
    Ok(page().load_content(content_json)?)
}

/// Standalone HTML document for the current content and theme.
#[wasm_bindgen]
pub fn export_html() -> String {
    let page = page();
    folio_core::html::export_page(&page.portfolio, page.state.theme)
}
