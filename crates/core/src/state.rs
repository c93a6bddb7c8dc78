use folio_protocol::{Action, ContactField, SectionId, SectionLayouts, ThemeMode, Viewport};
use serde::{Deserialize, Serialize};

use crate::tracker::ActiveSectionTracker;

/// Draft contents of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

/// View state of one page view. Lives until the page is reloaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageState {
    pub tracker: ActiveSectionTracker,
    /// Mobile navigation menu expanded.
    pub menu_open: bool,
    pub theme: ThemeMode,
    /// Index of the project shown in the detail dialog.
    pub selected_project: Option<usize>,
    pub show_all_certifications: bool,
    pub contact: ContactForm,
    /// Section the renderer should smooth-scroll to.
    pub pending_scroll: Option<SectionId>,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_section(&self) -> SectionId {
        self.tracker.active()
    }

    pub fn is_mounted(&self) -> bool {
        self.tracker.is_subscribed()
    }
}

/// Everything that can happen to a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PageEvent {
    /// The page was displayed; start tracking scroll.
    Mounted,
    /// The page was torn down; stop tracking scroll.
    Unmounted,
    /// The viewport scrolled. `layouts` are measured for this notification.
    Scrolled {
        viewport: Viewport,
        layouts: SectionLayouts,
    },
    ToggleDarkMode,
    ToggleMenu,
    /// A navigation entry was pressed. Entries in the mobile menu close it.
    Navigate { section: SectionId, from_menu: bool },
    /// The renderer finished scrolling to `pending_scroll`.
    ScrollSettled,
    ToggleCertifications,
    OpenProject(usize),
    CloseProject,
    ContactEdited { field: ContactField, value: String },
    ContactSubmitted,
}

impl From<Action> for PageEvent {
    fn from(action: Action) -> Self {
        match action {
            Action::ToggleDarkMode => Self::ToggleDarkMode,
            Action::ToggleMenu => Self::ToggleMenu,
            Action::ToggleCertifications => Self::ToggleCertifications,
            Action::OpenProject(index) => Self::OpenProject(index),
            Action::CloseProject => Self::CloseProject,
            Action::SubmitContact => Self::ContactSubmitted,
            Action::Navigate(section) => Self::Navigate {
                section,
                from_menu: false,
            },
        }
    }
}

/// Turns per-frame viewport measurements from a host into `Scrolled` events.
///
/// Hosts that redraw every frame have no scroll listener, so they compare
/// scroll offsets instead. The first measurement only seeds the gate: the
/// page has not scrolled yet and keeps its default section. A resize alone
/// is not a scroll.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollGate {
    last_scroll_y: Option<f64>,
}

impl ScrollGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// `Scrolled` when the offset moved since the previous measurement.
    pub fn observe(&mut self, viewport: Viewport, layouts: SectionLayouts) -> Option<PageEvent> {
        let previous = self.last_scroll_y.replace(viewport.scroll_y)?;
        (previous != viewport.scroll_y).then_some(PageEvent::Scrolled { viewport, layouts })
    }
}

/// Compute the state that follows `event`.
pub fn reduce(state: &PageState, event: PageEvent) -> PageState {
    let mut next = state.clone();
    apply(&mut next, event);
    next
}

/// In-place form of [`reduce`] for hosts that own their state.
pub fn apply(state: &mut PageState, event: PageEvent) {
    match event {
        PageEvent::Mounted => state.tracker.subscribe(),
        PageEvent::Unmounted => {
            state.tracker.unsubscribe();
            state.pending_scroll = None;
        }
        PageEvent::Scrolled { viewport, layouts } => {
            state.tracker.on_scroll(viewport, &layouts);
        }
        PageEvent::ToggleDarkMode => state.theme = state.theme.toggled(),
        PageEvent::ToggleMenu => state.menu_open = !state.menu_open,
        PageEvent::Navigate { section, from_menu } => {
            state.pending_scroll = Some(section);
            if from_menu {
                state.menu_open = false;
            }
        }
        PageEvent::ScrollSettled => state.pending_scroll = None,
        PageEvent::ToggleCertifications => {
            state.show_all_certifications = !state.show_all_certifications;
        }
        PageEvent::OpenProject(index) => state.selected_project = Some(index),
        PageEvent::CloseProject => state.selected_project = None,
        PageEvent::ContactEdited { field, value } => state.contact.set(field, value),
        PageEvent::ContactSubmitted => {
            log::info!(
                "contact form submitted by {:?}; no submission target is configured",
                state.contact.email
            );
        }
    }
}
