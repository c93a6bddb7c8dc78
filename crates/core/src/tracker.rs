use folio_protocol::{SectionId, SectionLayouts, Viewport};
use serde::{Deserialize, Serialize};

/// Map a scroll position onto the section that should be highlighted.
///
/// A section is a candidate while
/// `scroll_y >= top - height/2 && scroll_y < top + section_height - height/2`,
/// where `height` is the viewport height. Sections are tested in page order
/// and a later candidate replaces an earlier one, so when two ranges overlap
/// the section further down the page wins. Unmeasured sections are skipped.
///
/// Returns `None` when nothing matches; callers keep the previous section.
pub fn resolve_active(viewport: Viewport, layouts: &SectionLayouts) -> Option<SectionId> {
    let half = viewport.height / 2.0;
    let mut active = None;
    for section in SectionId::ALL {
        let Some(layout) = layouts.get(section) else {
            continue;
        };
        if viewport.scroll_y >= layout.top - half && viewport.scroll_y < layout.bottom() - half {
            active = Some(section);
        }
    }
    active
}

/// Owns the active section and the scroll subscription that feeds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSectionTracker {
    active: SectionId,
    subscribed: bool,
}

impl Default for ActiveSectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ActiveSectionTracker {
    pub fn new() -> Self {
        Self {
            active: SectionId::About,
            subscribed: false,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Start listening to scroll notifications (page mount).
    pub fn subscribe(&mut self) {
        self.subscribed = true;
    }

    /// Stop listening to scroll notifications (page unmount).
    pub fn unsubscribe(&mut self) {
        self.subscribed = false;
    }

    /// Subscribe for the lifetime of the returned guard.
    pub fn subscribe_scoped(&mut self) -> ScrollSubscription<'_> {
        self.subscribe();
        ScrollSubscription { tracker: self }
    }

    /// Handle one scroll notification.
    ///
    /// Returns the new active section if it changed. Does nothing while
    /// unsubscribed.
    pub fn on_scroll(&mut self, viewport: Viewport, layouts: &SectionLayouts) -> Option<SectionId> {
        if !self.subscribed {
            return None;
        }
        let next = resolve_active(viewport, layouts)?;
        if next == self.active {
            return None;
        }
        log::debug!(
            "active section {} -> {next} at scroll {:.0}",
            self.active,
            viewport.scroll_y
        );
        self.active = next;
        Some(next)
    }
}

/// Scroll subscription held for a scope; unsubscribes when dropped.
pub struct ScrollSubscription<'a> {
    tracker: &'a mut ActiveSectionTracker,
}

impl ScrollSubscription<'_> {
    pub fn on_scroll(&mut self, viewport: Viewport, layouts: &SectionLayouts) -> Option<SectionId> {
        self.tracker.on_scroll(viewport, layouts)
    }

    pub fn active(&self) -> SectionId {
        self.tracker.active()
    }
}

impl Drop for ScrollSubscription<'_> {
    fn drop(&mut self) {
        self.tracker.unsubscribe();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_protocol::SectionLayout;

    /// Six 800px sections stacked from the top of the document.
    fn stacked_layouts() -> SectionLayouts {
        let mut layouts = SectionLayouts::new();
        for (i, section) in SectionId::ALL.into_iter().enumerate() {
            layouts.set(section, SectionLayout::new(i as f64 * 800.0, 800.0));
        }
        layouts
    }

    #[test]
    fn scroll_1700_selects_projects() {
        let active = resolve_active(Viewport::new(1700.0, 800.0), &stacked_layouts());
        assert_eq!(active, Some(SectionId::Projects));
    }

    #[test]
    fn section_activates_half_a_viewport_early() {
        let layouts = stacked_layouts();
        // Skills starts at 800; it becomes active at 800 - 400.
        assert_eq!(
            resolve_active(Viewport::new(399.0, 800.0), &layouts),
            Some(SectionId::About)
        );
        assert_eq!(
            resolve_active(Viewport::new(400.0, 800.0), &layouts),
            Some(SectionId::Skills)
        );
    }

    #[test]
    fn overlapping_ranges_prefer_later_section() {
        // Blog is short and sits inside the projects range.
        let layouts = SectionLayouts::new()
            .with(SectionId::Projects, SectionLayout::new(0.0, 2000.0))
            .with(SectionId::Blog, SectionLayout::new(600.0, 100.0));
        assert_eq!(
            resolve_active(Viewport::new(250.0, 800.0), &layouts),
            Some(SectionId::Blog)
        );
        // Past blog's range only projects matches again.
        assert_eq!(
            resolve_active(Viewport::new(400.0, 800.0), &layouts),
            Some(SectionId::Projects)
        );
    }

    #[test]
    fn missing_sections_never_match() {
        let mut layouts = stacked_layouts();
        layouts.clear(SectionId::Projects);
        assert_eq!(resolve_active(Viewport::new(1700.0, 800.0), &layouts), None);
    }

    #[test]
    fn no_match_keeps_previous_section() {
        let mut tracker = ActiveSectionTracker::new();
        tracker.subscribe();
        let layouts = stacked_layouts();
        assert_eq!(
            tracker.on_scroll(Viewport::new(2500.0, 800.0), &layouts),
            Some(SectionId::Blog)
        );
        // Far below the last section: nothing matches.
        assert_eq!(tracker.on_scroll(Viewport::new(10_000.0, 800.0), &layouts), None);
        assert_eq!(tracker.active(), SectionId::Blog);
    }

    #[test]
    fn defaults_to_about() {
        assert_eq!(ActiveSectionTracker::new().active(), SectionId::About);
    }

    #[test]
    fn unchanged_section_reports_nothing() {
        let mut tracker = ActiveSectionTracker::new();
        tracker.subscribe();
        assert_eq!(tracker.on_scroll(Viewport::new(10.0, 800.0), &stacked_layouts()), None);
        assert_eq!(tracker.active(), SectionId::About);
    }

    #[test]
    fn unsubscribed_tracker_ignores_scroll() {
        let mut tracker = ActiveSectionTracker::new();
        assert_eq!(tracker.on_scroll(Viewport::new(1700.0, 800.0), &stacked_layouts()), None);
        assert_eq!(tracker.active(), SectionId::About);
    }

    #[test]
    fn scoped_subscription_releases_on_drop() {
        let mut tracker = ActiveSectionTracker::new();
        {
            let mut sub = tracker.subscribe_scoped();
            sub.on_scroll(Viewport::new(1700.0, 800.0), &stacked_layouts());
            assert_eq!(sub.active(), SectionId::Projects);
        }
        assert!(!tracker.is_subscribed());
        tracker.on_scroll(Viewport::new(0.0, 800.0), &stacked_layouts());
        assert_eq!(tracker.active(), SectionId::Projects);
    }
}
