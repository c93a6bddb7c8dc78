//! Integration test: drive a page through mount, scrolling, navigation, the
//! certification disclosure, and unmount, checking the rendered output along
//! the way.

use folio_core::views::{self, navigation};
use folio_core::{PageEvent, PageState, Portfolio, reduce};
use folio_protocol::{PageCommand, SectionId, SectionLayout, SectionLayouts, Viewport};

const VIEWPORT_HEIGHT: f64 = 800.0;

fn stacked_layouts() -> SectionLayouts {
    let mut layouts = SectionLayouts::new();
    for (i, section) in SectionId::ALL.into_iter().enumerate() {
        layouts.set(section, SectionLayout::new(i as f64 * 800.0, 800.0));
    }
    layouts
}

fn scrolled(state: &PageState, scroll_y: f64, layouts: SectionLayouts) -> PageState {
    reduce(
        state,
        PageEvent::Scrolled {
            viewport: Viewport::new(scroll_y, VIEWPORT_HEIGHT),
            layouts,
        },
    )
}

fn highlighted(portfolio: &Portfolio, state: &PageState) -> Vec<SectionId> {
    navigation::render_sidebar(portfolio, state)
        .into_iter()
        .filter_map(|c| match c {
            PageCommand::NavItem {
                section,
                active: true,
                ..
            } => Some(section),
            _ => None,
        })
        .collect()
}

#[test]
fn about_is_active_before_any_scroll() {
    let portfolio = Portfolio::builtin();
    let state = reduce(&PageState::new(), PageEvent::Mounted);
    assert_eq!(state.active_section(), SectionId::About);
    assert_eq!(highlighted(&portfolio, &state), vec![SectionId::About]);
}

#[test]
fn scrolling_down_the_page_walks_through_sections() {
    let portfolio = Portfolio::builtin();
    let mut state = reduce(&PageState::new(), PageEvent::Mounted);

    let expectations = [
        (0.0, SectionId::About),
        (500.0, SectionId::Skills),
        (1700.0, SectionId::Projects),
        (2100.0, SectionId::Blog),
        (3000.0, SectionId::Certifications),
        (3700.0, SectionId::Contact),
    ];
    for (scroll_y, expected) in expectations {
        state = scrolled(&state, scroll_y, stacked_layouts());
        assert_eq!(state.active_section(), expected, "scroll_y = {scroll_y}");
        // Exactly one entry is ever highlighted.
        assert_eq!(highlighted(&portfolio, &state), vec![expected]);
    }
}

#[test]
fn later_section_wins_when_ranges_overlap() {
    let state = reduce(&PageState::new(), PageEvent::Mounted);
    // A very short blog section sits right after projects.
    let layouts = SectionLayouts::new()
        .with(SectionId::Projects, SectionLayout::new(1600.0, 800.0))
        .with(SectionId::Blog, SectionLayout::new(2000.0, 50.0));
    let state = scrolled(&state, 1620.0, layouts);
    assert_eq!(state.active_section(), SectionId::Blog);
}

#[test]
fn unmatched_scroll_keeps_previous_section() {
    let state = reduce(&PageState::new(), PageEvent::Mounted);
    let state = scrolled(&state, 1700.0, stacked_layouts());
    // Only contact is measured and it is far away.
    let layouts =
        SectionLayouts::new().with(SectionId::Contact, SectionLayout::new(9000.0, 800.0));
    let state = scrolled(&state, 100.0, layouts);
    assert_eq!(state.active_section(), SectionId::Projects);
}

#[test]
fn certification_toggle_twice_restores_first_five() {
    let portfolio = Portfolio::builtin();
    let state = reduce(&PageState::new(), PageEvent::Mounted);
    let before = views::render_section(SectionId::Certifications, &portfolio, &state);

    let expanded = reduce(&state, PageEvent::ToggleCertifications);
    assert_eq!(
        portfolio
            .visible_certifications(expanded.show_all_certifications)
            .len(),
        portfolio.certifications.len()
    );

    let collapsed = reduce(&expanded, PageEvent::ToggleCertifications);
    let visible = portfolio.visible_certifications(collapsed.show_all_certifications);
    assert_eq!(visible, &portfolio.certifications[..5]);
    assert_eq!(
        views::render_section(SectionId::Certifications, &portfolio, &collapsed),
        before
    );
}

#[test]
fn navigation_requests_scroll_and_tracker_follows() {
    let state = reduce(&PageState::new(), PageEvent::Mounted);
    let state = reduce(&state, PageEvent::ToggleMenu);
    let state = reduce(
        &state,
        PageEvent::Navigate {
            section: SectionId::Contact,
            from_menu: true,
        },
    );
    assert_eq!(state.pending_scroll, Some(SectionId::Contact));
    assert!(!state.menu_open);

    // The renderer scrolls, reports the new position, then settles.
    let state = scrolled(&state, 4000.0, stacked_layouts());
    let state = reduce(&state, PageEvent::ScrollSettled);
    assert_eq!(state.active_section(), SectionId::Contact);
    assert_eq!(state.pending_scroll, None);
}

#[test]
fn scroll_after_unmount_changes_nothing() {
    let state = reduce(&PageState::new(), PageEvent::Mounted);
    let state = scrolled(&state, 1700.0, stacked_layouts());
    let unmounted = reduce(&state, PageEvent::Unmounted);
    for scroll_y in [0.0, 900.0, 2500.0, 4000.0] {
        let after = scrolled(&unmounted, scroll_y, stacked_layouts());
        assert_eq!(after, unmounted);
    }
    assert_eq!(unmounted.active_section(), SectionId::Projects);
}
