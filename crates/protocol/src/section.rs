use serde::{Deserialize, Serialize};

/// One vertically stacked content block of the page.
///
/// The declaration order of the variants is the page order, and it is also
/// the order in which the active-section tracker tests candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    About,
    Skills,
    Projects,
    Blog,
    Certifications,
    Contact,
}

impl SectionId {
    pub const COUNT: usize = 6;

    /// All sections in page order.
    pub const ALL: [SectionId; Self::COUNT] = [
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Blog,
        SectionId::Certifications,
        SectionId::Contact,
    ];

    /// Position in page order.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Document anchor (`#about`, `#skills`, ...).
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Blog => "blog",
            Self::Certifications => "certifications",
            Self::Contact => "contact",
        }
    }

    /// Navigation label: the anchor with its first letter upper-cased.
    pub const fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Blog => "Blog",
            Self::Certifications => "Certifications",
            Self::Contact => "Contact",
        }
    }

    pub fn parse(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.anchor())
    }
}

/// Measured position of a rendered section in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionLayout {
    /// Offset of the section's top edge from the top of the document.
    pub top: f64,
    /// Rendered height.
    pub height: f64,
}

impl SectionLayout {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Layout table for every section, measured fresh on each scroll
/// notification. A `None` entry means the section is not mounted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionLayouts([Option<SectionLayout>; SectionId::COUNT]);

impl SectionLayouts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, section: SectionId) -> Option<SectionLayout> {
        self.0[section.index()]
    }

    pub fn set(&mut self, section: SectionId, layout: SectionLayout) {
        self.0[section.index()] = Some(layout);
    }

    pub fn clear(&mut self, section: SectionId) {
        self.0[section.index()] = None;
    }

    /// Builder form of [`SectionLayouts::set`].
    pub fn with(mut self, section: SectionId, layout: SectionLayout) -> Self {
        self.set(section, layout);
        self
    }

    /// Measured sections in page order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionId, SectionLayout)> + '_ {
        SectionId::ALL
            .into_iter()
            .filter_map(|s| self.get(s).map(|layout| (s, layout)))
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }
}

/// The visible window into the scrollable document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Current vertical scroll offset.
    pub scroll_y: f64,
    /// Height of the visible area.
    pub height: f64,
}

impl Viewport {
    pub fn new(scroll_y: f64, height: f64) -> Self {
        Self { scroll_y, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_round_trip_through_parse() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::parse(section.anchor()), Some(section));
        }
        assert_eq!(SectionId::parse("home"), None);
    }

    #[test]
    fn labels_capitalise_anchor() {
        for section in SectionId::ALL {
            let anchor = section.anchor();
            let mut expected = anchor[..1].to_uppercase();
            expected.push_str(&anchor[1..]);
            assert_eq!(section.label(), expected);
        }
    }

    #[test]
    fn index_follows_declaration_order() {
        for (i, section) in SectionId::ALL.into_iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }

    #[test]
    fn layouts_iterate_in_page_order_skipping_missing() {
        let layouts = SectionLayouts::new()
            .with(SectionId::Contact, SectionLayout::new(900.0, 100.0))
            .with(SectionId::About, SectionLayout::new(0.0, 300.0));
        let order: Vec<_> = layouts.iter().map(|(s, _)| s).collect();
        assert_eq!(order, vec![SectionId::About, SectionId::Contact]);
        assert!(layouts.get(SectionId::Blog).is_none());
    }

    #[test]
    fn section_id_serializes_as_anchor() {
        let json = serde_json::to_string(&SectionId::Certifications).unwrap_or_default();
        assert_eq!(json, "\"certifications\"");
    }
}
