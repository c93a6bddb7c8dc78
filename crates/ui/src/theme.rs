use folio_protocol::{ThemeMode, ThemeToken};

/// Resolved RGBA color for egui rendering.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ResolvedColor {
    const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    const fn hex(v: u32) -> Self {
        Self::rgb((v >> 16) as u8, (v >> 8) as u8, v as u8)
    }

    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.r, self.g, self.b, self.a)
    }
}

// Tailwind gray scale
const WHITE: ResolvedColor = ResolvedColor::hex(0xffffff);
const BLACK: ResolvedColor = ResolvedColor::hex(0x000000);
const GRAY_50: ResolvedColor = ResolvedColor::hex(0xf9fafb);
const GRAY_100: ResolvedColor = ResolvedColor::hex(0xf3f4f6);
const GRAY_200: ResolvedColor = ResolvedColor::hex(0xe5e7eb);
const GRAY_300: ResolvedColor = ResolvedColor::hex(0xd1d5db);
const GRAY_400: ResolvedColor = ResolvedColor::hex(0x9ca3af);
const GRAY_600: ResolvedColor = ResolvedColor::hex(0x4b5563);
const GRAY_700: ResolvedColor = ResolvedColor::hex(0x374151);
const GRAY_800: ResolvedColor = ResolvedColor::hex(0x1f2937);
const GRAY_900: ResolvedColor = ResolvedColor::hex(0x111827);

pub fn resolve(token: ThemeToken, mode: ThemeMode) -> egui::Color32 {
    match mode {
        ThemeMode::Dark => resolve_dark(token),
        ThemeMode::Light => resolve_light(token),
    }
    .to_color32()
}

fn resolve_dark(token: ThemeToken) -> ResolvedColor {
    use ThemeToken::*;
    match token {
        Background => GRAY_900,
        NavBackground => GRAY_800,
        Surface => GRAY_800,
        Border => GRAY_700,

        TextPrimary => GRAY_100,
        TextSecondary => GRAY_300,
        TextMuted => GRAY_400,
        Heading => WHITE,

        NavActive => WHITE,
        NavInactive => GRAY_100,

        ChipBackground => GRAY_700,
        ChipText => WHITE,

        LinkText => WHITE,

        ButtonPrimaryFill => WHITE,
        ButtonPrimaryText => GRAY_900,
        ButtonOutline => WHITE,
        ButtonSubtleFill => GRAY_700,
        ButtonSubtleText => GRAY_300,

        InputBackground => GRAY_700,
        InputText => WHITE,
    }
}

fn resolve_light(token: ThemeToken) -> ResolvedColor {
    use ThemeToken::*;
    match token {
        Background => GRAY_50,
        NavBackground => WHITE,
        Surface => WHITE,
        Border => GRAY_200,

        TextPrimary => GRAY_900,
        TextSecondary => GRAY_600,
        TextMuted => GRAY_600,
        Heading => BLACK,

        NavActive => BLACK,
        NavInactive => GRAY_900,

        ChipBackground => GRAY_200,
        ChipText => BLACK,

        LinkText => BLACK,

        ButtonPrimaryFill => GRAY_900,
        ButtonPrimaryText => WHITE,
        ButtonOutline => GRAY_900,
        ButtonSubtleFill => GRAY_100,
        ButtonSubtleText => GRAY_700,

        InputBackground => WHITE,
        InputText => GRAY_900,
    }
}

// ── Typography scale ───────────────────────────────────────────────────────

pub const FONT_DISPLAY: f32 = 30.0;
pub const FONT_SECTION: f32 = 36.0;
pub const FONT_CARD: f32 = 24.0;
pub const FONT_MINOR: f32 = 20.0;
pub const FONT_LEAD: f32 = 18.0;
pub const FONT_BODY: f32 = 16.0;
pub const FONT_SMALL: f32 = 14.0;
pub const FONT_TINY: f32 = 12.0;

/// Nav entry sizes: the active entry is larger and bold.
pub const FONT_NAV: f32 = 18.0;
pub const FONT_NAV_ACTIVE: f32 = 20.0;

// ── egui visual presets ────────────────────────────────────────────────────

/// egui visuals matching the page palette for `mode`.
pub fn page_visuals(mode: ThemeMode) -> egui::Visuals {
    let c = |token| resolve(token, mode);
    let mut v = match mode {
        ThemeMode::Dark => egui::Visuals::dark(),
        ThemeMode::Light => egui::Visuals::light(),
    };
    v.panel_fill = c(ThemeToken::Background);
    v.window_fill = c(ThemeToken::Background);
    v.extreme_bg_color = c(ThemeToken::InputBackground);
    v.faint_bg_color = c(ThemeToken::Surface);
    v.override_text_color = Some(c(ThemeToken::TextPrimary));
    v.hyperlink_color = c(ThemeToken::LinkText);
    v.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, c(ThemeToken::Border));
    v.widgets.inactive.weak_bg_fill = c(ThemeToken::ButtonSubtleFill);
    v.widgets.inactive.bg_fill = c(ThemeToken::ButtonSubtleFill);
    v.widgets.hovered.weak_bg_fill = c(ThemeToken::ChipBackground);
    v.widgets.hovered.bg_fill = c(ThemeToken::ChipBackground);
    v.selection.stroke = egui::Stroke::new(1.0, c(ThemeToken::ButtonOutline));
    v.window_corner_radius = egui::CornerRadius::same(8);
    v.widgets.noninteractive.corner_radius = egui::CornerRadius::same(6);
    v.widgets.inactive.corner_radius = egui::CornerRadius::same(6);
    v.widgets.hovered.corner_radius = egui::CornerRadius::same(6);
    v.widgets.active.corner_radius = egui::CornerRadius::same(6);
    v
}

/// Apply the page's typography scale to egui styles.
pub fn apply_page_typography(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.text_styles.insert(
        egui::TextStyle::Heading,
        egui::FontId::proportional(FONT_SECTION),
    );
    style
        .text_styles
        .insert(egui::TextStyle::Body, egui::FontId::proportional(FONT_BODY));
    style.text_styles.insert(
        egui::TextStyle::Button,
        egui::FontId::proportional(FONT_BODY),
    );
    style.text_styles.insert(
        egui::TextStyle::Small,
        egui::FontId::proportional(FONT_SMALL),
    );
    style.spacing.item_spacing = egui::vec2(12.0, 8.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    style.spacing.interact_size.y = 32.0;
    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_contrast_with_background() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_ne!(
                resolve(ThemeToken::Heading, mode),
                resolve(ThemeToken::Background, mode)
            );
        }
    }

    #[test]
    fn primary_button_inverts_between_modes() {
        assert_eq!(
            resolve(ThemeToken::ButtonPrimaryFill, ThemeMode::Light),
            resolve(ThemeToken::ButtonPrimaryText, ThemeMode::Dark)
        );
    }

    #[test]
    fn hex_unpacks_channels() {
        let c = ResolvedColor::hex(0x1f2937);
        assert_eq!((c.r, c.g, c.b), (0x1f, 0x29, 0x37));
    }
}
