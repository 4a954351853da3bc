use eframe::egui::{self, Color32, FontFamily, FontId, Stroke, TextStyle, Visuals};
use rosgrade_app_core::StatusBadge;
use rosgrade_core::Verdict;

pub const COL_BG: Color32 = Color32::from_rgb(8, 10, 12);
pub const COL_BG_DARK: Color32 = Color32::from_rgb(14, 17, 20);
pub const COL_BORDER: Color32 = Color32::from_rgb(36, 40, 46);
pub const COL_TEXT: Color32 = Color32::from_rgb(229, 231, 235);
pub const COL_TEXT_DIM: Color32 = Color32::from_rgb(150, 156, 164);
pub const COL_ACCENT: Color32 = Color32::from_rgb(56, 189, 248);
pub const COL_WARN: Color32 = Color32::from_rgb(250, 204, 21);
pub const COL_DANGER: Color32 = Color32::from_rgb(225, 29, 72);
pub const COL_SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);

pub fn badge_color(badge: StatusBadge) -> Color32 {
    match badge {
        StatusBadge::Pending => COL_TEXT_DIM,
        StatusBadge::Success => COL_SUCCESS,
        StatusBadge::Error => COL_DANGER,
    }
}

pub fn verdict_color(verdict: Verdict) -> Color32 {
    match verdict {
        Verdict::Pass => COL_SUCCESS,
        Verdict::Warn => COL_WARN,
        Verdict::Fail => COL_DANGER,
    }
}

pub fn setup(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = COL_BG;
    visuals.panel_fill = COL_BG;

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, COL_BORDER);
    visuals.widgets.inactive.bg_fill = COL_BG_DARK;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, COL_TEXT_DIM);

    visuals.widgets.hovered.bg_fill = COL_ACCENT.linear_multiply(0.1);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, COL_ACCENT);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, COL_ACCENT);

    visuals.widgets.active.bg_fill = COL_ACCENT;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, COL_BG);

    visuals.selection.bg_fill = COL_ACCENT.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, COL_ACCENT);

    ctx.set_visuals(visuals);

    // Monospace everywhere; log output should line up with the rest.
    let mut style = (*ctx.style()).clone();
    style.text_styles = [
        (TextStyle::Heading, FontId::new(15.0, FontFamily::Monospace)),
        (TextStyle::Body, FontId::new(12.0, FontFamily::Monospace)),
        (
            TextStyle::Monospace,
            FontId::new(11.0, FontFamily::Monospace),
        ),
        (TextStyle::Button, FontId::new(11.0, FontFamily::Monospace)),
        (TextStyle::Small, FontId::new(9.0, FontFamily::Monospace)),
    ]
    .into();

    style.spacing.item_spacing = egui::vec2(6.0, 6.0);
    style.spacing.window_margin = egui::Margin::same(0);
    style.visuals.button_frame = true;

    ctx.set_style(style);
}
