use crate::theme::*;
use eframe::egui;
use eframe::egui::Color32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Primary,
    Outline,
    Danger,
}

pub fn section_label(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(10.0)
            .color(COL_TEXT_DIM)
            .family(egui::FontFamily::Monospace)
            .strong(),
    );
}

pub fn cmd_button(
    ui: &mut egui::Ui,
    label: &str,
    kind: ButtonKind,
    enabled: bool,
) -> egui::Response {
    let (fill, stroke_col, text_col) = match kind {
        ButtonKind::Primary => (COL_ACCENT, COL_ACCENT, COL_BG_DARK),
        ButtonKind::Danger => (Color32::TRANSPARENT, COL_DANGER, COL_DANGER),
        ButtonKind::Outline => (Color32::TRANSPARENT, COL_ACCENT, COL_ACCENT),
    };

    let text =
        egui::RichText::new(label)
            .size(11.0)
            .color(if enabled { text_col } else { COL_TEXT_DIM });

    let btn = egui::Button::new(text)
        .min_size(egui::vec2(120.0, 24.0))
        .fill(if enabled && kind == ButtonKind::Primary {
            fill
        } else {
            Color32::TRANSPARENT
        })
        .stroke(egui::Stroke::new(
            1.0,
            if enabled { stroke_col } else { COL_BORDER },
        ));

    ui.add_enabled(enabled, btn)
}

/// Small framed label used for PASS/FAIL and status badges.
pub fn badge(ui: &mut egui::Ui, text: &str, color: Color32) -> egui::Response {
    egui::Frame::new()
        .stroke(egui::Stroke::new(1.0, color))
        .inner_margin(egui::Margin::symmetric(6, 1))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(10.0).strong().color(color));
        })
        .response
}
