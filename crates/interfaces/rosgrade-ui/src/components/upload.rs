use crate::theme::*;
use crate::utils::{cmd_button, section_label, ButtonKind};
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use rosgrade_app_core::viewmodel::SubmissionVm;

pub struct UploadResponse {
    pub browse_clicked: bool,
}

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, submission: &Option<SubmissionVm>) -> UploadResponse {
    let mut resp = UploadResponse {
        browse_clicked: false,
    };

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(4.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.ui(|ui| section_label(ui, "PACKAGE"));

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Column,
            padding: length(10.0),
            gap: length(6.0),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .bg_add(
            TuiBackground::new()
                .with_background_color(COL_BG_DARK)
                .with_border_color(COL_BORDER)
                .with_border_width(1.0),
            |tui| {
                match submission {
                    Some(file) => {
                        tui.label(
                            egui::RichText::new(&file.file_name)
                                .color(COL_TEXT)
                                .strong()
                                .monospace(),
                        );
                        tui.label(
                            egui::RichText::new(format!("SIZE: {}", file.size_human))
                                .size(10.0)
                                .color(COL_TEXT_DIM),
                        );
                    }
                    None => {
                        tui.label(
                            egui::RichText::new("NO PACKAGE SELECTED")
                                .color(COL_TEXT_DIM)
                                .strong(),
                        );
                    }
                }
                tui.label(
                    egui::RichText::new("Drop a .zip here or browse.")
                        .size(9.0)
                        .color(COL_TEXT_DIM),
                );

                let label = if submission.is_some() {
                    "REPLACE…"
                } else {
                    "BROWSE…"
                };
                if tui
                    .ui(|ui| cmd_button(ui, label, ButtonKind::Outline, true))
                    .clicked()
                {
                    resp.browse_clicked = true;
                }
            },
        );
    });

    resp
}
