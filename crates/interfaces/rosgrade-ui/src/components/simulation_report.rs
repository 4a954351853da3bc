use crate::theme::*;
use crate::utils::{badge, section_label};
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use rosgrade_app_core::viewmodel::SimulationReportVm;

const LOG_HEIGHT: f32 = 180.0;

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, vm: &SimulationReportVm) {
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
        tui.ui(|ui| section_label(ui, "SIMULATION REPORT"));

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
                tui.style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Row,
                    align_items: Some(taffy::AlignItems::Center),
                    gap: length(8.0),
                    ..Default::default()
                })
                .add(|tui| {
                    let color = if vm.success { COL_SUCCESS } else { COL_DANGER };
                    tui.ui(|ui| badge(ui, vm.badge, color));
                    tui.label(egui::RichText::new(&vm.message).color(COL_TEXT));
                });

                tui.ui(|ui| section_label(ui, "LOG"));
                tui.style(taffy::Style {
                    size: taffy::Size {
                        width: percent(1.),
                        height: length(LOG_HEIGHT),
                    },
                    ..Default::default()
                })
                .ui(|ui| {
                    egui::ScrollArea::vertical()
                        .id_salt("simulation-log")
                        .max_height(LOG_HEIGHT)
                        .stick_to_bottom(true)
                        .show(ui, |ui| {
                            let mut text = vm.logs.as_str();
                            ui.add(
                                egui::TextEdit::multiline(&mut text)
                                    .code_editor()
                                    .desired_width(f32::INFINITY),
                            );
                        });
                });

                let screenshot = vm
                    .screenshot
                    .as_deref()
                    .unwrap_or("no screenshot captured");
                tui.label(
                    egui::RichText::new(format!("SCREENSHOT: {screenshot}"))
                        .size(10.0)
                        .color(COL_TEXT_DIM),
                );
            },
        );
    });
}
