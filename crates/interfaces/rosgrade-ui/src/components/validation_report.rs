use crate::theme::*;
use crate::utils::{badge, section_label};
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use rosgrade_app_core::viewmodel::ValidationReportVm;

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, vm: &ValidationReportVm) {
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
        tui.ui(|ui| section_label(ui, "CODE CHECK REPORT"));

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
                    justify_content: Some(taffy::JustifyContent::SpaceBetween),
                    align_items: Some(taffy::AlignItems::Center),
                    ..Default::default()
                })
                .add(|tui| {
                    tui.style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Column,
                        gap: length(2.0),
                        ..Default::default()
                    })
                    .add(|tui| {
                        tui.label(
                            egui::RichText::new(&vm.package_name)
                                .size(14.0)
                                .strong()
                                .color(COL_TEXT),
                        );
                        tui.label(
                            egui::RichText::new(format!("NODE: {}", vm.node_name))
                                .size(10.0)
                                .color(COL_TEXT_DIM),
                        );
                    });

                    tui.style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Row,
                        align_items: Some(taffy::AlignItems::Center),
                        gap: length(8.0),
                        ..Default::default()
                    })
                    .add(|tui| {
                        tui.label(
                            egui::RichText::new(&vm.score_label)
                                .size(14.0)
                                .monospace()
                                .color(COL_ACCENT),
                        );
                        tui.ui(|ui| badge(ui, vm.verdict.label(), verdict_color(vm.verdict)));
                    });
                });

                tui.label(egui::RichText::new(&vm.summary).color(COL_TEXT_DIM));
                tui.separator();

                for check in &vm.checks {
                    let (mark, color) = if check.ok {
                        ("[x]", COL_SUCCESS)
                    } else {
                        ("[ ]", COL_DANGER)
                    };
                    tui.label(
                        egui::RichText::new(format!("{mark} {}", check.label))
                            .size(11.0)
                            .color(color),
                    );
                }
                tui.label(
                    egui::RichText::new(format!("NODE TYPE: {}", vm.node_type))
                        .size(11.0)
                        .color(COL_TEXT),
                );

                draw_list(&mut *tui, "PUBLISHERS", &vm.publishers, COL_TEXT);
                draw_list(&mut *tui, "SUBSCRIBERS", &vm.subscribers, COL_TEXT);
                draw_list(&mut *tui, "WARNINGS", &vm.warnings, COL_WARN);
                draw_list(&mut *tui, "ERRORS", &vm.errors, COL_DANGER);
            },
        );
    });
}

fn draw_list<'a>(tui: impl TuiBuilderLogic<'a>, title: &str, items: &[String], color: egui::Color32) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(2.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.ui(|ui| section_label(ui, &format!("{title} ({})", items.len())));
        if items.is_empty() {
            tui.label(egui::RichText::new("none").size(10.0).color(COL_TEXT_DIM));
        }
        for item in items {
            tui.label(
                egui::RichText::new(format!("- {item}"))
                    .size(11.0)
                    .monospace()
                    .color(color),
            );
        }
    });
}
