use crate::theme::*;
use crate::utils::{badge, section_label};
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use rosgrade_app_core::viewmodel::{StatusPanelVm, StatusRowVm};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, vm: &StatusPanelVm) {
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
        tui.ui(|ui| section_label(ui, "STATUS"));

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Column,
            gap: length(4.0),
            padding: length(8.0),
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
                for row in vm.rows() {
                    draw_row(&mut *tui, row);
                }
            },
        );
    });
}

fn draw_row<'a>(tui: impl TuiBuilderLogic<'a>, row: &StatusRowVm) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        justify_content: Some(taffy::JustifyContent::SpaceBetween),
        align_items: Some(taffy::AlignItems::Center),
        size: taffy::Size {
            width: percent(1.),
            height: length(22.0),
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.label(
            egui::RichText::new(row.label.to_uppercase())
                .size(10.0)
                .color(COL_TEXT_DIM)
                .strong(),
        );

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            align_items: Some(taffy::AlignItems::Center),
            gap: length(6.0),
            ..Default::default()
        })
        .add(|tui| {
            if row.show_spinner {
                tui.ui_add(egui::Spinner::new().size(10.0));
            }
            tui.ui(|ui| badge(ui, row.badge.label(), badge_color(row.badge)));
        });
    });
}
