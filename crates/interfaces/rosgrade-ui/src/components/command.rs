use crate::theme::*;
use crate::utils::{cmd_button, section_label, ButtonKind};
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use rosgrade_app_core::viewmodel::ControlsVm;

pub struct CommandResponse {
    pub validate: bool,
    pub simulate: bool,
    pub dismiss_notice: bool,
}

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, vm: &ControlsVm) -> CommandResponse {
    let mut resp = CommandResponse {
        validate: false,
        simulate: false,
        dismiss_notice: false,
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
        tui.ui(|ui| section_label(ui, "COMMAND"));

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
                tui.label(egui::RichText::new(format!("MODE: {}", vm.mode)).color(COL_TEXT_DIM));

                if let Some(failure) = vm.failure {
                    tui.label(egui::RichText::new(failure).color(COL_DANGER).strong());
                }

                if tui
                    .ui(|ui| {
                        cmd_button(ui, vm.validate_label, ButtonKind::Primary, vm.can_validate)
                    })
                    .clicked()
                {
                    resp.validate = true;
                }
                if tui
                    .ui(|ui| {
                        cmd_button(ui, vm.simulate_label, ButtonKind::Outline, vm.can_simulate)
                    })
                    .clicked()
                {
                    resp.simulate = true;
                }

                if let Some(notice) = &vm.notice {
                    tui.separator();
                    tui.label(egui::RichText::new(notice).color(COL_WARN).size(10.0));
                    if tui
                        .ui(|ui| cmd_button(ui, "DISMISS", ButtonKind::Danger, true))
                        .clicked()
                    {
                        resp.dismiss_notice = true;
                    }
                }
            },
        );
    });

    resp
}
