use crate::components::{command, simulation_report, status, upload, validation_report};
use crate::file_source;
use crate::theme::*;
use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use rosgrade_app_core::{viewmodel, AppCommand, AppKernel, AppState, GradingService};

const CONTROL_COLUMN_WIDTH: f32 = 280.0;

pub fn draw<'a, S: GradingService>(
    tui: impl TuiBuilderLogic<'a>,
    state: &AppState,
    kernel: &mut AppKernel<S>,
) {
    let controls = viewmodel::controls_vm(state);
    let status_vm = viewmodel::status_panel_vm(state);
    let reports = viewmodel::reports_vm(state);

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        gap: length(12.0),
        size: percent(1.),
        min_size: taffy::Size {
            width: length(0.0),
            height: length(0.0),
        },
        ..Default::default()
    })
    .add(|tui| {
        // Left: upload, commands, status.
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Column,
            gap: length(10.0),
            flex_shrink: 0.0,
            size: taffy::Size {
                width: length(CONTROL_COLUMN_WIDTH),
                height: percent(1.),
            },
            ..Default::default()
        })
        .add(|tui| {
            let upload_resp = upload::draw(&mut *tui, &controls.submission);
            if upload_resp.browse_clicked {
                pick_package(kernel);
            }

            let cmd_resp = command::draw(&mut *tui, &controls);
            if cmd_resp.validate {
                kernel.dispatch(AppCommand::StartValidation);
            }
            if cmd_resp.simulate {
                kernel.dispatch(AppCommand::StartSimulation);
            }
            if cmd_resp.dismiss_notice {
                kernel.dispatch(AppCommand::DismissNotice);
            }

            status::draw(&mut *tui, &status_vm);
        });

        // Right: reports.
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Column,
            gap: length(10.0),
            flex_grow: 1.0,
            flex_basis: length(0.0),
            min_size: taffy::Size {
                width: length(0.0),
                height: length(0.0),
            },
            overflow: taffy::Point {
                x: taffy::Overflow::Hidden,
                y: taffy::Overflow::Scroll,
            },
            ..Default::default()
        })
        .add(|tui| {
            if let Some(placeholder) = reports.placeholder {
                tui.style(taffy::Style {
                    flex_grow: 1.0,
                    justify_content: Some(taffy::JustifyContent::Center),
                    align_items: Some(taffy::AlignItems::Center),
                    ..Default::default()
                })
                .add(|tui| {
                    tui.colored_label(COL_TEXT_DIM, placeholder.to_uppercase());
                });
            }
            if let Some(vm) = &reports.validation {
                validation_report::draw(&mut *tui, vm);
            }
            if let Some(vm) = &reports.simulation {
                simulation_report::draw(&mut *tui, vm);
            }
        });
    });
}

fn pick_package<S: GradingService>(kernel: &mut AppKernel<S>) {
    let picked = rfd::FileDialog::new()
        .set_title("Select ROS 2 package")
        .add_filter("ROS 2 package (.zip)", rosgrade_config::ACCEPTED_EXTENSIONS)
        .pick_file();

    let Some(path) = picked else {
        return;
    };
    match file_source::read_package(&path) {
        Ok((name, data)) => kernel.dispatch(AppCommand::SelectFile { name, data }),
        Err(e) => {
            tracing::error!("{e:#}");
            kernel.dispatch(AppCommand::ShowNotice(e.to_string()));
        }
    }
}

/// Folds files dropped onto the window into the session; only the first is used.
pub fn handle_dropped<S: GradingService>(ctx: &egui::Context, kernel: &mut AppKernel<S>) {
    let dropped = ctx.input(|i| i.raw.dropped_files.clone());
    let Some(file) = dropped.first() else {
        return;
    };
    if dropped.len() > 1 {
        tracing::warn!("{} files dropped; using {}", dropped.len(), file.name);
    }
    match file_source::from_dropped(file) {
        Ok((name, data)) => kernel.dispatch(AppCommand::SelectFile { name, data }),
        Err(e) => {
            tracing::error!("{e:#}");
            kernel.dispatch(AppCommand::ShowNotice(e.to_string()));
        }
    }
}
