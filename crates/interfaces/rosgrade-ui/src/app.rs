use crate::components::header;
use crate::screens::grading;
use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, tui, TuiBuilderLogic};

use rosgrade_app_core::{AppKernel, GradingService};

pub struct GradingUiApp<S> {
    kernel: AppKernel<S>,
}

impl<S: GradingService> GradingUiApp<S> {
    pub fn new(kernel: AppKernel<S>) -> Self {
        Self { kernel }
    }
}

impl<S: GradingService> eframe::App for GradingUiApp<S> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.kernel.tick();
        grading::handle_dropped(ctx, &mut self.kernel);

        ctx.options_mut(|options| {
            options.max_passes = std::num::NonZeroUsize::MIN.saturating_add(2);
        });
        ctx.style_mut(|style| {
            // Width-independent text measurement keeps egui_taffy multi-pass layout stable.
            style.wrap_mode = Some(egui::TextWrapMode::Extend);
        });

        let state = self.kernel.state();

        egui::CentralPanel::default().show(ctx, |ui| {
            tui(ui, ui.id().with("root"))
                .reserve_available_space()
                .style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    size: percent(1.),
                    min_size: taffy::Size {
                        width: percent(1.),
                        height: length(0.0),
                    },
                    ..Default::default()
                })
                .show(|tui| {
                    tui.style(taffy::Style {
                        size: taffy::Size {
                            width: percent(1.),
                            height: length(28.0),
                        },
                        flex_shrink: 0.0,
                        ..Default::default()
                    })
                    .add(|tui| {
                        header::draw(tui, state.workflow.label(), state.workflow.is_busy());
                    });

                    tui.style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Column,
                        flex_grow: 1.0,
                        flex_basis: length(0.0),
                        min_size: taffy::Size {
                            width: percent(1.),
                            height: length(0.0),
                        },
                        overflow: taffy::Point {
                            x: taffy::Overflow::Hidden,
                            y: taffy::Overflow::Hidden,
                        },
                        padding: length(12.0),
                        ..Default::default()
                    })
                    .add(|tui| grading::draw(tui, &state, &mut self.kernel));
                });
        });

        if self.kernel.is_busy() {
            ctx.request_repaint();
        }
    }
}
