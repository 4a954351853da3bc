mod app;
mod components;
mod file_source;
mod screens;
mod theme;
mod utils;

use rosgrade_app_core::{AppKernel, AppStore, MockGradingService};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

pub fn run() -> eframe::Result<()> {
    setup_logging();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size(rosgrade_config::WINDOW_SIZE)
            .with_min_inner_size(rosgrade_config::WINDOW_MIN_SIZE)
            .with_drag_and_drop(true)
            .with_title("ROSGRADE // SUBMISSION CONSOLE"),
        ..Default::default()
    };

    eframe::run_native(
        "ROS 2 Submission Grader",
        options,
        Box::new(|cc| {
            theme::setup(&cc.egui_ctx);

            let kernel = AppKernel::new(AppStore::default(), MockGradingService::default());
            tracing::info!("grading console ready (mock backend)");

            Ok(Box::new(app::GradingUiApp::new(kernel)))
        }),
    )
}
