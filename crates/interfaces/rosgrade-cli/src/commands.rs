use crate::{render, RunOptions};
use anyhow::{Context, Result};
use bytes::Bytes;
use camino::Utf8PathBuf;
use humansize::{format_size, DECIMAL};
use indicatif::{ProgressBar, ProgressStyle};
use rosgrade_app_core::{AppCommand, AppKernel, AppState, AppStore, GradingService, MockGradingService};
use rosgrade_core::WorkflowState;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Runs the code check only.
pub async fn cmd_validate(path: Utf8PathBuf, opts: RunOptions) -> Result<AppState> {
    let mut kernel = build_kernel(&opts);
    select_package(&mut kernel, &path, opts.json)?;

    run_step(&mut kernel, AppCommand::StartValidation, "Running code check...", opts.json).await;

    let state = kernel.state();
    report(&state, opts.json)?;
    Ok(state)
}

/// Runs the code check and, when it passes, the simulation.
pub async fn cmd_grade(path: Utf8PathBuf, opts: RunOptions) -> Result<AppState> {
    let mut kernel = build_kernel(&opts);
    select_package(&mut kernel, &path, opts.json)?;

    run_step(&mut kernel, AppCommand::StartValidation, "Running code check...", opts.json).await;

    if kernel.state().can_start_simulation() {
        run_step(&mut kernel, AppCommand::StartSimulation, "Running simulation...", opts.json)
            .await;
    } else {
        tracing::debug!("simulation skipped: code check did not pass");
    }

    let state = kernel.state();
    report(&state, opts.json)?;
    Ok(state)
}

fn build_kernel(opts: &RunOptions) -> AppKernel<MockGradingService> {
    let mut service = MockGradingService::new(opts.scenario.into());
    if let Some(ms) = mock_delay_ms(opts.delay_ms) {
        service = service.with_delays(ms, ms);
    }
    AppKernel::new(AppStore::default(), service)
}

fn mock_delay_ms(requested: Option<u64>) -> Option<u64> {
    let requested = requested?;
    let ms = rosgrade_config::clamp_delay_ms(requested);
    if ms != requested {
        tracing::warn!(requested, used = ms, "mock delay clamped");
    }
    Some(ms)
}

fn select_package<S: GradingService>(
    kernel: &mut AppKernel<S>,
    path: &Utf8PathBuf,
    quiet: bool,
) -> Result<()> {
    let data = std::fs::read(path).with_context(|| format!("Failed to read {path}"))?;
    let name = path
        .file_name()
        .with_context(|| format!("{path} has no file name"))?
        .to_string();

    kernel.dispatch(AppCommand::SelectFile {
        name,
        data: Bytes::from(data),
    });

    let state = kernel.state();
    let Some(submission) = state.submission else {
        anyhow::bail!(state
            .notice
            .unwrap_or_else(|| format!("{path} was not accepted")));
    };

    if !quiet {
        println!(":: Package: {}", submission.name());
        println!(
            "   Size:    {}",
            format_size(submission.size_bytes(), DECIMAL)
        );
    }
    Ok(())
}

async fn run_step<S: GradingService>(
    kernel: &mut AppKernel<S>,
    cmd: AppCommand,
    message: &'static str,
    quiet: bool,
) {
    kernel.dispatch(cmd);

    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));

    wait_until_idle(kernel).await;

    let state = kernel.state();
    let done = match state.workflow {
        WorkflowState::Error(kind) => format!("{} ({})", state.workflow.label(), kind.message()),
        other => other.label().to_string(),
    };
    pb.finish_with_message(done);
}

async fn wait_until_idle<S: GradingService>(kernel: &mut AppKernel<S>) {
    loop {
        kernel.tick();
        if !kernel.is_busy() {
            break;
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

fn report(state: &AppState, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&render::json_summary(state))?);
    } else {
        print!("{}", render::text_summary(state));
    }
    Ok(())
}
