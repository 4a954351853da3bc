pub mod commands;
pub mod render;

use clap::ValueEnum;
use rosgrade_app_core::{AppState, MockScenario};

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq, Default)]
pub enum CliScenario {
    #[default]
    Pass,
    Warn,
    Reject,
    Unavailable,
    NoMotion,
    SimulatorDown,
}

impl From<CliScenario> for MockScenario {
    fn from(s: CliScenario) -> Self {
        match s {
            CliScenario::Pass => MockScenario::Pass,
            CliScenario::Warn => MockScenario::Warn,
            CliScenario::Reject => MockScenario::Reject,
            CliScenario::Unavailable => MockScenario::Unavailable,
            CliScenario::NoMotion => MockScenario::NoMotion,
            CliScenario::SimulatorDown => MockScenario::SimulatorDown,
        }
    }
}

/// Mock backend settings shared by `validate` and `grade`.
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    pub scenario: CliScenario,
    /// Overrides both mock latencies; `None` keeps the configured defaults.
    pub delay_ms: Option<u64>,
    pub json: bool,
}

/// Process exit code for a finished session: non-zero when the workflow ended in an error.
pub fn exit_code(state: &AppState) -> i32 {
    match state.workflow.failure() {
        Some(_) => 1,
        None => 0,
    }
}
