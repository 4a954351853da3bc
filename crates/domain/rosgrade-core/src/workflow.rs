use serde::{Deserialize, Serialize};

/// Why the workflow ended up in [`WorkflowState::Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    /// Validation resolved with `passed = false`.
    ValidationRejected,
    /// The validation call itself failed.
    ValidationCallFailed,
    /// Simulation resolved with `success = false`.
    SimulationRejected,
    /// The simulation call itself failed.
    SimulationCallFailed,
}

impl FailureKind {
    pub fn message(self) -> &'static str {
        match self {
            FailureKind::ValidationRejected => "Code check rejected the package.",
            FailureKind::ValidationCallFailed => "Code check could not be completed.",
            FailureKind::SimulationRejected => "Simulation did not succeed.",
            FailureKind::SimulationCallFailed => "Simulation could not be completed.",
        }
    }

    pub fn is_operational(self) -> bool {
        matches!(
            self,
            FailureKind::ValidationCallFailed | FailureKind::SimulationCallFailed
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum WorkflowState {
    #[default]
    Idle,
    Validating,
    ValidationComplete,
    Simulating,
    Complete,
    Error(FailureKind),
}

impl WorkflowState {
    /// Code check may start when a file is present and no check is running.
    pub fn can_start_validation(self, has_file: bool) -> bool {
        has_file && self != WorkflowState::Validating
    }

    /// Simulation may start only after a successful check or a finished simulation.
    pub fn can_start_simulation(self) -> bool {
        matches!(
            self,
            WorkflowState::ValidationComplete | WorkflowState::Complete
        )
    }

    pub fn is_busy(self) -> bool {
        matches!(self, WorkflowState::Validating | WorkflowState::Simulating)
    }

    pub fn failure(self) -> Option<FailureKind> {
        match self {
            WorkflowState::Error(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WorkflowState::Idle => "IDLE",
            WorkflowState::Validating => "VALIDATING",
            WorkflowState::ValidationComplete => "VALIDATION COMPLETE",
            WorkflowState::Simulating => "SIMULATING",
            WorkflowState::Complete => "COMPLETE",
            WorkflowState::Error(_) => "ERROR",
        }
    }
}
