use rosgrade_core::{SimulationReport, Submission, ValidationReport};

use crate::domain::{RunId, SubmissionId};

#[derive(Debug, Clone)]
pub enum DomainEvent {
    // Upload
    SubmissionSelected {
        submission_id: SubmissionId,
        submission: Submission,
    },

    // Validation
    ValidationStarted {
        run_id: RunId,
    },
    ValidationResolved {
        run_id: RunId,
        report: ValidationReport,
    },
    ValidationFailed {
        run_id: RunId,
    },

    // Simulation
    SimulationStarted {
        run_id: RunId,
    },
    SimulationResolved {
        run_id: RunId,
        report: SimulationReport,
    },
    SimulationFailed {
        run_id: RunId,
    },

    // User-visible notices
    Notice(String),
    NoticeDismissed,
}

impl DomainEvent {
    /// Service call a result belongs to, if this is a service result.
    pub fn result_run_id(&self) -> Option<RunId> {
        match self {
            DomainEvent::ValidationResolved { run_id, .. }
            | DomainEvent::ValidationFailed { run_id }
            | DomainEvent::SimulationResolved { run_id, .. }
            | DomainEvent::SimulationFailed { run_id } => Some(*run_id),
            _ => None,
        }
    }
}
