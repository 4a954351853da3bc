use rosgrade_core::{SimulationReport, Submission, ValidationReport, WorkflowState};
use uuid::Uuid;

pub type SubmissionId = Uuid;

/// Identifies one validate or simulate call.
pub type RunId = Uuid;

/// Everything the front-end knows about the current grading session.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub workflow: WorkflowState,

    pub submission: Option<Submission>,
    pub submission_id: Option<SubmissionId>,
    /// The call whose result is still awaited. Only its result is applied.
    pub run_id: Option<RunId>,

    pub validation_report: Option<ValidationReport>,
    pub simulation_report: Option<SimulationReport>,

    /// User-visible notice, e.g. a rejected file selection.
    pub notice: Option<String>,
}

impl AppState {
    pub fn has_file(&self) -> bool {
        self.submission.is_some()
    }

    pub fn can_start_validation(&self) -> bool {
        self.workflow.can_start_validation(self.has_file())
    }

    pub fn can_start_simulation(&self) -> bool {
        self.workflow.can_start_simulation() && self.validation_report.is_some()
    }
}
