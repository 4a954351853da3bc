use rosgrade_core::{FailureKind, WorkflowState};

use crate::domain::AppState;

use super::events::DomainEvent;

pub fn reduce(mut state: AppState, ev: DomainEvent) -> AppState {
    match ev {
        DomainEvent::SubmissionSelected {
            submission_id,
            submission,
        } => {
            state.submission = Some(submission);
            state.submission_id = Some(submission_id);
            state.run_id = None;
            state.workflow = WorkflowState::Idle;
            state.validation_report = None;
            state.simulation_report = None;
            state.notice = None;
        }

        DomainEvent::ValidationStarted { run_id } => {
            state.run_id = Some(run_id);
            state.workflow = WorkflowState::Validating;
            state.validation_report = None;
            state.simulation_report = None;
            state.notice = None;
        }

        DomainEvent::ValidationResolved { report, .. } => {
            state.run_id = None;
            state.workflow = if report.passed {
                WorkflowState::ValidationComplete
            } else {
                WorkflowState::Error(FailureKind::ValidationRejected)
            };
            state.validation_report = Some(report);
        }

        DomainEvent::ValidationFailed { .. } => {
            state.run_id = None;
            state.workflow = WorkflowState::Error(FailureKind::ValidationCallFailed);
            state.validation_report = None;
        }

        DomainEvent::SimulationStarted { run_id } => {
            state.run_id = Some(run_id);
            state.workflow = WorkflowState::Simulating;
            state.simulation_report = None;
            state.notice = None;
        }

        DomainEvent::SimulationResolved { report, .. } => {
            state.run_id = None;
            state.workflow = if report.success {
                WorkflowState::Complete
            } else {
                WorkflowState::Error(FailureKind::SimulationRejected)
            };
            state.simulation_report = Some(report);
        }

        DomainEvent::SimulationFailed { .. } => {
            state.run_id = None;
            state.workflow = WorkflowState::Error(FailureKind::SimulationCallFailed);
            state.simulation_report = None;
        }

        DomainEvent::Notice(msg) => state.notice = Some(msg),
        DomainEvent::NoticeDismissed => state.notice = None,
    }
    state
}
