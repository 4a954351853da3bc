use rosgrade_core::{FailureKind, WorkflowState};

const ALL_STATES: [WorkflowState; 9] = [
    WorkflowState::Idle,
    WorkflowState::Validating,
    WorkflowState::ValidationComplete,
    WorkflowState::Simulating,
    WorkflowState::Complete,
    WorkflowState::Error(FailureKind::ValidationRejected),
    WorkflowState::Error(FailureKind::ValidationCallFailed),
    WorkflowState::Error(FailureKind::SimulationRejected),
    WorkflowState::Error(FailureKind::SimulationCallFailed),
];

#[test]
fn code_check_needs_a_file_and_no_running_check() {
    for state in ALL_STATES {
        assert!(
            !state.can_start_validation(false),
            "{state:?} must not allow a check without a file"
        );
        assert_eq!(
            state.can_start_validation(true),
            state != WorkflowState::Validating,
            "unexpected guard for {state:?}"
        );
    }
}

#[test]
fn simulation_only_after_successful_check_or_simulation() {
    let allowed: Vec<_> = ALL_STATES
        .into_iter()
        .filter(|s| s.can_start_simulation())
        .collect();
    assert_eq!(
        allowed,
        vec![WorkflowState::ValidationComplete, WorkflowState::Complete]
    );
}

#[test]
fn only_in_flight_states_are_busy() {
    let busy: Vec<_> = ALL_STATES.into_iter().filter(|s| s.is_busy()).collect();
    assert_eq!(
        busy,
        vec![WorkflowState::Validating, WorkflowState::Simulating]
    );
}

#[test]
fn error_state_names_its_cause() {
    let state = WorkflowState::Error(FailureKind::ValidationCallFailed);
    assert_eq!(state.failure(), Some(FailureKind::ValidationCallFailed));
    assert!(FailureKind::ValidationCallFailed.is_operational());
    assert!(!FailureKind::ValidationRejected.is_operational());
    assert_eq!(WorkflowState::Complete.failure(), None);
    assert_eq!(WorkflowState::default(), WorkflowState::Idle);
}
