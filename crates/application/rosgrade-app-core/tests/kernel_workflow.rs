use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use bytes::Bytes;
use rosgrade_app_core::app_core::{AppCommand, AppStore, DomainEvent};
use rosgrade_app_core::domain::AppState;
use rosgrade_app_core::kernel::AppKernel;
use rosgrade_app_core::ports::GradingService;
use rosgrade_app_core::{MockGradingService, MockScenario};
use rosgrade_core::{
    FailureKind, ServiceError, SimulationReport, Submission, ValidationDetails, ValidationReport,
    WorkflowState,
};

#[derive(Clone)]
struct ScriptedService {
    validation: Result<ValidationReport, ServiceError>,
    simulation: Result<SimulationReport, ServiceError>,
    simulate_calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl ScriptedService {
    fn new(
        validation: Result<ValidationReport, ServiceError>,
        simulation: Result<SimulationReport, ServiceError>,
    ) -> Self {
        Self {
            validation,
            simulation,
            simulate_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait::async_trait]
impl GradingService for ScriptedService {
    async fn validate(&self, _submission: &Submission) -> Result<ValidationReport, ServiceError> {
        self.validation.clone()
    }

    async fn simulate(
        &self,
        package_name: &str,
        node_name: &str,
    ) -> Result<SimulationReport, ServiceError> {
        self.simulate_calls
            .lock()
            .unwrap()
            .push((package_name.to_string(), node_name.to_string()));
        self.simulation.clone()
    }
}

fn report_85() -> ValidationReport {
    ValidationReport {
        passed: true,
        score: 85,
        package_name: "user_pick_place_pkg".into(),
        node_name: "pick_place_node".into(),
        errors: vec![],
        warnings: vec!["File pick_place_node.py: Potential un-throttled loop detected.".into()],
        details: ValidationDetails {
            has_package_xml: true,
            has_build_file: true,
            ..Default::default()
        },
    }
}

fn sim_ok() -> SimulationReport {
    SimulationReport {
        success: true,
        message: "Simulation complete.".into(),
        logs: "Joint motion confirmed at time: 0s\n".into(),
        screenshot: None,
    }
}

fn kernel<S: GradingService>(service: S) -> AppKernel<S> {
    AppKernel::new(AppStore::new(AppState::default()), service)
}

fn select(kernel: &mut AppKernel<impl GradingService>, name: &str) {
    kernel.dispatch(AppCommand::SelectFile {
        name: name.to_string(),
        data: Bytes::from_static(b"PK\x03\x04payload"),
    });
}

fn drive_until<S: GradingService>(
    kernel: &mut AppKernel<S>,
    done: impl Fn(&AppState) -> bool,
) -> AppState {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        kernel.tick();
        let state = kernel.state();
        if done(&state) {
            return state;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!("workflow did not settle: {:?}", kernel.state().workflow);
}

#[test]
fn successful_check_then_simulation_reaches_complete() {
    let service = ScriptedService::new(Ok(report_85()), Ok(sim_ok()));
    let calls = service.simulate_calls.clone();
    let mut kernel = kernel(service);

    select(&mut kernel, "pick_place.zip");
    kernel.dispatch(AppCommand::StartValidation);
    assert_eq!(kernel.state().workflow, WorkflowState::Validating);

    let state = drive_until(&mut kernel, |s| !s.workflow.is_busy());
    assert_eq!(state.workflow, WorkflowState::ValidationComplete);
    assert_eq!(state.validation_report, Some(report_85()));

    kernel.dispatch(AppCommand::StartSimulation);
    assert_eq!(kernel.state().workflow, WorkflowState::Simulating);

    let state = drive_until(&mut kernel, |s| !s.workflow.is_busy());
    assert_eq!(state.workflow, WorkflowState::Complete);
    assert_eq!(state.simulation_report, Some(sim_ok()));
    assert_eq!(
        calls.lock().unwrap().as_slice(),
        &[("user_pick_place_pkg".to_string(), "pick_place_node".to_string())]
    );
}

#[test]
fn rejected_check_ends_in_error_with_report() {
    let mut rejected = report_85();
    rejected.passed = false;
    let mut kernel = kernel(ScriptedService::new(Ok(rejected.clone()), Ok(sim_ok())));

    select(&mut kernel, "pkg.zip");
    kernel.dispatch(AppCommand::StartValidation);
    let state = drive_until(&mut kernel, |s| !s.workflow.is_busy());

    assert_eq!(
        state.workflow,
        WorkflowState::Error(FailureKind::ValidationRejected)
    );
    assert_eq!(state.validation_report, Some(rejected));

    kernel.dispatch(AppCommand::StartSimulation);
    assert_eq!(
        kernel.state().workflow,
        WorkflowState::Error(FailureKind::ValidationRejected)
    );
}

#[test]
fn failing_check_call_ends_in_error_without_report() {
    let mut kernel = kernel(ScriptedService::new(
        Err(ServiceError::OperationFailed("connection refused".into())),
        Ok(sim_ok()),
    ));

    select(&mut kernel, "pkg.zip");
    kernel.dispatch(AppCommand::StartValidation);
    let state = drive_until(&mut kernel, |s| !s.workflow.is_busy());

    assert_eq!(
        state.workflow,
        WorkflowState::Error(FailureKind::ValidationCallFailed)
    );
    assert!(state.validation_report.is_none());
    assert!(state.notice.is_none());
}

#[test]
fn failing_simulation_call_keeps_validation_report() {
    let mut kernel = kernel(ScriptedService::new(
        Ok(report_85()),
        Err(ServiceError::OperationFailed("gazebo crashed".into())),
    ));

    select(&mut kernel, "pkg.zip");
    kernel.dispatch(AppCommand::StartValidation);
    drive_until(&mut kernel, |s| !s.workflow.is_busy());
    kernel.dispatch(AppCommand::StartSimulation);
    let state = drive_until(&mut kernel, |s| !s.workflow.is_busy());

    assert_eq!(
        state.workflow,
        WorkflowState::Error(FailureKind::SimulationCallFailed)
    );
    assert!(state.simulation_report.is_none());
    assert_eq!(state.validation_report, Some(report_85()));
}

#[test]
fn guards_ignore_commands_that_are_not_allowed() {
    let service = ScriptedService::new(Ok(report_85()), Ok(sim_ok()));
    let calls = service.simulate_calls.clone();
    let mut kernel = kernel(service);

    kernel.dispatch(AppCommand::StartValidation);
    assert_eq!(kernel.state().workflow, WorkflowState::Idle);

    select(&mut kernel, "pkg.zip");
    kernel.dispatch(AppCommand::StartSimulation);
    assert_eq!(kernel.state().workflow, WorkflowState::Idle);
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn rejected_selection_leaves_session_untouched() {
    let mut kernel = kernel(ScriptedService::new(Ok(report_85()), Ok(sim_ok())));
    select(&mut kernel, "pkg.zip");
    let before = kernel.state();

    select(&mut kernel, "pkg.tar.gz");
    let after = kernel.state();
    assert_eq!(after.submission_id, before.submission_id);
    assert_eq!(after.submission, before.submission);
    assert!(after
        .notice
        .as_deref()
        .is_some_and(|n| n.contains("pkg.tar.gz")));

    kernel.dispatch(AppCommand::DismissNotice);
    assert!(kernel.state().notice.is_none());
}

#[test]
fn results_for_a_superseded_call_are_dropped() {
    let mut kernel = kernel(ScriptedService::new(Ok(report_85()), Ok(sim_ok())));
    select(&mut kernel, "first.zip");
    select(&mut kernel, "second.zip");
    let current = kernel.state().submission_id;

    kernel
        .sender()
        .try_send(DomainEvent::ValidationResolved {
            run_id: uuid::Uuid::new_v4(),
            report: report_85(),
        })
        .unwrap();
    kernel.tick();

    let state = kernel.state();
    assert_eq!(state.workflow, WorkflowState::Idle);
    assert!(state.validation_report.is_none());
    assert_eq!(state.submission_id, current);
}

/// Validates instantly the first time and slowly afterwards; simulation is slow.
struct SlowRecheckService {
    validations: AtomicUsize,
}

#[async_trait::async_trait]
impl GradingService for SlowRecheckService {
    async fn validate(&self, _submission: &Submission) -> Result<ValidationReport, ServiceError> {
        if self.validations.fetch_add(1, Ordering::SeqCst) > 0 {
            tokio::time::sleep(Duration::from_millis(400)).await;
        }
        Ok(report_85())
    }

    async fn simulate(
        &self,
        _package_name: &str,
        _node_name: &str,
    ) -> Result<SimulationReport, ServiceError> {
        tokio::time::sleep(Duration::from_millis(100)).await;
        Ok(sim_ok())
    }
}

#[test]
fn rechecking_during_a_simulation_discards_the_simulation_result() {
    let mut kernel = kernel(SlowRecheckService {
        validations: AtomicUsize::new(0),
    });

    select(&mut kernel, "pkg.zip");
    kernel.dispatch(AppCommand::StartValidation);
    drive_until(&mut kernel, |s| !s.workflow.is_busy());

    kernel.dispatch(AppCommand::StartSimulation);
    kernel.dispatch(AppCommand::StartValidation);

    let settle_by = Instant::now() + Duration::from_millis(250);
    while Instant::now() < settle_by {
        kernel.tick();
        std::thread::sleep(Duration::from_millis(10));
    }

    let state = kernel.state();
    assert_eq!(state.workflow, WorkflowState::Validating);
    assert!(state.simulation_report.is_none());
    assert!(state.validation_report.is_none());
    assert!(!state.can_start_validation());

    let state = drive_until(&mut kernel, |s| !s.workflow.is_busy());
    assert_eq!(state.workflow, WorkflowState::ValidationComplete);
    assert_eq!(state.validation_report, Some(report_85()));
    assert!(state.simulation_report.is_none());
}

#[test]
fn selecting_during_a_check_discards_the_in_flight_result() {
    let mut kernel = kernel(MockGradingService::new(MockScenario::Pass).with_delays(100, 0));

    select(&mut kernel, "first.zip");
    kernel.dispatch(AppCommand::StartValidation);
    select(&mut kernel, "second.zip");
    assert_eq!(kernel.state().workflow, WorkflowState::Idle);

    let settle_by = Instant::now() + Duration::from_millis(400);
    while Instant::now() < settle_by {
        kernel.tick();
        std::thread::sleep(Duration::from_millis(10));
    }

    let state = kernel.state();
    assert_eq!(state.workflow, WorkflowState::Idle);
    assert!(state.validation_report.is_none());
}

#[test]
fn mock_service_drives_the_whole_workflow() {
    let mut kernel = kernel(MockGradingService::new(MockScenario::Warn).with_delays(0, 0));

    select(&mut kernel, "ur5e_pick.zip");
    kernel.dispatch(AppCommand::StartValidation);
    let state = drive_until(&mut kernel, |s| !s.workflow.is_busy());
    assert_eq!(state.workflow, WorkflowState::ValidationComplete);
    assert_eq!(
        state.validation_report.as_ref().map(|r| r.package_name.as_str()),
        Some("ur5e_pick")
    );

    kernel.dispatch(AppCommand::StartSimulation);
    let state = drive_until(&mut kernel, |s| !s.workflow.is_busy());
    assert_eq!(state.workflow, WorkflowState::Complete);

    kernel.dispatch(AppCommand::StartSimulation);
    assert_eq!(kernel.state().workflow, WorkflowState::Simulating);
    let state = drive_until(&mut kernel, |s| !s.workflow.is_busy());
    assert_eq!(state.workflow, WorkflowState::Complete);
}
