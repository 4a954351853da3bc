//! Stand-in grading backend.
//!
//! Sleeps for a configurable delay and answers with canned reports shaped like
//! the output of the real code checker and Gazebo simulator run. A
//! [`MockScenario`] picks which outcome is produced so every path of the
//! workflow can be exercised without a backend.

use std::fmt::Write as _;
use std::time::Duration;

use rosgrade_core::{
    NodeType, ServiceError, SimulationReport, Submission, ValidationDetails, ValidationReport,
};

use crate::ports::GradingService;

const DEFAULT_PACKAGE: &str = "user_pick_place_pkg";
const DEFAULT_NODE: &str = "pick_place_node";
const ROBOT_LAUNCH: &str = "ur_simulation_gazebo ur_sim_control.launch.py";
const SIM_SECONDS: u32 = 20;
const SIM_POLL_SECONDS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MockScenario {
    /// Clean check, successful simulation.
    #[default]
    Pass,
    /// Check passes with safety warnings, successful simulation.
    Warn,
    /// Check resolves with `passed = false`.
    Reject,
    /// Check call fails.
    Unavailable,
    /// Check passes, simulation resolves with `success = false`.
    NoMotion,
    /// Check passes, simulation call fails.
    SimulatorDown,
}

#[derive(Debug, Clone)]
pub struct MockGradingService {
    scenario: MockScenario,
    validation_delay: Duration,
    simulation_delay: Duration,
}

impl Default for MockGradingService {
    fn default() -> Self {
        Self::new(MockScenario::default())
    }
}

impl MockGradingService {
    pub fn new(scenario: MockScenario) -> Self {
        Self {
            scenario,
            validation_delay: rosgrade_config::mock_delay(
                rosgrade_config::DEFAULT_VALIDATION_DELAY_MS,
            ),
            simulation_delay: rosgrade_config::mock_delay(
                rosgrade_config::DEFAULT_SIMULATION_DELAY_MS,
            ),
        }
    }

    pub fn with_delays(mut self, validation_ms: u64, simulation_ms: u64) -> Self {
        self.validation_delay = rosgrade_config::mock_delay(validation_ms);
        self.simulation_delay = rosgrade_config::mock_delay(simulation_ms);
        self
    }

    pub fn scenario(&self) -> MockScenario {
        self.scenario
    }
}

#[async_trait::async_trait]
impl GradingService for MockGradingService {
    async fn validate(&self, submission: &Submission) -> Result<ValidationReport, ServiceError> {
        tracing::debug!(
            file = submission.name(),
            bytes = submission.size_bytes(),
            "mock code check started"
        );
        tokio::time::sleep(self.validation_delay).await;

        if self.scenario == MockScenario::Unavailable {
            return Err(ServiceError::OperationFailed(
                "code checker did not respond".into(),
            ));
        }
        Ok(canned_validation(
            &package_name_for(submission.name()),
            self.scenario,
        ))
    }

    async fn simulate(
        &self,
        package_name: &str,
        node_name: &str,
    ) -> Result<SimulationReport, ServiceError> {
        tracing::debug!(package_name, node_name, "mock simulation started");
        tokio::time::sleep(self.simulation_delay).await;

        match self.scenario {
            MockScenario::SimulatorDown => Err(ServiceError::OperationFailed(
                "failed to launch ROS/Gazebo".into(),
            )),
            MockScenario::NoMotion => Ok(canned_simulation(package_name, node_name, false)),
            _ => Ok(canned_simulation(package_name, node_name, true)),
        }
    }
}

/// ROS package names are lowercase with underscores; derive one from the archive name.
fn package_name_for(file_name: &str) -> String {
    let stem = file_name
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(file_name);
    let name: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    let name = name.trim_matches('_');
    if name.is_empty() || !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
        DEFAULT_PACKAGE.to_string()
    } else {
        name.to_string()
    }
}

fn canned_validation(package_name: &str, scenario: MockScenario) -> ValidationReport {
    let node_file = format!("{DEFAULT_NODE}.py");
    let details = ValidationDetails {
        has_package_xml: true,
        has_build_file: true,
        node_type: NodeType::Python,
        publishers: vec!["/joint_trajectory_controller/joint_trajectory".into()],
        subscribers: vec!["/joint_states".into()],
    };

    match scenario {
        MockScenario::Reject => ValidationReport {
            passed: false,
            score: 40,
            package_name: package_name.to_string(),
            node_name: DEFAULT_NODE.to_string(),
            errors: vec![
                format!("{node_file}:42:5: E999 SyntaxError: invalid syntax"),
                "Missing build file: expected CMakeLists.txt or setup.py".into(),
            ],
            warnings: vec![format!(
                "File {node_file}: Potential un-throttled loop detected."
            )],
            details: ValidationDetails {
                has_build_file: false,
                ..details
            },
        },
        MockScenario::Warn => ValidationReport {
            passed: true,
            score: 85,
            package_name: package_name.to_string(),
            node_name: DEFAULT_NODE.to_string(),
            errors: Vec::new(),
            warnings: vec![format!(
                "File {node_file}: Hardcoded value that could be outside safe joint limits detected."
            )],
            details,
        },
        _ => ValidationReport {
            passed: true,
            score: 95,
            package_name: package_name.to_string(),
            node_name: DEFAULT_NODE.to_string(),
            errors: Vec::new(),
            warnings: Vec::new(),
            details,
        },
    }
}

fn canned_simulation(package_name: &str, node_name: &str, motion: bool) -> SimulationReport {
    let started = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    let mut logs = String::new();
    let _ = writeln!(logs, "--- Simulation Start: {started} ---");
    let _ = writeln!(
        logs,
        "ros2 launch {ROBOT_LAUNCH} ur_type:=ur5e launch_rviz:=false"
    );
    let _ = writeln!(logs, "Waiting 15 seconds for Gazebo to stabilize...");
    let _ = writeln!(logs, "ros2 run {package_name} {node_name}");
    let _ = writeln!(logs, "Running simulation for {SIM_SECONDS} seconds...");
    for t in (0..SIM_SECONDS).step_by(SIM_POLL_SECONDS as usize) {
        if motion {
            let _ = writeln!(logs, "Joint motion confirmed at time: {t}s");
        } else {
            let _ = writeln!(logs, "No joint state received at time: {t}s");
        }
    }
    let _ = writeln!(logs, "--- Simulation End, Killing processes ---");
    let _ = writeln!(
        logs,
        "Simulation Result: {}",
        if motion { "PASS" } else { "FAIL" }
    );

    if motion {
        SimulationReport {
            success: true,
            message: "Simulation complete: joint motion confirmed.".into(),
            logs,
            screenshot: Some(format!("{package_name}_{node_name}_final.png")),
        }
    } else {
        SimulationReport {
            success: false,
            message: "Simulation complete: no joint motion detected.".into(),
            logs,
            screenshot: None,
        }
    }
}
