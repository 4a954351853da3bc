use humansize::{format_size, DECIMAL};
use rosgrade_core::{SimulationReport, ValidationReport, Verdict, WorkflowState};

use crate::domain::AppState;

// --- Status panel ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    Pending,
    Success,
    Error,
}

impl StatusBadge {
    pub fn label(self) -> &'static str {
        match self {
            StatusBadge::Pending => "PENDING",
            StatusBadge::Success => "SUCCESS",
            StatusBadge::Error => "ERROR",
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusRowVm {
    pub label: &'static str,
    pub badge: StatusBadge,
    pub show_spinner: bool,
}

#[derive(Debug, Clone)]
pub struct StatusPanelVm {
    pub upload: StatusRowVm,
    pub validation: StatusRowVm,
    pub simulation: StatusRowVm,
}

impl StatusPanelVm {
    pub fn rows(&self) -> [&StatusRowVm; 3] {
        [&self.upload, &self.validation, &self.simulation]
    }
}

fn outcome_badge(outcome: Option<bool>) -> StatusBadge {
    match outcome {
        None => StatusBadge::Pending,
        Some(true) => StatusBadge::Success,
        Some(false) => StatusBadge::Error,
    }
}

pub fn status_panel_vm(state: &AppState) -> StatusPanelVm {
    StatusPanelVm {
        upload: StatusRowVm {
            label: "Upload",
            badge: if state.has_file() {
                StatusBadge::Success
            } else {
                StatusBadge::Pending
            },
            show_spinner: false,
        },
        validation: StatusRowVm {
            label: "Validation",
            badge: outcome_badge(state.validation_report.as_ref().map(|r| r.passed)),
            show_spinner: state.workflow == WorkflowState::Validating,
        },
        simulation: StatusRowVm {
            label: "Simulation",
            badge: outcome_badge(state.simulation_report.as_ref().map(|r| r.success)),
            show_spinner: state.workflow == WorkflowState::Simulating,
        },
    }
}

// --- Controls ---

#[derive(Debug, Clone)]
pub struct SubmissionVm {
    pub file_name: String,
    pub size_human: String,
}

#[derive(Debug, Clone)]
pub struct ControlsVm {
    pub submission: Option<SubmissionVm>,
    pub can_validate: bool,
    pub can_simulate: bool,
    pub validate_label: &'static str,
    pub simulate_label: &'static str,
    pub mode: &'static str,
    /// Explanation of an error state, if any.
    pub failure: Option<&'static str>,
    pub notice: Option<String>,
}

pub fn controls_vm(state: &AppState) -> ControlsVm {
    ControlsVm {
        submission: state.submission.as_ref().map(|s| SubmissionVm {
            file_name: s.name().to_string(),
            size_human: format_size(s.size_bytes(), DECIMAL),
        }),
        can_validate: state.can_start_validation(),
        can_simulate: state.can_start_simulation(),
        validate_label: if state.workflow == WorkflowState::Validating {
            "Checking…"
        } else {
            "Run Code Check"
        },
        simulate_label: if state.workflow == WorkflowState::Simulating {
            "Simulating…"
        } else {
            "Run Simulation"
        },
        mode: state.workflow.label(),
        failure: state.workflow.failure().map(|f| f.message()),
        notice: state.notice.clone(),
    }
}

// --- Reports ---

#[derive(Debug, Clone)]
pub struct CheckVm {
    pub label: &'static str,
    pub ok: bool,
}

#[derive(Debug, Clone)]
pub struct ValidationReportVm {
    pub package_name: String,
    pub node_name: String,
    pub verdict: Verdict,
    pub score_label: String,
    pub summary: String,
    pub checks: Vec<CheckVm>,
    pub node_type: &'static str,
    pub publishers: Vec<String>,
    pub subscribers: Vec<String>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl From<&ValidationReport> for ValidationReportVm {
    fn from(r: &ValidationReport) -> Self {
        Self {
            package_name: r.package_name.clone(),
            node_name: r.node_name.clone(),
            verdict: r.verdict(),
            score_label: format!("{}/{}", r.bounded_score(), rosgrade_config::MAX_SCORE),
            summary: r.summary(),
            checks: vec![
                CheckVm {
                    label: "package.xml present",
                    ok: r.details.has_package_xml,
                },
                CheckVm {
                    label: "Build file (CMakeLists.txt / setup.py)",
                    ok: r.details.has_build_file,
                },
                CheckVm {
                    label: "No safety warnings",
                    ok: r.warnings.is_empty(),
                },
            ],
            node_type: r.details.node_type.label(),
            publishers: r.details.publishers.clone(),
            subscribers: r.details.subscribers.clone(),
            warnings: r.warnings.clone(),
            errors: r.errors.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SimulationReportVm {
    pub success: bool,
    pub badge: &'static str,
    pub message: String,
    pub logs: String,
    pub screenshot: Option<String>,
}

impl From<&SimulationReport> for SimulationReportVm {
    fn from(r: &SimulationReport) -> Self {
        Self {
            success: r.success,
            badge: if r.success { "PASS" } else { "FAIL" },
            message: r.message.clone(),
            logs: r.logs.clone(),
            screenshot: r.screenshot.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportsVm {
    pub validation: Option<ValidationReportVm>,
    pub simulation: Option<SimulationReportVm>,
    /// Shown when there is nothing to render yet.
    pub placeholder: Option<&'static str>,
}

pub fn reports_vm(state: &AppState) -> ReportsVm {
    let validation = state
        .validation_report
        .as_ref()
        .map(ValidationReportVm::from);
    let simulation = state
        .simulation_report
        .as_ref()
        .map(SimulationReportVm::from);

    let placeholder = if validation.is_some() || simulation.is_some() {
        None
    } else {
        Some(match state.workflow {
            WorkflowState::Validating => "Running code check…",
            WorkflowState::Error(_) => "No report available.",
            _ if state.has_file() => "Run a code check to see the report.",
            _ => "Upload a zipped ROS 2 package to begin.",
        })
    };

    ReportsVm {
        validation,
        simulation,
        placeholder,
    }
}
