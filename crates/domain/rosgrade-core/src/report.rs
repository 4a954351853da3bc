use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    /// rclpy node.
    Python,
    /// rclcpp node.
    Cpp,
    Mixed,
    #[default]
    Unknown,
}

impl NodeType {
    pub fn label(self) -> &'static str {
        match self {
            NodeType::Python => "Python (rclpy)",
            NodeType::Cpp => "C++ (rclcpp)",
            NodeType::Mixed => "Mixed Python/C++",
            NodeType::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ValidationDetails {
    pub has_package_xml: bool,
    /// `CMakeLists.txt` or `setup.py` present.
    pub has_build_file: bool,
    #[serde(default)]
    pub node_type: NodeType,
    #[serde(default)]
    pub publishers: Vec<String>,
    #[serde(default)]
    pub subscribers: Vec<String>,
}

impl ValidationDetails {
    pub fn structure_ok(&self) -> bool {
        self.has_package_xml && self.has_build_file
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub passed: bool,
    pub score: u32,
    pub package_name: String,
    pub node_name: String,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub details: ValidationDetails,
}

/// Three-level outcome of a code check, as shown on the verdict badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

impl Verdict {
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Pass => "PASS",
            Verdict::Warn => "WARN",
            Verdict::Fail => "FAIL",
        }
    }
}

impl ValidationReport {
    pub fn verdict(&self) -> Verdict {
        if !self.passed {
            Verdict::Fail
        } else if !self.warnings.is_empty() {
            Verdict::Warn
        } else {
            Verdict::Pass
        }
    }

    pub fn summary(&self) -> String {
        match self.verdict() {
            Verdict::Pass => "Code passed checks.".to_string(),
            Verdict::Warn => format!(
                "Code passed, but {} warning(s) found.",
                self.warnings.len()
            ),
            Verdict::Fail if self.errors.is_empty() => "Code failed checks.".to_string(),
            Verdict::Fail => format!("Code failed: {} error(s) found.", self.errors.len()),
        }
    }

    /// Score clamped to the configured scale.
    pub fn bounded_score(&self) -> u32 {
        self.score.min(rosgrade_config::MAX_SCORE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub logs: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,
}
