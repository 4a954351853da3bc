pub mod error;
pub mod report;
pub mod submission;
pub mod workflow;

pub use error::{ServiceError, SubmissionError};
pub use report::{NodeType, SimulationReport, ValidationDetails, ValidationReport, Verdict};
pub use submission::Submission;
pub use workflow::{FailureKind, WorkflowState};
