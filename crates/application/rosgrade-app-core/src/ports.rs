use rosgrade_core::{ServiceError, SimulationReport, Submission, ValidationReport};

/// Remote grading backend: static checks and simulator runs.
#[async_trait::async_trait]
pub trait GradingService: Send + Sync + 'static {
    async fn validate(&self, submission: &Submission) -> Result<ValidationReport, ServiceError>;

    async fn simulate(
        &self,
        package_name: &str,
        node_name: &str,
    ) -> Result<SimulationReport, ServiceError>;
}
