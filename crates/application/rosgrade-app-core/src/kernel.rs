use std::sync::Arc;

use tokio::sync::mpsc;

use rosgrade_core::Submission;

use crate::app_core::{AppCommand, AppStore, DomainEvent};
use crate::domain::{AppState, RunId, SubmissionId};
use crate::ports::GradingService;

/// Workflow controller: runs commands against the store and the grading service.
///
/// Service calls run on the shared runtime and report back over a channel;
/// call [`AppKernel::tick`] from the UI loop to fold finished calls into state.
pub struct AppKernel<S> {
    pub store: AppStore,
    service: Arc<S>,

    tx: mpsc::Sender<DomainEvent>,
    rx: mpsc::Receiver<DomainEvent>,
}

impl<S> AppKernel<S>
where
    S: GradingService,
{
    pub fn new(store: AppStore, service: S) -> Self {
        let (tx, rx) = mpsc::channel(rosgrade_config::EVENT_CHANNEL_CAPACITY);
        Self {
            store,
            service: Arc::new(service),
            tx,
            rx,
        }
    }

    pub fn state(&self) -> AppState {
        self.store.state()
    }

    pub fn dispatch(&mut self, cmd: AppCommand) {
        match cmd {
            AppCommand::SelectFile { name, data } => match Submission::new(name, data) {
                Ok(submission) => {
                    let submission_id: SubmissionId = uuid::Uuid::new_v4();
                    tracing::info!(
                        file = submission.name(),
                        bytes = submission.size_bytes(),
                        %submission_id,
                        "package selected"
                    );
                    self.store.apply(DomainEvent::SubmissionSelected {
                        submission_id,
                        submission,
                    });
                }
                Err(e) => {
                    tracing::warn!("file selection rejected: {e}");
                    self.store.apply(DomainEvent::Notice(e.to_string()));
                }
            },

            AppCommand::StartValidation => self.start_validation(),
            AppCommand::StartSimulation => self.start_simulation(),

            AppCommand::ShowNotice(msg) => self.store.apply(DomainEvent::Notice(msg)),
            AppCommand::DismissNotice => self.store.apply(DomainEvent::NoticeDismissed),
        }
    }

    fn start_validation(&mut self) {
        let snapshot = self.store.state();
        if !snapshot.can_start_validation() {
            tracing::debug!(state = ?snapshot.workflow, "code check not allowed");
            return;
        }
        let Some(submission) = snapshot.submission else {
            return;
        };

        let run_id: RunId = uuid::Uuid::new_v4();
        self.store.apply(DomainEvent::ValidationStarted { run_id });
        tracing::info!(file = submission.name(), "code check started");

        let service = self.service.clone();
        let tx = self.tx.clone();
        let spawned = self.spawn(async move {
            let ev = match service.validate(&submission).await {
                Ok(report) => {
                    tracing::info!(
                        passed = report.passed,
                        score = report.score,
                        "code check finished"
                    );
                    DomainEvent::ValidationResolved { run_id, report }
                }
                Err(e) => {
                    tracing::error!("code check failed: {e}");
                    DomainEvent::ValidationFailed { run_id }
                }
            };
            let _ = tx.send(ev).await;
        });

        if let Err(e) = spawned {
            tracing::error!("failed to start code check: {e}");
            self.store.apply(DomainEvent::ValidationFailed { run_id });
        }
    }

    fn start_simulation(&mut self) {
        let snapshot = self.store.state();
        if !snapshot.can_start_simulation() {
            tracing::debug!(state = ?snapshot.workflow, "simulation not allowed");
            return;
        }
        let Some(report) = snapshot.validation_report else {
            return;
        };

        let run_id: RunId = uuid::Uuid::new_v4();
        self.store.apply(DomainEvent::SimulationStarted { run_id });
        tracing::info!(
            package = %report.package_name,
            node = %report.node_name,
            "simulation started"
        );

        let service = self.service.clone();
        let tx = self.tx.clone();
        let spawned = self.spawn(async move {
            let ev = match service
                .simulate(&report.package_name, &report.node_name)
                .await
            {
                Ok(report) => {
                    tracing::info!(success = report.success, "simulation finished");
                    DomainEvent::SimulationResolved { run_id, report }
                }
                Err(e) => {
                    tracing::error!("simulation failed: {e}");
                    DomainEvent::SimulationFailed { run_id }
                }
            };
            let _ = tx.send(ev).await;
        });

        if let Err(e) = spawned {
            tracing::error!("failed to start simulation: {e}");
            self.store.apply(DomainEvent::SimulationFailed { run_id });
        }
    }

    fn spawn<F>(&self, fut: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        crate::async_runtime::runtime()?.spawn(fut);
        Ok(())
    }

    /// Applies finished service calls. A result is dropped unless its call is
    /// still the awaited one: selecting a file or starting another step
    /// supersedes it.
    pub fn tick(&mut self) {
        while let Ok(ev) = self.rx.try_recv() {
            if let Some(result_for) = ev.result_run_id() {
                let current = self.store.with_state(|s| s.run_id);
                if current != Some(result_for) {
                    tracing::debug!(%result_for, "dropping result for superseded call");
                    continue;
                }
            }
            self.store.apply(ev);
        }
    }

    pub fn is_busy(&self) -> bool {
        self.store.with_state(|s| s.workflow.is_busy())
    }

    pub fn sender(&self) -> mpsc::Sender<DomainEvent> {
        self.tx.clone()
    }
}
