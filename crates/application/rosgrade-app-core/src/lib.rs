pub mod app_core;
mod async_runtime;
pub mod domain;
pub mod kernel;
pub mod mock;
pub mod ports;
pub mod viewmodel;

pub use app_core::*;
pub use domain::{AppState, RunId, SubmissionId};
pub use kernel::AppKernel;
pub use mock::{MockGradingService, MockScenario};
pub use ports::*;
pub use viewmodel::*;
