pub mod command;
pub mod header;
pub mod simulation_report;
pub mod status;
pub mod upload;
pub mod validation_report;
