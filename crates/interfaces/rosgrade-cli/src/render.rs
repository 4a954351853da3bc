//! Plain-text and JSON renderings of a finished session.

use rosgrade_app_core::viewmodel::{
    reports_vm, status_panel_vm, SimulationReportVm, ValidationReportVm,
};
use rosgrade_app_core::AppState;
use std::fmt::Write;

pub fn text_summary(state: &AppState) -> String {
    let mut out = String::new();

    out.push_str("\n:: Status\n");
    for row in status_panel_vm(state).rows() {
        let _ = writeln!(out, "   {:<12} {}", row.label, row.badge.label());
    }
    let _ = writeln!(out, "   {:<12} {}", "State", state.workflow.label());
    if let Some(kind) = state.workflow.failure() {
        let _ = writeln!(out, "   {:<12} {}", "Reason", kind.message());
    }

    let reports = reports_vm(state);
    if let Some(vm) = &reports.validation {
        write_validation(&mut out, vm);
    }
    if let Some(vm) = &reports.simulation {
        write_simulation(&mut out, vm);
    }
    if let Some(placeholder) = reports.placeholder {
        let _ = writeln!(out, "\n   {placeholder}");
    }
    out
}

fn write_validation(out: &mut String, vm: &ValidationReportVm) {
    let _ = writeln!(out, "\n:: Code Check [{}]", vm.verdict.label());
    let _ = writeln!(out, "   Package:   {}", vm.package_name);
    let _ = writeln!(out, "   Node:      {} ({})", vm.node_name, vm.node_type);
    let _ = writeln!(out, "   Score:     {}", vm.score_label);
    let _ = writeln!(out, "   {}", vm.summary);
    for check in &vm.checks {
        let mark = if check.ok { "ok" } else { "--" };
        let _ = writeln!(out, "   [{mark}] {}", check.label);
    }
    write_list(out, "Publishers", &vm.publishers);
    write_list(out, "Subscribers", &vm.subscribers);
    write_list(out, "Warnings", &vm.warnings);
    write_list(out, "Errors", &vm.errors);
}

fn write_simulation(out: &mut String, vm: &SimulationReportVm) {
    let _ = writeln!(out, "\n:: Simulation [{}]", vm.badge);
    let _ = writeln!(out, "   {}", vm.message);
    if let Some(shot) = &vm.screenshot {
        let _ = writeln!(out, "   Screenshot: {shot}");
    }
    if !vm.logs.is_empty() {
        out.push_str("   Log:\n");
        for line in vm.logs.lines() {
            let _ = writeln!(out, "     {line}");
        }
    }
}

fn write_list(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "   {title}:");
    for item in items {
        let _ = writeln!(out, "     - {item}");
    }
}

/// Machine-readable session outcome; reports keep their wire shape.
pub fn json_summary(state: &AppState) -> serde_json::Value {
    serde_json::json!({
        "file": state.submission.as_ref().map(|s| s.name()),
        "state": state.workflow.label(),
        "failure": state.workflow.failure().map(|f| f.message()),
        "verdict": state.validation_report.as_ref().map(|r| r.verdict()),
        "validation": state.validation_report,
        "simulation": state.simulation_report,
    })
}
