use rosgrade_core::{NodeType, SimulationReport, Submission, SubmissionError, ValidationReport, Verdict};

#[test]
fn validation_report_decodes_backend_shape() -> anyhow::Result<()> {
    let json = r#"
    {
      "passed": true,
      "score": 85,
      "package_name": "user_pick_place_pkg",
      "node_name": "pick_place_node",
      "errors": [],
      "warnings": ["File pick_place_node.py: Potential un-throttled loop detected."],
      "details": {
        "has_package_xml": true,
        "has_build_file": true,
        "node_type": "python",
        "publishers": ["/joint_trajectory_controller/joint_trajectory"],
        "subscribers": ["/joint_states"]
      }
    }
    "#;

    let report: ValidationReport = serde_json::from_str(json)?;
    assert_eq!(report.score, 85);
    assert_eq!(report.details.node_type, NodeType::Python);
    assert!(report.details.structure_ok());
    assert_eq!(report.verdict(), Verdict::Warn);
    assert_eq!(report.details.subscribers, vec!["/joint_states".to_string()]);
    Ok(())
}

#[test]
fn missing_optional_fields_take_defaults() -> anyhow::Result<()> {
    let report: ValidationReport = serde_json::from_str(
        r#"{ "passed": false, "score": 0, "package_name": "", "node_name": "" }"#,
    )?;
    assert!(report.errors.is_empty());
    assert_eq!(report.details.node_type, NodeType::Unknown);
    assert!(!report.details.structure_ok());

    let sim: SimulationReport =
        serde_json::from_str(r#"{ "success": true, "message": "ok" }"#)?;
    assert_eq!(sim.logs, "");
    assert_eq!(sim.screenshot, None);
    Ok(())
}

#[test]
fn simulation_report_omits_missing_screenshot() -> anyhow::Result<()> {
    let sim = SimulationReport {
        success: false,
        message: "No joint motion detected.".into(),
        logs: String::new(),
        screenshot: None,
    };
    let value = serde_json::to_value(&sim)?;
    assert!(value.get("screenshot").is_none());
    Ok(())
}

#[test]
fn submission_rejects_bad_selections() {
    assert_eq!(
        Submission::new("   ", vec![1u8]),
        Err(SubmissionError::MissingName)
    );
    assert_eq!(
        Submission::new("pkg.tar.gz", vec![1u8]),
        Err(SubmissionError::UnsupportedExtension("pkg.tar.gz".into()))
    );
    assert_eq!(
        Submission::new("pkg.zip", Vec::<u8>::new()),
        Err(SubmissionError::EmptyFile("pkg.zip".into()))
    );
    assert!(Submission::new("PKG.ZIP", vec![0x50u8, 0x4b]).is_ok());
}
