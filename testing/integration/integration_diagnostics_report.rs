//! Prototype report validation
//!
//! Checks the numbers gathered by the diagnostics report and its JSON form.

use pqf_rs::{default_prototype, PqfConfig, Prototype, PrototypeReport, WindowKind};

#[test]
fn test_report_of_default_prototype() {
    let report = PrototypeReport::collect(default_prototype(), 513);

    assert_eq!(report.coefficients.len(), 384);
    assert_eq!(report.response.len(), 513);
    assert_eq!(report.response[0].frequency, 0.0);
    assert_eq!(report.response[512].frequency, 1.0);
    assert!(report.response[0].magnitude_db.abs() < 1e-9, "DC should be 0 dB");
    assert!(
        (report.crossover_gain_db + 6.02).abs() < 0.05,
        "crossover at {} dB",
        report.crossover_gain_db
    );
    assert!(report.stopband_peak_db < -80.0, "stopband peak {} dB", report.stopband_peak_db);
}

#[test]
fn test_report_json_round_trip_fields() {
    let config = PqfConfig::single_step(8, 16)
        .and_then(|c| c.with_window(WindowKind::Blackman))
        .unwrap();
    let report = PrototypeReport::collect(&Prototype::generate(&config), 64);
    let json = report.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["config"]["subbands"], 8);
    assert_eq!(value["config"]["window"], "Blackman");
    assert_eq!(value["coefficients"].as_array().unwrap().len(), 128);
    assert!(value["generated_at"].is_string());
}

#[test]
fn test_report_save() {
    let path = std::env::temp_dir().join(format!("pqf_report_{}.json", std::process::id()));
    let report = PrototypeReport::collect(default_prototype(), 32);
    report.save(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"crossover_gain_db\""));
    std::fs::remove_file(&path).unwrap();
}
