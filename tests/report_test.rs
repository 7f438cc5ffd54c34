// ==========================================
// 报告集成测试
// ==========================================
// 测试目标: 多语言文本报告、报告保存、JSON 导出
// ==========================================


use green_seal_calc::domain::{EvaluationResult, ImpactModel, MaterialEntry};
use green_seal_calc::engine::default_report_file_name;
use green_seal_calc::EvaluationApi;
use std::fs;
use test_helpers::{api_with, builtin_api};

fn evaluate(api: &EvaluationApi, materials: &[(&str, f64)]) -> EvaluationResult {
    let entries: Vec<MaterialEntry> = materials
        .iter()
        .map(|(name, value)| {
            MaterialEntry::new(api.catalog().find(name).expect("material").clone(), *value)
        })
        .collect();
    api.evaluate(&entries, 100.0).expect("evaluate")
}

#[test]
fn test_english_report_for_awarded_seal() {
    let api = builtin_api("en");
    let result = evaluate(&api, &[("Cimento", 15.0), ("Tijolo", 60.0), ("Aço", 20.0)]);
    let report = api.render_report(&result);

    assert!(report.contains("Material Waste Analysis Report"));
    assert!(report.contains(&result.evaluation_id.to_string()));
    assert!(report.contains("Cimento"));
    assert!(report.contains("Tijolo"));
    assert!(report.contains("Total waste generated: 14.9000 kg"));
    assert!(report.contains("✅ Green Seal: AWARDED"));
    assert!(report.contains("No material exceeded its average consumption"));

    // 结论在条件列表之前
    let verdict = report.find("Green Seal: AWARDED").expect("verdict");
    let criteria = report.find("Criteria:").expect("criteria");
    assert!(verdict < criteria);
}

#[test]
fn test_portuguese_report_for_refused_seal() {
    let api = builtin_api("pt-BR");
    // Areia 不可回收，Cimento 超出平均消耗
    let result = evaluate(&api, &[("Cimento", 16.0), ("Areia", 0.006)]);
    assert!(!result.seal_awarded);

    let report = api.render_report(&result);
    assert!(report.contains("❌"));
    assert!(!report.contains("Nenhum material ultrapassou o consumo médio"));
    assert!(report.contains("Areia"));
}

#[test]
fn test_save_report_into_directory() {
    let api = builtin_api("en");
    let result = evaluate(&api, &[("Madeira", 0.01)]);
    let dir = tempfile::tempdir().expect("tempdir");

    let path = api.save_report(&result, dir.path()).expect("save");
    assert_eq!(path.parent(), Some(dir.path()));
    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some(default_report_file_name(result.evaluated_at).as_str())
    );

    let saved = fs::read_to_string(&path).expect("read");
    assert_eq!(saved, api.render_report(&result));
}

#[test]
fn test_save_report_to_nested_file() {
    let api = builtin_api("zh-CN");
    let result = evaluate(&api, &[("Gesso", 7.0)]);
    let dir = tempfile::tempdir().expect("tempdir");
    let target = dir.path().join("obras").join("casa.txt");

    let path = api.save_report(&result, &target).expect("save");
    assert_eq!(path, target);
    assert!(path.exists());
}

#[test]
fn test_json_export() {
    let api = builtin_api("en");
    let result = evaluate(&api, &[("Cimento", 10.0), ("Aço", 5.0)]);

    let json = api.to_json(&result).expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse");

    assert_eq!(value["seal_awarded"], serde_json::Value::Bool(result.seal_awarded));
    assert_eq!(value["model"], "DIRECT");
    assert_eq!(value["impacts"].as_array().map(|a| a.len()), Some(2));
    assert_eq!(value["impacts"][1]["unit"], "kg/m²");

    let back: EvaluationResult = serde_json::from_str(&json).expect("round trip");
    assert_eq!(back.evaluation_id, result.evaluation_id);
}

fn table_row<'a>(report: &'a str, material: &str) -> &'a str {
    report
        .lines()
        .find(|l| l.starts_with(material))
        .expect("material row")
}

#[test]
fn test_direct_model_row_shows_per_area_values() {
    let api = builtin_api("en");
    let result = evaluate(&api, &[("Concreto", 0.04)]);
    let report = api.render_report(&result);

    assert!(report.contains("Consumption"));
    assert!(!report.contains("Total consumption"));

    // 0.04 m³/m²: 废料 0.04 × 0.12，CO₂ 0.04 × 0.15
    let row = table_row(&report, "Concreto");
    assert!(row.contains("0.0400 m³/m²"), "row: {}", row);
    assert!(row.contains("0.0048"), "row: {}", row);
    assert!(row.contains("0.0060"), "row: {}", row);
    assert!(!row.contains(" m³ "), "row: {}", row);
    assert!(report.contains("Total waste generated: 0.0048 kg"));
}

#[test]
fn test_area_scaled_row_shows_totals_in_kg() {
    let concrete = builtin_api("en")
        .catalog()
        .find("Concreto")
        .expect("Concreto")
        .clone();
    let api = api_with(vec![concrete], ImpactModel::AreaScaled, "en").expect("api");
    let result = evaluate(&api, &[("Concreto", 0.05)]);
    let report = api.render_report(&result);

    assert!(report.contains("Total consumption"));
    let row = table_row(&report, "Concreto");
    assert!(row.contains("5.00 m³"), "row: {}", row);
    assert!(row.contains("12,000.00"), "row: {}", row);
    assert!(row.contains("1,440.00"), "row: {}", row);
    assert!(row.contains("216.00"), "row: {}", row);
}

#[test]
fn test_save_report_into_missing_directory() {
    let api = builtin_api("en");
    let result = evaluate(&api, &[("Aço", 20.0)]);
    let dir = tempfile::tempdir().expect("tempdir");
    let reports = dir.path().join("relatorios");

    let first = api.save_report_in_dir(&result, &reports).expect("save");
    assert!(reports.is_dir());
    assert_eq!(first.parent(), Some(reports.as_path()));
    assert!(first.is_file());

    // 再次保存到同一目录不会覆盖目录本身
    let second = api.save_report_in_dir(&result, &reports).expect("save again");
    assert!(reports.is_dir());
    assert!(second.is_file());
}
