// ==========================================
// 交互式表单 / 表单会话集成测试
// ==========================================
// 测试目标: 无效输入重新询问、留空取平均值、EOF 放弃、报告保存
// ==========================================


use green_seal_calc::app::run_form;
use green_seal_calc::{ApiError, FormSession, ValidationError};
use std::io::Cursor;
use test_helpers::builtin_api;

fn run(input: &str, report_dir: Option<&std::path::Path>) -> (Option<green_seal_calc::EvaluationResult>, String) {
    let api = builtin_api("en");
    let mut out = Vec::new();
    let result = run_form(&api, Cursor::new(input.as_bytes()), &mut out, report_dir).expect("run_form");
    (result, String::from_utf8(out).expect("utf8"))
}

#[test]
fn test_form_reprompts_until_valid() {
    green_seal_calc::logging::init_test();

    let dir = tempfile::tempdir().expect("tempdir");
    let input = "abc\n-5\n100\nVidro\nCimento, Aço\n\n0\n18\ny\n";

    let (result, output) = run(input, Some(dir.path()));
    let result = result.expect("completed");

    assert_eq!(output.matches("⚠ Invalid input").count(), 4);
    assert_eq!(result.area_m2, 100.0);
    assert_eq!(result.impact_of("Cimento").expect("Cimento").user_consumption, 15.0);
    assert_eq!(result.impact_of("Aço").expect("Aço").user_consumption, 18.0);
    assert!(result.seal_awarded);

    assert!(output.contains("✅ Green Seal: AWARDED"));
    assert!(output.contains("Report saved to"));
    let saved = std::fs::read_dir(dir.path()).expect("read_dir").count();
    assert_eq!(saved, 1);
}

#[test]
fn test_form_eof_abandons() {
    let (result, output) = run("100\n", None);
    assert!(result.is_none());
    assert!(output.contains("Construction area"));
    assert!(!output.contains("Green Seal"));
}

#[test]
fn test_form_without_report_prompt() {
    let (result, output) = run("50\nGesso\n9\n", None);
    let result = result.expect("completed");

    // 9 > 7: 超出平均消耗
    assert!(!result.criteria.no_excess_consumption);
    assert!(!result.seal_awarded);
    assert!(!output.contains("Save report?"));
}

#[test]
fn test_form_creates_missing_report_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let reports = dir.path().join("relatorios");

    let (result, output) = run("10\nAço\n\ny\n", Some(reports.as_path()));
    assert!(result.is_some());
    assert!(output.contains("Report saved to"));
    assert!(reports.is_dir());
    assert_eq!(std::fs::read_dir(&reports).expect("read_dir").count(), 1);
}

#[test]
fn test_form_declined_report_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (result, _) = run("10\nMadeira\n\nn\n", Some(dir.path()));
    assert!(result.is_some());
    assert_eq!(std::fs::read_dir(dir.path()).expect("read_dir").count(), 0);
}

#[test]
fn test_session_operations() {
    let api = builtin_api("en");
    let mut session = FormSession::new();

    assert!(session.set_area(0.0).is_err());
    session.set_area(80.0).expect("area");

    session.select_material(&api, "tijolo").expect("select");
    session.select_material(&api, "Areia").expect("select");
    assert_eq!(
        session.select_material(&api, "TIJOLO"),
        Err(ValidationError::DuplicateMaterial("Tijolo".to_string()))
    );
    assert_eq!(
        session.select_material(&api, "Vidro"),
        Err(ValidationError::UnknownMaterial("Vidro".to_string()))
    );

    assert!(session.set_consumption("Tijolo", -2.0).is_err());
    session.set_consumption("Tijolo", 50.0).expect("consumption");
    assert!(session.set_consumption("Ferro", 1.0).is_err());

    let removed = session.deselect_material("areia").expect("deselect");
    assert_eq!(removed.material.name, "Areia");

    let result = session.evaluate(&api).expect("evaluate");
    assert_eq!(result.impacts.len(), 1);
    assert_eq!(result.impacts[0].user_consumption, 50.0);

    session.clear();
    assert!(session.area().is_none());
    assert!(session.entries().is_empty());
    assert!(matches!(
        session.evaluate(&api),
        Err(ApiError::Validation(_))
    ));
}
