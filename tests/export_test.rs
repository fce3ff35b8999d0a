//! レポート出力の統合テスト

use schema_qa_common::{ComparisonReport, Found, Status};
use schema_qa_rust::cli::ReportFormat;
use schema_qa_rust::export;
use tempfile::tempdir;

fn create_test_row(index: usize, status: Status) -> ComparisonReport {
    ComparisonReport {
        req_id: format!("R{}", index),
        field_key: format!("field{}", index),
        expected_type: "text".to_string(),
        actual_type: Some("string".to_string()),
        expected_required: "true".to_string(),
        actual_required: Some("false".to_string()),
        found: Found::Yes,
        status,
        differences: "type: expected=text actual=string".to_string(),
        best_match_key: Some(format!("field{}", index)),
        best_match_score: Some(100),
        raw_json_path: Some(format!("root/fields/[{}]", index)),
    }
}

#[test]
fn test_csv_report_content() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("report.csv");

    let rows = vec![
        create_test_row(1, Status::Mismatch),
        create_test_row(2, Status::Matched),
    ];

    export::write_report(&rows, &path, ReportFormat::Csv).expect("CSV出力失敗");

    let content = std::fs::read_to_string(&path).expect("CSV読み込み失敗");
    let lines: Vec<&str> = content.lines().collect();

    // ヘッダー + データ2行
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("req_id,field_key,expected_type"));
    assert!(lines[1].contains("R1"));
    assert!(lines[1].contains("MISMATCH"));
    assert!(lines[2].contains("MATCHED"));
}

#[test]
fn test_csv_report_escapes_commas() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("report.csv");

    let mut row = create_test_row(1, Status::Mismatch);
    // 選択肢差分はカンマを含むメッセージになる
    row.differences = r#"options: expected=["red", "blue"] actual=["red"]"#.to_string();

    export::write_report(&[row], &path, ReportFormat::Csv).expect("CSV出力失敗");

    let content = std::fs::read_to_string(&path).expect("CSV読み込み失敗");
    let data_line = content.lines().nth(1).expect("データ行がない");
    // カンマを含むフィールドは引用符で包まれる
    assert!(data_line.contains("\"options: expected=[\"\"red\"\", \"\"blue\"\"] actual=[\"\"red\"\"]\""));
}

#[test]
fn test_excel_report_smoke() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("report.xlsx");

    let rows = vec![
        create_test_row(1, Status::Matched),
        create_test_row(2, Status::Mismatch),
        create_test_row(3, Status::Missing),
        create_test_row(4, Status::PossibleMatch),
    ];

    let result = export::write_report(&rows, &path, ReportFormat::Excel);
    assert!(result.is_ok(), "Excel出力に失敗: {:?}", result.err());
    assert!(path.exists(), "Excelファイルが作成されていない");

    let metadata = std::fs::metadata(&path).expect("ファイルメタデータ取得失敗");
    assert!(metadata.len() > 0, "Excelファイルが空");
}

#[test]
fn test_excel_report_empty_rows() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("empty.xlsx");

    let result = export::write_report(&[], &path, ReportFormat::Excel);
    assert!(result.is_ok());
    assert!(path.exists());
}
