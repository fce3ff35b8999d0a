pub mod csv;
pub mod excel;

use crate::cli::ReportFormat;
use crate::error::Result;
use schema_qa_common::ComparisonReport;
use std::path::Path;

/// レポートのカラム（出力順）
pub const REPORT_COLUMNS: &[&str] = &[
    "req_id",
    "field_key",
    "expected_type",
    "actual_type",
    "expected_required",
    "actual_required",
    "found",
    "status",
    "differences",
    "best_match_key",
    "best_match_score",
    "raw_json_path",
];

/// 照合レポートをファイルに出力する
pub fn write_report(
    rows: &[ComparisonReport],
    output_path: &Path,
    format: ReportFormat,
) -> Result<()> {
    match format {
        ReportFormat::Csv => csv::write_csv(rows, output_path),
        ReportFormat::Excel => excel::write_excel(rows, output_path),
    }
}

/// 1行をカラム順の文字列に展開する
pub(crate) fn row_values(row: &ComparisonReport) -> Vec<String> {
    vec![
        row.req_id.clone(),
        row.field_key.clone(),
        row.expected_type.clone(),
        row.actual_type.clone().unwrap_or_default(),
        row.expected_required.clone(),
        row.actual_required.clone().unwrap_or_default(),
        row.found.to_string(),
        row.status.to_string(),
        row.differences.clone(),
        row.best_match_key.clone().unwrap_or_default(),
        row.best_match_score
            .map(|s| s.to_string())
            .unwrap_or_default(),
        row.raw_json_path.clone().unwrap_or_default(),
    ]
}
