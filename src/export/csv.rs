//! CSVレポート出力

use super::{row_values, REPORT_COLUMNS};
use crate::error::{Result, SchemaQaError};
use schema_qa_common::ComparisonReport;
use std::io::Write;
use std::path::Path;

/// 照合レポートをCSVに書き出す
pub fn write_csv(rows: &[ComparisonReport], output_path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(output_path)
        .map_err(|e| SchemaQaError::ReportWrite(format!("{}: {}", output_path.display(), e)))?;

    writeln!(file, "{}", REPORT_COLUMNS.join(","))?;
    for row in rows {
        let line: Vec<String> = row_values(row).iter().map(|v| escape_field(v)).collect();
        writeln!(file, "{}", line.join(","))?;
    }

    Ok(())
}

/// カンマ・引用符・改行を含むフィールドを引用符で包む
fn escape_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
