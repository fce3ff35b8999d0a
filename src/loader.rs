//! 要件定義ローダー
//!
//! アナリストが作成した要件定義書（CSV/XLSX）を読み込み、
//! 共通ライブラリのパーサーでRequirement列に変換する。

use crate::error::{Result, SchemaQaError};
use calamine::{open_workbook_auto, Data, Reader};
use regex::Regex;
use schema_qa_common::{parser, Requirement};
use std::path::Path;

const XLSX_EXTENSIONS: &[&str] = &["xlsx", "xls"];

/// 要件定義ファイルを読み込む
///
/// 拡張子が xlsx/xls なら calamine で、それ以外はCSVとして読む。
pub fn load_requirements(path: &Path) -> Result<Vec<Requirement>> {
    if !path.exists() {
        return Err(SchemaQaError::FileNotFound(path.display().to_string()));
    }

    let is_excel = path
        .extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            XLSX_EXTENSIONS.iter().any(|&e| e == ext)
        })
        .unwrap_or(false);

    let rows = if is_excel {
        load_excel_rows(path)?
    } else {
        let content = std::fs::read_to_string(path)?;
        parser::parse_csv_rows(&content)
    };

    let requirements = parser::parse_requirement_rows(rows)?;
    warn_invalid_patterns(&requirements);

    Ok(requirements)
}

/// Excelファイルの先頭シートを行列に読み込む
fn load_excel_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| SchemaQaError::ExcelRead(format!("ワークブックを開けません: {}", e)))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| SchemaQaError::ExcelRead("シートがありません".into()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| SchemaQaError::ExcelRead(format!("シート読み込みエラー: {}", e)))?;

    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect())
}

/// Excelセルを文字列に変換
///
/// 数値セルは整数なら小数点を付けない（"5.0"ではなく"5"）。
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// コンパイルできない正規表現カラムを警告する
///
/// 照合自体は文字列比較なので結果には影響しないが、
/// 書き間違いの可能性が高いため知らせておく。
fn warn_invalid_patterns(requirements: &[Requirement]) {
    for requirement in requirements {
        if let Some(pattern) = &requirement.regex {
            if Regex::new(pattern).is_err() {
                eprintln!(
                    "警告: 要件 {} の正規表現がコンパイルできません: {}",
                    requirement.req_id, pattern
                );
            }
        }
    }
}
