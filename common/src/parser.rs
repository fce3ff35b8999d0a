//! 要件行パーサー
//!
//! CSV/Excelから取り出した文字列の行列をRequirement列に変換する。
//! ファイルI/Oは行わない（読み込みはCLI側のローダーの仕事）。
//!
//! 1行目をヘッダーとして扱い、必須カラムの検証とセル値の正規化
//! （bool・整数・カンマ区切りリスト）を行う。

use crate::error::{Error, Result};
use crate::types::Requirement;
use std::collections::HashMap;

/// 要件定義書の必須カラム
pub const REQUIRED_COLUMNS: &[&str] = &["req_id", "field_key", "type", "required"];

/// ヘッダー行＋データ行からRequirement列を組み立てる
///
/// # Arguments
/// * `rows` - 1行目をヘッダーとする文字列の行列
///
/// # Returns
/// * `Ok(Vec<Requirement>)` - 入力順のRequirement列（空行はスキップ）
/// * `Err` - ヘッダーがない、または必須カラムが欠けている場合
pub fn parse_requirement_rows(rows: Vec<Vec<String>>) -> Result<Vec<Requirement>> {
    let mut iter = rows.into_iter();
    let header = iter
        .next()
        .ok_or_else(|| Error::Parse("要件ファイルが空です".into()))?;

    let columns: HashMap<String, usize> = header
        .iter()
        .enumerate()
        .map(|(i, name)| (name.trim().to_string(), i))
        .collect();

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .filter(|&&name| !columns.contains_key(name))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(Error::Parse(format!(
            "必須カラムがありません: {}",
            missing.join(", ")
        )));
    }

    let cell = |row: &[String], name: &str| -> String {
        columns
            .get(name)
            .and_then(|&i| row.get(i))
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    };

    let mut requirements = Vec::new();
    for row in iter {
        // 全セル空の行はスキップ
        if row.iter().all(|c| c.trim().is_empty()) {
            continue;
        }

        requirements.push(Requirement {
            req_id: cell(&row, "req_id"),
            field_key: cell(&row, "field_key"),
            field_type: cell(&row, "type"),
            required: coerce_bool(&cell(&row, "required")),
            label: maybe_str(&cell(&row, "label")),
            min_len: maybe_int(&cell(&row, "min_len")),
            max_len: maybe_int(&cell(&row, "max_len")),
            regex: maybe_str(&cell(&row, "regex")),
            options: maybe_list(&cell(&row, "options")),
        });
    }

    Ok(requirements)
}

/// CSV文字列を行列に分解する（空行はスキップ）
pub fn parse_csv_rows(content: &str) -> Vec<Vec<String>> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| parse_csv_line(line).into_iter().map(str::to_string).collect())
        .collect()
}

/// CSVの1行をフィールドに分解する（引用符対応）
fn parse_csv_line(line: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut in_quotes = false;
    let mut field_start = 0;
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == ',' && !in_quotes {
            // フィールド終了
            let field = &line[field_start..byte_index(line, i)];
            fields.push(trim_quotes(field));
            field_start = byte_index(line, i + 1);
        }
        i += 1;
    }

    // 最後のフィールド
    if field_start <= line.len() {
        let field = &line[field_start..];
        fields.push(trim_quotes(field));
    }

    fields
}

fn byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

fn trim_quotes(s: &str) -> &str {
    let s = s.trim();
    if s.starts_with('"') && s.ends_with('"') && s.len() >= 2 {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

/// セル値をboolに正規化（解釈できない値は未指定）
fn coerce_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "required" => Some(true),
        "false" | "0" | "no" | "n" | "optional" => Some(false),
        _ => None,
    }
}

/// 空セルはNone
fn maybe_str(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// 数値セルを整数に正規化
///
/// 表計算ソフト由来の "5.0" 形式も受け付ける（小数部は切り捨て）。
fn maybe_int(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .map(|f| f as i64)
}

/// カンマ区切りセルをリストに分解（空要素は捨てる）
fn maybe_list(value: &str) -> Option<Vec<String>> {
    let parts: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts)
    }
}
