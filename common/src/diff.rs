//! 属性差分の計算
//!
//! 要件と解決済みフィールドを5つの次元（型・必須・選択肢・
//! 文字数制限・正規表現）で独立に比較する純粋関数。どちらかの側に
//! 値がない次元は「不明」として黙ってスキップし、差分にはしない。

use crate::types::{Requirement, SchemaField};
use serde_json::Value;
use std::collections::BTreeSet;

/// 要件とフィールドの差分一覧を計算する
///
/// 5次元すべてを順に評価する（途中で打ち切らない）。差分のある
/// 次元ごとに `"<次元>: expected=<要件側> actual=<スキーマ側>"`
/// 形式のエントリを追加する。空のリストは「比較できた全次元で
/// 差分なし」を意味する。
pub fn compute_diffs(req: &Requirement, field: &SchemaField<'_>) -> Vec<String> {
    let mut diffs: Vec<String> = Vec::new();

    // 型: 両側が空でない場合のみ、小文字化して比較
    let expected_type = req.field_type.trim();
    let actual_type = field.field_type.as_deref().map(str::trim).unwrap_or("");
    if !expected_type.is_empty()
        && !actual_type.is_empty()
        && expected_type.to_lowercase() != actual_type.to_lowercase()
    {
        diffs.push(format!(
            "type: expected={} actual={}",
            expected_type, actual_type
        ));
    }

    // 必須: 両側がboolを持つ場合のみ
    if let (Some(expected), Some(actual)) = (req.required, field.required) {
        if expected != actual {
            diffs.push(format!(
                "required: expected={} actual={}",
                expected, actual
            ));
        }
    }

    // 選択肢: 両側が空でないコレクションを持つ場合のみ、
    // 順序・重複を無視した集合として比較
    if let (Some(expected), Some(actual_node)) = (&req.options, field.options) {
        if !expected.is_empty() {
            let actual_items = normalize_options(actual_node);
            if !actual_items.is_empty() {
                let expected_set: BTreeSet<String> =
                    expected.iter().map(|s| s.trim().to_lowercase()).collect();
                let actual_set: BTreeSet<String> =
                    actual_items.iter().map(|s| s.trim().to_lowercase()).collect();
                if expected_set != actual_set {
                    diffs.push(format!(
                        "options: expected={:?} actual={}",
                        expected, actual_node
                    ));
                }
            }
        }
    }

    // 文字数制限・正規表現はvalidationsマップ経由でのみ比較する
    if let Some(validations) = field.validations.and_then(Value::as_object) {
        if let (Some(expected), Some(actual)) =
            (req.min_len, validations.get("minLength").and_then(int_value))
        {
            if expected != actual {
                diffs.push(format!("min_len: expected={} actual={}", expected, actual));
            }
        }

        if let (Some(expected), Some(actual)) =
            (req.max_len, validations.get("maxLength").and_then(int_value))
        {
            if expected != actual {
                diffs.push(format!("max_len: expected={} actual={}", expected, actual));
            }
        }

        // 正規表現は大文字小文字を区別した完全一致
        let expected_regex = req.regex.as_deref().map(str::trim).unwrap_or("");
        let actual_regex = validations
            .get("pattern")
            .and_then(Value::as_str)
            .map(str::trim)
            .unwrap_or("");
        if !expected_regex.is_empty() && !actual_regex.is_empty() && expected_regex != actual_regex
        {
            diffs.push(format!(
                "regex: expected={} actual={}",
                expected_regex, actual_regex
            ));
        }
    }

    diffs
}

/// スキーマ側の選択肢ノードを文字列リストに正規化する
///
/// リストは各要素、マップは値のみ、スカラは1要素として扱う。
fn normalize_options(node: &Value) -> Vec<String> {
    match node {
        Value::Array(items) => items.iter().map(option_item).collect(),
        Value::Object(map) => map.values().map(option_item).collect(),
        other => vec![option_item(other)],
    }
}

/// 選択肢の1要素を文字列化する
fn option_item(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// 整数値（数値または数値文字列）を読み取る
fn int_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().map(|f| f as i64))
        }
        _ => None,
    }
}
