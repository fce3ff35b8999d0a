//! スキーマフィールド抽出
//!
//! 構造が未知のJSONツリーを深さ優先で走査し、「フィールドらしい」
//! ノードをヒューリスティックに発見する。各属性は固定順の候補キー
//! 表を先頭から調べ、最初に存在したキーの値を採用する（候補同士を
//! マージすることはない）。
//!
//! 走査は明示的なスタックで行い、ネストの深い（あるいは意図的に
//! 深くされた）ドキュメントでもコールスタックを消費しない。

use crate::types::SchemaField;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// フィールドキーの候補（優先順）
pub const FIELD_KEY_CANDIDATES: &[&str] = &["field_key", "fieldKey", "name", "key", "id"];

/// 型の候補（優先順）
pub const TYPE_CANDIDATES: &[&str] = &["type", "fieldType", "component", "componentType"];

/// 必須フラグの候補（優先順）
pub const REQUIRED_CANDIDATES: &[&str] = &["required", "mandatory", "isRequired"];

/// ラベルの候補（優先順）
pub const LABEL_CANDIDATES: &[&str] = &["label", "title", "displayName"];

/// 選択肢の候補（優先順）
pub const OPTIONS_CANDIDATES: &[&str] = &["options", "choices", "items"];

/// バリデーションの候補（優先順）
pub const VALIDATIONS_CANDIDATES: &[&str] = &["validations", "validation", "constraints", "props"];

/// スキーマJSONからフィールド一覧を抽出する
///
/// どのような形のツリーでも失敗しない。スカラ・空コンテナ・
/// フィールドを含まないツリーは空のリストになる。
///
/// 重複除去: field_key を小文字化してグループ化し、最初に発見した
/// ものを正とする。後続の重複は、正の側で未設定の属性のみを埋める
/// （設定済みの属性は決して上書きしない）。出力順は各キーの
/// 初回発見順。
///
/// # Arguments
/// * `schema` - デコード済みのJSON値（形は任意）
pub fn extract_fields(schema: &Value) -> Vec<SchemaField<'_>> {
    let mut fields: Vec<SchemaField> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    // (ノード, ルートからのパス) の作業スタック。子を逆順に積むことで
    // 再帰と同じ先行順・ドキュメント順の走査になる。
    let mut stack: Vec<(&Value, String)> = vec![(schema, "root".to_string())];

    while let Some((node, path)) = stack.pop() {
        match node {
            Value::Object(map) => {
                if let Some(candidate) = field_from_node(node, map, &path) {
                    merge_candidate(&mut fields, &mut index, candidate);
                }

                // フィールドであっても子の走査は続ける
                // （フィールドの中にさらにフィールドが入れ子になり得る）
                for (key, child) in map.iter().rev() {
                    stack.push((child, format!("{}/{}", path, key)));
                }
            }
            Value::Array(items) => {
                for (idx, item) in items.iter().enumerate().rev() {
                    stack.push((item, format!("{}/[{}]", path, idx)));
                }
            }
            _ => {}
        }
    }

    fields
}

/// オブジェクトノードをフィールド候補として解釈する
///
/// フィールドキー候補のうち最初に存在するキーの値が空でない
/// 文字列（または数値）であればフィールドとみなす。
fn field_from_node<'a>(
    raw: &'a Value,
    map: &'a Map<String, Value>,
    path: &str,
) -> Option<SchemaField<'a>> {
    let key_value = first_present(map, FIELD_KEY_CANDIDATES)?;
    let field_key = key_string(key_value)?;

    Some(SchemaField {
        field_key,
        field_type: first_present(map, TYPE_CANDIDATES).and_then(string_attr),
        required: first_present(map, REQUIRED_CANDIDATES).and_then(bool_attr),
        label: first_present(map, LABEL_CANDIDATES).and_then(string_attr),
        options: first_present(map, OPTIONS_CANDIDATES).filter(|v| !is_blank(v)),
        validations: first_present(map, VALIDATIONS_CANDIDATES).filter(|v| !is_blank(v)),
        raw_json_path: path.to_string(),
        raw,
    })
}

/// 候補表の先頭から調べ、最初に存在するキーの値を返す
///
/// 値がnullでも「存在」なので、後続の候補は調べない。
fn first_present<'a>(map: &'a Map<String, Value>, candidates: &[&str]) -> Option<&'a Value> {
    candidates.iter().find_map(|key| map.get(*key))
}

/// フィールドキーとして使える値を文字列化する
///
/// 空白のみの文字列・null・bool・コンテナはキーにならない。
fn key_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// 文字列属性（型・ラベル）の正規化
fn string_attr(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// 必須フラグの正規化
///
/// JSONのboolに加え、文字列の "true"/"false" も受け付ける
/// （スキーマによっては文字列で持つため）。それ以外は未指定。
fn bool_attr(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// null・空文字は「未設定」として扱う（空配列・空マップは設定済み）
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// 候補を重複除去しつつ蓄積する
///
/// 既出キー（小文字比較）の場合は、正のレコードの未設定属性だけを
/// 候補の値で埋める。raw_json_path と raw は初回発見のものを保持。
fn merge_candidate<'a>(
    fields: &mut Vec<SchemaField<'a>>,
    index: &mut HashMap<String, usize>,
    candidate: SchemaField<'a>,
) {
    let key = candidate.field_key.to_lowercase();

    match index.get(&key) {
        Some(&i) => {
            let canonical = &mut fields[i];
            if canonical.field_type.is_none() {
                canonical.field_type = candidate.field_type;
            }
            if canonical.required.is_none() {
                canonical.required = candidate.required;
            }
            if canonical.label.is_none() {
                canonical.label = candidate.label;
            }
            if canonical.options.is_none() {
                canonical.options = candidate.options;
            }
            if canonical.validations.is_none() {
                canonical.validations = candidate.validations;
            }
        }
        None => {
            index.insert(key, fields.len());
            fields.push(candidate);
        }
    }
}
