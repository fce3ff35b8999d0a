//! 照合データの型定義
//!
//! CLIと共有される型:
//! - Requirement: 要件定義書の1行（外部ローダーが生成）
//! - SchemaField: スキーマJSONから発見したフィールド
//! - ComparisonReport: 要件1件ごとの照合結果

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 要件定義の1行
///
/// 生成後は不変。空文字・Noneは「未指定」を表し、
/// 照合時に差分対象から除外される。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Requirement {
    pub req_id: String,
    pub field_key: String,

    /// 期待するフィールド型（空文字は未指定）
    #[serde(rename = "type")]
    pub field_type: String,

    /// 必須フラグ（Noneは未指定）
    pub required: Option<bool>,

    pub label: Option<String>,
    pub min_len: Option<i64>,
    pub max_len: Option<i64>,
    pub regex: Option<String>,

    /// 選択肢（カンマ区切りセルを分割したもの）
    pub options: Option<Vec<String>>,
}

/// スキーマJSONから発見したフィールド
///
/// `raw` は元ツリー内ノードへの共有参照で、決して変更されない。
/// 重複除去後は field_key が大文字小文字を無視して一意になる。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaField<'a> {
    pub field_key: String,

    #[serde(rename = "type")]
    pub field_type: Option<String>,

    pub required: Option<bool>,
    pub label: Option<String>,

    /// 選択肢ノード（リスト・マップ・スカラのいずれか）
    pub options: Option<&'a Value>,

    /// バリデーションノード（minLength/maxLength/pattern等のマップ）
    pub validations: Option<&'a Value>,

    /// ルートからのパス（例: root/form/fields/[0]）
    pub raw_json_path: String,

    /// 発見元の生ノード（JSON出力には含めない）
    #[serde(skip_serializing)]
    pub raw: &'a Value,
}

/// フィールドの発見状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Found {
    Yes,
    #[default]
    No,
    Possible,
}

impl Found {
    pub fn as_str(&self) -> &'static str {
        match self {
            Found::Yes => "YES",
            Found::No => "NO",
            Found::Possible => "POSSIBLE",
        }
    }
}

impl std::fmt::Display for Found {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 要件ごとの最終判定
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Matched,
    Mismatch,
    #[default]
    Missing,
    PossibleMatch,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Matched => "MATCHED",
            Status::Mismatch => "MISMATCH",
            Status::Missing => "MISSING",
            Status::PossibleMatch => "POSSIBLE_MATCH",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 要件1件ごとの照合結果
///
/// 照合エンジンは要件1件につき必ず1行生成する。失敗も例外ではなく
/// status として表現される（MISSINGなど）。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComparisonReport {
    pub req_id: String,
    pub field_key: String,
    pub expected_type: String,
    pub actual_type: Option<String>,
    pub expected_required: String,
    pub actual_required: Option<String>,
    pub found: Found,
    pub status: Status,

    /// 差分一覧（"; "区切り、差分なしは空文字）
    pub differences: String,

    pub best_match_key: Option<String>,

    /// 類似度スコア（0-100、候補なしはNone）
    pub best_match_score: Option<u32>,

    pub raw_json_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirement_default() {
        let req = Requirement::default();
        assert_eq!(req.req_id, "");
        assert_eq!(req.field_key, "");
        assert!(req.required.is_none());
        assert!(req.options.is_none());
    }

    #[test]
    fn test_requirement_deserialize() {
        let json = r#"{
            "reqId": "R1",
            "fieldKey": "firstName",
            "type": "text",
            "required": true,
            "minLen": 2
        }"#;

        let req: Requirement = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(req.req_id, "R1");
        assert_eq!(req.field_key, "firstName");
        assert_eq!(req.field_type, "text");
        assert_eq!(req.required, Some(true));
        assert_eq!(req.min_len, Some(2));
        assert!(req.max_len.is_none()); // デフォルト値
    }

    #[test]
    fn test_status_serialize() {
        let json = serde_json::to_string(&Status::PossibleMatch).expect("シリアライズ失敗");
        assert_eq!(json, "\"POSSIBLE_MATCH\"");
        let json = serde_json::to_string(&Status::Matched).expect("シリアライズ失敗");
        assert_eq!(json, "\"MATCHED\"");
    }

    #[test]
    fn test_found_display() {
        assert_eq!(Found::Yes.to_string(), "YES");
        assert_eq!(Found::No.to_string(), "NO");
        assert_eq!(Found::Possible.to_string(), "POSSIBLE");
    }

    #[test]
    fn test_report_roundtrip() {
        let original = ComparisonReport {
            req_id: "R9".to_string(),
            field_key: "email".to_string(),
            expected_type: "email".to_string(),
            actual_type: Some("text".to_string()),
            expected_required: "true".to_string(),
            actual_required: Some("false".to_string()),
            found: Found::Yes,
            status: Status::Mismatch,
            differences: "type: expected=email actual=text".to_string(),
            best_match_key: Some("email".to_string()),
            best_match_score: Some(100),
            raw_json_path: Some("root/fields/[2]".to_string()),
        };

        let json = serde_json::to_string(&original).expect("シリアライズ失敗");
        let restored: ComparisonReport = serde_json::from_str(&json).expect("デシリアライズ失敗");

        assert_eq!(original.req_id, restored.req_id);
        assert_eq!(original.status, restored.status);
        assert_eq!(original.best_match_score, restored.best_match_score);
        assert_eq!(original.raw_json_path, restored.raw_json_path);
    }

    #[test]
    fn test_report_default_is_missing() {
        let report = ComparisonReport::default();
        assert_eq!(report.found, Found::No);
        assert_eq!(report.status, Status::Missing);
        assert_eq!(report.differences, "");
    }

    #[test]
    fn test_schema_field_serialize_skips_raw() {
        let raw = serde_json::json!({"name": "age", "type": "number"});
        let field = SchemaField {
            field_key: "age".to_string(),
            field_type: Some("number".to_string()),
            required: None,
            label: None,
            options: None,
            validations: None,
            raw_json_path: "root".to_string(),
            raw: &raw,
        };

        let json = serde_json::to_string(&field).expect("シリアライズ失敗");
        assert!(json.contains("\"fieldKey\":\"age\""));
        assert!(json.contains("\"rawJsonPath\":\"root\""));
        assert!(!json.contains("\"raw\":"));
    }
}
