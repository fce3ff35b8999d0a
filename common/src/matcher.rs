//! 照合エンジン
//!
//! 要件1件をスキーマフィールド一覧に対して解決し、照合レポート
//! 1行を生成する。解決は完全一致（大文字小文字を無視）を優先し、
//! 見つからない場合のみ類似度によるあいまい一致へフォールバック
//! する。どの結果も例外ではなくレポート行として表現されるため、
//! 1件の問題がバッチ全体を止めることはない。

use crate::diff::compute_diffs;
use crate::similarity::token_sort_ratio;
use crate::types::{ComparisonReport, Found, Requirement, SchemaField, Status};
use std::collections::HashMap;

/// あいまい一致の採用閾値（0-100スケール）
pub const FUZZY_THRESHOLD: u32 = 85;

/// 照合エンジン
///
/// フィールド一覧と大文字小文字を無視したキー索引を保持する。
/// 状態は構築後不変なので、複数要件の照合を並列に呼んでも安全。
pub struct Matcher<'a> {
    fields: &'a [SchemaField<'a>],
    lookup: HashMap<String, usize>,
}

impl<'a> Matcher<'a> {
    pub fn new(fields: &'a [SchemaField<'a>]) -> Self {
        let mut lookup = HashMap::new();
        for (i, field) in fields.iter().enumerate() {
            // 抽出側の重複除去でキーは一意だが、念のため初出を優先
            lookup.entry(field.field_key.to_lowercase()).or_insert(i);
        }
        Self { fields, lookup }
    }

    /// 要件1件を照合してレポート行を生成する
    ///
    /// 1. 完全一致（大文字小文字無視）があれば即採用、スコア100
    /// 2. なければ全フィールドを類似度で採点し、最高スコアを記録。
    ///    同点は先に発見されたフィールドを採る（再現性のための
    ///    固定タイブレーク）
    /// 3. 最高スコアが閾値以上なら POSSIBLE_MATCH、未満なら MISSING
    pub fn compare(&self, req: &Requirement) -> ComparisonReport {
        let req_key = req.field_key.trim();

        let mut report = ComparisonReport {
            req_id: req.req_id.clone(),
            field_key: req_key.to_string(),
            expected_type: req.field_type.clone(),
            expected_required: bool_to_str(req.required),
            found: Found::No,
            status: Status::Missing,
            ..Default::default()
        };

        // 完全一致
        if let Some(&i) = self.lookup.get(&req_key.to_lowercase()) {
            let field = &self.fields[i];
            report.found = Found::Yes;
            report.best_match_key = Some(field.field_key.clone());
            report.best_match_score = Some(100);
            self.fill_actuals(&mut report, req, field);
            report.status = if report.differences.is_empty() {
                Status::Matched
            } else {
                Status::Mismatch
            };
            return report;
        }

        // あいまい一致
        if !self.fields.is_empty() {
            let mut best_index = 0;
            let mut best_score = 0;
            for (i, field) in self.fields.iter().enumerate() {
                let score = token_sort_ratio(req_key, &field.field_key);
                // 同点では先のフィールドを保持する
                if score > best_score {
                    best_index = i;
                    best_score = score;
                }
            }

            report.best_match_key = Some(self.fields[best_index].field_key.clone());
            report.best_match_score = Some(best_score);

            if best_score >= FUZZY_THRESHOLD {
                let field = &self.fields[best_index];
                report.found = Found::Possible;
                self.fill_actuals(&mut report, req, field);
                // キー自体が非完全一致である事実を示すため、差分の有無に
                // かかわらず POSSIBLE_MATCH のまま
                report.status = Status::PossibleMatch;
            }
        }

        report
    }

    /// 解決したフィールドの実測値と差分をレポートに書き込む
    fn fill_actuals(
        &self,
        report: &mut ComparisonReport,
        req: &Requirement,
        field: &SchemaField<'a>,
    ) {
        report.actual_type = field.field_type.clone();
        report.actual_required = Some(bool_to_str(field.required));
        report.raw_json_path = Some(field.raw_json_path.clone());
        report.differences = compute_diffs(req, field).join("; ");
    }
}

/// 要件一覧を入力順に照合する
///
/// 常に要件と同数のレポート行を返す。
pub fn compare_all(
    requirements: &[Requirement],
    fields: &[SchemaField<'_>],
) -> Vec<ComparisonReport> {
    let matcher = Matcher::new(fields);
    requirements.iter().map(|req| matcher.compare(req)).collect()
}

/// 必須フラグの文字列形（未指定は空文字）
fn bool_to_str(value: Option<bool>) -> String {
    match value {
        Some(b) => b.to_string(),
        None => String::new(),
    }
}
