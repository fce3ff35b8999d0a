//! Schema QA Common Library
//!
//! CLIから利用される照合コア:
//! - 要件・スキーマフィールド・照合レポートの型定義
//! - 要件定義行のパース（セル正規化）
//! - スキーマJSONからのフィールド抽出（ヒューリスティック走査）
//! - 要件とフィールドの照合エンジン（完全一致＋あいまい一致）
//! - 属性差分の計算
//!
//! このクレートはI/Oを行わない。入力はデコード済みのJSONツリーと
//! 要件レコード列のみで、すべての関数は決定的に動作する。

pub mod diff;
pub mod error;
pub mod extractor;
pub mod matcher;
pub mod parser;
pub mod similarity;
pub mod types;

pub use diff::compute_diffs;
pub use error::{Error, Result};
pub use extractor::extract_fields;
pub use matcher::{compare_all, Matcher, FUZZY_THRESHOLD};
pub use parser::{parse_csv_rows, parse_requirement_rows, REQUIRED_COLUMNS};
pub use similarity::token_sort_ratio;
pub use types::{ComparisonReport, Found, Requirement, SchemaField, Status};
