use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaQaError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("スキーマ取得エラー: {0}")]
    SchemaFetch(String),

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Excel読み込みエラー: {0}")]
    ExcelRead(String),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("レポート出力エラー: {0}")]
    ReportWrite(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] schema_qa_common::Error),
}

pub type Result<T> = std::result::Result<T, SchemaQaError>;
