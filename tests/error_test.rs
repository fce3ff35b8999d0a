//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use schema_qa_rust::error::SchemaQaError;

/// SchemaQaErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        SchemaQaError::Config("テスト設定エラー".to_string()),
        SchemaQaError::FileNotFound("requirements.csv".to_string()),
        SchemaQaError::SchemaFetch("HTTPステータス 404".to_string()),
        SchemaQaError::ExcelRead("壊れたワークブック".to_string()),
        SchemaQaError::ExcelGeneration("Excel生成エラー".to_string()),
        SchemaQaError::ReportWrite("書き込み失敗".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: SchemaQaError = io_err.into();

    assert!(matches!(err, SchemaQaError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: SchemaQaError = json_err.into();

    assert!(matches!(err, SchemaQaError::JsonParse(_)));
}

/// common::Errorからの変換
#[test]
fn test_common_error_conversion() {
    let common_err = schema_qa_common::Error::Parse("パースエラー".to_string());
    let err: SchemaQaError = common_err.into();

    assert!(matches!(err, SchemaQaError::Common(_)));
}

/// エラーチェーン（透過的エラー）
#[test]
fn test_error_chain_transparent() {
    let common_err = schema_qa_common::Error::Parse("要件の形式が不正".to_string());
    let err: SchemaQaError = common_err.into();

    // 透過的エラーなのでメッセージがそのまま表示される
    let display = format!("{}", err);
    assert!(display.contains("要件の形式が不正"));
}

/// エラーのDebug実装確認
#[test]
fn test_error_debug() {
    let err = SchemaQaError::Config("テスト".to_string());
    let debug = format!("{:?}", err);

    assert!(debug.contains("Config"));
    assert!(debug.contains("テスト"));
}
