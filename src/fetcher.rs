//! スキーマ取得
//!
//! スキーマJSONをURLまたはローカルファイルから取得してデコード
//! する。デコード済みツリーの形には一切関知しない（形の解釈は
//! 抽出側の仕事）。

use crate::error::{Result, SchemaQaError};
use serde_json::Value;
use std::path::Path;
use std::time::Duration;

/// スキーマJSONを取得する
///
/// `http://`/`https://` で始まるソースはHTTP GET、それ以外は
/// ローカルファイルパスとして読み込む。
pub async fn load_schema(source: &str, timeout_seconds: u64) -> Result<Value> {
    if source.starts_with("http://") || source.starts_with("https://") {
        fetch_url(source, timeout_seconds).await
    } else {
        load_file(Path::new(source))
    }
}

/// URLからスキーマJSONを取得する
async fn fetch_url(url: &str, timeout_seconds: u64) -> Result<Value> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .build()?;

    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(SchemaQaError::SchemaFetch(format!(
            "HTTPステータス {}: {}",
            response.status(),
            url
        )));
    }

    Ok(response.json::<Value>().await?)
}

/// ローカルファイルからスキーマJSONを読み込む
pub fn load_file(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(SchemaQaError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
