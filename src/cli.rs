use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "schema-qa")]
#[command(about = "要件定義とフォームスキーマJSONの照合・レポート生成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 要件定義とスキーマを照合してレポートを生成
    Compare {
        /// 要件定義ファイル（CSV/XLSX）
        #[arg(short, long, required = true)]
        req: PathBuf,

        /// スキーマJSONのURLまたはファイルパス
        #[arg(short, long, required = true)]
        schema: String,

        /// 出力レポートパス（省略時はタイムスタンプ付きファイル名）
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// 出力形式 (csv/excel)
        #[arg(short, long)]
        format: Option<ReportFormat>,

        /// 不一致・未発見があっても終了コード0で終わる
        #[arg(long)]
        no_fail: bool,

        /// スキーマ取得のタイムアウト秒（設定値より優先）
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// スキーマから発見したフィールド一覧をJSONで出力
    Extract {
        /// スキーマJSONのURLまたはファイルパス
        #[arg(required = true)]
        schema: String,

        /// 出力先JSONファイル（省略時は標準出力）
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// スキーマ取得のタイムアウト秒（設定値より優先）
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// 設定を表示/編集
    Config {
        /// スキーマ取得のタイムアウト秒を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 既定の出力形式を設定 (csv/excel)
        #[arg(long)]
        set_format: Option<ReportFormat>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// レポート出力形式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    #[default]
    Excel,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ReportFormat::Csv),
            "excel" | "xlsx" => Ok(ReportFormat::Excel),
            _ => Err(format!("Unknown format: {}. Use csv or excel", s)),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Csv => write!(f, "csv"),
            ReportFormat::Excel => write!(f, "excel"),
        }
    }
}

impl ReportFormat {
    /// 出力ファイルの拡張子
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Excel => "xlsx",
        }
    }

    /// パスの拡張子から形式を推定
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        match path.extension()?.to_string_lossy().to_lowercase().as_str() {
            "csv" => Some(ReportFormat::Csv),
            "xlsx" | "xls" => Some(ReportFormat::Excel),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_report_format_from_str() {
        assert_eq!("csv".parse::<ReportFormat>().unwrap(), ReportFormat::Csv);
        assert_eq!("Excel".parse::<ReportFormat>().unwrap(), ReportFormat::Excel);
        assert_eq!("xlsx".parse::<ReportFormat>().unwrap(), ReportFormat::Excel);
        assert!("pdf".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_report_format_from_path() {
        assert_eq!(
            ReportFormat::from_path(Path::new("report.csv")),
            Some(ReportFormat::Csv)
        );
        assert_eq!(
            ReportFormat::from_path(Path::new("report.XLSX")),
            Some(ReportFormat::Excel)
        );
        assert_eq!(ReportFormat::from_path(Path::new("report")), None);
    }
}
