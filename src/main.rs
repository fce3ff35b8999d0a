use chrono::Local;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use schema_qa_common::{extract_fields, ComparisonReport, Matcher, Status};
use schema_qa_rust::{cli, config, error, export, fetcher, loader};

use cli::{Cli, Commands, ReportFormat};
use config::Config;
use error::Result;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Compare {
            req,
            schema,
            out,
            format,
            no_fail,
            timeout,
        } => {
            println!("📋 schema-qa - 要件照合\n");

            // 1. 要件読み込み
            println!("[1/4] 要件を読み込み中...");
            let requirements = loader::load_requirements(&req)?;
            println!("✔ {}件の要件を読み込み\n", requirements.len());

            // 2. スキーマ取得
            println!("[2/4] スキーマを取得中...");
            let timeout_seconds = timeout.unwrap_or(config.timeout_seconds);
            let schema_json = fetcher::load_schema(&schema, timeout_seconds).await?;
            println!("✔ スキーマ取得完了\n");

            // 3. フィールド抽出
            println!("[3/4] フィールドを抽出中...");
            let fields = extract_fields(&schema_json);
            println!("✔ {}件のフィールドを検出\n", fields.len());

            // 4. 照合（要件ごとに独立な純粋計算なので並列に回す）
            println!("[4/4] 照合中...");
            let matcher = Matcher::new(&fields);
            let progress = ProgressBar::new(requirements.len() as u64);
            if let Ok(style) = ProgressStyle::with_template("  {bar:40} {pos}/{len}") {
                progress.set_style(style);
            }

            let rows: Vec<ComparisonReport> = requirements
                .par_iter()
                .map(|requirement| {
                    let row = matcher.compare(requirement);
                    progress.inc(1);
                    row
                })
                .collect();
            progress.finish_and_clear();
            println!("✔ 照合完了\n");

            if cli.verbose {
                for row in &rows {
                    println!(
                        "  {} {} → {} (score: {})",
                        row.req_id,
                        row.field_key,
                        row.status,
                        row.best_match_score
                            .map(|s| s.to_string())
                            .unwrap_or_else(|| "-".to_string())
                    );
                }
                println!();
            }

            // 5. レポート出力
            let report_format = resolve_format(format, out.as_deref(), &config);
            let output_path = out.unwrap_or_else(|| default_report_path(report_format));
            export::write_report(&rows, &output_path, report_format)?;
            println!("✔ レポート出力: {}", output_path.display());

            // 集計
            let matched = count_status(&rows, Status::Matched);
            let mismatch = count_status(&rows, Status::Mismatch);
            let missing = count_status(&rows, Status::Missing);
            let possible = count_status(&rows, Status::PossibleMatch);

            println!("\nMATCHED: {}", matched);
            println!("MISMATCH: {}", mismatch);
            println!("MISSING: {}", missing);
            println!("POSSIBLE_MATCH: {}", possible);

            if !no_fail && (mismatch > 0 || missing > 0) {
                eprintln!("\n❌ 不一致または未発見のフィールドがあります");
                std::process::exit(2);
            }

            println!("\n✅ 照合完了");
        }

        Commands::Extract {
            schema,
            out,
            timeout,
        } => {
            let timeout_seconds = timeout.unwrap_or(config.timeout_seconds);
            let schema_json = fetcher::load_schema(&schema, timeout_seconds).await?;
            let fields = extract_fields(&schema_json);
            let json = serde_json::to_string_pretty(&fields)?;

            match out {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("✔ {}件のフィールドを保存: {}", fields.len(), path.display());
                }
                None => println!("{}", json),
            }
        }

        Commands::Config {
            set_timeout,
            set_format,
            show,
        } => {
            let mut config = config;

            if let Some(seconds) = set_timeout {
                config.set_timeout(seconds)?;
                println!("✔ タイムアウトを設定しました: {}秒", seconds);
            }

            if let Some(format) = set_format {
                config.set_format(format.to_string())?;
                println!("✔ 既定の出力形式を設定しました: {}", format);
            }

            if show || (set_timeout.is_none() && set_format.is_none()) {
                println!("設定:");
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  既定の出力形式: {}", config.default_format);
            }
        }
    }

    Ok(())
}

/// 出力形式を決める（フラグ > 出力パスの拡張子 > 設定）
fn resolve_format(
    format: Option<ReportFormat>,
    out: Option<&std::path::Path>,
    config: &Config,
) -> ReportFormat {
    if let Some(format) = format {
        return format;
    }
    if let Some(path) = out {
        if let Some(format) = ReportFormat::from_path(path) {
            return format;
        }
    }
    config.default_format.parse().unwrap_or_default()
}

/// 省略時の出力ファイル名（タイムスタンプ付き）
fn default_report_path(format: ReportFormat) -> PathBuf {
    PathBuf::from(format!(
        "comparison_report_{}.{}",
        Local::now().format("%Y%m%d_%H%M%S"),
        format.extension()
    ))
}

fn count_status(rows: &[ComparisonReport], status: Status) -> usize {
    rows.iter().filter(|row| row.status == status).count()
}
