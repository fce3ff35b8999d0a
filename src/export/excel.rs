//! Excelレポート出力
//!
//! 照合結果を1シートのExcelに書き出す。statusセルは判定ごとに
//! 色分けして一覧性を上げる。

use super::{row_values, REPORT_COLUMNS};
use crate::error::{Result, SchemaQaError};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, XlsxError};
use schema_qa_common::{ComparisonReport, Status};
use std::path::Path;

/// statusカラムの位置（REPORT_COLUMNS内）
const STATUS_COLUMN: u16 = 7;

/// 照合レポートをExcelに書き出す
pub fn write_excel(rows: &[ComparisonReport], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("comparison").map_err(excel_err)?;

    // フォーマット定義
    let header_format = Format::new()
        .set_bold()
        .set_font_size(10.0)
        .set_font_color(Color::RGB(0x555555))
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xAAAAAA));

    let cell_format = Format::new()
        .set_font_size(10.0)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let matched_format = status_format(0xC6EFCE, 0x006100);
    let mismatch_format = status_format(0xFFC7CE, 0x9C0006);
    let missing_format = status_format(0xEEEEEE, 0x555555);
    let possible_format = status_format(0xFFEB9C, 0x9C6500);

    // ヘッダー行
    for (col, title) in REPORT_COLUMNS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *title, &header_format)
            .map_err(excel_err)?;
    }

    // データ行
    for (i, row) in rows.iter().enumerate() {
        let row_index = (i + 1) as u32;
        let values = row_values(row);

        for (col, value) in values.iter().enumerate() {
            let col = col as u16;
            let format = if col == STATUS_COLUMN {
                match row.status {
                    Status::Matched => &matched_format,
                    Status::Mismatch => &mismatch_format,
                    Status::Missing => &missing_format,
                    Status::PossibleMatch => &possible_format,
                }
            } else {
                &cell_format
            };

            worksheet
                .write_string_with_format(row_index, col, value.as_str(), format)
                .map_err(excel_err)?;
        }
    }

    // 列幅（req_id等は狭く、differences/パスは広く）
    let widths: &[f64] = &[
        10.0, 18.0, 14.0, 14.0, 16.0, 16.0, 10.0, 16.0, 50.0, 18.0, 14.0, 32.0,
    ];
    for (col, width) in widths.iter().enumerate() {
        worksheet
            .set_column_width(col as u16, *width)
            .map_err(excel_err)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(excel_err)?;

    workbook.save(output_path).map_err(excel_err)?;

    Ok(())
}

fn status_format(background: u32, font: u32) -> Format {
    Format::new()
        .set_font_size(10.0)
        .set_bold()
        .set_font_color(Color::RGB(font))
        .set_background_color(Color::RGB(background))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC))
}

fn excel_err(e: XlsxError) -> SchemaQaError {
    SchemaQaError::ExcelGeneration(e.to_string())
}
