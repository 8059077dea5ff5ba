pub mod fields;
pub mod table;

use log::{debug, warn};
use scraper::{Html, Selector};

use crate::errors::{Result, ScrapeError};
use crate::models::record::{Extraction, RowDiagnostic};

pub use fields::ColumnLayout;

/// 从原始页面标记中提取规范化的历史行情记录
///
/// 流程：定位表格 → 按行规范化 → 按源顺序收集成功记录。
/// 单行解析失败只记入诊断列表，不中断整次提取；
/// 所有行都失败时返回`EmptyResult`。
pub fn extract_records(html: &str, layout: &ColumnLayout) -> Result<Extraction> {
    let document = Html::parse_document(html);
    extract_from_document(&document, layout)
}

/// 同`extract_records`，输入为已解析的文档
pub fn extract_from_document(document: &Html, layout: &ColumnLayout) -> Result<Extraction> {
    let rows = table::locate(document)?;
    debug!("表格定位成功，共{}个数据行", rows.len());

    let mut extraction = Extraction::default();
    for (index, raw_row) in rows.iter().enumerate() {
        match fields::normalize_row(raw_row, layout, index) {
            Ok(record) => extraction.records.push(record),
            Err(ScrapeError::FieldParse { row, field, value }) => {
                warn!("跳过第{}行：字段'{}'无法解析: {:?}", row, field, value);
                extraction.diagnostics.push(RowDiagnostic { row, field, value });
            }
            Err(e) => return Err(e),
        }
    }

    if extraction.records.is_empty() {
        return Err(ScrapeError::EmptyResult);
    }

    Ok(extraction)
}

/// 从品种页面提取最新价（id为last_last的元素）
pub fn latest_price(document: &Html) -> Result<f64> {
    let selector = Selector::parse("#last_last").unwrap();
    let element = document
        .select(&selector)
        .next()
        .ok_or_else(|| ScrapeError::DataError("latest price element not found".to_string()))?;

    let text = element
        .text()
        .collect::<String>()
        .trim()
        .to_string();
    fields::parse_price(&text)
        .ok_or_else(|| ScrapeError::DataError(format!("cannot parse latest price: {:?}", text)))
}
