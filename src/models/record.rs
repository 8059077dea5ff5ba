use chrono::NaiveDate;
use serde::Serialize;

/// 单个交易日的历史行情记录
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRecord {
    pub date: NaiveDate,
    pub open: f64,
    pub close: f64,
    pub volume: u64,
    pub change_percent: f64,
}

/// 表格中一行的原始单元格文本，按列顺序排列
pub type RawRow = Vec<String>;

/// 规范化失败行的诊断信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDiagnostic {
    /// 行号（在表格数据行中的下标，从0开始）
    pub row: usize,
    /// 解析失败的字段名
    pub field: &'static str,
    /// 原始单元格文本
    pub value: String,
}

/// Extraction result for one run: records in source order plus
/// per-row diagnostics for the rows that were dropped.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub records: Vec<PriceRecord>,
    pub diagnostics: Vec<RowDiagnostic>,
}
