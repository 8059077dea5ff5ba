use chrono::NaiveDate;

use crate::errors::{Result, ScrapeError};
use crate::models::record::{PriceRecord, RawRow};

// 历史数据表格的显示日期格式，例如 "Mar 01, 2019"
const DATE_FORMAT: &str = "%b %d, %Y";

/// 表格列布局：各字段在一行单元格中的下标
///
/// 默认值对应investing.com历史数据表的列顺序：
/// Date, Price, Open, High, Low, Vol., Change %
#[derive(Debug, Clone)]
pub struct ColumnLayout {
    pub date: usize,
    pub price: usize,
    pub open: usize,
    pub volume: usize,
    pub change: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            date: 0,
            price: 1,
            open: 2,
            volume: 5,
            change: 6,
        }
    }
}

/// 解析显示格式的日期文本
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}

/// 解析价格文本：去掉千位分隔符，要求非负十进制数
pub fn parse_price(text: &str) -> Option<f64> {
    let cleaned = text.trim().replace(',', "");
    let value = cleaned.parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

/// 解析成交量文本，还原K/M/B量级后缀
///
/// 规则：尾数按十进制解析，乘以后缀倍数后四舍五入（half-up）取整；
/// 空单元格或"-"表示当日无成交量，按0处理，不算解析失败。
pub fn parse_volume(text: &str) -> Option<u64> {
    let text = text.trim();
    if text.is_empty() || text == "-" {
        return Some(0);
    }

    let (mantissa_text, factor) = match text.chars().last()? {
        'K' => (&text[..text.len() - 1], 1_000.0),
        'M' => (&text[..text.len() - 1], 1_000_000.0),
        'B' => (&text[..text.len() - 1], 1_000_000_000.0),
        c if c.is_ascii_digit() => (text, 1.0),
        // 未知后缀按解析失败处理
        _ => return None,
    };

    let mantissa = mantissa_text.replace(',', "").parse::<f64>().ok()?;
    if !mantissa.is_finite() || mantissa < 0.0 {
        return None;
    }

    Some((mantissa * factor + 0.5).floor() as u64)
}

/// 解析涨跌幅文本：去掉尾部"%"，符号必须来自文本本身
///
/// 前导"+"可选，负值必须带"-"并保留到结果中。
pub fn parse_change(text: &str) -> Option<f64> {
    let text = text.trim();
    let body = text.strip_suffix('%').unwrap_or(text);
    let body = body.strip_prefix('+').unwrap_or(body);
    let value = body.trim().parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}

/// 将一行原始单元格文本规范化为完整的行情记录
///
/// 整行要么全部字段解析成功，要么带字段名失败，不做部分默认值填充。
pub fn normalize_row(row: &RawRow, layout: &ColumnLayout, row_index: usize) -> Result<PriceRecord> {
    let cell = |index: usize, field: &'static str| -> Result<&str> {
        row.get(index)
            .map(|s| s.as_str())
            .ok_or(ScrapeError::FieldParse {
                row: row_index,
                field,
                value: String::new(),
            })
    };
    let field_error = |field: &'static str, value: &str| ScrapeError::FieldParse {
        row: row_index,
        field,
        value: value.to_string(),
    };

    let date_text = cell(layout.date, "date")?;
    let date = parse_date(date_text).ok_or_else(|| field_error("date", date_text))?;

    let open_text = cell(layout.open, "price")?;
    let open = parse_price(open_text).ok_or_else(|| field_error("price", open_text))?;

    let close_text = cell(layout.price, "price")?;
    let close = parse_price(close_text).ok_or_else(|| field_error("price", close_text))?;

    let volume_text = cell(layout.volume, "volume")?;
    let volume = parse_volume(volume_text).ok_or_else(|| field_error("volume", volume_text))?;

    let change_text = cell(layout.change, "change_percent")?;
    let change_percent =
        parse_change(change_text).ok_or_else(|| field_error("change_percent", change_text))?;

    Ok(PriceRecord {
        date,
        open,
        close,
        volume,
        change_percent,
    })
}
