use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Date parsing error: {0}")]
    DateError(#[from] chrono::ParseError),

    // 页面结构错误：找不到历史数据表格，说明页面布局变化或抓错了页面
    #[error("historical data table not found in document")]
    TableNotFound,

    // 单行字段解析错误，带字段名和行号，便于定位脏数据
    #[error("row {row}: cannot parse field '{field}' from {value:?}")]
    FieldParse {
        row: usize,
        field: &'static str,
        value: String,
    },

    // 整页没有任何一行解析成功
    #[error("no rows could be normalized from the table")]
    EmptyResult,

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

// 用于从字符串创建错误
impl From<String> for ScrapeError {
    fn from(s: String) -> Self {
        ScrapeError::Unknown(s)
    }
}

// 用于从&str创建错误
impl From<&str> for ScrapeError {
    fn from(s: &str) -> Self {
        ScrapeError::Unknown(s.to_string())
    }
}
