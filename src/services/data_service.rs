use crate::config::Config;
use crate::errors::Result;
use crate::extractor::{self, ColumnLayout};
use crate::models::record::Extraction;
use crate::scrapers::base::HistoricalSource;
use crate::util;
use chrono::Local;
use log::{info, warn};
use std::path::PathBuf;
use std::sync::Arc;

/// 数据服务，处理行情数据的获取、提取和存储
pub struct DataService {
    config: Config,
    source: Arc<dyn HistoricalSource + Send + Sync>,
    layout: ColumnLayout,
}

impl DataService {
    /// 创建新的数据服务实例
    pub fn new(config: Config, source: Arc<dyn HistoricalSource + Send + Sync>) -> Self {
        Self {
            config,
            source,
            layout: ColumnLayout::default(),
        }
    }

    /// 获取并提取历史行情数据
    ///
    /// 记录按页面返回的原始顺序收集，不重新排序；
    /// 规范化失败的行记入诊断列表并在日志中汇报。
    pub async fn fetch_history(&self) -> Result<Extraction> {
        let html = self.source.fetch_history_page(&self.config).await?;
        let extraction = extractor::extract_records(&html, &self.layout)?;

        info!(
            "成功提取{}条行情记录（来源：{}）",
            extraction.records.len(),
            self.source.source_code()
        );
        if !extraction.diagnostics.is_empty() {
            // 丢弃行必须可见，不允许静默
            warn!("{}行规范化失败被丢弃:", extraction.diagnostics.len());
            for diag in &extraction.diagnostics {
                warn!("  行{}: 字段'{}' 值{:?}", diag.row, diag.field, diag.value);
            }
        }

        Ok(extraction)
    }

    /// 获取品种最新价
    pub async fn latest_price(&self) -> Result<f64> {
        self.source.fetch_latest_price(&self.config).await
    }

    /// 完整流程：最新价 + 历史数据 + 控制台预览 + CSV落盘
    ///
    /// 返回输出文件路径。最新价获取失败不影响历史数据流程。
    pub async fn process(&self) -> Result<PathBuf> {
        let query_time = Local::now();

        match self.latest_price().await {
            Ok(price) => info!(
                "{}: The latest price of {} is {}",
                query_time.format("%Y-%m-%d %H:%M:%S"),
                self.config.instrument.name,
                price
            ),
            Err(e) => warn!("Failed to fetch the latest price: {}", e),
        }

        let extraction = self.fetch_history().await?;
        self.print_preview(&extraction);

        let file_name = util::output_file_name(&self.config.instrument.name, &query_time);
        let path = PathBuf::from(&self.config.output_dir).join(file_name);
        util::csv_utils::save_records_to_csv(&extraction.records, &path)?;
        info!("Save completed: {}", path.display());

        Ok(path)
    }

    // 预览开头若干条记录
    fn print_preview(&self, extraction: &Extraction) {
        let limit = self.config.preview_rows;
        info!("The retrieved historical prices (top {}) are shown below:", limit);
        info!("{:-<64}", "");
        info!(
            "{:<12} {:<10} {:<10} {:<14} {:<10}",
            "Date", "Open", "Close", "Volume", "Change %"
        );
        info!("{:-<64}", "");

        for record in extraction.records.iter().take(limit) {
            info!(
                "{:<12} {:<10.2} {:<10.2} {:<14} {:<+10.2}",
                record.date.format("%Y-%m-%d").to_string(),
                record.open,
                record.close,
                record.volume,
                record.change_percent
            );
        }

        if extraction.records.len() > limit {
            info!("... and {} more records", extraction.records.len() - limit);
        }
    }
}
