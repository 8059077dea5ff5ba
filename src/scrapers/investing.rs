use crate::config::Config;
use crate::errors::{Result, ScrapeError};
use crate::extractor;
use crate::scrapers::base::HistoricalSource;
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use scraper::Html;
use std::time::Duration;

// 历史数据的AJAX入口，返回的是表格HTML片段
const HISTORICAL_DATA_URL: &str = "https://www.investing.com/instruments/HistoricalDataAjax";

/// investing.com数据抓取器
pub struct InvestingScraper {
    client: Client,
}

impl InvestingScraper {
    /// 创建新的investing.com抓取器
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(ScrapeError::RequestError)?;

        Ok(Self { client })
    }

    // 站点要求浏览器式请求头，否则返回403
    fn browser_headers(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("User-Agent", "Mozilla/5.0")
            .header("Referer", "https://www.investing.com")
            .header("X-Requested-With", "XMLHttpRequest")
    }
}

#[async_trait]
impl HistoricalSource for InvestingScraper {
    fn source_code(&self) -> &'static str {
        "INVESTING"
    }

    async fn fetch_history_page(&self, config: &Config) -> Result<String> {
        let instrument = &config.instrument;
        info!(
            "获取{}历史数据，区间 {} ~ {}",
            instrument.header, config.start_date, config.end_date
        );

        let form = [
            ("curr_id", instrument.curr_id.to_string()),
            ("smlID", instrument.sml_id.to_string()),
            ("header", instrument.header.clone()),
            ("st_date", config.start_date.clone()),
            ("end_date", config.end_date.clone()),
            ("interval_sec", config.frequency.clone()),
            ("sort_col", "date".to_string()),
            ("sort_ord", config.sort_order.clone()),
            ("action", "historical_data".to_string()),
        ];

        let response = Self::browser_headers(self.client.post(HISTORICAL_DATA_URL))
            .form(&form)
            .send()
            .await
            .map_err(ScrapeError::RequestError)?;

        if !response.status().is_success() {
            return Err(ScrapeError::DataError(format!(
                "Historical data request failed: HTTP status {}",
                response.status()
            )));
        }

        let html = response.text().await?;
        debug!("成功获取响应，{}字节", html.len());
        Ok(html)
    }

    async fn fetch_latest_price(&self, config: &Config) -> Result<f64> {
        let instrument = &config.instrument;
        debug!("获取{}最新价", instrument.header);

        let response = Self::browser_headers(self.client.get(&instrument.page_url))
            .send()
            .await
            .map_err(ScrapeError::RequestError)?;

        if !response.status().is_success() {
            return Err(ScrapeError::DataError(format!(
                "Quote page request failed: HTTP status {}",
                response.status()
            )));
        }

        let html = response.text().await?;
        let document = Html::parse_document(&html);
        extractor::latest_price(&document)
    }
}
