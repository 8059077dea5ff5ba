use chrono::Local;

/// 抓取目标：investing.com上的一个交易品种
///
/// curr_id/smlID/header这几个值来自目标页面的表单参数，
/// 可以在浏览器里检查历史数据页的网络请求获得。
#[derive(Debug, Clone)]
pub struct Instrument {
    pub name: String,
    pub curr_id: u32,
    pub sml_id: u32,
    pub header: String,
    pub page_url: String,
}

impl Instrument {
    /// 伦敦柴油期货，第一版唯一支持的品种
    pub fn london_gas_oil() -> Self {
        Self {
            name: "CFD".to_string(),
            curr_id: 8861,
            sml_id: 300084,
            header: "London Gas Oil Futures".to_string(),
            page_url: "https://www.investing.com/commodities/london-gas-oil-historical-data"
                .to_string(),
        }
    }
}

pub struct Config {
    pub instrument: Instrument,
    pub frequency: String,   // Daily / Weekly / Monthly
    pub sort_order: String,  // ASC / DESC
    pub start_date: String,  // MM/DD/YYYY
    pub end_date: String,    // MM/DD/YYYY，默认当天
    pub output_dir: String,
    pub preview_rows: usize,
}

impl Config {
    pub fn new() -> Self {
        Self {
            instrument: Instrument::london_gas_oil(),
            frequency: "Daily".to_string(),
            sort_order: "DESC".to_string(),
            start_date: "01/01/2017".to_string(),
            end_date: Local::now().format("%m/%d/%Y").to_string(),
            output_dir: ".".to_string(),
            preview_rows: 10,
        }
    }

    pub fn with_instrument(mut self, instrument: Instrument) -> Self {
        self.instrument = instrument;
        self
    }

    pub fn with_frequency(mut self, frequency: &str) -> Self {
        self.frequency = frequency.to_string();
        self
    }

    pub fn with_sort_order(mut self, sort_order: &str) -> Self {
        self.sort_order = sort_order.to_string();
        self
    }

    pub fn with_start_date(mut self, start_date: &str) -> Self {
        self.start_date = start_date.to_string();
        self
    }

    pub fn with_end_date(mut self, end_date: &str) -> Self {
        self.end_date = end_date.to_string();
        self
    }

    pub fn with_output_dir(mut self, dir: &str) -> Self {
        self.output_dir = dir.to_string();
        self
    }

    pub fn with_preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = rows;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
