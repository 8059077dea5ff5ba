use chrono::{DateTime, Local};

// 输出文件名：<品种名>_<查询时间>.csv
pub fn output_file_name(name: &str, query_time: &DateTime<Local>) -> String {
    format!("{}_{}.csv", name, query_time.format("%Y%m%d_%H%M%S"))
}

// CSV数据导出工具
pub mod csv_utils {
    use crate::errors::Result;
    use crate::models::record::PriceRecord;
    use log::info;
    use std::fs;
    use std::path::Path;

    // 将行情记录保存为CSV文件，列顺序：date, open, close, volume, change_percent
    pub fn save_records_to_csv(records: &[PriceRecord], path: &Path) -> Result<()> {
        info!("Saving {} records to {}", records.len(), path.display());

        // 确保目录存在
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = csv::Writer::from_path(path)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        Ok(())
    }
}
