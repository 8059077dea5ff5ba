use investing_datahub::config::{Config, Instrument};
use investing_datahub::scrapers::base::HistoricalSource;
use investing_datahub::scrapers::investing::InvestingScraper;
use investing_datahub::services::data_service::DataService;

use clap::{App, Arg, SubCommand};
use log::{error, info};
use std::error::Error;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logger
    env_logger::init();

    let today = chrono::Local::now().format("%m/%d/%Y").to_string();

    // 创建基本的命令行应用
    let app = App::new("InvestingDataHub")
        .version("1.0.0")
        .author("DataHub Team")
        .about("Commodity historical price extraction system");

    // 添加子命令
    let app = app
        .subcommand(
            SubCommand::with_name("scrape")
                .about("Scrape historical price data for an instrument")
                .arg(
                    Arg::with_name("start-date")
                        .short('s')
                        .long("start-date")
                        .value_name("DATE")
                        .help("Start date of the period to scrape (MM/DD/YYYY)")
                        .takes_value(true)
                        .default_value("01/01/2017"),
                )
                .arg(
                    Arg::with_name("end-date")
                        .short('e')
                        .long("end-date")
                        .value_name("DATE")
                        .help("End date of the period to scrape (MM/DD/YYYY)")
                        .takes_value(true)
                        .default_value(&today),
                )
                .arg(
                    Arg::with_name("frequency")
                        .short('f')
                        .long("frequency")
                        .value_name("FREQUENCY")
                        .help("Time frame of the records (Daily, Weekly, Monthly)")
                        .takes_value(true)
                        .default_value("Daily"),
                )
                .arg(
                    Arg::with_name("sort")
                        .long("sort")
                        .value_name("ORDER")
                        .help("Sort order of the returned records (ASC, DESC)")
                        .takes_value(true)
                        .default_value("DESC"),
                )
                .arg(
                    Arg::with_name("out-dir")
                        .short('o')
                        .long("out-dir")
                        .value_name("DIR")
                        .help("Directory to write the CSV output to")
                        .takes_value(true)
                        .default_value("."),
                )
                .arg(
                    Arg::with_name("preview")
                        .long("preview")
                        .value_name("ROWS")
                        .help("Number of records to preview on the console")
                        .takes_value(true)
                        .default_value("10"),
                ),
        )
        .subcommand(
            SubCommand::with_name("latest")
                .about("Fetch the latest price for the instrument"),
        );

    let matches = app.get_matches();

    if let Some(matches) = matches.subcommand_matches("scrape") {
        let frequency = matches.value_of("frequency").unwrap();
        let sort_order = matches.value_of("sort").unwrap();

        // 校验枚举型参数
        if !["Daily", "Weekly", "Monthly"].contains(&frequency) {
            error!("Unknown frequency: {}", frequency);
            return Err(format!("Unknown frequency: {}", frequency).into());
        }
        if !["ASC", "DESC"].contains(&sort_order) {
            error!("Unknown sort order: {}", sort_order);
            return Err(format!("Unknown sort order: {}", sort_order).into());
        }

        let preview_rows = matches
            .value_of("preview")
            .unwrap_or("10")
            .parse::<usize>()
            .unwrap_or(10);

        // 创建配置
        let config = Config::new()
            .with_instrument(Instrument::london_gas_oil())
            .with_frequency(frequency)
            .with_sort_order(sort_order)
            .with_start_date(matches.value_of("start-date").unwrap())
            .with_end_date(matches.value_of("end-date").unwrap())
            .with_output_dir(matches.value_of("out-dir").unwrap())
            .with_preview_rows(preview_rows);

        // 创建数据服务
        let source: Arc<dyn HistoricalSource + Send + Sync> = Arc::new(InvestingScraper::new()?);
        let data_service = DataService::new(config, source);

        let path = data_service.process().await?;
        info!("Historical data written to {}", path.display());
    } else if matches.subcommand_matches("latest").is_some() {
        let config = Config::new();
        let source: Arc<dyn HistoricalSource + Send + Sync> = Arc::new(InvestingScraper::new()?);
        let data_service = DataService::new(config, source);

        let price = data_service.latest_price().await?;
        info!("Latest price: {}", price);
        println!("{}", price);
    } else {
        info!("No command specified. Use --help for usage information.");
    }

    Ok(())
}
