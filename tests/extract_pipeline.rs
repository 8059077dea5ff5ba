use chrono::NaiveDate;
use investing_datahub::util::csv_utils;
use investing_datahub::{extract_records, ColumnLayout, ScrapeError};

// 模拟HistoricalDataAjax返回的页面片段：广告、无关表格和历史数据表混在一起
const HISTORY_PAGE: &str = r#"
<div id="topBanner" class="ad">advertisement</div>
<table class="genTbl relatedInstruments">
  <tr><td>Brent Oil</td><td>66.14</td></tr>
</table>
<table id="curr_table" class="genTbl closedTbl historicalTbl">
  <thead>
    <tr>
      <th>Date</th><th>Price</th><th>Open</th><th>High</th>
      <th>Low</th><th>Vol.</th><th>Change %</th>
    </tr>
  </thead>
  <tbody>
    <tr>
      <td class="first left bold noWrap">Mar 01, 2019</td>
      <td>623.50</td><td>619.75</td><td>626.00</td><td>617.25</td>
      <td>98.75K</td><td>+0.57%</td>
    </tr>
    <tr>
      <td class="first left bold noWrap">Feb 28, 2019</td>
      <td>620.00</td><td>1,021.50</td><td>1,025.00</td><td>618.00</td>
      <td>1.2M</td><td>-0.30%</td>
    </tr>
    <tr>
      <td class="first left bold noWrap">Feb 27, 2019</td>
      <td>621.75</td><td>620.50</td><td>623.00</td><td>619.50</td>
      <td>-</td><td>0.00%</td>
    </tr>
    <tr>
      <td colspan="7">* Prices are indicative and may be delayed</td>
    </tr>
  </tbody>
</table>
<div class="footerWidget">more noise</div>
"#;

#[test]
fn pipeline_extracts_typed_records_in_source_order() {
    let extraction = extract_records(HISTORY_PAGE, &ColumnLayout::default()).unwrap();

    // 脚注行进入诊断列表，三条数据行全部成功
    assert_eq!(extraction.records.len(), 3);
    assert_eq!(extraction.diagnostics.len(), 1);
    assert_eq!(extraction.diagnostics[0].row, 3);
    assert_eq!(extraction.diagnostics[0].field, "date");

    let first = &extraction.records[0];
    assert_eq!(first.date, NaiveDate::from_ymd_opt(2019, 3, 1).unwrap());
    assert_eq!(first.open, 619.75);
    assert_eq!(first.close, 623.50);
    assert_eq!(first.volume, 98_750);
    assert_eq!(first.change_percent, 0.57);

    let second = &extraction.records[1];
    assert_eq!(second.open, 1021.50);
    assert_eq!(second.volume, 1_200_000);
    assert_eq!(second.change_percent, -0.30);

    let third = &extraction.records[2];
    assert_eq!(third.volume, 0);
    assert_eq!(third.change_percent, 0.0);

    // 顺序与页面一致（本例为最新在前）
    assert!(extraction.records[0].date > extraction.records[1].date);
    assert!(extraction.records[1].date > extraction.records[2].date);
}

#[test]
fn pipeline_fails_loudly_when_table_is_missing() {
    let page = r#"<html><body><div class="error404">Page not found</div></body></html>"#;
    assert!(matches!(
        extract_records(page, &ColumnLayout::default()),
        Err(ScrapeError::TableNotFound)
    ));
}

#[test]
fn records_round_trip_through_csv_export() {
    let extraction = extract_records(HISTORY_PAGE, &ColumnLayout::default()).unwrap();

    let path = std::env::temp_dir().join("investing_datahub_pipeline_test.csv");
    csv_utils::save_records_to_csv(&extraction.records, &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next().unwrap(),
        "date,open,close,volume,change_percent"
    );
    assert_eq!(lines.next().unwrap(), "2019-03-01,619.75,623.5,98750,0.57");
    assert_eq!(contents.lines().count(), 4);

    std::fs::remove_file(&path).ok();
}
