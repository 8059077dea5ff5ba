use scraper::{ElementRef, Html, Selector};

use crate::errors::{Result, ScrapeError};
use crate::models::record::RawRow;

// 历史数据表格的结构签名：按稳定的id/class定位，不依赖表格在页面中的位置
const TABLE_SIGNATURE: &str = "table#curr_table, table.historicalTbl";

/// 在文档中定位历史数据表格，按文档顺序返回其数据行
///
/// 数据行取自tbody，表头（thead）和装饰行按结构排除；
/// 找不到符合签名的表格时返回`TableNotFound`，而不是空结果。
pub fn locate(document: &Html) -> Result<Vec<RawRow>> {
    let table_selector = Selector::parse(TABLE_SIGNATURE).unwrap();
    let row_selector = Selector::parse("tbody tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    let table = document
        .select(&table_selector)
        .next()
        .ok_or(ScrapeError::TableNotFound)?;

    let mut rows = Vec::new();
    for tr in table.select(&row_selector) {
        let cells: RawRow = tr
            .select(&cell_selector)
            .map(|td| cell_text(&td))
            .collect();

        // th表头行和没有数据单元格的行不产生RawRow
        if cells.is_empty() {
            continue;
        }
        rows.push(cells);
    }

    Ok(rows)
}

// 合并单元格内的文本节点并规范化空白
fn cell_text(element: &ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locates_table_by_signature() {
        let html = r#"
            <html><body>
            <div class="ad-banner">noise</div>
            <table id="curr_table" class="genTbl closedTbl historicalTbl">
              <thead><tr><th>Date</th><th>Price</th></tr></thead>
              <tbody>
                <tr><td>Mar 01, 2019</td><td>623.50</td></tr>
                <tr><td>Feb 28, 2019</td><td>619.75</td></tr>
              </tbody>
            </table>
            </body></html>"#;
        let document = Html::parse_document(html);
        let rows = locate(&document).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["Mar 01, 2019", "623.50"]);
        assert_eq!(rows[1], vec!["Feb 28, 2019", "619.75"]);
    }

    #[test]
    fn header_rows_excluded_by_structure_not_position() {
        // 表头不在第一行也不会混入数据行
        let html = r#"
            <table id="curr_table">
              <thead>
                <tr><th colspan="2">Banner inserted above the header</th></tr>
                <tr><th>Date</th><th>Price</th></tr>
              </thead>
              <tbody>
                <tr><td>Mar 01, 2019</td><td>623.50</td></tr>
              </tbody>
            </table>"#;
        let document = Html::parse_document(html);
        let rows = locate(&document).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], "Mar 01, 2019");
    }

    #[test]
    fn missing_table_is_not_an_empty_sequence() {
        let html = "<html><body><table class=\"other\"><tr><td>x</td></tr></table></body></html>";
        let document = Html::parse_document(html);
        assert!(matches!(locate(&document), Err(ScrapeError::TableNotFound)));
    }

    #[test]
    fn normalizes_whitespace_inside_cells() {
        let html = r#"
            <table id="curr_table"><tbody>
              <tr><td>  Mar 01,
                  2019 </td><td><span>623.50</span></td></tr>
            </tbody></table>"#;
        let document = Html::parse_document(html);
        let rows = locate(&document).unwrap();
        assert_eq!(rows[0], vec!["Mar 01, 2019", "623.50"]);
    }
}
