//! 원본 데이터 테이블 출력.

use anyhow::{Context, Result};
use sales_analytics::Page;
use sales_core::{format_count, DecimalExt};

use super::OutputFormat;

/// 페이지를 지정한 형식의 문자열로 변환합니다.
pub fn render_page(page: &Page<'_>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(format_table(page)),
        OutputFormat::Json => serde_json::to_string_pretty(page).context("Failed to serialize to JSON"),
    }
}

/// 테이블 형식 출력.
fn format_table(page: &Page<'_>) -> String {
    let mut output = String::new();

    // 헤더
    output.push_str(&format!(
        "{:<12} {:<12} {:<8} {:>4} {:>12} {:<10} {:>12}\n",
        "DATE", "PRODUCT", "REGION", "QTY", "UNIT_PRICE", "SELLER", "TOTAL"
    ));
    output.push_str(&"-".repeat(76));
    output.push('\n');

    // 데이터
    for record in &page.records {
        output.push_str(&format!(
            "{:<12} {:<12} {:<8} {:>4} {:>12} {:<10} {:>12}\n",
            record.date().to_string(),
            record.product(),
            record.region(),
            record.quantity(),
            record.unit_price().to_currency_string_dp(2),
            record.seller().to_string(),
            record.total().to_currency_string_dp(2)
        ));
    }

    // 요약
    output.push('\n');
    output.push_str(&format!(
        "Page {} of {} ({} records)",
        page.page,
        page.total_pages,
        format_count(page.total_records)
    ));
    if page.has_next() {
        output.push_str(&format!(", next: --page {}", page.page + 1));
    }

    output
}
