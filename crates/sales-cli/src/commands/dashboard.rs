//! 대시보드 출력.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use sales_analytics::{CategoryTotal, Dashboard};
use sales_core::{format_count, DecimalExt};

use super::{truncate, OutputFormat};

/// 히스토그램 막대 최대 길이.
const BAR_WIDTH: usize = 40;

/// 대시보드를 지정한 형식의 문자열로 변환합니다.
pub fn render_dashboard(dashboard: &Dashboard, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(format_table(dashboard)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(dashboard).context("Failed to serialize to JSON")
        }
    }
}

/// 테이블 형식 출력.
fn format_table(dashboard: &Dashboard) -> String {
    let mut output = String::new();

    output.push_str("Sales Dashboard\n");
    output.push_str(&"=".repeat(60));
    output.push('\n');
    if let Some(range) = dashboard.date_range {
        output.push_str(&format!("Period: {}\n", range));
    }
    output.push('\n');

    // KPI
    for (label, value) in dashboard.kpis.display_rows() {
        output.push_str(&format!("{:<20} {:>18}\n", label, value));
    }

    output.push_str(&section("Monthly Sales Trend"));
    output.push_str(&format!("{:<10} {:>16} {:>8}\n", "MONTH", "TOTAL", "SALES"));
    output.push_str(&"-".repeat(36));
    output.push('\n');
    for month in &dashboard.monthly_trend {
        output.push_str(&format!(
            "{:<10} {:>16} {:>8}\n",
            month.period,
            month.total.to_currency_string(),
            format_count(month.sales)
        ));
    }

    output.push_str(&section("Sales by Product"));
    output.push_str(&category_table(&dashboard.product_totals));

    output.push_str(&section(&format!(
        "Top {} Products",
        dashboard.top_products.len()
    )));
    output.push_str(&category_table(&dashboard.top_products));

    output.push_str(&section("Sales by Region"));
    output.push_str(&category_table(&dashboard.region_totals));

    output.push_str(&section("Sales by Seller"));
    output.push_str(&category_table(&dashboard.seller_totals));

    output.push_str(&section("Sales Distribution"));
    let mode = dashboard.histogram.mode_bin();
    let peak = mode.map_or(0, |b| b.count);
    for bin in &dashboard.histogram.bins {
        let bar_len = if peak > 0 {
            (bin.count * BAR_WIDTH).div_ceil(peak)
        } else {
            0
        };
        output.push_str(&format!(
            "{:>10.2} - {:>10.2} {:>6} {}\n",
            bin.lower,
            bin.upper,
            bin.count,
            "#".repeat(bar_len)
        ));
    }
    if let Some(bin) = mode {
        output.push_str(&format!(
            "Most common: {:.2} - {:.2} ({} sales)\n",
            bin.lower,
            bin.upper,
            format_count(bin.count)
        ));
    }

    output.push_str(&section("Correlation Matrix"));
    output.push_str(&format!("{:<12}", ""));
    for name in &dashboard.correlation.variables {
        output.push_str(&format!(" {:>10}", name));
    }
    output.push('\n');
    for (name, row) in dashboard
        .correlation
        .variables
        .iter()
        .zip(&dashboard.correlation.matrix)
    {
        output.push_str(&format!("{:<12}", name));
        for value in row {
            output.push_str(&format!(" {:>10.2}", value));
        }
        output.push('\n');
    }

    output
}

fn section(title: &str) -> String {
    format!("\n{}\n{}\n", title, "=".repeat(title.len()))
}

fn category_table(totals: &[CategoryTotal]) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:<12} {:>16} {:>8} {:>8}\n",
        "NAME", "TOTAL", "SALES", "SHARE"
    ));
    output.push_str(&"-".repeat(47));
    output.push('\n');
    for total in totals {
        output.push_str(&format!(
            "{:<12} {:>16} {:>8} {:>8}\n",
            truncate(&total.label, 12),
            total.total.to_currency_string(),
            format_count(total.sales),
            total.share_pct.to_percentage_string(1)
        ));
    }

    let sum: Decimal = totals.iter().map(|t| t.total).sum();
    output.push_str(&format!("{:<12} {:>16}\n", "Total", sum.to_currency_string()));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use sales_analytics::FilterSelection;
    use sales_core::{AppConfig, Product, Region, SaleRecord, SalesDataset, Seller};

    fn dashboard() -> Dashboard {
        let records = vec![
            SaleRecord::new(
                NaiveDate::from_ymd_opt(2023, 3, 1).unwrap(),
                Product::Laptop,
                Region::North,
                2,
                dec!(1000),
                Seller::new(1).unwrap(),
            )
            .unwrap(),
            SaleRecord::new(
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                Product::Mouse,
                Region::West,
                3,
                dec!(100),
                Seller::new(2).unwrap(),
            )
            .unwrap(),
        ];
        let data = SalesDataset::new(records);
        Dashboard::build(&data, &FilterSelection::all(&data), &AppConfig::default()).unwrap()
    }

    #[test]
    fn test_table_contains_kpis_and_sections() {
        let text = render_dashboard(&dashboard(), OutputFormat::Table).unwrap();
        assert!(text.contains("Total Sales"));
        assert!(text.contains("$2,300"));
        assert!(text.contains("Growth 2024 vs 2023"));
        assert!(text.contains("-85.0%"));
        assert!(text.contains("2023-03"));
        assert!(text.contains("Sales by Region"));
        assert!(text.contains("Correlation Matrix"));
    }

    #[test]
    fn test_distribution_names_most_common_bin() {
        let text = render_dashboard(&dashboard(), OutputFormat::Table).unwrap();
        // 두 구간이 1건씩 동률이면 뒤쪽 구간
        assert!(text.contains("Most common: 1966.00 - 2000.00 (1 sales)"));
    }

    #[test]
    fn test_json_is_valid() {
        let text = render_dashboard(&dashboard(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["kpis"]["sale_count"], 2);
        assert_eq!(value["monthly_trend"].as_array().unwrap().len(), 2);
    }
}
