//! 필터 선택지 출력.

use anyhow::{Context, Result};
use sales_core::FilterOptions;

use super::OutputFormat;

/// 필터 선택지를 지정한 형식의 문자열로 변환합니다.
pub fn render_options(options: &FilterOptions, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(format_table(options)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(options).context("Failed to serialize to JSON")
        }
    }
}

fn format_table(options: &FilterOptions) -> String {
    let join = |items: Vec<String>| items.join(", ");

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10} {}\n",
        "Products",
        join(options.products.iter().map(ToString::to_string).collect())
    ));
    output.push_str(&format!(
        "{:<10} {}\n",
        "Regions",
        join(options.regions.iter().map(ToString::to_string).collect())
    ));
    output.push_str(&format!(
        "{:<10} {}\n",
        "Sellers",
        join(options.sellers.iter().map(ToString::to_string).collect())
    ));
    match options.date_bounds {
        Some(bounds) => output.push_str(&format!("{:<10} {}", "Dates", bounds)),
        None => output.push_str(&format!("{:<10} -", "Dates")),
    }
    output
}
