//! 필터링된 데이터 CSV 내보내기.

use anyhow::{Context, Result};
use sales_analytics::FilterSelection;
use tracing::info;

use super::write_output;
use crate::session::DashboardSession;

/// 기본 내보내기 파일 이름.
pub const DEFAULT_EXPORT_FILE: &str = "filtered_sales.csv";

/// 내보내기 설정.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// 출력 경로 (`-`이면 stdout)
    pub output: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output: DEFAULT_EXPORT_FILE.to_string(),
        }
    }
}

/// 선택을 적용한 레코드를 CSV로 내보내고 바이트 수를 반환합니다.
pub fn export_filtered(
    session: &DashboardSession,
    selection: &FilterSelection,
    config: &ExportConfig,
) -> Result<usize> {
    let bytes = session
        .export_csv(selection)
        .context("Failed to build CSV export")?;

    write_output(&bytes, &config.output)?;
    info!(output = %config.output, bytes = bytes.len(), "Filtered sales exported");

    Ok(bytes.len())
}
