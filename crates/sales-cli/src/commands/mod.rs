//! CLI 명령어 구현 모듈.
//!
//! 각 명령은 출력할 문자열(또는 바이트)을 만들어 돌려주고, 실제 출력은
//! `main`이 담당합니다.

pub mod dashboard;
pub mod export;
pub mod options;
pub mod table;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use std::fs::File;
use std::io::Write;
use tracing::info;

use crate::session::FilterRequest;

/// 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(anyhow::anyhow!("Invalid format: {}. Use: table, json", s)),
        }
    }
}

/// 모든 조회 명령이 공유하는 필터 인자.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// 상품 (반복 지정 가능, 기본: 전체)
    #[arg(short, long = "product")]
    pub products: Vec<String>,

    /// 지역 (반복 지정 가능, 기본: 전체)
    #[arg(short, long = "region")]
    pub regions: Vec<String>,

    /// 판매자 (Seller_3 또는 3, 반복 지정 가능, 기본: 전체)
    #[arg(short, long = "seller")]
    pub sellers: Vec<String>,

    /// 날짜 범위 끝점 (YYYY-MM-DD). 정확히 두 번 지정해야 범위로 적용됩니다.
    #[arg(short, long = "date", value_parser = parse_date)]
    pub dates: Vec<NaiveDate>,
}

impl From<FilterArgs> for FilterRequest {
    fn from(args: FilterArgs) -> Self {
        Self {
            products: args.products,
            regions: args.regions,
            sellers: args.sellers,
            dates: args.dates,
        }
    }
}

/// 날짜 문자열 파싱 (YYYY-MM-DD).
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date format: {}. Expected YYYY-MM-DD", s))
}

/// 내용을 파일 또는 stdout(`-`)에 씁니다.
pub fn write_output(content: &[u8], path: &str) -> Result<()> {
    if path == "-" {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(content)
            .context("Failed to write to stdout")?;
        stdout.flush().context("Failed to flush stdout")?;
    } else {
        let mut file =
            File::create(path).with_context(|| format!("Failed to create output file: {}", path))?;
        file.write_all(content)
            .context("Failed to write to file")?;
        info!("Output written to: {}", path);
    }
    Ok(())
}

/// 문자열 자르기 (UTF-8 안전).
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
