//! 설정 관리.
//!
//! 이 모듈은 애플리케이션 설정을 정의하고 관리합니다.
//! 우선순위: 내장 기본값 < TOML 파일 < `SALES__` 환경 변수.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{SalesError, SalesResult};

/// 하루 평균 판매 건수 상한.
pub const MAX_MEAN_DAILY_SALES: f64 = 10_000.0;

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// 합성 데이터 생성 설정
    pub generator: GeneratorConfig,
    /// 대시보드 표시 설정
    pub dashboard: DashboardConfig,
    /// KPI 계산 설정
    pub kpi: KpiConfig,
    /// 로깅 설정
    pub logging: LoggingConfig,
}

/// 합성 판매 데이터 생성 설정.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// 난수 시드 (동일 시드 → 동일 데이터셋)
    pub seed: u64,
    /// 생성 시작일 (포함)
    pub start_date: NaiveDate,
    /// 생성 종료일 (포함)
    pub end_date: NaiveDate,
    /// 일별 판매 건수의 포아송 평균
    pub mean_daily_sales: f64,
    /// 단가 하한 (포함)
    pub price_min: f64,
    /// 단가 상한 (미포함)
    pub price_max: f64,
    /// 최대 판매 수량 (1부터 이 값까지 균등)
    pub max_quantity: u8,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default(),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or_default(),
            mean_daily_sales: 10.0,
            price_min: 50.0,
            price_max: 1500.0,
            max_quantity: 5,
        }
    }
}

impl GeneratorConfig {
    /// 다른 시드를 사용하는 설정을 반환합니다.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// 생성 기간을 설정합니다.
    pub fn with_period(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    /// 설정 값의 유효성을 검사합니다.
    pub fn validate(&self) -> SalesResult<()> {
        if self.start_date > self.end_date {
            return Err(SalesError::InvalidInput(format!(
                "start date {} is after end date {}",
                self.start_date, self.end_date
            )));
        }
        if !(self.mean_daily_sales.is_finite()
            && self.mean_daily_sales > 0.0
            && self.mean_daily_sales <= MAX_MEAN_DAILY_SALES)
        {
            return Err(SalesError::InvalidInput(format!(
                "mean daily sales must be in (0, {}], got {}",
                MAX_MEAN_DAILY_SALES, self.mean_daily_sales
            )));
        }
        if !(self.price_min.is_finite() && self.price_max.is_finite())
            || self.price_min <= 0.0
            || self.price_min >= self.price_max
        {
            return Err(SalesError::InvalidInput(format!(
                "price range must satisfy 0 < min < max, got [{}, {})",
                self.price_min, self.price_max
            )));
        }
        if self.max_quantity == 0 {
            return Err(SalesError::InvalidInput(
                "max quantity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// 대시보드 표시 설정.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// 판매 금액 히스토그램 구간 수
    pub histogram_bins: usize,
    /// 상위 상품 표에 표시할 개수
    pub top_products: usize,
    /// 데이터 테이블 페이지 크기
    pub page_size: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            histogram_bins: 50,
            top_products: 5,
            page_size: 25,
        }
    }
}

/// 전년 대비 성장률 계산 설정.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct KpiConfig {
    /// 비교 대상 연도
    pub current_year: i32,
    /// 기준 연도
    pub base_year: i32,
}

impl Default for KpiConfig {
    fn default() -> Self {
        Self {
            current_year: 2024,
            base_year: 2023,
        }
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
    /// span 종료 시 소요 시간 출력
    pub span_timings: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "compact".to_string(),
            span_timings: false,
        }
    }
}

impl AppConfig {
    /// 파일(선택)과 환경 변수에서 설정을 로드합니다.
    ///
    /// 파일이 없으면 내장 기본값과 환경 변수만 사용합니다.
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> SalesResult<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(
                config::File::from(path.as_ref())
                    .format(config::FileFormat::Toml)
                    .required(false),
            );
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("SALES")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app: AppConfig = config.try_deserialize()?;
        app.generator.validate()?;
        Ok(app)
    }

    /// 기본 경로에서 설정을 로드합니다.
    pub fn load_default() -> SalesResult<Self> {
        Self::load(Some("config/default.toml"))
    }

    /// TOML 문자열에서 설정을 로드합니다.
    pub fn from_toml_str(content: &str) -> SalesResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(content, config::FileFormat::Toml))
            .build()?;

        let app: AppConfig = config.try_deserialize()?;
        app.generator.validate()?;
        Ok(app)
    }
}
