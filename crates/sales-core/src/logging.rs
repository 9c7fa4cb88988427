//! tracing 기반 로깅 설정.
//!
//! 출력 형식은 세 가지입니다:
//! - **pretty**: 여러 줄, 색상 포함 (로컬 디버깅)
//! - **json**: 한 줄 JSON (수집기 연동)
//! - **compact**: 한 줄 텍스트 (기본값)
//!
//! 모든 로그는 stderr로 나갑니다. stdout은 CSV/JSON 결과 전용입니다.

use std::fmt;
use std::str::FromStr;

use tracing::Subscriber;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LoggingConfig;
use crate::error::{SalesError, SalesResult};

/// 로그 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    Pretty,
    Json,
    #[default]
    Compact,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pretty => "pretty",
            Self::Json => "json",
            Self::Compact => "compact",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for LogFormat {
    type Err = SalesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Pretty, Self::Json, Self::Compact]
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SalesError::Config(format!("Unknown log format: {}", s)))
    }
}

/// 구독자 설정.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// EnvFilter 지시어 (예: "warn", "sales_analytics=debug")
    pub level: String,
    pub format: LogFormat,
    /// span 종료 시 소요 시간 이벤트 출력
    pub span_timings: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::default(),
            span_timings: false,
        }
    }
}

impl LogConfig {
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            ..Default::default()
        }
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// 필터 → 집계 구간별 소요 시간을 보고 싶을 때 켭니다.
    pub fn with_span_timings(mut self, enabled: bool) -> Self {
        self.span_timings = enabled;
        self
    }

    /// `[logging]` 설정 섹션에서 만듭니다. 알 수 없는 형식은 compact로 대체됩니다.
    pub fn from_settings(settings: &LoggingConfig) -> Self {
        Self::new(settings.level.clone())
            .with_format(settings.format.parse().unwrap_or_default())
            .with_span_timings(settings.span_timings)
    }

    fn span_events(&self) -> FmtSpan {
        if self.span_timings {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    fn env_filter(&self) -> SalesResult<EnvFilter> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(&self.level).map_err(|e| {
                SalesError::Config(format!("Invalid log level '{}': {}", self.level, e))
            }),
        }
    }

    fn fmt_layer<S>(&self) -> Box<dyn Layer<S> + Send + Sync>
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
    {
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_span_events(self.span_events());

        match self.format {
            LogFormat::Pretty => layer.pretty().boxed(),
            LogFormat::Json => layer.json().with_current_span(true).boxed(),
            LogFormat::Compact => layer.compact().boxed(),
        }
    }
}

/// 전역 구독자를 설치합니다.
///
/// `RUST_LOG`가 있으면 `config.level`보다 우선합니다. 이미 설치되어 있으면
/// [`SalesError::Config`]를 반환합니다.
///
/// ```no_run
/// use sales_core::logging::{init_logging, LogConfig, LogFormat};
///
/// init_logging(LogConfig::new("info").with_format(LogFormat::Json))?;
/// # Ok::<(), sales_core::SalesError>(())
/// ```
pub fn init_logging(config: LogConfig) -> SalesResult<()> {
    let filter = config.env_filter()?;

    tracing_subscriber::registry()
        .with(filter)
        .with(config.fmt_layer())
        .try_init()
        .map_err(|e| SalesError::Config(format!("Logging already initialized: {}", e)))?;

    tracing::debug!(format = %config.format, level = %config.level, "Logging initialized");
    Ok(())
}

/// 한 번의 대시보드 호출을 감싸는 span. 시드와 레코드 수를 필드로 남깁니다.
#[macro_export]
macro_rules! dashboard_span {
    ($name:expr, $seed:expr) => {
        tracing::info_span!($name, seed = $seed)
    };
    ($name:expr, $seed:expr, $records:expr) => {
        tracing::info_span!($name, seed = $seed, records = $records)
    };
}
