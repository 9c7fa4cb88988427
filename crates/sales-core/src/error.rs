//! 판매 대시보드의 에러 타입.
//!
//! 이 모듈은 데이터 생성, 필터링, 집계 전반에서 사용되는 에러 타입을 정의합니다.

use thiserror::Error;

/// 핵심 대시보드 에러.
#[derive(Debug, Error)]
pub enum SalesError {
    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 잘못된 입력
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),

    /// 선택한 필터에 해당하는 데이터 없음
    #[error("No data for the selected filters. Adjust the filters.")]
    EmptySelection,

    /// CSV 인코딩/디코딩 에러
    #[error("CSV 에러: {0}")]
    Csv(String),

    /// 입출력 에러
    #[error("입출력 에러: {0}")]
    Io(#[from] std::io::Error),

    /// 직렬화 에러
    #[error("직렬화 에러: {0}")]
    Serialization(String),
}

/// 대시보드 작업을 위한 Result 타입.
pub type SalesResult<T> = Result<T, SalesError>;

impl SalesError {
    /// 사용자가 필터를 조정하면 복구 가능한 에러인지 확인합니다.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SalesError::EmptySelection | SalesError::InvalidInput(_))
    }
}

impl From<serde_json::Error> for SalesError {
    fn from(err: serde_json::Error) -> Self {
        SalesError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for SalesError {
    fn from(err: config::ConfigError) -> Self {
        SalesError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_recoverable() {
        assert!(SalesError::EmptySelection.is_recoverable());
        assert!(SalesError::InvalidInput("bad seller".to_string()).is_recoverable());

        assert!(!SalesError::Config("bad level".to_string()).is_recoverable());
        assert!(!SalesError::Csv("bad row".to_string()).is_recoverable());
    }

    #[test]
    fn test_empty_selection_message() {
        assert_eq!(
            SalesError::EmptySelection.to_string(),
            "No data for the selected filters. Adjust the filters."
        );
    }
}
