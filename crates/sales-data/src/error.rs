//! 데이터 모듈 오류 타입.

use sales_core::SalesError;
use thiserror::Error;

/// 데이터 생성 및 CSV 처리 관련 오류.
#[derive(Debug, Error)]
pub enum DataError {
    /// 생성기 설정 오류
    #[error("Invalid generator configuration: {0}")]
    InvalidConfig(String),

    /// 불변식을 만족하지 않는 레코드
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// CSV 인코딩/디코딩 오류
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<DataError> for SalesError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::InvalidConfig(msg) => SalesError::Config(msg),
            DataError::InvalidRecord(msg) => SalesError::InvalidInput(msg),
            DataError::Csv(e) => SalesError::Csv(e.to_string()),
            DataError::Io(e) => SalesError::Io(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, DataError>;
