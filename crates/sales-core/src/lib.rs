//! # Sales Core
//!
//! 판매 대시보드의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 대시보드 전반에서 사용되는 기본 타입을 제공합니다:
//! - 판매 레코드 및 범주형 필드 (상품, 지역, 판매자)
//! - 날짜 범위
//! - 불변 데이터셋 스냅샷
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;
