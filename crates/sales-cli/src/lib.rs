//! 판매 대시보드 CLI.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - 사용자 필터 입력 해석 및 세션 관리
//! - 대시보드 KPI/분해/추이 출력
//! - 필터링된 데이터 CSV 내보내기
//! - 원본 데이터 테이블 페이지 조회

pub mod commands;
pub mod session;

pub use commands::{parse_date, write_output, FilterArgs, OutputFormat};
pub use session::{DashboardSession, FilterRequest, ResolvedSelection};
