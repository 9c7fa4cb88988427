//! 판매 데이터 생성 및 내보내기.
//!
//! 이 crate는 다음을 제공합니다:
//! - 시드 기반 합성 판매 데이터 생성기 (일별 포아송 건수)
//! - 필터링된 레코드의 CSV 내보내기 및 다시 읽기

pub mod error;
pub mod export;
pub mod generator;

pub use error::{DataError, Result};
pub use export::{read_csv, to_csv_bytes, write_csv, write_csv_file, CSV_HEADER};
pub use generator::{generate_dataset, SalesGenerator};
