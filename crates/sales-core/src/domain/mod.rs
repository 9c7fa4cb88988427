//! 판매 대시보드를 위한 도메인 모델.

mod dataset;
mod date_range;
mod sale;

pub use dataset::*;
pub use date_range::*;
pub use sale::*;
