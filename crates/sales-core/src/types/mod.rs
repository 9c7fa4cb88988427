//! 대시보드 전반에서 사용되는 공통 타입.

mod money;

pub use money::*;
