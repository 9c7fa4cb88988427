//! 필터링 및 집계 파이프라인.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - 필터 엔진 (상품/지역/판매자 멤버십, 포함 날짜 범위)
//! - KPI 계산 (총 매출, 평균, 건수, 전년 대비 성장률)
//! - 상품/지역/판매자별 분해, 월별 추이
//! - 상관행렬, 판매 금액 히스토그램
//! - 데이터 테이블 페이지 나누기
//!
//! 모든 함수는 스냅샷을 읽기만 하는 순수 함수입니다.

pub mod breakdown;
pub mod correlation;
pub mod dashboard;
pub mod distribution;
pub mod filter;
pub mod kpi;
pub mod table;
pub mod trend;

pub use breakdown::{product_totals, region_totals, seller_totals, top_products, CategoryTotal};
pub use correlation::{
    calculate_correlation, calculate_correlation_matrix, sales_correlation, CorrelationMatrix,
};
pub use dashboard::Dashboard;
pub use distribution::{sales_histogram, Histogram, HistogramBin};
pub use filter::{
    apply_filters, resolve_date_range, DateResolution, FilterSelection, FilteredSales,
    DATE_RANGE_WARNING,
};
pub use kpi::{growth_percentage, KpiSummary};
pub use table::{paginate, Page};
pub use trend::{monthly_totals, MonthlyTotal};
