//! 대시보드 데이터 조립.
//!
//! 필터 → 집계를 한 번에 수행해 화면에 필요한 모든 뷰를 하나의 직렬화 가능한
//! 값으로 돌려줍니다. 상호작용(필터 변경)마다 처음부터 다시 계산합니다.
//!
//! # 제공 뷰
//!
//! - KPI 위젯
//! - 월별 매출 추이 (선 차트)
//! - 상품별 매출 (가로 막대) 및 상위 N 표
//! - 지역별 매출 (파이/막대)
//! - 판매자별 매출
//! - 판매 금액 분포 (히스토그램)
//! - 수량/단가/금액 상관행렬 (히트맵)

use sales_core::{AppConfig, DateRange, SalesDataset, SalesResult};
use serde::Serialize;
use tracing::{info, instrument};

use crate::breakdown::{product_totals, region_totals, seller_totals, top_products, CategoryTotal};
use crate::correlation::{sales_correlation, CorrelationMatrix};
use crate::distribution::{sales_histogram, Histogram};
use crate::filter::{apply_filters, FilterSelection, FilteredSales};
use crate::kpi::KpiSummary;
use crate::trend::{monthly_totals, MonthlyTotal};

/// 대시보드 전체 뷰 데이터.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    /// 적용된 날짜 범위 (선택이 없으면 None)
    pub date_range: Option<DateRange>,
    pub kpis: KpiSummary,
    pub monthly_trend: Vec<MonthlyTotal>,
    /// 상품별 매출 (오름차순)
    pub product_totals: Vec<CategoryTotal>,
    /// 상위 상품 (내림차순)
    pub top_products: Vec<CategoryTotal>,
    pub region_totals: Vec<CategoryTotal>,
    pub seller_totals: Vec<CategoryTotal>,
    pub histogram: Histogram,
    pub correlation: CorrelationMatrix,
}

impl Dashboard {
    /// 스냅샷에 선택을 적용하고 모든 뷰를 계산합니다.
    ///
    /// 선택 결과가 비면 [`sales_core::SalesError::EmptySelection`]을 반환하며
    /// 아무 뷰도 만들지 않습니다.
    #[instrument(skip_all, fields(records = dataset.len()))]
    pub fn build(
        dataset: &SalesDataset,
        selection: &FilterSelection,
        config: &AppConfig,
    ) -> SalesResult<Self> {
        let filtered = apply_filters(dataset, selection)?;
        let dashboard = Self::from_filtered(&filtered, selection, config);

        info!(
            filtered = filtered.len(),
            revenue = %dashboard.kpis.total_revenue,
            "Dashboard built"
        );

        Ok(dashboard)
    }

    /// 이미 필터링된 레코드로부터 뷰를 계산합니다.
    pub fn from_filtered(
        filtered: &FilteredSales<'_>,
        selection: &FilterSelection,
        config: &AppConfig,
    ) -> Self {
        Self {
            date_range: selection.date_range,
            kpis: KpiSummary::from_sales(filtered, &config.kpi),
            monthly_trend: monthly_totals(filtered),
            product_totals: product_totals(filtered),
            top_products: top_products(filtered, config.dashboard.top_products),
            region_totals: region_totals(filtered),
            seller_totals: seller_totals(filtered),
            histogram: sales_histogram(filtered, config.dashboard.histogram_bins),
            correlation: sales_correlation(filtered),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use sales_core::{Product, Region, SaleRecord, SalesError, Seller};

    fn dataset() -> SalesDataset {
        let mut records = Vec::new();
        for (i, product) in Product::ALL.into_iter().enumerate() {
            for (j, region) in Region::ALL.into_iter().enumerate() {
                records.push(
                    SaleRecord::new(
                        NaiveDate::from_ymd_opt(2023 + (j % 2) as i32, 1 + i as u32, 10).unwrap(),
                        product,
                        region,
                        1 + (i % 5) as u8,
                        Decimal::from(100 + 10 * j as u32),
                        Seller::new(1 + (i + j) as u8).unwrap(),
                    )
                    .unwrap(),
                );
            }
        }
        SalesDataset::new(records)
    }

    #[test]
    fn test_build_full_selection() {
        let data = dataset();
        let config = AppConfig::default();
        let dashboard = Dashboard::build(&data, &FilterSelection::all(&data), &config).unwrap();

        assert_eq!(dashboard.kpis.sale_count, 25);
        assert_eq!(dashboard.product_totals.len(), 5);
        assert_eq!(dashboard.top_products.len(), 5);
        assert_eq!(dashboard.region_totals.len(), 5);
        assert_eq!(dashboard.histogram.observations, 25);
        assert_eq!(dashboard.correlation.observations, 25);

        let by_month: Decimal = dashboard.monthly_trend.iter().map(|m| m.total).sum();
        assert_eq!(by_month, dashboard.kpis.total_revenue);

        let by_product: Decimal = dashboard.product_totals.iter().map(|t| t.total).sum();
        assert_eq!(by_product, dashboard.kpis.total_revenue);
    }

    #[test]
    fn test_build_empty_selection_halts() {
        let data = dataset();
        let selection = FilterSelection::all(&data).with_regions([]);
        let result = Dashboard::build(&data, &selection, &AppConfig::default());
        assert!(matches!(result, Err(SalesError::EmptySelection)));
    }

    #[test]
    fn test_dashboard_serializes_to_json() {
        let data = dataset();
        let selection = FilterSelection::all(&data).with_products([Product::Laptop]);
        let dashboard = Dashboard::build(&data, &selection, &AppConfig::default()).unwrap();

        let json = serde_json::to_value(&dashboard).unwrap();
        assert_eq!(json["kpis"]["sale_count"], 5);
        assert_eq!(json["product_totals"][0]["label"], "Laptop");
        assert_eq!(json["date_range"]["start"], "2023-01-10");
        assert!(dashboard.kpis.total_revenue > dec!(0));
    }
}
