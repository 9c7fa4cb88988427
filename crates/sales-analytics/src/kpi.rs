//! 핵심 지표(KPI) 계산.
//!
//! - 총 매출: 판매 금액 합계
//! - 건당 평균 매출
//! - 판매 건수
//! - 전년 대비 성장률: `(올해 합계 / 기준연도 합계 − 1) × 100`

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sales_core::{DecimalExt, KpiConfig};
use serde::Serialize;

use crate::filter::FilteredSales;

/// KPI 위젯 값 묶음.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpiSummary {
    /// 총 매출
    pub total_revenue: Decimal,
    /// 건당 평균 매출
    pub average_sale: Decimal,
    /// 판매 건수
    pub sale_count: usize,
    /// 비교 연도 매출
    pub current_year_revenue: Decimal,
    /// 기준 연도 매출
    pub base_year_revenue: Decimal,
    /// 전년 대비 성장률 (%)
    pub growth_pct: Decimal,
    pub current_year: i32,
    pub base_year: i32,
}

impl KpiSummary {
    /// 필터링된 레코드로부터 KPI를 계산합니다.
    pub fn from_sales(sales: &FilteredSales<'_>, config: &KpiConfig) -> Self {
        let mut total_revenue = Decimal::ZERO;
        let mut current_year_revenue = Decimal::ZERO;
        let mut base_year_revenue = Decimal::ZERO;

        for record in sales.iter() {
            total_revenue += record.total();
            if record.year() == config.current_year {
                current_year_revenue += record.total();
            } else if record.year() == config.base_year {
                base_year_revenue += record.total();
            }
        }

        let sale_count = sales.len();
        let average_sale = if sale_count > 0 {
            total_revenue / Decimal::from(sale_count)
        } else {
            Decimal::ZERO
        };

        Self {
            total_revenue,
            average_sale,
            sale_count,
            current_year_revenue,
            base_year_revenue,
            growth_pct: growth_percentage(current_year_revenue, base_year_revenue),
            current_year: config.current_year,
            base_year: config.base_year,
        }
    }

    /// 위젯 표시용 문자열 (라벨, 값) 목록.
    pub fn display_rows(&self) -> Vec<(String, String)> {
        vec![
            ("Total Sales".to_string(), self.total_revenue.to_currency_string()),
            ("Average Sale".to_string(), self.average_sale.to_currency_string()),
            (
                "Number of Sales".to_string(),
                sales_core::format_count(self.sale_count),
            ),
            (
                format!("Growth {} vs {}", self.current_year, self.base_year),
                self.growth_pct.to_percentage_string(1),
            ),
        ]
    }
}

/// 성장률 (%)을 계산합니다.
///
/// 기준값이 0 이하이면 0을 반환합니다.
pub fn growth_percentage(current: Decimal, base: Decimal) -> Decimal {
    if base > Decimal::ZERO {
        (current / base - Decimal::ONE) * dec!(100)
    } else {
        Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{apply_filters, FilterSelection};
    use chrono::NaiveDate;
    use sales_core::{Product, Region, SaleRecord, SalesDataset, Seller};

    fn record(year: i32, quantity: u8, price: Decimal) -> SaleRecord {
        SaleRecord::new(
            NaiveDate::from_ymd_opt(year, 5, 10).unwrap(),
            Product::Laptop,
            Region::West,
            quantity,
            price,
            Seller::new(1).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_growth_percentage() {
        assert_eq!(growth_percentage(dec!(150), dec!(100)), dec!(50));
        assert_eq!(growth_percentage(dec!(80), dec!(100)), dec!(-20));
        assert_eq!(growth_percentage(dec!(500), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_kpis() {
        let dataset = SalesDataset::new(vec![
            record(2023, 1, dec!(100)),
            record(2023, 1, dec!(100)),
            record(2024, 3, dec!(100)),
        ]);
        let filtered = apply_filters(&dataset, &FilterSelection::all(&dataset)).unwrap();
        let kpis = KpiSummary::from_sales(&filtered, &KpiConfig::default());

        assert_eq!(kpis.total_revenue, dec!(500));
        assert_eq!(kpis.sale_count, 3);
        assert_eq!(kpis.average_sale.round_dp(4), dec!(166.6667));
        assert_eq!(kpis.base_year_revenue, dec!(200));
        assert_eq!(kpis.current_year_revenue, dec!(300));
        assert_eq!(kpis.growth_pct, dec!(50));
    }

    #[test]
    fn test_growth_zero_without_base_year() {
        let dataset = SalesDataset::new(vec![record(2024, 2, dec!(75))]);
        let filtered = apply_filters(&dataset, &FilterSelection::all(&dataset)).unwrap();
        let kpis = KpiSummary::from_sales(&filtered, &KpiConfig::default());

        assert_eq!(kpis.base_year_revenue, Decimal::ZERO);
        assert_eq!(kpis.growth_pct, Decimal::ZERO);
    }

    #[test]
    fn test_display_rows() {
        let dataset = SalesDataset::new(vec![
            record(2023, 5, dec!(1000)),
            record(2024, 5, dec!(1100)),
        ]);
        let filtered = apply_filters(&dataset, &FilterSelection::all(&dataset)).unwrap();
        let rows = KpiSummary::from_sales(&filtered, &KpiConfig::default()).display_rows();

        assert_eq!(rows[0], ("Total Sales".to_string(), "$10,500".to_string()));
        assert_eq!(rows[1], ("Average Sale".to_string(), "$5,250".to_string()));
        assert_eq!(rows[2], ("Number of Sales".to_string(), "2".to_string()));
        assert_eq!(
            rows[3],
            ("Growth 2024 vs 2023".to_string(), "10.0%".to_string())
        );
    }
}
