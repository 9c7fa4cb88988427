//! 월별 매출 추이.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::filter::FilteredSales;

/// 한 달의 매출 합계 (선 차트 포인트).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyTotal {
    /// X축 레이블 (`YYYY-MM`)
    pub period: String,
    /// 연도
    pub year: i32,
    /// 월 (1-12)
    pub month: u32,
    /// 매출 합계
    pub total: Decimal,
    /// 판매 건수
    pub sales: usize,
}

/// 달력 월 단위로 매출을 합산합니다 (시간순).
///
/// 판매가 없는 달은 포함되지 않습니다.
pub fn monthly_totals(sales: &FilteredSales<'_>) -> Vec<MonthlyTotal> {
    let mut months: BTreeMap<(i32, u32), (Decimal, usize)> = BTreeMap::new();

    for record in sales.iter() {
        let entry = months
            .entry((record.year(), record.month()))
            .or_insert((Decimal::ZERO, 0));
        entry.0 += record.total();
        entry.1 += 1;
    }

    months
        .into_iter()
        .map(|((year, month), (total, count))| MonthlyTotal {
            period: format!("{:04}-{:02}", year, month),
            year,
            month,
            total,
            sales: count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{apply_filters, FilterSelection};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use sales_core::{Product, Region, SaleRecord, SalesDataset, Seller};

    fn record(y: i32, m: u32, d: u32, price: Decimal) -> SaleRecord {
        SaleRecord::new(
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            Product::Mouse,
            Region::Central,
            1,
            price,
            Seller::new(2).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_monthly_grouping_is_chronological() {
        let dataset = SalesDataset::new(vec![
            record(2024, 1, 5, dec!(10)),
            record(2023, 12, 31, dec!(20)),
            record(2023, 12, 1, dec!(30)),
            record(2023, 2, 14, dec!(40)),
        ]);
        let filtered = apply_filters(&dataset, &FilterSelection::all(&dataset)).unwrap();
        let months = monthly_totals(&filtered);

        let periods: Vec<&str> = months.iter().map(|m| m.period.as_str()).collect();
        assert_eq!(periods, vec!["2023-02", "2023-12", "2024-01"]);
        assert_eq!(months[1].total, dec!(50));
        assert_eq!(months[1].sales, 2);

        let sum: Decimal = months.iter().map(|m| m.total).sum();
        assert_eq!(sum, dec!(100));
    }
}
