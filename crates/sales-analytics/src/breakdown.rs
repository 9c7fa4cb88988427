//! 상품/지역별 매출 분해.
//!
//! 막대 차트(오름차순), 상위 N 표(내림차순), 파이 차트(점유율)에 쓰이는
//! 범주별 합계를 계산합니다. 필터링된 집합에 등장한 범주만 포함됩니다.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sales_core::SaleRecord;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Display;

use crate::filter::FilteredSales;

/// 범주 하나의 매출 합계.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    /// 범주 이름 (상품명, 지역명)
    pub label: String,
    /// 매출 합계
    pub total: Decimal,
    /// 판매 건수
    pub sales: usize,
    /// 전체 매출 대비 점유율 (%)
    pub share_pct: Decimal,
}

/// 키 함수로 묶어 범주별 합계를 계산합니다 (키 순서).
fn totals_by<K, F>(sales: &FilteredSales<'_>, key: F) -> Vec<CategoryTotal>
where
    K: Ord + Display,
    F: Fn(&SaleRecord) -> K,
{
    let mut groups: BTreeMap<K, (Decimal, usize)> = BTreeMap::new();
    let mut overall = Decimal::ZERO;

    for record in sales.iter() {
        let entry = groups.entry(key(record)).or_insert((Decimal::ZERO, 0));
        entry.0 += record.total();
        entry.1 += 1;
        overall += record.total();
    }

    groups
        .into_iter()
        .map(|(k, (total, count))| CategoryTotal {
            label: k.to_string(),
            total,
            sales: count,
            share_pct: if overall > Decimal::ZERO {
                total / overall * dec!(100)
            } else {
                Decimal::ZERO
            },
        })
        .collect()
}

/// 상품별 매출 합계 (매출 오름차순, 가로 막대 차트 순서).
pub fn product_totals(sales: &FilteredSales<'_>) -> Vec<CategoryTotal> {
    let mut totals = totals_by(sales, |r| r.product());
    totals.sort_by(|a, b| a.total.cmp(&b.total).then_with(|| a.label.cmp(&b.label)));
    totals
}

/// 매출 상위 `n`개 상품 (내림차순).
pub fn top_products(sales: &FilteredSales<'_>, n: usize) -> Vec<CategoryTotal> {
    let mut totals = totals_by(sales, |r| r.product());
    totals.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.label.cmp(&b.label)));
    totals.truncate(n);
    totals
}

/// 지역별 매출 합계와 점유율 (지역 정의 순서).
pub fn region_totals(sales: &FilteredSales<'_>) -> Vec<CategoryTotal> {
    totals_by(sales, |r| r.region())
}

/// 판매자별 매출 합계 (매출 내림차순).
pub fn seller_totals(sales: &FilteredSales<'_>) -> Vec<CategoryTotal> {
    let mut totals = totals_by(sales, |r| r.seller());
    totals.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.label.cmp(&b.label)));
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{apply_filters, FilterSelection};
    use chrono::NaiveDate;
    use sales_core::{Product, Region, SalesDataset, Seller};

    fn dataset() -> SalesDataset {
        let rows = [
            (Product::Laptop, Region::North, 2, dec!(1000)),
            (Product::Mouse, Region::North, 1, dec!(50)),
            (Product::Mouse, Region::South, 4, dec!(50)),
            (Product::Monitor, Region::East, 1, dec!(300)),
            (Product::Keyboard, Region::East, 3, dec!(100)),
        ];
        SalesDataset::new(
            rows.into_iter()
                .enumerate()
                .map(|(i, (p, r, q, price))| {
                    SaleRecord::new(
                        NaiveDate::from_ymd_opt(2023, 1, 1 + i as u32).unwrap(),
                        p,
                        r,
                        q,
                        price,
                        Seller::new(1 + i as u8).unwrap(),
                    )
                    .unwrap()
                })
                .collect(),
        )
    }

    #[test]
    fn test_product_totals_ascending() {
        let data = dataset();
        let filtered = apply_filters(&data, &FilterSelection::all(&data)).unwrap();
        let totals = product_totals(&filtered);

        let labels: Vec<&str> = totals.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["Mouse", "Keyboard", "Monitor", "Laptop"]);
        assert_eq!(totals[0].total, dec!(250));
        assert_eq!(totals[0].sales, 2);
    }

    #[test]
    fn test_top_products_descending_and_truncated() {
        let data = dataset();
        let filtered = apply_filters(&data, &FilterSelection::all(&data)).unwrap();
        let top = top_products(&filtered, 2);

        assert_eq!(top.len(), 2);
        assert_eq!(top[0].label, "Laptop");
        assert_eq!(top[0].total, dec!(2000));
        assert_eq!(top[1].label, "Keyboard");
    }

    #[test]
    fn test_product_sums_equal_overall() {
        let data = dataset();
        let filtered = apply_filters(&data, &FilterSelection::all(&data)).unwrap();
        let overall: Decimal = filtered.iter().map(|r| r.total()).sum();
        let by_product: Decimal = product_totals(&filtered).iter().map(|t| t.total).sum();
        assert_eq!(by_product, overall);
        assert_eq!(overall, dec!(2850));
    }

    #[test]
    fn test_region_shares() {
        let data = dataset();
        let filtered = apply_filters(&data, &FilterSelection::all(&data)).unwrap();
        let regions = region_totals(&filtered);

        let labels: Vec<&str> = regions.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["North", "South", "East"]);

        let share_sum: Decimal = regions.iter().map(|t| t.share_pct).sum();
        assert!((share_sum - dec!(100)).abs() < dec!(0.0001));
        assert_eq!(regions[0].total, dec!(2050));
        assert!(regions.iter().all(|t| t.label != "West"));
    }

    #[test]
    fn test_seller_totals() {
        let data = dataset();
        let filtered = apply_filters(&data, &FilterSelection::all(&data)).unwrap();
        let sellers = seller_totals(&filtered);
        assert_eq!(sellers.len(), 5);
        assert_eq!(sellers[0].label, "Seller_1");
        assert_eq!(sellers[0].total, dec!(2000));
    }
}
