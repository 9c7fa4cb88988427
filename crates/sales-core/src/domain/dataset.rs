//! 불변 데이터셋 스냅샷.
//!
//! 세션마다 한 번 생성된 판매 레코드 집합을 보관합니다. 스냅샷은 명시적으로
//! 전달되며 복제 비용이 작습니다 (`Arc` 공유). 필터링은 항상 읽기 전용 뷰를
//! 만들 뿐 스냅샷 자체를 바꾸지 않습니다.

use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

use super::date_range::DateRange;
use super::sale::{Product, Region, SaleRecord, Seller};

/// 판매 레코드 스냅샷.
#[derive(Debug, Clone)]
pub struct SalesDataset {
    records: Arc<[SaleRecord]>,
}

impl SalesDataset {
    /// 레코드 목록으로 스냅샷을 생성합니다.
    pub fn new(records: Vec<SaleRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// 모든 레코드 (생성 순서).
    pub fn records(&self) -> &[SaleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 가장 이른 날짜와 가장 늦은 날짜. 빈 데이터셋이면 `None`.
    pub fn date_bounds(&self) -> Option<DateRange> {
        let mut iter = self.records.iter();
        let first = iter.next()?;
        Some(
            iter.fold(DateRange::single(first.date()), |range, record| {
                range.extended_to(record.date())
            }),
        )
    }

    /// 멀티 선택 위젯에 채울 필터 옵션.
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::from_records(&self.records)
    }
}

impl From<Vec<SaleRecord>> for SalesDataset {
    fn from(records: Vec<SaleRecord>) -> Self {
        Self::new(records)
    }
}

/// 데이터셋에 실제로 등장하는 필터 옵션.
///
/// 각 목록은 처음 등장한 순서를 따릅니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub products: Vec<Product>,
    pub regions: Vec<Region>,
    pub sellers: Vec<Seller>,
    /// 날짜 선택기의 최소/최대 값
    pub date_bounds: Option<DateRange>,
}

impl FilterOptions {
    fn from_records(records: &[SaleRecord]) -> Self {
        let mut options = FilterOptions::default();
        let mut seen_products = HashSet::new();
        let mut seen_regions = HashSet::new();
        let mut seen_sellers = HashSet::new();

        for record in records {
            if seen_products.insert(record.product()) {
                options.products.push(record.product());
            }
            if seen_regions.insert(record.region()) {
                options.regions.push(record.region());
            }
            if seen_sellers.insert(record.seller()) {
                options.sellers.push(record.seller());
            }
            options.date_bounds = Some(match options.date_bounds {
                Some(range) => range.extended_to(record.date()),
                None => DateRange::single(record.date()),
            });
        }

        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn record(day: u32, product: Product, region: Region, seller: u8) -> SaleRecord {
        SaleRecord::new(
            NaiveDate::from_ymd_opt(2023, 1, day).unwrap(),
            product,
            region,
            1,
            dec!(100),
            Seller::new(seller).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = SalesDataset::new(Vec::new());
        assert!(dataset.is_empty());
        assert!(dataset.date_bounds().is_none());
        assert_eq!(dataset.filter_options(), FilterOptions::default());
    }

    #[test]
    fn test_options_in_first_appearance_order() {
        let dataset = SalesDataset::new(vec![
            record(5, Product::Monitor, Region::South, 3),
            record(2, Product::Laptop, Region::South, 1),
            record(9, Product::Monitor, Region::North, 3),
        ]);

        let options = dataset.filter_options();
        assert_eq!(options.products, vec![Product::Monitor, Product::Laptop]);
        assert_eq!(options.regions, vec![Region::South, Region::North]);
        assert_eq!(
            options.sellers,
            vec![Seller::new(3).unwrap(), Seller::new(1).unwrap()]
        );

        let bounds = dataset.date_bounds().unwrap();
        assert_eq!(bounds.start(), NaiveDate::from_ymd_opt(2023, 1, 2).unwrap());
        assert_eq!(bounds.end(), NaiveDate::from_ymd_opt(2023, 1, 9).unwrap());
        assert_eq!(options.date_bounds, Some(bounds));
    }

    #[test]
    fn test_clone_shares_records() {
        let dataset = SalesDataset::new(vec![record(1, Product::Mouse, Region::East, 2)]);
        let copy = dataset.clone();
        assert!(std::ptr::eq(dataset.records(), copy.records()));
    }
}
