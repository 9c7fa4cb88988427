//! 필터 엔진.
//!
//! 데이터셋 스냅샷을 사용자가 선택한 상품, 지역, 판매자, 날짜 범위로
//! 좁힙니다. 차원 간에는 AND, 범주형 필드는 멤버십 검사, 날짜는 양 끝을
//! 포함하는 범위 검사입니다.
//!
//! 결과가 비면 [`SalesError::EmptySelection`]을 반환하므로, 이후 집계
//! 함수는 항상 비어 있지 않은 집합을 받습니다.

use chrono::NaiveDate;
use sales_core::{
    DateRange, Product, Region, SaleRecord, SalesDataset, SalesError, SalesResult, Seller,
};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// 날짜 선택기 경고 메시지.
pub const DATE_RANGE_WARNING: &str = "Select a range of two dates.";

/// 날짜 범위 해석 결과.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateResolution {
    /// 적용할 범위
    pub range: DateRange,
    /// 전체 기간으로 대체된 경우의 경고
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// 사용자가 입력한 날짜 끝점을 포함 범위로 해석합니다.
///
/// 끝점이 정확히 두 개면 그 범위(이른 날짜가 시작)를 사용합니다.
/// 그 외에는 `bounds` 전체 기간으로 대체하고 경고를 함께 반환합니다.
pub fn resolve_date_range(endpoints: &[NaiveDate], bounds: DateRange) -> DateResolution {
    match endpoints {
        [a, b] => DateResolution {
            range: DateRange::new(*a, *b),
            warning: None,
        },
        _ => {
            warn!(
                endpoints = endpoints.len(),
                fallback = %bounds,
                "Date range needs exactly two endpoints, using full span"
            );
            DateResolution {
                range: bounds,
                warning: Some(DATE_RANGE_WARNING.to_string()),
            }
        }
    }
}

/// 활성 필터 선택.
///
/// 빈 집합은 "아무것도 선택하지 않음"을 뜻하므로 어떤 레코드와도 일치하지 않습니다.
/// `date_range`가 `None`이면 날짜 제한이 없습니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    pub products: BTreeSet<Product>,
    pub regions: BTreeSet<Region>,
    pub sellers: BTreeSet<Seller>,
    pub date_range: Option<DateRange>,
}

impl FilterSelection {
    /// 대시보드 기본 선택: 데이터셋의 모든 옵션과 전체 기간.
    pub fn all(dataset: &SalesDataset) -> Self {
        let options = dataset.filter_options();
        Self {
            products: options.products.into_iter().collect(),
            regions: options.regions.into_iter().collect(),
            sellers: options.sellers.into_iter().collect(),
            date_range: options.date_bounds,
        }
    }

    /// 상품 선택을 교체합니다.
    pub fn with_products(mut self, products: impl IntoIterator<Item = Product>) -> Self {
        self.products = products.into_iter().collect();
        self
    }

    /// 지역 선택을 교체합니다.
    pub fn with_regions(mut self, regions: impl IntoIterator<Item = Region>) -> Self {
        self.regions = regions.into_iter().collect();
        self
    }

    /// 판매자 선택을 교체합니다.
    pub fn with_sellers(mut self, sellers: impl IntoIterator<Item = Seller>) -> Self {
        self.sellers = sellers.into_iter().collect();
        self
    }

    /// 날짜 범위를 교체합니다.
    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    /// 레코드가 모든 활성 조건을 만족하는지 확인합니다.
    pub fn matches(&self, record: &SaleRecord) -> bool {
        self.products.contains(&record.product())
            && self.regions.contains(&record.region())
            && self.sellers.contains(&record.seller())
            && self
                .date_range
                .map_or(true, |range| range.contains(record.date()))
    }
}

/// 필터링된 판매 레코드의 읽기 전용 뷰. 항상 하나 이상의 레코드를 담습니다.
#[derive(Debug, Clone)]
pub struct FilteredSales<'a> {
    records: Vec<&'a SaleRecord>,
}

impl<'a> FilteredSales<'a> {
    /// 필터링된 레코드 (원본 순서 유지).
    pub fn records(&self) -> &[&'a SaleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// 항상 `false`. 빈 결과는 생성 단계에서 에러가 됩니다.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 레코드 반복자.
    pub fn iter(&self) -> impl Iterator<Item = &'a SaleRecord> + '_ {
        self.records.iter().copied()
    }
}

/// 데이터셋에 선택을 적용합니다.
///
/// 일치하는 레코드가 없으면 [`SalesError::EmptySelection`]을 반환합니다.
pub fn apply_filters<'a>(
    dataset: &'a SalesDataset,
    selection: &FilterSelection,
) -> SalesResult<FilteredSales<'a>> {
    let records: Vec<&SaleRecord> = dataset
        .records()
        .iter()
        .filter(|record| selection.matches(record))
        .collect();

    debug!(
        input = dataset.len(),
        output = records.len(),
        "Filters applied"
    );

    if records.is_empty() {
        return Err(SalesError::EmptySelection);
    }

    Ok(FilteredSales { records })
}
