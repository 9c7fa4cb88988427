//! 대시보드 세션.
//!
//! 한 번의 CLI 호출이 하나의 상호작용 사이클입니다. 세션은 생성된 데이터셋
//! 스냅샷과 설정을 들고 있고, 사용자 입력을 [`FilterSelection`]으로 바꿔
//! 필터 → 집계 파이프라인에 넘깁니다.

use chrono::NaiveDate;
use sales_analytics::{
    apply_filters, paginate, resolve_date_range, Dashboard, FilterSelection, FilteredSales, Page,
};
use sales_core::{
    AppConfig, FilterOptions, Product, Region, SalesDataset, SalesError, SalesResult, Seller,
};
use sales_data::{generate_dataset, to_csv_bytes};
use std::str::FromStr;
use tracing::{debug, info};

/// 사용자가 입력한 원시 필터 값.
///
/// 비어 있는 범주 목록은 "전체 선택"(대시보드 기본값)을 뜻합니다.
#[derive(Debug, Clone, Default)]
pub struct FilterRequest {
    pub products: Vec<String>,
    pub regions: Vec<String>,
    pub sellers: Vec<String>,
    /// 날짜 선택기 끝점. 비어 있으면 전체 기간.
    pub dates: Vec<NaiveDate>,
}

/// 해석이 끝난 선택과 사용자에게 보여줄 경고.
#[derive(Debug, Clone)]
pub struct ResolvedSelection {
    pub selection: FilterSelection,
    pub warning: Option<String>,
}

/// 데이터셋 스냅샷을 보유한 세션.
#[derive(Debug, Clone)]
pub struct DashboardSession {
    config: AppConfig,
    dataset: SalesDataset,
}

impl DashboardSession {
    /// 설정의 생성기 파라미터로 데이터셋을 생성해 세션을 엽니다.
    pub fn new(config: AppConfig) -> SalesResult<Self> {
        let dataset = generate_dataset(&config.generator)?;
        info!(records = dataset.len(), seed = config.generator.seed, "Session opened");
        Ok(Self { config, dataset })
    }

    /// 이미 만들어진 스냅샷으로 세션을 엽니다.
    pub fn from_dataset(config: AppConfig, dataset: SalesDataset) -> Self {
        Self { config, dataset }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn dataset(&self) -> &SalesDataset {
        &self.dataset
    }

    /// 필터 위젯에 채울 선택지.
    pub fn options(&self) -> FilterOptions {
        self.dataset.filter_options()
    }

    /// 원시 입력을 선택으로 해석합니다.
    ///
    /// 알 수 없는 상품/지역/판매자는 [`SalesError::InvalidInput`]입니다.
    /// 날짜 끝점이 두 개가 아니면 전체 기간으로 대체하고 경고를 돌려줍니다.
    pub fn resolve(&self, request: &FilterRequest) -> SalesResult<ResolvedSelection> {
        let mut selection = FilterSelection::all(&self.dataset);
        let mut warning = None;

        if !request.products.is_empty() {
            selection = selection.with_products(parse_all::<Product>(&request.products)?);
        }
        if !request.regions.is_empty() {
            selection = selection.with_regions(parse_all::<Region>(&request.regions)?);
        }
        if !request.sellers.is_empty() {
            selection = selection.with_sellers(parse_all::<Seller>(&request.sellers)?);
        }

        if !request.dates.is_empty() {
            let bounds = self.dataset.date_bounds().ok_or(SalesError::EmptySelection)?;
            let resolution = resolve_date_range(&request.dates, bounds);
            selection = selection.with_date_range(resolution.range);
            warning = resolution.warning;
        }

        debug!(?selection, "Selection resolved");
        Ok(ResolvedSelection { selection, warning })
    }

    /// 선택을 적용한 필터링 결과.
    pub fn filter(&self, selection: &FilterSelection) -> SalesResult<FilteredSales<'_>> {
        apply_filters(&self.dataset, selection)
    }

    /// 대시보드 전체 뷰.
    pub fn dashboard(&self, selection: &FilterSelection) -> SalesResult<Dashboard> {
        Dashboard::build(&self.dataset, selection, &self.config)
    }

    /// 필터링된 레코드를 CSV 바이트로 직렬화합니다.
    pub fn export_csv(&self, selection: &FilterSelection) -> SalesResult<Vec<u8>> {
        let filtered = self.filter(selection)?;
        Ok(to_csv_bytes(filtered.iter())?)
    }

    /// 데이터 테이블의 한 페이지. `page_size`가 없으면 설정값을 사용합니다.
    pub fn page(
        &self,
        selection: &FilterSelection,
        page: usize,
        page_size: Option<usize>,
    ) -> SalesResult<Page<'_>> {
        let filtered = self.filter(selection)?;
        let page_size = page_size.unwrap_or(self.config.dashboard.page_size);
        Ok(paginate(&filtered, page, page_size))
    }
}

fn parse_all<T>(values: &[String]) -> SalesResult<Vec<T>>
where
    T: FromStr<Err = SalesError>,
{
    values.iter().map(|value| value.parse()).collect()
}
