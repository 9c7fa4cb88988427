//! 원본 데이터 테이블 페이지 나누기.

use sales_core::SaleRecord;
use serde::Serialize;

use crate::filter::FilteredSales;

/// 데이터 테이블의 한 페이지.
#[derive(Debug, Clone, Serialize)]
pub struct Page<'a> {
    /// 페이지 번호 (1부터)
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_records: usize,
    pub records: Vec<&'a SaleRecord>,
}

impl Page<'_> {
    /// 다음 페이지가 있는지 확인합니다.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// 필터링된 레코드에서 `page`번째 페이지(1부터)를 잘라냅니다.
///
/// 범위를 벗어난 페이지는 빈 레코드 목록을 돌려줍니다. `page_size`가 0이면 1로 취급합니다.
pub fn paginate<'a>(sales: &FilteredSales<'a>, page: usize, page_size: usize) -> Page<'a> {
    let page_size = page_size.max(1);
    let total_records = sales.len();
    let total_pages = total_records.div_ceil(page_size);

    let records = if page == 0 || page > total_pages {
        Vec::new()
    } else {
        sales
            .records()
            .iter()
            .skip((page - 1) * page_size)
            .take(page_size)
            .copied()
            .collect()
    };

    Page {
        page,
        page_size,
        total_pages,
        total_records,
        records,
    }
}
