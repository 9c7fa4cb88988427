//! 개별 판매 금액 분포 (히스토그램).

use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::filter::FilteredSales;

/// 히스토그램 구간 하나. `[lower, upper)`, 마지막 구간만 `[lower, upper]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// 등폭 히스토그램.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
    /// 전체 관측치 수 (구간 count 합과 같음)
    pub observations: usize,
}

impl Histogram {
    /// 값 목록으로 `bin_count`개 등폭 구간의 히스토그램을 만듭니다.
    ///
    /// 최솟값과 최댓값 사이를 나눕니다. 모든 값이 같으면 구간 하나에 모읍니다.
    /// 유한하지 않은 값은 무시합니다.
    pub fn from_values(values: &[f64], bin_count: usize) -> Self {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() {
            return Self {
                bins: Vec::new(),
                observations: 0,
            };
        }

        let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let bin_count = if max > min { bin_count.max(1) } else { 1 };
        let width = (max - min) / bin_count as f64;

        let mut bins: Vec<HistogramBin> = (0..bin_count)
            .map(|i| HistogramBin {
                lower: min + width * i as f64,
                upper: if i + 1 == bin_count {
                    max
                } else {
                    min + width * (i + 1) as f64
                },
                count: 0,
            })
            .collect();

        for value in &finite {
            let index = if width > 0.0 {
                (((value - min) / width) as usize).min(bin_count - 1)
            } else {
                0
            };
            bins[index].count += 1;
        }

        Self {
            bins,
            observations: finite.len(),
        }
    }

    /// 가장 많은 관측치를 가진 구간.
    pub fn mode_bin(&self) -> Option<&HistogramBin> {
        self.bins.iter().max_by_key(|b| b.count)
    }
}

/// 판매 금액(`total`)의 히스토그램.
pub fn sales_histogram(sales: &FilteredSales<'_>, bin_count: usize) -> Histogram {
    let totals: Vec<f64> = sales
        .iter()
        .filter_map(|record| record.total().to_f64())
        .collect();
    Histogram::from_values(&totals, bin_count)
}
