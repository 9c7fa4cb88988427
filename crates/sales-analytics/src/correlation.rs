//! 수량/단가/판매 금액 상관행렬 (히트맵).
//!
//! 금액 = 수량 × 단가이므로 금액은 두 변수 모두와 양의 상관을 보이고,
//! 독립적으로 샘플링된 수량과 단가 사이는 0 근처가 정상입니다.

use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::filter::FilteredSales;

/// 판매 상관행렬의 변수 순서.
pub const SALES_VARIABLES: [&str; 3] = ["quantity", "unit_price", "total"];

/// 대칭 상관행렬.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    /// 행/열 이름
    pub variables: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
    pub observations: usize,
}

impl CorrelationMatrix {
    /// 변수 이름으로 계수를 찾습니다.
    pub fn get(&self, row: &str, col: &str) -> Option<f64> {
        let index = |name: &str| self.variables.iter().position(|v| v == name);
        Some(self.matrix[index(row)?][index(col)?])
    }
}

/// 두 열의 1차/2차 적률을 한 번에 누적합니다.
#[derive(Default)]
struct CoMoments {
    n: f64,
    mean_x: f64,
    mean_y: f64,
    m2_x: f64,
    m2_y: f64,
    c_xy: f64,
}

impl CoMoments {
    fn push(&mut self, x: f64, y: f64) {
        self.n += 1.0;
        let dx = x - self.mean_x;
        self.mean_x += dx / self.n;
        let dy = y - self.mean_y;
        self.mean_y += dy / self.n;
        self.m2_x += dx * (x - self.mean_x);
        self.m2_y += dy * (y - self.mean_y);
        self.c_xy += dx * (y - self.mean_y);
    }

    fn pearson(&self) -> Option<f64> {
        if self.n < 2.0 || self.m2_x <= 0.0 || self.m2_y <= 0.0 {
            return None;
        }
        Some((self.c_xy / (self.m2_x * self.m2_y).sqrt()).clamp(-1.0, 1.0))
    }
}

/// Pearson 상관계수.
///
/// 길이가 다르거나 관측치가 2개 미만이거나 한쪽 분산이 0이면 `None`.
pub fn calculate_correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() {
        return None;
    }
    let moments = x.iter().zip(y).fold(CoMoments::default(), |mut acc, (a, b)| {
        acc.push(*a, *b);
        acc
    });
    moments.pearson()
}

/// 이름 붙은 열들의 상관행렬. 열이 없으면 `None`.
///
/// 대각선은 1.0, 정의되지 않는 계수는 0.0입니다.
pub fn calculate_correlation_matrix(columns: &[(&str, Vec<f64>)]) -> Option<CorrelationMatrix> {
    let observations = columns.iter().map(|(_, values)| values.len()).min()?;

    let matrix = columns
        .iter()
        .enumerate()
        .map(|(i, (_, row))| {
            columns
                .iter()
                .enumerate()
                .map(|(j, (_, col))| {
                    if i == j {
                        1.0
                    } else {
                        calculate_correlation(row, col).unwrap_or(0.0)
                    }
                })
                .collect()
        })
        .collect();

    Some(CorrelationMatrix {
        variables: columns.iter().map(|(name, _)| name.to_string()).collect(),
        matrix,
        observations,
    })
}

/// 필터링된 판매의 수량/단가/금액 3×3 상관행렬.
pub fn sales_correlation(sales: &FilteredSales<'_>) -> CorrelationMatrix {
    let column = |value: fn(&sales_core::SaleRecord) -> f64| -> Vec<f64> {
        sales.iter().map(value).collect()
    };

    let columns = [
        (SALES_VARIABLES[0], column(|r| f64::from(r.quantity()))),
        (SALES_VARIABLES[1], column(|r| r.unit_price().to_f64().unwrap_or(0.0))),
        (SALES_VARIABLES[2], column(|r| r.total().to_f64().unwrap_or(0.0))),
    ];

    calculate_correlation_matrix(&columns).unwrap_or_else(|| CorrelationMatrix {
        variables: SALES_VARIABLES.iter().map(|v| v.to_string()).collect(),
        matrix: vec![vec![0.0; 3]; 3],
        observations: 0,
    })
}
