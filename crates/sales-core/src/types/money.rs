//! 금액 표시를 위한 Decimal 유틸리티.
//!
//! KPI 위젯과 표에서 사용하는 통화/건수/퍼센트 서식을 제공합니다.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal 표시 서식을 위한 확장 트레이트.
pub trait DecimalExt {
    /// 정수로 반올림한 통화 문자열 (예: "$1,234,568").
    fn to_currency_string(&self) -> String;

    /// 소수점 자릿수를 지정한 통화 문자열 (예: "$1,234.50").
    fn to_currency_string_dp(&self, dp: u32) -> String;

    /// 이미 백분율 단위인 값을 문자열로 변환합니다 (예: 12.345 → "12.3%").
    fn to_percentage_string(&self, dp: u32) -> String;
}

impl DecimalExt for Decimal {
    fn to_currency_string(&self) -> String {
        self.to_currency_string_dp(0)
    }

    fn to_currency_string_dp(&self, dp: u32) -> String {
        let rounded = self.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
        let text = format!("{:.*}", dp as usize, rounded.abs());
        let (int_part, frac_part) = match text.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (text.as_str(), None),
        };

        let mut out = String::new();
        if rounded.is_sign_negative() && !rounded.is_zero() {
            out.push('-');
        }
        out.push('$');
        out.push_str(&group_thousands(int_part));
        if let Some(frac) = frac_part {
            out.push('.');
            out.push_str(frac);
        }
        out
    }

    fn to_percentage_string(&self, dp: u32) -> String {
        let rounded = self.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.*}%", dp as usize, rounded)
    }
}

/// 건수를 천 단위 구분자와 함께 표시합니다 (예: 7301 → "7,301").
pub fn format_count(count: usize) -> String {
    group_thousands(&count.to_string())
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
