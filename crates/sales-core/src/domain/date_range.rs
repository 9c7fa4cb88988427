//! 포함 날짜 범위.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// 양 끝을 포함하는 날짜 범위. `start <= end`가 항상 성립합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// 두 끝점으로 범위를 생성합니다. 순서가 뒤바뀌어 있으면 정렬합니다.
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// 하루짜리 범위.
    pub fn single(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// 날짜가 범위 안에 있는지 확인합니다 (양 끝 포함).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// 범위에 포함된 일수.
    pub fn num_days(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    /// 범위 안의 모든 날짜를 순서대로 순회합니다.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }

    /// 다른 날짜를 포함하도록 확장한 범위를 반환합니다.
    pub fn extended_to(self, date: NaiveDate) -> Self {
        Self {
            start: self.start.min(date),
            end: self.end.max(date),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ~ {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_orders_endpoints() {
        let range = DateRange::new(date(2024, 5, 1), date(2023, 5, 1));
        assert_eq!(range.start(), date(2023, 5, 1));
        assert_eq!(range.end(), date(2024, 5, 1));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = DateRange::new(date(2023, 1, 1), date(2023, 1, 31));
        assert!(range.contains(date(2023, 1, 1)));
        assert!(range.contains(date(2023, 1, 31)));
        assert!(!range.contains(date(2022, 12, 31)));
        assert!(!range.contains(date(2023, 2, 1)));
    }

    #[test]
    fn test_days_covers_leap_year() {
        let range = DateRange::new(date(2023, 1, 1), date(2024, 12, 31));
        assert_eq!(range.num_days(), 731);
        assert_eq!(range.days().count(), 731);
        assert_eq!(range.days().last(), Some(date(2024, 12, 31)));
    }

    #[test]
    fn test_single_and_extend() {
        let range = DateRange::single(date(2023, 6, 1))
            .extended_to(date(2023, 5, 1))
            .extended_to(date(2023, 7, 1));
        assert_eq!(range, DateRange::new(date(2023, 5, 1), date(2023, 7, 1)));
        assert_eq!(range.to_string(), "2023-05-01 ~ 2023-07-01");
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn endpoints_always_contained(a in 0u64..1_000, b in 0u64..1_000) {
                let origin = date(2023, 1, 1);
                let (x, y) = (origin + chrono::Days::new(a), origin + chrono::Days::new(b));
                let range = DateRange::new(x, y);

                prop_assert!(range.start() <= range.end());
                prop_assert!(range.contains(x) && range.contains(y));
                prop_assert_eq!(range.days().count(), range.num_days());
            }
        }
    }
}
