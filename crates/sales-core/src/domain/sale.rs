//! 판매 레코드와 범주형 필드.
//!
//! [`SaleRecord`]는 생성 후 변경되지 않으며, 생성자를 통해서만 만들어지므로
//! `total == quantity × unit_price` 불변식이 항상 성립합니다.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{SalesError, SalesResult};

/// 판매 상품.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Product {
    Laptop,
    Mouse,
    Keyboard,
    Monitor,
    Headphones,
}

impl Product {
    /// 전체 상품 목록 (생성기 샘플링 순서).
    pub const ALL: [Product; 5] = [
        Product::Laptop,
        Product::Mouse,
        Product::Keyboard,
        Product::Monitor,
        Product::Headphones,
    ];

    /// 표시용 이름.
    pub fn label(&self) -> &'static str {
        match self {
            Product::Laptop => "Laptop",
            Product::Mouse => "Mouse",
            Product::Keyboard => "Keyboard",
            Product::Monitor => "Monitor",
            Product::Headphones => "Headphones",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Product {
    type Err = SalesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Product::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SalesError::InvalidInput(format!("Unknown product: {}", s)))
    }
}

/// 판매 지역.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    North,
    South,
    East,
    West,
    Central,
}

impl Region {
    /// 전체 지역 목록 (생성기 샘플링 순서).
    pub const ALL: [Region; 5] = [
        Region::North,
        Region::South,
        Region::East,
        Region::West,
        Region::Central,
    ];

    /// 표시용 이름.
    pub fn label(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
            Region::Central => "Central",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Region {
    type Err = SalesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SalesError::InvalidInput(format!("Unknown region: {}", s)))
    }
}

/// 판매자 (`Seller_1` ~ `Seller_20`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Seller(u8);

impl Seller {
    /// 판매자 수.
    pub const COUNT: u8 = 20;

    const PREFIX: &'static str = "Seller_";

    /// 번호(1부터)로 판매자를 생성합니다.
    pub fn new(number: u8) -> SalesResult<Self> {
        if (1..=Self::COUNT).contains(&number) {
            Ok(Self(number))
        } else {
            Err(SalesError::InvalidInput(format!(
                "Seller number must be within 1..={}, got {}",
                Self::COUNT,
                number
            )))
        }
    }

    /// 판매자 번호.
    pub fn number(&self) -> u8 {
        self.0
    }

    /// 전체 판매자 목록.
    pub fn all() -> Vec<Seller> {
        (1..=Self::COUNT).map(Seller).collect()
    }
}

impl fmt::Display for Seller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

/// `Seller_7` 또는 `7` 형식을 모두 허용합니다.
impl FromStr for Seller {
    type Err = SalesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = match trimmed.get(..Self::PREFIX.len()) {
            Some(prefix) if prefix.eq_ignore_ascii_case(Self::PREFIX) => {
                &trimmed[Self::PREFIX.len()..]
            }
            _ => trimmed,
        };
        let number = digits
            .parse::<u8>()
            .map_err(|_| SalesError::InvalidInput(format!("Unknown seller: {}", s)))?;
        Seller::new(number)
    }
}

impl TryFrom<String> for Seller {
    type Error = SalesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Seller> for String {
    fn from(seller: Seller) -> Self {
        seller.to_string()
    }
}

/// 판매 레코드.
///
/// 직렬화 필드 순서가 곧 CSV 헤더 순서입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSaleRecord")]
pub struct SaleRecord {
    date: NaiveDate,
    product: Product,
    region: Region,
    quantity: u8,
    #[serde(with = "rust_decimal::serde::str")]
    unit_price: Decimal,
    seller: Seller,
    #[serde(with = "rust_decimal::serde::str")]
    total: Decimal,
}

impl SaleRecord {
    /// 새 판매 레코드를 생성합니다. `total`은 여기서 계산됩니다.
    pub fn new(
        date: NaiveDate,
        product: Product,
        region: Region,
        quantity: u8,
        unit_price: Decimal,
        seller: Seller,
    ) -> SalesResult<Self> {
        if quantity == 0 {
            return Err(SalesError::InvalidInput(
                "quantity must be at least 1".to_string(),
            ));
        }
        if unit_price <= Decimal::ZERO {
            return Err(SalesError::InvalidInput(format!(
                "unit price must be positive, got {}",
                unit_price
            )));
        }

        Ok(Self {
            date,
            product,
            region,
            quantity,
            unit_price,
            seller,
            total: Decimal::from(quantity) * unit_price,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn product(&self) -> Product {
        self.product
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn quantity(&self) -> u8 {
        self.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn seller(&self) -> Seller {
        self.seller
    }

    /// 판매 금액 (수량 × 단가).
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// 판매 연도.
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// 판매 월 (1-12).
    pub fn month(&self) -> u32 {
        self.date.month()
    }
}

/// 역직렬화 중간 형태. 불변식 검증 후 [`SaleRecord`]로 변환됩니다.
#[derive(Debug, Deserialize)]
struct RawSaleRecord {
    date: NaiveDate,
    product: Product,
    region: Region,
    quantity: u8,
    #[serde(with = "rust_decimal::serde::str")]
    unit_price: Decimal,
    seller: Seller,
    #[serde(with = "rust_decimal::serde::str")]
    total: Decimal,
}

impl TryFrom<RawSaleRecord> for SaleRecord {
    type Error = SalesError;

    fn try_from(raw: RawSaleRecord) -> Result<Self, Self::Error> {
        let record = SaleRecord::new(
            raw.date,
            raw.product,
            raw.region,
            raw.quantity,
            raw.unit_price,
            raw.seller,
        )?;

        if record.total != raw.total {
            return Err(SalesError::InvalidInput(format!(
                "total {} does not equal quantity {} x unit price {}",
                raw.total, raw.quantity, raw.unit_price
            )));
        }

        Ok(record)
    }
}
