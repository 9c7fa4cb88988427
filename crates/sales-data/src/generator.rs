//! 합성 판매 데이터 생성기.
//!
//! 고정된 기간의 각 날짜마다 포아송 분포(기본 평균 10)로 판매 건수를 뽑고,
//! 건마다 상품, 지역, 수량, 단가, 판매자를 이 순서로 샘플링합니다.
//! 같은 시드와 설정이면 항상 같은 데이터셋이 나옵니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use sales_core::GeneratorConfig;
//! use sales_data::generate_dataset;
//!
//! let dataset = generate_dataset(&GeneratorConfig::default())?;
//! println!("{} sales", dataset.len());
//! ```

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Poisson};
use rust_decimal::{Decimal, RoundingStrategy};
use sales_core::{DateRange, GeneratorConfig, Product, Region, SaleRecord, SalesDataset, Seller};
use tracing::{debug, info, instrument};

use crate::error::{DataError, Result};

/// 단가 소수점 자릿수 (센트 단위).
const PRICE_SCALE: u32 = 2;

/// 사전 할당 상한 (레코드 수).
const MAX_CAPACITY_HINT: usize = 1 << 20;

/// 시드 기반 판매 레코드 생성기.
pub struct SalesGenerator {
    config: GeneratorConfig,
    rng: StdRng,
    daily_sales: Poisson<f64>,
    /// `price_max`보다 작은 가장 큰 센트 값
    price_ceiling: Decimal,
}

impl SalesGenerator {
    /// 설정을 검증하고 생성기를 만듭니다.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| DataError::InvalidConfig(e.to_string()))?;

        let daily_sales = Poisson::new(config.mean_daily_sales)
            .map_err(|e| DataError::InvalidConfig(format!("poisson mean: {}", e)))?;

        let price_ceiling = price_ceiling(config.price_max).ok_or_else(|| {
            DataError::InvalidConfig(format!("unrepresentable price max {}", config.price_max))
        })?;

        Ok(Self {
            rng: StdRng::seed_from_u64(config.seed),
            config,
            daily_sales,
            price_ceiling,
        })
    }

    /// 생성 기간.
    pub fn period(&self) -> DateRange {
        DateRange::new(self.config.start_date, self.config.end_date)
    }

    /// 하루치 판매 레코드를 생성합니다.
    pub fn generate_day(&mut self, date: NaiveDate) -> Result<Vec<SaleRecord>> {
        let count: f64 = self.daily_sales.sample(&mut self.rng);
        let count = count as usize;

        let mut records = Vec::with_capacity(count);
        for _ in 0..count {
            records.push(self.generate_record(date)?);
        }
        Ok(records)
    }

    fn generate_record(&mut self, date: NaiveDate) -> Result<SaleRecord> {
        let product = Product::ALL[self.rng.gen_range(0..Product::ALL.len())];
        let region = Region::ALL[self.rng.gen_range(0..Region::ALL.len())];
        let quantity = self.rng.gen_range(1..=self.config.max_quantity);
        let price = self
            .rng
            .gen_range(self.config.price_min..self.config.price_max);
        let seller = Seller::new(self.rng.gen_range(1..=Seller::COUNT))
            .map_err(|e| DataError::InvalidRecord(e.to_string()))?;

        // 반올림이 상한에 닿으면 한 센트 아래로
        let unit_price = Decimal::from_f64_retain(price)
            .map(|p| p.round_dp(PRICE_SCALE).min(self.price_ceiling))
            .ok_or_else(|| DataError::InvalidRecord(format!("unrepresentable price {}", price)))?;

        SaleRecord::new(date, product, region, quantity, unit_price, seller)
            .map_err(|e| DataError::InvalidRecord(e.to_string()))
    }

    /// 전체 기간의 레코드를 날짜순으로 생성해 스냅샷으로 만듭니다.
    pub fn generate(mut self) -> Result<SalesDataset> {
        let period = self.period();
        let expected = period
            .num_days()
            .saturating_mul(self.config.mean_daily_sales.ceil() as usize);
        let mut records = Vec::with_capacity(expected.min(MAX_CAPACITY_HINT));

        for date in period.days() {
            let day = self.generate_day(date)?;
            debug!(%date, count = day.len(), "Generated day");
            records.extend(day);
        }

        Ok(SalesDataset::new(records))
    }
}

/// 배타적 상한 `price_max`보다 작은 가장 큰 센트 값.
fn price_ceiling(price_max: f64) -> Option<Decimal> {
    let max = Decimal::from_f64_retain(price_max)?;
    let cent = Decimal::new(1, PRICE_SCALE);
    Some(max.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::ToPositiveInfinity) - cent)
}

/// 설정으로부터 데이터셋을 생성합니다.
#[instrument(skip_all, fields(seed = config.seed))]
pub fn generate_dataset(config: &GeneratorConfig) -> Result<SalesDataset> {
    let generator = SalesGenerator::new(config.clone())?;
    let period = generator.period();
    let dataset = generator.generate()?;

    info!(
        records = dataset.len(),
        days = period.num_days(),
        period = %period,
        "Generated synthetic sales dataset"
    );

    Ok(dataset)
}
