//! CSV 내보내기.
//!
//! 필터링된 레코드를 UTF-8 CSV로 직렬화합니다. 헤더 행은 레코드의 원본
//! 필드 이름이며 인덱스 열은 없습니다. 내보낸 버퍼는 [`read_csv`]로 다시
//! 읽어 동일한 레코드를 얻을 수 있습니다.

use sales_core::SaleRecord;
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

use crate::error::Result;

/// CSV 헤더 열 순서.
pub const CSV_HEADER: [&str; 7] = [
    "date",
    "product",
    "region",
    "quantity",
    "unit_price",
    "seller",
    "total",
];

/// 레코드를 임의의 writer에 CSV로 씁니다.
///
/// 레코드가 없어도 헤더 행은 항상 씁니다.
pub fn write_csv<'a, W, I>(writer: W, records: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a SaleRecord>,
{
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(CSV_HEADER)?;

    let mut count = 0;
    for record in records {
        wtr.serialize(record)?;
        count += 1;
    }

    wtr.flush()?;
    Ok(count)
}

/// 레코드를 메모리 버퍼로 내보냅니다 (다운로드용).
pub fn to_csv_bytes<'a, I>(records: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = &'a SaleRecord>,
{
    let mut buffer = Vec::new();
    write_csv(&mut buffer, records)?;
    Ok(buffer)
}

/// 레코드를 파일로 내보냅니다.
pub fn write_csv_file<'a, P, I>(path: P, records: I) -> Result<usize>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a SaleRecord>,
{
    let file = std::fs::File::create(path.as_ref())?;
    let count = write_csv(std::io::BufWriter::new(file), records)?;
    info!(path = %path.as_ref().display(), count, "CSV exported");
    Ok(count)
}

/// CSV를 읽어 레코드 목록으로 되돌립니다.
///
/// `total`이 `quantity × unit_price`와 다른 행은 오류로 처리됩니다.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<SaleRecord>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for row in rdr.deserialize() {
        let record: SaleRecord = row?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use sales_core::{Product, Region, Seller};

    fn sample() -> Vec<SaleRecord> {
        vec![
            SaleRecord::new(
                NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
                Product::Laptop,
                Region::North,
                2,
                dec!(1234.56),
                Seller::new(1).unwrap(),
            )
            .unwrap(),
            SaleRecord::new(
                NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
                Product::Headphones,
                Region::Central,
                5,
                dec!(50.10),
                Seller::new(20).unwrap(),
            )
            .unwrap(),
        ]
    }

    #[test]
    fn test_csv_layout() {
        let records = sample();
        let bytes = to_csv_bytes(&records).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "date,product,region,quantity,unit_price,seller,total");
        assert_eq!(lines[1], "2023-01-01,Laptop,North,2,1234.56,Seller_1,2469.12");
        assert_eq!(lines[2], "2024-12-31,Headphones,Central,5,50.10,Seller_20,250.50");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_empty_export_has_header_only() {
        let bytes = to_csv_bytes(std::iter::empty()).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "date,product,region,quantity,unit_price,seller,total\n"
        );
    }

    #[test]
    fn test_round_trip() {
        let records = sample();
        let bytes = to_csv_bytes(&records).unwrap();
        let parsed = read_csv(bytes.as_slice()).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_read_rejects_inconsistent_total() {
        let text = "date,product,region,quantity,unit_price,seller,total\n\
                    2023-01-01,Laptop,North,2,100.00,Seller_1,150.00\n";
        assert!(read_csv(text.as_bytes()).is_err());
    }

    #[test]
    fn test_read_rejects_unknown_seller() {
        let text = "date,product,region,quantity,unit_price,seller,total\n\
                    2023-01-01,Laptop,North,1,100.00,Vendor_1,100.00\n";
        assert!(read_csv(text.as_bytes()).is_err());
    }
}
