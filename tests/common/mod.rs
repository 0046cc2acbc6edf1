#![allow(dead_code)]

use rand::Rng;
use rust_decimal::Decimal;
use std::io::Write;
use tempfile::NamedTempFile;

pub fn write_catalog(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp catalog");
    writeln!(
        file,
        "id,code,description,discount_percentage,expires_at,is_valid,waives_shipping"
    )
    .unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}

/// Random subtotals in cents, between 0 and 10,000.00.
pub fn random_subtotals(count: usize) -> Vec<Decimal> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| Decimal::new(rng.gen_range(0..=1_000_000), 2))
        .collect()
}
