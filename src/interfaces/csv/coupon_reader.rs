use crate::domain::catalog::CouponCatalog;
use crate::domain::coupon::{Coupon, CouponId, FREE_SHIPPING_CODE};
use crate::domain::money::Percentage;
use crate::error::{CheckoutError, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct CouponRecord {
    id: String,
    code: String,
    description: String,
    discount_percentage: Percentage,
    #[serde(default)]
    expires_at: Option<NaiveDate>,
    is_valid: bool,
    #[serde(default)]
    waives_shipping: Option<bool>,
}

impl From<CouponRecord> for Coupon {
    fn from(record: CouponRecord) -> Self {
        let waives_shipping = record
            .waives_shipping
            .unwrap_or(record.code == FREE_SHIPPING_CODE);
        Coupon {
            id: CouponId(record.id),
            code: record.code,
            description: record.description,
            discount_percentage: record.discount_percentage,
            expires_at: record.expires_at,
            is_valid: record.is_valid,
            waives_shipping,
        }
    }
}

/// Reads coupon definitions from a CSV source.
///
/// Expected header: `id,code,description,discount_percentage,expires_at,is_valid`
/// with an optional trailing `waives_shipping` column. A blank waiver falls
/// back to the `FREESHIP` code.
pub struct CouponReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CouponReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes coupons, one result per row.
    pub fn coupons(self) -> impl Iterator<Item = Result<Coupon>> {
        self.reader
            .into_deserialize::<CouponRecord>()
            .map(|result| result.map(Coupon::from).map_err(CheckoutError::from))
    }

    /// Reads every row into a catalog, stopping at the first bad row.
    pub fn into_catalog(self) -> Result<CouponCatalog> {
        let coupons = self.coupons().collect::<Result<Vec<_>>>()?;
        CouponCatalog::new(coupons)
    }
}
