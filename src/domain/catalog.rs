use super::coupon::Coupon;
use super::money::Percentage;
use crate::error::{CheckoutError, Result};
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use std::collections::HashSet;

/// A read-only, ordered list of coupons with unique ids and codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouponCatalog {
    coupons: Vec<Coupon>,
}

impl CouponCatalog {
    /// Builds a catalog, rejecting repeated ids or codes.
    pub fn new(coupons: Vec<Coupon>) -> Result<Self> {
        let mut ids = HashSet::new();
        let mut codes = HashSet::new();
        for coupon in &coupons {
            if !ids.insert(coupon.id.clone()) {
                return Err(CheckoutError::DuplicateCoupon(format!(
                    "id {} appears more than once",
                    coupon.id
                )));
            }
            if !codes.insert(coupon.code.clone()) {
                return Err(CheckoutError::DuplicateCoupon(format!(
                    "code {} appears more than once",
                    coupon.code
                )));
            }
        }
        Ok(Self { coupons })
    }

    /// The coupons shipped with the checkout.
    pub fn builtin() -> Self {
        let coupons = vec![
            Coupon::new(
                "1",
                "WELCOME20",
                "20% off your first purchase",
                Percentage::new(dec!(20)).unwrap_or_default(),
            )
            .expiring(date(2024, 12, 31)),
            Coupon::new(
                "2",
                "SUMMER10",
                "10% off summer collection",
                Percentage::new(dec!(10)).unwrap_or_default(),
            )
            .expiring(date(2024, 8, 31)),
            Coupon::new(
                "3",
                "FREESHIP",
                "Free shipping on orders over $50",
                Percentage::ZERO,
            ),
        ];
        Self { coupons }
    }

    pub fn find_by_code(&self, code: &str) -> Option<&Coupon> {
        let code = code.trim();
        self.coupons.iter().find(|c| c.code == code)
    }

    /// Like `find_by_code`, but a miss is an error.
    pub fn require(&self, code: &str) -> Result<&Coupon> {
        self.find_by_code(code)
            .ok_or_else(|| CheckoutError::UnknownCoupon(code.trim().to_string()))
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Coupon> {
        self.coupons.iter().find(|c| c.id.0 == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coupon> {
        self.coupons.iter()
    }

    pub fn len(&self) -> usize {
        self.coupons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coupons.is_empty()
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
