use super::money::Percentage;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The code whose coupons waive shipping when no explicit flag is given.
pub const FREE_SHIPPING_CODE: &str = "FREESHIP";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CouponId(pub String);

impl fmt::Display for CouponId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named discount or perk rule.
///
/// Coupons are immutable once built. The shipping waiver is an explicit
/// attribute resolved when the coupon enters a catalog, so pricing never has
/// to inspect `code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    pub id: CouponId,
    pub code: String,
    pub description: String,
    pub discount_percentage: Percentage,
    pub expires_at: Option<NaiveDate>,
    pub is_valid: bool,
    pub waives_shipping: bool,
}

impl Coupon {
    /// Creates a valid, non-expiring coupon. The shipping waiver is derived
    /// from the code.
    pub fn new(
        id: impl Into<String>,
        code: impl Into<String>,
        description: impl Into<String>,
        discount_percentage: Percentage,
    ) -> Self {
        let code = code.into();
        let waives_shipping = code == FREE_SHIPPING_CODE;
        Self {
            id: CouponId(id.into()),
            code,
            description: description.into(),
            discount_percentage,
            expires_at: None,
            is_valid: true,
            waives_shipping,
        }
    }

    pub fn expiring(mut self, expires_at: NaiveDate) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    pub fn invalidated(mut self) -> Self {
        self.is_valid = false;
        self
    }

    pub fn with_shipping_waiver(mut self, waives_shipping: bool) -> Self {
        self.waives_shipping = waives_shipping;
        self
    }

    /// True when `on` is past the expiry date. Pricing does not consult this.
    pub fn is_expired(&self, on: NaiveDate) -> bool {
        self.expires_at.is_some_and(|expiry| on > expiry)
    }
}
