use crate::domain::coupon::Coupon;
use crate::domain::money::Money;
use crate::domain::summary::OrderSummary;
use crate::error::{CheckoutError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixed pricing constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPolicy {
    pub shipping_base: Money,
    /// Flat tax rate as a fraction of the subtotal.
    pub tax_rate: Decimal,
    /// Minimum subtotal at which a shipping-waiver coupon takes effect.
    pub free_shipping_threshold: Money,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            shipping_base: Money::new(dec!(5.99)).unwrap_or_default(),
            tax_rate: dec!(0.08),
            free_shipping_threshold: Money::new(dec!(50)).unwrap_or_default(),
        }
    }
}

/// Maps a subtotal and an optional coupon to an [`OrderSummary`].
///
/// The engine holds no state besides its policy; the same inputs always give
/// the same summary.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    policy: PricingPolicy,
}

impl PricingEngine {
    /// Creates an engine, checking that the policy itself cannot produce a
    /// negative total.
    pub fn new(policy: PricingPolicy) -> Result<Self> {
        if policy.tax_rate < Decimal::ZERO {
            return Err(CheckoutError::InvalidInput(format!(
                "tax rate must not be negative, got {}",
                policy.tax_rate
            )));
        }
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// Computes the summary for `subtotal` with `coupon` applied.
    ///
    /// A coupon with `is_valid == false` is treated exactly like no coupon.
    /// Fails with `InvalidInput` for a negative subtotal or one too large to
    /// price without overflow; it never clamps.
    /// Out-of-range percentages cannot reach here, `Percentage` rejects them
    /// on construction.
    pub fn compute_summary(
        &self,
        subtotal: Decimal,
        coupon: Option<&Coupon>,
    ) -> Result<OrderSummary> {
        let subtotal = Money::new(subtotal)?;
        let coupon = coupon.filter(|c| c.is_valid);

        let tax = subtotal.checked_mul(self.policy.tax_rate)?;

        let discount = match coupon {
            Some(c) => c.discount_percentage.of(subtotal)?,
            None => Money::ZERO,
        };

        let shipping = match coupon {
            Some(c) if c.waives_shipping && subtotal >= self.policy.free_shipping_threshold => {
                Money::ZERO
            }
            _ => self.policy.shipping_base,
        };

        let total = subtotal
            .checked_add(shipping)?
            .checked_add(tax)?
            .checked_sub(discount)?;

        tracing::debug!(
            subtotal = %subtotal.value(),
            coupon = coupon.map(|c| c.code.as_str()),
            total = %total.value(),
            "computed order summary"
        );

        Ok(OrderSummary {
            subtotal,
            shipping,
            tax,
            discount,
            total,
        })
    }
}

/// Computes a summary under the default policy.
pub fn compute_summary(subtotal: Decimal, coupon: Option<&Coupon>) -> Result<OrderSummary> {
    PricingEngine::default().compute_summary(subtotal, coupon)
}
