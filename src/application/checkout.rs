use super::pricing::PricingEngine;
use crate::domain::coupon::Coupon;
use crate::domain::summary::OrderSummary;
use crate::error::Result;
use rust_decimal::Decimal;

/// The business state a checkout view holds: a subtotal and at most one
/// applied coupon.
///
/// Every mutation recomputes the summary through the pricing engine and
/// returns it; there is no implicit re-execution.
pub struct CheckoutSession {
    engine: PricingEngine,
    subtotal: Decimal,
    applied: Option<Coupon>,
    summary: OrderSummary,
}

impl CheckoutSession {
    pub fn new(engine: PricingEngine, subtotal: Decimal) -> Result<Self> {
        let summary = engine.compute_summary(subtotal, None)?;
        Ok(Self {
            engine,
            subtotal,
            applied: None,
            summary,
        })
    }

    pub fn summary(&self) -> &OrderSummary {
        &self.summary
    }

    pub fn applied_coupon(&self) -> Option<&Coupon> {
        self.applied.as_ref()
    }

    /// Replaces any applied coupon with `coupon`.
    pub fn apply(&mut self, coupon: Coupon) -> Result<OrderSummary> {
        let summary = self.engine.compute_summary(self.subtotal, Some(&coupon))?;
        tracing::debug!(code = %coupon.code, "coupon applied");
        self.applied = Some(coupon);
        self.summary = summary;
        Ok(summary)
    }

    /// Clears the applied coupon, if any.
    pub fn remove(&mut self) -> Result<OrderSummary> {
        let summary = self.engine.compute_summary(self.subtotal, None)?;
        if let Some(coupon) = self.applied.take() {
            tracing::debug!(code = %coupon.code, "coupon removed");
        }
        self.summary = summary;
        Ok(summary)
    }

    pub fn set_subtotal(&mut self, subtotal: Decimal) -> Result<OrderSummary> {
        let summary = self
            .engine
            .compute_summary(subtotal, self.applied.as_ref())?;
        self.subtotal = subtotal;
        self.summary = summary;
        Ok(summary)
    }
}
