//! Application layer: the pricing engine, the checkout session that drives it,
//! and the value interpolator used to animate displayed totals.
//!
//! `AnimatedValue` wraps the interpolator in an actor-like `tokio` task fed by
//! a command channel, so one task is the sole writer of a displayed value.

pub mod animation;
pub mod checkout;
pub mod interpolator;
pub mod pricing;
