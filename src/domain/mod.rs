//! Domain types: money, coupons, the catalog, order summaries, interpolation
//! runs, and the timing ports the application layer is driven by.

pub mod catalog;
pub mod coupon;
pub mod interpolation;
pub mod money;
pub mod ports;
pub mod summary;
