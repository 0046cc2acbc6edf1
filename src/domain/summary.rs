use super::money::Money;
use serde::{Deserialize, Serialize};

/// The itemized monetary breakdown of a single checkout.
///
/// Always produced fresh by the pricing engine; nothing mutates it afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub subtotal: Money,
    pub shipping: Money,
    pub tax: Money,
    pub discount: Money,
    pub total: Money,
}
