use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct PricePerMinute(Decimal);

impl PricePerMinute {
    pub fn new(price: impl Into<Decimal>) -> Self {
        Self(price.into())
    }
}
