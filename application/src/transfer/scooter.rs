use rust_decimal::Decimal;

use kernel::prelude::entity::{DestructScooter, Scooter};

#[derive(Debug, Clone)]
pub struct ScooterDto {
    pub id: String,
    pub price_per_minute: Decimal,
    pub is_rented: bool,
}

impl From<Scooter> for ScooterDto {
    fn from(value: Scooter) -> Self {
        let DestructScooter {
            id,
            price_per_minute,
            is_rented,
        } = value.into_destruct();
        Self {
            id: id.into(),
            price_per_minute: price_per_minute.into(),
            is_rented: is_rented.into(),
        }
    }
}

pub struct CreateScooterDto {
    pub id: String,
    pub price_per_minute: Decimal,
}

pub struct GetScooterDto {
    pub id: String,
}

pub struct DeleteScooterDto {
    pub id: String,
}
