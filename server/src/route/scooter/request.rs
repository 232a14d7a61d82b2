use rust_decimal::Decimal;
use serde::Deserialize;

use application::transfer::CreateScooterDto;

#[derive(Debug, Deserialize)]
pub struct CreateScooterRequest {
    id: String,
    price_per_minute: Decimal,
}

impl From<CreateScooterRequest> for CreateScooterDto {
    fn from(value: CreateScooterRequest) -> Self {
        Self {
            id: value.id,
            price_per_minute: value.price_per_minute,
        }
    }
}
