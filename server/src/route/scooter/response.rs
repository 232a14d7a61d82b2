use axum::response::IntoResponse;
use axum::Json;
use rust_decimal::Decimal;
use serde::Serialize;

use application::transfer::ScooterDto;

#[derive(Debug, Serialize)]
pub struct ScooterResponse {
    id: String,
    price_per_minute: Decimal,
    is_rented: bool,
}

impl From<ScooterDto> for ScooterResponse {
    fn from(value: ScooterDto) -> Self {
        Self {
            id: value.id,
            price_per_minute: value.price_per_minute,
            is_rented: value.is_rented,
        }
    }
}

impl IntoResponse for ScooterResponse {
    fn into_response(self) -> axum::response::Response {
        (axum::http::StatusCode::OK, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedScooterResponse {
    id: String,
    price_per_minute: Decimal,
}

impl From<ScooterDto> for CreatedScooterResponse {
    fn from(value: ScooterDto) -> Self {
        Self {
            id: value.id,
            price_per_minute: value.price_per_minute,
        }
    }
}

impl IntoResponse for CreatedScooterResponse {
    fn into_response(self) -> axum::response::Response {
        (axum::http::StatusCode::CREATED, Json(self)).into_response()
    }
}
