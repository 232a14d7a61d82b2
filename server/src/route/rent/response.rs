use axum::response::IntoResponse;
use axum::Json;
use rust_decimal::Decimal;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use application::transfer::{EndedRentDto, RentalDto};

#[derive(Debug, Serialize)]
pub struct RentalResponse {
    id: Uuid,
    scooter_id: String,
    #[serde(with = "time::serde::rfc3339")]
    rented_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    returned_at: Option<OffsetDateTime>,
}

impl From<RentalDto> for RentalResponse {
    fn from(value: RentalDto) -> Self {
        Self {
            id: value.id,
            scooter_id: value.scooter_id,
            rented_at: value.rented_at,
            returned_at: value.returned_at,
        }
    }
}

impl IntoResponse for RentalResponse {
    fn into_response(self) -> axum::response::Response {
        (axum::http::StatusCode::OK, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct StartedRentResponse(RentalResponse);

impl From<RentalDto> for StartedRentResponse {
    fn from(value: RentalDto) -> Self {
        Self(RentalResponse::from(value))
    }
}

impl IntoResponse for StartedRentResponse {
    fn into_response(self) -> axum::response::Response {
        (axum::http::StatusCode::CREATED, Json(self.0)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct EndedRentResponse {
    rental: RentalResponse,
    price: Decimal,
}

impl From<EndedRentDto> for EndedRentResponse {
    fn from(value: EndedRentDto) -> Self {
        Self {
            rental: RentalResponse::from(value.rental),
            price: value.price,
        }
    }
}

impl IntoResponse for EndedRentResponse {
    fn into_response(self) -> axum::response::Response {
        (axum::http::StatusCode::OK, Json(self)).into_response()
    }
}
