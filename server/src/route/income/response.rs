use axum::response::IntoResponse;
use axum::Json;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct IncomeResponse {
    income: Decimal,
}

impl From<Decimal> for IncomeResponse {
    fn from(value: Decimal) -> Self {
        Self { income: value }
    }
}

impl IntoResponse for IncomeResponse {
    fn into_response(self) -> axum::response::Response {
        (axum::http::StatusCode::OK, Json(self)).into_response()
    }
}
