mod request;
mod response;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::Router;

use application::service::CalculateIncomeService;

use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::income::request::IncomeRequest;
use crate::route::income::response::IncomeResponse;

pub trait IncomeRouter {
    fn route_income(self) -> Self;
}

impl IncomeRouter for Router<AppModule> {
    fn route_income(self) -> Self {
        self.route(
            "/income",
            get(
                |State(module): State<AppModule>, Query(req): Query<IncomeRequest>| async move {
                    module
                        .calculate_income(req.into())
                        .await
                        .map(IncomeResponse::from)
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
