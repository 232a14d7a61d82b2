mod response;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use application::service::{EndRentService, GetRentService, StartRentService};
use application::transfer::{EndRentDto, GetRentsDto, StartRentDto};

use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::rent::response::{EndedRentResponse, RentalResponse, StartedRentResponse};

pub trait RentRouter {
    fn route_rent(self) -> Self;
}

impl RentRouter for Router<AppModule> {
    fn route_rent(self) -> Self {
        self.route(
            "/scooters/:id/rents",
            get(
                |State(module): State<AppModule>, Path(id): Path<String>| async move {
                    module
                        .get_rents(GetRentsDto { scooter_id: id })
                        .await
                        .map(|rentals| {
                            Json(
                                rentals
                                    .into_iter()
                                    .map(RentalResponse::from)
                                    .collect::<Vec<_>>(),
                            )
                        })
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(module): State<AppModule>, Path(id): Path<String>| async move {
                    module
                        .start_rent(StartRentDto { scooter_id: id })
                        .await
                        .map(StartedRentResponse::from)
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule>, Path(id): Path<String>| async move {
                    module
                        .end_rent(EndRentDto { scooter_id: id })
                        .await
                        .map(EndedRentResponse::from)
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
