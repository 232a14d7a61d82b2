mod request;
mod response;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use application::service::{CreateScooterService, DeleteScooterService, GetScooterService};
use application::transfer::{DeleteScooterDto, GetScooterDto};

use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::scooter::request::CreateScooterRequest;
use crate::route::scooter::response::{CreatedScooterResponse, ScooterResponse};

pub trait ScooterRouter {
    fn route_scooter(self) -> Self;
}

impl ScooterRouter for Router<AppModule> {
    fn route_scooter(self) -> Self {
        self.route(
            "/scooters",
            get(|State(module): State<AppModule>| async move {
                module
                    .get_scooters()
                    .await
                    .map(|scooters| {
                        Json(
                            scooters
                                .into_iter()
                                .map(ScooterResponse::from)
                                .collect::<Vec<_>>(),
                        )
                    })
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule>,
                 Json(req): Json<CreateScooterRequest>| async move {
                    module
                        .add_scooter(req.into())
                        .await
                        .map(CreatedScooterResponse::from)
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/scooters/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<String>| async move {
                    module
                        .get_scooter(GetScooterDto { id })
                        .await
                        .map(ScooterResponse::from)
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule>, Path(id): Path<String>| async move {
                    module
                        .remove_scooter(DeleteScooterDto { id })
                        .await
                        .map(|()| StatusCode::NO_CONTENT)
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
