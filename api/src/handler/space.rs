use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::SpaceId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::space::{
    CreateSpaceRequest, OccupancyReportResponse, SpaceResponse, SpacesResponse,
};

pub async fn register_space(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateSpaceRequest>,
) -> AppResult<(StatusCode, Json<SpaceResponse>)> {
    req.validate(&())?;

    let repository = registry.space_repository();
    let space_id = repository.create(req.into()).await?;
    repository
        .find_by_id(space_id)
        .await?
        .map(|space| (StatusCode::CREATED, Json(space.into())))
        .ok_or_else(|| AppError::EntityNotFound(format!("parking space {space_id} was not found")))
}

pub async fn show_space_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SpacesResponse>> {
    registry
        .space_repository()
        .find_all()
        .await
        .map(SpacesResponse::from)
        .map(Json)
}

pub async fn show_space(
    State(registry): State<AppRegistry>,
    Path(space_id): Path<SpaceId>,
) -> AppResult<Json<SpaceResponse>> {
    registry
        .space_repository()
        .find_by_id(space_id)
        .await
        .and_then(|space| match space {
            Some(space) => Ok(Json(space.into())),
            None => Err(AppError::EntityNotFound(format!(
                "parking space {space_id} was not found"
            ))),
        })
}

pub async fn reconcile_space(
    State(registry): State<AppRegistry>,
    Path(space_id): Path<SpaceId>,
) -> AppResult<Json<OccupancyReportResponse>> {
    registry
        .occupancy_coordinator()
        .reconcile(space_id)
        .await
        .map(OccupancyReportResponse::from)
        .map(Json)
}
