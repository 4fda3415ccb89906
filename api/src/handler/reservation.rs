use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use garde::Validate;
use kernel::model::{
    id::{ReservationId, UserId},
    reservation::event::CreateReservation,
};
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::reservation::{
    CheckoutResponse, CreateReservationRequest, ReservationDetailsListResponse,
    ReservationResponse, ReservationsWithFeeResponse, UpdateReservationRequest,
    UpdateReservationRequestWithId,
};

pub async fn register_reservation(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateReservationRequest>,
) -> AppResult<(StatusCode, Json<ReservationResponse>)> {
    req.validate(&())?;

    let now = Utc::now();
    let event = CreateReservation::new(
        req.user_id,
        req.space_id,
        req.vehicle_id,
        req.reservation_start.unwrap_or(now),
        now,
    );
    registry
        .reservation_service()
        .create(event)
        .await
        .map(|reservation| (StatusCode::CREATED, Json(reservation.into())))
}

pub async fn show_reservation_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationsWithFeeResponse>> {
    registry
        .reservation_query_service()
        .list_with_fees(Utc::now())
        .await
        .map(ReservationsWithFeeResponse::from)
        .map(Json)
}

pub async fn show_reservation_details(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationDetailsListResponse>> {
    registry
        .reservation_query_service()
        .list_details()
        .await
        .map(ReservationDetailsListResponse::from)
        .map(Json)
}

pub async fn show_reservation(
    State(registry): State<AppRegistry>,
    Path(reservation_id): Path<ReservationId>,
) -> AppResult<Json<ReservationResponse>> {
    registry
        .reservation_query_service()
        .get(reservation_id)
        .await
        .map(ReservationResponse::from)
        .map(Json)
}

pub async fn show_active_reservation(
    State(registry): State<AppRegistry>,
    Path(user_id): Path<UserId>,
) -> AppResult<Json<ReservationResponse>> {
    registry
        .reservation_query_service()
        .active_for_user(user_id)
        .await
        .map(ReservationResponse::from)
        .map(Json)
}

pub async fn update_reservation(
    State(registry): State<AppRegistry>,
    Path(reservation_id): Path<ReservationId>,
    Json(req): Json<UpdateReservationRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let update = UpdateReservationRequestWithId::new(reservation_id, req);
    registry
        .reservation_service()
        .update(update.into())
        .await
        .map(|_| StatusCode::OK)
}

pub async fn checkout_reservation(
    State(registry): State<AppRegistry>,
    Path(reservation_id): Path<ReservationId>,
) -> AppResult<Json<CheckoutResponse>> {
    registry
        .reservation_service()
        .complete(reservation_id, Utc::now())
        .await
        .map(CheckoutResponse::from)
        .map(Json)
}

pub async fn cancel_reservation(
    State(registry): State<AppRegistry>,
    Path(reservation_id): Path<ReservationId>,
) -> AppResult<StatusCode> {
    registry
        .reservation_service()
        .cancel(reservation_id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
}
