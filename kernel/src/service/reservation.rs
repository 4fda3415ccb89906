use crate::{
    fee,
    model::{
        id::ReservationId,
        reservation::{
            event::{CreateReservation, UpdateReservation},
            Checkout, Reservation, ReservationStatus,
        },
    },
    repository::{
        reservation::ReservationRepository, space::SpaceRepository, vehicle::VehicleRepository,
    },
    service::occupancy::OccupancyCoordinator,
};
use chrono::{DateTime, Utc};
use derive_new::new;
use shared::error::{AppError, AppResult};
use std::sync::Arc;

/// Lifecycle manager for reservations: pending → completed | cancelled, with
/// the fee computed exactly once at checkout.
#[derive(new)]
pub struct ReservationService {
    reservation_repository: Arc<dyn ReservationRepository>,
    space_repository: Arc<dyn SpaceRepository>,
    vehicle_repository: Arc<dyn VehicleRepository>,
    occupancy: Arc<OccupancyCoordinator>,
}

impl ReservationService {
    /// Creates a pending reservation and acquires the space. The
    /// caller-supplied start instant is authoritative; the end stays empty
    /// until checkout.
    pub async fn create(&self, event: CreateReservation) -> AppResult<Reservation> {
        let space = self
            .space_repository
            .find_by_id(event.space_id)
            .await?
            .ok_or_else(|| {
                AppError::InvalidRequest(format!("parking space {} does not exist", event.space_id))
            })?;
        let vehicle = self
            .vehicle_repository
            .find_by_id(event.vehicle_id)
            .await?
            .ok_or_else(|| {
                AppError::InvalidRequest(format!("vehicle {} does not exist", event.vehicle_id))
            })?;
        if space.is_occupied {
            return Err(AppError::OccupancyConflict(format!(
                "parking space {} is already occupied",
                space.space_number
            )));
        }

        // The store's one-pending-per-space uniqueness serializes concurrent
        // creates that pass the check above at the same time.
        let reservation_id = self.reservation_repository.create(event.clone()).await?;
        self.occupancy.acquire(event.space_id).await?;

        tracing::info!(%reservation_id, space_id = %event.space_id, "reservation created");
        Ok(Reservation {
            reservation_id,
            user_id: event.user_id,
            space_id: event.space_id,
            vehicle_id: event.vehicle_id,
            vehicle_type: vehicle.vehicle_type,
            reservation_start: event.reservation_start,
            reservation_end: None,
            status: ReservationStatus::Pending,
            created_at: event.created_at,
        })
    }

    /// Checkout: records the exit instant, bills the elapsed time, and frees
    /// the space. Callable exactly once per reservation.
    pub async fn complete(
        &self,
        reservation_id: ReservationId,
        checkout_at: DateTime<Utc>,
    ) -> AppResult<Checkout> {
        let reservation = self.pending_reservation(reservation_id).await?;
        let duration = fee::duration_hours(reservation.reservation_start, checkout_at);
        let amount = fee::compute_fee(&reservation.vehicle_type, duration);

        self.reservation_repository
            .transition(reservation_id, ReservationStatus::Completed, Some(checkout_at))
            .await?;
        self.occupancy.release(reservation.space_id).await?;

        tracing::info!(%reservation_id, fee = amount, "reservation checked out");
        Ok(Checkout {
            reservation: Reservation {
                reservation_end: Some(checkout_at),
                status: ReservationStatus::Completed,
                ..reservation
            },
            fee: amount,
        })
    }

    /// Cancels a pending reservation before checkout and frees the space. No
    /// fee is charged.
    pub async fn cancel(&self, reservation_id: ReservationId) -> AppResult<()> {
        let reservation = self.pending_reservation(reservation_id).await?;
        self.reservation_repository
            .transition(reservation_id, ReservationStatus::Cancelled, None)
            .await?;
        self.occupancy.release(reservation.space_id).await
    }

    /// Administrative correction of a non-terminal reservation. Omitted
    /// fields keep their stored value; moving to another space re-acquires
    /// occupancy before releasing the old one.
    pub async fn update(&self, event: UpdateReservation) -> AppResult<()> {
        let current = self.pending_reservation(event.reservation_id).await?;

        if let Some(vehicle_id) = event.vehicle_id {
            self.vehicle_repository
                .find_by_id(vehicle_id)
                .await?
                .ok_or_else(|| {
                    AppError::InvalidRequest(format!("vehicle {vehicle_id} does not exist"))
                })?;
        }

        match event.space_id {
            Some(space_id) if space_id != current.space_id => {
                self.space_repository
                    .find_by_id(space_id)
                    .await?
                    .ok_or_else(|| {
                        AppError::InvalidRequest(format!(
                            "parking space {space_id} does not exist"
                        ))
                    })?;
                self.occupancy.acquire(space_id).await?;
                self.reservation_repository.update_fields(event).await?;
                self.occupancy.release(current.space_id).await
            }
            _ => self.reservation_repository.update_fields(event).await,
        }
    }

    async fn pending_reservation(&self, reservation_id: ReservationId) -> AppResult<Reservation> {
        let reservation = self
            .reservation_repository
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("reservation {reservation_id} not found"))
            })?;
        if reservation.status.is_terminal() {
            return Err(AppError::UnprocessableEntity(format!(
                "reservation {reservation_id} is already {}",
                reservation.status
            )));
        }
        Ok(reservation)
    }
}
