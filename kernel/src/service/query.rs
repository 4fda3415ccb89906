use crate::{
    fee,
    model::{
        id::{ReservationId, UserId},
        reservation::{Reservation, ReservationDetails, ReservationStatus, ReservationWithFee},
    },
    repository::reservation::ReservationRepository,
};
use chrono::{DateTime, Utc};
use derive_new::new;
use shared::error::{AppError, AppResult};
use std::sync::Arc;

/// Read-only projections over the reservation store. Fee figures here are
/// display estimates and never mutate state.
#[derive(new)]
pub struct ReservationQueryService {
    reservation_repository: Arc<dyn ReservationRepository>,
}

impl ReservationQueryService {
    /// Every reservation with a computed fee: pending rows are priced as if
    /// checked out at `now`, completed rows with their recorded end,
    /// cancelled rows at 0.
    pub async fn list_with_fees(&self, now: DateTime<Utc>) -> AppResult<Vec<ReservationWithFee>> {
        let reservations = self.reservation_repository.find_all().await?;
        Ok(reservations
            .into_iter()
            .map(|reservation| {
                let fee = estimate_fee(&reservation, now);
                ReservationWithFee { reservation, fee }
            })
            .collect())
    }

    pub async fn active_for_user(&self, user_id: UserId) -> AppResult<Reservation> {
        self.reservation_repository
            .find_active_by_user(user_id)
            .await?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("no active reservation for user {user_id}"))
            })
    }

    pub async fn get(&self, reservation_id: ReservationId) -> AppResult<Reservation> {
        self.reservation_repository
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("reservation {reservation_id} not found"))
            })
    }

    pub async fn list_details(&self) -> AppResult<Vec<ReservationDetails>> {
        self.reservation_repository.find_all_details().await
    }
}

fn estimate_fee(reservation: &Reservation, now: DateTime<Utc>) -> i64 {
    // A pending row is always priced at `now`, even when an administrative
    // correction already stored an end instant.
    let checkout_at = match reservation.status {
        ReservationStatus::Cancelled => return 0,
        ReservationStatus::Pending => now,
        ReservationStatus::Completed => reservation.reservation_end.unwrap_or(now),
    };
    let duration = fee::duration_hours(reservation.reservation_start, checkout_at);
    fee::compute_fee(&reservation.vehicle_type, duration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::reservation::event::{CreateReservation, UpdateReservation};
    use crate::model::vehicle::VehicleType;
    use crate::service::memory::world;
    use chrono::{Duration, TimeZone};

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 10, 1, 8, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn listing_prices_pending_rows_at_now() -> anyhow::Result<()> {
        let w = world();
        let space_id = w.add_space("A-01");
        let vehicle_id = w.add_vehicle(VehicleType::Car);
        w.service
            .create(CreateReservation::new(
                UserId::new(),
                space_id,
                vehicle_id,
                start(),
                start(),
            ))
            .await?;

        let listed = w.query.list_with_fees(start() + Duration::minutes(90)).await?;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].fee, 3000);
        // Estimating does not touch the stored row.
        let stored = w
            .reservations
            .snapshot(listed[0].reservation.reservation_id)
            .unwrap();
        assert_eq!(stored.status, ReservationStatus::Pending);
        assert_eq!(stored.reservation_end, None);
        Ok(())
    }

    #[tokio::test]
    async fn pending_row_with_corrected_end_is_still_priced_at_now() -> anyhow::Result<()> {
        let w = world();
        let space_id = w.add_space("A-01");
        let vehicle_id = w.add_vehicle(VehicleType::Car);
        let reservation = w
            .service
            .create(CreateReservation::new(
                UserId::new(),
                space_id,
                vehicle_id,
                start(),
                start(),
            ))
            .await?;
        // An administrative end-correction on a still-pending row must not
        // freeze the displayed estimate.
        w.service
            .update(UpdateReservation::new(
                reservation.reservation_id,
                None,
                None,
                None,
                None,
                Some(start() + Duration::minutes(30)),
            ))
            .await?;

        let listed = w.query.list_with_fees(start() + Duration::minutes(90)).await?;
        assert_eq!(listed[0].fee, 3000);
        Ok(())
    }

    #[tokio::test]
    async fn listing_prices_completed_rows_with_recorded_end() -> anyhow::Result<()> {
        let w = world();
        let space_id = w.add_space("A-01");
        let vehicle_id = w.add_vehicle(VehicleType::Motorcycle);
        let reservation = w
            .service
            .create(CreateReservation::new(
                UserId::new(),
                space_id,
                vehicle_id,
                start(),
                start(),
            ))
            .await?;
        w.service
            .complete(reservation.reservation_id, start() + Duration::minutes(45))
            .await?;

        // A much later "now" must not change the recorded bill.
        let listed = w.query.list_with_fees(start() + Duration::hours(10)).await?;
        assert_eq!(listed[0].fee, 1500);
        Ok(())
    }

    #[tokio::test]
    async fn listing_prices_cancelled_rows_at_zero() -> anyhow::Result<()> {
        let w = world();
        let space_id = w.add_space("A-01");
        let vehicle_id = w.add_vehicle(VehicleType::Car);
        let reservation = w
            .service
            .create(CreateReservation::new(
                UserId::new(),
                space_id,
                vehicle_id,
                start(),
                start(),
            ))
            .await?;
        w.service.cancel(reservation.reservation_id).await?;

        let listed = w.query.list_with_fees(start() + Duration::hours(5)).await?;
        assert_eq!(listed[0].fee, 0);
        Ok(())
    }

    #[tokio::test]
    async fn active_for_user_returns_earliest_pending() -> anyhow::Result<()> {
        let w = world();
        let user_id = UserId::new();
        let early_space = w.add_space("A-01");
        let late_space = w.add_space("B-02");

        // Same user across two spaces; the earlier start wins.
        w.service
            .create(CreateReservation::new(
                user_id,
                late_space,
                w.add_vehicle(VehicleType::Car),
                start() + Duration::hours(2),
                start(),
            ))
            .await?;
        w.service
            .create(CreateReservation::new(
                user_id,
                early_space,
                w.add_vehicle(VehicleType::Car),
                start(),
                start(),
            ))
            .await?;

        let active = w.query.active_for_user(user_id).await?;
        assert_eq!(active.space_id, early_space);
        Ok(())
    }

    #[tokio::test]
    async fn active_for_user_without_pending_is_not_found() {
        let w = world();
        let err = w.query.active_for_user(UserId::new()).await.unwrap_err();
        assert!(matches!(err, AppError::EntityNotFound(_)));
    }

    #[tokio::test]
    async fn details_join_space_user_and_vehicle() -> anyhow::Result<()> {
        let w = world();
        let space_id = w.add_space("A-01");
        let vehicle_id = w.add_vehicle(VehicleType::Car);
        let user_id = w.add_user("dana", "dana@example.com");
        w.service
            .create(CreateReservation::new(
                user_id,
                space_id,
                vehicle_id,
                start(),
                start(),
            ))
            .await?;

        let details = w.query.list_details().await?;
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].space.space_number, "A-01");
        assert!(details[0].space.is_occupied);
        assert_eq!(details[0].user.user_name, "dana");
        assert_eq!(details[0].vehicle.vehicle_type, VehicleType::Car);
        Ok(())
    }
}
