use crate::model::id::{ReservationId, SpaceId, UserId, VehicleId};
use chrono::{DateTime, Utc};
use derive_new::new;

#[derive(Debug, Clone, new)]
pub struct CreateReservation {
    pub user_id: UserId,
    pub space_id: SpaceId,
    pub vehicle_id: VehicleId,
    pub reservation_start: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Administrative correction. Omitted fields keep their stored value; status
/// is deliberately absent and only moves through complete/cancel.
#[derive(Debug, Clone, new)]
pub struct UpdateReservation {
    pub reservation_id: ReservationId,
    pub user_id: Option<UserId>,
    pub space_id: Option<SpaceId>,
    pub vehicle_id: Option<VehicleId>,
    pub reservation_start: Option<DateTime<Utc>>,
    pub reservation_end: Option<DateTime<Utc>>,
}
