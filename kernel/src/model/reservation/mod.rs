use crate::model::{
    id::{ReservationId, SpaceId, UserId, VehicleId},
    user::ReservationUser,
    vehicle::{Vehicle, VehicleType},
};
use chrono::{DateTime, Utc};
use strum::{Display, EnumString};

pub mod event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Completed,
    Cancelled,
}

impl ReservationStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// A timed occupancy of one parking space. `reservation_end` stays `None`
/// while pending; checkout fills it and computes the fee.
#[derive(Debug, Clone)]
pub struct Reservation {
    pub reservation_id: ReservationId,
    pub user_id: UserId,
    pub space_id: SpaceId,
    pub vehicle_id: VehicleId,
    pub vehicle_type: VehicleType,
    pub reservation_start: DateTime<Utc>,
    pub reservation_end: Option<DateTime<Utc>>,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

/// Result of checking out a pending reservation.
#[derive(Debug)]
pub struct Checkout {
    pub reservation: Reservation,
    pub fee: i64,
}

/// Listing row with a display-only fee estimate attached.
#[derive(Debug)]
pub struct ReservationWithFee {
    pub reservation: Reservation,
    pub fee: i64,
}

#[derive(Debug, Clone)]
pub struct ReservationSpace {
    pub space_id: SpaceId,
    pub space_number: String,
    pub is_occupied: bool,
}

#[derive(Debug)]
pub struct ReservationDetails {
    pub reservation: Reservation,
    pub space: ReservationSpace,
    pub user: ReservationUser,
    pub vehicle: Vehicle,
}
