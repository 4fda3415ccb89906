use kernel::model::{
    reservation::{Reservation, ReservationDetails, ReservationSpace, ReservationStatus},
    user::ReservationUser,
    vehicle::{Vehicle, VehicleType},
};
use shared::error::AppError;
use sqlx::types::chrono::{DateTime, Utc};
use uuid::Uuid;

/// Reservation joined with the vehicle type it is billed under.
#[derive(sqlx::FromRow)]
pub struct ReservationRow {
    pub reservation_id: Uuid,
    pub user_id: Uuid,
    pub space_id: Uuid,
    pub vehicle_id: Uuid,
    pub reservation_start: DateTime<Utc>,
    pub reservation_end: Option<DateTime<Utc>>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub vehicle_type: String,
}

impl TryFrom<ReservationRow> for Reservation {
    type Error = AppError;

    fn try_from(value: ReservationRow) -> Result<Self, Self::Error> {
        let ReservationRow {
            reservation_id,
            user_id,
            space_id,
            vehicle_id,
            reservation_start,
            reservation_end,
            status,
            created_at,
            vehicle_type,
        } = value;
        let status = status.parse::<ReservationStatus>().map_err(|_| {
            AppError::ConversionEntityError(format!("unknown reservation status: {status}"))
        })?;
        Ok(Reservation {
            reservation_id: reservation_id.into(),
            user_id: user_id.into(),
            space_id: space_id.into(),
            vehicle_id: vehicle_id.into(),
            // No matching schedule means a zero fee, not a failed read.
            vehicle_type: vehicle_type.parse().unwrap_or(VehicleType::Unknown),
            reservation_start,
            reservation_end,
            status,
            created_at,
        })
    }
}

/// Reservation joined with its space, user, and vehicle projections.
#[derive(sqlx::FromRow)]
pub struct ReservationDetailsRow {
    pub reservation_id: Uuid,
    pub user_id: Uuid,
    pub space_id: Uuid,
    pub vehicle_id: Uuid,
    pub reservation_start: DateTime<Utc>,
    pub reservation_end: Option<DateTime<Utc>>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub space_number: String,
    pub is_occupied: bool,
    pub user_name: String,
    pub email: String,
    pub license_plate: String,
    pub vehicle_type: String,
    pub color: String,
}

impl TryFrom<ReservationDetailsRow> for ReservationDetails {
    type Error = AppError;

    fn try_from(value: ReservationDetailsRow) -> Result<Self, Self::Error> {
        let ReservationDetailsRow {
            reservation_id,
            user_id,
            space_id,
            vehicle_id,
            reservation_start,
            reservation_end,
            status,
            created_at,
            space_number,
            is_occupied,
            user_name,
            email,
            license_plate,
            vehicle_type,
            color,
        } = value;
        let status = status.parse::<ReservationStatus>().map_err(|_| {
            AppError::ConversionEntityError(format!("unknown reservation status: {status}"))
        })?;
        let vehicle_type = vehicle_type.parse().unwrap_or(VehicleType::Unknown);
        Ok(ReservationDetails {
            reservation: Reservation {
                reservation_id: reservation_id.into(),
                user_id: user_id.into(),
                space_id: space_id.into(),
                vehicle_id: vehicle_id.into(),
                vehicle_type,
                reservation_start,
                reservation_end,
                status,
                created_at,
            },
            space: ReservationSpace {
                space_id: space_id.into(),
                space_number,
                is_occupied,
            },
            user: ReservationUser {
                user_id: user_id.into(),
                user_name,
                email,
            },
            vehicle: Vehicle {
                vehicle_id: vehicle_id.into(),
                license_plate,
                vehicle_type,
                color,
            },
        })
    }
}
