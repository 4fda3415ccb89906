use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{ReservationId, SpaceId, UserId, VehicleId},
    reservation::{
        event::UpdateReservation, Checkout, Reservation, ReservationDetails, ReservationSpace,
        ReservationStatus, ReservationWithFee,
    },
    user::ReservationUser,
    vehicle::{Vehicle, VehicleType},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatusName {
    Pending,
    Completed,
    Cancelled,
}

impl From<ReservationStatus> for ReservationStatusName {
    fn from(value: ReservationStatus) -> Self {
        match value {
            ReservationStatus::Pending => Self::Pending,
            ReservationStatus::Completed => Self::Completed,
            ReservationStatus::Cancelled => Self::Cancelled,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleTypeName {
    Car,
    Motorcycle,
    Unknown,
}

impl From<VehicleType> for VehicleTypeName {
    fn from(value: VehicleType) -> Self {
        match value {
            VehicleType::Car => Self::Car,
            VehicleType::Motorcycle => Self::Motorcycle,
            VehicleType::Unknown => Self::Unknown,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    #[garde(skip)]
    pub user_id: UserId,
    #[garde(skip)]
    pub space_id: SpaceId,
    #[garde(skip)]
    pub vehicle_id: VehicleId,
    /// Defaults to the creation instant when omitted.
    #[garde(skip)]
    pub reservation_start: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReservationRequest {
    #[garde(skip)]
    pub user_id: Option<UserId>,
    #[garde(skip)]
    pub space_id: Option<SpaceId>,
    #[garde(skip)]
    pub vehicle_id: Option<VehicleId>,
    #[garde(skip)]
    pub reservation_start: Option<DateTime<Utc>>,
    #[garde(skip)]
    pub reservation_end: Option<DateTime<Utc>>,
}

#[derive(new)]
pub struct UpdateReservationRequestWithId(ReservationId, UpdateReservationRequest);

impl From<UpdateReservationRequestWithId> for UpdateReservation {
    fn from(value: UpdateReservationRequestWithId) -> Self {
        let UpdateReservationRequestWithId(
            reservation_id,
            UpdateReservationRequest {
                user_id,
                space_id,
                vehicle_id,
                reservation_start,
                reservation_end,
            },
        ) = value;
        UpdateReservation {
            reservation_id,
            user_id,
            space_id,
            vehicle_id,
            reservation_start,
            reservation_end,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub reservation_id: ReservationId,
    pub user_id: UserId,
    pub space_id: SpaceId,
    pub vehicle_id: VehicleId,
    pub vehicle_type: VehicleTypeName,
    pub reservation_start: DateTime<Utc>,
    pub reservation_end: Option<DateTime<Utc>>,
    pub status: ReservationStatusName,
    pub created_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationResponse {
    fn from(value: Reservation) -> Self {
        let Reservation {
            reservation_id,
            user_id,
            space_id,
            vehicle_id,
            vehicle_type,
            reservation_start,
            reservation_end,
            status,
            created_at,
        } = value;
        Self {
            reservation_id,
            user_id,
            space_id,
            vehicle_id,
            vehicle_type: vehicle_type.into(),
            reservation_start,
            reservation_end,
            status: status.into(),
            created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub fee: i64,
    #[serde(flatten)]
    pub reservation: ReservationResponse,
}

impl From<Checkout> for CheckoutResponse {
    fn from(value: Checkout) -> Self {
        let Checkout { reservation, fee } = value;
        Self {
            fee,
            reservation: reservation.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationWithFeeResponse {
    pub fee: i64,
    #[serde(flatten)]
    pub reservation: ReservationResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationsWithFeeResponse {
    pub items: Vec<ReservationWithFeeResponse>,
}

impl From<Vec<ReservationWithFee>> for ReservationsWithFeeResponse {
    fn from(value: Vec<ReservationWithFee>) -> Self {
        Self {
            items: value
                .into_iter()
                .map(|ReservationWithFee { reservation, fee }| ReservationWithFeeResponse {
                    fee,
                    reservation: reservation.into(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationSpaceResponse {
    pub space_id: SpaceId,
    pub space_number: String,
    pub is_occupied: bool,
}

impl From<ReservationSpace> for ReservationSpaceResponse {
    fn from(value: ReservationSpace) -> Self {
        let ReservationSpace {
            space_id,
            space_number,
            is_occupied,
        } = value;
        Self {
            space_id,
            space_number,
            is_occupied,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationUserResponse {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
}

impl From<ReservationUser> for ReservationUserResponse {
    fn from(value: ReservationUser) -> Self {
        let ReservationUser {
            user_id,
            user_name,
            email,
        } = value;
        Self {
            user_id,
            user_name,
            email,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub vehicle_id: VehicleId,
    pub license_plate: String,
    pub vehicle_type: VehicleTypeName,
    pub color: String,
}

impl From<Vehicle> for VehicleResponse {
    fn from(value: Vehicle) -> Self {
        let Vehicle {
            vehicle_id,
            license_plate,
            vehicle_type,
            color,
        } = value;
        Self {
            vehicle_id,
            license_plate,
            vehicle_type: vehicle_type.into(),
            color,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDetailsResponse {
    #[serde(flatten)]
    pub reservation: ReservationResponse,
    pub space: ReservationSpaceResponse,
    pub user: ReservationUserResponse,
    pub vehicle: VehicleResponse,
}

impl From<ReservationDetails> for ReservationDetailsResponse {
    fn from(value: ReservationDetails) -> Self {
        let ReservationDetails {
            reservation,
            space,
            user,
            vehicle,
        } = value;
        Self {
            reservation: reservation.into(),
            space: space.into(),
            user: user.into(),
            vehicle: vehicle.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDetailsListResponse {
    pub items: Vec<ReservationDetailsResponse>,
}

impl From<Vec<ReservationDetails>> for ReservationDetailsListResponse {
    fn from(value: Vec<ReservationDetails>) -> Self {
        Self {
            items: value
                .into_iter()
                .map(ReservationDetailsResponse::from)
                .collect(),
        }
    }
}
