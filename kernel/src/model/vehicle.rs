use crate::model::id::VehicleId;
use strum::{Display, EnumString};

/// Reference data consumed by the core to pick a fee schedule. The core does
/// not own vehicle management.
#[derive(Debug, Clone)]
pub struct Vehicle {
    pub vehicle_id: VehicleId,
    pub license_plate: String,
    pub vehicle_type: VehicleType,
    pub color: String,
}

/// `Unknown` covers stored values that match no fee schedule; billing treats
/// it as a zero fee rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleType {
    Car,
    Motorcycle,
    Unknown,
}
