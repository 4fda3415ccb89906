use kernel::model::vehicle::{Vehicle, VehicleType};
use uuid::Uuid;

#[derive(sqlx::FromRow)]
pub struct VehicleRow {
    pub vehicle_id: Uuid,
    pub license_plate: String,
    pub vehicle_type: String,
    pub color: String,
}

impl From<VehicleRow> for Vehicle {
    fn from(value: VehicleRow) -> Self {
        let VehicleRow {
            vehicle_id,
            license_plate,
            vehicle_type,
            color,
        } = value;
        Vehicle {
            vehicle_id: vehicle_id.into(),
            license_plate,
            vehicle_type: vehicle_type.parse().unwrap_or(VehicleType::Unknown),
            color,
        }
    }
}
