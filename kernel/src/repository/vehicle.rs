use crate::model::{id::VehicleId, vehicle::Vehicle};
use async_trait::async_trait;
use shared::error::AppResult;

/// Read-only vehicle reference data; the fee schedule is keyed off
/// `Vehicle::vehicle_type`.
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    async fn find_by_id(&self, vehicle_id: VehicleId) -> AppResult<Option<Vehicle>>;
}
