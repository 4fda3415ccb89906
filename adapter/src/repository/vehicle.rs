use crate::database::{model::vehicle::VehicleRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{id::VehicleId, vehicle::Vehicle};
use kernel::repository::vehicle::VehicleRepository;
use shared::error::{AppError, AppResult};
use uuid::Uuid;

#[derive(new)]
pub struct VehicleRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl VehicleRepository for VehicleRepositoryImpl {
    async fn find_by_id(&self, vehicle_id: VehicleId) -> AppResult<Option<Vehicle>> {
        let row: Option<VehicleRow> = sqlx::query_as(
            r#"
                SELECT vehicle_id, license_plate, vehicle_type, color
                FROM vehicles
                WHERE vehicle_id = $1
            "#,
        )
        .bind(Uuid::from(vehicle_id))
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Vehicle::from))
    }
}
