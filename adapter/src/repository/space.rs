use crate::database::{model::space::SpaceRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::SpaceId,
    space::{event::CreateSpace, ParkingSpace},
};
use kernel::repository::space::SpaceRepository;
use shared::error::{AppError, AppResult};
use uuid::Uuid;

#[derive(new)]
pub struct SpaceRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl SpaceRepository for SpaceRepositoryImpl {
    async fn create(&self, event: CreateSpace) -> AppResult<SpaceId> {
        let space_id = SpaceId::new();
        sqlx::query(
            r#"
                INSERT INTO parking_spaces (space_id, space_number, is_occupied)
                VALUES ($1, $2, FALSE)
            "#,
        )
        .bind(Uuid::from(space_id))
        .bind(event.space_number)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(space_id)
    }

    async fn find_by_id(&self, space_id: SpaceId) -> AppResult<Option<ParkingSpace>> {
        let row: Option<SpaceRow> = sqlx::query_as(
            r#"
                SELECT space_id, space_number, is_occupied
                FROM parking_spaces
                WHERE space_id = $1
            "#,
        )
        .bind(Uuid::from(space_id))
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(ParkingSpace::from))
    }

    async fn find_all(&self) -> AppResult<Vec<ParkingSpace>> {
        let rows: Vec<SpaceRow> = sqlx::query_as(
            r#"
                SELECT space_id, space_number, is_occupied
                FROM parking_spaces
                ORDER BY space_number ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(ParkingSpace::from).collect())
    }

    async fn set_occupied(&self, space_id: SpaceId, occupied: bool) -> AppResult<()> {
        // Writing the stored value again is fine; only a missing row is an
        // error.
        let res = sqlx::query(
            r#"
                UPDATE parking_spaces
                SET is_occupied = $2
                WHERE space_id = $1
            "#,
        )
        .bind(Uuid::from(space_id))
        .bind(occupied)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "parking space {space_id} not found"
            )));
        }

        Ok(())
    }
}
