use crate::model::{
    id::SpaceId,
    space::{event::CreateSpace, ParkingSpace},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait SpaceRepository: Send + Sync {
    async fn create(&self, event: CreateSpace) -> AppResult<SpaceId>;
    async fn find_by_id(&self, space_id: SpaceId) -> AppResult<Option<ParkingSpace>>;
    async fn find_all(&self) -> AppResult<Vec<ParkingSpace>>;
    /// Idempotent: writing the already-stored value is a no-op, not an error.
    async fn set_occupied(&self, space_id: SpaceId, occupied: bool) -> AppResult<()>;
}
