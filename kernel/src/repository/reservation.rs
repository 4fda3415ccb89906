use crate::model::{
    id::{ReservationId, SpaceId, UserId},
    reservation::{
        event::{CreateReservation, UpdateReservation},
        Reservation, ReservationDetails, ReservationStatus,
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::error::AppResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Inserts a pending reservation. The store must uphold "at most one
    /// pending reservation per space" and report a violation as a conflict.
    async fn create(&self, event: CreateReservation) -> AppResult<ReservationId>;
    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>>;
    /// The single pending reservation of a user, earliest start first.
    async fn find_active_by_user(&self, user_id: UserId) -> AppResult<Option<Reservation>>;
    async fn find_pending_by_space(&self, space_id: SpaceId) -> AppResult<Option<Reservation>>;
    async fn find_all(&self) -> AppResult<Vec<Reservation>>;
    async fn find_all_details(&self) -> AppResult<Vec<ReservationDetails>>;
    /// Merge-with-existing field update; `None` keeps the stored value.
    async fn update_fields(&self, event: UpdateReservation) -> AppResult<()>;
    /// Status change guarded on the current status still being pending.
    async fn transition(
        &self,
        reservation_id: ReservationId,
        status: ReservationStatus,
        reservation_end: Option<DateTime<Utc>>,
    ) -> AppResult<()>;
}
