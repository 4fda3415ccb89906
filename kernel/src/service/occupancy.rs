use crate::{
    model::{id::SpaceId, space::ParkingSpace},
    repository::{reservation::ReservationRepository, space::SpaceRepository},
};
use derive_new::new;
use shared::error::{AppError, AppResult};
use std::sync::Arc;

/// Keeps a space's `is_occupied` flag in lockstep with reservation
/// transitions. Not called by HTTP handlers directly, except for the explicit
/// reconcile repair operation.
#[derive(new)]
pub struct OccupancyCoordinator {
    space_repository: Arc<dyn SpaceRepository>,
    reservation_repository: Arc<dyn ReservationRepository>,
}

#[derive(Debug)]
pub struct OccupancyReport {
    pub space_id: SpaceId,
    pub has_pending: bool,
    pub was_occupied: bool,
    pub repaired: bool,
}

impl OccupancyCoordinator {
    /// Marks the space occupied, re-validating the flag even though the
    /// lifecycle manager checked it already.
    pub async fn acquire(&self, space_id: SpaceId) -> AppResult<()> {
        let space = self.space_of(space_id).await?;
        if space.is_occupied {
            return Err(AppError::OccupancyConflict(format!(
                "parking space {space_id} is already occupied"
            )));
        }
        self.space_repository.set_occupied(space_id, true).await
    }

    /// Releasing an already free space is a no-op, so a failed two-step
    /// transition can be retried safely.
    pub async fn release(&self, space_id: SpaceId) -> AppResult<()> {
        self.space_repository.set_occupied(space_id, false).await
    }

    /// Surfaces a divergence between the flag and the pending reservation set
    /// without repairing it.
    pub async fn verify(&self, space_id: SpaceId) -> AppResult<()> {
        let space = self.space_of(space_id).await?;
        let has_pending = self
            .reservation_repository
            .find_pending_by_space(space_id)
            .await?
            .is_some();
        if space.is_occupied != has_pending {
            return Err(AppError::ConsistencyError(format!(
                "parking space {space_id} is marked occupied={} while a pending reservation {}",
                space.is_occupied,
                if has_pending { "exists" } else { "does not exist" },
            )));
        }
        Ok(())
    }

    /// Explicit repair for a two-step write that failed between the
    /// reservation transition and the flag update.
    pub async fn reconcile(&self, space_id: SpaceId) -> AppResult<OccupancyReport> {
        let space = self.space_of(space_id).await?;
        let has_pending = self
            .reservation_repository
            .find_pending_by_space(space_id)
            .await?
            .is_some();
        let repaired = space.is_occupied != has_pending;
        if repaired {
            tracing::warn!(
                %space_id,
                was_occupied = space.is_occupied,
                has_pending,
                "repairing diverged occupancy flag"
            );
            self.space_repository.set_occupied(space_id, has_pending).await?;
        }
        Ok(OccupancyReport {
            space_id,
            has_pending,
            was_occupied: space.is_occupied,
            repaired,
        })
    }

    async fn space_of(&self, space_id: SpaceId) -> AppResult<ParkingSpace> {
        self.space_repository
            .find_by_id(space_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound(format!("parking space {space_id} not found")))
    }
}
