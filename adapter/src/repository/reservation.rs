use crate::database::{
    model::reservation::{ReservationDetailsRow, ReservationRow},
    ConnectionPool,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use derive_new::new;
use kernel::model::{
    id::{ReservationId, SpaceId, UserId},
    reservation::{
        event::{CreateReservation, UpdateReservation},
        Reservation, ReservationDetails, ReservationStatus,
    },
};
use kernel::repository::reservation::ReservationRepository;
use shared::error::{AppError, AppResult};
use uuid::Uuid;

#[derive(new)]
pub struct ReservationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    async fn create(&self, event: CreateReservation) -> AppResult<ReservationId> {
        let mut tx = self.db.begin().await?;

        // The space must exist before a pending row can be held against it.
        let space_row: Option<(Uuid,)> =
            sqlx::query_as("SELECT space_id FROM parking_spaces WHERE space_id = $1")
                .bind(Uuid::from(event.space_id))
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;
        if space_row.is_none() {
            return Err(AppError::EntityNotFound(format!(
                "parking space {} not found",
                event.space_id
            )));
        }

        // The partial unique index on (space_id) WHERE status = 'pending'
        // serializes concurrent creates for the same space; the loser sees a
        // unique violation here.
        let reservation_id = ReservationId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO reservations
                (reservation_id, user_id, space_id, vehicle_id,
                 reservation_start, reservation_end, status, created_at)
                VALUES ($1, $2, $3, $4, $5, NULL, $6, $7)
            "#,
        )
        .bind(Uuid::from(reservation_id))
        .bind(Uuid::from(event.user_id))
        .bind(Uuid::from(event.space_id))
        .bind(Uuid::from(event.vehicle_id))
        .bind(event.reservation_start)
        .bind(ReservationStatus::Pending.to_string())
        .bind(event.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db) = e {
                if db.is_unique_violation() {
                    return AppError::OccupancyConflict(format!(
                        "parking space {} already has a pending reservation",
                        event.space_id
                    ));
                }
            }
            AppError::SpecificOperationError(e)
        })?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no reservation record has been created".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(reservation_id)
    }

    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>> {
        let row: Option<ReservationRow> = sqlx::query_as(
            r#"
                SELECT
                r.reservation_id,
                r.user_id,
                r.space_id,
                r.vehicle_id,
                r.reservation_start,
                r.reservation_end,
                r.status,
                r.created_at,
                v.vehicle_type
                FROM reservations AS r
                INNER JOIN vehicles AS v ON r.vehicle_id = v.vehicle_id
                WHERE r.reservation_id = $1
            "#,
        )
        .bind(Uuid::from(reservation_id))
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Reservation::try_from).transpose()
    }

    async fn find_active_by_user(&self, user_id: UserId) -> AppResult<Option<Reservation>> {
        let row: Option<ReservationRow> = sqlx::query_as(
            r#"
                SELECT
                r.reservation_id,
                r.user_id,
                r.space_id,
                r.vehicle_id,
                r.reservation_start,
                r.reservation_end,
                r.status,
                r.created_at,
                v.vehicle_type
                FROM reservations AS r
                INNER JOIN vehicles AS v ON r.vehicle_id = v.vehicle_id
                WHERE r.user_id = $1 AND r.status = $2
                ORDER BY r.reservation_start ASC
                LIMIT 1
            "#,
        )
        .bind(Uuid::from(user_id))
        .bind(ReservationStatus::Pending.to_string())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Reservation::try_from).transpose()
    }

    async fn find_pending_by_space(&self, space_id: SpaceId) -> AppResult<Option<Reservation>> {
        let row: Option<ReservationRow> = sqlx::query_as(
            r#"
                SELECT
                r.reservation_id,
                r.user_id,
                r.space_id,
                r.vehicle_id,
                r.reservation_start,
                r.reservation_end,
                r.status,
                r.created_at,
                v.vehicle_type
                FROM reservations AS r
                INNER JOIN vehicles AS v ON r.vehicle_id = v.vehicle_id
                WHERE r.space_id = $1 AND r.status = $2
            "#,
        )
        .bind(Uuid::from(space_id))
        .bind(ReservationStatus::Pending.to_string())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Reservation::try_from).transpose()
    }

    async fn find_all(&self) -> AppResult<Vec<Reservation>> {
        let rows: Vec<ReservationRow> = sqlx::query_as(
            r#"
                SELECT
                r.reservation_id,
                r.user_id,
                r.space_id,
                r.vehicle_id,
                r.reservation_start,
                r.reservation_end,
                r.status,
                r.created_at,
                v.vehicle_type
                FROM reservations AS r
                INNER JOIN vehicles AS v ON r.vehicle_id = v.vehicle_id
                ORDER BY r.created_at ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Reservation::try_from).collect()
    }

    async fn find_all_details(&self) -> AppResult<Vec<ReservationDetails>> {
        let rows: Vec<ReservationDetailsRow> = sqlx::query_as(
            r#"
                SELECT
                r.reservation_id,
                r.user_id,
                r.space_id,
                r.vehicle_id,
                r.reservation_start,
                r.reservation_end,
                r.status,
                r.created_at,
                s.space_number,
                s.is_occupied,
                u.user_name,
                u.email,
                v.license_plate,
                v.vehicle_type,
                v.color
                FROM reservations AS r
                INNER JOIN parking_spaces AS s ON r.space_id = s.space_id
                INNER JOIN users AS u ON r.user_id = u.user_id
                INNER JOIN vehicles AS v ON r.vehicle_id = v.vehicle_id
                ORDER BY r.created_at ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(ReservationDetails::try_from).collect()
    }

    async fn update_fields(&self, event: UpdateReservation) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE reservations
                SET
                    user_id = COALESCE($2, user_id),
                    space_id = COALESCE($3, space_id),
                    vehicle_id = COALESCE($4, vehicle_id),
                    reservation_start = COALESCE($5, reservation_start),
                    reservation_end = COALESCE($6, reservation_end)
                WHERE reservation_id = $1
            "#,
        )
        .bind(Uuid::from(event.reservation_id))
        .bind(event.user_id.map(Uuid::from))
        .bind(event.space_id.map(Uuid::from))
        .bind(event.vehicle_id.map(Uuid::from))
        .bind(event.reservation_start)
        .bind(event.reservation_end)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(
                "specified reservation not found".into(),
            ));
        }

        Ok(())
    }

    async fn transition(
        &self,
        reservation_id: ReservationId,
        status: ReservationStatus,
        reservation_end: Option<DateTime<Utc>>,
    ) -> AppResult<()> {
        // Guarding on the current status keeps a racing double-checkout from
        // rewriting a terminal row.
        let res = sqlx::query(
            r#"
                UPDATE reservations
                SET
                    status = $2,
                    reservation_end = COALESCE($3, reservation_end)
                WHERE reservation_id = $1 AND status = $4
            "#,
        )
        .bind(Uuid::from(reservation_id))
        .bind(status.to_string())
        .bind(reservation_end)
        .bind(ReservationStatus::Pending.to_string())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "reservation is no longer pending".into(),
            ));
        }

        Ok(())
    }
}
