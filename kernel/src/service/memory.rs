//! In-memory fake stores for deterministic service tests. They mirror the
//! storage contract, including the one-pending-reservation-per-space
//! uniqueness and idempotent occupancy writes.

use crate::{
    model::{
        id::{ReservationId, SpaceId, UserId, VehicleId},
        reservation::{
            event::{CreateReservation, UpdateReservation},
            Reservation, ReservationDetails, ReservationSpace, ReservationStatus,
        },
        space::{event::CreateSpace, ParkingSpace},
        user::ReservationUser,
        vehicle::{Vehicle, VehicleType},
    },
    repository::{
        reservation::ReservationRepository, space::SpaceRepository, vehicle::VehicleRepository,
    },
    service::{
        occupancy::OccupancyCoordinator, query::ReservationQueryService,
        reservation::ReservationService,
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::error::{AppError, AppResult};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

#[derive(Default)]
pub struct InMemorySpaces {
    rows: Mutex<HashMap<SpaceId, ParkingSpace>>,
}

impl InMemorySpaces {
    pub fn get(&self, space_id: SpaceId) -> ParkingSpace {
        self.rows.lock().unwrap()[&space_id].clone()
    }

    /// Writes the flag directly, bypassing the coordinator, to simulate a
    /// failed two-step transition.
    pub fn force_occupied(&self, space_id: SpaceId, occupied: bool) {
        self.rows
            .lock()
            .unwrap()
            .get_mut(&space_id)
            .expect("space registered")
            .is_occupied = occupied;
    }
}

#[async_trait]
impl SpaceRepository for InMemorySpaces {
    async fn create(&self, event: CreateSpace) -> AppResult<SpaceId> {
        let space_id = SpaceId::new();
        self.rows.lock().unwrap().insert(
            space_id,
            ParkingSpace {
                space_id,
                space_number: event.space_number,
                is_occupied: false,
            },
        );
        Ok(space_id)
    }

    async fn find_by_id(&self, space_id: SpaceId) -> AppResult<Option<ParkingSpace>> {
        Ok(self.rows.lock().unwrap().get(&space_id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<ParkingSpace>> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn set_occupied(&self, space_id: SpaceId, occupied: bool) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let space = rows.get_mut(&space_id).ok_or_else(|| {
            AppError::EntityNotFound(format!("parking space {space_id} not found"))
        })?;
        space.is_occupied = occupied;
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryVehicles {
    rows: Mutex<HashMap<VehicleId, Vehicle>>,
}

impl InMemoryVehicles {
    pub fn add(&self, vehicle_type: VehicleType) -> VehicleId {
        let vehicle_id = VehicleId::new();
        self.rows.lock().unwrap().insert(
            vehicle_id,
            Vehicle {
                vehicle_id,
                license_plate: format!("TEST-{}", &vehicle_id.to_string()[..8]),
                vehicle_type,
                color: "gray".into(),
            },
        );
        vehicle_id
    }

    fn lookup(&self, vehicle_id: VehicleId) -> Option<Vehicle> {
        self.rows.lock().unwrap().get(&vehicle_id).cloned()
    }
}

#[async_trait]
impl VehicleRepository for InMemoryVehicles {
    async fn find_by_id(&self, vehicle_id: VehicleId) -> AppResult<Option<Vehicle>> {
        Ok(self.lookup(vehicle_id))
    }
}

pub struct InMemoryReservations {
    rows: Mutex<HashMap<ReservationId, Reservation>>,
    users: Mutex<HashMap<UserId, ReservationUser>>,
    spaces: Arc<InMemorySpaces>,
    vehicles: Arc<InMemoryVehicles>,
}

impl InMemoryReservations {
    fn new(spaces: Arc<InMemorySpaces>, vehicles: Arc<InMemoryVehicles>) -> Self {
        Self {
            rows: Mutex::default(),
            users: Mutex::default(),
            spaces,
            vehicles,
        }
    }

    pub fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn snapshot(&self, reservation_id: ReservationId) -> Option<Reservation> {
        self.rows.lock().unwrap().get(&reservation_id).cloned()
    }

    fn register_user(&self, user: ReservationUser) {
        self.users.lock().unwrap().insert(user.user_id, user);
    }
}

#[async_trait]
impl ReservationRepository for InMemoryReservations {
    async fn create(&self, event: CreateReservation) -> AppResult<ReservationId> {
        let mut rows = self.rows.lock().unwrap();
        let pending_exists = rows
            .values()
            .any(|r| r.space_id == event.space_id && r.status == ReservationStatus::Pending);
        if pending_exists {
            return Err(AppError::OccupancyConflict(format!(
                "parking space {} already has a pending reservation",
                event.space_id
            )));
        }

        let vehicle_type = self
            .vehicles
            .lookup(event.vehicle_id)
            .map(|v| v.vehicle_type)
            .unwrap_or(VehicleType::Unknown);
        let reservation_id = ReservationId::new();
        rows.insert(
            reservation_id,
            Reservation {
                reservation_id,
                user_id: event.user_id,
                space_id: event.space_id,
                vehicle_id: event.vehicle_id,
                vehicle_type,
                reservation_start: event.reservation_start,
                reservation_end: None,
                status: ReservationStatus::Pending,
                created_at: event.created_at,
            },
        );
        Ok(reservation_id)
    }

    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>> {
        Ok(self.rows.lock().unwrap().get(&reservation_id).cloned())
    }

    async fn find_active_by_user(&self, user_id: UserId) -> AppResult<Option<Reservation>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.user_id == user_id && r.status == ReservationStatus::Pending)
            .min_by_key(|r| r.reservation_start)
            .cloned())
    }

    async fn find_pending_by_space(&self, space_id: SpaceId) -> AppResult<Option<Reservation>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|r| r.space_id == space_id && r.status == ReservationStatus::Pending)
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Reservation>> {
        let mut all: Vec<_> = self.rows.lock().unwrap().values().cloned().collect();
        all.sort_by_key(|r| r.created_at);
        Ok(all)
    }

    async fn find_all_details(&self) -> AppResult<Vec<ReservationDetails>> {
        let users = self.users.lock().unwrap();
        self.rows
            .lock()
            .unwrap()
            .values()
            .map(|r| {
                let space = self.spaces.get(r.space_id);
                let vehicle = self.vehicles.lookup(r.vehicle_id).ok_or_else(|| {
                    AppError::ConversionEntityError(format!(
                        "vehicle {} missing from reference data",
                        r.vehicle_id
                    ))
                })?;
                let user = users.get(&r.user_id).cloned().unwrap_or(ReservationUser {
                    user_id: r.user_id,
                    user_name: "unknown".into(),
                    email: "unknown@example.com".into(),
                });
                Ok(ReservationDetails {
                    reservation: r.clone(),
                    space: ReservationSpace {
                        space_id: space.space_id,
                        space_number: space.space_number,
                        is_occupied: space.is_occupied,
                    },
                    user,
                    vehicle,
                })
            })
            .collect()
    }

    async fn update_fields(&self, event: UpdateReservation) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows.get_mut(&event.reservation_id).ok_or_else(|| {
            AppError::EntityNotFound(format!("reservation {} not found", event.reservation_id))
        })?;
        row.user_id = event.user_id.unwrap_or(row.user_id);
        row.space_id = event.space_id.unwrap_or(row.space_id);
        if let Some(vehicle_id) = event.vehicle_id {
            row.vehicle_id = vehicle_id;
            row.vehicle_type = self
                .vehicles
                .lookup(vehicle_id)
                .map(|v| v.vehicle_type)
                .unwrap_or(VehicleType::Unknown);
        }
        row.reservation_start = event.reservation_start.unwrap_or(row.reservation_start);
        row.reservation_end = event.reservation_end.or(row.reservation_end);
        Ok(())
    }

    async fn transition(
        &self,
        reservation_id: ReservationId,
        status: ReservationStatus,
        reservation_end: Option<DateTime<Utc>>,
    ) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows.get_mut(&reservation_id).ok_or_else(|| {
            AppError::EntityNotFound(format!("reservation {reservation_id} not found"))
        })?;
        if row.status != ReservationStatus::Pending {
            return Err(AppError::NoRowsAffectedError(
                "reservation is no longer pending".into(),
            ));
        }
        row.status = status;
        row.reservation_end = reservation_end.or(row.reservation_end);
        Ok(())
    }
}

pub struct TestWorld {
    pub spaces: Arc<InMemorySpaces>,
    pub vehicles: Arc<InMemoryVehicles>,
    pub reservations: Arc<InMemoryReservations>,
    pub coordinator: Arc<OccupancyCoordinator>,
    pub service: ReservationService,
    pub query: ReservationQueryService,
}

impl TestWorld {
    pub fn add_space(&self, space_number: &str) -> SpaceId {
        let space_id = SpaceId::new();
        self.spaces.rows.lock().unwrap().insert(
            space_id,
            ParkingSpace {
                space_id,
                space_number: space_number.into(),
                is_occupied: false,
            },
        );
        space_id
    }

    pub fn add_vehicle(&self, vehicle_type: VehicleType) -> VehicleId {
        self.vehicles.add(vehicle_type)
    }

    pub fn add_user(&self, user_name: &str, email: &str) -> UserId {
        let user_id = UserId::new();
        self.reservations.register_user(ReservationUser {
            user_id,
            user_name: user_name.into(),
            email: email.into(),
        });
        user_id
    }
}

pub fn world() -> TestWorld {
    let spaces = Arc::new(InMemorySpaces::default());
    let vehicles = Arc::new(InMemoryVehicles::default());
    let reservations = Arc::new(InMemoryReservations::new(spaces.clone(), vehicles.clone()));
    let coordinator = Arc::new(OccupancyCoordinator::new(
        spaces.clone(),
        reservations.clone(),
    ));
    let service = ReservationService::new(
        reservations.clone(),
        spaces.clone(),
        vehicles.clone(),
        coordinator.clone(),
    );
    let query = ReservationQueryService::new(reservations.clone());
    TestWorld {
        spaces,
        vehicles,
        reservations,
        coordinator,
        service,
        query,
    }
}
