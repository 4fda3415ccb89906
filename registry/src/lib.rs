use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::{
    health::HealthCheckRepositoryImpl, reservation::ReservationRepositoryImpl,
    space::SpaceRepositoryImpl, vehicle::VehicleRepositoryImpl,
};
use kernel::repository::{
    health::HealthCheckRepository, reservation::ReservationRepository, space::SpaceRepository,
    vehicle::VehicleRepository,
};
use kernel::service::{
    occupancy::OccupancyCoordinator, query::ReservationQueryService,
    reservation::ReservationService,
};

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    space_repository: Arc<dyn SpaceRepository>,
    occupancy_coordinator: Arc<OccupancyCoordinator>,
    reservation_service: Arc<ReservationService>,
    reservation_query_service: Arc<ReservationQueryService>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        let health_check_repository: Arc<dyn HealthCheckRepository> =
            Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let reservation_repository: Arc<dyn ReservationRepository> =
            Arc::new(ReservationRepositoryImpl::new(pool.clone()));
        let space_repository: Arc<dyn SpaceRepository> =
            Arc::new(SpaceRepositoryImpl::new(pool.clone()));
        let vehicle_repository: Arc<dyn VehicleRepository> =
            Arc::new(VehicleRepositoryImpl::new(pool.clone()));
        let occupancy_coordinator = Arc::new(OccupancyCoordinator::new(
            space_repository.clone(),
            reservation_repository.clone(),
        ));
        let reservation_service = Arc::new(ReservationService::new(
            reservation_repository.clone(),
            space_repository.clone(),
            vehicle_repository.clone(),
            occupancy_coordinator.clone(),
        ));
        let reservation_query_service =
            Arc::new(ReservationQueryService::new(reservation_repository));
        Self {
            health_check_repository,
            space_repository,
            occupancy_coordinator,
            reservation_service,
            reservation_query_service,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn space_repository(&self) -> Arc<dyn SpaceRepository> {
        self.space_repository.clone()
    }

    pub fn occupancy_coordinator(&self) -> Arc<OccupancyCoordinator> {
        self.occupancy_coordinator.clone()
    }

    pub fn reservation_service(&self) -> Arc<ReservationService> {
        self.reservation_service.clone()
    }

    pub fn reservation_query_service(&self) -> Arc<ReservationQueryService> {
        self.reservation_query_service.clone()
    }
}
