use garde::Validate;
use kernel::model::{
    id::SpaceId,
    space::{event::CreateSpace, ParkingSpace},
};
use kernel::service::occupancy::OccupancyReport;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSpaceRequest {
    #[garde(length(min = 1))]
    pub space_number: String,
}

impl From<CreateSpaceRequest> for CreateSpace {
    fn from(value: CreateSpaceRequest) -> Self {
        let CreateSpaceRequest { space_number } = value;
        CreateSpace { space_number }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceResponse {
    pub space_id: SpaceId,
    pub space_number: String,
    pub is_occupied: bool,
}

impl From<ParkingSpace> for SpaceResponse {
    fn from(value: ParkingSpace) -> Self {
        let ParkingSpace {
            space_id,
            space_number,
            is_occupied,
        } = value;
        Self {
            space_id,
            space_number,
            is_occupied,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacesResponse {
    pub items: Vec<SpaceResponse>,
}

impl From<Vec<ParkingSpace>> for SpacesResponse {
    fn from(value: Vec<ParkingSpace>) -> Self {
        Self {
            items: value.into_iter().map(SpaceResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyReportResponse {
    pub space_id: SpaceId,
    pub has_pending: bool,
    pub was_occupied: bool,
    pub repaired: bool,
}

impl From<OccupancyReport> for OccupancyReportResponse {
    fn from(value: OccupancyReport) -> Self {
        let OccupancyReport {
            space_id,
            has_pending,
            was_occupied,
            repaired,
        } = value;
        Self {
            space_id,
            has_pending,
            was_occupied,
            repaired,
        }
    }
}
