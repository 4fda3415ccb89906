use crate::model::id::SpaceId;

pub mod event;

/// `is_occupied` is derived state: true iff a pending reservation points at
/// this space. The occupancy coordinator owns every write to the flag.
#[derive(Debug, Clone)]
pub struct ParkingSpace {
    pub space_id: SpaceId,
    pub space_number: String,
    pub is_occupied: bool,
}
