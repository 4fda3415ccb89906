use kernel::model::space::ParkingSpace;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
pub struct SpaceRow {
    pub space_id: Uuid,
    pub space_number: String,
    pub is_occupied: bool,
}

impl From<SpaceRow> for ParkingSpace {
    fn from(value: SpaceRow) -> Self {
        let SpaceRow {
            space_id,
            space_number,
            is_occupied,
        } = value;
        ParkingSpace {
            space_id: space_id.into(),
            space_number,
            is_occupied,
        }
    }
}
