use crate::model::id::UserId;

#[derive(Debug, Clone)]
pub struct ReservationUser {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
}
