pub mod id;
pub mod reservation;
pub mod space;
pub mod user;
pub mod vehicle;
