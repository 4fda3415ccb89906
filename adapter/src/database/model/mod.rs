pub mod reservation;
pub mod space;
pub mod vehicle;
