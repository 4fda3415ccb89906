pub mod occupancy;
pub mod query;
pub mod reservation;

#[cfg(test)]
pub(crate) mod memory;
