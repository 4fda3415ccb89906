//! Duration-based parking fee calculation.
//!
//! The first hour is always billed at the flat minimum, even for stays under
//! an hour. Time beyond the first hour is rounded up to whole hours and
//! billed at the per-hour rate.

use crate::model::vehicle::VehicleType;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSchedule {
    pub minimum: i64,
    pub hourly_rate: i64,
}

pub fn schedule_for(vehicle_type: &VehicleType) -> Option<FeeSchedule> {
    match vehicle_type {
        VehicleType::Car => Some(FeeSchedule {
            minimum: 2000,
            hourly_rate: 1000,
        }),
        VehicleType::Motorcycle => Some(FeeSchedule {
            minimum: 1500,
            hourly_rate: 500,
        }),
        VehicleType::Unknown => None,
    }
}

/// Deterministic and side-effect free. A vehicle type with no schedule is
/// billed at 0; rejecting it is the caller's call.
pub fn compute_fee(vehicle_type: &VehicleType, duration_hours: f64) -> i64 {
    let Some(schedule) = schedule_for(vehicle_type) else {
        return 0;
    };
    let mut fee = schedule.minimum;
    if duration_hours > 1.0 {
        fee += (duration_hours - 1.0).ceil() as i64 * schedule.hourly_rate;
    }
    fee
}

/// Elapsed time in fractional hours, sub-second precision, clamped at 0 when
/// the checkout instant precedes the start.
pub fn duration_hours(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_milliseconds().max(0) as f64 / 3_600_000.0
}
