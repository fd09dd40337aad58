//! Unit-level availability for a vehicle model.

use crate::dates::DateRange;

use super::overlap::has_overlap;

/// One physical car of a model together with its booked ranges
#[derive(Debug, Clone)]
pub struct UnitSchedule {
    pub car_id: i32,
    pub booked: Vec<DateRange>,
}

impl UnitSchedule {
    pub fn new(car_id: i32, booked: Vec<DateRange>) -> Self {
        Self { car_id, booked }
    }

    pub fn is_free(&self, candidate: &DateRange) -> bool {
        !has_overlap(candidate, &self.booked)
    }
}

/// Pick a unit that is free for the whole candidate range.
///
/// Returns `preferred` when that unit is free, otherwise the free unit with
/// the lowest id. `None` means every unit is booked on at least one of the
/// requested days.
pub fn find_free_unit(candidate: &DateRange, units: &[UnitSchedule], preferred: Option<i32>) -> Option<i32> {
    let free: Vec<i32> = units
        .iter()
        .filter(|unit| unit.is_free(candidate))
        .map(|unit| unit.car_id)
        .collect();

    match preferred {
        Some(car_id) if free.contains(&car_id) => Some(car_id),
        _ => free.into_iter().min(),
    }
}
