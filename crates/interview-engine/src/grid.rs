//! The fixed weekly calendar grid: Monday to Friday, 09:00 to 18:00, 30-minute cells.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};
use crate::time::{add_minutes, InterviewDuration, TimeLabel, Weekday};

/// First hour shown in the grid.
pub const START_HOUR: u32 = 9;
/// The grid stops before this hour.
pub const END_HOUR: u32 = 18;
/// Width of one grid cell in minutes.
pub const CELL_MINUTES: i64 = 30;

/// One cell of the weekly grid, also used to record a locked slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub day: Weekday,
    pub time: TimeLabel,
}

impl GridCell {
    pub fn new(day: Weekday, time: TimeLabel) -> Self {
        Self { day, time }
    }
}

/// Whether `time` is one of the grid's slot boundaries: on the hour or half
/// hour, `09:00` through `17:30`.
pub fn is_grid_slot(time: TimeLabel) -> bool {
    (START_HOUR..END_HOUR).contains(&time.hour()) && matches!(time.minute(), 0 | 30)
}

/// Parse an `HH:MM` label that must also be a grid slot boundary.
pub fn parse_grid_slot(raw: &str) -> Result<TimeLabel> {
    let time = TimeLabel::parse(raw)?;
    if is_grid_slot(time) {
        Ok(time)
    } else {
        Err(SchedulerError::OffGrid(time.to_string()))
    }
}

/// The 18 slot boundaries of a grid day, `09:00` through `17:30`.
pub fn time_slots() -> Vec<TimeLabel> {
    (START_HOUR..END_HOUR)
        .flat_map(|hour| [0, 30].into_iter().filter_map(move |m| TimeLabel::from_hm(hour, m)))
        .collect()
}

/// Every cell of the grid in row-major order (time, then day).
pub fn all_cells() -> Vec<GridCell> {
    time_slots()
        .into_iter()
        .flat_map(|time| Weekday::ALL.into_iter().map(move |day| GridCell::new(day, time)))
        .collect()
}

/// The consecutive 30-minute cells a booking of `duration` starting at `time` occupies.
///
/// Yields `ceil(duration / 30)` cells on the same day, minus any that fall past
/// the last grid row: a 60-minute run from `17:30` covers only `17:30`.
pub fn cells_covered(day: Weekday, time: TimeLabel, duration: InterviewDuration) -> Vec<GridCell> {
    let mut cells = Vec::with_capacity(duration.cells());
    let mut current = time;
    for _ in 0..duration.cells() {
        if current.hour() >= END_HOUR {
            break;
        }
        cells.push(GridCell::new(day, current));
        current = add_minutes(current, CELL_MINUTES);
    }
    cells
}
