//! Per-cell slot classification.
//!
//! [`evaluate_slot`] is pure: it reads the candidate, the engineer list and the
//! locked set, and never mutates anything. Renderers call it once per grid cell
//! on every state change, so each call stays O(engineers x windows).

use std::borrow::Borrow;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::availability::is_engineer_available;
use crate::grid::{cells_covered, is_grid_slot, time_slots, GridCell};
use crate::roster::{Candidate, Engineer};
use crate::time::{add_minutes, InterviewDuration, TimeLabel, Weekday};

/// Display and interaction state of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotState {
    /// A prior booking in this session consumed part of the requested run.
    Locked,
    /// Candidate preference and engineer availability both contain the interval.
    Overlap,
    /// Some engineer is free, but the candidate's preference does not match.
    EngineerOnly,
    Unavailable,
}

impl SlotState {
    /// Whether clicking a cell in this state books it.
    pub fn is_actionable(self) -> bool {
        matches!(self, SlotState::Overlap | SlotState::EngineerOnly)
    }

    /// Single-character legend used by text renderers.
    pub fn symbol(self) -> char {
        match self {
            SlotState::Locked => '#',
            SlotState::Overlap => 'O',
            SlotState::EngineerOnly => 'e',
            SlotState::Unavailable => '.',
        }
    }
}

/// Classify a single cell. First match wins: Locked, Overlap, EngineerOnly, Unavailable.
///
/// Times that are not grid slot boundaries (see [`is_grid_slot`]) are always
/// `Unavailable`, so they can never be booked or locked.
pub fn evaluate_slot<E: Borrow<Engineer>>(
    day: Weekday,
    time: TimeLabel,
    candidate: Option<&Candidate>,
    engineers: &[E],
    duration: InterviewDuration,
    locked: &BTreeSet<GridCell>,
) -> SlotState {
    if !is_grid_slot(time) {
        return SlotState::Unavailable;
    }

    if cells_covered(day, time, duration)
        .iter()
        .any(|cell| locked.contains(cell))
    {
        return SlotState::Locked;
    }

    let engineer_ok = is_engineer_available(day, time, engineers, duration);
    if !engineer_ok {
        return SlotState::Unavailable;
    }

    let end = add_minutes(time, i64::from(duration.minutes()));
    let candidate_ok = candidate.is_some_and(|c| c.preferred.contains(day, time, end));
    if candidate_ok {
        SlotState::Overlap
    } else {
        SlotState::EngineerOnly
    }
}

/// One rendered row of the grid: a time label and the state of each weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRow {
    pub time: TimeLabel,
    /// Indexed like [`Weekday::ALL`].
    pub states: [SlotState; 5],
}

impl GridRow {
    pub fn state(&self, day: Weekday) -> SlotState {
        self.states[day as usize]
    }
}

/// Evaluate every cell of the weekly grid.
pub fn evaluate_grid<E: Borrow<Engineer>>(
    candidate: Option<&Candidate>,
    engineers: &[E],
    duration: InterviewDuration,
    locked: &BTreeSet<GridCell>,
) -> Vec<GridRow> {
    time_slots()
        .into_iter()
        .map(|time| GridRow {
            time,
            states: Weekday::ALL
                .map(|day| evaluate_slot(day, time, candidate, engineers, duration, locked)),
        })
        .collect()
}
