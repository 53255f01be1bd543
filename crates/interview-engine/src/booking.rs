//! Booking state: the locked-slot set and the most recent booking of a session.
//!
//! A session accumulates locks across successive clicks, which is how several
//! non-overlapping interviews can be booked in one sitting. Any upstream
//! selection change, or an explicit reset, clears both the locks and the booking
//! together.

use std::borrow::Borrow;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::availability::first_available_engineer;
use crate::evaluator::evaluate_slot;
use crate::grid::{cells_covered, GridCell};
use crate::roster::{AvailabilityWindow, Candidate, Engineer};
use crate::time::{add_minutes, InterviewDuration, TimeLabel, Weekday};

/// The interview created by the latest successful click.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub day: Weekday,
    pub time: TimeLabel,
    pub engineer_id: String,
    pub engineer_name: String,
    pub duration: InterviewDuration,
}

impl Booking {
    pub fn end(&self) -> TimeLabel {
        add_minutes(self.time, i64::from(self.duration.minutes()))
    }

    /// The grid cells this booking occupies.
    pub fn cells(&self) -> Vec<GridCell> {
        cells_covered(self.day, self.time, self.duration)
    }

    /// The portable record of this booking for `candidate`.
    pub fn scheduled_for(&self, candidate: &Candidate) -> ScheduledInterview {
        ScheduledInterview {
            candidate_id: candidate.id.clone(),
            engineer_id: self.engineer_id.clone(),
            slot: AvailabilityWindow::new(self.day, self.time, self.end()),
            duration: self.duration,
        }
    }
}

/// A confirmed interview between a candidate and an engineer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledInterview {
    pub candidate_id: String,
    pub engineer_id: String,
    pub slot: AvailabilityWindow,
    pub duration: InterviewDuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Idle,
    Booked,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSession {
    locked: BTreeSet<GridCell>,
    booking: Option<Booking>,
}

impl BookingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        if self.booking.is_some() {
            SessionState::Booked
        } else {
            SessionState::Idle
        }
    }

    pub fn locked(&self) -> &BTreeSet<GridCell> {
        &self.locked
    }

    pub fn booking(&self) -> Option<&Booking> {
        self.booking.as_ref()
    }

    /// Handle a click on `(day, time)`.
    ///
    /// Only `Overlap` and `EngineerOnly` cells book; anything else, including a
    /// time off the grid's half-hour boundaries, is ignored and `None` is
    /// returned. A successful click credits the first engineer
    /// in list order who covers the interval, replaces the current booking and
    /// adds the booked cells to the locked set.
    pub fn click<E: Borrow<Engineer>>(
        &mut self,
        day: Weekday,
        time: TimeLabel,
        candidate: Option<&Candidate>,
        engineers: &[E],
        duration: InterviewDuration,
    ) -> Option<&Booking> {
        let state = evaluate_slot(day, time, candidate, engineers, duration, &self.locked);
        if !state.is_actionable() {
            debug!(%day, %time, ?state, "click ignored");
            return None;
        }

        let engineer = first_available_engineer(day, time, engineers, duration)?;
        let booking = Booking {
            day,
            time,
            engineer_id: engineer.id.clone(),
            engineer_name: engineer.name.clone(),
            duration,
        };
        debug!(%day, %time, engineer = %booking.engineer_name, %duration, "slot booked");

        self.locked.extend(booking.cells());
        self.booking = Some(booking);
        self.booking.as_ref()
    }

    /// Candidate, engineer filter or duration changed: drop all session state.
    pub fn selection_changed(&mut self) {
        self.clear();
    }

    /// Explicit reset. Returns `false` without doing anything when there is
    /// nothing to clear.
    pub fn reset(&mut self) -> bool {
        if !self.can_reset() {
            return false;
        }
        self.clear();
        true
    }

    /// Whether a reset would change anything.
    pub fn can_reset(&self) -> bool {
        self.booking.is_some() || !self.locked.is_empty()
    }

    fn clear(&mut self) {
        if self.can_reset() {
            debug!(locked = self.locked.len(), "booking session cleared");
        }
        self.locked.clear();
        self.booking = None;
    }
}
