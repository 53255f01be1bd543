//! The scheduling widget's state as one owned object.
//!
//! [`Scheduler`] pairs the loaded [`Roster`] with the user's current selection
//! and a [`BookingSession`]. Every selection setter fires the session's
//! selection-changed transition, even when the new value equals the old one,
//! so stale locks never survive a change of candidate, filter or duration.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::booking::{Booking, BookingSession, ScheduledInterview};
use crate::error::{Result, SchedulerError};
use crate::evaluator::{evaluate_grid, evaluate_slot, GridRow, SlotState};
use crate::filter::EngineerFilter;
use crate::grid::GridCell;
use crate::roster::{Candidate, Engineer, Roster};
use crate::time::{InterviewDuration, TimeLabel, Weekday};

/// What the user has picked in the three selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub candidate_id: Option<String>,
    pub filter: EngineerFilter,
    pub duration: InterviewDuration,
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    roster: Roster,
    selection: Selection,
    session: BookingSession,
}

impl Scheduler {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            selection: Selection::default(),
            session: BookingSession::new(),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn session(&self) -> &BookingSession {
        &self.session
    }

    /// Select a candidate by id, or clear the selection with `None`.
    ///
    /// # Errors
    /// Returns `SchedulerError::UnknownCandidate` when the id is not in the
    /// roster; the previous selection and session are left untouched.
    pub fn select_candidate(&mut self, id: Option<&str>) -> Result<()> {
        if let Some(id) = id {
            if self.roster.candidate(id).is_none() {
                return Err(SchedulerError::UnknownCandidate(id.to_string()));
            }
        }
        self.selection.candidate_id = id.map(str::to_string);
        self.session.selection_changed();
        Ok(())
    }

    pub fn set_engineer_filter(&mut self, filter: EngineerFilter) {
        self.selection.filter = filter;
        self.session.selection_changed();
    }

    pub fn set_duration(&mut self, duration: InterviewDuration) {
        self.selection.duration = duration;
        self.session.selection_changed();
    }

    pub fn candidate(&self) -> Option<&Candidate> {
        self.selection
            .candidate_id
            .as_deref()
            .and_then(|id| self.roster.candidate(id))
    }

    /// Engineers passing the current filter, in roster order.
    pub fn engineers(&self) -> Vec<&Engineer> {
        self.selection.filter.apply(&self.roster.engineers)
    }

    pub fn evaluate(&self, day: Weekday, time: TimeLabel) -> SlotState {
        evaluate_slot(
            day,
            time,
            self.candidate(),
            &self.engineers(),
            self.selection.duration,
            self.session.locked(),
        )
    }

    pub fn grid(&self) -> Vec<GridRow> {
        evaluate_grid(
            self.candidate(),
            &self.engineers(),
            self.selection.duration,
            self.session.locked(),
        )
    }

    /// Click a cell. Returns the new booking, or `None` if the cell was not bookable.
    pub fn click(&mut self, day: Weekday, time: TimeLabel) -> Option<&Booking> {
        let candidate = self
            .selection
            .candidate_id
            .as_deref()
            .and_then(|id| self.roster.candidate(id));
        let engineers = self.selection.filter.apply(&self.roster.engineers);
        self.session
            .click(day, time, candidate, &engineers, self.selection.duration)
    }

    pub fn reset(&mut self) -> bool {
        self.session.reset()
    }

    pub fn booking(&self) -> Option<&Booking> {
        self.session.booking()
    }

    pub fn locked_slots(&self) -> &BTreeSet<GridCell> {
        self.session.locked()
    }

    /// The latest booking as a record, when a candidate is selected.
    pub fn scheduled_interview(&self) -> Option<ScheduledInterview> {
        let candidate = self.candidate()?;
        self.booking().map(|b| b.scheduled_for(candidate))
    }
}
