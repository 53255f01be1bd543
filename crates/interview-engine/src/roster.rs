//! Candidates, engineers and their time windows, plus fixture loading.
//!
//! Fixtures are two JSON arrays:
//!
//! ```json
//! [{"id": "c1", "name": "Ada", "preferred": {"day": "Monday", "start": "10:00", "end": "12:00"}}]
//! [{"id": "e1", "name": "Grace", "availability": [{"day": "Monday", "start": "09:00", "end": "11:00"}]}]
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, SchedulerError};
use crate::time::{is_range_within, TimeLabel, Weekday};

/// One contiguous interval on a single weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub day: Weekday,
    pub start: TimeLabel,
    pub end: TimeLabel,
}

impl AvailabilityWindow {
    pub fn new(day: Weekday, start: TimeLabel, end: TimeLabel) -> Self {
        Self { day, start, end }
    }

    /// True iff `[start, end)` on `day` lies entirely inside this window.
    pub fn contains(&self, day: Weekday, start: TimeLabel, end: TimeLabel) -> bool {
        self.day == day && is_range_within(start, end, self.start, self.end)
    }

    fn validate(&self, owner: &str) -> Result<()> {
        if self.start < self.end {
            Ok(())
        } else {
            Err(SchedulerError::InvalidWindow {
                owner: owner.to_string(),
                day: self.day.to_string(),
                start: self.start.to_string(),
                end: self.end.to_string(),
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Engineer {
    pub id: String,
    pub name: String,
    /// Windows may overlap and several may fall on the same day.
    #[serde(default)]
    pub availability: Vec<AvailabilityWindow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    /// A candidate states exactly one preferred window.
    pub preferred: AvailabilityWindow,
}

/// The candidate and engineer lists loaded at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub candidates: Vec<Candidate>,
    pub engineers: Vec<Engineer>,
}

impl Roster {
    /// Build a roster, rejecting empty or inverted windows and duplicate ids.
    ///
    /// # Errors
    /// Returns `SchedulerError::InvalidWindow` when a window has `start >= end`
    /// and `SchedulerError::DuplicateId` when two candidates or two engineers
    /// share an id.
    pub fn new(candidates: Vec<Candidate>, engineers: Vec<Engineer>) -> Result<Self> {
        let mut seen = HashSet::new();
        for candidate in &candidates {
            if !seen.insert(candidate.id.as_str()) {
                return Err(SchedulerError::DuplicateId(candidate.id.clone()));
            }
            candidate.preferred.validate(&candidate.id)?;
        }

        let mut seen = HashSet::new();
        for engineer in &engineers {
            if !seen.insert(engineer.id.as_str()) {
                return Err(SchedulerError::DuplicateId(engineer.id.clone()));
            }
            for window in &engineer.availability {
                window.validate(&engineer.id)?;
            }
        }

        Ok(Self {
            candidates,
            engineers,
        })
    }

    /// Parse and validate the two fixture documents.
    ///
    /// # Errors
    /// Returns `SchedulerError::Json` for malformed JSON, unknown weekdays or
    /// non-canonical time labels, plus everything [`Roster::new`] rejects.
    pub fn from_json(candidates_json: &str, engineers_json: &str) -> Result<Self> {
        let candidates: Vec<Candidate> = serde_json::from_str(candidates_json)?;
        let engineers: Vec<Engineer> = serde_json::from_str(engineers_json)?;
        Self::new(candidates, engineers)
    }

    /// Read both fixture files from disk and validate them.
    ///
    /// # Errors
    /// Returns `SchedulerError::Io` when a file cannot be read, plus everything
    /// [`Roster::from_json`] rejects.
    pub fn load(candidates_path: &Path, engineers_path: &Path) -> Result<Self> {
        let candidates_json = std::fs::read_to_string(candidates_path)?;
        let engineers_json = std::fs::read_to_string(engineers_path)?;
        let roster = Self::from_json(&candidates_json, &engineers_json)?;
        info!(
            candidates = roster.candidates.len(),
            engineers = roster.engineers.len(),
            "roster loaded"
        );
        Ok(roster)
    }

    pub fn candidate(&self, id: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }

    pub fn engineer(&self, id: &str) -> Option<&Engineer> {
        self.engineers.iter().find(|e| e.id == id)
    }
}
