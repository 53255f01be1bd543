//! Time-of-day labels, weekdays, interview durations and the arithmetic on them.
//!
//! A [`TimeLabel`] always renders as a zero-padded 24-hour `HH:MM` string. The
//! shape is enforced when the label is constructed, so comparing labels is the
//! same as comparing their canonical strings.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};

/// A time of day with minute precision, canonically formatted as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeLabel(NaiveTime);

impl TimeLabel {
    /// Parse a label in the exact `HH:MM` shape.
    ///
    /// # Errors
    /// Returns `SchedulerError::InvalidTimeLabel` for anything that is not two
    /// digits, a colon and two digits, or that names an impossible time.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || SchedulerError::InvalidTimeLabel(s.to_string());

        let bytes = s.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(invalid());
        }
        if ![0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit()) {
            return Err(invalid());
        }

        let hour: u32 = s[0..2].parse().map_err(|_| invalid())?;
        let minute: u32 = s[3..5].parse().map_err(|_| invalid())?;
        Self::from_hm(hour, minute).ok_or_else(invalid)
    }

    /// Build a label from an hour (0-23) and minute (0-59).
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    pub fn minute(self) -> u32 {
        self.0.minute()
    }
}

impl fmt::Display for TimeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl FromStr for TimeLabel {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeLabel {
    type Error = SchedulerError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<TimeLabel> for String {
    fn from(label: TimeLabel) -> Self {
        label.to_string()
    }
}

/// Add `minutes` to a label using 24-hour clock wraparound.
///
/// `23:45 + 30` is `00:15`; no clamping to the scheduling grid happens here.
pub fn add_minutes(time: TimeLabel, minutes: i64) -> TimeLabel {
    let (shifted, _) = time.0.overflowing_add_signed(Duration::minutes(minutes));
    TimeLabel(shifted)
}

/// True iff `[start, end)` is fully contained in `[range_start, range_end)`.
///
/// Pure containment: a partial overlap is `false`.
pub fn is_range_within(
    start: TimeLabel,
    end: TimeLabel,
    range_start: TimeLabel,
    range_end: TimeLabel,
) -> bool {
    start >= range_start && end <= range_end
}

/// A working day of the scheduling week. Weekends are not part of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All weekdays in grid column order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = SchedulerError;

    /// Exact, case-sensitive day names, matching the serde form.
    fn from_str(s: &str) -> Result<Self> {
        Weekday::ALL
            .into_iter()
            .find(|day| day.name() == s)
            .ok_or_else(|| SchedulerError::UnknownWeekday(s.to_string()))
    }
}

/// Requested interview length. Only 15, 30 and 60 minutes are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct InterviewDuration(u32);

impl InterviewDuration {
    pub const FIFTEEN: InterviewDuration = InterviewDuration(15);
    pub const THIRTY: InterviewDuration = InterviewDuration(30);
    pub const SIXTY: InterviewDuration = InterviewDuration(60);

    /// The durations a user can pick, in picker order.
    pub const ALL: [InterviewDuration; 3] = [Self::FIFTEEN, Self::THIRTY, Self::SIXTY];

    pub fn minutes(self) -> u32 {
        self.0
    }

    /// Number of 30-minute grid cells a booking of this length occupies.
    pub fn cells(self) -> usize {
        self.0.div_ceil(30) as usize
    }
}

impl Default for InterviewDuration {
    fn default() -> Self {
        Self::THIRTY
    }
}

impl fmt::Display for InterviewDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.0)
    }
}

impl TryFrom<u32> for InterviewDuration {
    type Error = SchedulerError;

    fn try_from(minutes: u32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.0 == minutes)
            .ok_or(SchedulerError::InvalidDuration(minutes))
    }
}

impl From<InterviewDuration> for u32 {
    fn from(duration: InterviewDuration) -> Self {
        duration.0
    }
}
