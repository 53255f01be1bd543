//! Engineer availability: can the requested interval be staffed at all?
//!
//! Independent of candidate preference and of locked slots. Functions accept
//! either `&[Engineer]` or the `&[&Engineer]` produced by
//! [`EngineerFilter::apply`](crate::filter::EngineerFilter::apply).

use std::borrow::Borrow;

use crate::roster::Engineer;
use crate::time::{add_minutes, InterviewDuration, TimeLabel, Weekday};

/// True iff `engineer` has a window on `day` containing `[time, time + duration)`.
pub fn engineer_covers(
    engineer: &Engineer,
    day: Weekday,
    time: TimeLabel,
    duration: InterviewDuration,
) -> bool {
    let end = add_minutes(time, i64::from(duration.minutes()));
    engineer
        .availability
        .iter()
        .any(|window| window.contains(day, time, end))
}

/// True iff at least one engineer can cover the whole requested interval.
pub fn is_engineer_available<E: Borrow<Engineer>>(
    day: Weekday,
    time: TimeLabel,
    engineers: &[E],
    duration: InterviewDuration,
) -> bool {
    engineers.iter().any(|e| {
        let engineer: &Engineer = e.borrow();
        engineer_covers(engineer, day, time, duration)
    })
}

/// The first engineer in list order who can cover the requested interval.
///
/// This is the engineer credited with a booking. Ties go to list order; there
/// is no load balancing.
pub fn first_available_engineer<E: Borrow<Engineer>>(
    day: Weekday,
    time: TimeLabel,
    engineers: &[E],
    duration: InterviewDuration,
) -> Option<&Engineer> {
    engineers.iter().find_map(|e| {
        let engineer: &Engineer = e.borrow();
        engineer_covers(engineer, day, time, duration).then_some(engineer)
    })
}
