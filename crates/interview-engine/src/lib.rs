//! # interview-engine
//!
//! Slot availability and slot locking for a weekly interview-scheduling grid.
//!
//! Given one candidate's preferred window and a set of engineers' weekly
//! availability, the engine classifies each half-hour cell of a Monday-Friday,
//! 09:00-18:00 grid, and books cells on click while tracking which cells prior
//! bookings in the session have consumed.
//!
//! ## Quick start
//!
//! ```rust
//! use interview_engine::{InterviewDuration, Roster, Scheduler, SlotState, TimeLabel, Weekday};
//!
//! let roster = Roster::from_json(
//!     r#"[{"id":"c1","name":"Ada","preferred":{"day":"Monday","start":"10:00","end":"12:00"}}]"#,
//!     r#"[{"id":"e1","name":"Grace","availability":[{"day":"Monday","start":"09:00","end":"11:00"}]}]"#,
//! ).unwrap();
//!
//! let mut scheduler = Scheduler::new(roster);
//! scheduler.select_candidate(Some("c1")).unwrap();
//! scheduler.set_duration(InterviewDuration::SIXTY);
//!
//! let ten = TimeLabel::parse("10:00").unwrap();
//! assert_eq!(scheduler.evaluate(Weekday::Monday, ten), SlotState::Overlap);
//!
//! let booking = scheduler.click(Weekday::Monday, ten).unwrap();
//! assert_eq!(booking.engineer_name, "Grace");
//! assert_eq!(scheduler.locked_slots().len(), 2);
//! ```
//!
//! ## Modules
//!
//! - [`time`] -- `HH:MM` labels, weekdays, durations, minute arithmetic
//! - [`grid`] -- the fixed weekly grid and multi-cell runs
//! - [`roster`] -- candidates, engineers, fixture loading and validation
//! - [`filter`] -- engineer filter (none / all / one)
//! - [`availability`] -- can any engineer staff an interval
//! - [`evaluator`] -- per-cell slot state
//! - [`booking`] -- locked slots and the active booking
//! - [`scheduler`] -- selection + booking state as one owned object
//! - [`error`] -- Error types

pub mod availability;
pub mod booking;
pub mod error;
pub mod evaluator;
pub mod filter;
pub mod grid;
pub mod roster;
pub mod scheduler;
pub mod time;

pub use availability::{first_available_engineer, is_engineer_available};
pub use booking::{Booking, BookingSession, ScheduledInterview, SessionState};
pub use error::SchedulerError;
pub use evaluator::{evaluate_grid, evaluate_slot, GridRow, SlotState};
pub use filter::EngineerFilter;
pub use grid::{cells_covered, is_grid_slot, parse_grid_slot, time_slots, GridCell};
pub use roster::{AvailabilityWindow, Candidate, Engineer, Roster};
pub use scheduler::{Scheduler, Selection};
pub use time::{add_minutes, is_range_within, InterviewDuration, TimeLabel, Weekday};
