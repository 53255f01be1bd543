//! WASM bindings for interview-engine.
//!
//! Exposes grid evaluation, slot booking and fixture validation to JavaScript
//! via `wasm-bindgen`. All complex types are passed as JSON strings in the same
//! shapes the engine serializes: candidates and engineers as in the fixture
//! files, locked slots as `[{day, time}]`, and booking sessions as
//! `{locked, booking}`.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p interview-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/pkg \
//!   target/wasm32-unknown-unknown/release/interview_engine_wasm.wasm
//! ```

use std::collections::BTreeSet;

use interview_engine::{
    evaluate_grid, parse_grid_slot, Booking, BookingSession, Candidate, Engineer, EngineerFilter,
    GridCell, InterviewDuration, Roster, Weekday,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Result of `clickSlot`: the new booking (or `null`) and the updated session.
#[derive(Serialize)]
struct ClickResult<'a> {
    booking: Option<&'a Booking>,
    session: &'a BookingSession,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_json<T: DeserializeOwned>(json: &str, what: &str) -> Result<T, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid {} JSON: {}", what, e)))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Parse the selection shared by every export.
fn parse_selection(
    candidate_json: Option<String>,
    engineers_json: &str,
    duration: u32,
) -> Result<(Option<Candidate>, Vec<Engineer>, InterviewDuration), JsValue> {
    let candidate = candidate_json
        .as_deref()
        .map(|json| parse_json::<Candidate>(json, "candidate"))
        .transpose()?;
    let engineers: Vec<Engineer> = parse_json(engineers_json, "engineers")?;
    let duration = InterviewDuration::try_from(duration).map_err(js_error)?;
    Ok((candidate, engineers, duration))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Evaluate every cell of the weekly grid.
///
/// # Arguments
/// - `candidate_json` -- The selected candidate object, or `undefined`
/// - `engineers_json` -- JSON array of engineer objects
/// - `filter` -- `""` for no engineer, `"__all__"` for everyone, or an engineer id
/// - `duration` -- 15, 30 or 60
/// - `locked_json` -- JSON array of `{day, time}` locked cells
///
/// Returns a JSON array of `{time, states}` rows, `states` ordered Monday to Friday.
#[wasm_bindgen(js_name = "evaluateGrid")]
pub fn evaluate_grid_js(
    candidate_json: Option<String>,
    engineers_json: &str,
    filter: &str,
    duration: u32,
    locked_json: &str,
) -> Result<String, JsValue> {
    let (candidate, engineers, duration) =
        parse_selection(candidate_json, engineers_json, duration)?;
    let locked: BTreeSet<GridCell> = parse_json(locked_json, "locked slots")?;
    let filter: EngineerFilter = filter.parse().map_err(js_error)?;

    let rows = evaluate_grid(
        candidate.as_ref(),
        &filter.apply(&engineers),
        duration,
        &locked,
    );
    to_json(&rows)
}

/// Apply a click on `(day, time)` to a booking session.
///
/// `session_json` is the session returned by a previous call, or
/// `{"locked": [], "booking": null}` for a fresh one. Clicks on locked or
/// unavailable cells leave the session unchanged and return `booking: null`.
/// A `time` that is not a grid slot (e.g. `"10:15"`) is an error.
#[wasm_bindgen(js_name = "clickSlot")]
pub fn click_slot(
    day: &str,
    time: &str,
    candidate_json: Option<String>,
    engineers_json: &str,
    filter: &str,
    duration: u32,
    session_json: &str,
) -> Result<String, JsValue> {
    let day: Weekday = day.parse().map_err(js_error)?;
    let time = parse_grid_slot(time).map_err(js_error)?;
    let (candidate, engineers, duration) =
        parse_selection(candidate_json, engineers_json, duration)?;
    let filter: EngineerFilter = filter.parse().map_err(js_error)?;
    let mut session: BookingSession = parse_json(session_json, "session")?;

    let booked = session
        .click(day, time, candidate.as_ref(), &filter.apply(&engineers), duration)
        .is_some();

    to_json(&ClickResult {
        booking: if booked { session.booking() } else { None },
        session: &session,
    })
}

/// Validate the two fixture documents and return them as one normalized
/// `{candidates, engineers}` object.
#[wasm_bindgen(js_name = "loadRoster")]
pub fn load_roster(candidates_json: &str, engineers_json: &str) -> Result<String, JsValue> {
    let roster = Roster::from_json(candidates_json, engineers_json).map_err(js_error)?;
    to_json(&roster)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENGINEERS: &str = r#"[{"id":"e1","name":"Grace",
        "availability":[{"day":"Monday","start":"09:00","end":"11:00"}]}]"#;
    const CANDIDATE: &str = r#"{"id":"c1","name":"Ada",
        "preferred":{"day":"Monday","start":"10:00","end":"12:00"}}"#;

    fn click(time: &str, session: &str) -> serde_json::Value {
        let json = click_slot(
            "Monday",
            time,
            Some(CANDIDATE.to_string()),
            ENGINEERS,
            "__all__",
            30,
            session,
        )
        .unwrap();
        serde_json::from_str(&json).unwrap()
    }
    const FRESH: &str = r#"{"locked":[],"booking":null}"#;

    #[test]
    fn evaluate_grid_returns_eighteen_rows() {
        let json =
            evaluate_grid_js(Some(CANDIDATE.to_string()), ENGINEERS, "__all__", 60, "[]").unwrap();
        let rows: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(rows.as_array().unwrap().len(), 18);
        assert_eq!(rows[2]["time"], "10:00");
        assert_eq!(rows[2]["states"][0], "overlap");
    }

    #[test]
    fn click_slot_threads_the_session() {
        let first = click("10:00", FRESH);
        assert_eq!(first["booking"]["engineer_name"], "Grace");

        let again = click("10:00", &first["session"].to_string());
        assert!(again["booking"].is_null());
        assert_eq!(again["session"]["locked"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn grid_slot_times_parse_for_clicks() {
        assert!(parse_grid_slot("09:30").is_ok());
        assert!(parse_grid_slot("10:15").is_err());
        assert!(parse_grid_slot("18:00").is_err());
    }

    #[test]
    fn load_roster_normalizes_fixtures() {
        let json = load_roster(&format!("[{}]", CANDIDATE), ENGINEERS).unwrap();
        let roster: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(roster["candidates"][0]["id"], "c1");
        assert_eq!(roster["engineers"][0]["availability"][0]["end"], "11:00");
    }
}
