//! `interview` CLI -- evaluate the weekly interview grid and replay bookings.
//!
//! ## Usage
//!
//! ```sh
//! # Render the grid for one candidate against all engineers
//! interview grid --candidates candidates.json --engineers engineers.json --candidate c1
//!
//! # Restrict to one engineer, 60-minute interviews, as JSON
//! interview grid --candidate c1 --engineer e2 --duration 60 --json
//!
//! # Book two slots and print the confirmation
//! interview book --candidate c1 --click Monday@10:00 --click Monday@11:00
//!
//! # Validate fixtures
//! interview check --candidates candidates.json --engineers engineers.json
//! ```
//!
//! Fixture paths and selection defaults can also come from `interview.toml`.

mod config;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use interview_engine::{
    is_grid_slot, Booking, EngineerFilter, GridCell, GridRow, InterviewDuration, Roster,
    ScheduledInterview, Scheduler, Selection, TimeLabel, Weekday,
};
use serde::Serialize;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[derive(Parser)]
#[command(
    name = "interview",
    version,
    about = "Weekly interview slot scheduler"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to ./interview.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log booking transitions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args)]
struct FixtureArgs {
    /// Candidate fixture (JSON array)
    #[arg(long)]
    candidates: Option<PathBuf>,
    /// Engineer fixture (JSON array)
    #[arg(long)]
    engineers: Option<PathBuf>,
}

#[derive(Args)]
struct SelectionArgs {
    /// Candidate id to schedule
    #[arg(long)]
    candidate: Option<String>,
    /// Engineer id, "all", or "" for no engineer
    #[arg(long)]
    engineer: Option<String>,
    /// Interview length in minutes: 15, 30 or 60
    #[arg(long)]
    duration: Option<u32>,
    /// Click a cell before rendering, e.g. Monday@10:00 (repeatable)
    #[arg(long = "click", value_name = "DAY@HH:MM")]
    clicks: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the week grid
    Grid {
        #[command(flatten)]
        fixtures: FixtureArgs,
        #[command(flatten)]
        selection: SelectionArgs,
        /// Print rows, locked slots and booking as JSON
        #[arg(long)]
        json: bool,
    },
    /// Replay clicks and print the resulting booking as JSON
    Book {
        #[command(flatten)]
        fixtures: FixtureArgs,
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Validate the fixture files
    Check {
        #[command(flatten)]
        fixtures: FixtureArgs,
    },
}

/// JSON shape of `grid --json`.
#[derive(Serialize)]
struct GridReport<'a> {
    selection: &'a Selection,
    rows: Vec<GridRow>,
    locked: Vec<GridCell>,
    booking: Option<&'a Booking>,
}

/// JSON shape of `book`.
#[derive(Serialize)]
struct BookReport<'a> {
    booking: Option<&'a Booking>,
    scheduled: Option<ScheduledInterview>,
    locked: Vec<GridCell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Grid {
            fixtures,
            selection,
            json,
        } => {
            let scheduler = build_scheduler(&config, &fixtures, &selection)?;
            if json {
                let report = GridReport {
                    selection: scheduler.selection(),
                    rows: scheduler.grid(),
                    locked: scheduler.locked_slots().iter().copied().collect(),
                    booking: scheduler.booking(),
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render_grid(&scheduler));
            }
        }
        Commands::Book {
            fixtures,
            selection,
        } => {
            let scheduler = build_scheduler(&config, &fixtures, &selection)?;
            let report = BookReport {
                booking: scheduler.booking(),
                scheduled: scheduler.scheduled_interview(),
                locked: scheduler.locked_slots().iter().copied().collect(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Check { fixtures } => {
            let roster = load_roster(&config, &fixtures)?;
            let windows: usize = roster.engineers.iter().map(|e| e.availability.len()).sum();
            println!("Candidates: {}", roster.candidates.len());
            println!("Engineers:  {}", roster.engineers.len());
            println!("Windows:    {}", windows);
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_roster(config: &Config, fixtures: &FixtureArgs) -> Result<Roster> {
    let candidates = fixture_path(
        fixtures.candidates.as_deref(),
        config.candidates.as_deref(),
        "candidates",
    )?;
    let engineers = fixture_path(
        fixtures.engineers.as_deref(),
        config.engineers.as_deref(),
        "engineers",
    )?;
    Roster::load(candidates, engineers).with_context(|| {
        format!(
            "Failed to load fixtures: {} and {}",
            candidates.display(),
            engineers.display()
        )
    })
}

fn fixture_path<'a>(
    flag: Option<&'a Path>,
    from_config: Option<&'a Path>,
    name: &str,
) -> Result<&'a Path> {
    flag.or(from_config).with_context(|| {
        format!(
            "No {} fixture: pass --{} or set `{}` in {}",
            name,
            name,
            name,
            config::DEFAULT_CONFIG_FILE
        )
    })
}

/// Load fixtures, apply the selection, then replay clicks in order.
fn build_scheduler(
    config: &Config,
    fixtures: &FixtureArgs,
    selection: &SelectionArgs,
) -> Result<Scheduler> {
    let mut scheduler = Scheduler::new(load_roster(config, fixtures)?);

    scheduler.select_candidate(selection.candidate.as_deref())?;

    if let Some(raw) = selection.engineer.as_deref().or(config.engineer.as_deref()) {
        let filter: EngineerFilter = raw.parse()?;
        if let EngineerFilter::Only(id) = &filter {
            if scheduler.roster().engineer(id).is_none() {
                warn!(engineer = %id, "engineer filter matches nobody");
            }
        }
        scheduler.set_engineer_filter(filter);
    }

    if let Some(minutes) = selection.duration.or(config.duration) {
        scheduler.set_duration(InterviewDuration::try_from(minutes)?);
    }

    for raw in &selection.clicks {
        let (day, time) = parse_click(raw)?;
        if scheduler.click(day, time).is_none() {
            warn!(%day, %time, "slot not bookable, click ignored");
        }
    }

    Ok(scheduler)
}

/// Parse `Monday@10:00` into a weekday and a grid slot time.
fn parse_click(raw: &str) -> Result<(Weekday, TimeLabel)> {
    let (day, time) = raw
        .split_once('@')
        .with_context(|| format!("Invalid click '{}': expected DAY@HH:MM", raw))?;
    let day: Weekday = day.parse()?;
    let time = TimeLabel::parse(time)?;
    if !is_grid_slot(time) {
        bail!(
            "Invalid click '{}': {} is not a grid slot (09:00-17:30 on the hour or half hour)",
            raw,
            time
        );
    }
    Ok((day, time))
}

fn render_grid(scheduler: &Scheduler) -> String {
    let mut out = String::from("      ");
    for day in Weekday::ALL {
        out.push_str(&format!(" {}", &day.name()[..3]));
    }
    out.push('\n');

    for row in scheduler.grid() {
        out.push_str(&row.time.to_string());
        out.push(' ');
        for state in row.states {
            out.push_str(&format!("   {}", state.symbol()));
        }
        out.push('\n');
    }

    out.push_str("\nO overlap   e engineer available   . no match   # locked\n");

    if let Some(booking) = scheduler.booking() {
        let candidate = scheduler
            .candidate()
            .map(|c| c.name.as_str())
            .unwrap_or("-");
        out.push_str(&format!(
            "\nInterview scheduled: candidate {}, engineer {}, {} {}, {}\n",
            candidate, booking.engineer_name, booking.day, booking.time, booking.duration
        ));
    }

    out
}
