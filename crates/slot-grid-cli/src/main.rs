//! `slots` CLI — print appointment slot grids from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Slot start times for one day (defaults: 09:00-19:00, today, local zone)
//! slots day
//!
//! # The seven day column headers from a given date
//! slots week --date 2018-12-01 --timezone Europe/London
//!
//! # The whole grid, marking available slots read from a file
//! slots grid --config grid.json --slots available.json
//!
//! # Only the slots one stylist can take, with one of them selected
//! slots grid --slots available.json --stylist Ashley --selected 1543743000000
//!
//! # Is one cell bookable?
//! slots check --slots available.json --date 2018-12-02 --time 09:30
//! ```
//!
//! Set `RUST_LOG=debug` to see how the grid was resolved (logs go to stderr).

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveTime, TimeZone, Utc};
use clap::{Parser, Subcommand};
use slot_grid::grid::WeekGrid;
use slot_grid::{
    anchor_for_date, build_week_grid_with, daily_time_slots, is_slot_available, slots_for_stylist,
    to_short_date, to_time_value, weekly_date_values_with, DayStep, GridConfig, OpeningHours,
    SlotError, TimeSlot, Timestamp,
};
use std::io::{self, Read};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "slots", version, about = "Appointment time-slot grid CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON grid configuration file ("-" reads stdin)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Opening hour, 0-23 (overrides the config file)
    #[arg(long, global = true)]
    opens: Option<u32>,

    /// Closing hour, 0-23 (overrides the config file)
    #[arg(long, global = true)]
    closes: Option<u32>,

    /// First day shown, YYYY-MM-DD (today if omitted)
    #[arg(long, global = true)]
    date: Option<NaiveDate>,

    /// IANA time zone, e.g. "Europe/London" (host local zone if omitted)
    #[arg(long, global = true)]
    timezone: Option<String>,

    /// Step day columns by calendar day instead of a fixed 24 hours
    #[arg(long, global = true)]
    calendar_days: bool,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long, global = true)]
    output: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the slot start times of one day
    Day,
    /// List the seven day column headers
    Week,
    /// Print the week grid: [x] available, [*] selected, [ ] otherwise
    Grid {
        /// JSON array of available slots ("-" reads stdin)
        #[arg(long)]
        slots: Option<String>,
        /// Only show slots this stylist can take
        #[arg(long)]
        stylist: Option<String>,
        /// Selected slot start, in milliseconds since the epoch
        #[arg(long)]
        selected: Option<i64>,
        /// Print the grid as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print "available" or "unavailable" for the cell at --date and --time
    Check {
        /// JSON array of available slots ("-" reads stdin)
        #[arg(long)]
        slots: Option<String>,
        /// Only consider slots this stylist can take
        #[arg(long)]
        stylist: Option<String>,
        /// Time of the cell, HH:MM
        #[arg(long, value_parser = parse_time)]
        time: NaiveTime,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = build_config(&cli)?;
    let hours = config
        .opening_hours()
        .context("Invalid opening hours")?;

    let rendered = match config.time_zone()? {
        Some(tz) => run(&tz, &cli.command, &config, hours)?,
        None => run(&Local, &cli.command, &config, hours)?,
    };

    write_output(cli.output.as_deref(), &rendered)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Layer the configuration: defaults, then the --config file, then flags.
fn build_config(cli: &Cli) -> Result<GridConfig> {
    let mut config = match cli.config.as_deref() {
        Some(path) => {
            let json = read_input(path)?;
            GridConfig::from_json(&json)
                .with_context(|| format!("Invalid config file: {}", path))?
        }
        None => GridConfig::default(),
    };

    if let Some(opens) = cli.opens {
        config.opens_at_hour = opens;
    }
    if let Some(closes) = cli.closes {
        config.closes_at_hour = closes;
    }
    if let Some(date) = cli.date {
        config.anchor = Some(date);
    }
    if let Some(timezone) = &cli.timezone {
        config.timezone = Some(timezone.clone());
    }
    if cli.calendar_days {
        config.day_step = DayStep::CalendarDay;
    }

    debug!(?config, "resolved grid configuration");
    Ok(config)
}

fn run<Tz: TimeZone>(
    tz: &Tz,
    command: &Commands,
    config: &GridConfig,
    hours: OpeningHours,
) -> Result<String> {
    // The only place the clock is read.
    let date = config
        .anchor
        .unwrap_or_else(|| Utc::now().with_timezone(tz).date_naive());
    let anchor = anchor_for_date(tz, date)?;

    match command {
        Commands::Day => {
            let slots = daily_time_slots(tz, anchor, hours)?;
            let labels = slots
                .iter()
                .map(|&slot| to_time_value(tz, slot))
                .collect::<slot_grid::error::Result<Vec<_>>>()?;
            Ok(lines(&labels))
        }
        Commands::Week => {
            let days = weekly_date_values_with(tz, anchor, config.day_step)?;
            let labels = days
                .iter()
                .map(|&day| to_short_date(tz, day))
                .collect::<slot_grid::error::Result<Vec<_>>>()?;
            Ok(lines(&labels))
        }
        Commands::Grid {
            slots,
            stylist,
            selected,
            json,
        } => {
            let offered = load_slots(slots.as_deref(), stylist.as_deref())?;
            let grid = build_week_grid_with(
                tz,
                anchor,
                hours,
                config.day_step,
                &offered,
                selected.map(Timestamp::from_millis),
            )?;
            info!(
                %date,
                available = grid.available_cells().count(),
                "rendering week grid"
            );

            if *json {
                let mut out = serde_json::to_string_pretty(&grid)?;
                out.push('\n');
                Ok(out)
            } else {
                Ok(render_table(&grid))
            }
        }
        Commands::Check {
            slots,
            stylist,
            time,
        } => {
            let offered = load_slots(slots.as_deref(), stylist.as_deref())?;

            // A wall-clock time skipped by a DST change is never bookable.
            let available = match Timestamp::at_local(tz, date.and_time(*time)) {
                Ok(time_value) => is_slot_available(tz, anchor, time_value, &offered),
                Err(SlotError::NonexistentLocalTime(local)) => {
                    debug!(%local, "cell time does not exist locally");
                    false
                }
                Err(e) => return Err(e.into()),
            };

            let verdict = if available { "available" } else { "unavailable" };
            Ok(format!("{}\n", verdict))
        }
    }
}

/// Render the grid as a fixed-width table, one row per slot time.
fn render_table(grid: &WeekGrid) -> String {
    let mut out = format!("{:<5}", "");
    for day in &grid.days {
        out.push_str(&format!(" {:^6}", day.label));
    }
    out.push('\n');

    for (time, row) in grid.times.iter().zip(&grid.rows) {
        out.push_str(&format!("{:<5}", time.label));
        for cell in row {
            let mark = if cell.selected {
                "[*]"
            } else if cell.available {
                "[x]"
            } else {
                "[ ]"
            };
            out.push_str(&format!(" {:^6}", mark));
        }
        out.push('\n');
    }

    out
}

fn lines(labels: &[String]) -> String {
    let mut out = labels.join("\n");
    out.push('\n');
    out
}

/// Read the available slots, optionally narrowed to one stylist. No file means
/// nothing is available.
fn load_slots(path: Option<&str>, stylist: Option<&str>) -> Result<Vec<TimeSlot>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let json = read_input(path)?;
    let slots: Vec<TimeSlot> = serde_json::from_str(&json)
        .with_context(|| format!("Invalid slots file: {}", path))?;
    debug!(count = slots.len(), "loaded available slots");
    Ok(slots_for_stylist(&slots, stylist))
}

fn parse_time(s: &str) -> std::result::Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|e| format!("expected HH:MM: {}", e))
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
