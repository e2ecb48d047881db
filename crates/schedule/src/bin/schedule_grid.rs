use chrono::{Datelike, Local};
use log::info;
use models::{
    attendance::{AttendanceRates, AttendanceSummary},
    role::Role,
    time_slot::TimeSlot,
};
use schedule::{
    config::Config,
    grid::{BuildReport, ScheduleGrid, build_grid_with_report},
    normalize::{normalize_lessons, normalize_marks},
    policy::{RoleView, markable_lessons},
    summary::summarize,
    time_slots::resolve_time_slots,
};
use serde::Serialize;
use serde_json::Value;
use std::{env, fs, process};

const USAGE: &str = "Usage: schedule_grid <schedules.json> [timeslots.json] [attendance.json]";

/// Everything a schedule screen needs, computed from the API dumps
#[derive(Debug, Serialize)]
struct Projection {
    role: Role,
    view: RoleView,
    time_slots: Vec<TimeSlot>,
    grid: ScheduleGrid,
    report: BuildReport,
    /// Lessons the configured teacher may mark attendance for today
    markable_lessons: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attendance: Option<AttendanceReport>,
}

#[derive(Debug, Serialize)]
struct AttendanceReport {
    summary: AttendanceSummary,
    rates: AttendanceRates,
}

/// Reads and parses a JSON file
///
/// # Arguments
/// * `path` - Path to the file
///
/// # Returns
/// The parsed value, or an error message naming the file
fn read_json(path: &str) -> Result<Value, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("Failed to read '{path}': {e}"))?;

    serde_json::from_str(&text).map_err(|e| format!("Failed to parse '{path}': {e}"))
}

/// Runs the projection over the files named in `args`
fn run(args: &[String], config: &Config) -> Result<Projection, String> {
    let [schedules_path, rest @ ..] = args else {
        return Err(USAGE.to_string());
    };
    if rest.len() > 2 {
        return Err(USAGE.to_string());
    }

    let lessons = normalize_lessons(&read_json(schedules_path)?);
    info!("Loaded {} lessons from {schedules_path}", lessons.len());

    let time_slots = match rest.first() {
        Some(path) => resolve_time_slots(&read_json(path)?, config.time_slot_profile),
        None => config.time_slot_profile.defaults(),
    };

    let attendance = match rest.get(1) {
        Some(path) => {
            let summary = summarize(&normalize_marks(&read_json(path)?));
            Some(AttendanceReport {
                summary,
                rates: summary.rates(),
            })
        }
        None => None,
    };

    let (grid, report) = build_grid_with_report(&lessons);

    let markable_lessons = markable_lessons(
        &grid,
        config.role,
        config.teacher_id,
        Local::now().weekday(),
    );

    Ok(Projection {
        role: config.role,
        view: RoleView::for_role(config.role),
        time_slots,
        grid,
        report,
        markable_lessons,
        attendance,
    })
}

/// Projects a schedule dump into the grid a schedule screen renders
fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();

    let output = Config::from_env()
        .and_then(|config| run(&args, &config))
        .and_then(|projection| {
            serde_json::to_string_pretty(&projection)
                .map_err(|e| format!("Failed to serialize projection: {e}"))
        });

    match output {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}
