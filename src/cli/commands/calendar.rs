use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{is_non_operation_date, is_operating_day};
use crate::core::clock::{Clock, SystemClock};
use crate::core::ledger::EventLedger;
use crate::core::random::ThreadRandom;
use crate::core::session::SessionMachine;
use crate::errors::{AppError, AppResult};
use crate::models::stop::default_route;
use crate::ui::messages::{notice, success};
use crate::utils::colors::{GREEN, GREY, RED, RESET, YELLOW};
use crate::utils::date;
use chrono::{Datelike, NaiveDate};

/// Show the attendance calendar, toggle future absences, edit memos.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Calendar {
        month,
        absent,
        memo,
        text,
    } = cmd
    else {
        return Ok(());
    };

    let mut store = open_store(cfg)?;
    let clock = SystemClock;
    let mut rng = ThreadRandom;
    let route = default_route();

    // Owned copy up front: the session machine borrows the store mutably.
    let events = EventLedger::history(&store)?;
    let mut machine = SessionMachine::load_or_init(&mut store, &clock, &mut rng, &route)?;

    if let Some(d) = absent {
        let day =
            date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?;
        match machine.toggle_absent_for_date(day) {
            Ok(true) => success(format!("{d} marked as no-show")),
            Ok(false) => success(format!("{d} no-show mark removed")),
            Err(e) if e.is_refusal() => notice(e),
            Err(e) => return Err(e),
        }
    }

    if let Some(d) = memo {
        let day =
            date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?;
        let body = text.as_deref().unwrap_or("");
        machine.set_memo(day, body)?;
        if body.is_empty() {
            success(format!("memo cleared for {d}"));
        } else {
            success(format!("memo saved for {d}"));
        }
    }

    if absent.is_some() || memo.is_some() {
        return Ok(());
    }

    // View mode: render the requested (or current) month.
    let today = clock.today();
    let (year, mon) = match month {
        Some(m) => {
            let first = date::parse_date(&format!("{m}-01"))
                .ok_or_else(|| AppError::InvalidDate(m.to_string()))?;
            (first.year(), first.month())
        }
        None => (today.year(), today.month()),
    };

    let state = &machine.state;

    println!("{year}년 {mon}월");
    println!(" 일  월  화  수  목  금  토");

    let first = NaiveDate::from_ymd_opt(year, mon, 1)
        .ok_or_else(|| AppError::InvalidDate(format!("{year}-{mon}")))?;
    let lead = first.weekday().num_days_from_sunday() as usize;
    let mut line = "    ".repeat(lead);

    for day in date::all_days_of_month(year, mon) {
        let ds = date::fmt_date(day);
        let is_absent = state.absent_dates.contains(&ds);
        let has_event = events.contains(&ds);

        let color = if is_absent {
            RED
        } else if is_non_operation_date(day) {
            GREY
        } else if has_event {
            YELLOW
        } else if is_operating_day(day) {
            GREEN
        } else {
            RESET
        };
        let memo_mark = if state.calendar_memos.contains_key(&ds) {
            "*"
        } else {
            " "
        };

        line.push_str(&format!("{color}{:>3}{RESET}{memo_mark}", day.day()));

        if day.weekday().num_days_from_sunday() == 6 {
            println!("{line}");
            line = String::new();
        }
    }
    if !line.is_empty() {
        println!("{line}");
    }

    println!();
    println!(
        "{GREEN}운행일{RESET}  {RED}미탑승{RESET}  {GREY}미운행{RESET}  {YELLOW}이벤트{RESET}  * 메모"
    );

    let month_prefix = format!("{year}-{mon:02}-");
    let mut memos: Vec<_> = state
        .calendar_memos
        .iter()
        .filter(|(d, _)| d.starts_with(&month_prefix))
        .collect();
    memos.sort();
    if !memos.is_empty() {
        println!();
        for (d, m) in memos {
            println!("  {d}  {m}");
        }
    }

    Ok(())
}
