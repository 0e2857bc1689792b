use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::{Clock, SystemClock};
use crate::core::generator::AttendanceGenerator;
use crate::core::ledger::EventLedger;
use crate::core::random::ThreadRandom;
use crate::errors::{AppError, AppResult};
use crate::models::stop::default_route;
use crate::store::log::oplog;
use crate::ui::messages::{success, warning};
use crate::ui::timeline::TimelineView;
use crate::utils::date;

/// Driver view: per-stop headcounts for a date, generated once and then
/// served from the store.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Roster { date, notify_late } = cmd else {
        return Ok(());
    };

    let mut store = open_store(cfg)?;
    let clock = SystemClock;
    let mut rng = ThreadRandom;
    let route = default_route();

    let day = match date {
        Some(d) => date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?,
        None => clock.today(),
    };
    let day_str = date::fmt_date(day);

    let record = AttendanceGenerator::record_for(&mut store, &clock, &mut rng, &route, day)?;

    println!("{day_str} Route — 실시간 인원");
    println!();
    print!(
        "{}",
        TimelineView::new(&route)
            .with_counts(&record.counts, record.target_stop_id)
            .render()
    );
    println!();

    if record.has_absence {
        let name = record
            .target_stop_id
            .and_then(|id| route.stop_by_id(id))
            .map(|s| s.name.clone())
            .unwrap_or_else(|| "?".to_string());
        warning(format!(
            "{name} 정류장에 미탑승 학생이 있어 실시간 인원이 조정되었습니다."
        ));
    } else {
        println!("현재까지 모든 인원이 정상 탑승 예정입니다.");
    }

    if *notify_late {
        EventLedger::mark(&mut store, &day_str)?;
        oplog(&store.conn, "roster", &day_str, "Late notice sent to riders")?;
        success("지각 안내를 전송했습니다.");
    }

    Ok(())
}
