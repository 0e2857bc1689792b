use crate::cli::parser::Commands;
use crate::cli::commands::open_store;
use crate::config::Config;
use crate::core::clock::{Clock, SystemClock};
use crate::core::progress::{self, ETA_UNIT_SECS, compute_progress};
use crate::core::random::ThreadRandom;
use crate::core::session::SessionMachine;
use crate::core::ticker::Ticker;
use crate::errors::AppResult;
use crate::models::profile::{UserProfile, UserRole};
use crate::models::stop::default_route;
use crate::store::{self, keys};
use crate::ui::messages::info;
use crate::utils::time::format_hhmmss;
use std::collections::HashSet;

/// Follow the trip live, re-sampling from the wall clock once per second.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Watch { samples, quiet } = cmd else {
        return Ok(());
    };

    let mut store = open_store(cfg)?;
    let clock = SystemClock;
    let mut rng = ThreadRandom;
    let route = default_route();

    let profile: Option<UserProfile> = store::get_json(&store, &keys::profile())?;
    let role = profile
        .as_ref()
        .map(|p| p.role)
        .or_else(|| UserRole::from_code(&cfg.default_role))
        .unwrap_or(UserRole::Student);
    let rider = profile
        .as_ref()
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "학생".to_string());

    let machine = SessionMachine::load_or_init(&mut store, &clock, &mut rng, &route)?;
    let delay = machine.active_delay_secs();
    let mode = machine.mode();
    let t0 = machine.state.t0_ms;
    // Notices are suppressed for a no-show: the rider is not tracked.
    let notices_on = cfg.notices_enabled && !quiet && !machine.state.is_absent_requested;

    let boarding_ms = progress::boarding_time_ms(t0, &route, delay) - t0;
    let arrival_ms = progress::arrival_time_ms(t0, &route, delay, mode) - t0;

    let mut shown: HashSet<&'static str> = HashSet::new();
    let mut remaining = samples.unwrap_or(u64::MAX);

    Ticker::every_second().run(|| {
        if remaining == 0 {
            return false;
        }
        remaining -= 1;

        let now = clock.now_ms();
        let elapsed_ms = (now - t0).max(0);
        let prog = compute_progress(elapsed_ms, &route, delay, mode);

        println!(
            "{}  {:>5.1}%  {}분 남음",
            format_hhmmss(now),
            prog.position_pct,
            prog.eta_display_units()
        );

        if notices_on {
            if elapsed_ms >= boarding_ms && shown.insert("boarded") {
                match role {
                    UserRole::Parent => info(format!("{rider}이(가) 승차하였습니다.")),
                    _ => info("승차 시간이 되었습니다."),
                }
            }
            if elapsed_ms >= arrival_ms - ETA_UNIT_SECS * 1000 && shown.insert("almost") {
                info("하차 1분 전입니다");
            }
            if elapsed_ms >= arrival_ms && shown.insert("arrived") {
                match role {
                    UserRole::Parent => info(format!("{rider}이(가) 하차하였습니다.")),
                    _ => info("목적지에 도착했습니다."),
                }
            }
        }

        // Keep sampling until the bus arrives.
        elapsed_ms < arrival_ms
    });

    Ok(())
}
