use crate::cli::commands::open_store;
use crate::config::Config;
use crate::core::clock::{Clock, SystemClock};
use crate::core::progress::{self, Phase, compute_progress};
use crate::core::random::ThreadRandom;
use crate::core::session::SessionMachine;
use crate::errors::AppResult;
use crate::models::stop::{SHUTTLE_INFO, default_route};
use crate::ui::timeline::TimelineView;
use crate::utils::colors::{color_for_phase, colorize_flag, RESET};
use crate::utils::time::format_hhmmss;

/// Show the current trip: timeline, ETA and attendance state.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut store = open_store(cfg)?;
    let clock = SystemClock;
    let mut rng = ThreadRandom;
    let route = default_route();

    let machine = SessionMachine::load_or_init(&mut store, &clock, &mut rng, &route)?;
    let delay = machine.active_delay_secs();
    let mode = machine.mode();
    let state = &machine.state;

    let now = clock.now_ms();
    let elapsed_ms = (now - state.t0_ms).max(0);
    let prog = compute_progress(elapsed_ms, &route, delay, mode);

    let boarding = progress::boarding_time_ms(state.t0_ms, &route, delay);
    let arrival = progress::arrival_time_ms(state.t0_ms, &route, delay, mode);

    println!(
        "{} {}  {} 기사님 ({})",
        SHUTTLE_INFO.name,
        SHUTTLE_INFO.car_number,
        SHUTTLE_INFO.driver_name,
        SHUTTLE_INFO.driver_phone
    );
    println!();
    println!(
        "예상 승차 {}   예상 하차 {}",
        format_hhmmss(boarding),
        format_hhmmss(arrival)
    );
    println!();

    print!("{}", TimelineView::new(&route).with_position(prog.position_pct).render());
    println!();

    let phase_label = match prog.phase {
        Phase::BeforeBoarding => "before boarding",
        Phase::EnRoute => "en route",
        Phase::NotTracked => "not tracked (no-show requested)",
    };
    println!(
        "position {:>5.1}%   remaining {}분   {}{}{}",
        prog.position_pct,
        prog.eta_display_units(),
        color_for_phase(prog.phase),
        phase_label,
        RESET,
    );
    println!();

    println!(
        "late request {}   no-show {}   trip delay {}",
        colorize_flag(state.is_late_requested),
        colorize_flag(state.is_absent_requested),
        if delay > 0 {
            format!("{delay}s")
        } else {
            "none".to_string()
        }
    );
    if state.late_count > 0 {
        println!("late requests this session: {} (limit 2/month)", state.late_count);
    }

    Ok(())
}
