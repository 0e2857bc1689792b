use shuttletrack::core::progress::{
    ETA_UNIT_SECS, LATE_WAIT_SECS, Phase, ProgressMode, arrival_time_ms, boarding_cutoff_ms,
    compute_progress,
};
use shuttletrack::models::stop::default_route;
use shuttletrack::utils::colors::color_for_phase;

const SEC: i64 = 1000;

#[test]
fn position_starts_at_zero_and_ends_at_hundred() {
    let route = default_route();

    let start = compute_progress(0, &route, 0, ProgressMode::Normal);
    assert_eq!(start.position_pct, 0.0);

    let end = compute_progress(150 * SEC, &route, 0, ProgressMode::Normal);
    assert_eq!(end.position_pct, 100.0);

    // Past the destination the position stays pinned at exactly 100.
    let past = compute_progress(500 * SEC, &route, 0, ProgressMode::Normal);
    assert_eq!(past.position_pct, 100.0);
}

#[test]
fn negative_elapsed_clamps_to_start() {
    let route = default_route();
    let p = compute_progress(-10 * SEC, &route, 0, ProgressMode::Normal);
    assert_eq!(p.position_pct, 0.0);
}

#[test]
fn position_is_monotonic_and_bounded() {
    let route = default_route();

    let mut last = -1.0;
    for s in 0..=150 {
        let p = compute_progress(s * SEC, &route, 0, ProgressMode::Normal);
        assert!(
            p.position_pct >= last,
            "position decreased at {s}s: {} -> {}",
            last,
            p.position_pct
        );
        assert!((0.0..=100.0).contains(&p.position_pct));
        last = p.position_pct;
    }
}

#[test]
fn midpoint_of_second_segment_interpolates_linearly() {
    // Offsets [0,30,60,90,150]s: elapsed 45s lands halfway between the
    // second and third node, so 25 + 0.5 * 25.
    let route = default_route();
    let p = compute_progress(45 * SEC, &route, 0, ProgressMode::Normal);
    assert_eq!(p.position_pct, 37.5);
}

#[test]
fn node_boundary_resolves_to_first_matching_segment() {
    let route = default_route();
    // Exactly on the boarding node.
    let p = compute_progress(30 * SEC, &route, 0, ProgressMode::Normal);
    assert_eq!(p.position_pct, 25.0);
}

#[test]
fn delay_shifts_every_stop_except_the_first() {
    let route = default_route();
    // 20s delay: nodes become [0,50,80,110,170]s. Halfway into the first
    // segment is 25s.
    let p = compute_progress(25 * SEC, &route, 20, ProgressMode::Normal);
    assert_eq!(p.position_pct, 12.5);

    let end = compute_progress(170 * SEC, &route, 20, ProgressMode::Normal);
    assert_eq!(end.position_pct, 100.0);
}

#[test]
fn late_mode_plateaus_at_boarding_node_for_the_wait_window() {
    let route = default_route();

    // Inside the wait window [30s, 50s) the position holds at the
    // boarding node percentage.
    for s in [30, 35, 42, 49] {
        let p = compute_progress(s * SEC, &route, 0, ProgressMode::Late);
        assert_eq!(p.position_pct, 25.0, "expected plateau at {s}s");
    }

    // Before the window progress is normal.
    let before = compute_progress(15 * SEC, &route, 0, ProgressMode::Late);
    assert_eq!(before.position_pct, 12.5);

    // After the window the timeline is shifted by the wait.
    let after = compute_progress(65 * SEC, &route, 0, ProgressMode::Late);
    let shifted = compute_progress(45 * SEC, &route, 0, ProgressMode::Normal);
    assert_eq!(after.position_pct, shifted.position_pct);
}

#[test]
fn late_mode_extends_arrival_by_the_wait() {
    let route = default_route();

    let p = compute_progress(0, &route, 0, ProgressMode::Late);
    assert_eq!(p.eta_secs, (150 + LATE_WAIT_SECS) as f64);

    let done = compute_progress((150 + LATE_WAIT_SECS) * SEC, &route, 0, ProgressMode::Late);
    assert_eq!(done.position_pct, 100.0);
    assert_eq!(done.eta_secs, 0.0);
}

#[test]
fn eta_is_never_negative_and_scales_by_thirty_second_units() {
    let route = default_route();

    let p = compute_progress(30 * SEC, &route, 0, ProgressMode::Normal);
    assert_eq!(p.eta_secs, 120.0);
    assert_eq!(p.eta_display_units(), 4);

    // One second of remaining time still displays as one unit.
    let near = compute_progress(149 * SEC, &route, 0, ProgressMode::Normal);
    assert_eq!(near.eta_display_units(), 1);

    let past = compute_progress(1000 * SEC, &route, 0, ProgressMode::Normal);
    assert_eq!(past.eta_secs, 0.0);
    assert_eq!(past.eta_display_units(), 0);

    assert_eq!(ETA_UNIT_SECS, 30);
}

#[test]
fn phase_flips_at_the_boarding_node() {
    let route = default_route();

    let before = compute_progress(29 * SEC, &route, 0, ProgressMode::Normal);
    assert_eq!(before.phase, Phase::BeforeBoarding);

    let after = compute_progress(31 * SEC, &route, 0, ProgressMode::Normal);
    assert_eq!(after.phase, Phase::EnRoute);
}

#[test]
fn late_mode_boarding_completes_after_the_wait() {
    let route = default_route();

    let waiting = compute_progress(45 * SEC, &route, 0, ProgressMode::Late);
    assert_eq!(waiting.phase, Phase::BeforeBoarding);

    let rolling = compute_progress(51 * SEC, &route, 0, ProgressMode::Late);
    assert_eq!(rolling.phase, Phase::EnRoute);
}

#[test]
fn absent_mode_is_never_tracked() {
    let route = default_route();

    for s in [0, 45, 100, 200] {
        let p = compute_progress(s * SEC, &route, 0, ProgressMode::Absent);
        assert_eq!(p.phase, Phase::NotTracked);
    }
}

#[test]
fn absent_phase_keeps_the_pending_color() {
    let route = default_route();

    // Long past the boarding node the untracked rider still renders with
    // the pending color, not the en-route one.
    let p = compute_progress(100 * SEC, &route, 0, ProgressMode::Absent);
    assert_eq!(
        color_for_phase(p.phase),
        color_for_phase(Phase::BeforeBoarding)
    );
    assert_ne!(color_for_phase(p.phase), color_for_phase(Phase::EnRoute));
}

#[test]
fn boarding_cutoff_includes_the_active_delay() {
    let route = default_route();
    let t0 = 1_000_000_000_000;

    assert_eq!(boarding_cutoff_ms(t0, &route, 0), t0 + 30 * SEC);
    assert_eq!(boarding_cutoff_ms(t0, &route, 20), t0 + 50 * SEC);
}

#[test]
fn arrival_time_accounts_for_delay_and_late_wait() {
    let route = default_route();
    let t0 = 1_000_000_000_000;

    assert_eq!(
        arrival_time_ms(t0, &route, 0, ProgressMode::Normal),
        t0 + 150 * SEC
    );
    assert_eq!(
        arrival_time_ms(t0, &route, 20, ProgressMode::Normal),
        t0 + 170 * SEC
    );
    assert_eq!(
        arrival_time_ms(t0, &route, 0, ProgressMode::Late),
        t0 + 170 * SEC
    );
}
