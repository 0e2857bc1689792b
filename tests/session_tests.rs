use chrono::NaiveDate;
use shuttletrack::core::clock::FixedClock;
use shuttletrack::core::progress::ProgressMode;
use shuttletrack::core::random::SequenceRandom;
use shuttletrack::core::session::{RANDOM_DELAY_SECS, SessionMachine};
use shuttletrack::errors::AppError;
use shuttletrack::models::stop::{Route, default_route};
use shuttletrack::store::MemoryStore;

const SEC: i64 = 1000;
const T0: i64 = 1_700_000_000_000;

fn monday() -> NaiveDate {
    // An operating weekday.
    NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
}

fn clock() -> FixedClock {
    FixedClock::new(T0, monday())
}

/// RNG whose first draw keeps `has_random_delay` off (0.9 >= 0.3).
fn no_delay_rng() -> SequenceRandom {
    SequenceRandom::new(vec![0.9])
}

fn machine<'a>(
    store: &'a mut MemoryStore,
    clock: &'a FixedClock,
    rng: &mut SequenceRandom,
    route: &'a Route,
) -> SessionMachine<'a, MemoryStore, FixedClock> {
    SessionMachine::load_or_init(store, clock, rng, route).unwrap()
}

#[test]
fn session_is_created_once_with_fixed_t0() {
    let mut store = MemoryStore::new();
    let clock = clock();
    let mut rng = no_delay_rng();
    let route = default_route();

    {
        let m = machine(&mut store, &clock, &mut rng, &route);
        assert_eq!(m.state.t0_ms, T0);
        assert!(!m.state.has_random_delay);
        // Non-operation dates come pre-seeded as memos.
        assert!(m.state.calendar_memos.contains_key("2025-01-28"));
    }

    // A later load keeps the original t0 even though the clock moved.
    clock.advance_ms(60 * SEC);
    let m = machine(&mut store, &clock, &mut rng, &route);
    assert_eq!(m.state.t0_ms, T0);
}

#[test]
fn random_delay_is_drawn_once_at_creation() {
    let mut store = MemoryStore::new();
    let clock = clock();
    // 0.1 < 0.3 turns the trip-level delay on.
    let mut rng = SequenceRandom::new(vec![0.1]);
    let route = default_route();

    let m = machine(&mut store, &clock, &mut rng, &route);
    assert!(m.state.has_random_delay);
    assert_eq!(m.active_delay_secs(), RANDOM_DELAY_SECS);
    // The cutoff shifts with the delay.
    assert_eq!(
        m.boarding_cutoff_ms(),
        T0 + (30 + RANDOM_DELAY_SECS) * SEC
    );
}

#[test]
fn late_toggle_before_cutoff_sets_and_clears_the_flag() {
    let mut store = MemoryStore::new();
    let clock = clock();
    let mut rng = no_delay_rng();
    let route = default_route();

    let mut m = machine(&mut store, &clock, &mut rng, &route);
    assert!(m.toggle_late().unwrap());
    assert!(m.state.is_late_requested);
    assert_eq!(m.state.late_count, 1);
    assert_eq!(m.mode(), ProgressMode::Late);

    assert!(!m.toggle_late().unwrap());
    assert!(!m.state.is_late_requested);
    // Cancelling does not refund the counter.
    assert_eq!(m.state.late_count, 1);
}

#[test]
fn absent_toggle_records_today_in_the_absence_set() {
    let mut store = MemoryStore::new();
    let clock = clock();
    let mut rng = no_delay_rng();
    let route = default_route();

    let mut m = machine(&mut store, &clock, &mut rng, &route);
    assert!(m.toggle_absent().unwrap());
    assert!(m.state.absent_dates.contains("2026-01-05"));
    assert_eq!(m.mode(), ProgressMode::Absent);

    assert!(!m.toggle_absent().unwrap());
    assert!(!m.state.absent_dates.contains("2026-01-05"));
}

#[test]
fn flags_are_mutually_exclusive() {
    let mut store = MemoryStore::new();
    let clock = clock();
    let mut rng = no_delay_rng();
    let route = default_route();

    let mut m = machine(&mut store, &clock, &mut rng, &route);
    m.toggle_absent().unwrap();

    let err = m.toggle_late().unwrap_err();
    assert!(matches!(err, AppError::Conflict));
    assert!(m.state.is_absent_requested);
    assert!(!m.state.is_late_requested);
    assert!(m.state.flags_consistent());

    // And the other way around.
    m.toggle_absent().unwrap();
    m.toggle_late().unwrap();
    let err = m.toggle_absent().unwrap_err();
    assert!(matches!(err, AppError::Conflict));
    assert!(m.state.flags_consistent());
}

#[test]
fn transitions_lock_once_boarding_time_has_passed() {
    let mut store = MemoryStore::new();
    let clock = clock();
    let mut rng = no_delay_rng();
    let route = default_route();

    let mut m = machine(&mut store, &clock, &mut rng, &route);
    // Exactly at the cutoff the lock applies.
    clock.set_ms(T0 + 30 * SEC);

    assert!(matches!(m.toggle_late().unwrap_err(), AppError::StateLock));
    assert!(matches!(
        m.toggle_absent().unwrap_err(),
        AppError::StateLock
    ));
    assert!(!m.state.is_late_requested);
    assert!(!m.state.is_absent_requested);
}

#[test]
fn an_active_request_cannot_be_cancelled_after_the_cutoff() {
    let mut store = MemoryStore::new();
    let clock = clock();
    let mut rng = no_delay_rng();
    let route = default_route();

    let mut m = machine(&mut store, &clock, &mut rng, &route);
    m.toggle_late().unwrap();

    clock.set_ms(T0 + 31 * SEC);
    assert!(matches!(m.toggle_late().unwrap_err(), AppError::StateLock));
    // The flag stays up: the rider is committed.
    assert!(m.state.is_late_requested);
}

#[test]
fn accepted_transitions_persist_and_refusals_do_not() {
    let mut store = MemoryStore::new();
    let clock = clock();
    let mut rng = no_delay_rng();
    let route = default_route();

    {
        let mut m = machine(&mut store, &clock, &mut rng, &route);
        m.toggle_late().unwrap();
        let _ = m.toggle_absent().unwrap_err(); // Conflict, not persisted
    }

    let m = machine(&mut store, &clock, &mut rng, &route);
    assert!(m.state.is_late_requested);
    assert!(!m.state.is_absent_requested);
}

#[test]
fn calendar_toggle_rejects_past_today_and_non_operating_dates() {
    let mut store = MemoryStore::new();
    let clock = clock();
    let mut rng = no_delay_rng();
    let route = default_route();

    let mut m = machine(&mut store, &clock, &mut rng, &route);

    let past = NaiveDate::from_ymd_opt(2025, 12, 29).unwrap();
    assert!(matches!(
        m.toggle_absent_for_date(past).unwrap_err(),
        AppError::DateInPast(_)
    ));

    assert!(matches!(
        m.toggle_absent_for_date(monday()).unwrap_err(),
        AppError::DateIsToday(_)
    ));

    // A Tuesday is not an operating day.
    let tuesday = NaiveDate::from_ymd_opt(2026, 1, 6).unwrap();
    assert!(matches!(
        m.toggle_absent_for_date(tuesday).unwrap_err(),
        AppError::NonOperationDay(_)
    ));

    assert!(m.state.absent_dates.is_empty());
}

#[test]
fn calendar_toggle_flips_future_operating_dates() {
    let mut store = MemoryStore::new();
    let clock = clock();
    let mut rng = no_delay_rng();
    let route = default_route();

    let mut m = machine(&mut store, &clock, &mut rng, &route);
    let wednesday = NaiveDate::from_ymd_opt(2026, 1, 7).unwrap();

    assert!(m.toggle_absent_for_date(wednesday).unwrap());
    assert!(m.state.absent_dates.contains("2026-01-07"));

    assert!(!m.toggle_absent_for_date(wednesday).unwrap());
    assert!(!m.state.absent_dates.contains("2026-01-07"));
}

#[test]
fn memos_are_unconditional_even_on_rejected_dates() {
    let mut store = MemoryStore::new();
    let clock = FixedClock::new(T0, NaiveDate::from_ymd_opt(2025, 1, 20).unwrap());
    let mut rng = no_delay_rng();
    let route = default_route();

    let mut m = machine(&mut store, &clock, &mut rng, &route);

    // The forced holiday rejects an absence toggle...
    let holiday = NaiveDate::from_ymd_opt(2025, 1, 28).unwrap();
    assert!(matches!(
        m.toggle_absent_for_date(holiday).unwrap_err(),
        AppError::NonOperationDay(_)
    ));

    // ...but still accepts a memo, and a past date does too.
    m.set_memo(holiday, "개인 일정").unwrap();
    assert_eq!(
        m.state.calendar_memos.get("2025-01-28").map(String::as_str),
        Some("개인 일정")
    );

    let past = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
    m.set_memo(past, "지난 메모").unwrap();
    assert!(m.state.calendar_memos.contains_key("2025-01-06"));

    // Empty text clears.
    m.set_memo(holiday, "").unwrap();
    assert!(!m.state.calendar_memos.contains_key("2025-01-28"));
}

#[test]
fn corrupt_session_row_falls_back_to_a_fresh_default() {
    let mut store = MemoryStore::new();
    store.seed_raw("v1:session", "{not valid json");
    let clock = clock();
    let mut rng = no_delay_rng();
    let route = default_route();

    let m = machine(&mut store, &clock, &mut rng, &route);
    assert_eq!(m.state.t0_ms, T0);
    assert!(!m.state.is_late_requested);
}
