use chrono::NaiveDate;
use shuttletrack::core::clock::FixedClock;
use shuttletrack::core::generator::{
    ABSENCE_PROBABILITY, AttendanceGenerator, BASE_COUNT_MAX, BASE_COUNT_MIN,
};
use shuttletrack::core::ledger::EventLedger;
use shuttletrack::core::random::{RandomSource, SequenceRandom};
use shuttletrack::models::stop::default_route;
use shuttletrack::store::{MemoryStore, StateStore};

const T0: i64 = 1_700_000_000_000;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
}

fn clock() -> FixedClock {
    FixedClock::new(T0, today())
}

#[test]
fn base_counts_are_in_range_and_destination_is_zero() {
    let mut store = MemoryStore::new();
    let route = default_route();
    let mut rng = SequenceRandom::new(vec![0.0, 0.5, 0.9, 0.2]);

    let counts = AttendanceGenerator::base_counts(&mut store, &mut rng, &route).unwrap();

    for stop in route.stops() {
        let c = counts[&stop.id];
        if stop.is_destination {
            assert_eq!(c, 0);
        } else {
            assert!((BASE_COUNT_MIN..=BASE_COUNT_MAX).contains(&c));
        }
    }
}

#[test]
fn base_counts_are_generated_exactly_once() {
    let mut store = MemoryStore::new();
    let route = default_route();

    let mut rng = SequenceRandom::new(vec![0.0]);
    let first = AttendanceGenerator::base_counts(&mut store, &mut rng, &route).unwrap();

    // A different RNG cannot change the stored base.
    let mut other = SequenceRandom::new(vec![0.99]);
    let second = AttendanceGenerator::base_counts(&mut store, &mut other, &route).unwrap();
    assert_eq!(first, second);
}

#[test]
fn absence_draw_below_threshold_targets_a_candidate_stop() {
    let mut store = MemoryStore::new();
    let clock = clock();
    let route = default_route();

    // Four base draws (all -> count 1), then the absence draw (0.1 < 0.4)
    // and the target pick (first candidate).
    let mut rng = SequenceRandom::new(vec![0.0, 0.0, 0.0, 0.0, 0.1, 0.0]);
    let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();

    let rec = AttendanceGenerator::record_for(&mut store, &clock, &mut rng, &route, date)
        .unwrap();

    assert!(rec.has_absence);
    let target = rec.target_stop_id.expect("absence must carry a target");

    // Candidates are the non-boarding, non-destination stops.
    let candidate_ids: Vec<u32> = route.absence_candidates().iter().map(|s| s.id).collect();
    assert!(candidate_ids.contains(&target));

    // The target lost exactly one rider, floored at zero.
    assert_eq!(rec.count_at(target), 0);
    for stop in route.stops() {
        if stop.id != target && !stop.is_destination {
            assert_eq!(rec.count_at(stop.id), 1);
        }
    }
}

#[test]
fn absence_draw_above_threshold_keeps_the_base_counts() {
    let mut store = MemoryStore::new();
    let clock = clock();
    let route = default_route();

    let mut rng = SequenceRandom::new(vec![0.5, 0.5, 0.5, 0.5, 0.8]);
    let date = NaiveDate::from_ymd_opt(2025, 6, 11).unwrap();

    let rec = AttendanceGenerator::record_for(&mut store, &clock, &mut rng, &route, date)
        .unwrap();

    assert!(!rec.has_absence);
    assert_eq!(rec.target_stop_id, None);
    for stop in route.stops() {
        let expected = if stop.is_destination { 0 } else { 2 };
        assert_eq!(rec.count_at(stop.id), expected);
    }
}

#[test]
fn records_are_memoized_bit_identically() {
    let mut store = MemoryStore::new();
    let clock = clock();
    let route = default_route();
    let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();

    let mut rng = SequenceRandom::new(vec![0.0, 0.0, 0.0, 0.0, 0.1, 0.9]);
    let first = AttendanceGenerator::record_for(&mut store, &clock, &mut rng, &route, date)
        .unwrap();

    // A second query with a hostile RNG returns the stored record.
    let mut other = SequenceRandom::new(vec![0.0]);
    let second =
        AttendanceGenerator::record_for(&mut store, &clock, &mut other, &route, date).unwrap();

    assert_eq!(first, second);
}

#[test]
fn today_never_receives_an_anomaly() {
    let mut store = MemoryStore::new();
    let clock = clock();
    let route = default_route();

    // The absence draw would fire for any other date.
    let mut rng = SequenceRandom::new(vec![0.0]);
    let rec = AttendanceGenerator::record_for(&mut store, &clock, &mut rng, &route, today())
        .unwrap();

    assert!(!rec.has_absence);
    assert_eq!(rec.target_stop_id, None);
}

#[test]
fn todays_record_survives_midnight_unchanged() {
    let mut store = MemoryStore::new();
    let route = default_route();

    let clock = clock();
    let mut rng = SequenceRandom::new(vec![0.0]);
    let rec = AttendanceGenerator::record_for(&mut store, &clock, &mut rng, &route, today())
        .unwrap();
    assert!(!rec.has_absence);

    // The calendar day rolls over; the committed record must not flip.
    let after_midnight = FixedClock::new(T0, NaiveDate::from_ymd_opt(2026, 1, 6).unwrap());
    let again =
        AttendanceGenerator::record_for(&mut store, &after_midnight, &mut rng, &route, today())
            .unwrap();
    assert_eq!(rec, again);
}

#[test]
fn anomalies_are_recorded_in_the_ledger() {
    let mut store = MemoryStore::new();
    let clock = clock();
    let route = default_route();

    let with_absence = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
    let without = NaiveDate::from_ymd_opt(2025, 6, 11).unwrap();

    let mut rng = SequenceRandom::new(vec![0.0, 0.0, 0.0, 0.0, 0.1, 0.0, 0.9]);
    AttendanceGenerator::record_for(&mut store, &clock, &mut rng, &route, with_absence).unwrap();
    AttendanceGenerator::record_for(&mut store, &clock, &mut rng, &route, without).unwrap();

    assert!(EventLedger::contains(&store, "2025-06-10").unwrap());
    assert!(!EventLedger::contains(&store, "2025-06-11").unwrap());
}

#[test]
fn ledger_marking_is_idempotent() {
    let mut store = MemoryStore::new();

    EventLedger::mark(&mut store, "2025-06-10").unwrap();
    EventLedger::mark(&mut store, "2025-06-10").unwrap();
    EventLedger::mark(&mut store, "2025-06-12").unwrap();

    let history = EventLedger::history(&store).unwrap();
    assert_eq!(history.len(), 2);
}

#[test]
fn corrupt_record_row_is_regenerated() {
    let mut store = MemoryStore::new();
    let clock = clock();
    let route = default_route();
    let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();

    store.seed_raw("v1:record:2025-06-10", "{{{ not json");

    let mut rng = SequenceRandom::new(vec![0.5, 0.5, 0.5, 0.5, 0.8]);
    let rec = AttendanceGenerator::record_for(&mut store, &clock, &mut rng, &route, date)
        .unwrap();
    assert!(!rec.has_absence);

    // The replacement is now well-formed and stable.
    let raw = store.get_raw("v1:record:2025-06-10").unwrap().unwrap();
    assert!(serde_json::from_str::<serde_json::Value>(&raw).is_ok());
}

#[test]
fn sequence_random_replays_its_script() {
    let mut rng = SequenceRandom::new(vec![0.25, 0.75]);
    assert_eq!(rng.next_f64(), 0.25);
    assert_eq!(rng.next_f64(), 0.75);
    // Cycles when exhausted.
    assert_eq!(rng.next_f64(), 0.25);

    assert!(ABSENCE_PROBABILITY > 0.0 && ABSENCE_PROBABILITY < 1.0);
}
