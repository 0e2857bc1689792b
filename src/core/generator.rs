//! Deterministic per-date attendance generator.
//!
//! Records are drawn once per date and memoized forever: two queries for
//! the same date return identical records regardless of caller or order.
//! The decision for "today" is committed at generation time and never
//! flips, even if the record is read again after midnight.

use crate::core::clock::Clock;
use crate::core::ledger::EventLedger;
use crate::core::random::RandomSource;
use crate::errors::AppResult;
use crate::models::record::{BaseCounts, DateRecord};
use crate::models::stop::Route;
use crate::store::{self, StateStore, keys};
use chrono::NaiveDate;

/// Probability that a date (other than today) carries an absence anomaly.
pub const ABSENCE_PROBABILITY: f64 = 0.4;

/// Base headcount range for non-destination stops.
pub const BASE_COUNT_MIN: u32 = 1;
pub const BASE_COUNT_MAX: u32 = 3;

pub struct AttendanceGenerator;

impl AttendanceGenerator {
    /// Ground-truth headcounts, generated exactly once per installation:
    /// a random count in `[1, 3]` per non-destination stop, 0 for the
    /// destination.
    pub fn base_counts(
        store: &mut impl StateStore,
        rng: &mut impl RandomSource,
        route: &Route,
    ) -> AppResult<BaseCounts> {
        if let Some(counts) = store::get_json::<BaseCounts>(store, &keys::base_counts())? {
            return Ok(counts);
        }

        let mut counts = BaseCounts::new();
        for stop in route.stops() {
            let n = if stop.is_destination {
                0
            } else {
                rng.next_range(BASE_COUNT_MIN, BASE_COUNT_MAX)
            };
            counts.insert(stop.id, n);
        }

        store::set_json(store, &keys::base_counts(), &counts)?;
        Ok(counts)
    }

    /// Fetch the attendance record for a date, generating and persisting it
    /// on first query.
    pub fn record_for(
        store: &mut impl StateStore,
        clock: &impl Clock,
        rng: &mut impl RandomSource,
        route: &Route,
        date: NaiveDate,
    ) -> AppResult<DateRecord> {
        let date_str = date.format("%Y-%m-%d").to_string();
        let key = keys::record(&date_str);

        // Never regenerate a stored record.
        if let Some(record) = store::get_json::<DateRecord>(store, &key)? {
            return Ok(record);
        }

        let base = Self::base_counts(store, rng, route)?;

        // Today never receives a synthetic anomaly, independent of the draw.
        let (has_absence, target_stop_id) = if date == clock.today() {
            (false, None)
        } else if rng.next_f64() < ABSENCE_PROBABILITY {
            let candidates = route.absence_candidates();
            let target = candidates[rng.next_index(candidates.len())];
            (true, Some(target.id))
        } else {
            (false, None)
        };

        let mut counts = base;
        if let Some(id) = target_stop_id {
            if let Some(c) = counts.get_mut(&id) {
                *c = c.saturating_sub(1);
            }
        }

        let record = DateRecord {
            date: date_str.clone(),
            counts,
            has_absence,
            target_stop_id,
        };

        store::set_json(store, &key, &record)?;
        if has_absence {
            EventLedger::mark(store, &date_str)?;
        }

        Ok(record)
    }
}
