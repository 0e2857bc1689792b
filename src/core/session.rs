//! Attendance session state machine.
//!
//! Owns the late/absent request flags, the per-date absence set and the
//! calendar memos. Transitions are gated by the boarding cutoff derived
//! from the route; every accepted transition is persisted immediately, and
//! refusals return a typed error without touching the store.

use crate::core::calendar;
use crate::core::clock::Clock;
use crate::core::progress::{self, ProgressMode};
use crate::core::random::RandomSource;
use crate::errors::{AppError, AppResult};
use crate::models::session::SessionState;
use crate::models::stop::Route;
use crate::store::{self, StateStore, keys};
use chrono::NaiveDate;

/// Probability that a freshly created session carries a trip-level delay.
pub const RANDOM_DELAY_PROBABILITY: f64 = 0.3;

/// Seconds of accumulated delay when the trip-level delay flag is set.
pub const RANDOM_DELAY_SECS: i64 = 20;

pub struct SessionMachine<'a, S: StateStore, C: Clock> {
    store: &'a mut S,
    clock: &'a C,
    route: &'a Route,
    pub state: SessionState,
}

impl<'a, S: StateStore, C: Clock> SessionMachine<'a, S, C> {
    /// Load the persisted session, or create it on first access.
    ///
    /// Creation fixes t0 to "now", draws the trip-level delay flag once and
    /// pre-seeds memos for the non-operation dates.
    pub fn load_or_init(
        store: &'a mut S,
        clock: &'a C,
        rng: &mut impl RandomSource,
        route: &'a Route,
    ) -> AppResult<Self> {
        let state = match store::get_json::<SessionState>(store, &keys::session())? {
            Some(s) => s,
            None => {
                let has_delay = rng.next_f64() < RANDOM_DELAY_PROBABILITY;
                let mut s = SessionState::new(clock.now_ms(), has_delay);
                for date in calendar::NON_OPERATION_DATES {
                    s.calendar_memos
                        .insert(date.to_string(), calendar::NON_OPERATION_MEMO.to_string());
                }
                store::set_json(store, &keys::session(), &s)?;
                s
            }
        };

        Ok(Self {
            store,
            clock,
            route,
            state,
        })
    }

    fn persist(&mut self) -> AppResult<()> {
        debug_assert!(self.state.flags_consistent());
        store::set_json(self.store, &keys::session(), &self.state)
    }

    /// Accumulated trip delay in seconds (the one-time random draw).
    pub fn active_delay_secs(&self) -> i64 {
        if self.state.has_random_delay {
            RANDOM_DELAY_SECS
        } else {
            0
        }
    }

    /// Request mode for the progress calculator.
    pub fn mode(&self) -> ProgressMode {
        if self.state.is_absent_requested {
            ProgressMode::Absent
        } else if self.state.is_late_requested {
            ProgressMode::Late
        } else {
            ProgressMode::Normal
        }
    }

    pub fn boarding_cutoff_ms(&self) -> i64 {
        progress::boarding_cutoff_ms(self.state.t0_ms, self.route, self.active_delay_secs())
    }

    /// Both entering and exiting a request are locked once boarding time
    /// has passed.
    fn ensure_before_cutoff(&self) -> AppResult<()> {
        if self.clock.now_ms() >= self.boarding_cutoff_ms() {
            return Err(AppError::StateLock);
        }
        Ok(())
    }

    /// Toggle the late request. Returns the new flag value.
    pub fn toggle_late(&mut self) -> AppResult<bool> {
        self.ensure_before_cutoff()?;
        if self.state.is_absent_requested {
            return Err(AppError::Conflict);
        }

        if self.state.is_late_requested {
            self.state.is_late_requested = false;
        } else {
            self.state.is_late_requested = true;
            self.state.late_count += 1;
        }
        self.persist()?;
        Ok(self.state.is_late_requested)
    }

    /// Toggle today's absence request. Returns the new flag value.
    /// Setting it also records today in the absence set; cancelling
    /// removes it.
    pub fn toggle_absent(&mut self) -> AppResult<bool> {
        self.ensure_before_cutoff()?;
        if self.state.is_late_requested {
            return Err(AppError::Conflict);
        }

        let today = self.clock.today().format("%Y-%m-%d").to_string();
        if self.state.is_absent_requested {
            self.state.is_absent_requested = false;
            self.state.absent_dates.remove(&today);
        } else {
            self.state.is_absent_requested = true;
            self.state.absent_dates.insert(today);
        }
        self.persist()?;
        Ok(self.state.is_absent_requested)
    }

    /// Toggle a future date in the absence set (calendar path).
    ///
    /// Today must go through [`toggle_absent`], past dates are immutable
    /// and non-operation days reject the toggle (a memo is still allowed).
    pub fn toggle_absent_for_date(&mut self, date: NaiveDate) -> AppResult<bool> {
        let today = self.clock.today();
        let date_str = date.format("%Y-%m-%d").to_string();

        if date < today {
            return Err(AppError::DateInPast(date_str));
        }
        if date == today {
            return Err(AppError::DateIsToday(date_str));
        }
        if !calendar::is_operating_day(date) {
            return Err(AppError::NonOperationDay(date_str));
        }

        let now_absent = if self.state.absent_dates.contains(&date_str) {
            self.state.absent_dates.remove(&date_str);
            false
        } else {
            self.state.absent_dates.insert(date_str);
            true
        };
        self.persist()?;
        Ok(now_absent)
    }

    /// Set or clear a memo for any date. Independent of attendance rules.
    pub fn set_memo(&mut self, date: NaiveDate, text: &str) -> AppResult<()> {
        let date_str = date.format("%Y-%m-%d").to_string();
        if text.is_empty() {
            self.state.calendar_memos.remove(&date_str);
        } else {
            self.state
                .calendar_memos
                .insert(date_str, text.to_string());
        }
        self.persist()
    }
}
