use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Persisted attendance session for the current trip.
///
/// Created once on first dashboard access and persisted on every accepted
/// mutation. `t0_ms` marks the trip start and is never changed until the
/// session is reset. The two request flags are mutually exclusive; the
/// state machine enforces the invariant at every transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// Trip start timestamp, Unix epoch milliseconds.
    pub t0_ms: i64,

    /// Accepted late requests in this session. Shown to the user; the
    /// monthly quota in the copy is not enforced.
    #[serde(default)]
    pub late_count: u32,

    pub is_late_requested: bool,
    pub is_absent_requested: bool,

    /// Dates (YYYY-MM-DD) the rider marked as not boarding.
    #[serde(default)]
    pub absent_dates: BTreeSet<String>,

    /// Trip-level random delay flag, drawn once at session creation.
    pub has_random_delay: bool,

    /// Free-form per-date memos (YYYY-MM-DD -> text).
    #[serde(default)]
    pub calendar_memos: BTreeMap<String, String>,
}

impl SessionState {
    pub fn new(t0_ms: i64, has_random_delay: bool) -> Self {
        Self {
            t0_ms,
            late_count: 0,
            is_late_requested: false,
            is_absent_requested: false,
            absent_dates: BTreeSet::new(),
            has_random_delay,
            calendar_memos: BTreeMap::new(),
        }
    }

    /// The mutual-exclusion invariant of the request flags.
    pub fn flags_consistent(&self) -> bool {
        !(self.is_late_requested && self.is_absent_requested)
    }
}
