use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Headcounts per stop for one calendar date, generated once and then
/// immutable. `counts` maps stop id to the number of riders boarding there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRecord {
    pub date: String,
    pub counts: BTreeMap<u32, u32>,
    pub has_absence: bool,
    pub target_stop_id: Option<u32>,
}

impl DateRecord {
    pub fn count_at(&self, stop_id: u32) -> u32 {
        self.counts.get(&stop_id).copied().unwrap_or(0)
    }
}

/// One-time-generated ground-truth headcount per stop, shared by every
/// per-date record.
pub type BaseCounts = BTreeMap<u32, u32>;
