//! Append-only set of dates for which an absence anomaly was generated.
//! Used only for calendar markers.

use crate::errors::AppResult;
use crate::store::{self, StateStore, keys};
use std::collections::BTreeSet;

pub struct EventLedger;

impl EventLedger {
    /// Insert a date into the ledger; a no-op if already present.
    pub fn mark(store: &mut impl StateStore, date: &str) -> AppResult<()> {
        let mut history = Self::history(store)?;
        if history.insert(date.to_string()) {
            store::set_json(store, &keys::event_history(), &history)?;
        }
        Ok(())
    }

    pub fn history(store: &impl StateStore) -> AppResult<BTreeSet<String>> {
        Ok(store::get_json(store, &keys::event_history())?.unwrap_or_default())
    }

    pub fn contains(store: &impl StateStore, date: &str) -> AppResult<bool> {
        Ok(Self::history(store)?.contains(date))
    }
}
