//! Session teardown.
//!
//! A plain reset drops only the trip session (the rider re-applies for the
//! shuttle); `--all` wipes every stored record including the profile, the
//! base counts and the generated per-date records.

use crate::errors::AppResult;
use crate::store::{StateStore, keys};

pub struct ResetLogic;

impl ResetLogic {
    /// Destroy the current session. Profile, base counts and date records
    /// survive.
    pub fn session(store: &mut impl StateStore) -> AppResult<()> {
        store.remove_raw(&keys::session())
    }

    /// Wipe every key of the current schema namespace.
    pub fn all(store: &mut impl StateStore) -> AppResult<usize> {
        let mut removed = 0;
        for key in store.list_keys()? {
            if keys::is_current(&key) {
                store.remove_raw(&key)?;
                removed += 1;
            }
        }
        Ok(removed)
    }
}
