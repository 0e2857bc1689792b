//! Schema-versioned store keys.
//!
//! Every record key carries the schema version as a prefix. Bumping
//! [`SCHEMA_VERSION`] orphans older rows instead of silently reading them
//! with the wrong shape.

pub const SCHEMA_VERSION: u32 = 1;

fn versioned(name: &str) -> String {
    format!("v{SCHEMA_VERSION}:{name}")
}

pub fn session() -> String {
    versioned("session")
}

pub fn base_counts() -> String {
    versioned("base_counts")
}

pub fn record(date: &str) -> String {
    versioned(&format!("record:{date}"))
}

pub fn event_history() -> String {
    versioned("event_history")
}

pub fn profile() -> String {
    versioned("profile")
}

/// True if the key belongs to the current schema namespace.
pub fn is_current(key: &str) -> bool {
    key.starts_with(&format!("v{SCHEMA_VERSION}:"))
}
