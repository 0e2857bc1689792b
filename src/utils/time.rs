//! Time utilities: epoch-milliseconds display formatting.

use chrono::{Local, TimeZone};

/// Format an epoch-milliseconds timestamp as local "HH:MM:SS".
pub fn format_hhmmss(ts_ms: i64) -> String {
    match Local.timestamp_millis_opt(ts_ms).single() {
        Some(dt) => dt.format("%H:%M:%S").to_string(),
        None => "--:--:--".to_string(),
    }
}
