/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

use crate::core::progress::Phase;

/// Phase color: pending/red before boarding, blue en route. An absence
/// request keeps the pending color however far the trip has advanced.
pub fn color_for_phase(phase: Phase) -> &'static str {
    match phase {
        Phase::BeforeBoarding | Phase::NotTracked => RED,
        Phase::EnRoute => BLUE,
    }
}

/// Colored checkmark/cross for boolean flags.
pub fn colorize_flag(on: bool) -> String {
    if on {
        format!("{GREEN}✓{RESET}")
    } else {
        format!("{GREY}–{RESET}")
    }
}
