//! Vertical route timeline rendering for the terminal.
//!
//! One row per stop, connector rows in between; the bus marker is placed
//! on the row nearest to the current position fraction.

use crate::models::stop::Route;
use crate::utils::colors::{BLUE, CYAN, GREEN, GREY, RESET};
use std::collections::BTreeMap;

/// Connector rows between two stop rows.
const SEGMENT_ROWS: usize = 2;

pub struct TimelineView<'a> {
    route: &'a Route,
    position_pct: Option<f64>,
    counts: Option<&'a BTreeMap<u32, u32>>,
    target_stop: Option<u32>,
}

impl<'a> TimelineView<'a> {
    pub fn new(route: &'a Route) -> Self {
        Self {
            route,
            position_pct: None,
            counts: None,
            target_stop: None,
        }
    }

    pub fn with_position(mut self, pct: f64) -> Self {
        self.position_pct = Some(pct);
        self
    }

    pub fn with_counts(
        mut self,
        counts: &'a BTreeMap<u32, u32>,
        target_stop: Option<u32>,
    ) -> Self {
        self.counts = Some(counts);
        self.target_stop = target_stop;
        self
    }

    pub fn render(&self) -> String {
        let n = self.route.len();
        let total_rows = (n - 1) * (SEGMENT_ROWS + 1) + 1;

        // Row index of the bus marker, if a position is set.
        let bus_row = self
            .position_pct
            .map(|pct| ((pct / 100.0) * (total_rows - 1) as f64).round() as usize);

        let mut out = String::new();
        for row in 0..total_rows {
            let is_bus = bus_row == Some(row);
            if row % (SEGMENT_ROWS + 1) == 0 {
                let stop = &self.route.stops()[row / (SEGMENT_ROWS + 1)];

                let color = if stop.is_boarding {
                    GREEN
                } else if stop.is_destination {
                    CYAN
                } else {
                    GREY
                };
                let tag = if stop.is_boarding {
                    " (탑승지)"
                } else if stop.is_destination {
                    " (목적지)"
                } else {
                    ""
                };

                let marker = if is_bus {
                    format!("{BLUE}▶{RESET}")
                } else {
                    "●".to_string()
                };

                out.push_str(&format!("  {marker} {color}{}{tag}{RESET}", stop.name));

                if let Some(counts) = self.counts {
                    let c = counts.get(&stop.id).copied().unwrap_or(0);
                    out.push_str(&format!("  {c}명"));
                    if self.target_stop == Some(stop.id) {
                        out.push_str(&format!("  {GREY}(미탑승 1){RESET}"));
                    }
                }
                out.push('\n');
            } else if is_bus {
                out.push_str(&format!("  {BLUE}▼{RESET}\n"));
            } else {
                out.push_str(&format!("  {GREY}│{RESET}\n"));
            }
        }

        out
    }
}
