//! Route progress calculator.
//!
//! Pure functions of (elapsed time, route, accumulated delay, request mode).
//! Position is a fraction of the timeline in `[0, 100]`, mapped from stop
//! offsets onto evenly spaced nodes and linearly interpolated in between.
//! Every sample is a full recomputation from wall-clock time, so a consumer
//! that misses ticks self-corrects on the next sample.

use crate::models::stop::Route;

/// Simulated seconds the driver waits at the boarding stop for a late rider.
pub const LATE_WAIT_SECS: i64 = 20;

/// One displayed "minute" of remaining time equals 30 simulated seconds.
/// This compressed scale is part of the observable contract; do not replace
/// it with true minutes.
pub const ETA_UNIT_SECS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMode {
    Normal,
    /// Late request active: the driver holds at the boarding node for
    /// [`LATE_WAIT_SECS`], then the timeline resumes shifted by the wait.
    Late,
    /// Absence request active: the rider is not tracked.
    Absent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    BeforeBoarding,
    EnRoute,
    /// Absence request active; the pending color is kept regardless of
    /// elapsed time.
    NotTracked,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripProgress {
    /// Fractional position along the route, 0 at the first stop, 100 at the
    /// destination.
    pub position_pct: f64,
    /// Seconds of simulated time until arrival, never negative.
    pub eta_secs: f64,
    pub phase: Phase,
}

impl TripProgress {
    /// Remaining time in displayed units (see [`ETA_UNIT_SECS`]).
    pub fn eta_display_units(&self) -> i64 {
        (self.eta_secs / ETA_UNIT_SECS as f64).ceil() as i64
    }
}

/// Timeline nodes in milliseconds: one per stop, with the accumulated delay
/// added to every stop except the first.
fn time_nodes_ms(route: &Route, delay_secs: i64) -> Vec<i64> {
    route
        .stops()
        .iter()
        .enumerate()
        .map(|(i, s)| s.offset_ms() + if i > 0 { delay_secs * 1000 } else { 0 })
        .collect()
}

/// Node percentages: `100 * i / (n - 1)`.
fn pct_nodes(n: usize) -> Vec<f64> {
    (0..n).map(|i| 100.0 * i as f64 / (n - 1) as f64).collect()
}

/// Piecewise-linear position lookup over `(nodes_ms, pcts)`.
///
/// Boundary rules: elapsed at or past the last node resolves to 100
/// exactly; every other node boundary belongs to the first matching
/// segment in ascending order.
fn interpolate(nodes_ms: &[i64], pcts: &[f64], elapsed_ms: i64) -> f64 {
    let total = nodes_ms[nodes_ms.len() - 1];
    let clamped = elapsed_ms.clamp(0, total);

    if clamped >= total {
        return 100.0;
    }

    for i in 0..nodes_ms.len() - 1 {
        if clamped <= nodes_ms[i + 1] {
            let span = (nodes_ms[i + 1] - nodes_ms[i]) as f64;
            let alpha = ((clamped - nodes_ms[i]) as f64 / span).clamp(0.0, 1.0);
            return pcts[i] + alpha * (pcts[i + 1] - pcts[i]);
        }
    }

    100.0
}

/// Compute the bus position, ETA and phase for an elapsed time since t0.
pub fn compute_progress(
    elapsed_ms: i64,
    route: &Route,
    delay_secs: i64,
    mode: ProgressMode,
) -> TripProgress {
    let nodes = time_nodes_ms(route, delay_secs);
    let pcts = pct_nodes(route.len());

    let boarding_idx = route.boarding_index();
    let boarding_node_ms = nodes[boarding_idx];
    let total_ms = nodes[nodes.len() - 1];
    let wait_ms = LATE_WAIT_SECS * 1000;

    let (position_pct, final_arrival_ms, boarding_done_ms) = match mode {
        ProgressMode::Late => {
            // Plateau at the boarding node for the full wait window, then
            // resume on a timeline shifted by the wait.
            let pos = if elapsed_ms < boarding_node_ms {
                interpolate(&nodes, &pcts, elapsed_ms)
            } else if elapsed_ms < boarding_node_ms + wait_ms {
                pcts[boarding_idx]
            } else {
                interpolate(&nodes, &pcts, elapsed_ms - wait_ms)
            };
            (pos, total_ms + wait_ms, boarding_node_ms + wait_ms)
        }
        ProgressMode::Normal | ProgressMode::Absent => (
            interpolate(&nodes, &pcts, elapsed_ms),
            total_ms,
            boarding_node_ms,
        ),
    };

    let eta_secs = ((final_arrival_ms - elapsed_ms) as f64 / 1000.0).max(0.0);

    let phase = match mode {
        ProgressMode::Absent => Phase::NotTracked,
        _ if elapsed_ms < boarding_done_ms => Phase::BeforeBoarding,
        _ => Phase::EnRoute,
    };

    TripProgress {
        position_pct,
        eta_secs,
        phase,
    }
}

/// The attendance-lock cutoff: once `now` reaches it, late/absent requests
/// can no longer be entered or exited.
pub fn boarding_cutoff_ms(t0_ms: i64, route: &Route, delay_secs: i64) -> i64 {
    t0_ms + (route.boarding_stop().offset_secs + delay_secs) * 1000
}

/// Expected boarding wall-clock time, for display.
pub fn boarding_time_ms(t0_ms: i64, route: &Route, delay_secs: i64) -> i64 {
    boarding_cutoff_ms(t0_ms, route, delay_secs)
}

/// Expected arrival wall-clock time, including the late-mode extension.
pub fn arrival_time_ms(t0_ms: i64, route: &Route, delay_secs: i64, mode: ProgressMode) -> i64 {
    let extra = if mode == ProgressMode::Late {
        LATE_WAIT_SECS * 1000
    } else {
        0
    };
    t0_ms + (route.total_duration_secs() + delay_secs) * 1000 + extra
}
