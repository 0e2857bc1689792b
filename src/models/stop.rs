use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// A single stop on the shuttle route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stop {
    pub id: u32,
    pub name: String,
    /// Seconds from trip start (t0) to this stop.
    pub offset_secs: i64,
    #[serde(default)]
    pub is_boarding: bool,
    #[serde(default)]
    pub is_destination: bool,
}

impl Stop {
    pub fn offset_ms(&self) -> i64 {
        self.offset_secs * 1000
    }
}

/// The ordered, immutable stop sequence of a shuttle trip.
///
/// Invariants, checked at construction:
/// - at least two stops, offsets strictly increasing, first at 0
/// - exactly one boarding stop
/// - exactly one destination, and it is the last stop
#[derive(Debug, Clone)]
pub struct Route {
    stops: Vec<Stop>,
    boarding_idx: usize,
}

impl Route {
    pub fn new(stops: Vec<Stop>) -> AppResult<Self> {
        if stops.len() < 2 {
            return Err(AppError::InvalidRoute(
                "a route needs at least two stops".into(),
            ));
        }
        if stops[0].offset_secs != 0 {
            return Err(AppError::InvalidRoute(
                "the first stop must be at offset 0".into(),
            ));
        }
        for w in stops.windows(2) {
            if w[1].offset_secs <= w[0].offset_secs {
                return Err(AppError::InvalidRoute(format!(
                    "stop offsets must be strictly increasing ({} -> {})",
                    w[0].offset_secs, w[1].offset_secs
                )));
            }
        }

        let boarding: Vec<usize> = stops
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_boarding)
            .map(|(i, _)| i)
            .collect();
        if boarding.len() != 1 {
            return Err(AppError::InvalidRoute(format!(
                "expected exactly one boarding stop, found {}",
                boarding.len()
            )));
        }

        let destinations = stops.iter().filter(|s| s.is_destination).count();
        if destinations != 1 || !stops.last().is_some_and(|s| s.is_destination) {
            return Err(AppError::InvalidRoute(
                "the destination must be the single last stop".into(),
            ));
        }

        Ok(Self {
            boarding_idx: boarding[0],
            stops,
        })
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn boarding_stop(&self) -> &Stop {
        &self.stops[self.boarding_idx]
    }

    pub fn boarding_index(&self) -> usize {
        self.boarding_idx
    }

    pub fn destination(&self) -> &Stop {
        self.stops.last().expect("route is never empty")
    }

    pub fn stop_by_id(&self, id: u32) -> Option<&Stop> {
        self.stops.iter().find(|s| s.id == id)
    }

    /// Stops eligible for a synthetic absence event: neither the boarding
    /// stop nor the destination.
    pub fn absence_candidates(&self) -> Vec<&Stop> {
        self.stops
            .iter()
            .filter(|s| !s.is_boarding && !s.is_destination)
            .collect()
    }

    /// Total trip duration from t0 to the destination, without delays.
    pub fn total_duration_secs(&self) -> i64 {
        self.destination().offset_secs
    }
}

/// The built-in Bundang course 1 route.
pub fn default_route() -> Route {
    let stops = vec![
        Stop {
            id: 1,
            name: "이매촌".to_string(),
            offset_secs: 0,
            is_boarding: false,
            is_destination: false,
        },
        Stop {
            id: 2,
            name: "아름마을".to_string(),
            offset_secs: 30,
            is_boarding: true,
            is_destination: false,
        },
        Stop {
            id: 3,
            name: "탑마을".to_string(),
            offset_secs: 60,
            is_boarding: false,
            is_destination: false,
        },
        Stop {
            id: 4,
            name: "봇들마을".to_string(),
            offset_secs: 90,
            is_boarding: false,
            is_destination: false,
        },
        Stop {
            id: 5,
            name: "대치학원".to_string(),
            offset_secs: 150,
            is_boarding: false,
            is_destination: true,
        },
    ];

    Route::new(stops).expect("built-in route is valid")
}

/// Static shuttle metadata shown on the dashboard.
pub struct ShuttleInfo {
    pub name: &'static str,
    pub driver_name: &'static str,
    pub driver_phone: &'static str,
    pub car_number: &'static str,
}

pub const SHUTTLE_INFO: ShuttleInfo = ShuttleInfo {
    name: "분당 1코스",
    driver_name: "김기사",
    driver_phone: "010-1234-5678",
    car_number: "000가 0000",
};
