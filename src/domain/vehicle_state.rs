use chrono::{DateTime, Duration, Utc};

use crate::domain::models::RawStatusRecord;

const ONLINE_WINDOW_MINUTES: i64 = 5;
const ASLEEP_WINDOW_MINUTES: i64 = 30;

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VehicleState {
    Recorded(String),
    Online,
    Asleep,
    Offline,
    Unknown,
}

impl VehicleState {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Recorded(label) => label,
            Self::Online => "online",
            Self::Asleep => "asleep",
            Self::Offline => "offline",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for VehicleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Picks the recorded lifecycle state when there is one, otherwise infers a
/// state from how long ago the last position was written.
pub fn resolve_vehicle_state(record: &RawStatusRecord, now: DateTime<Utc>) -> VehicleState {
    if let Some(label) = record.state.as_deref().filter(|label| !label.is_empty()) {
        return VehicleState::Recorded(label.to_string());
    }

    match record.position_date {
        Some(position_date) => state_from_elapsed(now - position_date),
        None => VehicleState::Unknown,
    }
}

fn state_from_elapsed(elapsed: Duration) -> VehicleState {
    if elapsed < Duration::minutes(ONLINE_WINDOW_MINUTES) {
        VehicleState::Online
    } else if elapsed < Duration::minutes(ASLEEP_WINDOW_MINUTES) {
        VehicleState::Asleep
    } else {
        VehicleState::Offline
    }
}
