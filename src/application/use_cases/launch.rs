use chrono::{DateTime, Utc};
use serde::Serialize;

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;

/// Time left until launch, split the way the landing page countdown shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchCountdown {
    pub launch_at: DateTime<Utc>,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub expired: bool,
}

/// Whole days, hours, minutes and seconds remaining from `now` until `launch_at`.
/// Once the launch moment is reached every component is zero and `expired` is set.
pub fn countdown(launch_at: DateTime<Utc>, now: DateTime<Utc>) -> LaunchCountdown {
    let expired = launch_at <= now;
    // Sub-second remainders truncate to zero without counting as expired.
    let remaining = if expired {
        0
    } else {
        (launch_at - now).num_seconds()
    };

    LaunchCountdown {
        launch_at,
        days: remaining / SECS_PER_DAY,
        hours: (remaining % SECS_PER_DAY) / SECS_PER_HOUR,
        minutes: (remaining % SECS_PER_HOUR) / SECS_PER_MINUTE,
        seconds: remaining % SECS_PER_MINUTE,
        expired,
    }
}
