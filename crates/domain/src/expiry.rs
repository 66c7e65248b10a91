use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const MILLIS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

/// Number of days before expiry at which a `Resource` is considered due soon.
pub const DUE_SOON_THRESHOLD_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceStatus {
    #[serde(rename = "healthy")]
    Healthy,
    #[serde(rename = "due-soon")]
    DueSoon,
    #[serde(rename = "overdue")]
    Overdue,
}

impl ResourceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::DueSoon => "due-soon",
            Self::Overdue => "overdue",
        }
    }
}

impl std::str::FromStr for ResourceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "healthy" => Ok(Self::Healthy),
            "due-soon" => Ok(Self::DueSoon),
            "overdue" => Ok(Self::Overdue),
            _ => Err(format!("Invalid resource status: {}", s)),
        }
    }
}

/// Days from `now_ms` until `expiry_ms`, rounded up. A resource expiring
/// later today counts as 0 days away, one that expired yesterday as -1.
pub fn days_until(expiry_ms: i64, now_ms: i64) -> i64 {
    let diff = expiry_ms - now_ms;
    (diff + MILLIS_PER_DAY - 1).div_euclid(MILLIS_PER_DAY)
}

/// Tri-state status derived from a day offset.
pub fn derive_status(days_until_expiry: i64) -> ResourceStatus {
    if days_until_expiry < 0 {
        ResourceStatus::Overdue
    } else if days_until_expiry <= DUE_SOON_THRESHOLD_DAYS {
        ResourceStatus::DueSoon
    } else {
        ResourceStatus::Healthy
    }
}

/// Parses an ISO `YYYY-MM-DD` expiry date into a millisecond timestamp at
/// UTC midnight. Dates with a full RFC 3339 timestamp are accepted too by
/// taking the 10 character day prefix.
pub fn expiry_date_to_millis(expiry_date: &str) -> Option<i64> {
    let day = expiry_date.get(0..10)?;
    let date = NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis())
}

#[cfg(test)]
mod test {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn yesterday_is_overdue() {
        let days = days_until(NOW - MILLIS_PER_DAY, NOW);
        assert_eq!(days, -1);
        assert_eq!(derive_status(days), ResourceStatus::Overdue);
    }

    #[test]
    fn three_days_out_is_due_soon() {
        let days = days_until(NOW + 3 * MILLIS_PER_DAY, NOW);
        assert_eq!(days, 3);
        assert_eq!(derive_status(days), ResourceStatus::DueSoon);
    }

    #[test]
    fn thirty_days_out_is_healthy() {
        let days = days_until(NOW + 30 * MILLIS_PER_DAY, NOW);
        assert_eq!(days, 30);
        assert_eq!(derive_status(days), ResourceStatus::Healthy);
    }

    #[test]
    fn partial_days_round_up() {
        assert_eq!(days_until(NOW + 1, NOW), 1);
        assert_eq!(days_until(NOW, NOW), 0);
        assert_eq!(days_until(NOW - 1, NOW), 0);
        assert_eq!(days_until(NOW - MILLIS_PER_DAY - 1, NOW), -1);
    }

    #[test]
    fn threshold_boundaries() {
        assert_eq!(derive_status(0), ResourceStatus::DueSoon);
        assert_eq!(derive_status(7), ResourceStatus::DueSoon);
        assert_eq!(derive_status(8), ResourceStatus::Healthy);
        assert_eq!(derive_status(-1), ResourceStatus::Overdue);
    }

    #[test]
    fn parses_iso_expiry_dates() {
        assert_eq!(expiry_date_to_millis("1970-01-02"), Some(MILLIS_PER_DAY));
        assert_eq!(
            expiry_date_to_millis("1970-01-02T15:30:00Z"),
            Some(MILLIS_PER_DAY)
        );
        assert_eq!(expiry_date_to_millis("not-a-date"), None);
    }
}
