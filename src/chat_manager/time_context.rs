use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;

use crate::utils::log_debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    LateNight,
}

impl TimeOfDay {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=20 => TimeOfDay::Evening,
            _ => TimeOfDay::LateNight,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::LateNight => "late night",
        }
    }

    fn hint(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "the day is just starting, coffee or getting ready fits",
            TimeOfDay::Afternoon => "the middle of the day, busy with work or errands",
            TimeOfDay::Evening => "the day is winding down, dinner or relaxing fits",
            TimeOfDay::LateNight => {
                "it is late, being in bed fits and so does gentle concern if they are still up"
            }
        }
    }
}

/// Requested zone, then the configured default, then UTC.
pub fn resolve_timezone(requested: Option<&str>, default_zone: &str) -> Tz {
    if let Some(name) = requested.map(str::trim).filter(|s| !s.is_empty()) {
        match name.parse::<Tz>() {
            Ok(tz) => return tz,
            Err(_) => log_debug(
                "time_context",
                format!("unknown timezone '{}', using default '{}'", name, default_zone),
            ),
        }
    }
    default_zone.trim().parse::<Tz>().unwrap_or(Tz::UTC)
}

pub fn time_context_at(now: DateTime<Utc>, tz: Tz) -> String {
    let local = now.with_timezone(&tz);
    let bucket = TimeOfDay::from_hour(local.hour());
    format!(
        "**TIME CONTEXT**: It is currently {} in {} ({}). Let this shape your state and replies naturally. Do not state the exact time unless asked.",
        bucket.as_str(),
        tz.name(),
        bucket.hint()
    )
}

pub fn time_context(requested: Option<&str>, default_zone: &str) -> String {
    time_context_at(Utc::now(), resolve_timezone(requested, default_zone))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn bucket_edges() {
        assert_eq!(TimeOfDay::from_hour(4), TimeOfDay::LateNight);
        assert_eq!(TimeOfDay::from_hour(5), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(11), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(20), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(21), TimeOfDay::LateNight);
        assert_eq!(TimeOfDay::from_hour(0), TimeOfDay::LateNight);
    }

    #[test]
    fn invalid_zone_falls_back() {
        assert_eq!(resolve_timezone(Some("Mars/Olympus"), "Europe/Berlin"), Tz::Europe__Berlin);
        assert_eq!(resolve_timezone(Some("Mars/Olympus"), "nonsense"), Tz::UTC);
        assert_eq!(resolve_timezone(None, "Asia/Tokyo"), Tz::Asia__Tokyo);
        assert_eq!(resolve_timezone(Some(" America/New_York "), "UTC"), Tz::America__New_York);
    }

    #[test]
    fn local_hour_drives_bucket() {
        // 03:00 UTC is 12:00 in Tokyo and 23:00 the previous day in New York (EDT).
        let now = Utc.with_ymd_and_hms(2024, 7, 1, 3, 0, 0).unwrap();
        let tokyo = time_context_at(now, Tz::Asia__Tokyo);
        assert!(tokyo.contains("afternoon in Asia/Tokyo"));
        let ny = time_context_at(now, Tz::America__New_York);
        assert!(ny.contains("late night in America/New_York"));
    }
}
