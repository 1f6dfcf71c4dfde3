use chrono::{DateTime, FixedOffset, Utc};

use crate::error::AppError;

/// Parses an ISO-8601 timestamp with an explicit offset.
pub fn parse_launch_date(raw: &str) -> Result<DateTime<FixedOffset>, AppError> {
    Ok(DateTime::parse_from_rfc3339(raw.trim())?)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownUnit {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl CountdownUnit {
    pub const ALL: [CountdownUnit; 4] = [
        CountdownUnit::Days,
        CountdownUnit::Hours,
        CountdownUnit::Minutes,
        CountdownUnit::Seconds,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CountdownUnit::Days => "days",
            CountdownUnit::Hours => "hours",
            CountdownUnit::Minutes => "minutes",
            CountdownUnit::Seconds => "seconds",
        }
    }
}

/// Remaining time until launch, broken into display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub expired: bool,
}

impl TimeLeft {
    pub const EXPIRED: TimeLeft = TimeLeft {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        expired: true,
    };

    /// A missing target counts as already launched.
    pub fn until(target: Option<&DateTime<FixedOffset>>, now: DateTime<Utc>) -> Self {
        let Some(target) = target else {
            return Self::EXPIRED;
        };
        let difference = target.with_timezone(&Utc) - now;
        if difference.num_milliseconds() <= 0 {
            return Self::EXPIRED;
        }

        let total_seconds = difference.num_seconds();
        Self {
            days: total_seconds / 86_400,
            hours: (total_seconds % 86_400) / 3_600,
            minutes: (total_seconds % 3_600) / 60,
            seconds: total_seconds % 60,
            expired: false,
        }
    }

    pub fn value(&self, unit: CountdownUnit) -> i64 {
        match unit {
            CountdownUnit::Days => self.days,
            CountdownUnit::Hours => self.hours,
            CountdownUnit::Minutes => self.minutes,
            CountdownUnit::Seconds => self.seconds,
        }
    }

    pub fn units(&self) -> [(CountdownUnit, String); 4] {
        CountdownUnit::ALL.map(|unit| (unit, pad(self.value(unit))))
    }
}

pub fn pad(value: i64) -> String {
    format!("{:02}", value)
}

/// e.g. `Launching November 15, 2025 • 11:00 AM EST`
pub fn launch_label(target: &DateTime<FixedOffset>, zone_label: &str) -> String {
    format!(
        "Launching {} • {} {}",
        target.format("%B %-d, %Y"),
        target.format("%-I:%M %p"),
        zone_label
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn launch() -> DateTime<FixedOffset> {
        parse_launch_date("2025-11-15T11:00:00-05:00").unwrap()
    }

    #[test]
    fn splits_remaining_time() {
        // 16:00 UTC is 11:00 at -05:00
        let now = Utc.with_ymd_and_hms(2025, 11, 13, 14, 58, 30).unwrap();
        let left = TimeLeft::until(Some(&launch()), now);
        assert_eq!(
            left,
            TimeLeft {
                days: 2,
                hours: 1,
                minutes: 1,
                seconds: 30,
                expired: false,
            }
        );
        let rendered: Vec<String> = left.units().into_iter().map(|(_, v)| v).collect();
        assert_eq!(rendered, ["02", "01", "01", "30"]);
    }

    #[test]
    fn drops_partial_seconds() {
        let now = Utc.with_ymd_and_hms(2025, 11, 15, 15, 59, 58).unwrap()
            + chrono::Duration::milliseconds(500);
        let left = TimeLeft::until(Some(&launch()), now);
        assert_eq!(left.seconds, 1);
        assert!(!left.expired);
    }

    #[test]
    fn launch_moment_and_after_are_expired() {
        let at = Utc.with_ymd_and_hms(2025, 11, 15, 16, 0, 0).unwrap();
        assert_eq!(TimeLeft::until(Some(&launch()), at), TimeLeft::EXPIRED);
        let later = at + chrono::Duration::days(3);
        assert_eq!(TimeLeft::until(Some(&launch()), later), TimeLeft::EXPIRED);
    }

    #[test]
    fn missing_target_is_expired() {
        assert!(parse_launch_date("soon").is_err());
        assert_eq!(TimeLeft::until(None, Utc::now()), TimeLeft::EXPIRED);
    }

    #[test]
    fn long_countdowns_keep_every_day_digit() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 16, 0, 0).unwrap();
        let left = TimeLeft::until(Some(&launch()), now);
        assert_eq!(left.days, 318);
        assert_eq!(pad(left.days), "318");
    }

    #[test]
    fn formats_launch_label() {
        assert_eq!(
            launch_label(&launch(), "EST"),
            "Launching November 15, 2025 • 11:00 AM EST"
        );
    }
}
