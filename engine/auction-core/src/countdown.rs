//! Time-remaining evaluation for bidding windows

use crate::types::Locale;
use chrono::{DateTime, Duration, Utc};

/// Discrete classification of the time left until an expiry instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRemaining {
    Expired,
    Remaining { days: i64, hours: i64, minutes: i64 },
}

/// Classify the time left until `expiry` as seen from `now`.
///
/// The boundary is inclusive: `now == expiry` already classifies as
/// `Expired`. Components are floor-divided, so the final minute before
/// expiry reads as zero minutes rather than rounding up.
pub fn time_remaining(expiry: DateTime<Utc>, now: DateTime<Utc>) -> TimeRemaining {
    let diff = expiry - now;
    if diff <= Duration::zero() {
        return TimeRemaining::Expired;
    }

    let days = diff.num_days();
    let hours = diff.num_hours() - days * 24;
    let minutes = diff.num_minutes() - diff.num_hours() * 60;

    TimeRemaining::Remaining { days, hours, minutes }
}

impl TimeRemaining {
    /// Check if the window has closed
    pub fn is_expired(&self) -> bool {
        matches!(self, TimeRemaining::Expired)
    }

    /// Render the most specific duration bucket:
    /// days+hours when at least a day remains, hours+minutes within the
    /// last day, bare minutes within the last hour.
    pub fn format(&self, locale: Locale) -> String {
        match *self {
            TimeRemaining::Expired => expired_label(locale).to_string(),
            TimeRemaining::Remaining { days, hours, minutes } => {
                if days > 0 {
                    format!(
                        "{days} {} {hours} {}",
                        unit_label(days, locale, Unit::Day),
                        unit_label(hours, locale, Unit::Hour)
                    )
                } else if hours > 0 {
                    format!(
                        "{hours} {} {minutes} {}",
                        unit_label(hours, locale, Unit::Hour),
                        unit_label(minutes, locale, Unit::Minute)
                    )
                } else {
                    format!("{minutes} {}", unit_label(minutes, locale, Unit::Minute))
                }
            }
        }
    }
}

#[derive(Clone, Copy)]
enum Unit {
    Day,
    Hour,
    Minute,
}

fn expired_label(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Expired",
        Locale::De => "Abgelaufen",
    }
}

fn unit_label(n: i64, locale: Locale, unit: Unit) -> &'static str {
    let singular = n == 1;
    match (unit, locale) {
        (Unit::Day, Locale::En) => {
            if singular {
                "day"
            } else {
                "days"
            }
        }
        (Unit::Day, Locale::De) => {
            if singular {
                "Tag"
            } else {
                "Tage"
            }
        }
        (Unit::Hour, Locale::En) => {
            if singular {
                "hour"
            } else {
                "hours"
            }
        }
        (Unit::Hour, Locale::De) => {
            if singular {
                "Stunde"
            } else {
                "Stunden"
            }
        }
        (Unit::Minute, Locale::En) => {
            if singular {
                "minute"
            } else {
                "minutes"
            }
        }
        (Unit::Minute, Locale::De) => {
            if singular {
                "Minute"
            } else {
                "Minuten"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, h, m, s).unwrap()
    }

    #[test]
    fn past_expiry_is_expired() {
        let now = at(12, 0, 0);
        assert_eq!(time_remaining(at(11, 59, 59), now), TimeRemaining::Expired);
    }

    #[test]
    fn exact_boundary_is_expired() {
        let now = at(12, 0, 0);
        assert_eq!(time_remaining(now, now), TimeRemaining::Expired);
    }

    #[test]
    fn decomposes_days_hours_minutes() {
        let now = at(12, 0, 0);
        let expiry = now + Duration::days(2) + Duration::hours(3) + Duration::minutes(45);

        assert_eq!(
            time_remaining(expiry, now),
            TimeRemaining::Remaining { days: 2, hours: 3, minutes: 45 }
        );
    }

    #[test]
    fn final_second_reads_zero_minutes() {
        let now = at(12, 0, 0);
        let remaining = time_remaining(now + Duration::seconds(1), now);

        assert_eq!(remaining, TimeRemaining::Remaining { days: 0, hours: 0, minutes: 0 });
        assert_eq!(remaining.format(Locale::En), "0 minutes");
    }

    #[test]
    fn format_buckets() {
        let days = TimeRemaining::Remaining { days: 2, hours: 0, minutes: 30 };
        let hours = TimeRemaining::Remaining { days: 0, hours: 5, minutes: 12 };
        let minutes = TimeRemaining::Remaining { days: 0, hours: 0, minutes: 7 };

        // Minutes are dropped once a full day remains, hours may be zero
        assert_eq!(days.format(Locale::En), "2 days 0 hours");
        assert_eq!(hours.format(Locale::En), "5 hours 12 minutes");
        assert_eq!(minutes.format(Locale::En), "7 minutes");
    }

    #[test]
    fn format_localized_with_plurals() {
        let one = TimeRemaining::Remaining { days: 1, hours: 1, minutes: 0 };

        assert_eq!(one.format(Locale::En), "1 day 1 hour");
        assert_eq!(one.format(Locale::De), "1 Tag 1 Stunde");
        assert_eq!(TimeRemaining::Expired.format(Locale::De), "Abgelaufen");
    }
}
