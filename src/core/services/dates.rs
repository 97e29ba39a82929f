//! Date formatting, elapsed durations and recurrence periods
//!
//! Date formats use the task-manager letters rather than strftime:
//!
//! | letter | meaning |
//! |---|---|
//! | `m` / `M` | month, unpadded / two digits |
//! | `d` / `D` | day, unpadded / two digits |
//! | `y` / `Y` | two / four digit year |
//! | `a` / `A` | short / long weekday name |
//! | `b` / `B` | short / long month name |
//! | `j` / `J` | day of year, unpadded / three digits |
//! | `h` / `H` | hour, unpadded / two digits |
//! | `N` / `S` | minutes / seconds, two digits |
//! | `V` | ISO week number |
//!
//! Any other character is copied literally. All formatting is in local time.

use std::sync::LazyLock;

use chrono::{DateTime, Local, NaiveTime};
use regex::Regex;

const DAY: i64 = 86_400;

/// Convert an epoch timestamp to local time
#[must_use]
pub fn to_local(epoch: i64) -> Option<DateTime<Local>> {
    DateTime::from_timestamp(epoch, 0).map(|dt| dt.with_timezone(&Local))
}

/// Parse a decimal epoch attribute value
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<i64> {
    let parsed = raw.trim().parse().ok();
    if parsed.is_none() && !raw.trim().is_empty() {
        log::warn!("ignoring unparseable timestamp '{raw}'");
    }
    parsed
}

fn chrono_pattern(format: &str) -> String {
    let mut pattern = String::with_capacity(format.len() * 2);
    for c in format.chars() {
        let spec = match c {
            'm' => "%-m",
            'M' => "%m",
            'd' => "%-d",
            'D' => "%d",
            'y' => "%y",
            'Y' => "%Y",
            'a' => "%a",
            'A' => "%A",
            'b' => "%b",
            'B' => "%B",
            'j' => "%-j",
            'J' => "%j",
            'h' => "%-H",
            'H' => "%H",
            'N' => "%M",
            'S' => "%S",
            'V' => "%V",
            '%' => "%%",
            other => {
                pattern.push(other);
                continue;
            },
        };
        pattern.push_str(spec);
    }
    pattern
}

/// Format a timestamp as a date
#[must_use]
pub fn format_date(epoch: i64, format: &str) -> String {
    to_local(epoch).map_or_else(String::new, |dt| dt.format(&chrono_pattern(format)).to_string())
}

/// Format a timestamp as a date followed by `HH:MM:SS`
#[must_use]
pub fn format_date_with_time(epoch: i64, format: &str) -> String {
    to_local(epoch).map_or_else(String::new, |dt| {
        format!("{} {}", dt.format(&chrono_pattern(format)), dt.format("%H:%M:%S"))
    })
}

/// Epoch of local midnight on the day containing `epoch`
#[must_use]
pub fn start_of_day(epoch: i64) -> i64 {
    to_local(epoch)
        .and_then(|dt| dt.date_naive().and_time(NaiveTime::MIN).and_local_timezone(Local).earliest())
        .map_or(epoch - epoch.rem_euclid(DAY), |midnight| midnight.timestamp())
}

const DAY_SECS: u64 = DAY.unsigned_abs();

#[allow(clippy::cast_precision_loss)]
fn years(seconds: u64) -> f64 {
    seconds as f64 / (365.0 * DAY_SECS as f64)
}

/// Prefix `-` for negative durations (an `entry` in the future)
fn signed(seconds: i64, body: String) -> String {
    if seconds < 0 && body != "-" { format!("-{body}") } else { body }
}

/// Long-form elapsed time: `1.2 yrs`, `4 mths`, `3 wks`, `2 days`, `5 hrs`, `12 mins`, `30 secs`
#[must_use]
pub fn format_elapsed(seconds: i64) -> String {
    let magnitude = seconds.unsigned_abs();
    let days = magnitude / DAY_SECS;
    let body = if days >= 365 {
        format!("{:.1} yrs", years(magnitude))
    } else if days >= 84 {
        format!("{} mths", days / 30)
    } else if days >= 14 {
        format!("{} wks", days / 7)
    } else if days == 1 {
        "1 day".to_string()
    } else if days > 1 {
        format!("{days} days")
    } else if magnitude >= 3600 {
        format!("{} hrs", magnitude / 3600)
    } else if magnitude >= 60 {
        format!("{} mins", magnitude / 60)
    } else if magnitude >= 1 {
        format!("{magnitude} secs")
    } else {
        "-".to_string()
    };
    signed(seconds, body)
}

/// Compact elapsed time: `1.2y`, `4mo`, `3w`, `2d`, `5h`, `12m`, `30s`
#[must_use]
pub fn format_elapsed_compact(seconds: i64) -> String {
    let magnitude = seconds.unsigned_abs();
    let days = magnitude / DAY_SECS;
    let body = if days >= 365 {
        format!("{:.1}y", years(magnitude))
    } else if days >= 84 {
        format!("{}mo", days / 30)
    } else if days >= 14 {
        format!("{}w", days / 7)
    } else if days >= 1 {
        format!("{days}d")
    } else if magnitude >= 3600 {
        format!("{}h", magnitude / 3600)
    } else if magnitude >= 60 {
        format!("{}m", magnitude / 60)
    } else if magnitude >= 1 {
        format!("{magnitude}s")
    } else {
        "-".to_string()
    };
    signed(seconds, body)
}

static NUMERIC_PERIOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\s*([a-z]+)$").unwrap_or_else(|e| panic!("invalid period regex: {e}"))
});

/// Length of a recurrence period in seconds; 0 when unrecognized
#[must_use]
pub fn period_seconds(period: &str) -> i64 {
    let period = period.trim().to_lowercase();
    let named = match period.as_str() {
        "daily" | "day" | "weekdays" => Some(1),
        "weekly" | "sennight" => Some(7),
        "biweekly" | "fortnight" => Some(14),
        "monthly" => Some(30),
        "bimonthly" => Some(61),
        "quarterly" => Some(91),
        "semiannual" => Some(183),
        "annual" | "yearly" => Some(365),
        "biannual" | "biyearly" => Some(730),
        _ => None,
    };
    if let Some(days) = named {
        return days * DAY;
    }

    NUMERIC_PERIOD
        .captures(&period)
        .and_then(|caps| {
            let count: i64 = caps[1].parse().ok()?;
            let unit = match &caps[2] {
                "d" | "day" | "days" => DAY,
                "w" | "wk" | "wks" | "week" | "weeks" => 7 * DAY,
                "m" | "mo" | "mth" | "mths" | "month" | "months" => 30 * DAY,
                "q" | "qtr" | "qtrs" | "quarter" | "quarters" => 91 * DAY,
                "y" | "yr" | "yrs" | "year" | "years" => 365 * DAY,
                _ => return None,
            };
            count.checked_mul(unit)
        })
        .unwrap_or(0)
}
