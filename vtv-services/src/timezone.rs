//! Conversion of provider timestamps into Vietnam local time

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

/// Vietnam is UTC+7 all year round
const VIETNAM_UTC_OFFSET_SECS: i32 = 7 * 3600;

/// Display format of localized timestamps
const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Converts a provider timestamp into a display string in local time
///
/// Conversion never fails: input that cannot be parsed is returned as-is.
pub trait TimeLocalizer: Send + Sync {
    fn to_local_time(&self, published_at: &str) -> String;
}

/// Localizer for Indochina Time (UTC+7)
#[derive(Debug, Clone, Copy, Default)]
pub struct VietnamTime;

impl TimeLocalizer for VietnamTime {
    fn to_local_time(&self, published_at: &str) -> String {
        let Some(offset) = FixedOffset::east_opt(VIETNAM_UTC_OFFSET_SECS) else {
            return published_at.to_string();
        };

        match parse_timestamp(published_at) {
            Some(utc) => utc.with_timezone(&offset).format(DISPLAY_FORMAT).to_string(),
            None => published_at.to_string(),
        }
    }
}

/// Parse the timestamp shapes providers send; naive values are taken as UTC
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"]
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|naive| naive.and_utc())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_to_vietnam_time() {
        assert_eq!(VietnamTime.to_local_time("2024-01-01T00:00:00Z"), "01/01/2024 07:00");
        assert_eq!(VietnamTime.to_local_time("2024-12-31T20:30:00Z"), "01/01/2025 03:30");
    }

    #[test]
    fn test_offset_timestamps() {
        assert_eq!(
            VietnamTime.to_local_time("2025-03-01T10:00:00+02:00"),
            "01/03/2025 15:00"
        );
        assert_eq!(
            VietnamTime.to_local_time("Sat, 01 Mar 2025 08:00:00 GMT"),
            "01/03/2025 15:00"
        );
    }

    #[test]
    fn test_naive_timestamps_are_utc() {
        assert_eq!(VietnamTime.to_local_time("2025-03-01T08:00:00"), "01/03/2025 15:00");
        assert_eq!(VietnamTime.to_local_time("2025-03-01 08:00:00"), "01/03/2025 15:00");
    }

    #[test]
    fn test_unparsable_input_is_returned() {
        assert_eq!(VietnamTime.to_local_time("yesterday"), "yesterday");
        assert_eq!(VietnamTime.to_local_time(""), "");
    }
}
