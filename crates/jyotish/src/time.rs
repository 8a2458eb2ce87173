//! Birth time resolution: local calendar date and clock time to a UTC instant.
//!
//! DST policy: a local time that occurs twice (fall-back overlap) resolves
//! with the standard-time offset; a local time skipped by a spring-forward
//! jump resolves with the daylight offset. Both attach a [`Warning`].

use crate::error::InvalidInputError;
use chrono::{
    DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone,
    Utc,
};
use chrono_tz::{OffsetComponents, Tz};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const OPTIMAL_YEAR_RANGE: std::ops::RangeInclusive<i32> = 1900..=2100;

const UNIX_EPOCH_JD: f64 = 2_440_587.5;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Advisory, non-fatal notes attached to a resolved birth moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    YearOutOfRange { year: i32 },
    NoTimezone,
    DstAmbiguous { timezone: String },
    DstGap { timezone: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::YearOutOfRange { year } => write!(
                f,
                "Birth year {} is outside optimal range (1900-2100); accuracy may be reduced",
                year
            ),
            Self::NoTimezone => f.write_str("No timezone specified, assuming UTC"),
            Self::DstAmbiguous { timezone } => write!(
                f,
                "Local time is ambiguous in {} (DST overlap); resolved to standard time",
                timezone
            ),
            Self::DstGap { timezone } => write!(
                f,
                "Local time does not exist in {} (DST gap); resolved to daylight time",
                timezone
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthMoment {
    pub date: NaiveDate,
    pub local_time: NaiveTime,
    pub timezone: Option<String>,
    pub utc: DateTime<Utc>,
    pub julian_day: f64,
    pub warnings: Vec<Warning>,
}

pub fn parse_date(value: &str) -> Result<NaiveDate, InvalidInputError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| InvalidInputError::Date {
        value: value.to_string(),
    })
}

pub fn parse_time(value: &str) -> Result<NaiveTime, InvalidInputError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| InvalidInputError::Time {
        value: value.to_string(),
    })
}

pub fn parse_timezone(value: &str) -> Result<Tz, InvalidInputError> {
    value
        .trim()
        .parse::<Tz>()
        .map_err(|_| InvalidInputError::Timezone {
            value: value.to_string(),
        })
}

/// Julian day (UT) of a UTC instant.
pub fn julian_day(dt: DateTime<Utc>) -> f64 {
    let seconds = dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_nanos()) * 1e-9;
    UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY
}

pub struct TimeResolver;

impl TimeResolver {
    /// Parse and resolve raw request strings.
    ///
    /// All malformed fields are reported together.
    pub fn resolve(
        date: &str,
        time: &str,
        timezone: Option<&str>,
    ) -> Result<BirthMoment, InvalidInputError> {
        let date = parse_date(date);
        let time = parse_time(time);
        let tz = timezone.map(parse_timezone).transpose();

        match (date, time, tz) {
            (Ok(date), Ok(time), Ok(tz)) => Ok(Self::resolve_parsed(date, time, tz)),
            (date, time, tz) => {
                let errors = [date.err(), time.err(), tz.err()]
                    .into_iter()
                    .flatten()
                    .collect();
                Err(InvalidInputError::from_many(errors).unwrap_or(InvalidInputError::Multiple(
                    Vec::new(),
                )))
            }
        }
    }

    /// Resolve already-validated values. Never fails.
    pub fn resolve_parsed(date: NaiveDate, time: NaiveTime, tz: Option<Tz>) -> BirthMoment {
        let mut warnings = Vec::new();
        let year = chrono::Datelike::year(&date);
        if !OPTIMAL_YEAR_RANGE.contains(&year) {
            warnings.push(Warning::YearOutOfRange { year });
        }

        let naive = NaiveDateTime::new(date, time);
        let utc = match tz {
            Some(tz) => localize(tz, naive, &mut warnings),
            None => {
                warnings.push(Warning::NoTimezone);
                Utc.from_utc_datetime(&naive)
            }
        };

        for warning in &warnings {
            log::warn!("{}", warning);
        }
        log::debug!("resolved {} {:?} -> {}", naive, tz, utc);

        BirthMoment {
            date,
            local_time: time,
            timezone: tz.map(|tz| tz.name().to_string()),
            utc,
            julian_day: julian_day(utc),
            warnings,
        }
    }
}

fn localize(tz: Tz, naive: NaiveDateTime, warnings: &mut Vec<Warning>) -> DateTime<Utc> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, latest) => {
            warnings.push(Warning::DstAmbiguous {
                timezone: tz.name().to_string(),
            });
            let standard = if earliest.offset().dst_offset() == Duration::zero() {
                earliest
            } else {
                latest
            };
            standard.with_timezone(&Utc)
        }
        LocalResult::None => {
            warnings.push(Warning::DstGap {
                timezone: tz.name().to_string(),
            });
            // The offset in force once the clocks have jumped forward
            let after_gap = naive + Duration::hours(3);
            let offset = tz
                .offset_from_local_datetime(&after_gap)
                .earliest()
                .map(|o| o.fix())
                .unwrap_or_else(|| tz.offset_from_utc_datetime(&naive).fix());
            let utc_naive = naive - Duration::seconds(i64::from(offset.local_minus_utc()));
            Utc.from_utc_datetime(&utc_naive)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_julian_day_j2000() {
        let dt = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert!((julian_day(dt) - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_timezone_assumes_utc() {
        let moment = TimeResolver::resolve("1990-05-15", "14:30", None).unwrap();
        assert_eq!(moment.utc.hour(), 14);
        assert_eq!(moment.utc.minute(), 30);
        assert_eq!(moment.warnings, vec![Warning::NoTimezone]);
        assert!(moment.timezone.is_none());
    }

    #[test]
    fn test_regular_conversion() {
        let moment = TimeResolver::resolve("1990-05-15", "14:30", Some("Asia/Kolkata")).unwrap();
        assert_eq!(moment.utc, Utc.with_ymd_and_hms(1990, 5, 15, 9, 0, 0).unwrap());
        assert!(moment.warnings.is_empty());
        assert_eq!(moment.timezone.as_deref(), Some("Asia/Kolkata"));
    }

    #[test]
    fn test_fall_back_uses_standard_time() {
        let moment =
            TimeResolver::resolve("2020-11-01", "01:30", Some("America/New_York")).unwrap();
        // EST is UTC-5
        assert_eq!(moment.utc, Utc.with_ymd_and_hms(2020, 11, 1, 6, 30, 0).unwrap());
        assert!(matches!(moment.warnings[0], Warning::DstAmbiguous { .. }));
    }

    #[test]
    fn test_spring_forward_gap_uses_daylight_time() {
        let moment =
            TimeResolver::resolve("2020-03-08", "02:30", Some("America/New_York")).unwrap();
        // EDT is UTC-4
        assert_eq!(moment.utc, Utc.with_ymd_and_hms(2020, 3, 8, 6, 30, 0).unwrap());
        assert!(matches!(moment.warnings[0], Warning::DstGap { .. }));
    }

    #[test]
    fn test_year_out_of_range_warns_but_resolves() {
        let moment = TimeResolver::resolve("1850-01-01", "00:00", Some("UTC")).unwrap();
        assert_eq!(moment.warnings, vec![Warning::YearOutOfRange { year: 1850 }]);
        let boundary = TimeResolver::resolve("2100-12-31", "23:59", Some("UTC")).unwrap();
        assert!(boundary.warnings.is_empty());
    }

    #[test]
    fn test_invalid_fields_reported_together() {
        let err = TimeResolver::resolve("1990-13-45", "25:61", Some("Mars/Olympus")).unwrap_err();
        match err {
            InvalidInputError::Multiple(errors) => {
                let fields: Vec<_> = errors.iter().map(|e| e.field()).collect();
                assert_eq!(fields, vec!["birth_date", "birth_time", "timezone"]);
            }
            other => panic!("expected Multiple, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_timezone_alone() {
        let err = TimeResolver::resolve("1990-05-15", "14:30", Some("Nowhere/City")).unwrap_err();
        assert_eq!(err.field(), "timezone");
    }
}
