use chrono::{DateTime, FixedOffset, NaiveDateTime};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::error::AppError;

/// How offset-bearing timestamps are mapped onto wall-clock time.
///
/// `AsRecorded` keeps the wall-clock time written in the file; `Named`
/// converts into the given zone before weekday/hour/month are derived.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) enum Timezone {
    #[default]
    AsRecorded,
    Named(Tz),
}

impl Timezone {
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = value else {
            return Ok(Timezone::AsRecorded);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("recorded") {
            return Ok(Timezone::AsRecorded);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Timezone::Named(chrono_tz::UTC));
        }
        Tz::from_str(trimmed)
            .map(Timezone::Named)
            .map_err(|_| AppError::InvalidTimezone {
                input: trimmed.to_string(),
            })
    }

    pub(crate) fn localize(self, dt: DateTime<FixedOffset>) -> NaiveDateTime {
        match self {
            Timezone::AsRecorded => dt.naive_local(),
            Timezone::Named(tz) => dt.with_timezone(&tz).naive_local(),
        }
    }
}
