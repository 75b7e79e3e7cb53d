// src/fields.rs
//! Field normalizers: the per-column mini-grammars for times and dates.
//! Text cleanup lives in `core::clean`, the vehicle vocabulary in
//! `vehicle`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::error::EngineError;

lazy_static! {
    static ref TIME_COLON: Regex = Regex::new(r"(\d{1,2}):(\d{2})").unwrap();
    static ref TIME_DOT: Regex = Regex::new(r"(\d{1,2})\.(\d{2})").unwrap();
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("not a time of day: {0:?}")]
pub struct TimeParseError(pub String);

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("not a date: {0:?}")]
pub struct DateParseError(pub String);

/// Time format descriptor, e.g. `"hh:mm"` or `"hh.mm"`.
#[derive(Debug, Clone)]
pub struct TimeFormat {
    sep: char,
}

impl TimeFormat {
    pub fn new(descriptor: &str) -> Result<Self, EngineError> {
        match descriptor {
            "hh:mm" => Ok(Self { sep: ':' }),
            "hh.mm" => Ok(Self { sep: '.' }),
            other => Err(EngineError::BadTimeFormat(other.to_string())),
        }
    }

    /// First `\d{1,2}<sep>\d{2}` token in `fragment`, range-checked.
    /// Night-line names like "N12" never match; out-of-range tokens like
    /// "25:99" are rejected, not wrapped.
    pub fn parse(&self, fragment: &str) -> Result<NaiveTime, TimeParseError> {
        let re: &Regex = match self.sep {
            ':' => &TIME_COLON,
            _ => &TIME_DOT,
        };
        let fail = || TimeParseError(fragment.to_string());
        let caps = re.captures(fragment).ok_or_else(fail)?;
        let hour: u32 = caps[1].parse().map_err(|_| fail())?;
        let minute: u32 = caps[2].parse().map_err(|_| fail())?;
        NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(fail)
    }
}

/// Date format descriptor, e.g. `"dd.MM.yy"`. Translated to a chrono
/// format string once, at engine build time.
#[derive(Debug, Clone)]
pub struct DateFormat {
    chrono_fmt: &'static str,
}

impl DateFormat {
    pub fn new(descriptor: &str) -> Result<Self, EngineError> {
        let chrono_fmt = match descriptor {
            "dd.MM.yy" => "%d.%m.%y",
            "dd.MM.yyyy" => "%d.%m.%Y",
            "yyyy-MM-dd" => "%Y-%m-%d",
            "MM/dd/yyyy" => "%m/%d/%Y",
            other => return Err(EngineError::BadDateFormat(other.to_string())),
        };
        Ok(Self { chrono_fmt })
    }

    pub fn parse(&self, fragment: &str) -> Result<NaiveDate, DateParseError> {
        NaiveDate::parse_from_str(fragment.trim(), self.chrono_fmt)
            .map_err(|_| DateParseError(fragment.to_string()))
    }
}

/// The assumed date when a document only carries times. A departure
/// slightly in the past still gets today's date; there is no rollover.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Stamp a time onto a date to form the record timestamp.
pub fn combine(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    NaiveDateTime::new(date, time)
}
