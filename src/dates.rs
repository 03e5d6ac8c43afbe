use crate::errors::HabitError;
use chrono::{Local, NaiveDate};

/// Today on the local calendar, not UTC.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, HabitError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| HabitError::InvalidDate(raw.to_string()))
}

pub fn anchor_or_today(raw: Option<&str>) -> Result<NaiveDate, HabitError> {
    match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => parse_date(raw),
        None => Ok(today()),
    }
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn short_label(date: NaiveDate) -> String {
    date.format("%m-%d").to_string()
}

pub fn pretty_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d, %Y").to_string()
}
