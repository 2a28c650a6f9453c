//! Date-range filter input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const MISSING_DATES_MESSAGE: &str = "Por favor, selecione ambas as datas";
pub const INVERTED_RANGE_MESSAGE: &str = "Data inicial não pode ser maior que a data final";

const INPUT_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_FORMAT: &str = "%d/%m/%Y";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("Por favor, selecione ambas as datas")]
    MissingDates,
    #[error("Data inicial não pode ser maior que a data final")]
    Inverted,
    #[error("Data inválida: {0}")]
    InvalidDate(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Default for DateRange {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2025, 1, 23).unwrap_or_default(),
            end: NaiveDate::from_ymd_opt(2025, 1, 24).unwrap_or_default(),
        }
    }
}

impl DateRange {
    /// Parses the two `yyyy-mm-dd` inputs of the filter bar.
    ///
    /// # Errors
    /// Returns [`FilterError`] when either input is blank or unparsable, or
    /// when the start date is after the end date.
    pub fn parse(start: &str, end: &str) -> Result<Self, FilterError> {
        let (start, end) = (start.trim(), end.trim());
        if start.is_empty() || end.is_empty() {
            return Err(FilterError::MissingDates);
        }
        let start = parse_date(start)?;
        let end = parse_date(end)?;
        if start > end {
            return Err(FilterError::Inverted);
        }
        Ok(Self { start, end })
    }

    /// `Filtro aplicado: dd/mm/yyyy até dd/mm/yyyy`
    #[must_use]
    pub fn applied_message(&self) -> String {
        format!("Filtro aplicado: {self}")
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} até {}",
            self.start.format(DISPLAY_FORMAT),
            self.end.format(DISPLAY_FORMAT)
        )
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, FilterError> {
    NaiveDate::parse_from_str(value, INPUT_FORMAT)
        .map_err(|_| FilterError::InvalidDate(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range() {
        let range = DateRange::default();
        assert_eq!(range.to_string(), "23/01/2025 até 24/01/2025");
    }

    #[test]
    fn both_dates_required() {
        assert_eq!(DateRange::parse("", "2025-01-24"), Err(FilterError::MissingDates));
        assert_eq!(DateRange::parse("2025-01-23", "  "), Err(FilterError::MissingDates));
        assert_eq!(FilterError::MissingDates.to_string(), MISSING_DATES_MESSAGE);
    }

    #[test]
    fn start_after_end_is_rejected() {
        let err = DateRange::parse("2025-02-01", "2025-01-31");
        assert_eq!(err, Err(FilterError::Inverted));
        assert_eq!(FilterError::Inverted.to_string(), INVERTED_RANGE_MESSAGE);
    }

    #[test]
    fn single_day_range_is_valid() -> Result<(), FilterError> {
        let range = DateRange::parse("2025-03-09", "2025-03-09")?;
        assert_eq!(
            range.applied_message(),
            "Filtro aplicado: 09/03/2025 até 09/03/2025"
        );
        Ok(())
    }

    #[test]
    fn garbage_is_reported() {
        assert_eq!(
            DateRange::parse("23/01/2025", "2025-01-24"),
            Err(FilterError::InvalidDate("23/01/2025".to_string()))
        );
    }
}
