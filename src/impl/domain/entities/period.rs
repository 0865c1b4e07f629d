use chrono::{Datelike as _, Months, NaiveDate};
use fractic_server_error::ServerError;

use crate::errors::InvalidDateRange;

/// Identifies a calendar month. Rendered and parsed as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PeriodKey(pub(crate) NaiveDate);

impl PeriodKey {
    pub fn of(date: NaiveDate) -> Self {
        PeriodKey(date.with_day(1).unwrap_or(date))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    pub fn last_day(&self) -> NaiveDate {
        self.0
            .iter_days()
            .take_while(|d| d.month() == self.0.month())
            .last()
            .unwrap_or(self.0)
    }

    pub fn previous(&self) -> Self {
        self.0.pred_opt().map(PeriodKey::of).unwrap_or(*self)
    }

    pub fn next(&self) -> Self {
        self.last_day().succ_opt().map(PeriodKey::of).unwrap_or(*self)
    }

    pub fn range(&self) -> DateRange {
        DateRange {
            start: self.first_day(),
            end: self.last_day(),
        }
    }
}

impl std::fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

/// Inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ServerError> {
        if start > end {
            return Err(InvalidDateRange::new(&start, &end));
        }
        Ok(Self { start, end })
    }

    pub fn single_day(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFilter {
    ThisMonth,
    LastMonth,
    Last3Months,
    Last6Months,
    ThisYear,
    Custom(DateRange),
}

impl DateFilter {
    pub const PRESETS: [DateFilter; 5] = [
        DateFilter::ThisMonth,
        DateFilter::LastMonth,
        DateFilter::Last3Months,
        DateFilter::Last6Months,
        DateFilter::ThisYear,
    ];

    pub fn resolve(&self, today: NaiveDate) -> DateRange {
        match self {
            DateFilter::ThisMonth => PeriodKey::of(today).range(),
            DateFilter::LastMonth => PeriodKey::of(today).previous().range(),
            DateFilter::Last3Months => months_back(today, 3),
            DateFilter::Last6Months => months_back(today, 6),
            DateFilter::ThisYear => DateRange {
                start: today.with_ordinal(1).unwrap_or(today),
                end: today,
            },
            DateFilter::Custom(range) => *range,
        }
    }
}

fn months_back(today: NaiveDate, months: u32) -> DateRange {
    DateRange {
        start: today
            .checked_sub_months(Months::new(months))
            .unwrap_or(NaiveDate::MIN),
        end: today,
    }
}
