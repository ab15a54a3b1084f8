//! Injectable wall clock.
//!
//! Services never read the system time themselves; the year that scopes the
//! ledger is resolved from a `Clock` at the dispatch boundary.

use chrono::{Datelike, NaiveDate, Utc};

use crate::key::Year;

/// Source of "today".
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;

    fn current_year(&self) -> Year {
        Year::new(self.today().year())
    }
}

/// Clock backed by the system time (UTC).
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock pinned to one date (tests, replays).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Midsummer of `year`; convenient when only the year matters.
    pub fn in_year(year: i32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, 6, 30).map(Self)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_its_year() {
        let clock = FixedClock::in_year(2024).unwrap();
        assert_eq!(clock.current_year(), Year::new(2024));
    }

    #[test]
    fn year_boundary_changes_partition() {
        let dec = FixedClock::new(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        let jan = FixedClock::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_ne!(
            dec.current_year().partition_key(),
            jan.current_year().partition_key()
        );
    }
}
