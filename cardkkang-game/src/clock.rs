//! Calendar-date source for the daily counter.

use chrono::{Days, Local, NaiveDate};
use std::cell::Cell;
use std::rc::Rc;

pub trait Clock {
    /// Local calendar date at the time of the call.
    fn today(&self) -> NaiveDate;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Wall clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Manually advanced clock; clones share the same date.
#[derive(Debug, Clone)]
pub struct FixedClock {
    date: Rc<Cell<NaiveDate>>,
}

impl FixedClock {
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: Rc::new(Cell::new(date)),
        }
    }

    pub fn set(&self, date: NaiveDate) {
        self.date.set(date);
    }

    /// Move forward by `days`, saturating at the last representable date.
    pub fn advance_days(&self, days: u64) {
        let current = self.date.get();
        self.date
            .set(current.checked_add_days(Days::new(days)).unwrap_or(current));
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date.get()
    }
}
