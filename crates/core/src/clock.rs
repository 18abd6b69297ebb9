//! Calendar source for synthesized dates.
//!
//! Domain code never reads the wall clock directly; it asks a [`Clock`], so
//! tests can pin "today".

use chrono::{Local, NaiveDate};

/// Supplies the current calendar date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock frozen at one date.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
