use crate::error::{Error, Result};
use chrono::{NaiveDate, TimeDelta};
use std::mem::replace;

/// An inclusive calendar date range that iterates every day from the start
/// date through the end date. Construction validates the ordering, so a
/// `DateRange` always yields at least one date.
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct DateRange(pub NaiveDate, pub NaiveDate);

impl DateRange {
    /// Build a range, rejecting an end date that precedes the start date.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(Error::InvalidDateRange { start, end });
        }
        Ok(DateRange(start, end))
    }

    /// Number of calendar days in the range, inclusive of both endpoints.
    pub fn num_days(&self) -> i64 {
        (self.1 - self.0).num_days() + 1
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 <= self.1 {
            let next = self.0 + TimeDelta::try_days(1).unwrap();
            Some(replace(&mut self.0, next))
        } else {
            None
        }
    }
}
