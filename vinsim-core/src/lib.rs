//! Core types for simulated vineyard data.
//!
//! A simulated dataset is a dense, date-sorted table of [`record::DailyRecord`]
//! rows: daily climate variables plus annual production and economic metrics
//! broadcast across every day of their calendar year. This crate owns the
//! table's schema, its flat CSV representation, and the read-side windowing
//! (calendar-year summaries and vintage windows) used by reporting tools.

pub mod csv_io;
pub mod date_range;
pub mod error;
pub mod record;
pub mod summary;
pub mod vintage;

pub use error::{Error, Result};
