use chrono::NaiveDate;
use vinsim_core::date_range::DateRange;
use vinsim_core::error::{Error, Result};

/// Configuration for one simulation run.
///
/// The seed is always concrete here; callers that want a fresh run draw one
/// from entropy and log it so the run can be reproduced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub hectares: f64,
    pub seed: u64,
}

impl SimConfig {
    /// Validate the configuration, failing fast before any generation.
    pub fn validate(&self) -> Result<()> {
        if self.end_date < self.start_date {
            return Err(Error::InvalidDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        if !(self.hectares > 0.0) {
            return Err(Error::InvalidHectares(self.hectares));
        }
        Ok(())
    }

    /// The inclusive daily range covered by the run.
    pub fn date_range(&self) -> Result<DateRange> {
        DateRange::new(self.start_date, self.end_date)
    }
}

#[cfg(test)]
mod tests {
    use super::SimConfig;
    use chrono::NaiveDate;
    use vinsim_core::error::Error;

    fn config() -> SimConfig {
        SimConfig {
            start_date: NaiveDate::from_ymd_opt(2015, 8, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 9, 30).unwrap(),
            hectares: 600.0,
            seed: 42,
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_reversed_dates_rejected() {
        let mut cfg = config();
        cfg.end_date = NaiveDate::from_ymd_opt(2015, 7, 31).unwrap();
        assert!(matches!(
            cfg.validate(),
            Err(Error::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_nonpositive_hectares_rejected() {
        let mut cfg = config();
        cfg.hectares = 0.0;
        assert!(matches!(cfg.validate(), Err(Error::InvalidHectares(_))));
        cfg.hectares = -10.0;
        assert!(matches!(cfg.validate(), Err(Error::InvalidHectares(_))));
        cfg.hectares = f64::NAN;
        assert!(matches!(cfg.validate(), Err(Error::InvalidHectares(_))));
    }
}
