use crate::error::{Error, Result};
use crate::record::DailyRecord;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A vintage (annata) spans August 1 of its starting year through
/// September 30 of the following year, covering one full growing season
/// plus the late harvest window. It is the detail-view timeframe used when
/// inspecting a single production year.
#[derive(Debug, Clone, PartialEq)]
pub struct Vintage {
    pub year: i32,
    pub days: Vec<DailyRecord>,
}

/// First day of the vintage window: August 1 of the starting year.
pub fn vintage_start(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 8, 1).unwrap()
}

/// Last day of the vintage window: September 30 of the following year.
pub fn vintage_end(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year + 1, 9, 30).unwrap()
}

/// Display label for a vintage, e.g. "2015/2016".
pub fn vintage_label(year: i32) -> String {
    format!("{}/{}", year, year + 1)
}

impl Vintage {
    /// Slice a date-sorted record table down to one vintage window.
    ///
    /// The table is expected to be dense and ascending (the simulator
    /// guarantees this), so the window is a contiguous run of rows. An
    /// empty window is an error rather than an empty vintage.
    pub fn from_records(records: &[DailyRecord], year: i32) -> Result<Self> {
        let start = vintage_start(year);
        let end = vintage_end(year);
        let days: Vec<DailyRecord> = records
            .iter()
            .filter(|r| start <= r.date && r.date <= end)
            .cloned()
            .collect();
        if days.is_empty() {
            return Err(Error::EmptyVintage(year));
        }
        Ok(Vintage { year, days })
    }

    /// Starting years of every vintage with at least one day in the table.
    pub fn available_years(records: &[DailyRecord]) -> Vec<i32> {
        let Some(first) = records.first() else {
            return Vec::new();
        };
        let last = records.last().unwrap();
        (first.date.year() - 1..=last.date.year())
            .filter(|&year| {
                records
                    .iter()
                    .any(|r| vintage_start(year) <= r.date && r.date <= vintage_end(year))
            })
            .collect()
    }
}

/// Detail KPIs for one vintage window.
///
/// Annual production and economic figures are taken from the first row of
/// the window (they are constant within a calendar year); climate event
/// counts are tallied over the whole window. The disease-risk day here is
/// hot-and-humid only (t > 25 and h > 80) -- unlike the yield-penalty
/// definition in the deriver, it does not require rainfall. The two
/// definitions diverge on purpose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VintageReport {
    pub year: i32,
    pub label: String,
    pub hectares_simulated: f64,
    pub yield_kg_ha: f64,
    pub grape_sugar_level: f64,
    pub total_revenue_eur: f64,
    pub total_cost_eur: f64,
    pub extreme_heat_days: usize,
    pub frost_days: usize,
    pub extreme_rain_days: usize,
    pub disease_risk_days: usize,
    pub total_precipitation_mm: f64,
    pub mean_humidity_percent: f64,
    pub rainy_days: usize,
    pub dry_days: usize,
}

impl From<&Vintage> for VintageReport {
    fn from(vintage: &Vintage) -> Self {
        let days = &vintage.days;
        let first = &days[0];
        let hectares = first.hectares_simulated;
        let total = days.len() as f64;

        VintageReport {
            year: vintage.year,
            label: vintage_label(vintage.year),
            hectares_simulated: hectares,
            yield_kg_ha: first.yield_kg_ha,
            grape_sugar_level: first.grape_sugar_level,
            total_revenue_eur: first.revenue_eur_ha * hectares,
            total_cost_eur: first.production_cost_eur_ha * hectares,
            extreme_heat_days: days.iter().filter(|d| d.temperature_c > 35.0).count(),
            frost_days: days.iter().filter(|d| d.temperature_c < 5.0).count(),
            extreme_rain_days: days.iter().filter(|d| d.precipitation_mm > 20.0).count(),
            disease_risk_days: days
                .iter()
                .filter(|d| d.temperature_c > 25.0 && d.humidity_percent > 80.0)
                .count(),
            total_precipitation_mm: days.iter().map(|d| d.precipitation_mm).sum(),
            mean_humidity_percent: days.iter().map(|d| d.humidity_percent).sum::<f64>() / total,
            rainy_days: days.iter().filter(|d| d.precipitation_mm > 0.0).count(),
            dry_days: days.iter().filter(|d| d.precipitation_mm == 0.0).count(),
        }
    }
}
