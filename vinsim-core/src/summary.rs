use crate::error::{Error, Result};
use crate::record::DailyRecord;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Overview metrics for one calendar year of the table: the annual
/// production and economic figures (constant within the year, taken from
/// the first row) alongside climate aggregates and extreme-event counts.
///
/// Disease-risk days use the hot-and-humid definition (t > 25, h > 80,
/// rainfall not required), matching the overview charts rather than the
/// deriver's yield penalty. The divergence is intentional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualSummary {
    pub year: i32,
    /// Annata label, e.g. "2015/2016".
    pub label: String,
    pub yield_kg_ha: f64,
    pub grape_sugar_level: f64,
    pub revenue_eur_ha: f64,
    pub production_cost_eur_ha: f64,
    pub selling_price_eur_kg: f64,
    pub mean_temperature_c: f64,
    pub total_precipitation_mm: f64,
    pub mean_solar_irradiance_w_m2: f64,
    pub mean_humidity_percent: f64,
    pub extreme_heat_days: usize,
    pub frost_days: usize,
    pub extreme_rain_days: usize,
    pub disease_risk_days: usize,
    pub total_revenue_eur: f64,
    pub total_cost_eur: f64,
}

impl AnnualSummary {
    fn from_year_slice(year: i32, days: &[DailyRecord]) -> Result<Self> {
        let first = days.first().ok_or(Error::EmptyYearSlice(year))?;
        let total = days.len() as f64;
        let hectares = first.hectares_simulated;

        Ok(AnnualSummary {
            year,
            label: crate::vintage::vintage_label(year),
            yield_kg_ha: first.yield_kg_ha,
            grape_sugar_level: first.grape_sugar_level,
            revenue_eur_ha: first.revenue_eur_ha,
            production_cost_eur_ha: first.production_cost_eur_ha,
            selling_price_eur_kg: first.selling_price_eur_kg,
            mean_temperature_c: days.iter().map(|d| d.temperature_c).sum::<f64>() / total,
            total_precipitation_mm: days.iter().map(|d| d.precipitation_mm).sum(),
            mean_solar_irradiance_w_m2: days.iter().map(|d| d.solar_irradiance_w_m2).sum::<f64>()
                / total,
            mean_humidity_percent: days.iter().map(|d| d.humidity_percent).sum::<f64>() / total,
            extreme_heat_days: days.iter().filter(|d| d.temperature_c > 35.0).count(),
            frost_days: days.iter().filter(|d| d.temperature_c < 5.0).count(),
            extreme_rain_days: days.iter().filter(|d| d.precipitation_mm > 20.0).count(),
            disease_risk_days: days
                .iter()
                .filter(|d| d.temperature_c > 25.0 && d.humidity_percent > 80.0)
                .count(),
            total_revenue_eur: first.revenue_eur_ha * hectares,
            total_cost_eur: first.production_cost_eur_ha * hectares,
        })
    }
}

/// Aggregate a date-sorted record table into one summary per calendar year.
///
/// A trailing year that stops short of December 31 is excluded: its climate
/// aggregates would describe only part of a season and distort the
/// year-over-year overview. All other years are kept even when they begin
/// mid-year, matching how the simulator's default range starts in August.
pub fn annual_summaries(records: &[DailyRecord]) -> Result<Vec<AnnualSummary>> {
    if records.is_empty() {
        return Err(Error::EmptyTable);
    }

    let mut summaries = Vec::new();
    let mut slice_start = 0;
    for i in 0..records.len() {
        let at_year_boundary =
            i + 1 == records.len() || records[i + 1].date.year() != records[i].date.year();
        if at_year_boundary {
            let days = &records[slice_start..=i];
            let year = days[0].date.year();
            summaries.push(AnnualSummary::from_year_slice(year, days)?);
            slice_start = i + 1;
        }
    }

    // drop a trailing partial year
    let last_date = records.last().unwrap().date;
    if (last_date.month(), last_date.day()) != (12, 31) {
        summaries.pop();
    }
    Ok(summaries)
}
