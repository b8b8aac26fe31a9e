use chrono::naive::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used throughout the CSV schema: "YYYY-MM-DD"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The full column set of the flat CSV export, in header order. Downstream
/// consumers validate against this list before aggregating.
pub const REQUIRED_COLUMNS: [&str; 11] = [
    "date",
    "temperature_c",
    "precipitation_mm",
    "humidity_percent",
    "solar_irradiance_w_m2",
    "hectares_simulated",
    "yield_kg_ha",
    "grape_sugar_level",
    "production_cost_eur_ha",
    "selling_price_eur_kg",
    "revenue_eur_ha",
];

/// One day of generated climate, before any annual metrics are attached.
///
/// The generator emits these in ascending date order with no gaps; the
/// deriver reads per-year slices of them and never mutates them.
#[derive(Debug, Clone, PartialEq)]
pub struct ClimateDay {
    pub date: NaiveDate,
    pub temperature_c: f64,
    pub precipitation_mm: f64,
    pub humidity_percent: f64,
    pub solar_irradiance_w_m2: f64,
}

/// One fully-populated row of the output table: daily climate plus the
/// annual production and economic metrics of the row's calendar year.
///
/// The five annual fields carry the same value for every row sharing a
/// calendar year, and `hectares_simulated` is constant over the whole table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub temperature_c: f64,
    pub precipitation_mm: f64,
    pub humidity_percent: f64,
    pub solar_irradiance_w_m2: f64,
    pub hectares_simulated: f64,
    pub yield_kg_ha: f64,
    pub grape_sugar_level: f64,
    pub production_cost_eur_ha: f64,
    pub selling_price_eur_kg: f64,
    pub revenue_eur_ha: f64,
}
