//! Annual production and economic metrics.
//!
//! Each calendar year maps to one immutable [`AnnualMetrics`] value computed
//! from that year's climate slice plus independent random draws. Years carry
//! no memory of each other: there is no year-to-year autocorrelation in the
//! annual model, a deliberate simplification since no historical continuity
//! is modeled.

use crate::bounds;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use vinsim_core::error::{Error, Result};
use vinsim_core::record::ClimateDay;

/// Yield baseline draw: Normal(mean, sigma) kg/ha.
const BASE_YIELD_MEAN: f64 = 12000.0;
const BASE_YIELD_SIGMA: f64 = 800.0;
/// Irradiance effect on yield: kg/ha per W/m² above the reference mean.
const SOLAR_REFERENCE_W_M2: f64 = 200.0;
const SOLAR_YIELD_FACTOR: f64 = 15.0;

/// Penalty weights, in kg/ha per unit day-ratio.
const EXTREME_TEMP_WEIGHT: f64 = 4000.0;
const DISEASE_RISK_WEIGHT: f64 = 3500.0;
const EXTREME_RAIN_WEIGHT: f64 = 3000.0;

/// Sugar baseline draw and climate contributions.
const BASE_SUGAR_MEAN: f64 = 17.0;
const BASE_SUGAR_SIGMA: f64 = 0.5;
const SUGAR_IRRADIANCE_DIVISOR: f64 = 200.0;
const SUGAR_TEMPERATURE_DIVISOR: f64 = 20.0;

/// Cost baseline draw.
const BASE_COST_MEAN: f64 = 10000.0;
const BASE_COST_SIGMA: f64 = 1000.0;

/// Price baseline draw and quality adjustment.
const BASE_PRICE_MEAN: f64 = 4.0;
const BASE_PRICE_SIGMA: f64 = 0.8;
const QUALITY_REFERENCE_SUGAR: f64 = 17.5;
const QUALITY_PRICE_FACTOR: f64 = 0.5;

/// Event thresholds for the yield penalties.
const EXTREME_HEAT_C: f64 = 35.0;
const FROST_C: f64 = 5.0;
const DISEASE_TEMP_C: f64 = 25.0;
const DISEASE_HUMIDITY_PERCENT: f64 = 80.0;
const EXTREME_RAIN_MM: f64 = 20.0;

/// The five annual metrics derived for one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnualMetrics {
    pub year: i32,
    pub yield_kg_ha: f64,
    pub grape_sugar_level: f64,
    pub production_cost_eur_ha: f64,
    pub selling_price_eur_kg: f64,
    pub revenue_eur_ha: f64,
}

/// Yield penalties for one year's climate, broken out per cause.
///
/// Each component is the fraction of days matching its condition times a
/// fixed weight, so a year with no matching days contributes exactly zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenaltyBreakdown {
    pub extreme_temp: f64,
    pub disease_risk: f64,
    pub extreme_rain: f64,
}

impl PenaltyBreakdown {
    pub fn total(&self) -> f64 {
        self.extreme_temp + self.disease_risk + self.extreme_rain
    }
}

/// Compute the yield penalty breakdown over a year's climate days.
///
/// The disease-risk day here additionally requires rainfall (t > 25,
/// h > 80, p > 0), unlike the hot-and-humid definition the overview
/// reports use. The divergence is intentional.
pub fn penalty_breakdown(days: &[ClimateDay]) -> PenaltyBreakdown {
    let total_days = days.len() as f64;
    let ratio = |count: usize| count as f64 / total_days;

    let extreme_temp_days = days
        .iter()
        .filter(|d| d.temperature_c > EXTREME_HEAT_C || d.temperature_c < FROST_C)
        .count();
    let disease_risk_days = days
        .iter()
        .filter(|d| {
            d.temperature_c > DISEASE_TEMP_C
                && d.humidity_percent > DISEASE_HUMIDITY_PERCENT
                && d.precipitation_mm > 0.0
        })
        .count();
    let extreme_rain_days = days
        .iter()
        .filter(|d| d.precipitation_mm > EXTREME_RAIN_MM)
        .count();

    PenaltyBreakdown {
        extreme_temp: ratio(extreme_temp_days) * EXTREME_TEMP_WEIGHT,
        disease_risk: ratio(disease_risk_days) * DISEASE_RISK_WEIGHT,
        extreme_rain: ratio(extreme_rain_days) * EXTREME_RAIN_WEIGHT,
    }
}

/// Derive one year's metrics from its climate slice.
///
/// Pure in everything but the passed RNG; the caller decides how RNG state
/// is partitioned between years. An empty slice is rejected to keep the
/// day-ratio arithmetic well-defined (callers building partial tables must
/// guard against it; the full pipeline never produces one).
pub fn derive_annual_metrics(
    year: i32,
    days: &[ClimateDay],
    rng: &mut impl Rng,
) -> Result<AnnualMetrics> {
    if days.is_empty() {
        return Err(Error::EmptyYearSlice(year));
    }
    let total_days = days.len() as f64;
    let mean_irradiance = days.iter().map(|d| d.solar_irradiance_w_m2).sum::<f64>() / total_days;
    let mean_temperature = days.iter().map(|d| d.temperature_c).sum::<f64>() / total_days;

    let base_yield = Normal::new(BASE_YIELD_MEAN, BASE_YIELD_SIGMA)
        .unwrap()
        .sample(rng);
    let solar_effect = (mean_irradiance - SOLAR_REFERENCE_W_M2) * SOLAR_YIELD_FACTOR;
    let penalties = penalty_breakdown(days);
    let yield_kg_ha =
        bounds::YIELD_KG_HA.apply(base_yield + solar_effect - penalties.total());

    let base_sugar = Normal::new(BASE_SUGAR_MEAN, BASE_SUGAR_SIGMA)
        .unwrap()
        .sample(rng);
    let grape_sugar_level = bounds::GRAPE_SUGAR_LEVEL.apply(
        base_sugar
            + mean_irradiance / SUGAR_IRRADIANCE_DIVISOR
            + mean_temperature / SUGAR_TEMPERATURE_DIVISOR,
    );

    let base_cost = Normal::new(BASE_COST_MEAN, BASE_COST_SIGMA)
        .unwrap()
        .sample(rng);
    let production_cost_eur_ha = bounds::PRODUCTION_COST_EUR_HA.apply(base_cost);

    let base_price = Normal::new(BASE_PRICE_MEAN, BASE_PRICE_SIGMA)
        .unwrap()
        .sample(rng);
    let quality_effect = (grape_sugar_level - QUALITY_REFERENCE_SUGAR) * QUALITY_PRICE_FACTOR;
    let selling_price_eur_kg = bounds::SELLING_PRICE_EUR_KG.apply(base_price + quality_effect);

    // Revenue is the one derived figure left unclamped.
    let revenue_eur_ha = yield_kg_ha * selling_price_eur_kg - production_cost_eur_ha;

    Ok(AnnualMetrics {
        year,
        yield_kg_ha,
        grape_sugar_level,
        production_cost_eur_ha,
        selling_price_eur_kg,
        revenue_eur_ha,
    })
}

#[cfg(test)]
mod tests {
    use super::{derive_annual_metrics, penalty_breakdown};
    use crate::bounds;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use vinsim_core::date_range::DateRange;
    use vinsim_core::record::ClimateDay;

    fn mild_year(year: i32) -> Vec<ClimateDay> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(year, 12, 31).unwrap();
        DateRange::new(start, end)
            .unwrap()
            .map(|date| ClimateDay {
                date,
                temperature_c: 15.0,
                precipitation_mm: 2.0,
                humidity_percent: 70.0,
                solar_irradiance_w_m2: 210.0,
            })
            .collect()
    }

    #[test]
    fn test_metrics_respect_bounds() {
        let days = mild_year(2020);
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let m = derive_annual_metrics(2020, &days, &mut rng).unwrap();
            assert!(bounds::YIELD_KG_HA.contains(m.yield_kg_ha));
            assert!(bounds::GRAPE_SUGAR_LEVEL.contains(m.grape_sugar_level));
            assert!(bounds::SELLING_PRICE_EUR_KG.contains(m.selling_price_eur_kg));
            assert!(m.production_cost_eur_ha >= 8000.0);
            let expected_revenue =
                m.yield_kg_ha * m.selling_price_eur_kg - m.production_cost_eur_ha;
            assert!((m.revenue_eur_ha - expected_revenue).abs() < 1e-9);
        }
    }

    #[test]
    fn test_no_extreme_rain_means_zero_penalty() {
        let mut days = mild_year(2021);
        // plenty of rain, none of it torrential
        for day in days.iter_mut() {
            day.precipitation_mm = 15.0;
        }
        let penalties = penalty_breakdown(&days);
        assert_eq!(penalties.extreme_rain, 0.0);
    }

    #[test]
    fn test_penalty_ratios() {
        let mut days = mild_year(2021);
        let n = days.len() as f64;
        days[0].temperature_c = 40.0; // extreme heat
        days[1].temperature_c = 1.0; // frost
        days[2].precipitation_mm = 30.0; // torrential
        days[3].temperature_c = 28.0; // hot + humid + wet = disease risk
        days[3].humidity_percent = 90.0;
        days[3].precipitation_mm = 1.0;
        // hot + humid but dry: not a disease-risk day for the penalty
        days[4].temperature_c = 28.0;
        days[4].humidity_percent = 90.0;
        days[4].precipitation_mm = 0.0;

        let penalties = penalty_breakdown(&days);
        assert!((penalties.extreme_temp - 2.0 / n * 4000.0).abs() < 1e-9);
        assert!((penalties.disease_risk - 1.0 / n * 3500.0).abs() < 1e-9);
        assert!((penalties.extreme_rain - 1.0 / n * 3000.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_year_slice_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(derive_annual_metrics(2020, &[], &mut rng).is_err());
    }

    #[test]
    fn test_determinism_under_seed() {
        let days = mild_year(2022);
        let mut rng_a = ChaCha8Rng::seed_from_u64(5);
        let mut rng_b = ChaCha8Rng::seed_from_u64(5);
        let a = derive_annual_metrics(2022, &days, &mut rng_a).unwrap();
        let b = derive_annual_metrics(2022, &days, &mut rng_b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sunnier_year_sweeter_grapes() {
        // identical draws, different climate: the climate contribution to
        // sugar is monotone in irradiance and temperature
        let cool = mild_year(2020);
        let mut sunny = mild_year(2020);
        for day in sunny.iter_mut() {
            day.solar_irradiance_w_m2 = 300.0;
            day.temperature_c = 20.0;
        }
        let mut rng_a = ChaCha8Rng::seed_from_u64(9);
        let mut rng_b = ChaCha8Rng::seed_from_u64(9);
        let m_cool = derive_annual_metrics(2020, &cool, &mut rng_a).unwrap();
        let m_sunny = derive_annual_metrics(2020, &sunny, &mut rng_b).unwrap();
        assert!(m_sunny.grape_sugar_level >= m_cool.grape_sugar_level);
    }
}
