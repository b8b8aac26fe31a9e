//! Procedural vineyard data simulator.
//!
//! The pipeline runs in two sequential stages: the climate generator
//! produces the dense daily series, then the annual deriver maps each
//! calendar year's slice to one [`annual::AnnualMetrics`] value. A final
//! merge broadcasts the annual figures across their year's days and attaches
//! the hectare constant, yielding the flat record table.
//!
//! All randomness flows from the seed in [`config::SimConfig`]. Per-year
//! draws come from a child RNG keyed on the calendar year, so each year's
//! metrics are independent of derivation order.

pub mod annual;
pub mod bounds;
pub mod climate;
pub mod config;

use annual::AnnualMetrics;
use config::SimConfig;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use vinsim_core::error::Result;
use vinsim_core::record::{ClimateDay, DailyRecord};

/// Child RNG for one calendar year's annual draws, derived from the master
/// seed the same way regardless of how many years precede it.
fn year_rng(seed: u64, year: i32) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed.wrapping_add((year as u64).wrapping_mul(31)))
}

/// Run the full pipeline: validate, generate daily climate, derive annual
/// metrics per calendar year, and merge into the output table.
pub fn run_simulation(config: &SimConfig) -> Result<Vec<DailyRecord>> {
    config.validate()?;
    let range = config.date_range()?;

    log::info!(
        "Generating daily climate for {} days ({} to {}), seed {}",
        range.num_days(),
        config.start_date,
        config.end_date,
        config.seed
    );
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let climate = climate::generate_daily_climate(range, &mut rng);

    let mut records = Vec::with_capacity(climate.len());
    for (year, days) in year_slices(&climate) {
        let mut rng = year_rng(config.seed, year);
        let metrics = annual::derive_annual_metrics(year, days, &mut rng)?;
        log::info!(
            "Year {year}: yield {:.0} kg/ha, sugar {:.2}, price {:.2} EUR/kg, revenue {:.0} EUR/ha",
            metrics.yield_kg_ha,
            metrics.grape_sugar_level,
            metrics.selling_price_eur_kg,
            metrics.revenue_eur_ha
        );
        for day in days {
            records.push(merge_day(day, config.hectares, &metrics));
        }
    }
    Ok(records)
}

/// Split the date-sorted climate series into contiguous per-year slices.
fn year_slices(climate: &[ClimateDay]) -> Vec<(i32, &[ClimateDay])> {
    use chrono::Datelike;

    let mut slices = Vec::new();
    let mut start = 0;
    for i in 0..climate.len() {
        let at_boundary =
            i + 1 == climate.len() || climate[i + 1].date.year() != climate[i].date.year();
        if at_boundary {
            slices.push((climate[start].date.year(), &climate[start..=i]));
            start = i + 1;
        }
    }
    slices
}

/// Build one output row from a climate day, the hectare constant, and its
/// year's metrics.
fn merge_day(day: &ClimateDay, hectares: f64, metrics: &AnnualMetrics) -> DailyRecord {
    DailyRecord {
        date: day.date,
        temperature_c: day.temperature_c,
        precipitation_mm: day.precipitation_mm,
        humidity_percent: day.humidity_percent,
        solar_irradiance_w_m2: day.solar_irradiance_w_m2,
        hectares_simulated: hectares,
        yield_kg_ha: metrics.yield_kg_ha,
        grape_sugar_level: metrics.grape_sugar_level,
        production_cost_eur_ha: metrics.production_cost_eur_ha,
        selling_price_eur_kg: metrics.selling_price_eur_kg,
        revenue_eur_ha: metrics.revenue_eur_ha,
    }
}

#[cfg(test)]
mod tests {
    use super::{run_simulation, year_slices};
    use crate::config::SimConfig;
    use chrono::{Datelike, NaiveDate};
    use std::collections::BTreeMap;

    fn config(start: (i32, u32, u32), end: (i32, u32, u32), hectares: f64, seed: u64) -> SimConfig {
        SimConfig {
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
            hectares,
            seed,
        }
    }

    #[test]
    fn test_week_long_run() {
        let records = run_simulation(&config((2020, 1, 1), (2020, 1, 7), 100.0, 17)).unwrap();
        assert_eq!(records.len(), 7);
        let first = &records[0];
        for record in &records {
            assert_eq!(record.hectares_simulated, 100.0);
            assert_eq!(record.yield_kg_ha, first.yield_kg_ha);
            assert_eq!(record.grape_sugar_level, first.grape_sugar_level);
            assert_eq!(record.production_cost_eur_ha, first.production_cost_eur_ha);
            assert_eq!(record.selling_price_eur_kg, first.selling_price_eur_kg);
            assert_eq!(record.revenue_eur_ha, first.revenue_eur_ha);
        }
    }

    #[test]
    fn test_annual_fields_constant_within_each_year() {
        let records = run_simulation(&config((2015, 8, 1), (2018, 9, 30), 600.0, 4)).unwrap();
        let mut by_year: BTreeMap<i32, Vec<&_>> = BTreeMap::new();
        for record in &records {
            by_year.entry(record.date.year()).or_default().push(record);
        }
        assert_eq!(by_year.len(), 4);
        for days in by_year.values() {
            let first = days[0];
            for day in days {
                assert_eq!(day.yield_kg_ha, first.yield_kg_ha);
                assert_eq!(day.grape_sugar_level, first.grape_sugar_level);
                assert_eq!(day.production_cost_eur_ha, first.production_cost_eur_ha);
                assert_eq!(day.selling_price_eur_kg, first.selling_price_eur_kg);
                assert_eq!(day.revenue_eur_ha, first.revenue_eur_ha);
            }
        }
    }

    #[test]
    fn test_full_pipeline_determinism() {
        let cfg = config((2015, 8, 1), (2020, 9, 30), 600.0, 123);
        let a = run_simulation(&cfg).unwrap();
        let b = run_simulation(&cfg).unwrap();
        assert_eq!(a, b);

        let different_seed = run_simulation(&config((2015, 8, 1), (2020, 9, 30), 600.0, 124));
        assert_ne!(a, different_seed.unwrap());
    }

    #[test]
    fn test_row_count_and_density() {
        let records = run_simulation(&config((2019, 12, 25), (2021, 1, 5), 50.0, 8)).unwrap();
        assert_eq!(records.len(), 7 + 366 + 5);
        for pair in records.windows(2) {
            assert_eq!((pair[1].date - pair[0].date).num_days(), 1);
        }
    }

    #[test]
    fn test_simulated_table_round_trips_and_summarizes() {
        let cfg = config((2015, 8, 1), (2018, 12, 31), 600.0, 21);
        let records = run_simulation(&cfg).unwrap();

        let mut buffer = Vec::new();
        vinsim_core::csv_io::write_records(&mut buffer, &records).unwrap();
        let read_back = vinsim_core::csv_io::read_records(buffer.as_slice()).unwrap();
        assert_eq!(read_back, records);

        let summaries = vinsim_core::summary::annual_summaries(&read_back).unwrap();
        assert_eq!(
            summaries.iter().map(|s| s.year).collect::<Vec<_>>(),
            vec![2015, 2016, 2017, 2018]
        );
        for s in &summaries {
            assert!((8000.0..=15000.0).contains(&s.yield_kg_ha));
            assert!((15.0..=19.5).contains(&s.grape_sugar_level));
            assert!((3.5..=6.0).contains(&s.selling_price_eur_kg));
            assert!(s.production_cost_eur_ha >= 8000.0);
        }
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        assert!(run_simulation(&config((2020, 1, 2), (2020, 1, 1), 100.0, 0)).is_err());
        assert!(run_simulation(&config((2020, 1, 1), (2020, 1, 2), 0.0, 0)).is_err());
    }

    #[test]
    fn test_year_slices_are_contiguous() {
        use rand::SeedableRng;
        let cfg = config((2019, 6, 1), (2021, 6, 1), 10.0, 2);
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(cfg.seed);
        let climate =
            crate::climate::generate_daily_climate(cfg.date_range().unwrap(), &mut rng);
        let slices = year_slices(&climate);
        assert_eq!(
            slices.iter().map(|(y, _)| *y).collect::<Vec<_>>(),
            vec![2019, 2020, 2021]
        );
        let total: usize = slices.iter().map(|(_, s)| s.len()).sum();
        assert_eq!(total, climate.len());
    }
}
