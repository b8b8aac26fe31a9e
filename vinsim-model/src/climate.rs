//! Daily climate generation.
//!
//! Each variable follows a seasonal sinusoid of the day of year plus random
//! perturbation, with a light coupling pass at the end so the variables are
//! not fully independent. Peaks are phase-shifted to line up with a northern
//! Italian growing season: temperature crests in midsummer, irradiance a
//! month earlier, rain probability in late spring.

use crate::bounds;
use rand::Rng;
use rand_distr::{Distribution, Exp, Normal};
use std::f64::consts::PI;
use vinsim_core::date_range::DateRange;
use vinsim_core::record::ClimateDay;

/// Annual mean temperature the seasonal curve oscillates around.
const AVG_ANNUAL_TEMP_C: f64 = 12.0;
/// Temperature sinusoid: amplitude, day-of-year phase shift, vertical offset.
const TEMP_AMPLITUDE: f64 = 10.0;
const TEMP_PHASE_DAYS: f64 = 110.0;
const TEMP_OFFSET: f64 = 3.0;
/// Std dev of daily temperature noise before smoothing.
const TEMP_NOISE_SIGMA: f64 = 3.0;
/// Centered moving-average window for the temperature noise.
const TEMP_SMOOTHING_WINDOW: usize = 7;

/// Rain probability sinusoid: base, amplitude, phase shift.
const RAIN_PROB_BASE: f64 = 0.25;
const RAIN_PROB_AMPLITUDE: f64 = 0.2;
const RAIN_PHASE_DAYS: f64 = 60.0;
/// Mean rainfall on a rainy day (exponential magnitude).
const RAIN_MEAN_MM: f64 = 7.0;

/// Humidity distribution parameters.
const HUMIDITY_MEAN: f64 = 75.0;
const HUMIDITY_SIGMA: f64 = 12.0;

/// Irradiance sinusoid and noise parameters.
const IRRADIANCE_BASE: f64 = 180.0;
const IRRADIANCE_AMPLITUDE: f64 = 150.0;
const IRRADIANCE_PHASE_DAYS: f64 = 80.0;
const IRRADIANCE_NOISE_SIGMA: f64 = 40.0;

/// Coupling coefficients: solar heating of air, drying effect of warm air.
const SOLAR_HEATING_FACTOR: f64 = 0.005;
const TEMP_DRYING_FACTOR: f64 = 0.5;

/// Seasonal sine component for a given day of year and phase shift.
fn seasonal(day_of_year: f64, phase_days: f64) -> f64 {
    (2.0 * PI * (day_of_year - phase_days) / 365.0).sin()
}

/// Centered moving average that degrades gracefully at the edges: each
/// position averages whatever neighbors exist inside the window, so a
/// series of any length (even one element) produces valid output.
pub fn centered_moving_average(values: &[f64], window: usize) -> Vec<f64> {
    let half = window / 2;
    (0..values.len())
        .map(|i| {
            let lo = i.saturating_sub(half);
            let hi = (i + half).min(values.len() - 1);
            let slice = &values[lo..=hi];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect()
}

/// Generate one [`ClimateDay`] per calendar day in the range, in ascending
/// date order with no gaps.
pub fn generate_daily_climate(range: DateRange, rng: &mut impl Rng) -> Vec<ClimateDay> {
    use chrono::Datelike;

    let dates: Vec<_> = range.collect();
    let num_days = dates.len();

    let temp_noise = Normal::new(0.0, TEMP_NOISE_SIGMA).unwrap();
    let rain_magnitude = Exp::new(1.0 / RAIN_MEAN_MM).unwrap();
    let humidity_dist = Normal::new(HUMIDITY_MEAN, HUMIDITY_SIGMA).unwrap();
    let irradiance_noise = Normal::new(0.0, IRRADIANCE_NOISE_SIGMA).unwrap();

    // Raw daily noise is smoothed over a week so the temperature series
    // avoids unrealistic day-to-day jumps.
    let mut raw_noise = Vec::with_capacity(num_days);
    for _ in 0..num_days {
        raw_noise.push(temp_noise.sample(rng));
    }
    let smoothed_noise = centered_moving_average(&raw_noise, TEMP_SMOOTHING_WINDOW);

    let mut days = Vec::with_capacity(num_days);
    for (i, date) in dates.into_iter().enumerate() {
        let day_of_year = date.ordinal() as f64;

        let mut temperature_c = AVG_ANNUAL_TEMP_C
            + TEMP_AMPLITUDE * seasonal(day_of_year, TEMP_PHASE_DAYS)
            + TEMP_OFFSET
            + smoothed_noise[i];

        let rain_prob = RAIN_PROB_BASE + RAIN_PROB_AMPLITUDE * seasonal(day_of_year, RAIN_PHASE_DAYS);
        let precipitation_mm = if rng.random::<f64>() < rain_prob {
            rain_magnitude.sample(rng)
        } else {
            0.0
        };

        let mut humidity_percent = bounds::HUMIDITY_PERCENT.apply(humidity_dist.sample(rng));

        let solar_irradiance_w_m2 = bounds::SOLAR_IRRADIANCE_W_M2.apply(
            IRRADIANCE_BASE
                + IRRADIANCE_AMPLITUDE * seasonal(day_of_year, IRRADIANCE_PHASE_DAYS)
                + irradiance_noise.sample(rng),
        );

        // Coupling pass, in order: irradiance warms the air, then the
        // warmer air lowers relative humidity.
        temperature_c += solar_irradiance_w_m2 * SOLAR_HEATING_FACTOR;
        humidity_percent =
            bounds::HUMIDITY_PERCENT.apply(humidity_percent - temperature_c * TEMP_DRYING_FACTOR);

        days.push(ClimateDay {
            date,
            temperature_c,
            precipitation_mm,
            humidity_percent,
            solar_irradiance_w_m2,
        });
    }
    days
}
