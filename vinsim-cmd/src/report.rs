//! The `summary` and `vintage` subcommands: read a simulated CSV back and
//! print aggregated views of it, either human-readable or as JSON.

use anyhow::Context;
use vinsim_core::csv_io;
use vinsim_core::summary::{annual_summaries, AnnualSummary};
use vinsim_core::vintage::{Vintage, VintageReport};

/// Print one overview row per complete calendar year in the table.
pub fn run_summary(input: &str, json: bool) -> anyhow::Result<()> {
    let records = csv_io::read_records_from_path(input)
        .with_context(|| format!("failed to read {input}"))?;
    let summaries = annual_summaries(&records)?;

    if json {
        for summary in &summaries {
            println!("{}", serde_json::to_string(summary)?);
        }
        return Ok(());
    }

    println!(
        "{:<10} {:>12} {:>8} {:>14} {:>12} {:>11} {:>11} {:>9} {:>7} {:>7} {:>9}",
        "annata",
        "yield kg/ha",
        "sugar",
        "revenue EUR",
        "cost EUR",
        "temp C avg",
        "precip mm",
        "irr W/m2",
        "heat d",
        "frost d",
        "disease d"
    );
    for s in &summaries {
        print_summary_row(s);
    }
    Ok(())
}

fn print_summary_row(s: &AnnualSummary) {
    println!(
        "{:<10} {:>12.0} {:>8.2} {:>14.0} {:>12.0} {:>11.1} {:>11.0} {:>9.0} {:>7} {:>7} {:>9}",
        s.label,
        s.yield_kg_ha,
        s.grape_sugar_level,
        s.total_revenue_eur,
        s.total_cost_eur,
        s.mean_temperature_c,
        s.total_precipitation_mm,
        s.mean_solar_irradiance_w_m2,
        s.extreme_heat_days,
        s.frost_days,
        s.disease_risk_days
    );
}

/// Print the detail KPIs for one vintage window.
pub fn run_vintage(input: &str, year: i32, json: bool) -> anyhow::Result<()> {
    let records = csv_io::read_records_from_path(input)
        .with_context(|| format!("failed to read {input}"))?;
    let vintage = Vintage::from_records(&records, year).with_context(|| {
        let years = Vintage::available_years(&records);
        match (years.first(), years.last()) {
            (Some(first), Some(last)) => format!("available vintages: {first}..{last}"),
            _ => "table contains no vintages".to_string(),
        }
    })?;
    let report = VintageReport::from(&vintage);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Vintage {} ({} ha simulated)", report.label, report.hectares_simulated);
    println!("  yield:           {:>10.2} kg/ha", report.yield_kg_ha);
    println!("  sugar level:     {:>10.2}", report.grape_sugar_level);
    println!("  total revenue:   {:>10.0} EUR", report.total_revenue_eur);
    println!("  total cost:      {:>10.0} EUR", report.total_cost_eur);
    println!("  extreme heat:    {:>10} days (> 35 C)", report.extreme_heat_days);
    println!("  frost:           {:>10} days (< 5 C)", report.frost_days);
    println!("  torrential rain: {:>10} days (> 20 mm)", report.extreme_rain_days);
    println!("  disease risk:    {:>10} days", report.disease_risk_days);
    println!("  precipitation:   {:>10.1} mm total", report.total_precipitation_mm);
    println!("  humidity:        {:>10.1} % mean", report.mean_humidity_percent);
    println!(
        "  rainy/dry days:  {:>10}",
        format!("{}/{}", report.rainy_days, report.dry_days)
    );
    Ok(())
}
