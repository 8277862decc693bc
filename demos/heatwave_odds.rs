use powerday::{Direction, LatLon, MonthDay, Powerday, PowerdayError, WeatherVariable};

#[tokio::main]
async fn main() -> Result<(), PowerdayError> {
    let client = Powerday::new()?;

    // How often has mid-July Paris topped 35 °C since 1990?
    let report = client
        .exceedance()
        .location(LatLon(48.8566, 2.3522))
        .variable(WeatherVariable::MaxTemperature)
        .threshold(35.0)
        .direction(Direction::Above)
        .month_day(MonthDay::new(7, 15).unwrap())
        .window_days(3)
        .call()
        .await?;

    println!(
        "P(Tmax > {} {}) = {:.3}  ({} of {} observations)",
        report.threshold,
        report.variable.unit(),
        report.probability,
        report.k,
        report.n,
    );

    if let Some(interval) = report.wilson95 {
        println!("95% interval: [{:.3}, {:.3}]", interval.lower, interval.upper);
    }
    if let Some(stats) = &report.stats {
        println!(
            "Observed Tmax: mean {:.1}, median {:.1}, p90 {:.1}",
            stats.mean,
            stats.median,
            stats.percentiles[&90],
        );
    }
    if let Some(trend) = report.trend {
        println!(
            "Yearly trend: {:+.4}/year (r = {:.2}, p = {})",
            trend.slope_per_year,
            trend.r_value,
            trend
                .p_value
                .map(|p| format!("{:.3}", p))
                .unwrap_or_else(|| "n/a".to_string()),
        );
    }
    Ok(())
}
