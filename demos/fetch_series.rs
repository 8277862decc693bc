use chrono::NaiveDate;
use powerday::{LatLon, Powerday, PowerdayError};

#[tokio::main]
async fn main() -> Result<(), PowerdayError> {
    let client = Powerday::new()?;

    let series = client
        .fetch_series()
        .location(LatLon(52.5200, 13.4050))
        .start(NaiveDate::from_ymd_opt(2003, 8, 1).unwrap())
        .end(NaiveDate::from_ymd_opt(2003, 8, 31).unwrap())
        .call()
        .await?;

    println!("Fetched {} records for Berlin, August 2003:", series.len());
    for record in &series {
        println!(
            "{}  Tmax {}  precip {}",
            record.date_key,
            record
                .max_temperature_c
                .map(|t| format!("{:5.1} °C", t))
                .unwrap_or_else(|| "  n/a".to_string()),
            record
                .precipitation_mm
                .map(|p| format!("{:4.1} mm", p))
                .unwrap_or_else(|| " n/a".to_string()),
        );
    }

    let hottest = series
        .records()
        .iter()
        .filter_map(|r| r.max_temperature_c.map(|t| (r.date_key, t)))
        .max_by(|a, b| a.1.total_cmp(&b.1));
    if let Some((date_key, tmax)) = hottest {
        println!("\nHottest day: {} at {:.1} °C", date_key, tmax);
    }

    let august_days = series
        .records()
        .iter()
        .filter(|r| !r.is_all_absent())
        .count();
    println!("Days with at least one measurement: {}", august_days);
    Ok(())
}
