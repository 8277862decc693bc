use chrono::NaiveDate;
use powerday::{LatLon, Powerday, PowerdayError};
use serde_json::to_string_pretty;

#[tokio::main]
async fn main() -> Result<(), PowerdayError> {
    let client = Powerday::new()?;
    let target = NaiveDate::from_ymd_opt(2026, 7, 4).unwrap();

    let result = client
        .analyze()
        .location(LatLon(31.5204, 74.3587))
        .label("Lahore, Pakistan".to_string())
        .date(target)
        .call()
        .await?;

    let json = to_string_pretty(&result).unwrap(); // Full handoff payload as JSON
    println!("{}", json);

    println!(
        "\n{}: sampled {} Julys; very hot {} times (p = {:.2})",
        result.location,
        result.years_sampled,
        result.counts.very_hot,
        result.probabilities.very_hot,
    );
    Ok(())
}
