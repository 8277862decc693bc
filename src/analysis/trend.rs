use crate::types::exceedance::TrendLine;
use crate::types::matched_sample::MatchedSample;
use crate::types::variable::{Direction, WeatherVariable};
use statrs::distribution::{ContinuousCDF, StudentsT};
use std::collections::BTreeMap;

/// One calendar year's share of window observations beyond the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearlyFraction {
    pub year: i32,
    pub fraction: f64,
}

/// Collapses window samples into one exceedance fraction per calendar year.
///
/// Every sample counts toward its year's denominator. A missing value for
/// `variable` reads as non-exceeding rather than dropping the day, so a year
/// holding nothing but gaps still yields a 0.0 point. The result ascends by
/// year.
pub fn yearly_fractions(
    samples: &[MatchedSample],
    variable: WeatherVariable,
    threshold: f64,
    direction: Direction,
) -> Vec<YearlyFraction> {
    let mut tallies: BTreeMap<i32, (u32, u32)> = BTreeMap::new();
    for sample in samples {
        let exceeds = sample
            .record
            .value(variable)
            .map_or(false, |value| direction.exceeds(value, threshold));
        let (hits, total) = tallies.entry(sample.year).or_insert((0, 0));
        if exceeds {
            *hits += 1;
        }
        *total += 1;
    }
    tallies
        .into_iter()
        .map(|(year, (hits, total))| YearlyFraction {
            year,
            fraction: f64::from(hits) / f64::from(total),
        })
        .collect()
}

/// Ordinary least squares fit of fraction against year.
///
/// Needs two distinct years to produce a line at all. The two-sided p-value
/// for the slope comes from a t-test with `n - 2` degrees of freedom and is
/// absent below three points, where the test is undefined.
pub fn fit_trend(points: &[YearlyFraction]) -> Option<TrendLine> {
    if points.len() < 2 {
        return None;
    }
    let n = points.len() as f64;
    let mean_year = points.iter().map(|p| f64::from(p.year)).sum::<f64>() / n;
    let mean_fraction = points.iter().map(|p| p.fraction).sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    let mut syy = 0.0;
    for point in points {
        let dx = f64::from(point.year) - mean_year;
        let dy = point.fraction - mean_fraction;
        sxx += dx * dx;
        sxy += dx * dy;
        syy += dy * dy;
    }
    if sxx == 0.0 {
        // Every point in the same year; no slope to speak of.
        return None;
    }

    let slope = sxy / sxx;
    let intercept = mean_fraction - slope * mean_year;
    let r_value = if syy == 0.0 {
        0.0
    } else {
        sxy / (sxx * syy).sqrt()
    };

    Some(TrendLine {
        slope_per_year: slope,
        intercept,
        r_value,
        p_value: slope_p_value(r_value, points.len()),
    })
}

fn slope_p_value(r: f64, n: usize) -> Option<f64> {
    if n < 3 {
        return None;
    }
    let freedom = (n - 2) as f64;
    let residual = 1.0 - r * r;
    if residual <= f64::EPSILON {
        // A perfect fit; the t statistic diverges.
        return Some(0.0);
    }
    let t = r * (freedom / residual).sqrt();
    let dist = StudentsT::new(0.0, 1.0, freedom).ok()?;
    Some(2.0 * (1.0 - dist.cdf(t.abs())))
}
