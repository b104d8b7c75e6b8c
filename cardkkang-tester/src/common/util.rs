use chrono::{Days, NaiveDate};

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Deterministic calendar date for a seed, spread over a leap year and its successor.
pub fn date_for_seed(seed: u64) -> NaiveDate {
    let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    base.checked_add_days(Days::new(seed % 731)).unwrap_or(base)
}
