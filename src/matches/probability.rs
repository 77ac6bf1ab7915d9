use super::types::SeriesFormat;

/// Best-of-3 win probability for a game probability `p`
pub fn best_of_3(p: f64) -> f64 {
    3.0 * p * p * (1.0 - p) + p.powi(3)
}

/// Best-of-5 win probability for a game probability `p`
pub fn best_of_5(p: f64) -> f64 {
    let q = 1.0 - p;
    10.0 * p.powi(3) * q.powi(2) + 5.0 * p.powi(4) * q + p.powi(5)
}

pub fn series_win_probability(format: SeriesFormat, p: f64) -> f64 {
    match format {
        SeriesFormat::BestOf1 => p,
        SeriesFormat::BestOf3 => best_of_3(p),
        SeriesFormat::BestOf5 => best_of_5(p),
    }
}
