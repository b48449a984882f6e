//! Illustrative "historical comparison" shown next to a prediction.
//!
//! Nothing here comes from the service. The figures are the predicted yield with
//! a seeded jitter applied per year, so they are stable for a given request but
//! carry no information. Callers must label them as illustrative; replace this
//! module once the service exposes real historical yields.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::request::AnalysisRequest;

/// Number of years shown before the requested year.
pub const HISTORY_YEARS: i32 = 5;
/// Largest relative deviation from the predicted yield.
pub const MAX_JITTER: f64 = 0.10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoricalPoint {
    pub year: i32,
    pub yield_kg_per_ha: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IllustrativeHistory {
    /// Oldest first.
    pub points: Vec<HistoricalPoint>,
    pub five_year_average: f64,
    pub best_year: HistoricalPoint,
    /// Change from the first to the last point, in percent.
    pub growth_rate_percent: f64,
}

pub fn illustrative_history(request: &AnalysisRequest, predicted_yield: f64) -> Option<IllustrativeHistory> {
    if !predicted_yield.is_finite() || predicted_yield <= 0.0 {
        return None;
    }

    let mut rng = StdRng::seed_from_u64(seed_for(request));
    let points: Vec<HistoricalPoint> = (request.year - HISTORY_YEARS..request.year)
        .map(|year| HistoricalPoint {
            year,
            yield_kg_per_ha: predicted_yield * (1.0 + rng.gen_range(-MAX_JITTER..=MAX_JITTER)),
        })
        .collect();

    let five_year_average =
        points.iter().map(|p| p.yield_kg_per_ha).sum::<f64>() / points.len() as f64;
    let best_year = *points
        .iter()
        .max_by(|a, b| a.yield_kg_per_ha.total_cmp(&b.yield_kg_per_ha))?;
    let first = points.first()?.yield_kg_per_ha;
    let last = points.last()?.yield_kg_per_ha;
    let growth_rate_percent = (last - first) / first * 100.0;

    tracing::trace!(
        "Generated illustrative history for {} / {} / {}",
        request.state,
        request.crop,
        request.year
    );

    Some(IllustrativeHistory {
        points,
        five_year_average,
        best_year,
        growth_rate_percent,
    })
}

fn seed_for(request: &AnalysisRequest) -> u64 {
    let mut hasher = DefaultHasher::new();
    request.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(year: i32) -> AnalysisRequest {
        AnalysisRequest {
            state: "Punjab".to_string(),
            crop: "Wheat".to_string(),
            year,
        }
    }

    #[test]
    fn test_covers_the_five_preceding_years() {
        let history = illustrative_history(&request(2020), 4000.0).unwrap();
        let years: Vec<i32> = history.points.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2015, 2016, 2017, 2018, 2019]);
    }

    #[test]
    fn test_jitter_is_bounded() {
        let history = illustrative_history(&request(2020), 4000.0).unwrap();
        for point in &history.points {
            assert!(point.yield_kg_per_ha >= 4000.0 * (1.0 - MAX_JITTER) - 1e-9);
            assert!(point.yield_kg_per_ha <= 4000.0 * (1.0 + MAX_JITTER) + 1e-9);
        }
    }

    #[test]
    fn test_stable_for_the_same_request() {
        let a = illustrative_history(&request(2020), 4000.0).unwrap();
        let b = illustrative_history(&request(2020), 4000.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_derived_statistics() {
        let history = illustrative_history(&request(2010), 3000.0).unwrap();
        let sum: f64 = history.points.iter().map(|p| p.yield_kg_per_ha).sum();
        assert!((history.five_year_average - sum / 5.0).abs() < 1e-9);

        assert!(history
            .points
            .iter()
            .all(|p| p.yield_kg_per_ha <= history.best_year.yield_kg_per_ha));

        let first = history.points[0].yield_kg_per_ha;
        let last = history.points[4].yield_kg_per_ha;
        assert!((history.growth_rate_percent - (last - first) / first * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_history_without_a_usable_yield() {
        assert!(illustrative_history(&request(2020), 0.0).is_none());
        assert!(illustrative_history(&request(2020), -5.0).is_none());
        assert!(illustrative_history(&request(2020), f64::NAN).is_none());
    }
}
