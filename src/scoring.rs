//! Additive multi-criteria score used by the "recommend me a university"
//! ranking. Pure function of a population snapshot: every feature except
//! the review rating is min-max normalized against the full filtered
//! candidate set, then combined as a weighted sum.

use crate::models::University;

pub const WEIGHT_AVERAGE_RATING: f64 = 0.35;
pub const WEIGHT_TOTAL_APPLICATIONS: f64 = 0.25;
pub const WEIGHT_APPLICATIONS_LAST_30_DAYS: f64 = 0.25;
pub const WEIGHT_DAYS_SINCE_LAST_APPLICATION: f64 = 0.15;

/// Ratings always live on the review scale, independent of the population.
const RATING_RANGE: FeatureRange = FeatureRange { min: 0.0, max: 5.0 };

#[derive(Debug, Clone, Copy)]
struct FeatureRange {
    min: f64,
    max: f64,
}

impl FeatureRange {
    fn from_values(values: impl Iterator<Item = f64>) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut seen = false;

        for v in values.filter(|v| v.is_finite()) {
            min = min.min(v);
            max = max.max(v);
            seen = true;
        }

        if seen {
            Self { min, max }
        } else {
            Self { min: 0.0, max: 1.0 }
        }
    }

    /// Linear map to [0, 1]. A degenerate range (all population values
    /// equal) yields the neutral 0.5 instead of dividing by zero.
    fn normalize(&self, value: f64) -> f64 {
        if self.max == self.min {
            return 0.5;
        }
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy)]
struct PopulationRanges {
    total_applications: FeatureRange,
    recent_applications: FeatureRange,
    days_since_last: FeatureRange,
}

impl PopulationRanges {
    fn from_population(population: &[University]) -> Self {
        Self {
            total_applications: FeatureRange::from_values(
                population.iter().map(|u| u.total_applications as f64),
            ),
            recent_applications: FeatureRange::from_values(
                population.iter().map(|u| u.applications_last_30_days as f64),
            ),
            // universities that never received an application carry no
            // recency signal and are excluded from the range
            days_since_last: FeatureRange::from_values(
                population
                    .iter()
                    .filter_map(|u| u.days_since_last_application)
                    .map(|d| d as f64),
            ),
        }
    }
}

/// Compute the additive criterion for one university against the full
/// filtered population. Returns 0 for an empty population; otherwise the
/// result is in [0, 1] and rounded to four decimal places.
pub fn additive_criterion(stats: &University, population: &[University]) -> f64 {
    if population.is_empty() {
        return 0.0;
    }

    let ranges = PopulationRanges::from_population(population);

    let rating = RATING_RANGE.normalize(stats.average_rating);
    let total = ranges
        .total_applications
        .normalize(stats.total_applications as f64);
    let recent = ranges
        .recent_applications
        .normalize(stats.applications_last_30_days as f64);

    // Fewer days since the last application is better, so this term is
    // inverted. No application at all is treated as the neutral 0.5.
    let days_norm = stats
        .days_since_last_application
        .map(|d| ranges.days_since_last.normalize(d as f64))
        .unwrap_or(0.5);
    let freshness = 1.0 - days_norm;

    let score = rating * WEIGHT_AVERAGE_RATING
        + total * WEIGHT_TOTAL_APPLICATIONS
        + recent * WEIGHT_APPLICATIONS_LAST_30_DAYS
        + freshness * WEIGHT_DAYS_SINCE_LAST_APPLICATION;

    round4(score)
}

/// Fill in `additive_criterion` for every university on the page, using
/// `population` (the full filtered result set) for normalization.
pub fn attach_additive_criterion(page: &mut [University], population: &[University]) {
    for uni in page.iter_mut() {
        uni.additive_criterion = Some(additive_criterion(uni, population));
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_is_linear_and_clamped() {
        let range = FeatureRange { min: 10.0, max: 20.0 };
        assert_eq!(range.normalize(10.0), 0.0);
        assert_eq!(range.normalize(15.0), 0.5);
        assert_eq!(range.normalize(20.0), 1.0);
        assert_eq!(range.normalize(5.0), 0.0);
        assert_eq!(range.normalize(25.0), 1.0);
    }

    #[test]
    fn degenerate_range_yields_neutral_value() {
        let range = FeatureRange { min: 7.0, max: 7.0 };
        assert_eq!(range.normalize(7.0), 0.5);
        assert_eq!(range.normalize(100.0), 0.5);
    }

    #[test]
    fn empty_value_set_falls_back_to_unit_range() {
        let range = FeatureRange::from_values(std::iter::empty());
        assert_eq!(range.min, 0.0);
        assert_eq!(range.max, 1.0);
    }

    #[test]
    fn weights_sum_to_one() {
        let sum = WEIGHT_AVERAGE_RATING
            + WEIGHT_TOTAL_APPLICATIONS
            + WEIGHT_APPLICATIONS_LAST_30_DAYS
            + WEIGHT_DAYS_SINCE_LAST_APPLICATION;
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn round4_truncates_to_four_places() {
        assert_eq!(round4(0.123456), 0.1235);
        assert_eq!(round4(0.99999), 1.0);
        assert_eq!(round4(0.0), 0.0);
    }
}
