use crate::models::Efficiency;

/// Inclusive upper bounds, checked in order; anything above the last is `Regular`
const EFFICIENCY_BANDS: &[(f64, Efficiency)] = &[
    (0.5, Efficiency::Excellent),
    (1.0, Efficiency::Good),
];

/// Classify a fault rate (in percent)
pub fn classify(rate: f64) -> Efficiency {
    EFFICIENCY_BANDS
        .iter()
        .find(|(upper, _)| rate <= *upper)
        .map(|(_, level)| *level)
        .unwrap_or(Efficiency::Regular)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configurations() {
        assert_eq!(classify(0.39), Efficiency::Excellent);
        assert_eq!(classify(0.80), Efficiency::Good);
        assert_eq!(classify(0.20), Efficiency::Excellent);
        assert_eq!(classify(1.58), Efficiency::Regular);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert_eq!(classify(0.5), Efficiency::Excellent);
        assert_eq!(classify(0.500001), Efficiency::Good);
        assert_eq!(classify(1.0), Efficiency::Good);
        assert_eq!(classify(1.000001), Efficiency::Regular);
    }

    #[test]
    fn test_display() {
        assert_eq!(classify(0.0).to_string(), "🟢 EXCELLENT");
        assert_eq!(classify(2.0).to_string(), "🔴 REGULAR");
    }
}
