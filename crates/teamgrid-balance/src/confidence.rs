//! Confidence buckets for a finished partition.

/// Map a partition's balance score onto a confidence value.
///
/// Buckets are relative to `threshold`: up to half of it scores 0.95, up
/// to the threshold 0.85, up to one and a half times it 0.70, anything
/// worse 0.50.
pub fn assignment_confidence(balance: f64, threshold: f64) -> f64 {
    if balance <= threshold * 0.5 {
        0.95
    } else if balance <= threshold {
        0.85
    } else if balance <= threshold * 1.5 {
        0.70
    } else {
        0.50
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_boundaries_are_inclusive() {
        assert_eq!(assignment_confidence(0.0, 50.0), 0.95);
        assert_eq!(assignment_confidence(25.0, 50.0), 0.95);
        assert_eq!(assignment_confidence(25.1, 50.0), 0.85);
        assert_eq!(assignment_confidence(50.0, 50.0), 0.85);
        assert_eq!(assignment_confidence(75.0, 50.0), 0.70);
        assert_eq!(assignment_confidence(75.1, 50.0), 0.50);
    }

    #[test]
    fn nan_balance_is_least_confident() {
        assert_eq!(assignment_confidence(f64::NAN, 50.0), 0.50);
    }
}
