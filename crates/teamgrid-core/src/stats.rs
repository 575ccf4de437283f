//! Population statistics over per-team totals.

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance. Zero for an empty slice.
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}

/// Population standard deviation. Zero for an empty slice.
pub fn population_std_dev(values: &[f64]) -> f64 {
    population_variance(values).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_zero() {
        assert_eq!(population_variance(&[]), 0.0);
        assert_eq!(population_std_dev(&[]), 0.0);
    }

    #[test]
    fn known_values() {
        let v = [100.0, 80.0, 60.0, 40.0];
        assert!((population_variance(&v) - 500.0).abs() < 1e-9);
        assert!((population_std_dev(&v) - 22.360_679_77).abs() < 1e-6);
    }

    #[test]
    fn constant_series_has_no_spread() {
        assert_eq!(population_std_dev(&[7.0, 7.0, 7.0]), 0.0);
    }
}
