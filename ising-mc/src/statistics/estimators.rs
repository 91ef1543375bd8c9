//! Thermodynamic response functions and the analytic error estimate.
//!
//! `susceptibility` and `heat_capacity` share the signature
//! `(mean, mean_square, n_spins, temperature)`, which is the estimator shape
//! accepted by [`crate::statistics::bootstrap`] and
//! [`crate::statistics::jackknife`].

/// Magnetic susceptibility `(<M^2> - <|M|>^2) / (N T)`.
///
/// `av_m` must be the mean of `|M|`; the signed mean vanishes by symmetry.
pub fn susceptibility(av_m: f64, av_m2: f64, n_spins: usize, temperature: f64) -> f64 {
    (av_m2 - av_m * av_m) / (n_spins as f64 * temperature)
}

/// Heat capacity `(<E^2> - <E>^2) / (N T^2)`.
pub fn heat_capacity(av_e: f64, av_e2: f64, n_spins: usize, temperature: f64) -> f64 {
    (av_e2 - av_e * av_e) / (n_spins as f64 * temperature * temperature)
}

/// Autocorrelation-corrected error of a directly averaged quantity,
/// `sqrt((<x^2> - <x>^2) * 2 tau / n)`.
pub fn standard_error(av: f64, av2: f64, n: usize, tau: f64) -> f64 {
    ((av2 - av * av).max(0.0) * 2.0 * tau / n as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::Moments;

    #[test]
    fn test_susceptibility() {
        // |M| samples 2 and 4: <M> = 3, <M^2> = 10
        let m = Moments::from_samples(&[2.0, 4.0]);
        assert_eq!(susceptibility(m.mean(), m.mean_square(), 4, 0.5), 0.5);
    }

    #[test]
    fn test_heat_capacity() {
        let e = Moments::from_samples(&[-10.0, -14.0]);
        assert_eq!(heat_capacity(e.mean(), e.mean_square(), 2, 2.0), 0.5);
    }

    #[test]
    fn test_constant_series_has_no_fluctuations() {
        let e = Moments::from_samples(&[-16.0; 8]);
        assert_eq!(heat_capacity(e.mean(), e.mean_square(), 4, 1.0), 0.0);
        assert_eq!(standard_error(e.mean(), e.mean_square(), 4, 10.0), 0.0);
    }

    #[test]
    fn test_standard_error() {
        // variance 4, tau 10, n 20 -> sqrt(4 * 20 / 20) = 2
        assert_eq!(standard_error(1.0, 5.0, 20, 10.0), 2.0);
        // round-off below zero is clamped
        assert_eq!(standard_error(3.0, 9.0 - 1e-12, 10, 10.0), 0.0);
    }
}
