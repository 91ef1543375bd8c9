//! Resampling error estimates for nonlinear functions of a sample series.

use rand::Rng;

use crate::error::{Result, SimError};

use super::stats::Moments;

/// Minimum series length accepted by the resampling estimators.
pub const MIN_SAMPLES: usize = 2;

fn check_len(samples: &[f64]) -> Result<()> {
    if samples.len() < MIN_SAMPLES {
        return Err(SimError::InsufficientData {
            needed: MIN_SAMPLES,
            got: samples.len(),
        });
    }
    Ok(())
}

/// Bootstrap error of `estimator(mean, mean_square, n_spins, temperature)`.
///
/// Draws `k` resamples of the series with replacement, each as long as the
/// series, and returns the standard deviation of the `k` estimates.
pub fn bootstrap<F, R>(
    samples: &[f64],
    estimator: F,
    k: usize,
    n_spins: usize,
    temperature: f64,
    rng: &mut R,
) -> Result<f64>
where
    F: Fn(f64, f64, usize, f64) -> f64,
    R: Rng + ?Sized,
{
    check_len(samples)?;
    if k == 0 {
        return Err(SimError::config("bootstrap needs at least one resample"));
    }

    let n = samples.len();
    let mut estimates = Moments::new();
    for _ in 0..k {
        let mut resample = Moments::new();
        for _ in 0..n {
            resample.update(samples[rng.gen_range(0..n)]);
        }
        estimates.update(estimator(
            resample.mean(),
            resample.mean_square(),
            n_spins,
            temperature,
        ));
    }
    Ok(estimates.variance().sqrt())
}

/// Jackknife error `sqrt(sum_i (x - x_i)^2)` of the same estimator shape.
///
/// `x` is the full-series estimate and `x_i` the estimate with sample `i`
/// left out. There is no `(n - 1) / n` factor; existing experiment outputs
/// were produced with this form.
pub fn jackknife<F>(samples: &[f64], estimator: F, n_spins: usize, temperature: f64) -> Result<f64>
where
    F: Fn(f64, f64, usize, f64) -> f64,
{
    check_len(samples)?;

    let full = Moments::from_samples(samples);
    let x = estimator(full.mean(), full.mean_square(), n_spins, temperature);
    let sum_sq: f64 = samples
        .iter()
        .map(|&v| {
            let loo = full.without(v);
            let xi = estimator(loo.mean(), loo.mean_square(), n_spins, temperature);
            (x - xi) * (x - xi)
        })
        .sum();
    Ok(sum_sq.sqrt())
}
