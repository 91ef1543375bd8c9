use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{Dynamics, SimConfig};
use crate::error::Result;
use crate::statistics::{
    bootstrap, heat_capacity, jackknife, standard_error, susceptibility, MeasurementSeries, Moments,
};

/// Observables and error bars at one temperature.
///
/// Field names in serialized form follow the established record schema.
/// Magnetization-derived fields are `None` for Kawasaki runs and are then
/// left out of the serialized record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentRecord {
    #[serde(rename = "T")]
    pub temperature: f64,
    /// ⟨E⟩.
    #[serde(rename = "E_mean")]
    pub energy_mean: f64,
    /// ⟨|M|⟩.
    #[serde(rename = "M_mean", default, skip_serializing_if = "Option::is_none")]
    pub magnetization_mean: Option<f64>,
    #[serde(rename = "C")]
    pub heat_capacity: f64,
    #[serde(rename = "chi", default, skip_serializing_if = "Option::is_none")]
    pub susceptibility: Option<f64>,
    #[serde(rename = "E_error")]
    pub energy_error: f64,
    #[serde(rename = "M_error", default, skip_serializing_if = "Option::is_none")]
    pub magnetization_error: Option<f64>,
    #[serde(rename = "C_berror")]
    pub heat_capacity_bootstrap_error: f64,
    #[serde(rename = "chi_berror", default, skip_serializing_if = "Option::is_none")]
    pub susceptibility_bootstrap_error: Option<f64>,
    #[serde(rename = "C_jerror")]
    pub heat_capacity_jackknife_error: f64,
    #[serde(rename = "chi_jerror", default, skip_serializing_if = "Option::is_none")]
    pub susceptibility_jackknife_error: Option<f64>,
}

impl ExperimentRecord {
    /// Reduce a production series to point estimates and error bars.
    ///
    /// `rng` drives the bootstrap resampling. Fails with
    /// [`crate::SimError::InsufficientData`] on fewer than two samples.
    pub fn from_series<R: Rng + ?Sized>(
        series: &MeasurementSeries,
        config: &SimConfig,
        temperature: f64,
        rng: &mut R,
    ) -> Result<Self> {
        let n_spins = config.n_spins()?;
        let k = config.bootstrap_resamples;
        let tau = config.autocorrelation_time;

        let energies = series.energies();
        let e = Moments::from_samples(energies);
        let heat_capacity_bootstrap_error =
            bootstrap(energies, heat_capacity, k, n_spins, temperature, rng)?;
        let heat_capacity_jackknife_error =
            jackknife(energies, heat_capacity, n_spins, temperature)?;

        let mut record = Self {
            temperature,
            energy_mean: e.mean(),
            magnetization_mean: None,
            heat_capacity: heat_capacity(e.mean(), e.mean_square(), n_spins, temperature),
            susceptibility: None,
            energy_error: standard_error(e.mean(), e.mean_square(), n_spins, tau),
            magnetization_error: None,
            heat_capacity_bootstrap_error,
            susceptibility_bootstrap_error: None,
            heat_capacity_jackknife_error,
            susceptibility_jackknife_error: None,
        };

        if config.dynamics == Dynamics::Glauber {
            let abs_m = series.abs_magnetizations();
            let m = Moments::from_samples(&abs_m);
            record.magnetization_mean = Some(m.mean());
            record.susceptibility = Some(susceptibility(
                m.mean(),
                m.mean_square(),
                n_spins,
                temperature,
            ));
            record.magnetization_error =
                Some(standard_error(m.mean(), m.mean_square(), n_spins, tau));
            record.susceptibility_bootstrap_error = Some(bootstrap(
                &abs_m,
                susceptibility,
                k,
                n_spins,
                temperature,
                rng,
            )?);
            record.susceptibility_jackknife_error =
                Some(jackknife(&abs_m, susceptibility, n_spins, temperature)?);
        }

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    fn series(samples: &[(f64, f64)]) -> MeasurementSeries {
        let mut s = MeasurementSeries::new();
        for &(e, m) in samples {
            s.push(e, m);
        }
        s
    }

    fn small_config(dynamics: Dynamics) -> SimConfig {
        SimConfig {
            width: 2,
            height: 2,
            dynamics,
            bootstrap_resamples: 50,
            ..SimConfig::default()
        }
    }

    #[test]
    fn test_glauber_record() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        let s = series(&[(-16.0, 4.0), (-8.0, -2.0), (-16.0, -4.0), (0.0, 2.0)]);
        let rec = ExperimentRecord::from_series(&s, &small_config(Dynamics::Glauber), 2.0, &mut rng)
            .unwrap();
        assert_eq!(rec.temperature, 2.0);
        assert_eq!(rec.energy_mean, -10.0);
        // |M| = 4, 2, 4, 2
        assert_eq!(rec.magnetization_mean, Some(3.0));
        // <|M|^2> = 10 -> (10 - 9) / (4 * 2)
        assert_eq!(rec.susceptibility, Some(0.125));
        // <E^2> = 144 -> (144 - 100) / (4 * 4)
        assert_eq!(rec.heat_capacity, 2.75);
        assert!(rec.heat_capacity_bootstrap_error >= 0.0);
        assert!(rec.heat_capacity_jackknife_error > 0.0);
        assert!(rec.susceptibility_bootstrap_error.unwrap() >= 0.0);
        assert!(rec.susceptibility_jackknife_error.unwrap() > 0.0);
    }

    #[test]
    fn test_kawasaki_record_omits_magnetization() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(1);
        let s = series(&[(-8.0, 0.0), (0.0, 0.0), (-8.0, 0.0)]);
        let rec =
            ExperimentRecord::from_series(&s, &small_config(Dynamics::Kawasaki), 1.0, &mut rng)
                .unwrap();
        assert!(rec.magnetization_mean.is_none());
        assert!(rec.susceptibility.is_none());
        assert!(rec.magnetization_error.is_none());
        assert!(rec.susceptibility_bootstrap_error.is_none());
        assert!(rec.susceptibility_jackknife_error.is_none());
    }

    #[test]
    fn test_short_series_rejected() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(2);
        let s = series(&[(-16.0, 4.0)]);
        assert_eq!(
            ExperimentRecord::from_series(&s, &small_config(Dynamics::Glauber), 1.0, &mut rng),
            Err(SimError::InsufficientData { needed: 2, got: 1 })
        );
    }
}
