pub mod realization;
pub mod record;

pub use realization::Realization;
pub use record::ExperimentRecord;

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::{ScanConfig, SimConfig};
use crate::error::{Result, SimError};
use crate::mcmc;
use crate::parallel::par_over_temperatures;

/// Outcome of one temperature of a scan.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureRun {
    pub temperature: f64,
    pub result: Result<ExperimentRecord>,
}

impl TemperatureRun {
    pub fn record(&self) -> Option<&ExperimentRecord> {
        self.result.as_ref().ok()
    }
}

/// Scan-level parameters shared by every record of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanParams {
    /// Site count used as `N` by every estimator.
    #[serde(rename = "N")]
    pub n_spins: usize,
    #[serde(rename = "tau")]
    pub autocorrelation_time: f64,
}

/// Everything a scan produced: its parameters and one run per temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    pub params: ScanParams,
    /// Ascending temperature order.
    pub runs: Vec<TemperatureRun>,
}

impl ScanResult {
    /// Records of the temperatures that succeeded, in order.
    pub fn records(&self) -> impl Iterator<Item = &ExperimentRecord> + '_ {
        self.runs.iter().filter_map(TemperatureRun::record)
    }
}

/// Run the full pipeline for one [`Realization`]:
/// 1. `equilibration_sweeps` sweeps without sampling
/// 2. `production_sweeps` sweeps, sampling every `sample_interval`
/// 3. Reduction of the samples to an [`ExperimentRecord`]
pub fn run_realization(config: &SimConfig, real: &mut Realization) -> Result<ExperimentRecord> {
    let kernel = config.dynamics;
    let Realization { lattice, rng } = real;

    mcmc::equilibrate(&kernel, lattice, rng, config.equilibration_sweeps);
    let (series, _) = mcmc::produce(
        &kernel,
        lattice,
        rng,
        config.production_sweeps,
        config.sample_interval,
    )?;

    ExperimentRecord::from_series(&series, config, lattice.temperature(), rng)
}

/// Build a chain at `temperature` and run it to a record.
pub fn run_temperature(
    config: &SimConfig,
    temperature: f64,
    seed: Option<u64>,
) -> Result<ExperimentRecord> {
    config.validate()?;
    let mut real = Realization::new(config, temperature, seed)?;
    run_realization(config, &mut real)
}

/// Run every temperature of the scan as an independent chain.
///
/// Temperatures run in parallel unless `scan.sequential` is set. Results are
/// returned in ascending temperature order; a failure at one temperature is
/// reported in its [`TemperatureRun`] and does not affect the others. Only an
/// invalid scan configuration fails the whole call.
///
/// `on_temperature` is called once per finished temperature (useful for
/// progress bars).
pub fn run_scan(scan: &ScanConfig, on_temperature: &(dyn Fn() + Sync)) -> Result<ScanResult> {
    scan.validate().map_err(SimError::from)?;
    let params = ScanParams {
        n_spins: scan.sim.n_spins()?,
        autocorrelation_time: scan.sim.autocorrelation_time,
    };
    let temperatures = scan.range.temperatures();

    let runs = par_over_temperatures(&temperatures, scan.sequential, |temp_id, temperature| {
        let seed = scan.seed.map(|base| base.wrapping_add(temp_id as u64));
        let result = run_temperature(&scan.sim, temperature, seed);
        on_temperature();
        TemperatureRun {
            temperature,
            result,
        }
    });
    Ok(ScanResult { params, runs })
}

/// Progress bar styled for temperature scans.
pub fn progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::with_template(
        "{msg} [{bar:40}] {pos}/{len} [{elapsed_precise} < {eta_precise}]",
    ) {
        pb.set_style(style.progress_chars("=> "));
    }
    pb.set_message("temperatures");
    pb
}
