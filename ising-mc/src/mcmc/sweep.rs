use rand::Rng;

use crate::error::{Result, SimError};
use crate::spins::SpinLattice;
use crate::statistics::MeasurementSeries;

use super::kernel::{StepOutcome, TransitionKernel};

/// Proposal bookkeeping over one or more sweeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    pub accepted: usize,
    pub rejected: usize,
    pub degenerate: usize,
}

impl SweepStats {
    #[inline]
    pub fn record(&mut self, outcome: StepOutcome) {
        match outcome {
            StepOutcome::Accepted => self.accepted += 1,
            StepOutcome::Rejected => self.rejected += 1,
            StepOutcome::Degenerate => self.degenerate += 1,
        }
    }

    pub fn merge(&mut self, other: SweepStats) {
        self.accepted += other.accepted;
        self.rejected += other.rejected;
        self.degenerate += other.degenerate;
    }

    pub fn attempts(&self) -> usize {
        self.accepted + self.rejected + self.degenerate
    }

    /// Fraction of attempts that were accepted (0 when nothing was attempted).
    pub fn acceptance_rate(&self) -> f64 {
        let n = self.attempts();
        if n == 0 {
            0.0
        } else {
            self.accepted as f64 / n as f64
        }
    }
}

/// One sweep: `n_spins` proposals at uniformly random sites, with replacement.
pub fn sweep<K, R>(kernel: &K, lattice: &mut SpinLattice, rng: &mut R) -> SweepStats
where
    K: TransitionKernel + ?Sized,
    R: Rng + ?Sized,
{
    let mut stats = SweepStats::default();
    for _ in 0..lattice.n_spins() {
        stats.record(kernel.step(lattice, rng));
    }
    stats
}

/// Run `n_sweeps` sweeps without sampling.
pub fn equilibrate<K, R>(
    kernel: &K,
    lattice: &mut SpinLattice,
    rng: &mut R,
    n_sweeps: usize,
) -> SweepStats
where
    K: TransitionKernel + ?Sized,
    R: Rng + ?Sized,
{
    let mut stats = SweepStats::default();
    for _ in 0..n_sweeps {
        stats.merge(sweep(kernel, lattice, rng));
    }
    stats
}

/// Run `n_sweeps` sweeps, sampling `(E, M)` after every sweep whose 0-based
/// index is a multiple of `sample_every` (sweep 0 included).
pub fn produce<K, R>(
    kernel: &K,
    lattice: &mut SpinLattice,
    rng: &mut R,
    n_sweeps: usize,
    sample_every: usize,
) -> Result<(MeasurementSeries, SweepStats)>
where
    K: TransitionKernel + ?Sized,
    R: Rng + ?Sized,
{
    if sample_every == 0 {
        return Err(SimError::config("sample interval must be >= 1"));
    }

    let mut series = MeasurementSeries::with_capacity(n_sweeps.div_ceil(sample_every));
    let mut stats = SweepStats::default();
    for sweep_id in 0..n_sweeps {
        stats.merge(sweep(kernel, lattice, rng));
        if sweep_id % sample_every == 0 {
            series.push(lattice.total_energy(), lattice.total_magnetization() as f64);
        }
    }
    Ok((series, stats))
}
