use rand::Rng;

use crate::error::SimError;
use crate::spins::SpinLattice;

use super::kernel::{metropolis_accept, StepOutcome, TransitionKernel};

/// Spin-exchange dynamics. Conserves magnetization exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct Kawasaki;

impl Kawasaki {
    /// Propose exchanging a random site with a random opposite-spin site.
    ///
    /// Returns the pair, or [`SimError::DegenerateState`] on a uniform lattice.
    pub fn propose<R: Rng + ?Sized>(
        &self,
        lattice: &SpinLattice,
        rng: &mut R,
    ) -> Result<(usize, usize), SimError> {
        let a = lattice.random_site(rng);
        let b = lattice.random_site_with_spin(lattice.spin(a).flipped(), rng)?;
        Ok((a, b))
    }
}

impl TransitionKernel for Kawasaki {
    fn step<R: Rng + ?Sized>(&self, lattice: &mut SpinLattice, rng: &mut R) -> StepOutcome {
        let (a, b) = match self.propose(lattice, rng) {
            Ok(pair) => pair,
            Err(_) => return StepOutcome::Degenerate,
        };
        let delta_e = lattice.exchange_energy_delta(a, b);
        if metropolis_accept(delta_e, lattice.temperature(), rng) {
            lattice.flip(a);
            lattice.flip(b);
            StepOutcome::Accepted
        } else {
            StepOutcome::Rejected
        }
    }
}
