use rand::Rng;

use crate::config::Dynamics;
use crate::spins::SpinLattice;

use super::glauber::Glauber;
use super::kawasaki::Kawasaki;

/// Result of a single proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Accepted,
    Rejected,
    /// No valid proposal exists for the current state; the lattice is untouched.
    Degenerate,
}

/// Metropolis acceptance probability `min(1, exp(-dE / T))`, clamped to [0, 1].
#[inline]
pub fn acceptance_probability(delta_e: f64, temperature: f64) -> f64 {
    if delta_e <= 0.0 {
        return 1.0;
    }
    (-delta_e / temperature).exp().clamp(0.0, 1.0)
}

/// Draw `r` in [0, 1) and accept iff `r < p`.
#[inline]
pub fn metropolis_accept<R: Rng + ?Sized>(delta_e: f64, temperature: f64, rng: &mut R) -> bool {
    rng.gen::<f64>() < acceptance_probability(delta_e, temperature)
}

/// One Markov-chain step on a [`SpinLattice`].
///
/// A step depends on every previously accepted move of the same chain, so a
/// kernel is only ever applied sequentially to one lattice.
pub trait TransitionKernel {
    fn step<R: Rng + ?Sized>(&self, lattice: &mut SpinLattice, rng: &mut R) -> StepOutcome;
}

impl TransitionKernel for Dynamics {
    #[inline]
    fn step<R: Rng + ?Sized>(&self, lattice: &mut SpinLattice, rng: &mut R) -> StepOutcome {
        match self {
            Dynamics::Glauber => Glauber.step(lattice, rng),
            Dynamics::Kawasaki => Kawasaki.step(lattice, rng),
        }
    }
}
