use rand::Rng;

use crate::spins::SpinLattice;

use super::kernel::{metropolis_accept, StepOutcome, TransitionKernel};
use super::sweep::SweepStats;

/// Single-spin-flip dynamics. Does not conserve magnetization.
#[derive(Debug, Clone, Copy, Default)]
pub struct Glauber;

impl Glauber {
    /// Metropolis test for flipping site `i`; flips in place on acceptance.
    #[inline]
    pub fn try_flip<R: Rng + ?Sized>(
        &self,
        lattice: &mut SpinLattice,
        i: usize,
        rng: &mut R,
    ) -> StepOutcome {
        let delta_e = lattice.energy_delta(i);
        if metropolis_accept(delta_e, lattice.temperature(), rng) {
            lattice.flip(i);
            StepOutcome::Accepted
        } else {
            StepOutcome::Rejected
        }
    }

    /// Visit every site once in row-major order, flipping as it goes.
    ///
    /// This typewriter schedule is for continuously updated displays. It is a
    /// weaker approximation to detailed balance than the random-site sweep and
    /// is never used for equilibration or measurement.
    pub fn systematic_sweep<R: Rng + ?Sized>(
        &self,
        lattice: &mut SpinLattice,
        rng: &mut R,
    ) -> SweepStats {
        let mut stats = SweepStats::default();
        for i in 0..lattice.n_spins() {
            stats.record(self.try_flip(lattice, i, rng));
        }
        stats
    }
}

impl TransitionKernel for Glauber {
    #[inline]
    fn step<R: Rng + ?Sized>(&self, lattice: &mut SpinLattice, rng: &mut R) -> StepOutcome {
        let i = lattice.random_site(rng);
        self.try_flip(lattice, i, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InitMode;
    use crate::spins::{Spin, ENERGY_PER_DELTA};
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    #[test]
    fn test_zero_cost_flip_always_accepted() {
        // A checkerboard on a 2x2 torus: every site has four opposite
        // neighbors, so dE = -8 and the flip is always accepted.
        let mut rng = Xoshiro256StarStar::seed_from_u64(1);
        let mut lat = SpinLattice::from_spins(
            2,
            2,
            0.1,
            vec![Spin::Up, Spin::Down, Spin::Down, Spin::Up],
        )
        .unwrap();
        assert_eq!(lat.energy_delta(0), -8.0);
        assert_eq!(Glauber.try_flip(&mut lat, 0, &mut rng), StepOutcome::Accepted);
        assert_eq!(lat.spin(0), Spin::Down);
    }

    #[test]
    fn test_frozen_at_low_temperature() {
        // exp(-8 / 0.01) underflows to zero: nothing moves on an aligned lattice.
        let mut rng = Xoshiro256StarStar::seed_from_u64(2);
        let mut lat = SpinLattice::new(6, 6, 0.01, InitMode::Up, &mut rng).unwrap();
        for _ in 0..1000 {
            assert_eq!(Glauber.step(&mut lat, &mut rng), StepOutcome::Rejected);
        }
        assert_eq!(lat.total_magnetization(), 36);
    }

    #[test]
    fn test_energy_tracks_accepted_flips() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(11);
        let mut lat = SpinLattice::new(5, 4, 2.5, InitMode::Random, &mut rng).unwrap();
        let mut energy = lat.total_energy();
        for _ in 0..2000 {
            let i = lat.random_site(&mut rng);
            let delta = lat.energy_delta(i);
            if Glauber.try_flip(&mut lat, i, &mut rng) == StepOutcome::Accepted {
                energy += ENERGY_PER_DELTA * delta;
            }
        }
        assert!((energy - lat.total_energy()).abs() < 1e-9);
    }

    #[test]
    fn test_systematic_sweep_visits_every_site() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(5);
        // Infinite-like temperature: every proposal is accepted.
        let mut lat = SpinLattice::new(4, 4, 1e12, InitMode::Up, &mut rng).unwrap();
        let stats = Glauber.systematic_sweep(&mut lat, &mut rng);
        assert_eq!(stats.attempts(), 16);
        assert_eq!(stats.accepted, 16);
        assert_eq!(lat.total_magnetization(), -16);
    }
}
