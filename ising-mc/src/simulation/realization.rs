use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

use crate::config::SimConfig;
use crate::error::Result;
use crate::spins::SpinLattice;

/// One independent Markov chain: a lattice and the PRNG stream driving it.
///
/// Every proposal, acceptance draw and bootstrap resample of one
/// temperature's pipeline comes from `rng`, so a seeded realization replays
/// exactly.
#[derive(Debug, Clone)]
pub struct Realization {
    pub lattice: SpinLattice,
    pub rng: Xoshiro256StarStar,
}

impl Realization {
    /// Initialize a chain at `temperature`.
    ///
    /// `seed = None` draws the PRNG state from OS entropy.
    pub fn new(config: &SimConfig, temperature: f64, seed: Option<u64>) -> Result<Self> {
        let rng = match seed {
            Some(seed) => Xoshiro256StarStar::seed_from_u64(seed),
            None => Xoshiro256StarStar::from_entropy(),
        };
        Self::with_rng(config, temperature, rng)
    }

    /// Initialize a chain with an explicit PRNG.
    pub fn with_rng(
        config: &SimConfig,
        temperature: f64,
        mut rng: Xoshiro256StarStar,
    ) -> Result<Self> {
        let lattice = SpinLattice::new(
            config.width,
            config.height,
            temperature,
            config.init_mode(),
            &mut rng,
        )?;
        Ok(Self { lattice, rng })
    }
}
