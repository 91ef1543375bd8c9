use std::fmt;

use rand::Rng;

use crate::config::InitMode;
use crate::error::{Result, SimError};
use crate::geometry::{Lattice, N_NEIGHBORS};

/// A two-valued Ising spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Spin {
    Up = 1,
    Down = -1,
}

impl Spin {
    #[inline]
    pub fn value(self) -> i8 {
        self as i8
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Spin::Up => Spin::Down,
            Spin::Down => Spin::Up,
        }
    }

    /// Uniform draw from {-1, +1}.
    #[inline]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen::<bool>() {
            Spin::Up
        } else {
            Spin::Down
        }
    }
}

/// Positive, finite temperature in units of J / k_B.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Temperature(f64);

impl Temperature {
    pub fn new(t: f64) -> Result<Self> {
        if t.is_finite() && t > 0.0 {
            Ok(Self(t))
        } else {
            Err(SimError::config(format!(
                "temperature must be positive and finite, got {t}"
            )))
        }
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Spin configuration on a periodic 2D lattice at a fixed temperature.
///
/// The grid can only hold [`Spin`] values and its size is fixed at
/// construction. A running count of up spins keeps the magnetization exact
/// and lets exchange moves detect a uniform lattice in O(1).
#[derive(Debug, Clone)]
pub struct SpinLattice {
    geometry: Lattice,
    spins: Vec<Spin>,
    temperature: Temperature,
    n_up: usize,
}

impl SpinLattice {
    /// Build a `width x height` lattice in the requested initial state.
    ///
    /// `rng` is only consumed by [`InitMode::Random`].
    pub fn new<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        temperature: f64,
        mode: InitMode,
        rng: &mut R,
    ) -> Result<Self> {
        let geometry = Lattice::new(width, height)?;
        let n_spins = geometry.n_spins;
        let spins = match mode {
            InitMode::Up => vec![Spin::Up; n_spins],
            InitMode::Down => vec![Spin::Down; n_spins],
            InitMode::Random => (0..n_spins).map(|_| Spin::random(rng)).collect(),
        };
        Self::with_geometry(geometry, temperature, spins)
    }

    /// Build a lattice from an explicit row-major spin grid.
    pub fn from_spins(
        width: usize,
        height: usize,
        temperature: f64,
        spins: Vec<Spin>,
    ) -> Result<Self> {
        let geometry = Lattice::new(width, height)?;
        if spins.len() != geometry.n_spins {
            return Err(SimError::config(format!(
                "expected {} spins for a {width}x{height} lattice, got {}",
                geometry.n_spins,
                spins.len()
            )));
        }
        Self::with_geometry(geometry, temperature, spins)
    }

    fn with_geometry(geometry: Lattice, temperature: f64, spins: Vec<Spin>) -> Result<Self> {
        let temperature = Temperature::new(temperature)?;
        let n_up = spins.iter().filter(|&&s| s == Spin::Up).count();
        Ok(Self {
            geometry,
            spins,
            temperature,
            n_up,
        })
    }

    #[inline]
    pub fn geometry(&self) -> &Lattice {
        &self.geometry
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.geometry.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.geometry.height
    }

    #[inline]
    pub fn n_spins(&self) -> usize {
        self.geometry.n_spins
    }

    #[inline]
    pub fn temperature(&self) -> f64 {
        self.temperature.value()
    }

    #[inline]
    pub fn spins(&self) -> &[Spin] {
        &self.spins
    }

    #[inline]
    pub fn spin(&self, i: usize) -> Spin {
        self.spins[i]
    }

    #[inline]
    pub fn spin_at(&self, x: usize, y: usize) -> Spin {
        self.spins[self.geometry.index(x, y)]
    }

    /// Number of sites currently holding `spin`.
    #[inline]
    pub fn count(&self, spin: Spin) -> usize {
        match spin {
            Spin::Up => self.n_up,
            Spin::Down => self.n_spins() - self.n_up,
        }
    }

    /// Flip the spin at flat index `i` in place.
    #[inline]
    pub fn flip(&mut self, i: usize) {
        let s = self.spins[i];
        match s {
            Spin::Up => self.n_up -= 1,
            Spin::Down => self.n_up += 1,
        }
        self.spins[i] = s.flipped();
    }

    /// Neighbor spin values of `(x, y)` in (up, left, right, down) order.
    pub fn neighbors(&self, x: usize, y: usize) -> [Spin; N_NEIGHBORS] {
        self.geometry
            .neighbors(self.geometry.index(x, y))
            .map(|j| self.spins[j])
    }

    /// Whether `(x1, y1)` and `(x2, y2)` are adjacent on the torus.
    pub fn is_neighbor_pair(&self, x1: usize, y1: usize, x2: usize, y2: usize) -> bool {
        self.geometry
            .is_neighbor_pair(self.geometry.index(x1, y1), self.geometry.index(x2, y2))
    }

    /// Uniformly random site index.
    #[inline]
    pub fn random_site<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.gen_range(0..self.n_spins())
    }

    /// Uniformly random site among those holding `spin`.
    ///
    /// Fails with [`SimError::DegenerateState`] when no site holds `spin`,
    /// otherwise retries uniform draws until one matches.
    pub fn random_site_with_spin<R: Rng + ?Sized>(&self, spin: Spin, rng: &mut R) -> Result<usize> {
        if self.count(spin) == 0 {
            return Err(SimError::DegenerateState(format!(
                "no site with spin {} on a {}x{} lattice",
                spin.value(),
                self.width(),
                self.height()
            )));
        }
        loop {
            let i = self.random_site(rng);
            if self.spins[i] == spin {
                return Ok(i);
            }
        }
    }

    /// Rows of spin values, top row first, for external renderers.
    pub fn snapshot(&self) -> Vec<Vec<i8>> {
        self.spins
            .chunks(self.width())
            .map(|row| row.iter().map(|s| s.value()).collect())
            .collect()
    }
}

impl fmt::Display for SpinLattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Lattice of size ({},{})", self.width(), self.height())?;
        writeln!(f, "Temperature: {}", self.temperature())?;
        writeln!(f, "Energy: {}", self.total_energy())?;
        writeln!(f, "Up spins: {}", self.count(Spin::Up))?;
        write!(f, "Down spins: {}", self.count(Spin::Down))
    }
}
