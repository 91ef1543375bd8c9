use super::state::SpinLattice;

/// Coupling constant. Fixed; the model has no field term.
pub const J: f64 = 1.0;

/// Change of [`SpinLattice::total_energy`] per unit of local energy delta.
///
/// The total energy sums `-J s_i s_j` over every site and each of its four
/// neighbor slots, so each bond is visited from both ends and a single flip
/// with local delta `dE` moves the total by `2 dE`.
pub const ENERGY_PER_DELTA: f64 = 2.0;

impl SpinLattice {
    /// Sum of the four neighbor spins of site `i`.
    #[inline]
    pub fn local_field(&self, i: usize) -> i32 {
        let spins = self.spins();
        self.geometry()
            .neighbors(i)
            .iter()
            .map(|&j| spins[j].value() as i32)
            .sum()
    }

    /// Sum of the neighbor spins of site `i` that change relative to it under
    /// a flip of `i`. Slots pointing back at `i` (1-wide or 1-tall lattices)
    /// are skipped, since `s_i s_i` is invariant.
    #[inline]
    fn flip_field(&self, i: usize) -> i32 {
        let spins = self.spins();
        self.geometry()
            .neighbors(i)
            .iter()
            .filter(|&&j| j != i)
            .map(|&j| spins[j].value() as i32)
            .sum()
    }

    /// Energy change from flipping site `i`: `2 J s_i sum(neighbors)`, with
    /// self-bonds left out.
    #[inline]
    pub fn energy_delta(&self, i: usize) -> f64 {
        2.0 * J * (self.spin(i).value() as i32 * self.flip_field(i)) as f64
    }

    /// Energy change from flipping `(x, y)`, without mutating the lattice.
    pub fn local_energy_delta(&self, x: usize, y: usize) -> f64 {
        self.energy_delta(self.geometry().index(x, y))
    }

    /// Energy change from flipping both `a` and `b`, which hold opposite spins.
    ///
    /// Each bond shared by the two sites keeps its energy under the exchange,
    /// but appears once in each single-site delta, so `-4 J s_a s_b` is added
    /// per shared bond.
    pub fn exchange_energy_delta(&self, a: usize, b: usize) -> f64 {
        let shared = self.geometry().bond_multiplicity(a, b) as f64;
        let sa = self.spin(a).value() as f64;
        let sb = self.spin(b).value() as f64;
        self.energy_delta(a) + self.energy_delta(b) - 4.0 * J * sa * sb * shared
    }

    /// `-J` times the double sum of `s_i s_j` over sites and neighbor slots.
    pub fn total_energy(&self) -> f64 {
        let spins = self.spins();
        let mut total = 0i64;
        for (i, &s) in spins.iter().enumerate() {
            total += s.value() as i64 * self.local_field(i) as i64;
        }
        -J * total as f64
    }

    /// Signed sum of all spins.
    #[inline]
    pub fn total_magnetization(&self) -> i64 {
        2 * self.count(super::Spin::Up) as i64 - self.n_spins() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::super::Spin;
    use super::*;

    fn uniform(width: usize, height: usize, spin: Spin) -> SpinLattice {
        SpinLattice::from_spins(width, height, 1.0, vec![spin; width * height]).unwrap()
    }

    #[test]
    fn test_2x2_all_up() {
        let lat = uniform(2, 2, Spin::Up);
        assert_eq!(lat.total_energy(), -16.0);
        assert_eq!(lat.total_magnetization(), 4);
    }

    #[test]
    fn test_3x3_single_flip_delta() {
        let lat = uniform(3, 3, Spin::Up);
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(lat.local_energy_delta(x, y), 8.0);
            }
        }
        assert_eq!(lat.total_energy(), -36.0);
    }

    #[test]
    fn test_flip_moves_total_by_twice_delta() {
        let mut lat = uniform(4, 5, Spin::Down);
        let before = lat.total_energy();
        let delta = lat.local_energy_delta(2, 3);
        lat.flip(lat.geometry().index(2, 3));
        assert_eq!(lat.total_energy() - before, ENERGY_PER_DELTA * delta);
        // Flipping back restores the energy.
        assert_eq!(lat.local_energy_delta(2, 3), -delta);
    }

    #[test]
    fn test_magnetization_matches_sum() {
        let mut lat = uniform(5, 5, Spin::Up);
        for i in [0, 3, 7, 11, 24] {
            lat.flip(i);
        }
        let direct: i64 = lat.spins().iter().map(|s| s.value() as i64).sum();
        assert_eq!(lat.total_magnetization(), direct);
        assert_eq!(direct, 15);
    }

    #[test]
    fn test_thin_lattice_ignores_self_bonds() {
        // 1x3: site 0 is its own left and right neighbor.
        let mut lat = uniform(1, 3, Spin::Up);
        assert_eq!(lat.total_energy(), -12.0);
        assert_eq!(lat.local_energy_delta(0, 0), 4.0);
        lat.flip(0);
        assert_eq!(lat.total_energy(), -4.0);

        for (w, h) in [(1, 1), (1, 4), (5, 1), (1, 2)] {
            let mut lat = uniform(w, h, Spin::Up);
            for i in [0, lat.n_spins() - 1, lat.n_spins() / 2] {
                let before = lat.total_energy();
                let delta = lat.energy_delta(i);
                lat.flip(i);
                assert_eq!(
                    lat.total_energy() - before,
                    ENERGY_PER_DELTA * delta,
                    "{w}x{h} site {i}"
                );
            }
        }
    }

    fn exchanged_delta_by_recompute(lat: &SpinLattice, a: usize, b: usize) -> f64 {
        let mut next = lat.clone();
        next.flip(a);
        next.flip(b);
        (next.total_energy() - lat.total_energy()) / ENERGY_PER_DELTA
    }

    #[test]
    fn test_exchange_delta_neighbors() {
        let mut lat = uniform(4, 4, Spin::Up);
        let a = lat.geometry().index(1, 1);
        let b = lat.geometry().index(2, 1);
        lat.flip(b);
        // a: 3 up neighbors + b down -> dE_a = 2*(1)*(2) = 4
        // b: 4 up neighbors -> dE_b = 2*(-1)*(4) = -8
        // shared bond correction +4
        assert_eq!(lat.exchange_energy_delta(a, b), 0.0);
        assert_eq!(
            lat.exchange_energy_delta(a, b),
            exchanged_delta_by_recompute(&lat, a, b)
        );
    }

    #[test]
    fn test_exchange_delta_matches_recompute() {
        let u = Spin::Up;
        let d = Spin::Down;
        let grids = [
            (2, 2, vec![u, d, d, u]),
            (2, 3, vec![u, d, u, u, d, d]),
            (1, 5, vec![u, d, d, u, d]),
            (4, 1, vec![d, u, u, d]),
            (
                4,
                4,
                vec![u, u, d, d, u, d, u, d, d, d, u, u, u, d, d, u],
            ),
        ];
        for (w, h, spins) in grids {
            let lat = SpinLattice::from_spins(w, h, 1.0, spins).unwrap();
            for a in 0..lat.n_spins() {
                for b in 0..lat.n_spins() {
                    if lat.spin(a) == lat.spin(b) {
                        continue;
                    }
                    assert_eq!(
                        lat.exchange_energy_delta(a, b),
                        exchanged_delta_by_recompute(&lat, a, b),
                        "{w}x{h} sites {a},{b}"
                    );
                }
            }
        }
    }
}
