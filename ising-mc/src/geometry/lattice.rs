use crate::error::{Result, SimError};

/// Neighbor slot of a site on the square lattice.
///
/// The slot order (up, left, right, down) is the order in which neighbor
/// spins are summed, so it fixes the floating-point reduction order of every
/// energy computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Left,
    Right,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Right,
        Direction::Down,
    ];

    /// `(dx, dy)` displacement of this slot.
    #[inline]
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

/// Number of neighbor slots per site.
pub const N_NEIGHBORS: usize = 4;

/// Periodic 2D square lattice with precomputed neighbor table.
///
/// Sites are indexed in row-major order, `i = y * width + x`. The neighbor
/// table has length `n_spins * N_NEIGHBORS`, where element
/// `i * N_NEIGHBORS + d` is the site reached from `i` through
/// `Direction::ALL[d]`.
#[derive(Debug, Clone)]
pub struct Lattice {
    pub width: usize,
    pub height: usize,
    /// Total number of sites (`width * height`).
    pub n_spins: usize,
    neighbors: Vec<u32>,
}

impl Lattice {
    /// Create a `width x height` torus. Both extents must be at least 1.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SimError::config(format!(
                "lattice dimensions must be >= 1, got {width}x{height}"
            )));
        }
        let n_spins = width.checked_mul(height).ok_or_else(|| {
            SimError::config(format!("lattice of {width}x{height} sites overflows usize"))
        })?;
        if n_spins > u32::MAX as usize {
            return Err(SimError::config(format!(
                "lattice of {n_spins} sites exceeds the u32 neighbor table"
            )));
        }

        let mut neighbors = vec![0u32; n_spins * N_NEIGHBORS];
        for i in 0..n_spins {
            let (x, y) = (i % width, i / width);
            for (d, dir) in Direction::ALL.iter().enumerate() {
                let (dx, dy) = dir.offset();
                let nx = (x as isize + dx).rem_euclid(width as isize) as usize;
                let ny = (y as isize + dy).rem_euclid(height as isize) as usize;
                neighbors[i * N_NEIGHBORS + d] = (ny * width + nx) as u32;
            }
        }

        Ok(Self {
            width,
            height,
            n_spins,
            neighbors,
        })
    }

    /// Flat index of `(x, y)`. Coordinates are reduced modulo the extents.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        (y % self.height) * self.width + (x % self.width)
    }

    /// `(x, y)` of flat index `i`.
    #[inline]
    pub fn coords(&self, i: usize) -> (usize, usize) {
        (i % self.width, i / self.width)
    }

    /// Return the neighbor of site `flat_idx` through `dir`.
    #[inline]
    pub fn neighbor(&self, flat_idx: usize, dir: Direction) -> usize {
        self.neighbors[flat_idx * N_NEIGHBORS + dir as usize] as usize
    }

    /// All four neighbors of `flat_idx` in slot order.
    #[inline]
    pub fn neighbors(&self, flat_idx: usize) -> [usize; N_NEIGHBORS] {
        let base = flat_idx * N_NEIGHBORS;
        [
            self.neighbors[base] as usize,
            self.neighbors[base + 1] as usize,
            self.neighbors[base + 2] as usize,
            self.neighbors[base + 3] as usize,
        ]
    }

    /// Number of neighbor slots of `a` occupied by `b`.
    ///
    /// This is 0 or 1 on lattices at least 3 wide and tall; on a 2-wide (or
    /// 2-tall) torus two sites share two bonds, and on a 1-wide torus a site
    /// is its own left and right neighbor.
    #[inline]
    pub fn bond_multiplicity(&self, a: usize, b: usize) -> usize {
        self.neighbors(a).iter().filter(|&&n| n == b).count()
    }

    /// Whether `b` occupies one of the neighbor slots of `a`.
    #[inline]
    pub fn is_neighbor_pair(&self, a: usize, b: usize) -> bool {
        self.bond_multiplicity(a, b) > 0
    }
}
