pub mod lattice;

pub use lattice::{Direction, Lattice, N_NEIGHBORS};
