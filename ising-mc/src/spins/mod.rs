pub mod energy;
pub mod state;

pub use energy::{ENERGY_PER_DELTA, J};
pub use state::{Spin, SpinLattice, Temperature};
