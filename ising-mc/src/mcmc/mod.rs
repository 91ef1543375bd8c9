pub mod glauber;
pub mod kawasaki;
pub mod kernel;
pub mod sweep;

pub use glauber::Glauber;
pub use kawasaki::Kawasaki;
pub use kernel::{acceptance_probability, metropolis_accept, StepOutcome, TransitionKernel};
pub use sweep::{equilibrate, produce, sweep, SweepStats};
