pub mod config;
pub mod error;
pub mod geometry;
pub mod mcmc;
pub mod simulation;
pub mod spins;
pub mod statistics;

mod parallel;

pub use config::{Dynamics, InitMode, ScanConfig, SimConfig, TemperatureRange};
pub use error::{Result, SimError};
pub use geometry::Lattice;
pub use simulation::{
    run_realization, run_scan, run_temperature, ExperimentRecord, Realization, ScanParams,
    ScanResult, TemperatureRun,
};
pub use spins::{Spin, SpinLattice};
pub use statistics::MeasurementSeries;
