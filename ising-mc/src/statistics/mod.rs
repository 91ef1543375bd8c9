pub mod estimators;
pub mod resampling;
pub mod series;
mod stats;

pub use estimators::{heat_capacity, standard_error, susceptibility};
pub use resampling::{bootstrap, jackknife, MIN_SAMPLES};
pub use series::MeasurementSeries;
pub use stats::{mean, mean_square, Moments};
