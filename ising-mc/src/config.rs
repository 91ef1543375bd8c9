use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::SimError;

/// Default number of equilibration sweeps before sampling starts.
pub const EQUILIBRATION_SWEEPS: usize = 100;
/// Default spacing, in sweeps, between recorded samples.
pub const DEFAULT_SAMPLE_INTERVAL: usize = 10;
/// Default autocorrelation time assumed by the analytic error estimate.
pub const DEFAULT_AUTOCORRELATION_TIME: f64 = 10.0;
/// Default number of bootstrap resamples.
pub const DEFAULT_BOOTSTRAP_RESAMPLES: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dynamics {
    Glauber,
    Kawasaki,
}

impl Dynamics {
    /// Initial configuration used when none is requested.
    ///
    /// Kawasaki dynamics cannot leave a uniform lattice, so it starts random.
    pub fn default_init(&self) -> InitMode {
        match self {
            Self::Glauber => InitMode::Up,
            Self::Kawasaki => InitMode::Random,
        }
    }

    /// Whether magnetization observables are meaningful under this dynamics.
    pub fn measures_magnetization(&self) -> bool {
        matches!(self, Self::Glauber)
    }
}

impl TryFrom<&str> for Dynamics {
    type Error = SimError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_ascii_lowercase().as_str() {
            "glauber" | "g" => Ok(Self::Glauber),
            "kawasaki" | "k" => Ok(Self::Kawasaki),
            _ => Err(SimError::config(format!(
                "unknown dynamics '{s}', expected 'glauber' or 'kawasaki'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitMode {
    Up,
    Down,
    Random,
}

impl TryFrom<&str> for InitMode {
    type Error = SimError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "random" => Ok(Self::Random),
            _ => Err(SimError::config(format!(
                "unknown init mode '{s}', expected 'up', 'down', or 'random'"
            ))),
        }
    }
}

fn validate_sim_config(cfg: &SimConfig) -> Result<(), ValidationError> {
    if cfg.width < 1 || cfg.height < 1 {
        return Err(ValidationError::new("lattice width and height must be >= 1"));
    }
    if cfg.width.checked_mul(cfg.height).is_none() {
        return Err(ValidationError::new("lattice width * height overflows"));
    }
    if cfg.production_sweeps < 1 {
        return Err(ValidationError::new("production_sweeps must be >= 1"));
    }
    if cfg.sample_interval < 1 {
        return Err(ValidationError::new("sample_interval must be >= 1"));
    }
    if cfg.bootstrap_resamples < 1 {
        return Err(ValidationError::new("bootstrap_resamples must be >= 1"));
    }
    if !(cfg.autocorrelation_time.is_finite() && cfg.autocorrelation_time > 0.0) {
        return Err(ValidationError::new(
            "autocorrelation_time must be positive and finite",
        ));
    }
    Ok(())
}

/// Parameters of one temperature's pipeline, temperature excluded.
#[derive(Debug, Clone, Validate)]
#[validate(schema(function = "validate_sim_config"))]
pub struct SimConfig {
    pub width: usize,
    pub height: usize,
    pub dynamics: Dynamics,
    /// `None` picks [`Dynamics::default_init`].
    pub init: Option<InitMode>,
    pub equilibration_sweeps: usize,
    pub production_sweeps: usize,
    pub sample_interval: usize,
    pub bootstrap_resamples: usize,
    pub autocorrelation_time: f64,
}

impl SimConfig {
    pub fn n_spins(&self) -> Result<usize, SimError> {
        self.width.checked_mul(self.height).ok_or_else(|| {
            SimError::config(format!(
                "lattice of {}x{} sites overflows usize",
                self.width, self.height
            ))
        })
    }

    pub fn init_mode(&self) -> InitMode {
        self.init.unwrap_or_else(|| self.dynamics.default_init())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            dynamics: Dynamics::Glauber,
            init: None,
            equilibration_sweeps: EQUILIBRATION_SWEEPS,
            production_sweeps: 1000,
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
            bootstrap_resamples: DEFAULT_BOOTSTRAP_RESAMPLES,
            autocorrelation_time: DEFAULT_AUTOCORRELATION_TIME,
        }
    }
}

fn validate_temperature_range(range: &TemperatureRange) -> Result<(), ValidationError> {
    let positive = |t: f64| t.is_finite() && t > 0.0;
    if !positive(range.start) || !positive(range.end) {
        return Err(ValidationError::new(
            "temperature range bounds must be positive and finite",
        ));
    }
    if range.count < 1 {
        return Err(ValidationError::new("temperature count must be >= 1"));
    }
    Ok(())
}

/// `count` evenly spaced temperatures from `start` to `end`, both included.
#[derive(Debug, Clone, Validate)]
#[validate(schema(function = "validate_temperature_range"))]
pub struct TemperatureRange {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl TemperatureRange {
    /// The temperatures of the range in ascending order.
    pub fn temperatures(&self) -> Vec<f64> {
        let mut temps: Vec<f64> = if self.count == 1 {
            vec![self.start]
        } else {
            let step = (self.end - self.start) / (self.count - 1) as f64;
            (0..self.count)
                .map(|i| {
                    if i + 1 == self.count {
                        self.end
                    } else {
                        self.start + step * i as f64
                    }
                })
                .collect()
        };
        temps.sort_by(f64::total_cmp);
        temps
    }
}

#[derive(Debug, Clone, Validate)]
pub struct ScanConfig {
    #[validate]
    pub sim: SimConfig,
    #[validate]
    pub range: TemperatureRange,
    /// Base seed; temperature `i` (ascending) uses `seed + i`. `None` seeds
    /// every chain from OS entropy.
    pub seed: Option<u64>,
    /// Run temperatures on the current thread instead of the rayon pool.
    pub sequential: bool,
}
