/// Append-only `(energy, magnetization)` samples from one production run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementSeries {
    energies: Vec<f64>,
    magnetizations: Vec<f64>,
}

impl MeasurementSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            energies: Vec::with_capacity(capacity),
            magnetizations: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, energy: f64, magnetization: f64) {
        self.energies.push(energy);
        self.magnetizations.push(magnetization);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.energies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }

    pub fn energies(&self) -> &[f64] {
        &self.energies
    }

    /// Signed total magnetization samples.
    pub fn magnetizations(&self) -> &[f64] {
        &self.magnetizations
    }

    /// `|M|` samples, the form used by every magnetization observable.
    pub fn abs_magnetizations(&self) -> Vec<f64> {
        self.magnetizations.iter().map(|m| m.abs()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.energies
            .iter()
            .copied()
            .zip(self.magnetizations.iter().copied())
    }
}
