/// Running first and second moments of a scalar observable.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Moments {
    pub count: usize,
    pub sum: f64,
    pub sum_sq: f64,
}

impl Moments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_samples(samples: &[f64]) -> Self {
        let mut m = Self::new();
        for &v in samples {
            m.update(v);
        }
        m
    }

    #[inline]
    pub fn update(&mut self, v: f64) {
        self.count += 1;
        self.sum += v;
        self.sum_sq += v * v;
    }

    /// Moments with one previously recorded sample `v` removed.
    #[inline]
    pub fn without(&self, v: f64) -> Self {
        Self {
            count: self.count - 1,
            sum: self.sum - v,
            sum_sq: self.sum_sq - v * v,
        }
    }

    /// `<x>`, or 0 when nothing was recorded.
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.sum / self.count as f64
    }

    /// `<x^2>`, or 0 when nothing was recorded.
    pub fn mean_square(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.sum_sq / self.count as f64
    }

    /// Population variance `<x^2> - <x>^2`, clamped at zero.
    pub fn variance(&self) -> f64 {
        let m = self.mean();
        (self.mean_square() - m * m).max(0.0)
    }
}

/// Arithmetic mean of `samples` (0 for an empty slice).
pub fn mean(samples: &[f64]) -> f64 {
    Moments::from_samples(samples).mean()
}

/// Mean of squares of `samples` (0 for an empty slice).
pub fn mean_square(samples: &[f64]) -> f64 {
    Moments::from_samples(samples).mean_square()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moments() {
        let m = Moments::from_samples(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.count, 4);
        assert_eq!(m.mean(), 2.5);
        assert_eq!(m.mean_square(), 7.5);
        assert_eq!(m.variance(), 1.25);

        let loo = m.without(4.0);
        assert_eq!(loo.mean(), 2.0);
        assert_eq!(loo.mean_square(), 14.0 / 3.0);
    }

    #[test]
    fn test_empty() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean_square(&[]), 0.0);
        assert_eq!(Moments::new().variance(), 0.0);
    }

    #[test]
    fn test_free_functions() {
        assert_eq!(mean(&[-2.0, 2.0, 6.0]), 2.0);
        assert_eq!(mean_square(&[-2.0, 2.0, 6.0]), 44.0 / 3.0);
    }
}
