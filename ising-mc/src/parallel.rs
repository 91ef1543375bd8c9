use rayon::prelude::*;

/// Map `body` over temperatures, optionally in parallel.
///
/// Each call receives `(temp_id, temperature)` and must own all of its mutable
/// state; nothing is shared between calls. Results come back in input order
/// regardless of completion order.
///
/// When `sequential` is true, temperatures are processed on the current thread
/// (no rayon overhead, useful for deterministic debugging or when an outer
/// level already saturates the cores).
pub fn par_over_temperatures<T: Send>(
    temperatures: &[f64],
    sequential: bool,
    body: impl Fn(usize, f64) -> T + Send + Sync,
) -> Vec<T> {
    let work = |(temp_id, &temp): (usize, &f64)| body(temp_id, temp);

    if sequential {
        temperatures.iter().enumerate().map(work).collect()
    } else {
        temperatures.par_iter().enumerate().map(work).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_order() {
        let temps: Vec<f64> = (1..=64).map(|i| i as f64 * 0.1).collect();
        let par = par_over_temperatures(&temps, false, |id, t| (id, t * 2.0));
        let seq = par_over_temperatures(&temps, true, |id, t| (id, t * 2.0));
        assert_eq!(par, seq);
        for (i, &(id, v)) in par.iter().enumerate() {
            assert_eq!(id, i);
            assert_eq!(v, temps[i] * 2.0);
        }
    }
}
