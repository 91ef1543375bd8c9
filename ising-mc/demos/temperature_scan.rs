use std::time::Instant;

use ising_mc::config::*;
use ising_mc::simulation::{progress_bar, run_scan};

const L: usize = 32;
const N_TEMPS: usize = 16;
const T_MIN: f64 = 1.0;
const T_MAX: f64 = 4.0;
const N_SWEEPS: usize = 2000;

fn main() {
    let scan = ScanConfig {
        sim: SimConfig {
            width: L,
            height: L,
            dynamics: Dynamics::Glauber,
            init: None,
            equilibration_sweeps: EQUILIBRATION_SWEEPS,
            production_sweeps: N_SWEEPS,
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
            bootstrap_resamples: DEFAULT_BOOTSTRAP_RESAMPLES,
            autocorrelation_time: DEFAULT_AUTOCORRELATION_TIME,
        },
        range: TemperatureRange {
            start: T_MIN,
            end: T_MAX,
            count: N_TEMPS,
        },
        seed: Some(42),
        sequential: false,
    };

    println!(
        "Lattice: {}x{}  |  Temps: {}  |  Sweeps: {}  |  Dynamics: {:?}",
        L, L, N_TEMPS, N_SWEEPS, scan.sim.dynamics
    );
    println!("{}", "-".repeat(70));

    let pb = progress_bar(N_TEMPS as u64);
    let t0 = Instant::now();
    let result = run_scan(&scan, &|| pb.inc(1)).unwrap();
    pb.finish_and_clear();
    let elapsed = t0.elapsed().as_secs_f64();

    println!(
        "{:>6}  {:>10}  {:>10}  {:>10}  {:>10}  {:>10}",
        "T", "E", "|M|", "C", "C_berr", "chi"
    );
    for run in &result.runs {
        match &run.result {
            Ok(rec) => println!(
                "{:>6.3}  {:>10.2}  {:>10.2}  {:>10.4}  {:>10.4}  {:>10.4}",
                rec.temperature,
                rec.energy_mean,
                rec.magnetization_mean.unwrap_or(f64::NAN),
                rec.heat_capacity,
                rec.heat_capacity_bootstrap_error,
                rec.susceptibility.unwrap_or(f64::NAN),
            ),
            Err(e) => println!("{:>6.3}  failed: {e}", run.temperature),
        }
    }
    println!("{}", "-".repeat(70));
    println!(
        "N: {}  |  tau: {}",
        result.params.n_spins, result.params.autocorrelation_time
    );
    println!("Total: {:.3} s", elapsed);
}
