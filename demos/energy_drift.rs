use std::f64::consts::TAU;

use oscillator_sim::analysis::RunSummary;
use oscillator_sim::sim;
use oscillator_sim::types::SimConfig;

fn main() {
    // 100x the default run length: long-term energy behavior
    let config = SimConfig { dt: 0.05, steps: 100_000 };

    println!("Integrating {} steps at dt = {} s ...", config.steps, config.dt);
    let trajectory = sim::simulate(&config).expect("simulation failed");

    let summary = RunSummary::from_trajectory(&trajectory);
    println!(
        "Simulated time: {:.0} s (~{:.0} periods)",
        summary.duration,
        summary.duration / TAU
    );
    println!(
        "Energy range: [{:.6}, {:.6}]  (E0 = {:.6})",
        summary.min_energy, summary.max_energy, summary.initial_energy
    );
    println!("Relative drift: {:.4} %", summary.energy_drift() * 100.0);
    println!("Max amplitude: {:.6} m", summary.max_amplitude);
}
