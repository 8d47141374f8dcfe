use oscillator_sim::analysis::RunSummary;
use oscillator_sim::io::csv;
use oscillator_sim::sim;
use oscillator_sim::types::SimConfig;

const OUTPUT_FILE: &str = "data.csv";

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> oscillator_sim::Result<()> {
    let config = SimConfig::default();

    println!("Running Simulation ({} steps)...", config.steps);

    let trajectory = sim::simulate(&config)?;
    csv::write_trajectory_file(OUTPUT_FILE, &trajectory)?;

    // -----------------------------------------------------------------------
    // Run summary
    // -----------------------------------------------------------------------
    let summary = RunSummary::from_trajectory(&trajectory);

    println!();
    println!("  Samples:         {:>8}      dt:           {:>8} s", summary.samples, config.dt);
    println!("  Simulated time:  {:>8.2} s", summary.duration);
    println!(
        "  Energy:          {:>8.5} .. {:.5}   (E0 = {:.5})",
        summary.min_energy, summary.max_energy, summary.initial_energy
    );
    println!("  Energy drift:    {:>8.3} %", summary.energy_drift() * 100.0);
    println!("  Max |x - exact|: {:>8.5}", summary.max_position_error);
    println!();

    println!("Done. Data saved to {OUTPUT_FILE}");
    Ok(())
}
