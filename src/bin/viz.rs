use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use oscillator_sim::analysis::RunSummary;
use oscillator_sim::sim;
use oscillator_sim::types::{SimConfig, State};

fn main() -> eframe::Result {
    let config = SimConfig::default();
    let trajectory = sim::simulate(&config).expect("simulation failed");

    let app = OscViz { trajectory, config };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("Harmonic Oscillator", options, Box::new(|_| Ok(Box::new(app))))
}

struct OscViz {
    trajectory: Vec<State>,
    config: SimConfig,
}

impl eframe::App for OscViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let step = (self.trajectory.len() / 2000).max(1);
        let sampled: Vec<&State> = self.trajectory.iter().step_by(step).collect();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("Symplectic Euler — Simple Harmonic Oscillator");
            let summary = RunSummary::from_trajectory(&self.trajectory);
            ui.label(format!(
                "Steps: {}  |  dt: {} s  |  Simulated: {:.1} s  |  Energy drift: {:.3} %",
                summary.samples,
                self.config.dt,
                summary.duration,
                summary.energy_drift() * 100.0,
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;
            let half_h = available.y / 2.0 - 8.0;

            ui.horizontal(|ui| {
                // Position vs Time
                ui.vertical(|ui| {
                    ui.label("Position (m)");
                    let points: PlotPoints = sampled.iter()
                        .map(|s| [s.time, s.pos])
                        .collect();
                    Plot::new("position")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Position", points));
                        });
                });

                // Velocity vs Time
                ui.vertical(|ui| {
                    ui.label("Velocity (m/s)");
                    let points: PlotPoints = sampled.iter()
                        .map(|s| [s.time, s.vel])
                        .collect();
                    Plot::new("velocity")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Velocity", points));
                        });
                });
            });

            ui.horizontal(|ui| {
                // Phase portrait
                ui.vertical(|ui| {
                    ui.label("Phase Portrait");
                    let points: PlotPoints = sampled.iter()
                        .map(|s| [s.pos, s.vel])
                        .collect();
                    Plot::new("phase")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Position (m)")
                        .data_aspect(1.0)
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Orbit", points));
                        });
                });

                // Energy vs Time
                ui.vertical(|ui| {
                    ui.label("Energy (J)");
                    let points: PlotPoints = sampled.iter()
                        .map(|s| [s.time, s.energy()])
                        .collect();
                    Plot::new("energy")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Energy", points));
                        });
                });
            });
        });
    }
}
