use nalgebra::{Rotation2, Vector2};

use crate::types::{State, V0, X0};

// ---------------------------------------------------------------------------
// Closed-form reference solution
// ---------------------------------------------------------------------------

/// Exact oscillator state at time t.
///
/// The flow of x'' = -x is a clockwise rotation of the phase point (x, v):
/// x(t) = X0 cos t + V0 sin t, v(t) = -X0 sin t + V0 cos t.
pub fn exact_state(t: f64) -> State {
    let phase = Rotation2::new(-t) * Vector2::new(X0, V0);

    State {
        time: t,
        pos: phase.x,
        vel: phase.y,
    }
}

// ---------------------------------------------------------------------------
// Run summary
// ---------------------------------------------------------------------------

/// Summary statistics computed from a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub samples: usize,
    pub duration: f64,           // time of the last sample, s
    pub initial_energy: f64,
    pub max_energy: f64,
    pub min_energy: f64,
    pub max_amplitude: f64,      // max |x|
    pub max_position_error: f64, // max |x - x_exact|
    pub rms_position_error: f64,
}

impl RunSummary {
    /// Compute summary from trajectory data.
    pub fn from_trajectory(trajectory: &[State]) -> Self {
        let max_energy = trajectory
            .iter()
            .map(State::energy)
            .fold(f64::NEG_INFINITY, f64::max);

        let min_energy = trajectory
            .iter()
            .map(State::energy)
            .fold(f64::INFINITY, f64::min);

        let max_amplitude = trajectory
            .iter()
            .map(|s| s.pos.abs())
            .fold(0.0_f64, f64::max);

        let max_position_error = trajectory
            .iter()
            .map(|s| (s.pos - exact_state(s.time).pos).abs())
            .fold(0.0_f64, f64::max);

        let sum_sq: f64 = trajectory
            .iter()
            .map(|s| {
                let e = s.pos - exact_state(s.time).pos;
                e * e
            })
            .sum();

        let last = trajectory.last().unwrap();

        RunSummary {
            samples: trajectory.len(),
            duration: last.time,
            initial_energy: trajectory[0].energy(),
            max_energy,
            min_energy,
            max_amplitude,
            max_position_error,
            rms_position_error: (sum_sq / trajectory.len() as f64).sqrt(),
        }
    }

    /// Largest relative deviation of energy from its initial value.
    pub fn energy_drift(&self) -> f64 {
        let hi = (self.max_energy - self.initial_energy).abs();
        let lo = (self.min_energy - self.initial_energy).abs();
        hi.max(lo) / self.initial_energy
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
