use crate::error::Result;
use crate::types::{SimConfig, State};

use super::integrator::symplectic_euler_step;

// ---------------------------------------------------------------------------
// Fixed-step run loop
// ---------------------------------------------------------------------------

/// Run the oscillator for exactly `config.steps` steps.
///
/// Returns one snapshot per step, each taken BEFORE that step's update, so
/// the trajectory starts at the initial state and has `config.steps` entries.
/// The state after the final update is discarded.
pub fn simulate(config: &SimConfig) -> Result<Vec<State>> {
    config.validate()?;

    let mut state = State::initial();
    let mut trajectory = Vec::with_capacity(config.steps);

    for _ in 0..config.steps {
        trajectory.push(state.clone());
        state = symplectic_euler_step(&state, config.dt);
    }

    Ok(trajectory)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
