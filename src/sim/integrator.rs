use crate::dynamics;
use crate::types::State;

// ---------------------------------------------------------------------------
// Symplectic (semi-implicit) Euler integrator
// ---------------------------------------------------------------------------

/// Single symplectic Euler step: advance state by dt.
///
/// Velocity is updated from the current position, then position from the
/// already-updated velocity. The ordering is what keeps the energy error
/// bounded over long runs instead of growing like plain explicit Euler.
pub fn symplectic_euler_step(state: &State, dt: f64) -> State {
    let vel = state.vel + dynamics::acceleration(state.pos) * dt;

    State {
        time: state.time + dt,
        pos: state.pos + vel * dt,
        vel,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
