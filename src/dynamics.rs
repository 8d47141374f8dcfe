// ---------------------------------------------------------------------------
// Equation of motion (simple harmonic oscillator)
// ---------------------------------------------------------------------------

/// Restoring acceleration at displacement `pos`.
///
/// Hooke's law with unit mass and unit stiffness: a = -k/m * x = -x.
pub fn acceleration(pos: f64) -> f64 {
    -pos
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
