//! Independent voltage and current source values.

use num_complex::Complex64;

/// Value of a DC source: a real magnitude.
pub fn dc_value(magnitude: f64) -> Complex64 {
    Complex64::new(magnitude, 0.0)
}

/// Phasor of a sinusoidal source given its peak amplitude and phase (radians).
///
/// Uses the half-amplitude convention: `(amplitude / 2) * (cos φ + j sin φ)`.
pub fn ac_phasor(amplitude: f64, phase: f64) -> Complex64 {
    let half = amplitude / 2.0;
    Complex64::new(half * phase.cos(), half * phase.sin())
}
