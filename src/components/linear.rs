//! Linear passive components: Resistor, Capacitor, Inductor.
//!
//! Each passive element is reduced to a complex impedance at the analysis
//! frequency; the assembler stamps its reciprocal.

use num_complex::Complex64;

/// Impedance of a resistor: `R`, independent of frequency.
pub fn resistor_impedance(resistance: f64) -> Complex64 {
    Complex64::new(resistance, 0.0)
}

/// Impedance of an inductor: `jωL`.
pub fn inductor_impedance(inductance: f64, omega: f64) -> Complex64 {
    Complex64::new(0.0, omega * inductance)
}

/// Impedance of a capacitor: `-j / (ωC)`.
pub fn capacitor_impedance(capacitance: f64, omega: f64) -> Complex64 {
    Complex64::new(0.0, -1.0) / Complex64::new(capacitance * omega, 0.0)
}
