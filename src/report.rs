//! Text rendering of analysis results.

use std::fmt;

use num_complex::Complex64;

use crate::solver::Solution;

/// Mantissa digits for node voltages.
pub const VOLTAGE_PRECISION: usize = 7;

/// Mantissa digits for voltage source currents.
pub const CURRENT_PRECISION: usize = 4;

/// Format a value in scientific notation with a signed two-digit exponent,
/// e.g. `-1.2500000e-03`.
pub fn scientific(value: f64, precision: usize) -> String {
    // Adding 0.0 folds -0.0 into 0.0
    let formatted = format!("{:.*e}", precision, value + 0.0);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => formatted,
    }
}

/// Format a phasor as `<re> + <im>j` (or `- <|im|>j`).
pub fn phasor(value: Complex64, precision: usize) -> String {
    let im = value.im + 0.0;
    let sign = if im.is_sign_negative() { '-' } else { '+' };
    format!(
        "{} {} {}j",
        scientific(value.re, precision),
        sign,
        scientific(im.abs(), precision)
    )
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in &self.node_voltages {
            writeln!(f, "V_{} = {} V", v.node, phasor(v.voltage, VOLTAGE_PRECISION))?;
        }
        for c in &self.source_currents {
            writeln!(
                f,
                "I_{}_{} = {} A",
                c.terminals[0],
                c.terminals[1],
                phasor(c.current, CURRENT_PRECISION)
            )?;
        }
        if let Some(omega) = self.omega {
            writeln!(f, "The angular frequency of these values is {} rad/s", omega)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{NodeVoltage, SourceCurrent};

    #[test]
    fn test_scientific() {
        assert_eq!(scientific(5.0, 7), "5.0000000e+00");
        assert_eq!(scientific(-0.00125, 4), "-1.2500e-03");
        assert_eq!(scientific(123456.0, 2), "1.23e+05");
        assert_eq!(scientific(1e-120, 1), "1.0e-120");
        assert_eq!(scientific(-0.0, 3), "0.000e+00");
    }

    #[test]
    fn test_phasor_sign() {
        assert_eq!(
            phasor(Complex64::new(1.0, -0.5), 2),
            "1.00e+00 - 5.00e-01j"
        );
        assert_eq!(phasor(Complex64::new(0.0, 0.0), 1), "0.0e+00 + 0.0e+00j");
    }

    #[test]
    fn test_render_solution() {
        let solution = Solution {
            node_voltages: vec![NodeVoltage {
                node: "n1".to_string(),
                voltage: Complex64::new(5.0, 0.0),
            }],
            source_currents: vec![SourceCurrent {
                source: "V1".to_string(),
                terminals: ["n1".to_string(), "GND".to_string()],
                current: Complex64::new(-0.005, 0.0),
            }],
            omega: Some(1000.0),
        };
        let text = solution.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "V_n1 = 5.0000000e+00 + 0.0000000e+00j V");
        assert_eq!(lines[1], "I_n1_GND = -5.0000e-03 + 0.0000e+00j A");
        assert_eq!(lines[2], "The angular frequency of these values is 1000 rad/s");
    }

    #[test]
    fn test_dc_render_has_no_frequency_line() {
        let solution = Solution {
            node_voltages: vec![],
            source_currents: vec![],
            omega: None,
        };
        assert_eq!(solution.to_string(), "");
    }
}
