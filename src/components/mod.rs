//! Element models for circuit analysis.
//!
//! This module provides the two-terminal elements the solver understands:
//! - Linear: Resistor, Capacitor, Inductor
//! - Sources: independent Voltage Source, Current Source
//!
//! An [`Element`] is built once from a whitespace-tokenized netlist line and
//! carries its value already converted for the analysis mode: passive
//! elements hold their impedance at ω, sources hold a DC magnitude or an AC
//! phasor.
//!
//! # Line Shapes
//!
//! | Kind | Syntax |
//! |------|--------|
//! | R, L, C | `<name> <a> <b> <value>` |
//! | V, I (DC) | `<name> <a> <b> <value>` |
//! | V, I (AC) | `<name> <a> <b> ac <amplitude> <phase>` |

mod linear;
mod sources;
mod value;

pub use linear::{capacitor_impedance, inductor_impedance, resistor_impedance};
pub use sources::{ac_phasor, dc_value};
pub use value::parse_value;

use std::fmt;

use num_complex::Complex64;

use crate::circuit::AnalysisMode;
use crate::error::{Result, SpiceError};

/// Kind of a circuit element, fixed at construction from its name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Resistor,
    Capacitor,
    Inductor,
    VoltageSource,
    CurrentSource,
}

impl ElementKind {
    /// All kinds, in stamping order.
    pub const ALL: [ElementKind; 5] = [
        ElementKind::Resistor,
        ElementKind::Capacitor,
        ElementKind::Inductor,
        ElementKind::VoltageSource,
        ElementKind::CurrentSource,
    ];

    /// Map a name's leading character to a kind.
    pub fn from_prefix(prefix: char) -> Option<Self> {
        match prefix {
            'R' => Some(ElementKind::Resistor),
            'C' => Some(ElementKind::Capacitor),
            'L' => Some(ElementKind::Inductor),
            'V' => Some(ElementKind::VoltageSource),
            'I' => Some(ElementKind::CurrentSource),
            _ => None,
        }
    }

    pub fn prefix(&self) -> char {
        match self {
            ElementKind::Resistor => 'R',
            ElementKind::Capacitor => 'C',
            ElementKind::Inductor => 'L',
            ElementKind::VoltageSource => 'V',
            ElementKind::CurrentSource => 'I',
        }
    }

    /// R, L and C are stamped as admittances.
    pub fn is_passive(&self) -> bool {
        matches!(
            self,
            ElementKind::Resistor | ElementKind::Capacitor | ElementKind::Inductor
        )
    }

    pub fn is_source(&self) -> bool {
        !self.is_passive()
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Resistor => "resistor",
            ElementKind::Capacitor => "capacitor",
            ElementKind::Inductor => "inductor",
            ElementKind::VoltageSource => "voltage source",
            ElementKind::CurrentSource => "current source",
        };
        f.write_str(name)
    }
}

/// A two-terminal circuit element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub kind: ElementKind,
    /// Terminal names as written: `[a, b]`
    pub terminals: [String; 2],
    /// Impedance for R/L/C; DC magnitude or AC phasor for sources
    pub value: Complex64,
    /// Source line number, for diagnostics
    pub line: usize,
}

impl Element {
    /// Parse an element from one netlist line.
    pub fn parse(text: &str, line: usize, mode: AnalysisMode) -> Result<Self> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        Self::from_tokens(&tokens, line, mode)
    }

    /// Build an element from `[name, a, b, ...value tokens]`.
    pub fn from_tokens(tokens: &[&str], line: usize, mode: AnalysisMode) -> Result<Self> {
        let name = *tokens
            .first()
            .ok_or_else(|| SpiceError::malformed(line, "empty element line"))?;

        let kind = name
            .chars()
            .next()
            .and_then(ElementKind::from_prefix)
            .ok_or_else(|| SpiceError::InvalidElementType {
                name: name.to_string(),
                line,
            })?;

        let number = |token: &str| {
            parse_value(token).ok_or_else(|| SpiceError::invalid_value(name, token, line))
        };

        let value = match (kind, tokens.len()) {
            (ElementKind::Resistor, 4) => resistor_impedance(number(tokens[3])?),
            (ElementKind::Inductor, 4) => inductor_impedance(number(tokens[3])?, mode.omega()),
            (ElementKind::Capacitor, 4) => capacitor_impedance(number(tokens[3])?, mode.omega()),
            (ElementKind::VoltageSource | ElementKind::CurrentSource, 6)
                if tokens[3].eq_ignore_ascii_case("ac") =>
            {
                ac_phasor(number(tokens[4])?, number(tokens[5])?)
            }
            (ElementKind::VoltageSource | ElementKind::CurrentSource, 4) => {
                dc_value(number(tokens[3])?)
            }
            (kind, count) => {
                let expected = if kind.is_passive() {
                    "<name> <a> <b> <value>"
                } else {
                    "<name> <a> <b> <value> or <name> <a> <b> ac <amplitude> <phase>"
                };
                return Err(SpiceError::malformed(
                    line,
                    format!("{} '{}' has {} tokens, expected {}", kind, name, count, expected),
                ));
            }
        };

        if kind.is_passive() {
            if value == Complex64::new(0.0, 0.0) {
                return Err(SpiceError::ZeroImpedance {
                    element: name.to_string(),
                });
            }
            if !value.is_finite() {
                return Err(SpiceError::invalid_value(name, tokens[3], line));
            }
        }

        Ok(Self {
            name: name.to_string(),
            kind,
            terminals: [tokens[1].to_string(), tokens[2].to_string()],
            value,
            line,
        })
    }

    /// Admittance `1 / value` of a passive element.
    pub fn admittance(&self) -> Complex64 {
        debug_assert!(self.kind.is_passive(), "sources have no admittance");
        self.value.inv()
    }
}
