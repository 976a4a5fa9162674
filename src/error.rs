//! Error types for the phasor circuit solver.
//!
//! This module provides a unified error type [`SpiceError`] that covers
//! every failure that can occur while scanning a netlist, building elements,
//! and solving the MNA system. All of them are terminal for the run.

use thiserror::Error;

/// Result type alias using [`SpiceError`].
pub type Result<T> = std::result::Result<T, SpiceError>;

/// Unified error type for all solver operations.
#[derive(Error, Debug)]
pub enum SpiceError {
    // ============ Element Errors ============
    /// Element name does not start with one of `R`, `L`, `C`, `I`, `V`
    #[error("Invalid element type '{name}' at line {line}: name must start with R, L, C, I or V")]
    InvalidElementType { name: String, line: usize },

    /// Token count or shape does not match any element pattern
    #[error("Malformed element line {line}: {message}")]
    MalformedElementLine { line: usize, message: String },

    /// A numeric token could not be parsed
    #[error("Invalid value '{token}' for element '{element}' at line {line}")]
    InvalidValue {
        element: String,
        token: String,
        line: usize,
    },

    /// A passive element whose impedance is zero has no admittance to stamp
    #[error("Element '{element}' has zero impedance")]
    ZeroImpedance { element: String },

    /// Two elements share a name
    #[error("Duplicate element name '{name}'")]
    DuplicateElement { name: String },

    // ============ Solver Errors ============
    /// Matrix is singular and cannot be solved
    #[error("Singular {size}x{size} MNA matrix - circuit has a floating node or conflicting sources")]
    SingularMatrix { size: usize },

    // ============ Netlist Errors ============
    /// A required directive is absent
    #[error("Netlist has no '{directive}' line")]
    MissingDirective { directive: &'static str },

    /// A directive is present but misplaced or malformed
    #[error("Invalid directive at line {line}: {message}")]
    InvalidDirective { line: usize, message: String },

    /// Angular frequency is not a finite positive number
    #[error("Invalid angular frequency {value}: must be finite and positive")]
    InvalidFrequency { value: f64 },

    // ============ I/O Errors ============
    /// Input file does not carry the netlist extension
    #[error("'{path}' is not a .netlist file")]
    InvalidExtension { path: String },

    /// Error reading netlist file
    #[error("Failed to read netlist file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl SpiceError {
    /// Create a malformed element line error
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedElementLine {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(element: impl Into<String>, token: impl Into<String>, line: usize) -> Self {
        Self::InvalidValue {
            element: element.into(),
            token: token.into(),
            line,
        }
    }

    /// Create an invalid directive error
    pub fn directive(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidDirective {
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singular_message_carries_size() {
        let err = SpiceError::SingularMatrix { size: 3 };
        assert!(err.to_string().contains("3x3"));
    }

    #[test]
    fn test_malformed_helper() {
        let err = SpiceError::malformed(4, "expected 4 tokens");
        match err {
            SpiceError::MalformedElementLine { line, ref message } => {
                assert_eq!(line, 4);
                assert_eq!(message, "expected 4 tokens");
            }
            _ => panic!("wrong variant"),
        }
    }
}
