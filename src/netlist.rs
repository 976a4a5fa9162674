//! Netlist file scanning.
//!
//! A netlist is line-oriented. Everything after `#` on a line is a comment.
//! Element lines sit between a `.circuit` line and the next `.end` line; an
//! optional `.ac` line after `.end` switches the analysis to AC, taking the
//! angular frequency (rad/s) from its last token.
//!
//! # Example
//!
//! ```text
//! # RC low-pass driven at 1000 rad/s
//! .circuit
//! V1  in   GND  ac 2 0
//! R1  in   out  1k
//! C1  out  GND  1u
//! .end
//! .ac V1 1000
//! ```

use std::path::Path;

use crate::circuit::{AnalysisMode, Circuit};
use crate::components::parse_value;
use crate::error::{Result, SpiceError};

/// Required file extension for netlist files.
pub const NETLIST_EXTENSION: &str = "netlist";

const CIRCUIT: &str = ".circuit";
const END: &str = ".end";
const AC: &str = ".ac";

/// An element line with comments and surrounding whitespace removed.
#[derive(Debug, Clone, PartialEq)]
pub struct NetlistLine {
    /// 1-based line number in the source text
    pub number: usize,
    pub text: String,
}

/// The analysis-relevant content of a netlist.
#[derive(Debug, Clone, PartialEq)]
pub struct Netlist {
    /// Non-empty lines between `.circuit` and `.end`
    pub elements: Vec<NetlistLine>,
    /// DC unless an `.ac` directive follows `.end`
    pub mode: AnalysisMode,
}

impl Netlist {
    /// Build the circuit described by the element lines.
    pub fn circuit(&self) -> Result<Circuit> {
        Circuit::from_numbered_lines(
            self.elements.iter().map(|l| (l.number, l.text.as_str())),
            self.mode,
        )
    }
}

/// Strip a trailing `#` comment and surrounding whitespace.
fn strip_comment(line: &str) -> &str {
    line.split('#').next().unwrap_or_default().trim()
}

/// Parse netlist text.
pub fn parse(input: &str) -> Result<Netlist> {
    let lines: Vec<(usize, &str)> = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, strip_comment(line)))
        .collect();

    let start = lines
        .iter()
        .position(|&(_, l)| l == CIRCUIT)
        .ok_or(SpiceError::MissingDirective { directive: CIRCUIT })?;

    let end = match lines[start + 1..].iter().position(|&(_, l)| l == END) {
        Some(offset) => start + 1 + offset,
        None => {
            return Err(match lines.iter().find(|&&(_, l)| l == END) {
                Some(&(number, _)) => {
                    SpiceError::directive(number, "'.end' appears before '.circuit'")
                }
                None => SpiceError::MissingDirective { directive: END },
            });
        }
    };

    let elements: Vec<NetlistLine> = lines[start + 1..end]
        .iter()
        .filter(|(_, l)| !l.is_empty())
        .map(|&(number, text)| NetlistLine {
            number,
            text: text.to_string(),
        })
        .collect();

    let mut mode = AnalysisMode::Dc;
    for &(number, text) in &lines[end + 1..] {
        let mut tokens = text.split_whitespace();
        if tokens.next() != Some(AC) {
            continue;
        }
        let last = tokens
            .last()
            .ok_or_else(|| SpiceError::directive(number, "'.ac' needs an angular frequency"))?;
        let omega = parse_value(last).ok_or_else(|| {
            SpiceError::directive(number, format!("invalid angular frequency '{}'", last))
        })?;
        if mode.is_ac() {
            log::warn!("line {}: '.ac' overrides an earlier '.ac' directive", number);
        }
        mode = AnalysisMode::ac(omega)?;
    }

    log::debug!("netlist: {} element lines, {:?}", elements.len(), mode);

    Ok(Netlist { elements, mode })
}

/// Read and parse a netlist file, which must carry the `.netlist` extension.
pub fn parse_file(path: &Path) -> Result<Netlist> {
    if path.extension().and_then(|e| e.to_str()) != Some(NETLIST_EXTENSION) {
        return Err(SpiceError::InvalidExtension {
            path: path.display().to_string(),
        });
    }
    let content = std::fs::read_to_string(path).map_err(|e| SpiceError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RC: &str = "\
# RC low-pass
title line ignored
.circuit
V1 in GND ac 2 0   # source
R1 in out 1k

C1 out GND 1u
.end
.ac V1 1000
";

    #[test]
    fn test_parse_block_and_ac() {
        let netlist = parse(RC).unwrap();
        let texts: Vec<&str> = netlist.elements.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["V1 in GND ac 2 0", "R1 in out 1k", "C1 out GND 1u"]);
        assert_eq!(netlist.elements[0].number, 4);
        assert_eq!(netlist.elements[2].number, 7);
        assert_eq!(netlist.mode, AnalysisMode::Ac { omega: 1000.0 });
    }

    #[test]
    fn test_dc_without_ac_line() {
        let netlist = parse(".circuit\nR1 a GND 1\n.end\n").unwrap();
        assert_eq!(netlist.mode, AnalysisMode::Dc);
        assert_eq!(netlist.elements.len(), 1);
    }

    #[test]
    fn test_ac_before_end_is_not_a_directive() {
        // Lines before .circuit are ignored, including a stray .ac
        let netlist = parse(".ac V1 50\n.circuit\nR1 a GND 1\n.end\n").unwrap();
        assert_eq!(netlist.mode, AnalysisMode::Dc);
    }

    #[test]
    fn test_last_ac_wins() {
        let netlist = parse(".circuit\n.end\n.ac V1 10\n.ac V2 20\n").unwrap();
        assert_eq!(netlist.mode, AnalysisMode::Ac { omega: 20.0 });
    }

    #[test]
    fn test_missing_directives() {
        assert!(matches!(
            parse("R1 a b 1\n.end\n"),
            Err(SpiceError::MissingDirective { directive: ".circuit" })
        ));
        assert!(matches!(
            parse(".circuit\nR1 a b 1\n"),
            Err(SpiceError::MissingDirective { directive: ".end" })
        ));
    }

    #[test]
    fn test_end_before_circuit() {
        match parse(".end\n.circuit\nR1 a b 1\n") {
            Err(SpiceError::InvalidDirective { line, .. }) => assert_eq!(line, 1),
            other => panic!("expected InvalidDirective, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_frequency() {
        assert!(matches!(
            parse(".circuit\n.end\n.ac V1 fast\n"),
            Err(SpiceError::InvalidDirective { line: 3, .. })
        ));
        assert!(matches!(
            parse(".circuit\n.end\n.ac V1 -5\n"),
            Err(SpiceError::InvalidFrequency { .. })
        ));
        assert!(matches!(
            parse(".circuit\n.end\n.ac\n"),
            Err(SpiceError::InvalidDirective { .. })
        ));
    }

    #[test]
    fn test_circuit_keeps_file_line_numbers() {
        let err = parse(".circuit\nR1 a GND 1\n\nX9 a GND 1\n.end\n")
            .unwrap()
            .circuit()
            .unwrap_err();
        assert!(matches!(err, SpiceError::InvalidElementType { line: 4, .. }));
    }

    #[test]
    fn test_parse_file_requires_extension() {
        let err = parse_file(Path::new("circuit.txt")).unwrap_err();
        assert!(matches!(err, SpiceError::InvalidExtension { .. }));
    }

    #[test]
    fn test_parse_file_missing() {
        let err = parse_file(Path::new("definitely/not/here.netlist")).unwrap_err();
        assert!(matches!(err, SpiceError::FileReadError { .. }));
    }
}
