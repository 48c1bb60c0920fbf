//! Parse a recorded pin trace into decoder input.
//!
//! Traces are plain text, one observation per line: `A B` for an edge sample
//! of both contacts (two digits), `button L` for a button level. Blank lines
//! and `#` comments are skipped. Handy for replaying captures from a real
//! encoder without any hardware attached.

use anyhow::{bail, Result};
use regex::Regex;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Step {
    Pins(bool, bool),
    Button(bool),
}

pub fn parse_trace(contents: &str) -> Result<Vec<Step>> {
    let pins = Regex::new(r"^([01])\s+([01])$")?;
    let button = Regex::new(r"^button\s+([01])$")?;

    let mut steps = Vec::new();
    for (n, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(caps) = pins.captures(line) {
            steps.push(Step::Pins(&caps[1] == "1", &caps[2] == "1"));
        } else if let Some(caps) = button.captures(line) {
            steps.push(Step::Button(&caps[1] == "1"));
        } else {
            bail!("invalid trace line {}: {:?}", n + 1, line);
        }
    }
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pins_and_button() {
        let trace = "# one click, then a press\n1 0\n1 1\n0 1\n0 0\n\nbutton 0\nbutton 1\n";
        let steps = parse_trace(trace).unwrap();
        assert_eq!(
            steps,
            vec![
                Step::Pins(true, false),
                Step::Pins(true, true),
                Step::Pins(false, true),
                Step::Pins(false, false),
                Step::Button(false),
                Step::Button(true),
            ]
        );
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_trace("1 0\n2 0\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn empty_trace_is_empty() {
        assert!(parse_trace("\n# nothing here\n").unwrap().is_empty());
    }
}
