//! Replay files: durable records of previously chosen input values.
//!
//! One `X<id>,<value>` line per input site. Reading them back makes a
//! re-execution deterministic: every input site sees the same concrete
//! value as the recorded run.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};
use crate::state::InputId;

/// Parse one replay line.
fn parse_line(line_no: usize, line: &str) -> Result<(InputId, i32)> {
    let malformed = || Error::MalformedReplay {
        line: line_no,
        text: line.to_string(),
    };
    let rest = line.strip_prefix('X').ok_or_else(malformed)?;
    let comma = rest.find(',').ok_or_else(malformed)?;
    let id = rest[..comma].parse::<InputId>().map_err(|_| malformed())?;
    let value = rest[comma + 1..].parse::<i32>().map_err(|_| malformed())?;
    Ok((id, value))
}

/// Read a replay file into (input id, concrete value) pairs, in file
/// order. A missing file is an empty replay (a fresh run); a malformed
/// line is fatal.
pub fn read_inputs<P: AsRef<Path>>(path: P) -> Result<Vec<(InputId, i32)>> {
    let file = match File::open(path.as_ref()) {
        Ok(f) => f,
        Err(ref e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    let mut inputs = Vec::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        inputs.push(parse_line(idx + 1, &line)?);
    }
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_lines() {
        assert_eq!(parse_line(1, "X0,42").unwrap(), (0, 42));
        assert_eq!(parse_line(2, "X17,-3").unwrap(), (17, -3));
    }

    #[test]
    fn rejects_missing_prefix() {
        assert!(parse_line(1, "0,42").is_err());
    }

    #[test]
    fn rejects_missing_comma() {
        assert!(parse_line(1, "X042").is_err());
    }

    #[test]
    fn rejects_non_numeric_fields() {
        assert!(parse_line(1, "Xa,42").is_err());
        assert!(parse_line(1, "X0,forty-two").is_err());
        let err = parse_line(3, "X0,").unwrap_err();
        match err {
            Error::MalformedReplay { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_an_empty_replay() {
        let inputs = read_inputs("/nonexistent/replay/input.txt").unwrap();
        assert!(inputs.is_empty());
    }
}
