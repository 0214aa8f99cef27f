// Parser helpers shared by every source.
//
// Each helper returns `Result<_, Defaulted>`. Whether a `Defaulted` becomes a
// field default or a fatal `ProcfsError::Parse` is decided by the caller.

use crate::error::{Defaulted, ProcfsError};
use std::path::Path;
use std::str::FromStr;

/// Read a whole source into memory.
pub(crate) fn read_source(path: &Path) -> Result<String, ProcfsError> {
    std::fs::read_to_string(path).map_err(|e| ProcfsError::io(path, e))
}

/// First line of `text`, or `Defaulted` when the source is empty.
pub(crate) fn first_line<'a>(source: &Path, text: &'a str) -> Result<&'a str, Defaulted> {
    text.lines()
        .next()
        .filter(|l| !l.trim().is_empty())
        .ok_or_else(|| Defaulted::new(source, "empty source"))
}

/// Positional view over the tokens of one fixed-shape line.
pub(crate) struct FixedLine<'a> {
    source: &'a Path,
    tokens: Vec<&'a str>,
}

impl<'a> FixedLine<'a> {
    pub(crate) fn whitespace(source: &'a Path, line: &'a str) -> Self {
        Self {
            source,
            tokens: line.split_whitespace().collect(),
        }
    }

    /// Fails unless the line has at least `count` tokens.
    pub(crate) fn require(&self, count: usize) -> Result<(), Defaulted> {
        if self.tokens.len() < count {
            return Err(Defaulted::new(
                self.source,
                format!("expected {} fields, got {}", count, self.tokens.len()),
            ));
        }
        Ok(())
    }

    pub(crate) fn token(&self, index: usize) -> Result<&'a str, Defaulted> {
        self.tokens
            .get(index)
            .copied()
            .ok_or_else(|| Defaulted::new(self.source, format!("missing field {}", index + 1)))
    }

    /// Token at `index` (0-based) parsed as `T`.
    pub(crate) fn field<T: FromStr>(&self, index: usize) -> Result<T, Defaulted> {
        let tok = self.token(index)?;
        tok.parse().map_err(|_| {
            Defaulted::new(
                self.source,
                format!("field {} is not numeric: {:?}", index + 1, tok),
            )
        })
    }

    /// Token at `index` of the form `a<sep>b`, both halves parsed as `T`.
    pub(crate) fn split_field<T: FromStr>(&self, index: usize, sep: char) -> Result<(T, T), Defaulted> {
        let tok = self.token(index)?;
        let bad = || {
            Defaulted::new(
                self.source,
                format!("field {} is not of the form a{}b: {:?}", index + 1, sep, tok),
            )
        };
        let (a, b) = tok.split_once(sep).ok_or_else(bad)?;
        Ok((a.parse().map_err(|_| bad())?, b.parse().map_err(|_| bad())?))
    }
}

/// `Key: value` lines of a status-style block. Lines without a colon are skipped.
pub(crate) fn key_values(text: &str) -> impl Iterator<Item = (&str, &str)> {
    text.lines().filter_map(|line| {
        let (key, value) = line.split_once(':')?;
        Some((key.trim(), value.trim()))
    })
}

/// First token of a `Key: value [unit]` value parsed as `T`.
pub(crate) fn value_field<T: FromStr>(source: &Path, key: &str, value: &str) -> Result<T, Defaulted> {
    value
        .split_whitespace()
        .next()
        .and_then(|tok| tok.parse().ok())
        .ok_or_else(|| Defaulted::new(source, format!("{}: unparsable value {:?}", key, value)))
}

/// Keep only digits and `.` then parse; anything unparsable is 0.0.
pub(crate) fn sanitized_number(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned.parse().unwrap_or(0.0)
}
