//! A line-oriented command language for driving a single `BucketTable`.
//!
//! Each non-blank line is one command:
//!
//! ```text
//! put <key> <value...>
//! get <key>
//! rm <key>
//! dump
//! len
//! ```
//!
//! Lines starting with `#` are comments.

use crate::error::{Result, TableError};
use crate::table::BucketTable;
use log::trace;
use std::io::{BufRead, Write};

/// One parsed command.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Put { key: String, value: String },
    Get { key: String },
    Remove { key: String },
    Dump,
    Len,
}

impl Command {
    /// Parses one script line. Blank lines and comments yield `Ok(None)`.
    ///
    /// `line_no` is only used to label the error.
    pub fn parse(line_no: usize, line: &str) -> Result<Option<Command>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let invalid = || TableError::InvalidCommand {
            line: line_no,
            text: line.to_owned(),
        };
        let (verb, rest) = split_token(line);

        let command = match verb {
            "put" => {
                let (key, value) = split_token(rest);
                if key.is_empty() || value.is_empty() {
                    return Err(invalid());
                }
                Command::Put {
                    key: key.to_owned(),
                    value: value.to_owned(),
                }
            }
            "get" | "rm" => {
                let (key, extra) = split_token(rest);
                if key.is_empty() || !extra.is_empty() {
                    return Err(invalid());
                }
                let key = key.to_owned();
                if verb == "get" {
                    Command::Get { key }
                } else {
                    Command::Remove { key }
                }
            }
            "dump" if rest.is_empty() => Command::Dump,
            "len" if rest.is_empty() => Command::Len,
            _ => return Err(invalid()),
        };
        Ok(Some(command))
    }

    /// Applies the command to `table`, writing any output to `out`.
    pub fn apply<W: Write>(self, table: &mut BucketTable<String>, out: &mut W) -> Result<()> {
        trace!("applying {:?}", self);
        match self {
            Command::Put { key, value } => table.put(key, value),
            Command::Get { key } => match table.get(&key) {
                Some(value) => writeln!(out, "{}", value)?,
                None => writeln!(out, "Key not found")?,
            },
            Command::Remove { key } => writeln!(out, "{}", table.remove(&key))?,
            Command::Dump => write!(out, "{}", table)?,
            Command::Len => writeln!(out, "{}", table.len())?,
        }
        Ok(())
    }
}

/// Runs every line of `input` against `table`, stopping at the first bad line.
pub fn run_script<R: BufRead, W: Write>(
    table: &mut BucketTable<String>,
    input: R,
    out: &mut W,
) -> Result<()> {
    for (i, line) in input.lines().enumerate() {
        let line = line?;
        if let Some(command) = Command::parse(i + 1, &line)? {
            command.apply(table, out)?;
        }
    }
    out.flush()?;
    Ok(())
}

// Splits off the first whitespace-delimited token; the remainder is trimmed.
fn split_token(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(pos) => (&s[..pos], s[pos..].trim()),
        None => (s, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_put_keeps_spaces_in_value() {
        let command = Command::parse(1, "put hobby  Optimizing code ").unwrap();
        assert_eq!(
            command,
            Some(Command::Put {
                key: "hobby".to_owned(),
                value: "Optimizing code".to_owned(),
            })
        );
    }

    #[test]
    fn parse_skips_blank_and_comment_lines() {
        assert_eq!(Command::parse(1, "   ").unwrap(), None);
        assert_eq!(Command::parse(2, "# nothing here").unwrap(), None);
    }

    #[test]
    fn parse_rejects_bad_arity() {
        for line in &["put key", "get", "get a b", "rm", "dump now", "len 1", "set a b"] {
            match Command::parse(7, line) {
                Err(TableError::InvalidCommand { line: 7, .. }) => {}
                other => panic!("expected InvalidCommand for {:?}, got {:?}", line, other),
            }
        }
    }

    #[test]
    fn script_output() {
        let mut table = BucketTable::new(1).unwrap();
        let script = "put a 1\nput b 2\nget a\nget z\nrm a\nrm a\nlen\ndump\n";
        let mut out = Vec::new();
        run_script(&mut table, script.as_bytes(), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1\nKey not found\ntrue\nfalse\n1\nBucket 0: [Key: b, Value: 2] -> nil\n"
        );
    }

    #[test]
    fn script_stops_at_bad_line() {
        let mut table = BucketTable::new(4).unwrap();
        let mut out = Vec::new();
        let err = run_script(&mut table, "put a 1\nbogus\nput b 2\n".as_bytes(), &mut out);

        match err {
            Err(TableError::InvalidCommand { line, text }) => {
                assert_eq!(line, 2);
                assert_eq!(text, "bogus");
            }
            other => panic!("unexpected result {:?}", other),
        }
        assert!(table.contains_key("a"));
        assert!(!table.contains_key("b"));
    }
}
