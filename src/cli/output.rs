//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, StednavnArgs};
use crate::error::Result;
use crate::gazetteer::extractor::PlaceMatch;

/// Matches found in one input file.
#[derive(Debug, Serialize, Deserialize)]
pub struct FileMatches {
    pub path: String,
    pub matches: Vec<PlaceMatch>,
}

/// Print extraction results to stdout.
pub fn output_matches(results: &[FileMatches], offsets: bool, args: &StednavnArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.output_format {
        OutputFormat::Text => write_matches_text(&mut out, results, offsets),
        OutputFormat::Json => write_json(&mut out, results, args.pretty),
    }
}

/// Print the dictionary to stdout.
pub fn output_dictionary(names: &[String], args: &StednavnArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.output_format {
        OutputFormat::Text => {
            for name in names {
                writeln!(out, "{name}")?;
            }
            Ok(())
        }
        OutputFormat::Json => write_json(&mut out, names, args.pretty),
    }
}

/// One match per line. With several files each line is prefixed by the path;
/// with offsets the raw-text byte range precedes the name.
fn write_matches_text<W: Write>(out: &mut W, results: &[FileMatches], offsets: bool) -> Result<()> {
    let with_path = results.len() > 1;
    for result in results {
        for place in &result.matches {
            if with_path {
                write!(out, "{}:", result.path)?;
            }
            if offsets {
                write!(out, "{}\t{}\t", place.original_start, place.original_end)?;
            }
            writeln!(out, "{}", place.name)?;
        }
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(name: &str, start: usize) -> PlaceMatch {
        PlaceMatch {
            name: name.to_string(),
            rank: 0,
            start,
            end: start + name.len(),
            original_start: start,
            original_end: start + name.len(),
        }
    }

    #[test]
    fn test_text_single_file() {
        let results = vec![FileMatches {
            path: "a.txt".to_string(),
            matches: vec![place("Odense", 14), place("Fyn", 24)],
        }];
        let mut out = Vec::new();
        write_matches_text(&mut out, &results, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Odense\nFyn\n");
    }

    #[test]
    fn test_text_offsets_and_paths() {
        let results = vec![
            FileMatches {
                path: "a.txt".to_string(),
                matches: vec![place("Ry", 0)],
            },
            FileMatches {
                path: "b.txt".to_string(),
                matches: vec![place("Køge", 4)],
            },
        ];
        let mut out = Vec::new();
        write_matches_text(&mut out, &results, true).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "a.txt:0\t2\tRy\nb.txt:4\t9\tKøge\n"
        );
    }

    #[test]
    fn test_json() {
        let results = vec![FileMatches {
            path: "a.txt".to_string(),
            matches: vec![place("Ry", 0)],
        }];
        let mut out = Vec::new();
        write_json(&mut out, results.as_slice(), false).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["path"], "a.txt");
        assert_eq!(value[0]["matches"][0]["name"], "Ry");
        assert_eq!(value[0]["matches"][0]["original_end"], 2);
    }
}
