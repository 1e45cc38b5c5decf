use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{MaxWeightError, Result};
use crate::models::FoodItem;

/// Load a food catalog from a caret-delimited text file.
///
/// Line 1 is a header and is discarded regardless of content. Every other
/// line must be `description^calories^weight`. A line with a field count
/// other than 3 aborts the whole load; a line whose numeric fields fail to
/// parse (or fail item validation) is skipped silently.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<FoodItem>> {
    let file = File::open(path)?;
    read_catalog(BufReader::new(file))
}

/// Parse a catalog from any buffered source. Same contract as
/// [`load_catalog`]; split out so tests can feed in-memory data.
pub fn read_catalog<R: BufRead>(reader: R) -> Result<Vec<FoodItem>> {
    let mut catalog = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;

        // Header row
        if line_number == 1 {
            continue;
        }

        let fields: Vec<&str> = line.split('^').collect();
        if fields.len() != 3 {
            return Err(MaxWeightError::MalformedRecord {
                line: line_number,
                found: fields.len(),
            });
        }

        let (Some(calories), Some(weight)) =
            (parse_number(fields[1]), parse_number(fields[2]))
        else {
            continue;
        };

        if let Ok(item) = FoodItem::new(fields[0], calories, weight) {
            catalog.push(item);
        }
    }

    Ok(catalog)
}

/// Parse a numeric field with stream-extraction semantics: leading
/// whitespace is skipped and the longest parseable prefix wins, so trailing
/// garbage is truncated rather than flagged. Returns `None` when no prefix
/// parses at all.
fn parse_number(field: &str) -> Option<f64> {
    let trimmed = field.trim_start();
    let mut best = None;

    for end in 1..=trimmed.len() {
        if !trimmed.is_char_boundary(end) {
            continue;
        }
        if let Ok(value) = trimmed[..end].parse::<f64>() {
            best = Some(value);
        }
    }

    best
}
