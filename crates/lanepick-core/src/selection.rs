// Index/range selection over a numbered list.
//
// Input format: comma-separated tokens, each either a 1-based index `z` or an
// inclusive range `[x-y]`. Results are 0-based, in input order, duplicates
// kept. Empty input selects nothing.

use tracing::debug;

use crate::console::Console;
use crate::error::{PickerError, SelectionError};

pub const FORMAT_HINT: &str = "Format [x-y],z,..., where [x-y] is a range and\n\
                               z is a single number next to a champion: ";

/// Parse a selection string into 0-based indices into a list of `len`
/// entries. Every index and range end is checked against `len` before any
/// range is expanded.
pub fn parse_indices(input: &str, len: usize) -> Result<Vec<usize>, SelectionError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut indices = Vec::new();
    for token in input.split(',').map(str::trim) {
        if let Some(inner) = token.strip_prefix('[') {
            let inner = inner
                .strip_suffix(']')
                .ok_or_else(|| SelectionError::BadRange(token.to_string()))?;
            let (start, end) = inner
                .split_once('-')
                .ok_or_else(|| SelectionError::BadRange(token.to_string()))?;
            let start = parse_one_based(start.trim())?;
            let end = parse_one_based(end.trim())?;
            if start > end {
                continue;
            }
            check_bounds(end, len)?;
            indices.extend(start..=end);
        } else {
            let index = parse_one_based(token)?;
            check_bounds(index, len)?;
            indices.push(index);
        }
    }
    Ok(indices)
}

fn check_bounds(index: usize, len: usize) -> Result<(), SelectionError> {
    if index >= len {
        return Err(SelectionError::OutOfBounds {
            index: index + 1,
            len,
        });
    }
    Ok(())
}

fn parse_one_based(token: &str) -> Result<usize, SelectionError> {
    let n: usize = token
        .parse()
        .map_err(|_| SelectionError::NotANumber(token.to_string()))?;
    n.checked_sub(1).ok_or(SelectionError::ZeroIndex)
}

/// Render `names` as a numbered list (`1. name`).
pub fn numbered(names: &[String]) -> String {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{}. {}", i + 1, name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Show `heading` and the numbered list, then read a selection.
///
/// Invalid selections are reported and asked again; after `max_attempts`
/// consecutive failures the session ends with `message`.
pub fn ask_selection(
    console: &mut dyn Console,
    heading: &str,
    names: &[String],
    max_attempts: u32,
    message: &'static str,
) -> Result<Vec<usize>, PickerError> {
    console.show(heading)?;
    console.show(&numbered(names))?;
    let mut misses = 0;
    loop {
        let input = console.ask(FORMAT_HINT)?;
        match parse_indices(&input, names.len()) {
            Ok(indices) => return Ok(indices),
            Err(err) => {
                misses += 1;
                debug!(misses, %err, "invalid selection");
                if misses >= max_attempts {
                    return Err(PickerError::InputExhausted {
                        menu: "selection",
                        message,
                    });
                }
                console.show(&format!("Invalid selection: {err}"))?;
            }
        }
    }
}
