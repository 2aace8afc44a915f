use std::fs;
use std::path::{Path, PathBuf};

use eyre::{bail, ensure, Context, Result};

/// Load the two sequences to align.
///
/// A single file holds both sequences separated by the first blank line, two
/// files hold one sequence each. Sequences may span multiple lines; lines are
/// trimmed and concatenated.
pub fn read(paths: &[PathBuf]) -> Result<(Vec<u8>, Vec<u8>)> {
    match paths {
        [single] => {
            let text = fs::read_to_string(single)
                .wrap_err_with(|| format!("Failed to read {}", single.display()))?;
            parse_paired(&text)
                .wrap_err_with(|| format!("Malformed input in {}", single.display()))
        }
        [first, second] => Ok((read_single(first)?, read_single(second)?)),
        _ => bail!("Expected one or two input files, got {}", paths.len()),
    }
}

fn read_single(path: &Path) -> Result<Vec<u8>> {
    let text =
        fs::read_to_string(path).wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    Ok(concat_lines(&text))
}

fn concat_lines(text: &str) -> Vec<u8> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .flat_map(|line| line.bytes())
        .collect()
}

fn parse_paired(text: &str) -> Result<(Vec<u8>, Vec<u8>)> {
    let mut first = Vec::new();
    let mut second = Vec::new();
    let mut separated = false;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !first.is_empty() {
                separated = true;
            }
            continue;
        }
        if separated {
            second.extend(line.bytes());
        } else {
            first.extend(line.bytes());
        }
    }

    ensure!(
        separated,
        "Expected two sequences separated by a blank line"
    );
    Ok((first, second))
}
