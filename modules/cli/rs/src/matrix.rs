use std::fs;
use std::path::Path;

use eyre::{bail, ensure, eyre, Context, Result};

use alnkit_alignment_rs::pairwise::scoring::symbols;

use crate::Score;

/// Parse a substitution matrix file.
///
/// The first non-empty line lists the alphabet, each following line holds the
/// row symbol and one score per alphabet symbol:
///
/// ```text
///    A  C  G  T
/// A  1 -1 -1 -1
/// C -1  1 -1 -1
/// G -1 -1  1 -1
/// T -1 -1 -1  1
/// ```
pub fn read(path: &Path) -> Result<symbols::Matrix<Score>> {
    let text =
        fs::read_to_string(path).wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    parse(&text).wrap_err_with(|| format!("Malformed substitution matrix in {}", path.display()))
}

fn parse(text: &str) -> Result<symbols::Matrix<Score>> {
    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());

    let header = lines
        .next()
        .ok_or_else(|| eyre!("The matrix file is empty"))?;
    let alphabet: Vec<u8> = header
        .split_whitespace()
        .map(|token| token.as_bytes()[0])
        .collect();
    let k = alphabet.len();

    let mut table = Vec::with_capacity(k * k);
    for symbol in &alphabet {
        let line = lines
            .next()
            .ok_or_else(|| eyre!("Missing matrix row for symbol {:?}", *symbol as char))?;
        let mut tokens = line.split_whitespace();

        let label = tokens
            .next()
            .ok_or_else(|| eyre!("Empty matrix row for symbol {:?}", *symbol as char))?;
        ensure!(
            label.as_bytes()[0] == *symbol,
            "Matrix row {:?} doesn't match the alphabet order, expected {:?}",
            label,
            *symbol as char
        );

        let mut scores = 0;
        for token in tokens {
            table.push(
                token
                    .parse::<Score>()
                    .wrap_err_with(|| format!("Invalid score {:?}", token))?,
            );
            scores += 1;
        }
        ensure!(
            scores == k,
            "Matrix row {:?} must hold {} scores, got {}",
            *symbol as char,
            k,
            scores
        );
    }

    if let Some(line) = lines.next() {
        bail!("Unexpected trailing line {:?}", line);
    }

    symbols::Matrix::new(&alphabet, &table)
}

/// Make sure every symbol of the sequence is covered by the matrix alphabet.
pub fn validate(matrix: &symbols::Matrix<Score>, name: &str, seq: &[u8]) -> Result<()> {
    for symbol in seq {
        ensure!(
            matrix.contains(*symbol),
            "Symbol {:?} in {} is missing from the substitution matrix",
            *symbol as char,
            name
        );
    }
    Ok(())
}
