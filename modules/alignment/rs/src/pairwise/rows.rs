use std::mem;

use eyre::{eyre, Result};
use num::Zero;

use alnkit_core_rs::Alignable;

use super::scoring;

/// Compute the last row of the Needleman-Wunsch score matrix using two rolling
/// rows of memory.
pub fn last_row<Sch, S1, S2>(
    seq1: &S1,
    seq2: &S2,
    scoring: &Sch,
) -> Result<Vec<<Sch as scoring::Scheme>::Score>>
where
    Sch: scoring::Scheme,
    S1: Alignable<Symbol = <Sch as scoring::Scheme>::Symbol>,
    S2: Alignable<Symbol = <Sch as scoring::Scheme>::Symbol>,
{
    let (n, m) = (seq1.len(), seq2.len());
    let zero = <Sch as scoring::Scheme>::Score::zero();

    let mut prev = Vec::new();
    let mut curr = Vec::new();
    for row in [&mut prev, &mut curr] {
        row.try_reserve_exact(m + 1)
            .map_err(|_| eyre!("Not enough memory for a score row of {} elements", m + 1))?;
        row.resize(m + 1, zero);
    }

    for j in 1..=m {
        prev[j] = prev[j - 1] + scoring.seq1_gap(j - 1);
    }

    for i in 1..=n {
        curr[0] = prev[0] + scoring.seq2_gap(i - 1);
        for j in 1..=m {
            let diag = prev[j - 1] + scoring.score(i - 1, seq1.at(i - 1), j - 1, seq2.at(j - 1));
            let up = prev[j] + scoring.seq2_gap(i - 1);
            let left = curr[j - 1] + scoring.seq1_gap(j - 1);
            curr[j] = diag.max(up).max(left);
        }
        mem::swap(&mut prev, &mut curr);
    }

    Ok(prev)
}
