use eyre::Result;
use num::Zero;

use alnkit_core_rs::Alignable;

use super::alignment::Alignment;
use super::matrix::Mat;
use super::scoring;
use super::trace::{self, Direction};

/// Needleman-Wunsch global alignment with linear gap penalties.
///
/// Quadratic time and memory. Ties are resolved diagonal-first, then towards
/// a gap in the second sequence, then towards a gap in the first one.
pub struct Aligner<Scheme: scoring::Scheme> {
    scoring: Scheme,
}

impl<Scheme: scoring::Scheme> Aligner<Scheme>
where
    <Scheme as scoring::Scheme>::Symbol: PartialEq,
{
    pub fn new(scoring: Scheme) -> Self {
        Self { scoring }
    }

    pub fn align<S1, S2>(
        &self,
        seq1: &S1,
        seq2: &S2,
    ) -> Result<Alignment<<Scheme as scoring::Scheme>::Score, u32>>
    where
        S1: Alignable<Symbol = <Scheme as scoring::Scheme>::Symbol>,
        S2: Alignable<Symbol = <Scheme as scoring::Scheme>::Symbol>,
    {
        align_with(&self.scoring, seq1, seq2)
    }
}

pub(crate) fn align_with<Sch, S1, S2>(
    scoring: &Sch,
    seq1: &S1,
    seq2: &S2,
) -> Result<Alignment<<Sch as scoring::Scheme>::Score, u32>>
where
    Sch: scoring::Scheme,
    <Sch as scoring::Scheme>::Symbol: PartialEq,
    S1: Alignable<Symbol = <Sch as scoring::Scheme>::Symbol>,
    S2: Alignable<Symbol = <Sch as scoring::Scheme>::Symbol>,
{
    let (n, m) = (seq1.len(), seq2.len());
    let zero = <Sch as scoring::Scheme>::Score::zero();

    let mut scores = Mat::filled(n + 1, m + 1, zero)?;
    let mut moves = Mat::filled(n + 1, m + 1, Direction::Diag)?;

    for j in 1..=m {
        scores.set(0, j, scores.get(0, j - 1) + scoring.seq1_gap(j - 1));
        moves.set(0, j, Direction::Left);
    }
    for i in 1..=n {
        scores.set(i, 0, scores.get(i - 1, 0) + scoring.seq2_gap(i - 1));
        moves.set(i, 0, Direction::Up);
    }

    for i in 1..=n {
        for j in 1..=m {
            let diag = scores.get(i - 1, j - 1)
                + scoring.score(i - 1, seq1.at(i - 1), j - 1, seq2.at(j - 1));
            let up = scores.get(i - 1, j) + scoring.seq2_gap(i - 1);
            let left = scores.get(i, j - 1) + scoring.seq1_gap(j - 1);

            let (score, direction) = if diag >= up && diag >= left {
                (diag, Direction::Diag)
            } else if up >= left {
                (up, Direction::Up)
            } else {
                (left, Direction::Left)
            };
            scores.set(i, j, score);
            moves.set(i, j, direction);
        }
    }

    let steps = trace::walk(&moves, seq1, seq2)?;
    Ok(Alignment::new(scores.get(n, m), steps))
}
