use eyre::Result;
use num::{Bounded, One, Zero};

use alnkit_core_rs::Alignable;

use super::alignment::Alignment;
use super::matrix::Mat;
use super::scoring;
use super::trace::{self, Direction};

/// Needleman-Wunsch global alignment with affine gap penalties (Gotoh).
///
/// Three score layers are tracked per cell: the overall best, the best ending
/// in a gap in the first sequence and the best ending in a gap in the second
/// one. Opening a gap run costs open + extend, each further unit costs extend,
/// so with a zero open penalty the scores degenerate to the linear-gap ones.
pub struct Aligner<Scheme: scoring::AffineScheme> {
    scoring: Scheme,
}

impl<Scheme: scoring::AffineScheme> Aligner<Scheme>
where
    <Scheme as scoring::AffineScheme>::Symbol: PartialEq,
{
    pub fn new(scoring: Scheme) -> Self {
        Self { scoring }
    }

    pub fn align<S1, S2>(
        &self,
        seq1: &S1,
        seq2: &S2,
    ) -> Result<Alignment<<Scheme as scoring::AffineScheme>::Score, u32>>
    where
        S1: Alignable<Symbol = <Scheme as scoring::AffineScheme>::Symbol>,
        S2: Alignable<Symbol = <Scheme as scoring::AffineScheme>::Symbol>,
    {
        let (n, m) = (seq1.len(), seq2.len());
        let scoring = &self.scoring;
        let zero = <Scheme as scoring::AffineScheme>::Score::zero();
        let one = <Scheme as scoring::AffineScheme>::Score::one();

        // Low enough to lose every comparison, high enough to survive a few
        // penalty additions without wrapping around.
        let four = (one + one) + (one + one);
        let sentinel = <Scheme as scoring::AffineScheme>::Score::min_value() / four;

        let mut best = Mat::filled(n + 1, m + 1, sentinel)?;
        let mut gap1 = Mat::filled(n + 1, m + 1, sentinel)?;
        let mut gap2 = Mat::filled(n + 1, m + 1, sentinel)?;
        let mut moves = Mat::filled(n + 1, m + 1, Direction::Diag)?;

        best.set(0, 0, zero);

        let mut acc = zero;
        for j in 1..=m {
            if j == 1 {
                acc = acc + scoring.seq1_gap_open(0);
            }
            acc = acc + scoring.seq1_gap_extend(j - 1);
            gap1.set(0, j, acc);
            best.set(0, j, acc);
            moves.set(0, j, Direction::Left);
        }
        let mut acc = zero;
        for i in 1..=n {
            if i == 1 {
                acc = acc + scoring.seq2_gap_open(0);
            }
            acc = acc + scoring.seq2_gap_extend(i - 1);
            gap2.set(i, 0, acc);
            best.set(i, 0, acc);
            moves.set(i, 0, Direction::Up);
        }

        for i in 1..=n {
            for j in 1..=m {
                let open1 = scoring.seq1_gap_open(j - 1) + scoring.seq1_gap_extend(j - 1);
                let g1 = (gap1.get(i, j - 1) + scoring.seq1_gap_extend(j - 1))
                    .max(gap2.get(i - 1, j) + open1)
                    .max(best.get(i, j - 1) + open1);

                let open2 = scoring.seq2_gap_open(i - 1) + scoring.seq2_gap_extend(i - 1);
                let g2 = (gap2.get(i - 1, j) + scoring.seq2_gap_extend(i - 1))
                    .max(gap1.get(i, j - 1) + open2)
                    .max(best.get(i - 1, j) + open2);

                let diag = best.get(i - 1, j - 1)
                    + scoring.score(i - 1, seq1.at(i - 1), j - 1, seq2.at(j - 1));

                gap1.set(i, j, g1);
                gap2.set(i, j, g2);

                let (score, direction) = if diag >= g2 && diag >= g1 {
                    (diag, Direction::Diag)
                } else if g2 >= g1 {
                    (g2, Direction::Up)
                } else {
                    (g1, Direction::Left)
                };
                best.set(i, j, score);
                moves.set(i, j, direction);
            }
        }

        let steps = trace::walk(&moves, seq1, seq2)?;
        Ok(Alignment::new(best.get(n, m), steps))
    }
}
