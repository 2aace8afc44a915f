use eyre::Result;

use alnkit_core_rs::Alignable;

use super::alignment::{Op, Step};
use super::matrix::Mat;

/// Predecessor of a cell in the dynamic programming matrix.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum Direction {
    Diag,
    Up,
    Left,
}

/// Walk the move matrix from the bottom-right corner back to the origin and
/// reconstruct the alignment steps in left-to-right order.
///
/// Cells on the top row / left column must be pre-tagged Left / Up so the walk
/// always terminates at (0, 0).
pub(crate) fn walk<S1, S2>(moves: &Mat<Direction>, seq1: &S1, seq2: &S2) -> Result<Vec<Step<u32>>>
where
    S1: Alignable,
    S2: Alignable<Symbol = S1::Symbol>,
    S1::Symbol: PartialEq,
{
    let (mut i, mut j) = (seq1.len(), seq2.len());
    let mut steps = Vec::with_capacity(i.max(j));

    while i > 0 || j > 0 {
        let op = match moves.get(i, j) {
            Direction::Diag => {
                i -= 1;
                j -= 1;
                if seq1.at(i) == seq2.at(j) {
                    Op::Match
                } else {
                    Op::Mismatch
                }
            }
            Direction::Up => {
                i -= 1;
                Op::GapSecond
            }
            Direction::Left => {
                j -= 1;
                Op::GapFirst
            }
        };
        steps.push(Step::new(op, 1u32)?);
    }

    steps.reverse();
    Step::collapse(&mut steps);
    Ok(steps)
}
