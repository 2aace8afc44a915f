use std::fmt::Display;

use derive_getters::{Dissolve, Getters};
use derive_more::{Constructor, From, Into};
use eyre::{ensure, Result};

use alnkit_core_rs::num::PrimUInt;
use alnkit_core_rs::Alignable;

use crate::Score;

use super::op::Op;
use super::step::Step;

/// A global alignment between two sequences.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Constructor, Dissolve, From, Into)]
pub struct Alignment<S, Len>
where
    S: Score,
    Len: PrimUInt,
{
    score: S,
    steps: Vec<Step<Len>>,
}

impl<S, Len> Alignment<S, Len>
where
    S: Score,
    Len: PrimUInt,
{
    /// Checks if the alignment is empty.
    pub fn is_empty(&self) -> bool {
        // Empty alignment is an alignment with no steps.
        // Note: length of each step is guaranteed to be non-zero.
        self.steps.is_empty()
    }

    /// Returns the total length of the alignment - the sum of all step lengths.
    pub fn len<Acc: PrimUInt + From<Len>>(&self) -> Acc {
        let mut total = Acc::zero();
        for step in &self.steps {
            total = total + <Acc as From<Len>>::from(*step.len());
        }
        total
    }

    /// Returns the RLE representation of the alignment.
    pub fn rle(&self) -> String
    where
        Len: Display,
    {
        Step::rle_string(self.steps.iter())
    }

    /// Materialize the two gap-padded rows of the alignment.
    ///
    /// The rows have equal lengths, no column carries the gap marker in both of them, and
    /// removing the gap markers restores the original sequences exactly.
    pub fn gapped<S1, S2>(
        &self,
        seq1: &S1,
        seq2: &S2,
        gap: S1::Symbol,
    ) -> Result<(Vec<S1::Symbol>, Vec<S1::Symbol>)>
    where
        S1: Alignable,
        S2: Alignable<Symbol = S1::Symbol>,
        S1::Symbol: Copy,
        u64: From<Len>,
    {
        let total = self.len::<u64>() as usize;
        let (mut row1, mut row2) = (Vec::with_capacity(total), Vec::with_capacity(total));
        let (mut s1, mut s2) = (0usize, 0usize);

        for step in &self.steps {
            let len = step
                .len()
                .to_usize()
                .ok_or_else(|| eyre::eyre!("Step length doesn't fit into usize"))?;
            match step.op() {
                Op::GapFirst => {
                    ensure!(
                        s2 + len <= seq2.len(),
                        "Alignment steps overrun the second sequence"
                    );
                    for _ in 0..len {
                        row1.push(gap);
                        row2.push(*seq2.at(s2));
                        s2 += 1;
                    }
                }
                Op::GapSecond => {
                    ensure!(
                        s1 + len <= seq1.len(),
                        "Alignment steps overrun the first sequence"
                    );
                    for _ in 0..len {
                        row1.push(*seq1.at(s1));
                        row2.push(gap);
                        s1 += 1;
                    }
                }
                Op::Match | Op::Mismatch => {
                    ensure!(
                        s1 + len <= seq1.len() && s2 + len <= seq2.len(),
                        "Alignment steps overrun the sequences"
                    );
                    for _ in 0..len {
                        row1.push(*seq1.at(s1));
                        row2.push(*seq2.at(s2));
                        s1 += 1;
                        s2 += 1;
                    }
                }
            }
        }

        ensure!(
            s1 == seq1.len() && s2 == seq2.len(),
            "Alignment steps don't cover the sequences end to end"
        );
        Ok((row1, row2))
    }
}
