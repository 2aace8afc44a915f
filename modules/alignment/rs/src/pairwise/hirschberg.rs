use eyre::Result;
use itertools::izip;
use num::Zero;

use alnkit_core_rs::Reversed;

use super::alignment::{Alignment, Op, Step};
use super::scoring;
use super::{global, rows};

/// Hirschberg divide-and-conquer global alignment.
///
/// Produces the same scores as [`global::Aligner`] in linear memory by
/// recursively splitting the first sequence in half and locating the optimal
/// split point of the second one from two last-row passes. Gap penalties are
/// taken as position-invariant: recursive subproblems score gaps by their
/// local offsets.
pub struct Aligner<Scheme: scoring::Scheme> {
    scoring: Scheme,
}

impl<Scheme: scoring::Scheme> Aligner<Scheme>
where
    <Scheme as scoring::Scheme>::Symbol: PartialEq + Copy,
{
    pub fn new(scoring: Scheme) -> Self {
        Self { scoring }
    }

    pub fn align(
        &self,
        seq1: &[<Scheme as scoring::Scheme>::Symbol],
        seq2: &[<Scheme as scoring::Scheme>::Symbol],
    ) -> Result<Alignment<<Scheme as scoring::Scheme>::Score, u32>> {
        let mut steps = Vec::new();
        let score = self.divide(seq1, seq2, &mut steps)?;
        Step::collapse(&mut steps);
        Ok(Alignment::new(score, steps))
    }

    fn divide(
        &self,
        seq1: &[<Scheme as scoring::Scheme>::Symbol],
        seq2: &[<Scheme as scoring::Scheme>::Symbol],
        steps: &mut Vec<Step<u32>>,
    ) -> Result<<Scheme as scoring::Scheme>::Score> {
        let zero = <Scheme as scoring::Scheme>::Score::zero();

        if seq1.is_empty() {
            let mut score = zero;
            for j in 0..seq2.len() {
                score = score + self.scoring.seq1_gap(j);
            }
            if !seq2.is_empty() {
                steps.push(Step::new(Op::GapFirst, u32::try_from(seq2.len())?)?);
            }
            return Ok(score);
        }
        if seq2.is_empty() {
            let mut score = zero;
            for i in 0..seq1.len() {
                score = score + self.scoring.seq2_gap(i);
            }
            steps.push(Step::new(Op::GapSecond, u32::try_from(seq1.len())?)?);
            return Ok(score);
        }

        // A single symbol on either side can't be split further, fall back to
        // the quadratic algorithm (at most a 2 x (m + 1) problem).
        if seq1.len() == 1 || seq2.len() == 1 {
            let (score, substeps) = global::align_with(&self.scoring, &seq1, &seq2)?.dissolve();
            steps.extend(substeps);
            return Ok(score);
        }

        let mid = seq1.len() / 2;
        let forward = rows::last_row(&&seq1[..mid], &seq2, &self.scoring)?;
        let backward = rows::last_row(
            &Reversed::new(&seq1[mid..]),
            &Reversed::new(seq2),
            &self.scoring,
        )?;

        // First index maximizing the joined score
        let mut split = 0;
        let mut best = forward[0] + backward[backward.len() - 1];
        for (j, (fwd, bwd)) in izip!(forward.iter(), backward.iter().rev()).enumerate() {
            if *fwd + *bwd > best {
                best = *fwd + *bwd;
                split = j;
            }
        }

        let left = self.divide(&seq1[..mid], &seq2[..split], steps)?;
        let right = self.divide(&seq1[mid..], &seq2[split..], steps)?;
        Ok(left + right)
    }
}
