use crate::pairwise::scoring::Score;

/// Linear per-position gap penalties.
pub trait Scorer {
    type Score: Score;

    /// Penalty for aligning the given position of the second sequence against a gap
    /// in the first sequence.
    fn seq1_gap(&self, pos: usize) -> Self::Score;

    /// Penalty for aligning the given position of the first sequence against a gap
    /// in the second sequence.
    fn seq2_gap(&self, pos: usize) -> Self::Score;
}

pub trait PosInvariantScorer {
    type GapScore: Score;

    fn gap(&self) -> Self::GapScore;
}

impl<T: PosInvariantScorer> Scorer for T {
    type Score = T::GapScore;

    #[inline(always)]
    fn seq1_gap(&self, _: usize) -> Self::Score {
        self.gap()
    }

    #[inline(always)]
    fn seq2_gap(&self, _: usize) -> Self::Score {
        self.gap()
    }
}

/// Constant gap penalty, identical for both sequences.
#[derive(Copy, Clone)]
pub struct Linear<S: Score> {
    pub gap: S,
}

impl<S: Score> PosInvariantScorer for Linear<S> {
    type GapScore = S;

    #[inline(always)]
    fn gap(&self) -> Self::GapScore {
        self.gap
    }
}

/// Affine per-position gap penalties: opening a gap run costs open + extend,
/// each further unit costs extend.
pub trait AffineScorer {
    type Score: Score;

    fn seq1_gap_open(&self, pos: usize) -> Self::Score;
    fn seq1_gap_extend(&self, pos: usize) -> Self::Score;
    fn seq2_gap_open(&self, pos: usize) -> Self::Score;
    fn seq2_gap_extend(&self, pos: usize) -> Self::Score;
}

pub trait PosInvariantAffineScorer {
    type GapScore: Score;

    fn gap_open(&self) -> Self::GapScore;
    fn gap_extend(&self) -> Self::GapScore;
}

impl<T: PosInvariantAffineScorer> AffineScorer for T {
    type Score = T::GapScore;

    #[inline(always)]
    fn seq1_gap_open(&self, _: usize) -> Self::Score {
        self.gap_open()
    }

    #[inline(always)]
    fn seq1_gap_extend(&self, _: usize) -> Self::Score {
        self.gap_extend()
    }

    #[inline(always)]
    fn seq2_gap_open(&self, _: usize) -> Self::Score {
        self.gap_open()
    }

    #[inline(always)]
    fn seq2_gap_extend(&self, _: usize) -> Self::Score {
        self.gap_extend()
    }
}

/// Constant affine gap penalties, identical for both sequences.
#[derive(Copy, Clone)]
pub struct Affine<S: Score> {
    pub open: S,
    pub extend: S,
}

impl<S: Score> PosInvariantAffineScorer for Affine<S> {
    type GapScore = S;

    #[inline(always)]
    fn gap_open(&self) -> Self::GapScore {
        self.open
    }

    #[inline(always)]
    fn gap_extend(&self) -> Self::GapScore {
        self.extend
    }
}
