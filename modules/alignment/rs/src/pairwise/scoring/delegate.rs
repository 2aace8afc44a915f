use std::marker::PhantomData;

use super::{gaps, symbols, AffineScheme, Scheme, Score};

/// Compose independent symbol and gap scorers into a single scheme.
#[derive(Clone)]
pub struct Delegate<ScoreType, Symbol, S, G>
where
    ScoreType: Score,
    S: symbols::Scorer<Symbol = Symbol, Score = ScoreType>,
{
    symbols: S,
    gaps: G,
    _phantom: PhantomData<(ScoreType, Symbol)>,
}

impl<ScoreType, Symbol, S, G> Delegate<ScoreType, Symbol, S, G>
where
    ScoreType: Score,
    S: symbols::Scorer<Symbol = Symbol, Score = ScoreType>,
{
    pub fn new(symbols: S, gaps: G) -> Self {
        Self {
            symbols,
            gaps,
            _phantom: Default::default(),
        }
    }
}

impl<ScoreType, Symbol, S, G> symbols::Scorer for Delegate<ScoreType, Symbol, S, G>
where
    ScoreType: Score,
    S: symbols::Scorer<Symbol = Symbol, Score = ScoreType>,
{
    type Score = ScoreType;
    type Symbol = Symbol;

    #[inline(always)]
    fn score(
        &self,
        seq1pos: usize,
        s1: &Self::Symbol,
        seq2pos: usize,
        s2: &Self::Symbol,
    ) -> Self::Score {
        self.symbols.score(seq1pos, s1, seq2pos, s2)
    }
}

impl<ScoreType, Symbol, S, G> gaps::Scorer for Delegate<ScoreType, Symbol, S, G>
where
    ScoreType: Score,
    S: symbols::Scorer<Symbol = Symbol, Score = ScoreType>,
    G: gaps::Scorer<Score = ScoreType>,
{
    type Score = ScoreType;

    #[inline(always)]
    fn seq1_gap(&self, pos: usize) -> Self::Score {
        self.gaps.seq1_gap(pos)
    }

    #[inline(always)]
    fn seq2_gap(&self, pos: usize) -> Self::Score {
        self.gaps.seq2_gap(pos)
    }
}

impl<ScoreType, Symbol, S, G> gaps::AffineScorer for Delegate<ScoreType, Symbol, S, G>
where
    ScoreType: Score,
    S: symbols::Scorer<Symbol = Symbol, Score = ScoreType>,
    G: gaps::AffineScorer<Score = ScoreType>,
{
    type Score = ScoreType;

    #[inline(always)]
    fn seq1_gap_open(&self, pos: usize) -> Self::Score {
        self.gaps.seq1_gap_open(pos)
    }

    #[inline(always)]
    fn seq1_gap_extend(&self, pos: usize) -> Self::Score {
        self.gaps.seq1_gap_extend(pos)
    }

    #[inline(always)]
    fn seq2_gap_open(&self, pos: usize) -> Self::Score {
        self.gaps.seq2_gap_open(pos)
    }

    #[inline(always)]
    fn seq2_gap_extend(&self, pos: usize) -> Self::Score {
        self.gaps.seq2_gap_extend(pos)
    }
}

impl<ScoreType, Symbol, S, G> Scheme for Delegate<ScoreType, Symbol, S, G>
where
    ScoreType: Score,
    S: symbols::Scorer<Symbol = Symbol, Score = ScoreType>,
    G: gaps::Scorer<Score = ScoreType>,
{
    type Score = ScoreType;
    type Symbol = Symbol;
}

impl<ScoreType, Symbol, S, G> AffineScheme for Delegate<ScoreType, Symbol, S, G>
where
    ScoreType: Score,
    S: symbols::Scorer<Symbol = Symbol, Score = ScoreType>,
    G: gaps::AffineScorer<Score = ScoreType>,
{
    type Score = ScoreType;
    type Symbol = Symbol;
}
