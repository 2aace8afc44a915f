pub use delegate::Delegate;

pub use crate::Score;

mod delegate;
pub mod gaps;
pub mod symbols;

/// A complete scoring scheme for linear-gap alignment: a symbol scorer plus a
/// per-position gap cost.
pub trait Scheme:
    gaps::Scorer<Score = <Self as Scheme>::Score>
    + symbols::Scorer<Score = <Self as Scheme>::Score, Symbol = <Self as Scheme>::Symbol>
{
    type Score: Score;
    type Symbol;
}

/// A complete scoring scheme for affine-gap alignment: a symbol scorer plus
/// open/extend gap costs.
pub trait AffineScheme:
    gaps::AffineScorer<Score = <Self as AffineScheme>::Score>
    + symbols::Scorer<Score = <Self as AffineScheme>::Score, Symbol = <Self as AffineScheme>::Symbol>
{
    type Score: Score;
    type Symbol;
}

pub fn compose<ScoreType, Symbol, S, G>(symbols: S, gaps: G) -> Delegate<ScoreType, Symbol, S, G>
where
    ScoreType: Score,
    S: symbols::Scorer<Symbol = Symbol, Score = ScoreType>,
{
    Delegate::new(symbols, gaps)
}
