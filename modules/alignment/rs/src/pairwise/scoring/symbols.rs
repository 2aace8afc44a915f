use std::marker::PhantomData;

use eyre::{ensure, Result};

use crate::pairwise::scoring::Score;

pub trait Scorer {
    type Score: Score;
    type Symbol;

    fn score(
        &self,
        seq1pos: usize,
        s1: &Self::Symbol,
        seq2pos: usize,
        s2: &Self::Symbol,
    ) -> Self::Score;
}

pub trait PosInvariantScorer {
    type SymScore: Score;
    type Symbol;

    fn score(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Self::SymScore;
}

impl<T: PosInvariantScorer> Scorer for T {
    type Score = <Self as PosInvariantScorer>::SymScore;
    type Symbol = <Self as PosInvariantScorer>::Symbol;

    #[inline(always)]
    fn score(&self, _: usize, s1: &Self::Symbol, _: usize, s2: &Self::Symbol) -> Self::Score {
        self.score(s1, s2)
    }
}

/// Constant match/mismatch scoring.
#[derive(Clone)]
pub struct Equality<S: Score, Symbol> {
    pub equal: S,
    pub different: S,
    _phantom: PhantomData<Symbol>,
}

impl<S: Score, Symbol: PartialEq> PosInvariantScorer for Equality<S, Symbol> {
    type SymScore = S;
    type Symbol = Symbol;

    #[inline(always)]
    fn score(&self, a: &Self::Symbol, b: &Self::Symbol) -> Self::SymScore {
        if a == b {
            self.equal
        } else {
            self.different
        }
    }
}

impl<S: Score, Symbol: PartialEq> Equality<S, Symbol> {
    pub fn new(equal: S, different: S) -> Self {
        Self {
            equal,
            different,
            _phantom: Default::default(),
        }
    }
}

/// Substitution-matrix scoring over an explicit u8 alphabet.
///
/// The lookup is a true two-symbol lookup. Pairs with a symbol outside the
/// alphabet score as the worst entry of the table; callers are expected to
/// validate their sequences against [`Matrix::alphabet`] beforehand.
#[derive(Clone)]
pub struct Matrix<S: Score> {
    alphabet: Vec<u8>,
    // Dense 256x256 table, row-major
    lookup: Vec<S>,
}

impl<S: Score> Matrix<S> {
    /// Build a matrix from an alphabet of `k` symbols and a row-major `k*k` score table.
    pub fn new(alphabet: &[u8], table: &[S]) -> Result<Self> {
        let k = alphabet.len();
        ensure!(k > 0, "Substitution matrix alphabet must be non-empty");
        ensure!(
            table.len() == k * k,
            "Substitution matrix for {} symbols must hold {} scores, got {}",
            k,
            k * k,
            table.len()
        );
        for (ind, symbol) in alphabet.iter().enumerate() {
            ensure!(
                !alphabet[..ind].contains(symbol),
                "Duplicated symbol {:?} in the substitution matrix alphabet",
                *symbol as char
            );
        }

        let mut worst = table[0];
        for score in table {
            if *score < worst {
                worst = *score;
            }
        }

        let mut lookup = vec![worst; 256 * 256];
        for (row, s1) in alphabet.iter().enumerate() {
            for (col, s2) in alphabet.iter().enumerate() {
                lookup[(*s1 as usize) * 256 + (*s2 as usize)] = table[row * k + col];
            }
        }

        Ok(Self {
            alphabet: alphabet.to_vec(),
            lookup,
        })
    }

    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }

    pub fn contains(&self, symbol: u8) -> bool {
        self.alphabet.contains(&symbol)
    }
}

impl<S: Score> PosInvariantScorer for Matrix<S> {
    type SymScore = S;
    type Symbol = u8;

    #[inline(always)]
    fn score(&self, a: &Self::Symbol, b: &Self::Symbol) -> Self::SymScore {
        self.lookup[(*a as usize) * 256 + (*b as usize)]
    }
}
