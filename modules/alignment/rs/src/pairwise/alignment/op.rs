/// `Op` represents a single operation in a pairwise alignment.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Op {
    /// Represents a gap in the first sequence (v)
    GapFirst,
    /// Represents a gap in the second sequence (^)
    GapSecond,
    /// Represents a match between the sequences (=)
    Match,
    /// Represents a mismatch between the sequences (X)
    Mismatch,
}

impl Op {
    /// Returns `true` if the operation is represented by a diagonal movement in the alignment matrix.
    pub fn is_diagonal(&self) -> bool {
        matches!(self, Op::Match | Op::Mismatch)
    }

    /// Returns the symbol representation of the operation.
    pub fn symbol(&self) -> char {
        match self {
            Op::GapFirst => 'v',
            Op::GapSecond => '^',
            Op::Match => '=',
            Op::Mismatch => 'X',
        }
    }
}

impl TryFrom<char> for Op {
    type Error = ();

    /// Tries to convert a character into an `Op`.
    /// Returns an error if the character does not represent a valid operation.
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'v' => Ok(Op::GapFirst),
            '^' => Ok(Op::GapSecond),
            '=' => Ok(Op::Match),
            'X' => Ok(Op::Mismatch),
            _ => Err(()),
        }
    }
}
