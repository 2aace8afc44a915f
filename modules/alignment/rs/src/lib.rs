pub use alnkit_core_rs::{Alignable, Reversed};

pub mod pairwise;

/// Alignment scores are signed primitive integers.
pub trait Score: alnkit_core_rs::num::PrimSInt {}

impl<T: alnkit_core_rs::num::PrimSInt> Score for T {}
