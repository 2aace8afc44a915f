use alnkit_alignment_rs::pairwise::scoring::{compose, gaps, symbols, Scheme};
use alnkit_alignment_rs::pairwise::{global, hirschberg};

use super::common::{assert_well_formed, Score, Symbol};

fn scheme(
    equal: Score,
    different: Score,
    gap: Score,
) -> impl Scheme<Score = Score, Symbol = Symbol> {
    compose(symbols::Equality::new(equal, different), gaps::Linear { gap })
}

/// The linear-memory algorithm must reproduce the quadratic scores and emit a
/// well-formed path for the same inputs.
#[test]
fn matches_quadratic_algorithm() {
    let workloads: &[(&[Symbol], &[Symbol], Score, Score, Score)] = &[
        (b"GATTACA", b"GCATGCU", 1, -1, -1),
        (b"AGTACGCA", b"TATGC", 2, -1, -2),
        (b"GGCTGAGTCA", b"GGTGAGGTCA", 2, -3, -4),
        (b"ACGTACGTACGT", b"ACGT", 1, -1, -1),
        (b"TTTT", b"CCCC", 1, -2, -1),
        (b"A", b"A", 5, -4, -3),
        (b"A", b"C", 5, -4, -3),
        (b"CAGTCCAGTACGTTACGTA", b"CAGTACGTTAGCA", 3, -2, -5),
    ];

    for (seq1, seq2, equal, different, gap) in workloads {
        let expected = global::Aligner::new(scheme(*equal, *different, *gap))
            .align(seq1, seq2)
            .expect("global alignment must succeed");
        let got = hirschberg::Aligner::new(scheme(*equal, *different, *gap))
            .align(seq1, seq2)
            .expect("hirschberg alignment must succeed");

        assert_eq!(got.score(), expected.score(), "{:?} vs {:?}", seq1, seq2);
        assert_well_formed(&got, seq1, seq2);
    }
}

#[test]
fn empty_sequences() {
    let aligner = hirschberg::Aligner::new(scheme(1, -1, -2));

    let alignment = aligner.align(b"", b"ACGT").expect("alignment must succeed");
    assert_eq!(*alignment.score(), -8);
    assert_eq!(alignment.rle(), "4v");

    let alignment = aligner.align(b"ACGT", b"").expect("alignment must succeed");
    assert_eq!(*alignment.score(), -8);
    assert_eq!(alignment.rle(), "4^");

    let alignment = aligner.align(b"", b"").expect("alignment must succeed");
    assert_eq!(*alignment.score(), 0);
    assert!(alignment.is_empty());
}

#[test]
fn identical_sequences() {
    let alignment = hirschberg::Aligner::new(scheme(1, -1, -2))
        .align(b"ACGTACGT", b"ACGTACGT")
        .expect("alignment must succeed");
    assert_eq!(*alignment.score(), 8);
    assert_eq!(alignment.rle(), "8=");
}

#[test]
fn steps_are_collapsed() {
    // Runs produced by adjacent recursion branches must be merged
    let alignment = hirschberg::Aligner::new(scheme(1, -1, -1))
        .align(b"ACGTACGT", b"AT")
        .expect("alignment must succeed");
    let steps = alignment.steps();
    for pair in steps.windows(2) {
        assert_ne!(pair[0].op(), pair[1].op());
    }
    assert_well_formed(&alignment, b"ACGTACGT", b"AT");
}
