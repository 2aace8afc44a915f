use alnkit_alignment_rs::pairwise::scoring::{compose, gaps, symbols, AffineScheme, Scheme};
use alnkit_alignment_rs::pairwise::{affine, global};

use super::common::{assert_well_formed, Score, Symbol};

fn scheme(
    equal: Score,
    different: Score,
    open: Score,
    extend: Score,
) -> impl AffineScheme<Score = Score, Symbol = Symbol> {
    compose(
        symbols::Equality::new(equal, different),
        gaps::Affine { open, extend },
    )
}

fn linear_scheme(
    equal: Score,
    different: Score,
    gap: Score,
) -> impl Scheme<Score = Score, Symbol = Symbol> {
    compose(symbols::Equality::new(equal, different), gaps::Linear { gap })
}

#[test]
fn prefers_single_gap_run() {
    // Expensive opening, cheap extension: one long gap beats scattered ones
    let alignment = affine::Aligner::new(scheme(1, -1, -10, -1))
        .align(&b"AAAAAAAAAA".as_slice(), &b"AAAAA".as_slice())
        .expect("affine alignment must succeed");
    assert_eq!(*alignment.score(), -10);
    assert_eq!(alignment.rle(), "5^5=");
    assert_well_formed(&alignment, b"AAAAAAAAAA", b"AAAAA");
}

#[test]
fn empty_sequences() {
    let aligner = affine::Aligner::new(scheme(1, -1, -3, -2));

    // A single gap run of length k costs open + k * extend
    let alignment = aligner
        .align(&b"ACGT".as_slice(), &b"".as_slice())
        .expect("affine alignment must succeed");
    assert_eq!(*alignment.score(), -11);
    assert_eq!(alignment.rle(), "4^");

    let alignment = aligner
        .align(&b"".as_slice(), &b"ACGT".as_slice())
        .expect("affine alignment must succeed");
    assert_eq!(*alignment.score(), -11);
    assert_eq!(alignment.rle(), "4v");

    let alignment = aligner
        .align(&b"".as_slice(), &b"".as_slice())
        .expect("affine alignment must succeed");
    assert_eq!(*alignment.score(), 0);
    assert!(alignment.is_empty());
}

#[test]
fn zero_open_degenerates_to_linear() {
    let workloads: &[(&[Symbol], &[Symbol])] = &[
        (b"GATTACA", b"GCATGCU"),
        (b"AGTACGCA", b"TATGC"),
        (b"GGCTGAGTCA", b"GGTGAGGTCA"),
        (b"ACGT", b"ACGT"),
        (b"AAA", b"AA"),
        (b"T", b"AAT"),
        (b"ACGT", b""),
        (b"", b""),
    ];

    let affine = affine::Aligner::new(scheme(1, -1, 0, -2));
    let linear = global::Aligner::new(linear_scheme(1, -1, -2));

    for (seq1, seq2) in workloads {
        let got = affine.align(seq1, seq2).expect("alignment must succeed");
        let expected = linear.align(seq1, seq2).expect("alignment must succeed");
        assert_eq!(got.score(), expected.score(), "{:?} vs {:?}", seq1, seq2);
    }
}

#[test]
fn identical_sequences() {
    let alignment = affine::Aligner::new(scheme(1, -1, -5, -1))
        .align(&b"ACGTACGT".as_slice(), &b"ACGTACGT".as_slice())
        .expect("affine alignment must succeed");
    assert_eq!(*alignment.score(), 8);
    assert_eq!(alignment.rle(), "8=");
}

#[test]
fn gap_runs_are_contiguous_under_high_open_penalty() {
    // Under linear scoring with gap = -2 the optimum may split gaps freely,
    // under affine scoring with the same total per-unit cost it must not
    let alignment = affine::Aligner::new(scheme(1, -1, -8, -1))
        .align(&b"ACGTACGTACGT".as_slice(), &b"ACGT".as_slice())
        .expect("affine alignment must succeed");
    assert_well_formed(&alignment, b"ACGTACGTACGT", b"ACGT");

    let gap_runs = alignment
        .steps()
        .iter()
        .filter(|step| !step.op().is_diagonal())
        .count();
    assert_eq!(gap_runs, 1);
    assert_eq!(*alignment.score(), 4 - 8 - 8);
}
