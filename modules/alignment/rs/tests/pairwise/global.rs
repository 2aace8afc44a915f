use alnkit_alignment_rs::pairwise::scoring::{self, compose, gaps, symbols};
use alnkit_alignment_rs::pairwise::global;

use super::common::{assert_well_formed, invrle, Score, Symbol};

struct Workload<'a> {
    seq1: &'a [Symbol],
    seq2: &'a [Symbol],
    equal: Score,
    different: Score,
    gap: Score,
    score: Score,
    // None when several optimal paths exist and the exact one is not pinned down
    rle: Option<&'a str>,
}

fn aligner(
    equal: Score,
    different: Score,
    gap: Score,
) -> global::Aligner<impl scoring::Scheme<Score = Score, Symbol = Symbol>> {
    global::Aligner::new(compose(
        symbols::Equality::new(equal, different),
        gaps::Linear { gap },
    ))
}

fn ensure(w: Workload<'_>) {
    let alignment = aligner(w.equal, w.different, w.gap)
        .align(&w.seq1, &w.seq2)
        .expect("global alignment must succeed");

    assert_eq!(*alignment.score(), w.score);
    if let Some(rle) = w.rle {
        assert_eq!(alignment.rle(), rle);
    }
    assert_well_formed(&alignment, w.seq1, w.seq2);

    // Scores are symmetric under swapping the sequences
    let swapped = aligner(w.equal, w.different, w.gap)
        .align(&w.seq2, &w.seq1)
        .expect("global alignment must succeed");
    assert_eq!(swapped.score(), alignment.score());
    assert_well_formed(&swapped, w.seq2, w.seq1);
}

#[test]
fn identical_sequences() {
    ensure(Workload {
        seq1: b"ACGT",
        seq2: b"ACGT",
        equal: 1,
        different: -1,
        gap: -2,
        score: 4,
        rle: Some("4="),
    });
}

#[test]
fn empty_sequences() {
    ensure(Workload {
        seq1: b"ACGT",
        seq2: b"",
        equal: 1,
        different: -1,
        gap: -2,
        score: -8,
        rle: Some("4^"),
    });

    let alignment = aligner(1, -1, -2)
        .align(&b"".as_slice(), &b"".as_slice())
        .expect("global alignment must succeed");
    assert_eq!(*alignment.score(), 0);
    assert!(alignment.is_empty());
    assert_eq!(alignment.rle(), "");
}

#[test]
fn single_deletion() {
    ensure(Workload {
        seq1: b"AAA",
        seq2: b"AA",
        equal: 1,
        different: -1,
        gap: -2,
        score: 0,
        rle: Some("1^2="),
    });
}

#[test]
fn all_mismatches() {
    ensure(Workload {
        seq1: b"AG",
        seq2: b"CT",
        equal: 1,
        different: -1,
        gap: -2,
        score: -2,
        rle: Some("2X"),
    });
}

#[test]
fn leading_gap() {
    ensure(Workload {
        seq1: b"T",
        seq2: b"AAT",
        equal: 1,
        different: -1,
        gap: -2,
        score: -3,
        rle: Some("2v1="),
    });
}

#[test]
fn classic_sequences() {
    ensure(Workload {
        seq1: b"GATTACA",
        seq2: b"GCATGCU",
        equal: 1,
        different: -1,
        gap: -1,
        score: 0,
        rle: None,
    });
}

#[test]
fn rle_inversion_on_swap() {
    // For unambiguous optima the swapped alignment is the mirrored one
    let alignment = aligner(1, -1, -2)
        .align(&b"AA".as_slice(), &b"AAA".as_slice())
        .expect("global alignment must succeed");
    assert_eq!(alignment.rle(), invrle("1^2="));
}

#[test]
fn determinism() {
    let aligner = aligner(2, -3, -4);
    let first = aligner
        .align(&b"GGCTGAGTCA".as_slice(), &b"GGTGAGGTCA".as_slice())
        .expect("global alignment must succeed");
    for _ in 0..3 {
        let again = aligner
            .align(&b"GGCTGAGTCA".as_slice(), &b"GGTGAGGTCA".as_slice())
            .expect("global alignment must succeed");
        assert_eq!(again, first);
    }
}
