use alnkit_alignment_rs::pairwise::{Alignment, Op};

pub type Score = i64;
pub type Symbol = u8;

pub fn invrle(rle: &str) -> String {
    let gapfirst = Op::symbol(&Op::GapFirst);
    let gapsecond = Op::symbol(&Op::GapSecond);
    rle.chars()
        .map(|x| {
            if x == gapfirst {
                gapsecond
            } else if x == gapsecond {
                gapfirst
            } else {
                x
            }
        })
        .collect::<String>()
}

/// Assert that the alignment is a valid end-to-end pairing of the inputs:
/// equal row lengths, no column with two gap markers, and the rows restore
/// the original sequences once gaps are stripped.
pub fn assert_well_formed(alignment: &Alignment<Score, u32>, seq1: &[Symbol], seq2: &[Symbol]) {
    let (row1, row2) = alignment
        .gapped(&seq1, &seq2, b'-')
        .expect("gapped rows must materialize");

    assert_eq!(row1.len(), row2.len());
    assert!(row1
        .iter()
        .zip(row2.iter())
        .all(|(a, b)| *a != b'-' || *b != b'-'));

    let strip = |row: &[u8]| row.iter().copied().filter(|&s| s != b'-').collect::<Vec<_>>();
    assert_eq!(strip(&row1), seq1);
    assert_eq!(strip(&row2), seq2);
}
