use std::fs::File;
use std::io::{self, BufWriter, Write};

use eyre::{Context, Result};

use alnkit_alignment_rs::pairwise::Alignment;

use crate::args::Args;
use crate::Score;

/// The rendered result of a single algorithm run.
pub struct Section {
    title: &'static str,
    score: Score,
    row1: Vec<u8>,
    row2: Vec<u8>,
}

impl Section {
    pub fn new(
        title: &'static str,
        alignment: &Alignment<Score, u32>,
        seq1: &[u8],
        seq2: &[u8],
    ) -> Result<Self> {
        let (row1, row2) = alignment.gapped(&seq1, &seq2, b'-')?;
        Ok(Self {
            title,
            score: *alignment.score(),
            row1,
            row2,
        })
    }
}

pub fn render(args: &Args, seq1: &[u8], seq2: &[u8], sections: &[Section]) -> Result<()> {
    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .wrap_err_with(|| format!("Failed to create {}", path.display()))?;
            write_report(&mut BufWriter::new(file), seq1, seq2, sections, args.width)
        }
        None => {
            let stdout = io::stdout();
            write_report(&mut stdout.lock(), seq1, seq2, sections, args.width)
        }
    }
}

fn write_report<W: Write>(
    writer: &mut W,
    seq1: &[u8],
    seq2: &[u8],
    sections: &[Section],
    width: usize,
) -> Result<()> {
    writeln!(writer, "Input:")?;
    writeln!(writer, "SEQ1: {}", String::from_utf8_lossy(seq1))?;
    writeln!(writer, "SEQ2: {}", String::from_utf8_lossy(seq2))?;

    for section in sections {
        writeln!(writer)?;
        writeln!(writer, "{}", section.title)?;
        writeln!(writer, "Score: {}", section.score)?;
        for (chunk1, chunk2) in section.row1.chunks(width).zip(section.row2.chunks(width)) {
            writeln!(writer, "SEQ1: {}", String::from_utf8_lossy(chunk1))?;
            writeln!(writer, "SEQ2: {}", String::from_utf8_lossy(chunk2))?;
        }
    }
    Ok(())
}
