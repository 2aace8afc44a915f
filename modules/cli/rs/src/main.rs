use std::time::Instant;

use clap::Parser;
use eyre::{ensure, Result};
use log::info;

use alnkit_alignment_rs::pairwise::scoring::{compose, gaps, symbols};
use alnkit_alignment_rs::pairwise::{affine, global, hirschberg};

mod args;
mod input;
mod matrix;
mod report;

pub(crate) type Score = i64;

fn main() -> Result<()> {
    let args = args::Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    ensure!(
        args.global || args.affine || args.hirschberg,
        "No algorithm selected, pass at least one of --global, --affine or --hirschberg"
    );
    ensure!(args.width > 0, "Wrapping width must be greater than zero");

    let (seq1, seq2) = input::read(&args.input)?;
    info!(
        "Aligning sequences of {} and {} symbols",
        seq1.len(),
        seq2.len()
    );

    let sections = match &args.dict {
        Some(path) => {
            let matrix = matrix::read(path)?;
            matrix::validate(&matrix, "SEQ1", &seq1)?;
            matrix::validate(&matrix, "SEQ2", &seq2)?;
            run(&args, matrix, &seq1, &seq2)?
        }
        None => {
            let equality = symbols::Equality::new(args.match_score, args.miss);
            run(&args, equality, &seq1, &seq2)?
        }
    };

    report::render(&args, &seq1, &seq2, &sections)
}

fn run<Sym>(
    args: &args::Args,
    scorer: Sym,
    seq1: &[u8],
    seq2: &[u8],
) -> Result<Vec<report::Section>>
where
    Sym: symbols::Scorer<Symbol = u8, Score = Score> + Clone,
{
    let mut sections = Vec::new();

    if args.global {
        let started = Instant::now();
        let aligner = global::Aligner::new(compose(scorer.clone(), gaps::Linear { gap: args.gap }));
        let alignment = aligner.align(&seq1, &seq2)?;
        info!("Needleman-Wunsch finished in {:?}", started.elapsed());
        sections.push(report::Section::new(
            "Needleman-Wunsch Algorithm",
            &alignment,
            seq1,
            seq2,
        )?);
    }

    if args.affine {
        let started = Instant::now();
        let aligner = affine::Aligner::new(compose(
            scorer.clone(),
            gaps::Affine {
                open: args.gap,
                extend: args.egap,
            },
        ));
        let alignment = aligner.align(&seq1, &seq2)?;
        info!(
            "Affine Needleman-Wunsch finished in {:?}",
            started.elapsed()
        );
        sections.push(report::Section::new(
            "Affine Needleman-Wunsch Algorithm",
            &alignment,
            seq1,
            seq2,
        )?);
    }

    if args.hirschberg {
        let started = Instant::now();
        let aligner = hirschberg::Aligner::new(compose(scorer, gaps::Linear { gap: args.gap }));
        let alignment = aligner.align(seq1, seq2)?;
        info!("Hirschberg finished in {:?}", started.elapsed());
        sections.push(report::Section::new(
            "Hirschberg Algorithm",
            &alignment,
            seq1,
            seq2,
        )?);
    }

    Ok(sections)
}
