use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "alnkit")]
#[command(version)]
#[command(about = "Exact global pairwise sequence alignment", long_about = None)]
pub struct Args {
    /// Input file with two sequences separated by a blank line,
    /// or two files with one sequence each
    #[arg(short, long, num_args = 1..=2, required = true)]
    pub input: Vec<PathBuf>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Gap penalty; the gap open penalty for the affine algorithm
    #[arg(short, long, default_value_t = -2, allow_negative_numbers = true)]
    pub gap: i64,

    /// Gap extension penalty for the affine algorithm
    #[arg(short, long, default_value_t = -2, allow_negative_numbers = true)]
    pub egap: i64,

    /// Match score
    #[arg(short = 'M', long = "match", default_value_t = 1, allow_negative_numbers = true)]
    pub match_score: i64,

    /// Mismatch score
    #[arg(short, long, default_value_t = -1, allow_negative_numbers = true)]
    pub miss: i64,

    /// Substitution matrix file; overrides the match/mismatch scores
    #[arg(short, long)]
    pub dict: Option<PathBuf>,

    /// Run the quadratic Needleman-Wunsch algorithm
    #[arg(long)]
    pub global: bool,

    /// Run the affine-gap Needleman-Wunsch algorithm
    #[arg(long)]
    pub affine: bool,

    /// Run the linear-memory Hirschberg algorithm
    #[arg(long)]
    pub hirschberg: bool,

    /// Wrap aligned rows at this many columns
    #[arg(long, default_value_t = 50)]
    pub width: usize,

    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
