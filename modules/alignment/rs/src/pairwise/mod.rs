pub use alignment::{Alignment, Op, Step};

pub mod affine;
pub mod alignment;
pub mod global;
pub mod hirschberg;
mod matrix;
pub mod rows;
pub mod scoring;
mod trace;
