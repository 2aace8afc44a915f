pub use alignment::Alignment;
pub use op::Op;
pub use step::Step;

pub mod alignment;
mod op;
pub mod step;
