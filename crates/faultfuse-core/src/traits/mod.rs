//! Extension seams: evidence sources and history persistence.

mod expert;
mod sink;

pub use expert::{Expert, ExpertOpinion};
pub use sink::HistorySink;
