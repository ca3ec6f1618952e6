pub mod pipeline;
pub mod sentiment;
pub mod snapshot;

pub use pipeline::{run_once, RunOutcome, TitleSource};
