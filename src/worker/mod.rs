//! The three digest stages and the run that chains them

pub mod generate;
pub mod handler;
pub mod notify;
pub mod publish;

// Re-export the main entry points for convenience
pub use handler::{Pipeline, run_digest, run_pipeline};
