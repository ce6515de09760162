//! Note generation backends

pub mod provider;

// Re-export main types for convenience
pub use provider::{NoteProvider, ProviderChain};
