//! Prompt history persistence
//!
//! Keeps the last twenty saved prompts, each with the specification that
//! produced it, in a single key of a local key-value store.

mod entry;
mod storage;
mod store;

pub use entry::*;
pub use storage::*;
pub use store::*;
