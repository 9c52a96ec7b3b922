//! Session management
//!
//! This module owns the editing state explicitly: the current specification,
//! its synthesized prompt, the history store, the persisted draft, and the
//! debouncing used when re-synthesis is driven by a stream of edits.

mod clipboard;
mod debounce;
mod draft;
mod session;

pub use clipboard::*;
pub use debounce::*;
pub use draft::*;
pub use session::*;
