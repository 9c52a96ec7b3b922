// Shared helpers

pub mod text;
