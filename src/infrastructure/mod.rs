//! Infrastructure layer - concrete implementations of domain ports

pub mod output;
pub mod render;

pub use output::*;
pub use render::*;
