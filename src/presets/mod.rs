//! Presets: named, reusable Context shapes
//!
//! The registry is filled once at startup by the plugin `Bootstrap` and
//! shared read-only afterwards.

pub mod builtin;
pub mod definition;
pub mod errors;
pub mod plugin;
pub mod registry;

pub use builtin::*;
pub use definition::*;
pub use errors::*;
pub use plugin::*;
pub use registry::*;
