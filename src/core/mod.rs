//! Cross-cutting pieces shared by the library and the binary

pub mod config;

pub use config::*;
