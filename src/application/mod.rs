//! Application layer - the `make:workflow`, `make:preset` and `preset:list`
//! use cases

pub mod dto;
pub mod errors;
pub mod list_presets;
pub mod make_preset;
pub mod make_workflow;

pub use dto::*;
pub use errors::*;
pub use list_presets::*;
pub use make_preset::*;
pub use make_workflow::*;
