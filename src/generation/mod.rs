//! Generation domain module - turns a workflow `Context` into the four
//! Temporal artifacts
//!
//! Generators build structured declarations (`ClassDecl`) inside a
//! per-file `NamespaceScope`; a `SourceRenderer` prints them and an
//! `OutputService` persists the result. The `GenerationOrchestrator` ties
//! the steps together.

pub mod context;
pub mod errors;
pub mod generators;
pub mod markers;
pub mod method;
pub mod namespace;
pub mod naming;
pub mod orchestrator;
pub mod rules;
pub mod stubs;
pub mod traits;
pub mod types;
pub mod utils;

pub use context::*;
pub use errors::*;
pub use generators::*;
pub use markers::*;
pub use method::*;
pub use namespace::*;
pub use naming::*;
pub use orchestrator::*;
pub use traits::*;
pub use types::*;
