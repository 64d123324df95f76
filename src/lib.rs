//! temporal-scaffold: generates paired Temporal workflow and activity
//! scaffolding (PHP) from a declarative description.
//!
//! The pipeline is `Context` -> four `ArtifactGenerator`s -> `SourceRenderer`
//! -> `OutputService`, driven by the `GenerationOrchestrator`. Presets
//! pre-populate a `Context` and are registered once at startup through the
//! plugin `Bootstrap`.
#![deny(unsafe_code)]

pub mod application;
pub mod core;
pub mod generation;
pub mod infrastructure;
pub mod presets;
