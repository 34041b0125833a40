//! # greenlight
//!
//! Client-side style form-field validation: given a set of input
//! fields, check required presence, value format (with Luhn checksum
//! support for card numbers) and cross-field matches, and report a
//! structured [`Feedback`]. Presentation is delegated to a
//! caller-supplied [`Renderer`]; the engine itself never touches a
//! document.

pub mod config;
pub mod engine;
pub mod error;
pub mod feedback;
pub mod field;
pub mod render;
pub mod selector;
pub(crate) mod stages;

// Re-exports for easy access
pub use config::{Config, Mode, Output};
pub use engine::Engine;
pub use error::{EngineError, EngineResult};
pub use feedback::{ErrorField, Feedback, RenderRequest, Status};
pub use field::{Field, FieldKind};
pub use render::{CleanupScope, Renderer, TriggerEvent};
pub use selector::Target;
