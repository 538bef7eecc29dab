//! Prompts domain module.
//!
//! Workflow prompt templates that walk a calling agent through
//! multi-step Shipyard operations, referencing this server's tools by
//! name.
//!
//! ## Architecture
//!
//! - `definitions/` - individual prompt definitions (one file each)
//! - `registry.rs` - central prompt registration
//! - `service.rs` - prompt listing and rendering
//! - `templates.rs` - template rendering engine
//!
//! ## Adding a New Prompt
//!
//! 1. Create a new file in `definitions/` implementing `PromptDefinition`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it in `registry.rs`

pub mod definitions;
mod error;
mod registry;
mod service;
pub mod templates;

pub use definitions::PromptDefinition;
pub use error::PromptError;
pub use registry::{get_all_prompts, prompt_names};
pub use service::PromptService;
pub use templates::PromptTemplate;
