//! promptdeck: prompt templates for an LLM-driven autonomous task agent.
//!
//! This crate holds the six prompts that drive the agent loop and the
//! substitution mechanism that fills them in. It is deliberately small and
//! pure: no model invocation, no response parsing, no scheduling, no I/O.
//! The agent loop renders a prompt here, sends it to a language model, and
//! parses the reply elsewhere.
//!
//! # Layout
//!
//! - [`template`] - the [`Template`] type and the `{variable}` substitution
//!   engine
//! - [`catalog`] - the six built-in templates, bodies preserved verbatim
//! - [`inputs`] - one typed input struct per template, plus context-building
//!   helpers
//! - [`error`] - rendering error types
//!
//! # Example
//!
//! ```
//! use promptdeck::inputs::{PromptInput, StartGoal};
//!
//! let prompt = StartGoal {
//!     goal: "Plan a trip to Japan",
//!     language: "English",
//! }
//! .render()?;
//!
//! assert!(prompt.contains("Plan a trip to Japan"));
//! # Ok::<(), promptdeck::TemplateError>(())
//! ```
//!
//! Rendering is a pure function of the template and its context; templates
//! are `static` and any number of threads may render concurrently.

pub mod catalog;
pub mod error;
pub mod inputs;
pub mod template;

pub use error::{Result, TemplateError};
pub use template::{Template, vars};
