//! # content-forge – Template-driven product content pipeline
//!
//! This crate turns a single product record into three JSON page documents.
//! The pipeline stages are:
//!
//! 1. **Parse** – raw record → [`model::Product`] ([`parser`])
//! 2. **Ask** – product → categorized question set ([`questions`])
//! 3. **Answer** – questions → FAQ items by prefix matching ([`faq`])
//! 4. **Render** – FAQ, product and comparison pages ([`render`]), built from
//!    the pure fragments in [`blocks`]
//! 5. **Write** – pretty-printed JSON documents on disk ([`writer`])
//!
//! [`pipeline::run`] sequences all of them.

pub mod blocks;
pub mod error;
pub mod faq;
pub mod model;
pub mod page;
pub mod parser;
pub mod pipeline;
pub mod questions;
pub mod render;
pub mod sample;
pub mod writer;

// Re-exports for convenience
pub use error::{ForgeError, Result};
pub use page::{Page, PageKind};
pub use pipeline::{generate_pages, run, GeneratedPages, PipelineConfig};
