//! ArchiTest — a configuration wizard and prompt compiler for web UI tests.
//!
//! A host application drives a [`wizard::Wizard`] through six stages of data
//! entry, accumulating a [`model::TestConfiguration`]. The crate compiles
//! that configuration into a deterministic Markdown prompt for an LLM,
//! generates synthetic test data, and ingests uploaded selector and data
//! files. All state is in-memory for one session; side effects (toasts,
//! clipboard writes) are returned as [`wizard::Effect`] requests for the
//! host to execute.
//!
//! See `DESIGN.md` for full architecture documentation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod corpus;
pub mod datagen;
pub mod import;
pub mod logging;
pub mod model;
pub mod prompt;
pub mod templates;
pub mod wizard;
