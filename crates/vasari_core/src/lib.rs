//! Core data types for the Vasari content pipeline.
//!
//! This crate provides the foundation data types used across all Vasari
//! interfaces.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod content_type;
mod page;
mod payload;
mod record;
mod source;
mod telemetry;

pub use content_type::ContentType;
pub use page::Page;
pub use payload::Payload;
pub use record::{ContentRecord, NewContent};
pub use source::ContentSource;
pub use telemetry::init_tracing;
