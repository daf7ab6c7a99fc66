//! Core contracts for fakedocs.
//!
//! This crate defines the record model shared by every reader variant and the
//! narrow host contracts a reader depends on: configuration lookup, progress
//! reporting and the open/iterate/close source lifecycle.

pub mod error;
pub mod host;
pub mod record;
pub mod source;

pub use error::{Error, Result};
pub use host::{ConfigLookup, NoopJournal, ProgressJournal};
pub use record::{FieldValue, Record};
pub use source::RecordSource;
