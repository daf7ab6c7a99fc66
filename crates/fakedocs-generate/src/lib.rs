//! Synthetic document generation for fakedocs.
//!
//! A [`DocumentReader`] materializes a batch of flat records on `open`,
//! hands them out one at a time and forgets them on `close`. Records are
//! sampled from curated reference pools; the extensible variant can attach
//! one caller-named field whose value is inferred from the field name.

pub mod errors;
pub mod generators;
pub mod model;
pub mod output;
pub mod pools;
pub mod reader;
pub mod variant;

pub use errors::GenerationError;
pub use generators::inference::{FieldKind, InferenceEngine, classify};
pub use model::{GenerationReport, ReaderOptions};
pub use pools::{Pool, ReferencePools};
pub use reader::{DocumentReader, Records};
pub use variant::Variant;
