//! Pallet tag generation.
//!
//! Reads the first sheet of a spreadsheet (or a CSV file), maps each data
//! row to a record keyed by its cleaned header, and lays out one 6 in x 4 in
//! tag per record into a single PDF.
//!
//! ```no_run
//! # async fn run() -> Result<(), pallet_tag::PipelineError> {
//! let pipeline = pallet_tag::TagPipelineBuilder::new()
//!     .with_logo("assets/logo.png")
//!     .build()?;
//! pipeline.generate_to_file("TAGS CONT #03.xlsx").await?;
//! # Ok(())
//! # }
//! ```

pub mod assembler;
pub mod error;
pub mod pipeline;

pub use assembler::{DocumentAssembler, TagDocument};
pub use error::PipelineError;
pub use pipeline::{TagConfig, TagPipeline, TagPipelineBuilder, output_path_for};

pub use pallet_tag_fields::{FieldOptions, TagFields};
pub use pallet_tag_layout::{PageContext, PageLayoutEngine};
pub use pallet_tag_types::{CellValue, DrawOp, PageOps, Record};
