pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use pallet_tag::{PipelineError, TagPipeline};
use std::path::{Path, PathBuf};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_bytes(std::fs::read(path)?)
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }
}

pub fn runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Runs the pipeline on `input` and writes the PDF, returning its path.
pub fn generate_file(
    pipeline: &TagPipeline,
    input: &Path,
) -> Result<Option<PathBuf>, PipelineError> {
    runtime()?.block_on(pipeline.generate_to_file(input))
}

/// Runs the pipeline on `input` and loads the resulting PDF from memory.
pub fn generate_pdf(
    pipeline: &TagPipeline,
    input: &Path,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let document = runtime()?
        .block_on(pipeline.generate(input))?
        .ok_or("no document was generated")?;
    let bytes = document.to_pdf(pipeline.config().compress_streams)?;
    GeneratedPdf::from_bytes(bytes)
}
