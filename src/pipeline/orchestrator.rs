use super::config::TagConfig;
use crate::assembler::{DocumentAssembler, TagDocument};
use crate::error::PipelineError;
use pallet_tag_source::{Sheet, SourceError, open_source, read_records};
use pallet_tag_traits::ResourceProvider;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task;

/// Reads a spreadsheet and produces one tag page per data row.
#[derive(Debug, Clone)]
pub struct TagPipeline {
    config: TagConfig,
    resources: Arc<dyn ResourceProvider>,
}

impl TagPipeline {
    pub(crate) fn new(config: TagConfig, resources: Arc<dyn ResourceProvider>) -> Self {
        Self { config, resources }
    }

    pub fn config(&self) -> &TagConfig {
        &self.config
    }

    /// Reads `input` and lays out its records. Returns `None` when the file
    /// has no data rows.
    pub async fn generate<P: AsRef<Path>>(
        &self,
        input: P,
    ) -> Result<Option<TagDocument>, PipelineError> {
        let input = input.as_ref();
        let filename = file_name(input);
        let sheet = self.read(input.to_path_buf()).await?;
        log::info!(
            "Read '{}': header row {}, {} record(s)",
            filename,
            sheet.header_row_index,
            sheet.records.len()
        );

        let logo_path = self
            .config
            .logo_path
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned());
        let assembler = DocumentAssembler::new(Arc::clone(&self.resources))
            .with_options(self.config.field_options())
            .with_logo_path(logo_path);
        assembler.assemble(&sheet.records, &filename).await
    }

    /// Generates and writes the PDF next to the input (or into the output
    /// directory). Returns the written path, or `None` when nothing was
    /// generated.
    pub async fn generate_to_file<P: AsRef<Path>>(
        &self,
        input: P,
    ) -> Result<Option<PathBuf>, PipelineError> {
        let input = input.as_ref();
        let Some(document) = self.generate(input).await? else {
            return Ok(None);
        };

        let bytes = document.to_pdf(self.config.compress_streams)?;
        let output = output_path_for(input, self.config.output_dir.as_deref());
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output, bytes)?;

        log::info!(
            "Wrote {} page(s) to {}",
            document.page_count(),
            output.display()
        );
        Ok(Some(output))
    }

    async fn read(&self, path: PathBuf) -> Result<Sheet, PipelineError> {
        let lookahead = self.config.header_lookahead;
        let sheet = task::spawn_blocking(move || -> Result<Sheet, SourceError> {
            let mut source = open_source(&path)?;
            Ok(read_records(source.as_mut(), lookahead))
        })
        .await??;
        Ok(sheet)
    }
}

/// The input path with its extension replaced by `pdf`, moved into
/// `output_dir` when one is given.
pub fn output_path_for(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let pdf = input.with_extension("pdf");
    match (output_dir, pdf.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => pdf,
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
