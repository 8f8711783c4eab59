use super::config::TagConfig;
use super::orchestrator::TagPipeline;
use crate::error::PipelineError;
use pallet_tag_resource::FilesystemResourceProvider;
use pallet_tag_traits::ResourceProvider;
use std::path::PathBuf;
use std::sync::Arc;

/// A builder for creating a `TagPipeline`.
#[derive(Debug, Default)]
pub struct TagPipelineBuilder {
    config: TagConfig,
    resources: Option<Arc<dyn ResourceProvider>>,
}

impl TagPipelineBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Replaces every setting at once.
    pub fn with_config(mut self, config: TagConfig) -> Self {
        self.config = config;
        self
    }

    /// Logo path or `file://` URL, resolved by the resource provider.
    pub fn with_logo<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.logo_path = Some(path.into());
        self
    }

    /// Where the logo is loaded from. Defaults to the filesystem relative to
    /// the working directory.
    pub fn with_resource_provider(mut self, provider: Arc<dyn ResourceProvider>) -> Self {
        self.resources = Some(provider);
        self
    }

    pub fn with_format_net_weight(mut self, enabled: bool) -> Self {
        self.config.format_net_weight = enabled;
        self
    }

    pub fn with_output_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.config.output_dir = Some(dir.into());
        self
    }

    pub fn with_compression(mut self, compress: bool) -> Self {
        self.config.compress_streams = compress;
        self
    }

    pub fn with_header_lookahead(mut self, rows: usize) -> Self {
        self.config.header_lookahead = rows;
        self
    }

    pub fn build(self) -> Result<TagPipeline, PipelineError> {
        self.config.validate()?;
        let resources = self
            .resources
            .unwrap_or_else(|| Arc::new(FilesystemResourceProvider::current_dir()));
        log::debug!("Building tag pipeline with {} resources", resources.name());
        Ok(TagPipeline::new(self.config, resources))
    }
}
