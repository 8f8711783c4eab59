use crate::error::PipelineError;
use pallet_tag_fields::FieldOptions;
use pallet_tag_layout::{LOGO_HEIGHT_MM, LOGO_KEY, PageContext, PageLayoutEngine};
use pallet_tag_render_lopdf::{LopdfRenderer, RenderError};
use pallet_tag_resource::{LogoImage, load_logo};
use pallet_tag_traits::ResourceProvider;
use pallet_tag_types::{PageOps, Record, Size};
use std::sync::Arc;
use tokio::task;

/// A laid-out multi-page tag document, one page per record.
#[derive(Debug, Clone)]
pub struct TagDocument {
    page_size: Size,
    pages: Vec<PageOps>,
    logo: Option<Arc<LogoImage>>,
}

impl TagDocument {
    /// Starts a document with its initial blank page.
    fn new(page_size: Size, logo: Option<Arc<LogoImage>>) -> Self {
        Self {
            page_size,
            pages: vec![PageOps::new()],
            logo,
        }
    }

    fn add_page(&mut self) {
        self.pages.push(PageOps::new());
    }

    fn current_page_mut(&mut self) -> &mut PageOps {
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    pub fn pages(&self) -> &[PageOps] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn logo(&self) -> Option<&LogoImage> {
        self.logo.as_deref()
    }

    pub fn to_pdf(&self, compress: bool) -> Result<Vec<u8>, RenderError> {
        let renderer = LopdfRenderer::new(self.page_size).with_compression(compress);
        let images: Vec<(&str, &LogoImage)> =
            self.logo().map(|logo| (LOGO_KEY, logo)).into_iter().collect();
        renderer.render(&self.pages, &images)
    }
}

/// Lays out every record onto successive pages of one document, sharing a
/// single logo across all pages.
#[derive(Debug, Clone)]
pub struct DocumentAssembler {
    ctx: PageContext,
    options: FieldOptions,
    resources: Arc<dyn ResourceProvider>,
    logo_path: Option<String>,
}

impl DocumentAssembler {
    pub fn new(resources: Arc<dyn ResourceProvider>) -> Self {
        Self {
            ctx: PageContext::label_stock(),
            options: FieldOptions::default(),
            resources,
            logo_path: None,
        }
    }

    pub fn with_options(mut self, options: FieldOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_logo_path(mut self, path: Option<String>) -> Self {
        self.logo_path = path;
        self
    }

    pub fn with_context(mut self, ctx: PageContext) -> Self {
        self.ctx = ctx;
        self
    }

    /// Loads the logo once and lays out all records. Returns `None` when
    /// there are no records.
    pub async fn assemble(
        &self,
        records: &[Record],
        filename: &str,
    ) -> Result<Option<TagDocument>, PipelineError> {
        if records.is_empty() {
            log::warn!("No data rows in '{}'; nothing to generate", filename);
            return Ok(None);
        }
        let logo = self.load_logo().await?;
        Ok(self.build(records, filename, logo))
    }

    /// Synchronous layout with an already loaded logo.
    pub fn build(
        &self,
        records: &[Record],
        filename: &str,
        logo: Option<Arc<LogoImage>>,
    ) -> Option<TagDocument> {
        if records.is_empty() {
            return None;
        }

        let logo_size = logo.as_deref().map(|l| {
            let (width, height) = l.size_for_height(LOGO_HEIGHT_MM);
            Size::new(width, height)
        });
        let engine = PageLayoutEngine::new(self.ctx)
            .with_options(self.options)
            .with_logo(logo_size);

        let mut document = TagDocument::new(self.ctx.page_size(), logo);
        for (index, record) in records.iter().enumerate() {
            if index > 0 {
                document.add_page();
            }
            *document.current_page_mut() = engine.layout(record, filename);
        }

        log::debug!("Laid out {} tag page(s)", document.page_count());
        Some(document)
    }

    async fn load_logo(&self) -> Result<Option<Arc<LogoImage>>, PipelineError> {
        let Some(path) = self.logo_path.clone() else {
            log::info!("No logo configured; tags are generated without one");
            return Ok(None);
        };
        let resources = Arc::clone(&self.resources);
        let target = path.clone();
        let result = task::spawn_blocking(move || load_logo(resources.as_ref(), &target)).await?;

        match result {
            Ok(logo) => {
                log::info!(
                    "Loaded logo '{}' ({}x{} px)",
                    path,
                    logo.width_px,
                    logo.height_px
                );
                Ok(Some(Arc::new(logo)))
            }
            Err(e) => {
                log::warn!("Logo '{}' unavailable, continuing without it: {}", path, e);
                Ok(None)
            }
        }
    }
}
