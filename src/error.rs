use pallet_tag_render_lopdf::RenderError;
use pallet_tag_source::SourceError;
use thiserror::Error;

/// Every failure that aborts tag generation. Logo problems never show up
/// here: they are logged and the document is built without the image.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Reading input failed: {0}")]
    Source(#[from] SourceError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
