mod builder;
mod config;
mod orchestrator;

pub use builder::TagPipelineBuilder;
pub use config::TagConfig;
pub use orchestrator::{TagPipeline, output_path_for};
