pub mod metrics;
pub mod resource;

pub use metrics::TextMetrics;
pub use resource::{InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData};
