//! Asset providers for pallet tag generation.
//!
//! - [`FilesystemResourceProvider`]: reads assets from disk
//! - [`InMemoryResourceProvider`]: re-exported pre-populated store
//! - [`LogoImage`]: decoded logo shared by every page of a document

mod filesystem;
mod logo;

pub use filesystem::FilesystemResourceProvider;
pub use logo::{LogoImage, load_logo};

pub use pallet_tag_traits::InMemoryResourceProvider;
