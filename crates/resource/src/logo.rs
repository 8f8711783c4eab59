use pallet_tag_traits::{ResourceError, ResourceProvider};

/// A decoded raster image ready to embed, stored as 8-bit RGB.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoImage {
    pub width_px: u32,
    pub height_px: u32,
    pub rgb: Vec<u8>,
}

impl LogoImage {
    /// Decodes PNG, JPEG or GIF bytes. Alpha is discarded.
    pub fn decode(bytes: &[u8]) -> Result<Self, ResourceError> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| ResourceError::InvalidFormat(e.to_string()))?;
        let rgb = image.to_rgb8();
        let (width_px, height_px) = rgb.dimensions();
        if width_px == 0 || height_px == 0 {
            return Err(ResourceError::InvalidFormat("image has no pixels".to_string()));
        }
        Ok(Self {
            width_px,
            height_px,
            rgb: rgb.into_raw(),
        })
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width_px as f32 / self.height_px as f32
    }

    /// Placement size `(width, height)` for a fixed `height`, keeping the
    /// aspect ratio.
    pub fn size_for_height(&self, height: f32) -> (f32, f32) {
        (height * self.aspect_ratio(), height)
    }
}

/// Loads and decodes the logo at `path`.
pub fn load_logo(provider: &dyn ResourceProvider, path: &str) -> Result<LogoImage, ResourceError> {
    let bytes = provider.load(path)?;
    let logo = LogoImage::decode(&bytes)?;
    log::debug!(
        "Decoded logo '{}' ({}x{} px) via {}",
        path,
        logo.width_px,
        logo.height_px,
        provider.name()
    );
    Ok(logo)
}
