use crate::error::PipelineError;
use pallet_tag_fields::FieldOptions;
use pallet_tag_source::DEFAULT_HEADER_LOOKAHEAD;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for one tag generation run. Missing keys in a config file fall
/// back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TagConfig {
    /// Logo image as a filesystem path or `file://` URL.
    pub logo_path: Option<PathBuf>,
    /// How many leading rows are searched for the header row.
    pub header_lookahead: usize,
    /// Also reformat the net weight to two decimals.
    pub format_net_weight: bool,
    pub compress_streams: bool,
    /// Directory for generated PDFs; next to the input when unset.
    pub output_dir: Option<PathBuf>,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            logo_path: None,
            header_lookahead: DEFAULT_HEADER_LOOKAHEAD,
            format_net_weight: false,
            compress_streams: true,
            output_dir: None,
        }
    }
}

impl TagConfig {
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            PipelineError::Config(format!(
                "Failed to read config from '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&json)
    }

    pub fn field_options(&self) -> FieldOptions {
        FieldOptions {
            format_net_weight: self.format_net_weight,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), PipelineError> {
        if self.header_lookahead == 0 {
            return Err(PipelineError::Config(
                "headerLookahead must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
