use std::path::PathBuf;

use thiserror::Error;

use crate::value::ElementId;

/// Failures while loading or checking a preset table.
#[derive(Debug, Error)]
pub enum PresetError {
    #[error("failed to read preset file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse preset file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid {section} preset for {element}: {reason}")]
    Invalid {
        section: &'static str,
        element: ElementId,
        reason: String,
    },
}
