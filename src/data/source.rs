//! Where point text comes from.

use crate::error::{Result, RoutePlotError};
use std::path::PathBuf;

/// Built-in point set used when no file is named.
pub const DEFAULT_POINTS: &str = "-3138 -2512
6804 -1072
-193 8782
-5168 2636
-8022 -3864
-9955 -2923
-7005 2118
7775 -8002
4244 -1339
9478 -1973
-7795 -5000
-4521 1266
-192 3337
-9860 1311";

/// Built-in route used when the route prompt is left empty.
pub const DEFAULT_ROUTE: &str =
    "7 -> 0 -> 0 -> 0 -> 0 -> 0 -> 0 -> 0 -> 0 -> 0 -> 0 -> 0 -> 0 -> 0 -> 0";

/// Source of the point text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointSource {
    /// The built-in dataset.
    Builtin,
    /// A user-named file.
    File(PathBuf),
}

impl PointSource {
    /// Select a source from a filename prompt response.
    ///
    /// Only an empty response selects the built-in dataset.
    pub fn from_response(response: &str) -> Self {
        if response.is_empty() {
            Self::Builtin
        } else {
            Self::File(PathBuf::from(response))
        }
    }

    /// Read the whole point text.
    ///
    /// The built-in source never touches the filesystem.
    pub fn load(&self) -> Result<String> {
        match self {
            Self::Builtin => {
                tracing::info!("Using built-in point set");
                Ok(DEFAULT_POINTS.to_string())
            }
            Self::File(path) => {
                tracing::info!("Reading points from {}", path.display());
                std::fs::read_to_string(path)
                    .map_err(|e| RoutePlotError::file_open(path.clone(), e))
            }
        }
    }

    /// Short label for status lines.
    pub fn label(&self) -> String {
        match self {
            Self::Builtin => "built-in points".to_string(),
            Self::File(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string()),
        }
    }
}
