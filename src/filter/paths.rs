use std::path::PathBuf;

use crate::error::FilterError;

pub const FILTERED_SUFFIX: &str = "_filtered_.ifc";
pub const INFO_SUFFIX: &str = "_info_.ifc";

/// Number of trailing characters stripped from the source path.
const EXTENSION_LEN: usize = 4;

/// Source path and the two output paths derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub source: PathBuf,
    pub filtered: PathBuf,
    pub info: PathBuf,
}

impl OutputPaths {
    /// Derives the output paths by dropping the last 4 characters of `source`
    /// and appending the fixed suffixes.
    ///
    /// The dropped characters are not checked to be an extension, so
    /// `"model.step"` becomes `"model._filtered_.ifc"`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::PathTooShort`] if `source` has fewer than 4
    /// characters.
    pub fn derive(source: &str) -> Result<Self, FilterError> {
        let stem = strip_extension(source).ok_or_else(|| FilterError::PathTooShort {
            path: source.to_string(),
        })?;

        Ok(Self {
            source: PathBuf::from(source),
            filtered: PathBuf::from(format!("{stem}{FILTERED_SUFFIX}")),
            info: PathBuf::from(format!("{stem}{INFO_SUFFIX}")),
        })
    }
}

/// Everything but the last [`EXTENSION_LEN`] characters, on a char boundary.
fn strip_extension(path: &str) -> Option<&str> {
    let (cut, _) = path.char_indices().rev().nth(EXTENSION_LEN - 1)?;
    Some(&path[..cut])
}
