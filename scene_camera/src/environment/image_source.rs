/// ImageSource — location of an environment image (IBL map, skybox).
///
/// Only the string is validated here; loading is the renderer's job.

use std::fmt;
use std::str::FromStr;
use crate::error::{Error, Result};
use crate::camera_err;

/// URL or path of an image resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageSource(String);

impl ImageSource {
    /// Parse a source string.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidSource` if the string is empty or contains whitespace.
    pub fn parse(source: &str) -> Result<Self> {
        if source.is_empty() {
            return Err(camera_err!("scene_camera::ImageSource",
                Error::InvalidSource("source is empty".to_string())));
        }
        if source.chars().any(char::is_whitespace) {
            return Err(camera_err!("scene_camera::ImageSource",
                Error::InvalidSource(format!("'{}' contains whitespace", source))));
        }
        Ok(Self(source.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased file extension of the last path segment, if any.
    ///
    /// Query strings and fragments are ignored.
    pub fn extension(&self) -> Option<String> {
        let path = self.0.split(['?', '#']).next().unwrap_or_default();
        let file_name = path.rsplit('/').next().unwrap_or_default();
        let (stem, extension) = file_name.rsplit_once('.')?;
        if stem.is_empty() || extension.is_empty() {
            return None;
        }
        Some(extension.to_ascii_lowercase())
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ImageSource {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self> {
        Self::parse(source)
    }
}

impl TryFrom<&str> for ImageSource {
    type Error = Error;

    fn try_from(source: &str) -> Result<Self> {
        Self::parse(source)
    }
}

impl AsRef<str> for ImageSource {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[path = "image_source_tests.rs"]
mod tests;
