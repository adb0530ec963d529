use std::path::PathBuf;

use crate::error::Error;

/// Immutable invocation configuration.  Constructed once from the parsed
/// command line and passed by reference to every component.
#[derive(Debug, Clone)]
pub struct Config {
    /// BioID Web Service application identifier.
    pub app_id: String,
    /// BioID Web Service application secret.
    pub app_secret: String,
    /// Path to the first source image.
    pub image1: PathBuf,
    /// Path to the second source image.
    pub image2: PathBuf,
    /// Request the extended diagnostic fields and render the full report.
    pub detailed: bool,
}

impl Config {
    /// Reject empty required fields.  Runs before any file or network I/O
    /// so an incomplete configuration never touches the filesystem.
    pub fn validate(&self) -> Result<(), Error> {
        if self.app_id.is_empty() {
            return Err(Error::MissingArgument("BWSAppID"));
        }
        if self.app_secret.is_empty() {
            return Err(Error::MissingArgument("BWSAppSecret"));
        }
        if self.image1.as_os_str().is_empty() {
            return Err(Error::MissingArgument("image1"));
        }
        if self.image2.as_os_str().is_empty() {
            return Err(Error::MissingArgument("image2"));
        }
        Ok(())
    }
}
