use std::path::PathBuf;

use thiserror::Error;

/// Fatal error kinds of a client invocation.  Each variant corresponds to
/// one failure class the top-level handler turns into a non-zero exit;
/// decode failures in detailed mode are deliberately not represented here
/// because they only produce a warning.
#[derive(Debug, Error)]
pub enum Error {
    #[error("required argument {0} is empty")]
    MissingArgument(&'static str),

    #[error("could not read image {}: {}", .path.display(), .source)]
    ImageRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("mime type {} for {} is not supported", .mime, .path.display())]
    UnsupportedMime { path: PathBuf, mime: String },

    #[error("received http response code != 200: {0}")]
    UnexpectedStatus(u16),
}
