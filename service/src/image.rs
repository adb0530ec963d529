use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::ImageFormat;

use crate::error::Error;

/// Reported when the leading bytes match no known image signature.
const OCTET_STREAM: &str = "application/octet-stream";

/// Read an image file and wrap it as `data:<mime>;base64,<payload>`.
///
/// The content type is sniffed from the leading bytes of the file, never
/// from the extension.  Only JPEG and PNG are accepted by the service; any
/// other detected format is an error naming the offending type and path.
pub fn encode_image_file(path: &Path) -> Result<String, Error> {
    let bytes = fs::read(path).map_err(|source| Error::ImageRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mime = match image::guess_format(&bytes) {
        Ok(ImageFormat::Jpeg) => "image/jpeg",
        Ok(ImageFormat::Png) => "image/png",
        Ok(other) => {
            return Err(Error::UnsupportedMime {
                path: path.to_path_buf(),
                mime: other.to_mime_type().to_string(),
            })
        }
        Err(_) => {
            return Err(Error::UnsupportedMime {
                path: path.to_path_buf(),
                mime: OCTET_STREAM.to_string(),
            })
        }
    };

    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(&bytes)))
}
