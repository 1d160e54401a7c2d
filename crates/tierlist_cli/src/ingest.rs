//! Image file ingestion: turns files on disk into embeddable data URIs.
//!
//! # Invariants
//! - The mime type comes from the file's magic bytes, never its extension.
//! - Files that are not a recognized raster image produce no reference.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};
use tierlist_core::ImageRef;

/// Reasons a file does not become an image item.
#[derive(Debug)]
pub enum IngestError {
    /// File could not be read.
    Read { path: PathBuf, source: io::Error },
    /// File content is not a known image format.
    NotAnImage(PathBuf),
}

impl Display for IngestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "cannot read `{}`: {source}", path.display())
            }
            Self::NotAnImage(path) => write!(f, "`{}` is not an image", path.display()),
        }
    }
}

impl Error for IngestError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::NotAnImage(_) => None,
        }
    }
}

/// Reads `path` and encodes it as a `data:<mime>;base64,...` reference.
pub fn image_ref_from_file(path: &Path) -> Result<ImageRef, IngestError> {
    let bytes = std::fs::read(path).map_err(|source| IngestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mime = image_mime(&bytes).ok_or_else(|| IngestError::NotAnImage(path.to_path_buf()))?;
    Ok(image_ref_from_bytes(mime, &bytes))
}

pub fn image_ref_from_bytes(mime: &str, bytes: &[u8]) -> ImageRef {
    ImageRef::new(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

/// Sniffs an image mime type from the leading bytes.
fn image_mime(bytes: &[u8]) -> Option<&'static str> {
    infer::get(bytes)
        .filter(|kind| kind.matcher_type() == infer::MatcherType::Image)
        .map(|kind| kind.mime_type())
}
