//! Poster images: reading a local file into a `data:` URI, and summarising a
//! stored URI for display.

use std::fmt;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use log::{debug, warn};

#[derive(Debug)]
pub enum PosterError {
    Io(std::io::Error),
    /// The file's extension doesn't map to an `image/*` type.
    NotAnImage(String),
}

impl fmt::Display for PosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PosterError::Io(e) => write!(f, "poster I/O error: {e}"),
            PosterError::NotAnImage(mime) => write!(f, "not an image file ({mime})"),
        }
    }
}

impl std::error::Error for PosterError {}

/// Encodes raw bytes as `data:<mime>;base64,<payload>`.
pub fn encode_data_uri(bytes: &[u8], mime: &str) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Reads an image file and returns it as a data URI.
pub async fn load_poster(path: &Path) -> Result<String, PosterError> {
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    if mime.type_().as_str() != "image" {
        warn!("Rejected poster {}: {}", path.display(), mime);
        return Err(PosterError::NotAnImage(mime.to_string()));
    }

    let bytes = tokio::fs::read(path).await.map_err(PosterError::Io)?;
    debug!("Read poster {} ({} bytes, {})", path.display(), bytes.len(), mime);
    Ok(encode_data_uri(&bytes, mime.essence_str()))
}

/// MIME type and decoded size of a base64 data URI, for the card summary.
pub fn describe_data_uri(uri: &str) -> Option<(&str, usize)> {
    let rest = uri.strip_prefix("data:")?;
    let (mime, payload) = rest.split_once(";base64,")?;
    let padding = payload.bytes().rev().take_while(|b| *b == b'=').count();
    let size = ((payload.len() / 4) * 3).saturating_sub(padding.min(2));
    Some((mime, size))
}

/// Human-readable byte size ("812 B", "12.3 KB", "1.4 MB").
pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    let b = bytes as f64;
    if b < KB {
        format!("{bytes} B")
    } else if b < KB * KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / (KB * KB))
    }
}
