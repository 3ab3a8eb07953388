use std::io;
use std::path::Path;

use common_types::PDF_CONTENT_TYPE;
use mime::Mime;

/// A file picked by the user, with the media type its source declared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Original file name, sent as the desired object name
    pub name: String,
    /// Declared media type
    pub media_type: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    /// Creates a file from in-memory contents
    #[must_use]
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Reads a file from disk, declaring its media type from the extension
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file cannot be read
    pub async fn from_path(path: &Path) -> io::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            name,
            media_type: media_type_for(path).to_string(),
            bytes,
        })
    }

    /// Whether the declared media type is exactly `application/pdf`
    #[must_use]
    pub fn is_pdf(&self) -> bool {
        self.media_type == PDF_CONTENT_TYPE
    }
}

/// Media type a browser would declare for `path`, based on its extension
#[must_use]
pub fn media_type_for(path: &Path) -> Mime {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("pdf") => mime::APPLICATION_PDF,
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}
