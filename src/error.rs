// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Pdf(String),
    Image(String),
    /// The document opened fine but has no pages to show.
    EmptyDocument,
    PageOutOfRange {
        index: usize,
        count: usize,
    },
    InvalidFileName,
}

impl Error {
    /// Returns the i18n message key used when surfacing this error to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Pdf(_) => "error-pdf",
            Error::Image(_) => "error-image",
            Error::EmptyDocument => "error-empty-document",
            Error::PageOutOfRange { .. } => "error-page-out-of-range",
            Error::InvalidFileName => "error-invalid-file-name",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Pdf(e) => write!(f, "PDF Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::EmptyDocument => write!(f, "Document has no pages"),
            Error::PageOutOfRange { index, count } => {
                write!(f, "Page {} is out of range (document has {})", index, count)
            }
            Error::InvalidFileName => write!(f, "Invalid file name"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<mupdf::error::Error> for Error {
    fn from(err: mupdf::error::Error) -> Self {
        Error::Pdf(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
