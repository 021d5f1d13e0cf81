use std::path::PathBuf;

use thiserror::Error;

/// The central error type for all operations in png2jpg.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("cannot decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("JPEG encode error: {source}")]
    Encode {
        #[source]
        source: image::ImageError,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// Wrapped foreign errors are not comparable, so only the variant is matched.
impl PartialEq for ConvertError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ConvertError::Decode { path: p1, .. }, ConvertError::Decode { path: p2, .. }) => {
                p1 == p2
            }
            (ConvertError::Encode { .. }, ConvertError::Encode { .. }) => true,
            (ConvertError::Write { path: p1, .. }, ConvertError::Write { path: p2, .. }) => {
                p1 == p2
            }
            _ => false,
        }
    }
}

/// A centralized result type for our library.
pub type Result<T> = std::result::Result<T, ConvertError>;
