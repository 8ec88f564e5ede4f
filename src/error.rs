use std::io;

use thiserror::Error;

/// Failure while moving a document between memory and a file or stream.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read data")]
    Read { source: io::Error },
    #[error("failed to write data")]
    Write { source: io::Error },
}

/// Failure while turning a `{ a, b, c }` value back into items.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("item {index} could not be converted: {item:?}")]
    InvalidItem { index: usize, item: String },
}
