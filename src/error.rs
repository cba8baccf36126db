//! Errors of the pattern import path.
//!
//! The simulation core itself is total and never fails.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("pattern has no rows")]
    Empty,

    #[error("RLE header line `x = <width>, y = <height>` is missing")]
    MissingRleHeader,

    #[error("RLE pattern declares a zero size ({width}x{height})")]
    ZeroSize { width: usize, height: usize },

    #[error("RLE pattern declares {width}x{height} cells, more than a stamp can hold")]
    TooLarge { width: usize, height: usize },

    #[error("RLE cell ({x}, {y}) lies outside the declared {width}x{height} box")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("unexpected symbol {symbol:?} in RLE data at byte {offset}")]
    UnexpectedSymbol { symbol: char, offset: usize },

    #[error("unsupported pattern file extension: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to read pattern file {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed lexicon entry: {0}")]
    Json(#[from] serde_json::Error),
}
