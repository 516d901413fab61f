//! Error types for the sopdf library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the sopdf library
#[derive(Error, Debug)]
pub enum Error {
    /// PDF processing error
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Invalid PDF (no pages)
    #[error("PDF has no pages: {}", .0.display())]
    EmptyPdf(PathBuf),

    /// Merge needs at least two inputs
    #[error("At least 2 PDF files are required to merge, got {0}")]
    TooFewInputs(usize),

    /// Split needs at least two pages
    #[error("PDF must have at least 2 pages to split: {} has {pages}", .path.display())]
    TooFewPages { path: PathBuf, pages: usize },

    /// Split point outside 1..=page_count-1
    #[error("Invalid split point {split_after} for a {page_count}-page PDF: both parts must be non-empty")]
    InvalidSplitPoint { split_after: usize, page_count: usize },

    /// Page selection contains no pages
    #[error("Page selection is empty: the output PDF would have no pages")]
    EmptySelection,

    /// Selected page does not exist in the document
    #[error("Page {page} is out of range: PDF has {page_count} pages")]
    PageOutOfRange { page: usize, page_count: usize },

    /// Selected page appears more than once
    #[error("Page {0} appears more than once in the selection")]
    DuplicatePage(usize),

    /// Page selection string could not be parsed
    #[error("Invalid page selection: {0}")]
    InvalidPageSelection(String),

    /// Invalid glob pattern
    #[error("Invalid glob pattern: {0}")]
    InvalidGlob(String),

    /// No files matched pattern
    #[error("No PDF files found matching pattern: {0}")]
    NoFilesMatched(String),

    /// General error
    #[error("{0}")]
    General(String),
}
