//! sopdf Library
//!
//! A cross-platform library for organizing PDF files. This library provides
//! functionality to:
//! - Reorder and remove pages within a PDF
//! - Merge multiple PDF files
//! - Split a PDF into two parts at a chosen page
//! - Inspect PDFs (page counts, title, author, file size)
//! - Parse page-selection expressions like `"3,1,5-7"`
//!
//! # Example
//!
//! ```no_run
//! use sopdf::pages::PageSelection;
//! use sopdf::pdf::organize_pdf;
//! use std::path::Path;
//!
//! // Keep pages 3, 1 and 2, in that order; drop everything else
//! let selection = PageSelection::parse("3,1,2").expect("bad selection");
//! organize_pdf(
//!     Path::new("input.pdf"),
//!     Path::new("input_organized.pdf"),
//!     &selection,
//! ).expect("Failed to organize PDF");
//! ```

pub mod error;
pub mod files;
pub mod pages;
pub mod pdf;

// Re-export commonly used items
pub use error::{Error, Result};
