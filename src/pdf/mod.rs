//! PDF manipulation module

mod assemble;
pub mod merge;
pub mod metadata;
pub mod organize;
pub mod split;

// Re-export commonly used items
pub use merge::{merge_pdfs, MergeOptions};
pub use metadata::{count_pages, inspect, PdfInfo};
pub use organize::{organize_pdf, OrganizeOutcome};
pub use split::{split_pdf, SplitOptions, SplitOutcome};
