//! Page reordering and removal for a single PDF

use std::path::Path;

use lopdf::Document;

use crate::error::{Error, Result};
use crate::pages::PageSelection;
use crate::pdf::assemble::write_page_selection;

/// Summary of a completed organize operation
#[derive(Debug, Clone)]
pub struct OrganizeOutcome {
    /// Pages in the source document
    pub original_pages: usize,
    /// Pages written to the output
    pub pages_kept: usize,
    /// Pages dropped from the output
    pub pages_removed: usize,
}

/// Write a new PDF containing exactly the selected pages, in selection order
///
/// Pages absent from the selection are removed. The selection must reference
/// only pages that exist in the input.
///
/// # Example
///
/// ```no_run
/// use sopdf::pages::PageSelection;
/// use sopdf::pdf::organize_pdf;
/// use std::path::Path;
///
/// let selection = PageSelection::parse("3,1,2").expect("bad selection");
/// organize_pdf(Path::new("input.pdf"), Path::new("organized.pdf"), &selection)
///     .expect("Failed to organize");
/// ```
pub fn organize_pdf(
    input: &Path,
    output: &Path,
    selection: &PageSelection,
) -> Result<OrganizeOutcome> {
    if !input.exists() {
        return Err(Error::FileNotFound(input.to_path_buf()));
    }

    let doc = Document::load(input)?;

    let page_count = doc.get_pages().len();
    if page_count == 0 {
        return Err(Error::EmptyPdf(input.to_path_buf()));
    }

    selection.validate_against(page_count)?;

    write_page_selection(doc, selection.pages(), output)?;

    Ok(OrganizeOutcome {
        original_pages: page_count,
        pages_kept: selection.len(),
        pages_removed: page_count - selection.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_rejected() {
        let selection = PageSelection::parse("1").unwrap();
        let result = organize_pdf(
            Path::new("nonexistent.pdf"),
            Path::new("out.pdf"),
            &selection,
        );
        assert!(matches!(result, Err(Error::FileNotFound(_))));
    }

    // Reordering of real documents is covered in tests/integration.rs
}
