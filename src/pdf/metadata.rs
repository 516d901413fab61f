//! PDF metadata extraction

use std::path::Path;

use lopdf::{Document, Object};

use crate::error::{Error, Result};

/// Count pages by reading the Count field from the Pages dictionary
/// This is more reliable than get_pages() which doesn't handle nested page trees
fn count_pages_from_catalog(doc: &Document) -> Result<usize> {
    // Get the catalog (root)
    let catalog_ref = doc.trailer.get(b"Root")
        .map_err(|_| Error::General("No Root in trailer".to_string()))?;

    let catalog_id = match catalog_ref {
        Object::Reference(id) => *id,
        _ => return Err(Error::General("Root is not a reference".to_string())),
    };

    let catalog = doc.get_object(catalog_id)?;

    let catalog_dict = match catalog {
        Object::Dictionary(dict) => dict,
        _ => return Err(Error::General("Catalog is not a dictionary".to_string())),
    };

    // Get the Pages reference
    let pages_ref = catalog_dict.get(b"Pages")
        .map_err(|_| Error::General("No Pages in catalog".to_string()))?;

    let pages_id = match pages_ref {
        Object::Reference(id) => *id,
        _ => return Err(Error::General("Pages is not a reference".to_string())),
    };

    let pages_obj = doc.get_object(pages_id)?;

    let pages_dict = match pages_obj {
        Object::Dictionary(dict) => dict,
        _ => return Err(Error::General("Pages is not a dictionary".to_string())),
    };

    // Get the Count field
    let count = pages_dict.get(b"Count")
        .map_err(|_| Error::General("No Count in Pages".to_string()))?;

    match count {
        Object::Integer(n) => Ok(*n as usize),
        _ => Err(Error::General("Count is not an integer".to_string())),
    }
}

/// Information about a PDF file
#[derive(Debug, Clone)]
pub struct PdfInfo {
    /// Number of pages in the PDF
    pub page_count: usize,
    /// Document title (if present)
    pub title: Option<String>,
    /// Document author (if present)
    pub author: Option<String>,
    /// Size of the file on disk, in bytes
    pub file_size: u64,
}

/// Read a text entry from the document's Info dictionary
fn info_string(doc: &Document, key: &[u8]) -> Option<String> {
    let info_ref = doc.trailer.get(b"Info").ok()?;
    let info_id = match info_ref {
        Object::Reference(id) => *id,
        _ => return None,
    };
    let info_dict = doc.get_object(info_id).ok()?.as_dict().ok()?;
    let bytes = info_dict.get(key).ok()?.as_str().ok()?;
    String::from_utf8(bytes.to_vec()).ok()
}

/// Inspect a PDF file: page count, Info dictionary entries, on-disk size
pub fn inspect(path: &Path) -> Result<PdfInfo> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let file_size = std::fs::metadata(path)?.len();
    let doc = Document::load(path)?;

    // Use catalog-based counting for accuracy
    let page_count = count_pages_from_catalog(&doc)?;

    if page_count == 0 {
        return Err(Error::EmptyPdf(path.to_path_buf()));
    }

    Ok(PdfInfo {
        page_count,
        title: info_string(&doc, b"Title"),
        author: info_string(&doc, b"Author"),
        file_size,
    })
}

/// Count the number of pages in a PDF file
///
/// This is a quick operation that reads the Count field from the Pages dictionary.
pub fn count_pages(path: &Path) -> Result<usize> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let doc = Document::load(path)?;
    let page_count = count_pages_from_catalog(&doc)?;

    if page_count == 0 {
        return Err(Error::EmptyPdf(path.to_path_buf()));
    }

    Ok(page_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_pages_nonexistent_file() {
        let result = count_pages(Path::new("nonexistent.pdf"));
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::FileNotFound(_)));
    }

    #[test]
    fn test_inspect_nonexistent_file() {
        let result = inspect(Path::new("nonexistent.pdf"));
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::FileNotFound(_)));
    }

    // Integration tests with actual PDFs are in tests/ directory
}
