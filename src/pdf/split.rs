//! Splitting a PDF into two parts at a chosen page

use std::path::{Path, PathBuf};

use lopdf::Document;

use crate::error::{Error, Result};
use crate::pdf::assemble::write_page_selection;

/// Options for splitting a PDF
#[derive(Debug, Clone)]
pub struct SplitOptions {
    /// Input PDF file path
    pub input_path: PathBuf,
    /// Directory where both parts are written
    pub output_dir: PathBuf,
    /// Last page of part 1; part 2 starts at `split_after + 1`
    pub split_after: usize,
}

/// Paths and page counts of the two parts produced by a split
#[derive(Debug, Clone)]
pub struct SplitOutcome {
    pub part1_path: PathBuf,
    pub part1_pages: usize,
    pub part2_path: PathBuf,
    pub part2_pages: usize,
}

/// Split a PDF into two files at the given page
///
/// Part 1 holds pages `1..=split_after`, part 2 holds the rest. Outputs are
/// named `{stem}_part1.pdf` and `{stem}_part2.pdf` in the output directory,
/// which is created if it does not exist. The input must have at least two
/// pages and the split point must leave both parts non-empty.
pub fn split_pdf(options: &SplitOptions) -> Result<SplitOutcome> {
    let input = &options.input_path;

    if !input.exists() {
        return Err(Error::FileNotFound(input.clone()));
    }

    let doc = Document::load(input)?;
    let page_count = doc.get_pages().len();

    if page_count < 2 {
        return Err(Error::TooFewPages {
            path: input.clone(),
            pages: page_count,
        });
    }

    let split_after = options.split_after;
    if split_after < 1 || split_after >= page_count {
        return Err(Error::InvalidSplitPoint {
            split_after,
            page_count,
        });
    }

    std::fs::create_dir_all(&options.output_dir)?;

    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("split");

    let part1_path = options.output_dir.join(format!("{}_part1.pdf", stem));
    let part2_path = options.output_dir.join(format!("{}_part2.pdf", stem));

    let part1_pages: Vec<usize> = (1..=split_after).collect();
    let part2_pages: Vec<usize> = (split_after + 1..=page_count).collect();

    write_page_selection(doc, &part1_pages, &part1_path)?;

    // The first write consumed the document; load again for part 2
    let doc = Document::load(input)?;
    write_page_selection(doc, &part2_pages, &part2_path)?;

    Ok(SplitOutcome {
        part1_path,
        part1_pages: part1_pages.len(),
        part2_path,
        part2_pages: part2_pages.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_rejected() {
        let options = SplitOptions {
            input_path: PathBuf::from("nonexistent.pdf"),
            output_dir: PathBuf::from("."),
            split_after: 1,
        };
        let result = split_pdf(&options);
        assert!(matches!(result, Err(Error::FileNotFound(_))));
    }

    // Splitting of real documents is covered in tests/integration.rs
}
