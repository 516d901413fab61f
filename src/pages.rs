//! Page selection and ordering
//!
//! Provides the page-selection expression parser used by the organize command
//! and the reorder/remove model that backs an interactive front end.

use std::collections::BTreeSet;

use crate::error::{Error, Result};

/// An ordered, duplicate-free list of 1-based page numbers
///
/// This is the final shape of an organize operation: the pages to keep, in
/// the order they should appear in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSelection {
    pages: Vec<usize>,
}

impl PageSelection {
    /// Build a selection from explicit page numbers
    ///
    /// Rejects empty selections and duplicates. Range checking against a
    /// concrete document happens later, in [`validate_against`].
    ///
    /// [`validate_against`]: PageSelection::validate_against
    pub fn from_pages(pages: Vec<usize>) -> Result<Self> {
        if pages.is_empty() {
            return Err(Error::EmptySelection);
        }

        let mut seen = BTreeSet::new();
        for &page in &pages {
            if page == 0 {
                return Err(Error::InvalidPageSelection(
                    "page numbers start at 1".to_string(),
                ));
            }
            if !seen.insert(page) {
                return Err(Error::DuplicatePage(page));
            }
        }

        Ok(Self { pages })
    }

    /// Parse a selection expression like `"3,1,5-7,10-8"`
    ///
    /// Supported pieces, separated by commas:
    /// - `5` → a single page
    /// - `5-7` → pages 5, 6, 7
    /// - `7-5` → pages 7, 6, 5 (descending ranges reverse)
    pub fn parse(expr: &str) -> Result<Self> {
        let expr = expr.trim();

        if expr.is_empty() {
            return Err(Error::EmptySelection);
        }

        let mut pages = Vec::new();

        for piece in expr.split(',') {
            let piece = piece.trim();
            if piece.is_empty() {
                return Err(Error::InvalidPageSelection(format!(
                    "empty entry in selection: {}",
                    expr
                )));
            }

            if let Some((start_str, end_str)) = piece.split_once('-') {
                // Range: "5-7" or "7-5"
                let start = parse_page_number(start_str)?;
                let end = parse_page_number(end_str)?;

                if start <= end {
                    pages.extend(start..=end);
                } else {
                    pages.extend((end..=start).rev());
                }
            } else {
                pages.push(parse_page_number(piece)?);
            }
        }

        Self::from_pages(pages)
    }

    /// The selected pages, in output order
    pub fn pages(&self) -> &[usize] {
        &self.pages
    }

    /// Number of selected pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the selection is empty (never true for a constructed value)
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Check every selected page against a document's page count
    pub fn validate_against(&self, page_count: usize) -> Result<()> {
        for &page in &self.pages {
            if page > page_count {
                return Err(Error::PageOutOfRange { page, page_count });
            }
        }
        Ok(())
    }
}

/// Parse a single 1-based page number
fn parse_page_number(s: &str) -> Result<usize> {
    let s = s.trim();
    let page: usize = s
        .parse()
        .map_err(|_| Error::InvalidPageSelection(format!("not a page number: {}", s)))?;
    if page == 0 {
        return Err(Error::InvalidPageSelection(
            "page numbers start at 1".to_string(),
        ));
    }
    Ok(page)
}

/// Interactive reorder/remove model for a single document
///
/// Tracks the full original page order plus a removed set, so a removed page
/// keeps its slot in the order and can be restored in place. `active_pages`
/// yields exactly the pages a save operation should write.
#[derive(Debug, Clone)]
pub struct PageOrder {
    /// All original pages (1-based), in current order, removed ones included
    order: Vec<usize>,
    /// Pages currently marked as removed
    removed: BTreeSet<usize>,
    page_count: usize,
}

impl PageOrder {
    /// Start from a document's natural page order
    pub fn new(page_count: usize) -> Self {
        Self {
            order: (1..=page_count).collect(),
            removed: BTreeSet::new(),
            page_count,
        }
    }

    /// Number of pages in the source document
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// The kept pages, in current order
    pub fn active_pages(&self) -> Vec<usize> {
        self.order
            .iter()
            .copied()
            .filter(|page| !self.removed.contains(page))
            .collect()
    }

    /// The removed pages, in ascending page order
    pub fn removed_pages(&self) -> Vec<usize> {
        self.removed.iter().copied().collect()
    }

    /// Whether any page was removed or moved
    pub fn is_modified(&self) -> bool {
        !self.removed.is_empty() || self.order.iter().copied().ne(1..=self.page_count)
    }

    /// Mark a page as removed; removing an already-removed page is a no-op
    pub fn remove(&mut self, page: usize) -> Result<()> {
        self.check_page(page)?;
        self.removed.insert(page);
        Ok(())
    }

    /// Restore a removed page to its slot in the order
    pub fn restore(&mut self, page: usize) -> Result<()> {
        self.check_page(page)?;
        self.removed.remove(&page);
        Ok(())
    }

    /// Move an active page one slot earlier among the active pages
    pub fn move_up(&mut self, page: usize) -> Result<()> {
        let pos = self.active_position(page)?;
        if pos == 0 {
            return Ok(());
        }
        let active = self.active_pages();
        self.swap_in_order(page, active[pos - 1]);
        Ok(())
    }

    /// Move an active page one slot later among the active pages
    pub fn move_down(&mut self, page: usize) -> Result<()> {
        let pos = self.active_position(page)?;
        let active = self.active_pages();
        if pos + 1 >= active.len() {
            return Ok(());
        }
        self.swap_in_order(page, active[pos + 1]);
        Ok(())
    }

    /// Move an active page to a target position (0-based) among active pages
    pub fn move_to(&mut self, page: usize, position: usize) -> Result<()> {
        let from = self.active_position(page)?;

        let mut active = self.active_pages();
        let target = position.min(active.len() - 1);

        let moved = active.remove(from);
        active.insert(target, moved);

        // Rebuild the full order: active pages in their new order, removed
        // pages kept in their original slots.
        let mut rebuilt = Vec::with_capacity(self.order.len());
        let mut next_active = active.into_iter();
        for &page in &self.order {
            if self.removed.contains(&page) {
                rebuilt.push(page);
            } else {
                rebuilt.push(next_active.next().unwrap());
            }
        }
        self.order = rebuilt;
        Ok(())
    }

    /// Discard all changes and return to the original order
    pub fn reset(&mut self) {
        self.order = (1..=self.page_count).collect();
        self.removed.clear();
    }

    /// Finalize into a selection suitable for saving
    pub fn to_selection(&self) -> Result<PageSelection> {
        PageSelection::from_pages(self.active_pages())
    }

    fn check_page(&self, page: usize) -> Result<()> {
        if page == 0 || page > self.page_count {
            return Err(Error::PageOutOfRange {
                page,
                page_count: self.page_count,
            });
        }
        Ok(())
    }

    /// Position of a page among the active pages; removed pages are rejected
    fn active_position(&self, page: usize) -> Result<usize> {
        self.check_page(page)?;
        self.active_pages()
            .iter()
            .position(|&p| p == page)
            .ok_or(Error::PageOutOfRange {
                page,
                page_count: self.page_count,
            })
    }

    fn swap_in_order(&mut self, a: usize, b: usize) {
        let ia = self.order.iter().position(|&p| p == a).unwrap();
        let ib = self.order.iter().position(|&p| p == b).unwrap();
        self.order.swap(ia, ib);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_pages() {
        let sel = PageSelection::parse("3,1,2").unwrap();
        assert_eq!(sel.pages(), &[3, 1, 2]);
    }

    #[test]
    fn test_parse_ascending_range() {
        let sel = PageSelection::parse("1,5-7").unwrap();
        assert_eq!(sel.pages(), &[1, 5, 6, 7]);
    }

    #[test]
    fn test_parse_descending_range_reverses() {
        let sel = PageSelection::parse("10-8").unwrap();
        assert_eq!(sel.pages(), &[10, 9, 8]);
    }

    #[test]
    fn test_parse_with_whitespace() {
        let sel = PageSelection::parse(" 2 , 4 - 5 ").unwrap();
        assert_eq!(sel.pages(), &[2, 4, 5]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            PageSelection::parse("1,two,3"),
            Err(Error::InvalidPageSelection(_))
        ));
    }

    #[test]
    fn test_parse_rejects_page_zero() {
        assert!(matches!(
            PageSelection::parse("0-2"),
            Err(Error::InvalidPageSelection(_))
        ));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(PageSelection::parse(""), Err(Error::EmptySelection)));
        assert!(matches!(
            PageSelection::parse("1,,3"),
            Err(Error::InvalidPageSelection(_))
        ));
    }

    #[test]
    fn test_duplicate_pages_rejected() {
        assert!(matches!(
            PageSelection::parse("1,2,1"),
            Err(Error::DuplicatePage(1))
        ));
        assert!(matches!(
            PageSelection::parse("3,2-4"),
            Err(Error::DuplicatePage(3))
        ));
    }

    #[test]
    fn test_validate_against_page_count() {
        let sel = PageSelection::parse("1,4").unwrap();
        assert!(sel.validate_against(4).is_ok());
        assert!(matches!(
            sel.validate_against(3),
            Err(Error::PageOutOfRange { page: 4, page_count: 3 })
        ));
    }

    #[test]
    fn test_order_starts_natural() {
        let order = PageOrder::new(4);
        assert_eq!(order.active_pages(), vec![1, 2, 3, 4]);
        assert!(!order.is_modified());
    }

    #[test]
    fn test_remove_and_restore() {
        let mut order = PageOrder::new(4);
        order.remove(2).unwrap();
        order.remove(2).unwrap(); // no-op
        assert_eq!(order.active_pages(), vec![1, 3, 4]);
        assert_eq!(order.removed_pages(), vec![2]);
        assert!(order.is_modified());

        // Restored page returns to its original slot
        order.restore(2).unwrap();
        assert_eq!(order.active_pages(), vec![1, 2, 3, 4]);
        assert!(!order.is_modified());
    }

    #[test]
    fn test_move_up_and_down() {
        let mut order = PageOrder::new(3);
        order.move_up(2).unwrap();
        assert_eq!(order.active_pages(), vec![2, 1, 3]);

        // Moving the first page up is a no-op
        order.move_up(2).unwrap();
        assert_eq!(order.active_pages(), vec![2, 1, 3]);

        order.move_down(1).unwrap();
        assert_eq!(order.active_pages(), vec![2, 3, 1]);

        // Moving the last page down is a no-op
        order.move_down(1).unwrap();
        assert_eq!(order.active_pages(), vec![2, 3, 1]);
    }

    #[test]
    fn test_move_skips_removed_pages() {
        let mut order = PageOrder::new(4);
        order.remove(2).unwrap();
        // Active: [1, 3, 4]; moving 3 up swaps with 1, not with removed 2
        order.move_up(3).unwrap();
        assert_eq!(order.active_pages(), vec![3, 1, 4]);

        // Removed pages cannot be moved
        assert!(order.move_up(2).is_err());
    }

    #[test]
    fn test_move_to_position() {
        let mut order = PageOrder::new(5);
        order.move_to(5, 0).unwrap();
        assert_eq!(order.active_pages(), vec![5, 1, 2, 3, 4]);

        // Positions past the end clamp to the last slot
        order.move_to(5, 99).unwrap();
        assert_eq!(order.active_pages(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_reset() {
        let mut order = PageOrder::new(3);
        order.remove(1).unwrap();
        order.move_up(3).unwrap();
        order.reset();
        assert_eq!(order.active_pages(), vec![1, 2, 3]);
        assert!(!order.is_modified());
    }

    #[test]
    fn test_to_selection_rejects_all_removed() {
        let mut order = PageOrder::new(2);
        order.remove(1).unwrap();
        order.remove(2).unwrap();
        assert!(matches!(order.to_selection(), Err(Error::EmptySelection)));
    }

    #[test]
    fn test_out_of_range_pages_rejected() {
        let mut order = PageOrder::new(3);
        assert!(order.remove(0).is_err());
        assert!(order.remove(4).is_err());
    }
}
