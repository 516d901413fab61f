//! Document assembly shared by the organize and split operations

use std::path::Path;

use lopdf::{Dictionary, Document, Object, ObjectId};

use crate::error::{Error, Result};

/// Page-tree attributes a page may inherit from its ancestors
const INHERITABLE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Copy inherited page-tree attributes down onto a page dictionary
///
/// Pages are about to be reparented under a new Pages node, which severs
/// their link to any Resources/MediaBox defined on ancestor nodes. Copying
/// the values onto the page itself keeps it self-contained.
pub(crate) fn flatten_inherited_attributes(doc: &mut Document, page_id: ObjectId) -> Result<()> {
    for key in INHERITABLE_KEYS {
        if let Some(value) = inherited_value(doc, page_id, key)? {
            doc.get_object_mut(page_id)?.as_dict_mut()?.set(key, value);
        }
    }
    Ok(())
}

/// Look up an attribute on a page's ancestors; `None` if the page already
/// carries it or no ancestor defines it
fn inherited_value(doc: &Document, page_id: ObjectId, key: &[u8]) -> Result<Option<Object>> {
    let mut current = page_id;
    // Parent chains are short; the cap guards against malformed cyclic trees
    for _ in 0..32 {
        let dict = doc.get_object(current)?.as_dict()?;
        if let Ok(value) = dict.get(key) {
            return Ok(if current == page_id {
                None
            } else {
                Some(value.clone())
            });
        }
        match dict.get(b"Parent") {
            Ok(Object::Reference(parent)) => current = *parent,
            _ => break,
        }
    }
    Ok(None)
}

/// Write a new PDF containing the given pages of `source`, in order
///
/// Page numbers are 1-based. The source's objects are carried into a fresh
/// document and a new Pages/Catalog pair is hung over the chosen pages;
/// everything the dropped pages referenced becomes unreachable and is pruned
/// before saving.
pub(crate) fn write_page_selection(
    mut source: Document,
    page_numbers: &[usize],
    output: &Path,
) -> Result<()> {
    if page_numbers.is_empty() {
        return Err(Error::EmptySelection);
    }

    let pages = source.get_pages();
    let page_count = pages.len();

    let mut selected: Vec<ObjectId> = Vec::with_capacity(page_numbers.len());
    for &number in page_numbers {
        let id = pages
            .get(&(number as u32))
            .copied()
            .ok_or(Error::PageOutOfRange {
                page: number,
                page_count,
            })?;
        selected.push(id);
    }

    // Make each kept page self-contained before it loses its old parent
    for &page_id in &selected {
        flatten_inherited_attributes(&mut source, page_id)?;
    }

    let mut doc = Document::with_version("1.5");
    let max_id = source.max_id;
    doc.objects.extend(source.objects);
    doc.max_id = max_id;

    let pages_id = doc.new_object_id();

    let kids: Vec<Object> = selected.iter().map(|&id| Object::Reference(id)).collect();

    let mut pages_object = Dictionary::new();
    pages_object.set("Type", Object::Name(b"Pages".to_vec()));
    pages_object.set("Count", Object::Integer(selected.len() as i64));
    pages_object.set("Kids", Object::Array(kids));

    let catalog_id = doc.new_object_id();
    let mut catalog = Dictionary::new();
    catalog.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog.set("Pages", Object::Reference(pages_id));

    doc.objects.insert(catalog_id, Object::Dictionary(catalog));
    doc.objects.insert(pages_id, Object::Dictionary(pages_object));
    doc.trailer.set("Root", Object::Reference(catalog_id));

    // Reparent the kept pages under the new Pages node
    for &page_id in &selected {
        if let Ok(Object::Dictionary(ref mut dict)) = doc.get_object_mut(page_id) {
            dict.set("Parent", Object::Reference(pages_id));
        }
    }

    // Dropped pages and the old catalog are unreachable from the new Root
    doc.prune_objects();
    doc.compress();
    doc.save(output)?;

    Ok(())
}
