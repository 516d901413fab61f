//! File utilities
//!
//! Filename hygiene, human-readable sizes, a cheap PDF sniff, and glob
//! expansion for multi-file commands.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use glob::glob;

use crate::error::{Error, Result};

/// Ensure a filename ends in `.pdf` (case-insensitive check)
pub fn ensure_pdf_extension(name: &str) -> String {
    if name.to_lowercase().ends_with(".pdf") {
        name.to_string()
    } else {
        format!("{}.pdf", name)
    }
}

/// Make a filename safe by replacing characters invalid on common filesystems
///
/// Strips `<>:"/\|?*`, trims leading/trailing spaces and dots, and falls back
/// to `untitled` if nothing is left.
pub fn safe_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if matches!(c, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*') {
                '_'
            } else {
                c
            }
        })
        .collect();

    let trimmed = cleaned.trim_matches(|c| c == ' ' || c == '.');

    if trimmed.is_empty() {
        "untitled".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Format a byte count as a human-readable size (e.g., "1.5 MB")
pub fn format_file_size(size_bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    if size_bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = size_bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    format!("{:.1} {}", size, UNITS[unit])
}

/// Quick check that a path plausibly points at a PDF file
///
/// Requires the file to exist, carry a `.pdf` extension, and start with the
/// `%PDF-` magic bytes. This is a sniff, not a parse.
pub fn looks_like_pdf(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }

    let has_pdf_extension = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);
    if !has_pdf_extension {
        return false;
    }

    let mut header = [0u8; 5];
    match File::open(path).and_then(|mut f| f.read_exact(&mut header)) {
        Ok(()) => &header == b"%PDF-",
        Err(_) => false,
    }
}

/// Expand glob patterns in input paths
///
/// Arguments without glob characters are passed through as literal paths.
/// Matches for each pattern are sorted so numbered files merge in order.
pub fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for pattern in patterns {
        if pattern.contains('*') || pattern.contains('?') || pattern.contains('[') {
            let entries =
                glob(pattern).map_err(|e| Error::InvalidGlob(format!("{}: {}", pattern, e)))?;

            let mut matched: Vec<PathBuf> = Vec::new();
            for entry in entries {
                match entry {
                    Ok(path) => matched.push(path),
                    Err(e) => eprintln!("Warning: glob error for {}: {}", pattern, e),
                }
            }

            if matched.is_empty() {
                return Err(Error::NoFilesMatched(pattern.clone()));
            }

            matched.sort();
            paths.extend(matched);
        } else {
            paths.push(PathBuf::from(pattern));
        }
    }

    Ok(paths)
}
