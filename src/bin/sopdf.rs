//! sopdf CLI tool
//!
//! A command-line tool for organizing PDF files: reorder/remove pages,
//! merge multiple PDFs, and split a PDF at a chosen point.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;

use sopdf::files::{ensure_pdf_extension, expand_globs, format_file_size, looks_like_pdf};
use sopdf::pages::PageSelection;
use sopdf::pdf::{inspect, merge_pdfs, organize_pdf, split_pdf, MergeOptions, SplitOptions};

/// sopdf - Organize, merge, and split PDF files
#[derive(Parser)]
#[command(name = "sopdf")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Keep pages 3, 1 and 2 of a PDF, in that order
    sopdf organize input.pdf --pages 3,1,2 -o reordered.pdf

    # Drop the cover page of a 10-page PDF
    sopdf organize input.pdf --pages 2-10

    # Merge numbered PDFs in order
    sopdf merge \"[0-9]*.pdf\" -o combined.pdf

    # Split after page 4 into input_part1.pdf and input_part2.pdf
    sopdf split input.pdf --after 4

    # Show page count and metadata
    sopdf info input.pdf")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reorder and remove pages of a PDF
    Organize {
        /// Input PDF file
        input: PathBuf,

        /// Pages to keep, in output order (e.g., "3,1,2" or "1,5-7,10-8")
        #[arg(short, long)]
        pages: String,

        /// Output PDF file path (defaults to "<input>_organized.pdf")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Open the output file after creation
        #[arg(long)]
        open: bool,
    },

    /// Merge multiple PDF files into one
    Merge {
        /// Input PDF files (in order). Supports glob patterns like "*.pdf"
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Output PDF file path
        #[arg(short, long)]
        output: PathBuf,

        /// Open the output file after creation
        #[arg(long)]
        open: bool,
    },

    /// Split a PDF into two parts
    Split {
        /// Input PDF file
        input: PathBuf,

        /// Last page of part 1; part 2 starts at the next page
        #[arg(long)]
        after: usize,

        /// Directory for the two output files (defaults to the input's directory)
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// Show information about a PDF file
    Info {
        /// PDF file to inspect
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Organize { input, pages, output, open } => {
            cmd_organize(input, pages, output, open)
        }
        Commands::Merge { inputs, output, open } => {
            cmd_merge(inputs, output, open)
        }
        Commands::Split { input, after, output_dir } => {
            cmd_split(input, after, output_dir)
        }
        Commands::Info { input } => {
            cmd_info(input)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Append a .pdf extension to an output path whose name is missing one
fn normalize_output(path: &Path) -> PathBuf {
    match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => path.with_file_name(ensure_pdf_extension(name)),
        None => path.to_path_buf(),
    }
}

/// Open a file with the system default application
fn open_file(path: &Path) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(path)
            .spawn()?;
    }
    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(path)
            .spawn()?;
    }
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", "", &path.display().to_string()])
            .spawn()?;
    }
    Ok(())
}

/// Reorder/remove pages of a single PDF
fn cmd_organize(
    input: PathBuf,
    pages: String,
    output: Option<PathBuf>,
    open: bool,
) -> Result<()> {
    let selection = PageSelection::parse(&pages)?;

    // Default output name matches the original tool: "<stem>_organized.pdf"
    let output = match output {
        Some(path) => normalize_output(&path),
        None => {
            let stem = input
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("untitled");
            input.with_file_name(format!("{}_organized.pdf", stem))
        }
    };

    eprintln!("Organizing {} pages...", selection.len());

    let outcome = organize_pdf(&input, &output, &selection)
        .with_context(|| format!("Failed to organize {}", input.display()))?;

    eprintln!(
        "Kept {} of {} pages ({} removed)",
        outcome.pages_kept, outcome.original_pages, outcome.pages_removed
    );
    eprintln!("Output: {}", output.display());

    if open {
        open_file(&output)?;
    }

    Ok(())
}

/// Merge multiple PDFs into one
fn cmd_merge(inputs: Vec<String>, output: PathBuf, open: bool) -> Result<()> {
    // Expand glob patterns
    let inputs = expand_globs(&inputs)?;

    // Warn about inputs that don't look like PDFs; the merge itself will
    // reject anything that fails to parse
    for path in &inputs {
        if !looks_like_pdf(path) {
            eprintln!("Warning: {} does not look like a PDF file", path.display());
        }
    }

    let output = normalize_output(&output);

    eprintln!("Merging {} PDF files...", inputs.len());

    let options = MergeOptions {
        input_paths: inputs,
        output_path: output.clone(),
    };

    merge_pdfs(&options).context("Failed to merge PDFs")?;

    eprintln!("Merged to: {}", output.display());

    if open {
        open_file(&output)?;
    }

    Ok(())
}

/// Split a PDF into two parts
fn cmd_split(input: PathBuf, after: usize, output_dir: Option<PathBuf>) -> Result<()> {
    let output_dir = output_dir.unwrap_or_else(|| {
        input
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    });

    let options = SplitOptions {
        input_path: input.clone(),
        output_dir,
        split_after: after,
    };

    let outcome = split_pdf(&options)
        .with_context(|| format!("Failed to split {}", input.display()))?;

    eprintln!("Split after page {}:", after);
    println!(
        "Part 1: {} ({} pages)",
        outcome.part1_path.display(),
        outcome.part1_pages
    );
    println!(
        "Part 2: {} ({} pages)",
        outcome.part2_path.display(),
        outcome.part2_pages
    );

    Ok(())
}

/// Show information about a PDF
fn cmd_info(input: PathBuf) -> Result<()> {
    let info = inspect(&input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    println!("File: {}", input.display());
    println!("Size: {}", format_file_size(info.file_size));
    println!("Pages: {}", info.page_count);

    if let Some(title) = info.title {
        println!("Title: {}", title);
    }
    if let Some(author) = info.author {
        println!("Author: {}", author);
    }

    Ok(())
}
