//! File I/O utilities for round logs.
//!
//! - Reading text files with the UTF-8 BOM stripped
//! - Collecting `.jsonl` files from a directory tree
//! - Ensuring parent directories exist before file writes

use std::path::{Path, PathBuf};

/// Read a text file, dropping a leading UTF-8 BOM if present.
pub fn read_text(path: &Path) -> std::io::Result<String> {
    let mut content = std::fs::read_to_string(path)?;
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Returns `input` itself when it is a file, or every `.jsonl` file below it
/// (sorted by path) when it is a directory. Symlinks to directories inside the
/// tree are skipped.
pub fn collect_jsonl_files(input: &Path) -> std::io::Result<Vec<PathBuf>> {
    if !input.is_dir() {
        return Ok(vec![input.to_path_buf()]);
    }
    let mut files = Vec::new();
    let mut stack = vec![input.to_path_buf()];
    while let Some(d) = stack.pop() {
        for e in std::fs::read_dir(&d)? {
            let e = e?;
            let is_dir = e.file_type()?.is_dir();
            let p = e.path();
            if is_dir {
                stack.push(p);
            } else if p.extension().is_some_and(|ext| ext == "jsonl") {
                files.push(p);
            }
        }
    }
    files.sort();
    Ok(files)
}

/// Ensure parent directory exists for given path, creating if needed.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
/// # use highcard_cli::io_utils::ensure_parent_dir;
///
/// let path = Path::new("output/data/rounds.jsonl");
/// ensure_parent_dir(path).unwrap();
/// // Now "output/data/" directory exists
/// ```
pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
