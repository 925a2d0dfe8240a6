use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
}

/// Read one source file (markdown page or stored block JSON).
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write the imported block JSON next to its markdown source
/// (`page.md` -> `page.json`). Returns the path written.
pub fn write_sibling_json(markdown_path: &Path, json: &str) -> Result<PathBuf, IoError> {
    let target = markdown_path.with_extension("json");
    fs::write(&target, json).map_err(IoError::Io)?;
    Ok(target)
}

/// Scan for markdown files under the content root, depth-first, sorted.
pub fn scan_markdown_files(content_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !content_root.exists() {
        return Err(IoError::InvalidContentDir(
            "content directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(content_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
