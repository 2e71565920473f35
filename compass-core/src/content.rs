use std::path::{Path, PathBuf};

use walkdir::WalkDir;

#[derive(Debug)]
pub enum ScanError {
    IoError(std::io::Error),
    InvalidPath(PathBuf),
}

impl From<std::io::Error> for ScanError {
    fn from(err: std::io::Error) -> Self {
        ScanError::IoError(err)
    }
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanError::IoError(e) => write!(f, "IO error: {}", e),
            ScanError::InvalidPath(p) => write!(f, "Invalid path: {}", p.display()),
        }
    }
}

impl std::error::Error for ScanError {}

/// Enumerates the content directories an autogeneration directive may
/// reference: the immediate subdirectories of the source tree that
/// contain at least one markdown file.
pub struct ContentScanner {
    source_dir: PathBuf,
}

impl ContentScanner {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            source_dir: path.as_ref().to_path_buf(),
        }
    }

    /// Known content directory names, sorted for deterministic output.
    pub fn scan(&self) -> Result<Vec<String>, ScanError> {
        let mut directories = Vec::new();

        for entry in std::fs::read_dir(&self.source_dir)? {
            let entry = entry?;
            let path = entry.path();

            if !path.is_dir() {
                continue;
            }
            if !has_markdown_files(&path) {
                continue;
            }

            let name = path
                .file_name()
                .ok_or_else(|| ScanError::InvalidPath(path.clone()))?
                .to_string_lossy()
                .to_string();
            directories.push(name);
        }

        directories.sort();
        Ok(directories)
    }
}

fn has_markdown_files<P: AsRef<Path>>(path: P) -> bool {
    WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .any(|p| {
            p.path().is_file() && p.path().extension().map(|ext| ext == "md").unwrap_or(false)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch<P: AsRef<Path>>(path: P) {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, "# Title\n").unwrap();
    }

    #[test]
    fn scan_returns_sorted_markdown_directories() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path().join("essentials/reactivity.md"));
        touch(dir.path().join("component/props.md"));
        touch(dir.path().join("scaling-up/nested/routing.md"));

        let dirs = ContentScanner::new(dir.path()).scan().unwrap();
        assert_eq!(dirs, vec!["component", "essentials", "scaling-up"]);
    }

    #[test]
    fn directories_without_markdown_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path().join("essentials/reactivity.md"));
        std::fs::create_dir_all(dir.path().join("assets")).unwrap();
        std::fs::write(dir.path().join("assets/logo.svg"), "<svg/>").unwrap();
        // Root-level markdown is a page, not a content directory.
        touch(dir.path().join("index.md"));

        let dirs = ContentScanner::new(dir.path()).scan().unwrap();
        assert_eq!(dirs, vec!["essentials"]);
    }

    #[test]
    fn missing_source_dir_is_an_io_error() {
        let result = ContentScanner::new("./does-not-exist").scan();
        assert!(matches!(result, Err(ScanError::IoError(_))));
    }
}
