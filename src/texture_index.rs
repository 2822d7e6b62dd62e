//! Filesystem index of texture images.
//!
//! Scans a directory tree once at startup and records every discoverable
//! image file by its base name, so later lookups resolve a logical texture
//! filename to a full path without touching the filesystem again.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File extensions the scanner recognizes as texture images.
const IMAGE_EXTENSIONS: &[&str] = &["png"];

/// A read-only mapping from base filename to full path, built by a single
/// recursive scan.
pub struct TextureIndex {
    files: HashMap<String, PathBuf>,
}

impl TextureIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    /// Recursively scans `root` for image files.
    ///
    /// Duplicate base names in different subdirectories are not an error:
    /// the most recently visited file overwrites earlier ones. A missing or
    /// empty root simply yields an empty index.
    pub fn scan(root: &Path) -> Self {
        let mut index = Self::new();
        index.visit(root);
        index
    }

    fn visit(&mut self, dir: &Path) {
        let Ok(entries) = fs::read_dir(dir) else {
            return;
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                self.visit(&path);
            } else if is_image_file(&path) {
                if let Some(file_name) = path.file_name().and_then(|n| n.to_str()) {
                    self.files.insert(file_name.to_string(), path);
                }
            }
        }
    }

    /// Looks up the full path for a texture filename.
    pub fn get(&self, filename: &str) -> Option<&Path> {
        self.files.get(filename).map(PathBuf::as_path)
    }

    /// Returns the number of indexed files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl Default for TextureIndex {
    fn default() -> Self {
        Self::new()
    }
}

fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    fn touch(path: &Path) {
        let mut file = File::create(path).unwrap();
        file.write_all(b"").unwrap();
    }

    #[test]
    fn test_scan_finds_nested_images() {
        let tmpdir = tempfile::tempdir().unwrap();
        let nested = tmpdir.path().join("blocks").join("stone");
        fs::create_dir_all(&nested).unwrap();

        touch(&tmpdir.path().join("dirt.png"));
        touch(&nested.join("stone.png"));
        touch(&nested.join("notes.txt"));

        let index = TextureIndex::scan(tmpdir.path());
        assert_eq!(index.len(), 2);
        assert!(index.get("dirt.png").is_some());
        assert_eq!(index.get("stone.png").unwrap(), nested.join("stone.png"));
        assert!(index.get("notes.txt").is_none());
    }

    #[test]
    fn test_missing_root_yields_empty_index() {
        let index = TextureIndex::scan(Path::new("/nonexistent/texture/root"));
        assert!(index.is_empty());
        assert!(index.get("stone.png").is_none());
    }

    #[test]
    fn test_duplicate_base_names_keep_one_entry() {
        let tmpdir = tempfile::tempdir().unwrap();
        let a = tmpdir.path().join("a");
        let b = tmpdir.path().join("b");
        fs::create_dir_all(&a).unwrap();
        fs::create_dir_all(&b).unwrap();

        touch(&a.join("stone.png"));
        touch(&b.join("stone.png"));

        // Last visited wins; either way there is exactly one entry and it
        // points at one of the two real files.
        let index = TextureIndex::scan(tmpdir.path());
        assert_eq!(index.len(), 1);
        let resolved = index.get("stone.png").unwrap();
        assert!(resolved == a.join("stone.png") || resolved == b.join("stone.png"));
    }

    #[test]
    fn test_extension_case_insensitive() {
        let tmpdir = tempfile::tempdir().unwrap();
        touch(&tmpdir.path().join("torch.PNG"));

        let index = TextureIndex::scan(tmpdir.path());
        assert!(index.get("torch.PNG").is_some());
    }
}
