//! Shared test harness utilities for mddoc crates.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Temporary project directory holding a manifest and its content files.
pub struct DocFixture {
    dir: TempDir,
}

impl DocFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("tempdir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `relative`, creating parent directories as needed.
    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent directory");
        }
        fs::write(&path, contents).expect("write file");
        path
    }

    pub fn mkdir(&self, relative: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        fs::create_dir_all(&path).expect("create directory");
        path
    }

    /// Write a YAML manifest to `relative` listing `contents` in order.
    pub fn manifest(
        &self,
        relative: &str,
        title: &str,
        contents: &[&str],
        output_file: &str,
        image_root_directory: &str,
    ) -> PathBuf {
        self.write(
            relative,
            &manifest_yaml(title, contents, output_file, image_root_directory),
        )
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative)).expect("read file")
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.dir.path().join(relative).exists()
    }
}

impl Default for DocFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a YAML manifest document.
pub fn manifest_yaml(
    title: &str,
    contents: &[&str],
    output_file: &str,
    image_root_directory: &str,
) -> String {
    let mut yaml = format!("title: \"{title}\"\n");
    if contents.is_empty() {
        yaml.push_str("contents: []\n");
    } else {
        yaml.push_str("contents:\n");
    }
    for entry in contents {
        yaml.push_str(&format!("  - \"{entry}\"\n"));
    }
    yaml.push_str(&format!(
        "output_file: \"{output_file}\"\nimage_root_directory: \"{image_root_directory}\"\n"
    ));
    yaml
}
