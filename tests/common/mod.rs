#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the brand-audit binary.
#[macro_export]
macro_rules! brand_audit {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("brand-audit"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        self.create_bytes(relative_path, content.as_bytes())
    }

    /// Creates a file with raw bytes, for content that is not valid UTF-8.
    pub fn create_bytes(&self, relative_path: &str, content: &[u8]) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a `.brand-audit.toml` in the fixture root.
    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file(".brand-audit.toml", content)
    }

    /// A small site carrying only the current brand.
    pub fn clean_site() -> Self {
        let fixture = Self::new();
        fixture.create_file(
            "index.html",
            "<h1>Jason's Junk Hauling</h1>\n<p>Fast, reliable junk removal.</p>\n",
        );
        fixture.create_file("css/site.css", "body { color: #F97316; }\n");
        fixture.create_file("README.md", "# Website\n");
        fixture
    }
}
