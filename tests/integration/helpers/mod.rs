use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use tempfile::TempDir;

/// The binary under test.
pub fn binary() -> Command {
    Command::cargo_bin("node-backend-gen").expect("binary should be built")
}

/// A scratch working directory to run `create` in.
pub struct Workspace {
    root: TempDir,
}

pub fn workspace() -> Workspace {
    Workspace {
        root: tempfile::Builder::new()
            .prefix("backend-gen")
            .tempdir()
            .unwrap(),
    }
}

impl Workspace {
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn exists(&self, fragment: &str) -> bool {
        self.path().join(fragment).exists()
    }

    pub fn read(&self, fragment: &str) -> String {
        fs::read_to_string(self.path().join(fragment))
            .unwrap_or_else(|_| panic!("couldn't read {fragment}"))
    }

    /// Number of entries directly under the workspace root.
    pub fn entry_count(&self) -> usize {
        fs::read_dir(self.path()).unwrap().count()
    }
}
