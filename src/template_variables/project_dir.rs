use std::{
    env, fs,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::Result;

use crate::template::ScaffoldError;
use crate::template_variables::ProjectName;

/// Destination directory of the generated project.
#[derive(Debug, PartialEq)]
pub struct ProjectDir(PathBuf);

impl AsRef<Path> for ProjectDir {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

impl Display for ProjectDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.display().fmt(f)
    }
}

impl ProjectDir {
    pub fn new(base_path: &Path, project_name: &ProjectName) -> Self {
        Self(base_path.join(project_name.as_str()))
    }

    /// `<cwd>/<project-name>`
    pub fn from_current_dir(project_name: &ProjectName) -> Result<Self> {
        Ok(Self::new(&env::current_dir()?, project_name))
    }

    /// The target must not exist; checked before any prompt or write.
    pub fn ensure_vacant(&self) -> Result<(), ScaffoldError> {
        if self.0.exists() {
            let name = self
                .0
                .file_name()
                .map_or_else(|| self.0.display().to_string(), |n| n.to_string_lossy().into_owned());
            return Err(ScaffoldError::AlreadyExists { name });
        }
        Ok(())
    }

    pub fn create(&self) -> Result<()> {
        self.ensure_vacant()?;
        fs::create_dir_all(&self.0)?;
        Ok(())
    }
}
