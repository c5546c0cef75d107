use std::fmt::Display;

use anyhow::Result;
use regex::Regex;

use crate::template::ScaffoldError;

/// Project name as typed by the user. Validated, never rewritten: the same
/// string becomes the directory name, the package name, the database name
/// and the Docker image tag.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: &str) -> Result<Self> {
        let valid_ident = Regex::new(r"^[a-zA-Z0-9-_]+$")?;
        if !valid_ident.is_match(name) {
            return Err(ScaffoldError::InvalidName {
                name: name.to_string(),
            }
            .into());
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ProjectName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
