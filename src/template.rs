//! Project materialization: walks a template descriptor and writes its
//! folders and files under a fresh project root.

use std::fs;
use std::path::{Component, Path};

use anyhow::{bail, Context, Result};
use console::style;
use log::info;
use thiserror::Error;

use crate::template_variables::{ProjectDir, ProjectName};
use crate::templates::Template;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Invalid project name `{name}`. Use only letters, numbers, hyphens, and underscores")]
    InvalidName { name: String },
    #[error("Directory `{name}` already exists")]
    AlreadyExists { name: String },
    #[error("Template `{key}` not found")]
    TemplateNotFound { key: String },
    #[error("Cannot read `package.json`: {source}")]
    ManifestUnreadable {
        #[source]
        source: std::io::Error,
    },
    #[error("`package.json` is not valid JSON: {reason}")]
    ManifestInvalid { reason: String },
}

/// Write the template under the destination: root directory first, then
/// every declared folder, then every file in mapping order. Failures leave
/// whatever was already written in place; there is no rollback.
pub fn create_project(
    destination: &ProjectDir,
    template: &Template,
    project_name: &ProjectName,
) -> Result<()> {
    destination.create()?;

    for folder in template.folders {
        ensure_inside_project(folder)?;
        fs::create_dir_all(destination.as_ref().join(folder))
            .with_context(|| format!("cannot create folder `{folder}`"))?;
        info!("{}", style(format!("Created folder: {folder}")).dim());
    }

    for (path, source) in &template.files {
        ensure_inside_project(path)?;
        let target = destination.as_ref().join(path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("cannot create the parent directory of `{path}`"))?;
        }
        let content = source.resolve(project_name.as_str());
        fs::write(&target, content.as_bytes())
            .with_context(|| format!("cannot write file `{path}`"))?;
        info!("{}", style(format!("Created file: {path}")).dim());
    }

    Ok(())
}

/// Template paths are relative and must stay below the project root.
fn ensure_inside_project(path: &str) -> Result<()> {
    let probe = Path::new(path);
    if probe.is_absolute()
        || probe
            .components()
            .any(|component| matches!(component, Component::ParentDir))
    {
        bail!("template path `{path}` escapes the project root");
    }
    Ok(())
}
