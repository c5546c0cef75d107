//! Containerization extension: adds the container build, ignore and compose
//! files and wires `docker:*` scripts into the generated manifest.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use log::info;
use serde_json::{Map, Value};

use crate::template::ScaffoldError;

const DOCKERFILE: &str = r#"FROM node:18-alpine

WORKDIR /app

COPY package*.json ./
RUN npm ci --only=production

COPY . .

EXPOSE 3000

CMD ["npm", "start"]"#;

const DOCKERIGNORE: &str = "node_modules
npm-debug.log
.git
.gitignore
README.md
.env
.env.*
coverage
.nyc_output";

const DOCKER_COMPOSE: &str = r#"version: '3'
services:
  app:
    build: .
    ports:
      - "3000:3000"
    environment:
      - NODE_ENV=production
    restart: unless-stopped"#;

/// Merge the `docker:*` scripts into the already-written manifest and write
/// the three container files. The project tree stays as it is when the
/// manifest cannot be read or parsed.
pub fn apply(project_dir: &Path, project_name: &str) -> Result<()> {
    let manifest_path = project_dir.join("package.json");
    let raw = fs::read_to_string(&manifest_path)
        .map_err(|source| ScaffoldError::ManifestUnreadable { source })?;
    let mut manifest: Value = serde_json::from_str(&raw).map_err(|err| {
        ScaffoldError::ManifestInvalid {
            reason: err.to_string(),
        }
    })?;

    let root = manifest
        .as_object_mut()
        .ok_or_else(|| ScaffoldError::ManifestInvalid {
            reason: "expected a top-level object".to_string(),
        })?;
    let scripts = root
        .entry("scripts")
        .or_insert_with(|| Value::Object(Map::new()));
    let scripts = scripts
        .as_object_mut()
        .ok_or_else(|| ScaffoldError::ManifestInvalid {
            reason: "`scripts` is not an object".to_string(),
        })?;

    scripts.insert(
        "docker:build".to_string(),
        Value::String(format!("docker build -t {project_name} .")),
    );
    scripts.insert(
        "docker:run".to_string(),
        Value::String(format!("docker run -p 3000:3000 {project_name}")),
    );
    scripts.insert(
        "docker:up".to_string(),
        Value::String("docker-compose up".to_string()),
    );
    scripts.insert(
        "docker:down".to_string(),
        Value::String("docker-compose down".to_string()),
    );

    fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)
        .context("cannot rewrite `package.json`")?;
    fs::write(project_dir.join("Dockerfile"), DOCKERFILE)?;
    fs::write(project_dir.join(".dockerignore"), DOCKERIGNORE)?;
    fs::write(project_dir.join("docker-compose.yml"), DOCKER_COMPOSE)?;

    info!("{}", style("Added Docker configuration").dim());
    Ok(())
}
