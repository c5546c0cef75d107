mod app_log;
mod args;
mod docker;
mod interactive;
mod template;
mod template_variables;
mod templates;

use app_log::log_env_init;
use args::{resolve_args, Cli, CreateArgs};
use interactive::{resolve_selection, Preset, Prompt, Terminal};
use template::{create_project, ScaffoldError};
use template_variables::{ProjectDir, ProjectName};
use templates::registry;

use anyhow::Result;
use console::style;
use log::info;

const DEFAULT_TEMPLATE: &str = "basic";

fn main() -> Result<()> {
    log_env_init();
    match resolve_args() {
        Cli::Create(args) => create(&args)?,
        Cli::ListTemplates => list_templates(),
    }
    Ok(())
}

/// Scaffold a new backend project under the current directory.
fn create(args: &CreateArgs) -> Result<()> {
    let project_name = ProjectName::new(&args.name)?;
    let destination = ProjectDir::from_current_dir(&project_name)?;
    destination.ensure_vacant()?;

    let registry = registry();
    let prompt: &dyn Prompt = if args.yes { &Preset } else { &Terminal };
    let preferred = args.template.as_deref().unwrap_or(DEFAULT_TEMPLATE);
    let selection = resolve_selection(&registry, preferred, args.docker, prompt)?;

    let template = registry.get(selection.template_key.as_str()).ok_or_else(|| {
        ScaffoldError::TemplateNotFound {
            key: selection.template_key.clone(),
        }
    })?;

    info!(
        "{}",
        style(format!(
            "Creating project \"{project_name}\" with {} template...",
            template.name
        ))
        .bold()
        .blue()
    );

    create_project(&destination, template, &project_name)?;

    if selection.include_docker {
        docker::apply(destination.as_ref(), project_name.as_str())?;
    }

    info!(
        "✨ {} {}",
        style("Done!").bold().green(),
        style("Project created successfully").bold()
    );
    info!("{}", style("Next steps:").bold().blue());
    info!("  cd {project_name}");
    info!("  npm install");
    info!("  npm run dev");

    Ok(())
}

/// Print each registry key with its display name.
fn list_templates() {
    info!("{}", style("Available templates:").bold().blue());
    for (key, template) in &registry() {
        info!("  {} - {}", style(key).green(), template.name);
    }
}
