use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Select};

use crate::templates::Registry;

/// Input gathering for the selection flow. The materializer is invoked
/// identically whichever implementation produced the answers.
pub trait Prompt {
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize>;
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Asks on the terminal.
pub struct Terminal;

impl Prompt for Terminal {
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize> {
        let chosen = Select::with_theme(&ColorfulTheme::default())
            .items(items)
            .with_prompt(prompt)
            .default(default)
            .interact()?;

        Ok(chosen)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        let answer = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(default)
            .interact()?;

        Ok(answer)
    }
}

/// Answers every question with its default, for `--yes` runs.
pub struct Preset;

impl Prompt for Preset {
    fn select(&self, _prompt: &str, _items: &[String], default: usize) -> Result<usize> {
        Ok(default)
    }

    fn confirm(&self, _prompt: &str, default: bool) -> Result<bool> {
        Ok(default)
    }
}

#[derive(Debug, PartialEq)]
pub struct Selection {
    pub template_key: String,
    pub include_docker: bool,
}

/// Gather the template key and the container choice through the given
/// prompt implementation.
///
/// `preferred` preselects the matching registry entry. An unknown key is
/// passed through untouched so that the registry lookup can report it.
pub fn resolve_selection(
    registry: &Registry,
    preferred: &str,
    docker: bool,
    prompt: &dyn Prompt,
) -> Result<Selection> {
    let template_key = match registry.get_index_of(preferred) {
        Some(default) => {
            let items: Vec<String> = registry
                .iter()
                .map(|(key, template)| format!("{} ({key})", template.name))
                .collect();
            let chosen = prompt.select("Choose a template:", &items, default)?;
            registry
                .get_index(chosen)
                .map_or(preferred, |(key, _)| *key)
                .to_string()
        }
        None => preferred.to_string(),
    };

    let include_docker = if docker {
        true
    } else {
        prompt.confirm("Include Docker configuration?", false)?
    };

    Ok(Selection {
        template_key,
        include_docker,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::registry;

    struct Scripted {
        select: usize,
        confirm: bool,
    }

    impl Prompt for Scripted {
        fn select(&self, _prompt: &str, items: &[String], _default: usize) -> Result<usize> {
            assert!(self.select < items.len());
            Ok(self.select)
        }

        fn confirm(&self, _prompt: &str, _default: bool) -> Result<bool> {
            Ok(self.confirm)
        }
    }

    #[test]
    fn preset_answers_with_defaults() {
        let registry = registry();
        let selection = resolve_selection(&registry, "express", false, &Preset).unwrap();

        assert_eq!(
            selection,
            Selection {
                template_key: "express".to_string(),
                include_docker: false,
            }
        );
    }

    #[test]
    fn unknown_key_passes_through_for_the_lookup_to_report() {
        let registry = registry();
        let selection = resolve_selection(&registry, "nonexistent", false, &Preset).unwrap();

        assert_eq!(selection.template_key, "nonexistent");
    }

    #[test]
    fn answers_win_over_the_preselected_entry() {
        let registry = registry();
        let prompt = Scripted {
            select: 2,
            confirm: true,
        };
        let selection = resolve_selection(&registry, "basic", false, &prompt).unwrap();

        assert_eq!(selection.template_key, "typescript-basic");
        assert!(selection.include_docker);
    }

    #[test]
    fn docker_flag_skips_the_confirmation() {
        let registry = registry();
        let prompt = Scripted {
            select: 0,
            confirm: false,
        };
        let selection = resolve_selection(&registry, "basic", true, &prompt).unwrap();

        assert!(selection.include_docker);
    }
}
