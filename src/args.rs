use clap::{Args, Parser};
use std::env;

/// Styles from <https://github.com/rust-lang/cargo/blob/master/src/cargo/util/style.rs>
mod style {
    use anstyle::*;
    use clap::builder::Styles;

    const HEADER: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
    const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
    const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

    pub const STYLES: Styles = {
        Styles::styled()
            .header(HEADER)
            .usage(USAGE)
            .literal(LITERAL)
            .placeholder(PLACEHOLDER)
            .error(ERROR)
            .valid(VALID)
            .invalid(INVALID)
            .error(ERROR)
    };
}

mod heading {
    pub const TEMPLATE_SELECTION: &str = "Template Selection";
}

#[derive(Parser)]
#[command(
    name = "node-backend-gen",
    arg_required_else_help(true),
    version,
    about,
    next_line_help(false),
    styles(style::STYLES)
)]
pub enum Cli {
    /// Create a new Node.js backend project
    Create(CreateArgs),

    /// List available templates
    ListTemplates,
}

#[derive(Clone, Debug, Args)]
pub struct CreateArgs {
    /// Directory to create / project name; letters, numbers, hyphens and
    /// underscores only
    #[arg(value_name = "PROJECT_NAME")]
    pub name: String,

    /// Template to use, see `list-templates` for the available keys
    #[arg(long, short, value_parser, value_name = "TEMPLATE", help_heading = heading::TEMPLATE_SELECTION)]
    pub template: Option<String>,

    /// Skip prompts and use defaults
    #[arg(long, short = 'y', action)]
    pub yes: bool,

    /// Include Docker configuration without being asked
    #[arg(long, short, action, help_heading = heading::TEMPLATE_SELECTION)]
    pub docker: bool,
}

/// To get the arguments list from terminal
/// Return : work arguments
pub fn resolve_args() -> Cli {
    Cli::parse_from(env::args())
}
