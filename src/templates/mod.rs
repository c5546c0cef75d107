//! Static template registry: each submodule is one self-contained bundle of
//! folder paths and file payloads. Duplication between the bundles is
//! intentional, there is no inheritance between templates.

mod basic;
mod express;
mod typescript_basic;
mod typescript_express;

use std::borrow::Cow;

use indexmap::IndexMap;

pub type Registry = IndexMap<&'static str, Template>;

/// A named, fixed bundle of folder paths and file contents used to scaffold
/// a new project.
pub struct Template {
    /// Human readable name, shown by `list-templates` and the selector
    pub name: &'static str,
    /// Relative directory paths, created in order
    pub folders: &'static [&'static str],
    /// Relative file path to content source, written in order
    pub files: IndexMap<&'static str, ContentSource>,
}

/// File contents prior to materialization.
pub enum ContentSource {
    Literal(&'static str),
    Generated(fn(&str) -> String),
}

impl ContentSource {
    pub fn resolve(&self, project_name: &str) -> Cow<'static, str> {
        match self {
            Self::Literal(text) => Cow::Borrowed(text),
            Self::Generated(render) => Cow::Owned(render(project_name)),
        }
    }
}

/// All templates, in declaration order. Assembled once at startup; there is
/// no mutation API.
pub fn registry() -> Registry {
    IndexMap::from([
        ("basic", basic::template()),
        ("express", express::template()),
        ("typescript-basic", typescript_basic::template()),
        ("typescript-express", typescript_express::template()),
    ])
}
