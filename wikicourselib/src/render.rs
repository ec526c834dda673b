use itertools::Itertools;

use crate::core::{MarkupConverter, RenderConfig};
use crate::render::template::{TemplateDictionary, TemplateKey, TemplateName};

pub mod block;
pub mod header;
pub mod table;
pub mod template;
pub mod timeline;

/// Everything a section renderer needs besides the data it renders.
pub struct RenderContext<'a> {
    templates: &'a TemplateDictionary,
    config: &'a RenderConfig,
    converter: &'a dyn MarkupConverter,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        templates: &'a TemplateDictionary,
        config: &'a RenderConfig,
        converter: &'a dyn MarkupConverter,
    ) -> Self {
        Self {
            templates,
            config,
            converter,
        }
    }

    pub fn template(&self, key: TemplateKey) -> &TemplateName {
        self.templates.get(key)
    }

    pub fn config(&self) -> &RenderConfig {
        self.config
    }

    pub fn converter(&self) -> &dyn MarkupConverter {
        self.converter
    }

    pub fn eol(&self) -> &'static str {
        self.config.eol()
    }

    /// Converter output with its line breaks switched to the document's
    /// terminator.
    pub fn with_eol(&self, text: &str) -> String {
        self.config.line_ending.normalize(text)
    }
}

impl std::fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext")
            .field("templates", &self.templates)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// `{{name|arg1|arg2}}`, or `{{name}}` when there are no arguments.
pub fn template_call<N, I>(name: N, args: I) -> String
where
    N: std::fmt::Display,
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    let args = args.into_iter().map(|arg| format!("|{arg}")).join("");
    format!("{{{{{name}{args}}}}}")
}
