use std::path::PathBuf;
use thiserror::Error;

/// Problems with the render session itself. These abort before any output is
/// produced.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required configuration value '{0}'")]
    MissingValue(&'static str),

    #[error("no templates for platform '{platform}' and language '{language}' (looked for '{}')", .path.display())]
    TemplateFileMissing {
        path: PathBuf,
        platform: String,
        language: String,
    },

    #[error("unable to read template file '{}'", .path.display())]
    TemplateFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed template file: {0}")]
    TemplateFileMalformed(String),

    #[error("templates are for platform '{found_platform}' and language '{found_language}', but the course uses '{platform}' and '{language}'")]
    TemplateMismatch {
        platform: String,
        language: String,
        found_platform: String,
        found_language: String,
    },
}

/// Problems found while turning a course into markup.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    #[error("template key not found: '{key}' (platform '{platform}', language '{language}')")]
    TemplateKeyNotFound {
        key: &'static str,
        platform: String,
        language: String,
    },

    #[error("unknown block kind {kind} on block '{title}'")]
    UnknownBlockKind { kind: i64, title: String },
}
