use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::ConfigError;

pub type GlobalRenderConfig = Arc<RenderConfig>;

/// Line terminator placed between sections and rows of a document.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub enum LineEnding {
    /// Bare carriage return, as expected by the dashboard's wiki parser.
    #[default]
    Cr,
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Cr => "\r",
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    /// Rewrites every line break in `text` (`\n`, `\r\n` or `\r`) to this
    /// terminator.
    pub fn normalize(self, text: &str) -> String {
        let unified = text.replace("\r\n", "\n").replace('\r', "\n");
        match self {
            LineEnding::Lf => unified,
            other => unified.replace('\n', other.as_str()),
        }
    }
}

impl std::str::FromStr for LineEnding {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.to_lowercase();
        match s.as_ref() {
            "cr" => Ok(LineEnding::Cr),
            "lf" => Ok(LineEnding::Lf),
            "crlf" => Ok(LineEnding::CrLf),
            _ => Err(format!("unknown line ending '{s}' (expected cr, lf, or crlf)")),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderConfig {
    /// Dashboard the course lives on. Rendered as a flag in the course header.
    pub dashboard_url: String,
    /// Wiki page prefix under which course assignment pages live.
    pub course_prefix: String,
    /// Directory holding `<platform>_<language>.toml` template files.
    pub template_dir: PathBuf,
    pub line_ending: LineEnding,
}

impl RenderConfig {
    pub fn dashboard_url(&self) -> &str {
        &self.dashboard_url
    }

    pub fn course_prefix(&self) -> &str {
        &self.course_prefix
    }

    pub fn template_dir(&self) -> &Path {
        self.template_dir.as_path()
    }

    pub fn template_file(&self, platform: &str, language: &str) -> PathBuf {
        self.template_dir.join(format!("{platform}_{language}.toml"))
    }

    pub fn eol(&self) -> &'static str {
        self.line_ending.as_str()
    }

    /// Path of a course's assignment page on the wiki.
    pub fn assignment_page(&self, slug: &str) -> String {
        format!("{}/{}", self.course_prefix.trim_end_matches('/'), slug)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dashboard_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("dashboard_url"));
        }
        if self.course_prefix.trim().is_empty() {
            return Err(ConfigError::MissingValue("course_prefix"));
        }
        Ok(())
    }
}
