use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, instrument, trace};

use crate::error::{ConfigError, RenderError};
use crate::Result;

/// A platform specific markup template name, e.g. `course details`.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TemplateName(String);

impl TemplateName {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for TemplateName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for TemplateName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for TemplateName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for TemplateName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Semantic names the renderers look templates up by.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TemplateKey {
    Course,
    Table,
    TableRow,
    Timeline,
    StartOfWeek,
    EndOfWeek,
}

impl TemplateKey {
    pub const ALL: [TemplateKey; 6] = [
        TemplateKey::Course,
        TemplateKey::Table,
        TemplateKey::TableRow,
        TemplateKey::Timeline,
        TemplateKey::StartOfWeek,
        TemplateKey::EndOfWeek,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateKey::Course => "course",
            TemplateKey::Table => "table",
            TemplateKey::TableRow => "table_row",
            TemplateKey::Timeline => "timeline",
            TemplateKey::StartOfWeek => "start_of_week",
            TemplateKey::EndOfWeek => "end_of_week",
        }
    }
}

impl std::fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Deserialize)]
struct TemplateFile {
    templates: HashMap<String, toml::Value>,
}

/// Template names for one platform and language.
///
/// Every [`TemplateKey`] is checked for when the dictionary is built, so
/// lookups cannot fail once one exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateDictionary {
    platform: String,
    language: String,
    course: TemplateName,
    table: TemplateName,
    table_row: TemplateName,
    timeline: TemplateName,
    start_of_week: TemplateName,
    end_of_week: TemplateName,
}

impl TemplateDictionary {
    /// Loads `<template_dir>/<platform>_<language>.toml`.
    #[instrument(skip(template_dir), fields(dir = %template_dir.display()))]
    pub fn load(template_dir: &Path, platform: &str, language: &str) -> Result<Self> {
        let path = template_dir.join(format!("{platform}_{language}.toml"));
        if !path.is_file() {
            return Err(ConfigError::TemplateFileMissing {
                path,
                platform: platform.to_owned(),
                language: language.to_owned(),
            }
            .into());
        }

        let raw = std::fs::read_to_string(&path).map_err(|source| {
            ConfigError::TemplateFileUnreadable {
                path: path.clone(),
                source,
            }
        })?;

        let dictionary = Self::from_toml(&raw, platform, language)?;
        debug!(path = %path.display(), "loaded templates");
        Ok(dictionary)
    }

    /// Parses a template file's contents.
    ///
    /// ```toml
    /// [templates]
    /// course = "course details"
    /// table = "students table"
    /// ```
    pub fn from_toml(raw: &str, platform: &str, language: &str) -> Result<Self> {
        let file: TemplateFile =
            toml::from_str(raw).map_err(|e| ConfigError::TemplateFileMalformed(e.to_string()))?;

        let mut pairs = Vec::with_capacity(file.templates.len());
        for (key, value) in file.templates {
            match value {
                toml::Value::String(name) => pairs.push((key, name)),
                other => {
                    return Err(ConfigError::TemplateFileMalformed(format!(
                        "template '{key}' must be a string, found {}",
                        other.type_str()
                    ))
                    .into())
                }
            }
        }

        Ok(Self::from_pairs(platform, language, pairs)?)
    }

    pub fn from_pairs<I, K, V>(
        platform: &str,
        language: &str,
        pairs: I,
    ) -> std::result::Result<Self, RenderError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<TemplateName>,
    {
        let mut names: HashMap<String, TemplateName> = pairs
            .into_iter()
            .map(|(key, name)| (key.as_ref().to_owned(), name.into()))
            .collect();

        let mut take = |key: TemplateKey| {
            names
                .remove(key.as_str())
                .ok_or_else(|| RenderError::TemplateKeyNotFound {
                    key: key.as_str(),
                    platform: platform.to_owned(),
                    language: language.to_owned(),
                })
        };

        let dictionary = Self {
            platform: platform.to_owned(),
            language: language.to_owned(),
            course: take(TemplateKey::Course)?,
            table: take(TemplateKey::Table)?,
            table_row: take(TemplateKey::TableRow)?,
            timeline: take(TemplateKey::Timeline)?,
            start_of_week: take(TemplateKey::StartOfWeek)?,
            end_of_week: take(TemplateKey::EndOfWeek)?,
        };

        for unused in names.keys() {
            trace!(key = %unused, "ignoring unknown template key");
        }

        Ok(dictionary)
    }

    pub fn get(&self, key: TemplateKey) -> &TemplateName {
        match key {
            TemplateKey::Course => &self.course,
            TemplateKey::Table => &self.table,
            TemplateKey::TableRow => &self.table_row,
            TemplateKey::Timeline => &self.timeline,
            TemplateKey::StartOfWeek => &self.start_of_week,
            TemplateKey::EndOfWeek => &self.end_of_week,
        }
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn iter(&self) -> impl Iterator<Item = (TemplateKey, &TemplateName)> {
        TemplateKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}
